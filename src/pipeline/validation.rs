//! Structural and content checks over a composed positive prompt.
//!
//! Pure: reads the prompt text and static tables, never mutates input.

use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use super::builder::sections;

/// Phrases known to push the image generator toward diagrams, eclipse
/// imagery, or painterly output. Matched case-insensitively.
pub const TRIGGER_PHRASES: &[&str] = &[
    "diagram",
    "infographic",
    "schematic",
    "cross-section",
    "cutaway",
    "labeled",
    "annotated",
    "illustration",
    "illustrated",
    "artist's impression",
    "artist's concept",
    "artist impression",
    "artistic",
    "concept art",
    "cartoon",
    "stylized",
    "painting",
    "sketch",
    "drawing",
    "fantasy",
    "sci-fi",
    "science fiction",
    "eclipse",
    "solar corona",
    "corona ring",
    "lens flare",
    "3d render",
    "clip art",
    "vector art",
];

/// Realism statement marker.
pub const REALISM_MARKER: &str = "photorealistic";

/// Literal frame-composition phrases.
pub const FRAME_PHRASES: &[&str] = &["centered in frame", "single isolated"];

static FRAME_FILL_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\b\d{1,3}% of frame\b").expect("valid regex"));

/// Outcome of validating one prompt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationReport {
    pub valid: bool,
    pub warnings: Vec<String>,
}

/// Check `prompt` for trigger phrases and required structure.
pub fn validate_prompt(prompt: &str) -> ValidationReport {
    let lower = prompt.to_lowercase();
    let mut warnings = Vec::new();

    for phrase in TRIGGER_PHRASES {
        if lower.contains(phrase) {
            warnings.push(format!(
                "Trigger phrase '{phrase}' may produce non-photographic output"
            ));
        }
    }

    if !lower.contains(REALISM_MARKER) {
        warnings.push("Missing realism statement".to_string());
    }

    if !has_section(prompt, sections::QUALITY) && !has_section(prompt, sections::STYLE) {
        warnings.push("Missing both quality marker and style reference".to_string());
    }

    let framed = FRAME_PHRASES.iter().any(|p| lower.contains(p)) || FRAME_FILL_TOKEN.is_match(prompt);
    if !framed {
        warnings.push("Missing frame composition phrase".to_string());
    }

    if !has_section(prompt, sections::COLORS) {
        warnings.push("Missing color section".to_string());
    }

    ValidationReport {
        valid: warnings.is_empty(),
        warnings,
    }
}

/// Section markers only count at the start of a line.
fn has_section(prompt: &str, label: &str) -> bool {
    prompt.lines().any(|line| line.trim_start().starts_with(label))
}
