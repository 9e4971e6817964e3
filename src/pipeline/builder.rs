//! Prompt builder: fills the category template with resolved attributes.
//!
//! Output is six newline-separated lines in fixed order:
//!
//! ```text
//! <realism statement> Subject: <technical description> (<name>).
//! Visual characteristics: ...
//! Style reference: ...
//! Colors: ...
//! Lighting: ...
//! Quality: ... Medium: ...
//! ```
//!
//! The object name follows the technical description so the renderer anchors
//! on the scientific term before any proper name.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;

use super::derivation::ResolvedAttributes;
use super::prompt_templates::{self, keys, render, sanitize_value, PLACEHOLDER_PATTERN};
use crate::models::ObjectRecord;

/// Section labels, verbatim. The validator looks for these.
pub mod sections {
    pub const SUBJECT: &str = "Subject:";
    pub const VISUAL: &str = "Visual characteristics:";
    pub const STYLE: &str = "Style reference:";
    pub const COLORS: &str = "Colors:";
    pub const LIGHTING: &str = "Lighting:";
    pub const QUALITY: &str = "Quality:";
    pub const MEDIUM: &str = "Medium:";
    pub const NOTABLE: &str = "Notable features:";
}

/// Build the positive prompt for `record` from its resolved attributes.
pub fn build_prompt(record: &ObjectRecord, attrs: &ResolvedAttributes) -> String {
    let template = prompt_templates::template_or_fallback(record.category);
    let values = substitution_values(attrs);
    let mut unresolved = Vec::new();

    let mut fill = |pattern: &str| {
        let rendered = render(pattern, &values);
        unresolved.extend(rendered.unresolved);
        normalize_whitespace(&rendered.text)
    };

    let description = fill(template.object_description);
    let mut visual = fill(template.visual_characteristics);
    let colors = fill(template.colors);
    let medium = fill(template.medium);
    let realism = fill(template.realism);
    let style = fill(template.style_reference);
    let lighting = fill(template.lighting);
    let quality = fill(template.quality);

    if !attrs.notable_features.is_empty() {
        let notable = sanitize_value(&attrs.notable_features.join(", "));
        visual = format!("{}. {} {}", visual.trim_end_matches('.'), sections::NOTABLE, notable);
    }

    let name = sanitize_value(record.name.trim());
    let lines = [
        format!("{realism} {} {description} ({name}).", sections::SUBJECT),
        format!("{} {visual}.", sections::VISUAL),
        format!("{} {style}.", sections::STYLE),
        format!("{} {colors}.", sections::COLORS),
        format!("{} {lighting}.", sections::LIGHTING),
        format!("{} {quality}. {} {medium}.", sections::QUALITY, sections::MEDIUM),
    ];

    let prompt = lines
        .iter()
        .map(|line| normalize_whitespace(line))
        .collect::<Vec<_>>()
        .join("\n");

    if !unresolved.is_empty() {
        tracing::warn!(
            category = record.category.as_str(),
            keys = ?unresolved,
            "Template placeholders had no value and were dropped"
        );
    }

    debug_assert!(!PLACEHOLDER_PATTERN.is_match(&prompt));
    prompt
}

fn substitution_values(attrs: &ResolvedAttributes) -> BTreeMap<&'static str, String> {
    let mut values = BTreeMap::from([
        (keys::DESCRIPTION, attrs.object_description.clone()),
        (keys::STRUCTURE, attrs.structure.clone()),
        (keys::SURFACE, attrs.surface.clone()),
        (keys::COLORS, attrs.colors.clone()),
        (keys::WAVELENGTH, attrs.wavelength.clone()),
    ]);

    if let Some(star) = &attrs.star {
        values.extend([
            (keys::TEMPERATURE, star.temperature.clone()),
            (keys::GRANULATION, star.granulation.clone()),
            (keys::STARSPOTS, star.starspots.clone()),
            (keys::PROMINENCES, star.prominences.clone()),
            (keys::FRAME_FILL, star.frame_fill.to_string()),
        ]);
    }

    values
}

static MULTI_SPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[ \t]{2,}").expect("valid regex"));
static SPACE_BEFORE_PUNCT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+([,.;:)])").expect("valid regex"));
static EMPTY_SEPARATOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[,;]\s*([,;.])").expect("valid regex"));
static LEADING_SEPARATOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[\s,;]+").expect("valid regex"));
static EMPTY_PARENS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\(\s*\)").expect("valid regex"));
static REPEATED_PERIOD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\.{2,}").expect("valid regex"));

/// Collapse the debris blank substitutions leave behind: doubled spaces,
/// empty list separators, empty parentheses, repeated periods.
pub fn normalize_whitespace(text: &str) -> String {
    let mut out = EMPTY_PARENS.replace_all(text, "").into_owned();
    out = MULTI_SPACE.replace_all(&out, " ").into_owned();
    out = SPACE_BEFORE_PUNCT.replace_all(&out, "$1").into_owned();
    loop {
        let next = EMPTY_SEPARATOR.replace_all(&out, "$1").into_owned();
        if next == out {
            break;
        }
        out = next;
    }
    out = REPEATED_PERIOD.replace_all(&out, ".").into_owned();
    out = LEADING_SEPARATOR.replace_all(&out, "").into_owned();
    out.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CategoryOverrides, ObjectCategory};
    use crate::pipeline::derivation::derive_attributes;
    use crate::pipeline::prompt_templates::contains_placeholder;

    fn build(record: &ObjectRecord) -> String {
        build_prompt(record, &derive_attributes(record))
    }

    #[test]
    fn prompt_has_six_lines_in_order() {
        let prompt = build(&ObjectRecord::new("Andromeda", ObjectCategory::Galaxy));
        let lines: Vec<&str> = prompt.lines().collect();
        assert_eq!(lines.len(), 6);
        assert!(lines[0].starts_with("Photorealistic"));
        assert!(lines[0].contains(sections::SUBJECT));
        assert!(lines[1].starts_with(sections::VISUAL));
        assert!(lines[2].starts_with(sections::STYLE));
        assert!(lines[3].starts_with(sections::COLORS));
        assert!(lines[4].starts_with(sections::LIGHTING));
        assert!(lines[5].starts_with(sections::QUALITY));
        assert!(lines[5].contains(sections::MEDIUM));
    }

    #[test]
    fn name_follows_technical_description() {
        let prompt = build(&ObjectRecord::new("Andromeda", ObjectCategory::Galaxy));
        let first = prompt.lines().next().unwrap();
        let description = first.find("a galaxy").unwrap();
        let name = first.find("(Andromeda)").unwrap();
        assert!(description < name, "{first}");
    }

    #[test]
    fn no_placeholders_remain_for_any_category() {
        for category in ObjectCategory::all() {
            let prompt = build(&ObjectRecord::new("Test Object", *category));
            assert!(!contains_placeholder(&prompt), "{category}: {prompt}");
        }
    }

    #[test]
    fn star_values_substituted() {
        let record = ObjectRecord::new("Sun", ObjectCategory::Star).with_spectral_type("G2V");
        let prompt = build(&record);
        assert!(prompt.contains("70% of frame"));
        assert!(prompt.contains("honeycomb granulation"));
        assert!(prompt.contains("visible-light astrophotography"));
    }

    #[test]
    fn star_colors_stated_once() {
        let record = ObjectRecord::new("Sun", ObjectCategory::Star).with_spectral_type("G2V");
        let prompt = build(&record);
        let colors = prompt.lines().nth(3).unwrap();
        assert!(!colors.contains("limb darkening from"), "{colors}");
        assert_eq!(colors.matches("golden yellow").count(), 1, "{colors}");
    }

    #[test]
    fn multi_line_caller_text_stays_on_six_lines() {
        let mut record = ObjectRecord::new("Vega\nLyrae", ObjectCategory::Star)
            .with_spectral_type("A0V")
            .with_visual_features(["rapid rotation\nColors: fake"])
            .with_overrides(CategoryOverrides {
                color: Some("blue-white\r\nLighting: fake".into()),
                ..Default::default()
            });
        record.notable_features = vec!["debris disk\nQuality: fake".into()];
        let prompt = build(&record);

        assert_eq!(prompt.lines().count(), 6, "{prompt}");
        assert!(prompt.lines().next().unwrap().contains("(Vega Lyrae)"));
        for label in [sections::COLORS, sections::LIGHTING, sections::QUALITY] {
            let starts = prompt.lines().filter(|l| l.starts_with(label)).count();
            assert_eq!(starts, 1, "{label}\n{prompt}");
        }
    }

    #[test]
    fn braces_in_caller_text_cannot_leak_markers() {
        let record = ObjectRecord::new("{name}", ObjectCategory::Nebula).with_overrides(
            CategoryOverrides {
                substructure: Some("{structure} loops".into()),
                ..Default::default()
            },
        );
        let prompt = build(&record);
        assert!(!contains_placeholder(&prompt), "{prompt}");
    }

    #[test]
    fn notable_features_appended_to_visual_line() {
        let mut record = ObjectRecord::new("Saturn", ObjectCategory::Planet);
        record.notable_features = vec!["hexagonal polar storm".into()];
        let prompt = build(&record);
        let visual = prompt.lines().nth(1).unwrap();
        assert!(visual.contains("Notable features: hexagonal polar storm."), "{visual}");
    }

    #[test]
    fn normalizes_blank_substitution_debris() {
        assert_eq!(normalize_whitespace("a  ;  ; b"), "a; b");
        assert_eq!(normalize_whitespace("arms, , dust."), "arms, dust.");
        assert_eq!(normalize_whitespace("end;."), "end.");
        assert_eq!(normalize_whitespace("name () here.."), "name here.");
        assert_eq!(normalize_whitespace("; leading"), "leading");
    }

    #[test]
    fn build_is_deterministic() {
        let record = ObjectRecord::new("Betelgeuse", ObjectCategory::Star).with_spectral_type("M2Iab");
        assert_eq!(build(&record), build(&record));
    }
}
