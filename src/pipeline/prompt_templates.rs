//! Prompt template registry and placeholder substitution.
//!
//! One `PromptTemplate` per object category plus a fallback for `Unknown`.
//! Patterns carry `{placeholder}` markers that `render` fills from a value map.
//! Templates are static configuration and never change at runtime.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::{Captures, Regex};
use serde::Serialize;

use crate::models::ObjectCategory;

// ═══════════════════════════════════════════════════════════
// Types
// ═══════════════════════════════════════════════════════════

/// Per-category prompt structure. Every pattern may contain placeholders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PromptTemplate {
    pub realism: &'static str,
    pub object_description: &'static str,
    pub visual_characteristics: &'static str,
    pub style_reference: &'static str,
    pub colors: &'static str,
    pub lighting: &'static str,
    pub quality: &'static str,
    /// Carries the `{wavelength}` slot.
    pub medium: &'static str,
}

/// Placeholder keys understood by the templates.
pub mod keys {
    pub const DESCRIPTION: &str = "description";
    pub const STRUCTURE: &str = "structure";
    pub const SURFACE: &str = "surface";
    pub const COLORS: &str = "colors";
    pub const WAVELENGTH: &str = "wavelength";
    pub const TEMPERATURE: &str = "temperature";
    pub const GRANULATION: &str = "granulation";
    pub const STARSPOTS: &str = "starspots";
    pub const PROMINENCES: &str = "prominences";
    pub const FRAME_FILL: &str = "frame_fill";
}

// ═══════════════════════════════════════════════════════════
// Shared phrases
// ═══════════════════════════════════════════════════════════

const QUALITY: &str =
    "ultra-high resolution, sharp focus, fine natural detail, true-to-life photographic realism";

const MEDIUM: &str = "{wavelength} astrophotography from a research-grade space telescope";

const DEEP_SKY_STYLE: &str = "Hubble Space Telescope and James Webb Space Telescope press imagery";

// ═══════════════════════════════════════════════════════════
// Registry
// ═══════════════════════════════════════════════════════════

const FALLBACK_TEMPLATE: PromptTemplate = PromptTemplate {
    realism: "Photorealistic scientific astrophotograph of a real astronomical object.",
    object_description: "{description}",
    visual_characteristics: "{structure}; {surface}; a single isolated object centered in frame against the black of space",
    style_reference: DEEP_SKY_STYLE,
    colors: "{colors}",
    lighting: "natural illumination consistent with the physics of the object",
    quality: QUALITY,
    medium: MEDIUM,
};

/// Template for a category, or `None` when only the fallback applies.
pub fn template_for(category: ObjectCategory) -> Option<&'static PromptTemplate> {
    use ObjectCategory::*;
    let template: &'static PromptTemplate = match category {
        Star => &PromptTemplate {
            realism: "Photorealistic scientific astrophotograph of a real star.",
            object_description: "{description}",
            visual_characteristics: "{structure}; {surface}; granulation: {granulation}; starspots: {starspots}; prominences: {prominences}; a {temperature} photosphere; a single isolated star filling {frame_fill}% of frame, centered in frame",
            style_reference: "Solar Dynamics Observatory and Hubble Space Telescope stellar imagery",
            colors: "{colors}",
            lighting: "self-luminous; the star is the only light source against the black of space",
            quality: QUALITY,
            medium: MEDIUM,
        },
        Galaxy => &PromptTemplate {
            realism: "Photorealistic scientific astrophotograph of a real galaxy.",
            object_description: "{description}",
            visual_characteristics: "{structure}; {surface}; a single isolated galaxy centered in frame against a sparse field of distant background galaxies",
            style_reference: DEEP_SKY_STYLE,
            colors: "{colors}",
            lighting: "self-luminous starlight with dust lanes absorbing light from behind",
            quality: QUALITY,
            medium: MEDIUM,
        },
        BlackHole => &PromptTemplate {
            realism: "Photorealistic scientific visualization of a real black hole based on observational data.",
            object_description: "{description}",
            visual_characteristics: "{structure}; {surface}; gravitational lensing bending the light of the far side of the disk over the shadow; the black hole centered in frame",
            style_reference: "Event Horizon Telescope observations and general-relativistic ray-traced simulations",
            colors: "{colors}",
            lighting: "all light comes from the hot accretion flow; no light escapes the shadow",
            quality: QUALITY,
            medium: MEDIUM,
        },
        Nebula => &PromptTemplate {
            realism: "Photorealistic scientific astrophotograph of a real nebula.",
            object_description: "{description}",
            visual_characteristics: "{structure}; {surface}; naturally translucent gas with depth and layered density; the nebula centered in frame with foreground stars",
            style_reference: DEEP_SKY_STYLE,
            colors: "{colors}",
            lighting: "gas lit from within by embedded hot young stars",
            quality: QUALITY,
            medium: MEDIUM,
        },
        SupernovaRemnant => &PromptTemplate {
            realism: "Photorealistic scientific astrophotograph of a real supernova remnant.",
            object_description: "{description}",
            visual_characteristics: "{structure}; {surface}; an irregular, asymmetric expanding shell centered in frame",
            style_reference: "Hubble Space Telescope and Chandra X-ray Observatory composite imagery",
            colors: "{colors}",
            lighting: "self-luminous shocked gas glowing from the blast wave",
            quality: QUALITY,
            medium: MEDIUM,
        },
        Planet => &PromptTemplate {
            realism: "Photorealistic scientific photograph of a real planet taken by a spacecraft.",
            object_description: "{description}",
            visual_characteristics: "{structure}; {surface}; a single isolated planet centered in frame, filling 80% of frame",
            style_reference: "NASA Voyager, Cassini and Juno spacecraft imagery",
            colors: "{colors}",
            lighting: "sunlight from one side with a soft terminator into night",
            quality: QUALITY,
            medium: MEDIUM,
        },
        Exoplanet => &PromptTemplate {
            realism: "Photorealistic scientific depiction of a real exoplanet consistent with observational data.",
            object_description: "{description}",
            visual_characteristics: "{structure}; {surface}; a single isolated planet centered in frame with its host star's light from the side",
            style_reference: "NASA exoplanet science visualizations grounded in spectroscopic data",
            colors: "{colors}",
            lighting: "lit by its host star from one side, night side in deep shadow",
            quality: QUALITY,
            medium: MEDIUM,
        },
        NeutronStar => &PromptTemplate {
            realism: "Photorealistic scientific visualization of a real neutron star based on observational data.",
            object_description: "{description}",
            visual_characteristics: "{structure}; {surface}; a single isolated compact object centered in frame",
            style_reference: "Chandra X-ray Observatory and Hubble Space Telescope imagery of pulsar wind nebulae",
            colors: "{colors}",
            lighting: "self-luminous thermal and beamed emission",
            quality: QUALITY,
            medium: MEDIUM,
        },
        Quasar => &PromptTemplate {
            realism: "Photorealistic scientific astrophotograph of a real quasar.",
            object_description: "{description}",
            visual_characteristics: "{structure}; {surface}; the quasar core centered in frame against deep space",
            style_reference: DEEP_SKY_STYLE,
            colors: "{colors}",
            lighting: "overwhelming light from the active nucleus",
            quality: QUALITY,
            medium: MEDIUM,
        },
        Comet => &PromptTemplate {
            realism: "Photorealistic scientific astrophotograph of a real comet.",
            object_description: "{description}",
            visual_characteristics: "{structure}; {surface}; a single isolated comet with its nucleus centered in frame and tails pointing away from the Sun",
            style_reference: "professional observatory and Rosetta spacecraft imagery",
            colors: "{colors}",
            lighting: "sunlight scattering through dust and fluorescing gas",
            quality: QUALITY,
            medium: MEDIUM,
        },
        StarCluster => &PromptTemplate {
            realism: "Photorealistic scientific astrophotograph of a real open star cluster.",
            object_description: "{description}",
            visual_characteristics: "{structure}; {surface}; the cluster centered in frame against a dark star field",
            style_reference: DEEP_SKY_STYLE,
            colors: "{colors}",
            lighting: "self-luminous stars with natural diffraction spikes on the brightest members",
            quality: QUALITY,
            medium: MEDIUM,
        },
        Moon => &PromptTemplate {
            realism: "Photorealistic scientific photograph of a real moon taken by a spacecraft.",
            object_description: "{description}",
            visual_characteristics: "{structure}; {surface}; a single isolated moon centered in frame, filling 80% of frame",
            style_reference: "NASA Lunar Reconnaissance Orbiter, Galileo and Cassini imagery",
            colors: "{colors}",
            lighting: "direct sunlight from one side casting long shadows near the terminator",
            quality: QUALITY,
            medium: MEDIUM,
        },
        BrownDwarf => &PromptTemplate {
            realism: "Photorealistic scientific depiction of a real brown dwarf consistent with infrared observations.",
            object_description: "{description}",
            visual_characteristics: "{structure}; {surface}; a single isolated substellar object centered in frame",
            style_reference: "James Webb Space Telescope infrared imagery and atmospheric models",
            colors: "{colors}",
            lighting: "faint self-luminous thermal glow from the interior",
            quality: QUALITY,
            medium: MEDIUM,
        },
        GlobularCluster => &PromptTemplate {
            realism: "Photorealistic scientific astrophotograph of a real globular cluster.",
            object_description: "{description}",
            visual_characteristics: "{structure}; {surface}; the cluster centered in frame, filling 70% of frame",
            style_reference: DEEP_SKY_STYLE,
            colors: "{colors}",
            lighting: "self-luminous stars crowding into a bright core",
            quality: QUALITY,
            medium: MEDIUM,
        },
        DwarfPlanet => &PromptTemplate {
            realism: "Photorealistic scientific photograph of a real dwarf planet taken by a spacecraft.",
            object_description: "{description}",
            visual_characteristics: "{structure}; {surface}; a single isolated world centered in frame, filling 80% of frame",
            style_reference: "NASA New Horizons and Dawn spacecraft imagery",
            colors: "{colors}",
            lighting: "faint, distant sunlight from one side",
            quality: QUALITY,
            medium: MEDIUM,
        },
        WhiteDwarf => &PromptTemplate {
            realism: "Photorealistic scientific astrophotograph of a real white dwarf.",
            object_description: "{description}",
            visual_characteristics: "{structure}; {surface}; a single isolated stellar remnant centered in frame",
            style_reference: "Hubble Space Telescope imagery of stellar remnants",
            colors: "{colors}",
            lighting: "intense self-luminous glow from residual heat",
            quality: QUALITY,
            medium: MEDIUM,
        },
        Supernova => &PromptTemplate {
            realism: "Photorealistic scientific astrophotograph of a real supernova.",
            object_description: "{description}",
            visual_characteristics: "{structure}; {surface}; the explosion centered in frame within its host galaxy",
            style_reference: DEEP_SKY_STYLE,
            colors: "{colors}",
            lighting: "blinding self-luminous explosion light",
            quality: QUALITY,
            medium: MEDIUM,
        },
        Unknown => return None,
    };
    Some(template)
}

/// Template for a category, falling back to the generic template.
pub fn template_or_fallback(category: ObjectCategory) -> &'static PromptTemplate {
    template_for(category).unwrap_or(&FALLBACK_TEMPLATE)
}

pub fn has_template(category: ObjectCategory) -> bool {
    template_for(category).is_some()
}

/// Categories that have a dedicated template.
pub fn categories() -> Vec<ObjectCategory> {
    ObjectCategory::all()
        .iter()
        .copied()
        .filter(|c| has_template(*c))
        .collect()
}

// ═══════════════════════════════════════════════════════════
// Substitution
// ═══════════════════════════════════════════════════════════

/// Placeholder marker: `{lowercase_key}`.
pub static PLACEHOLDER_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{[A-Za-z_][A-Za-z0-9_]*\}").expect("valid regex"));

/// Result of filling one pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rendered {
    pub text: String,
    /// Keys that had no value and were dropped.
    pub unresolved: Vec<String>,
}

/// Fill every `{key}` in `pattern` from `values`.
///
/// Missing keys render as empty text and are reported in `unresolved`.
/// Values are sanitized first, so a value can never introduce a marker or a
/// line break.
pub fn render(pattern: &str, values: &BTreeMap<&str, String>) -> Rendered {
    let mut unresolved = Vec::new();
    let text = PLACEHOLDER_PATTERN
        .replace_all(pattern, |caps: &Captures<'_>| {
            let marker = &caps[0];
            let key = &marker[1..marker.len() - 1];
            match values.get(key) {
                Some(value) => sanitize_value(value),
                None => {
                    unresolved.push(key.to_string());
                    String::new()
                }
            }
        })
        .into_owned();
    Rendered { text, unresolved }
}

static LINE_BREAKS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\r\n]+").expect("valid regex"));

/// Make caller text safe to splice into a single prompt line: braces are
/// removed and line breaks fold to one space.
pub fn sanitize_value(value: &str) -> String {
    LINE_BREAKS
        .replace_all(&value.replace(['{', '}'], ""), " ")
        .into_owned()
}

pub fn contains_placeholder(text: &str) -> bool {
    PLACEHOLDER_PATTERN.is_match(text)
}
