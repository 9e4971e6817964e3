//! Attribute derivation: resolves the visual descriptors of an object.
//!
//! Each attribute is resolved independently through the same priority tiers:
//!
//! 1. explicit caller-supplied value
//! 2. known-object override (matched by name)
//! 3. spectral-class rules (stars only)
//! 4. category default
//!
//! A missing optional input never fails; it falls through to the next tier.

use serde::Serialize;

use super::spectral::{parse_spectral_type, ParsedSpectralType};
use super::tables::{
    self, category_defaults, luminosity_modifier, match_known_object, spectral_profile,
    KnownObject, SpectralProfile, DEFAULT_STAR_PROFILE, EMISSION_LINE_ACTIVITY, FLARE_ACTIVITY,
    FLARE_STAR_INDICATORS,
};
use crate::models::{ObjectCategory, ObjectRecord};

/// Mass above which a black hole is described as supermassive (solar masses).
pub const SUPERMASSIVE_THRESHOLD: f64 = 1.0e5;

// ═══════════════════════════════════════════════════════════
// Types
// ═══════════════════════════════════════════════════════════

/// Star-only descriptors substituted into the star template.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StarDetail {
    pub temperature: String,
    pub granulation: String,
    pub starspots: String,
    pub prominences: String,
    pub frame_fill: u8,
}

/// Which tiers actually contributed, gathered for confidence scoring.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DerivationSignals {
    pub explicit_features: bool,
    pub explicit_color: bool,
    pub explicit_structure: bool,
    /// Name of the matched known object, if any.
    pub famous_match: Option<&'static str>,
    pub spectral: Option<ParsedSpectralType>,
    pub flare_star: bool,
}

/// Flat set of resolved descriptors consumed by the prompt builder.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResolvedAttributes {
    pub object_description: String,
    pub structure: String,
    pub surface: String,
    pub colors: String,
    pub wavelength: String,
    pub star: Option<StarDetail>,
    pub notable_features: Vec<String>,
    /// Literal feature text that drove the result, for auditing.
    pub features_used: Vec<String>,
    pub signals: DerivationSignals,
}

// ═══════════════════════════════════════════════════════════
// Derivation
// ═══════════════════════════════════════════════════════════

/// Resolve all visual attributes for `record`.
pub fn derive_attributes(record: &ObjectRecord) -> ResolvedAttributes {
    let category = record.category;
    let defaults = category_defaults(category);
    let overrides = &record.overrides;

    let spectral = record.spectral_type.as_deref().and_then(parse_spectral_type);
    let known = match_known_object(category, &record.name);
    let visual_features = meaningful_features(&record.visual_features);
    let explicit_features = (!visual_features.is_empty()).then(|| visual_features.join(", "));

    let star = (category == ObjectCategory::Star).then(|| star_detail(spectral.as_ref()));
    let star_spectral = spectral.as_ref().filter(|_| category == ObjectCategory::Star);

    // Structure: explicit substructure > explicit features > known object > default
    let structure = overrides
        .substructure
        .clone()
        .or_else(|| explicit_features.clone())
        .or_else(|| known.map(|k| k.specific_features.to_string()))
        .unwrap_or_else(|| defaults.structure.to_string());

    let surface = overrides
        .surface
        .clone()
        .unwrap_or_else(|| defaults.surface.to_string());

    let colors = overrides
        .color
        .clone()
        .or_else(|| known.and_then(|k| k.colors).map(str::to_string))
        .or_else(|| star_spectral.map(|p| spectral_colors(spectral_profile(p.class))))
        .unwrap_or_else(|| defaults.colors.to_string());

    let wavelength = star_spectral
        .map(|p| spectral_profile(p.class).wavelength)
        .unwrap_or(defaults.wavelength)
        .to_string();

    let mut attrs = ResolvedAttributes {
        object_description: object_description(record, spectral.as_ref()),
        structure,
        surface,
        colors,
        wavelength,
        star,
        notable_features: record.notable_features.clone(),
        features_used: Vec::new(),
        signals: DerivationSignals {
            explicit_features: explicit_features.is_some(),
            explicit_color: overrides.color.is_some(),
            explicit_structure: overrides.substructure.is_some() || overrides.surface.is_some(),
            famous_match: known.map(|k| k.name),
            spectral: spectral.clone(),
            flare_star: false,
        },
    };

    if category == ObjectCategory::Star {
        apply_activity_pass(record, &mut attrs);
    }

    attrs.features_used = features_used(visual_features, known, &attrs);

    tracing::trace!(
        name = %record.name,
        category = category.as_str(),
        famous = ?attrs.signals.famous_match,
        spectral = spectral.is_some(),
        "Attributes derived"
    );

    attrs
}

fn star_detail(spectral: Option<&ParsedSpectralType>) -> StarDetail {
    let profile = spectral
        .map(|p| spectral_profile(p.class))
        .unwrap_or(&DEFAULT_STAR_PROFILE);
    let modifier = spectral.and_then(luminosity_modifier);

    StarDetail {
        temperature: profile.temperature.to_string(),
        granulation: modifier
            .map(|m| m.granulation)
            .unwrap_or(profile.granulation)
            .to_string(),
        starspots: profile.starspots.to_string(),
        prominences: modifier
            .map(|m| m.prominences)
            .unwrap_or(profile.prominences)
            .to_string(),
        frame_fill: modifier.map(|m| m.frame_fill).unwrap_or(profile.frame_fill),
    }
}

fn spectral_colors(profile: &SpectralProfile) -> String {
    format!(
        "{} core fading to {} at the limb, with {} highlights",
        profile.primary_color, profile.limb_color, profile.accent_color
    )
}

/// Flare-star and emission-line additions, applied whatever tier set the
/// prominences.
fn apply_activity_pass(record: &ObjectRecord, attrs: &mut ResolvedAttributes) {
    let lower = record.name.to_lowercase();
    let flare = FLARE_STAR_INDICATORS
        .iter()
        .any(|indicator| lower.contains(indicator));
    let emission = attrs
        .signals
        .spectral
        .as_ref()
        .is_some_and(|p| p.has_peculiarity('e'));

    let Some(star) = attrs.star.as_mut() else {
        return;
    };
    if flare {
        star.prominences = format!("{}, plus {FLARE_ACTIVITY}", star.prominences);
        attrs.signals.flare_star = true;
    }
    if emission {
        star.prominences = format!("{}, with {EMISSION_LINE_ACTIVITY}", star.prominences);
    }
}

/// Technical description: subtype table, then raw subtype, then category.
fn object_description(record: &ObjectRecord, spectral: Option<&ParsedSpectralType>) -> String {
    let category = record.category;

    if let Some(subtype) = record.overrides.subtype_for(category) {
        if let Some(text) = tables::subtype_description(category, subtype) {
            return text.to_string();
        }
        return with_article(&format!(
            "{} {}",
            tables::normalize_subtype(subtype),
            category.label()
        ));
    }

    match category {
        ObjectCategory::Star => match spectral {
            Some(parsed) => {
                let kind = parsed.luminosity.map(|l| l.label()).unwrap_or("star");
                format!(
                    "{} {}-type {} of spectral class {}",
                    article_for(parsed.class.letter()),
                    parsed.class,
                    kind,
                    parsed
                )
            }
            None => "a star".to_string(),
        },
        ObjectCategory::BlackHole => match record.mass {
            Some(mass) if mass >= SUPERMASSIVE_THRESHOLD => {
                "a supermassive black hole at the center of a galaxy".to_string()
            }
            Some(_) => "a stellar-mass black hole".to_string(),
            None => "a black hole".to_string(),
        },
        ObjectCategory::Unknown => record
            .description
            .as_deref()
            .map(str::trim)
            .filter(|d| !d.is_empty())
            .map(str::to_string)
            .unwrap_or_else(|| with_article(category.label())),
        _ => with_article(category.label()),
    }
}

/// Trimmed caller features, skipping entries with no letters or digits.
fn meaningful_features(features: &[String]) -> Vec<String> {
    features
        .iter()
        .map(|f| f.trim())
        .filter(|f| f.chars().any(char::is_alphanumeric))
        .map(str::to_string)
        .collect()
}

fn features_used(
    visual_features: Vec<String>,
    known: Option<&'static KnownObject>,
    attrs: &ResolvedAttributes,
) -> Vec<String> {
    if !visual_features.is_empty() {
        return visual_features;
    }
    if let Some(known) = known {
        return vec![known.specific_features.to_string()];
    }
    if let Some(star) = attrs.star.as_ref().filter(|_| attrs.signals.spectral.is_some()) {
        return vec![
            star.granulation.clone(),
            star.starspots.clone(),
            star.prominences.clone(),
        ];
    }
    vec![attrs.structure.clone(), attrs.surface.clone()]
}

fn with_article(noun: &str) -> String {
    match noun.chars().next() {
        Some(c) if "aeiouAEIOU".contains(c) => format!("an {noun}"),
        _ => format!("a {noun}"),
    }
}

/// Article for a spectral class letter as read aloud ("an M-type", "a G-type").
fn article_for(letter: char) -> &'static str {
    match letter {
        'A' | 'F' | 'L' | 'M' | 'O' => "an",
        _ => "a",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CategoryOverrides;
    use crate::pipeline::tables::{FAMOUS_NEBULAE, SUPERGIANT_MODIFIER};

    #[test]
    fn explicit_features_win_structure() {
        let record = ObjectRecord::new("Eagle Nebula", ObjectCategory::Nebula)
            .with_visual_features(["three pillars", "star-forming globules"]);
        let attrs = derive_attributes(&record);
        assert_eq!(attrs.structure, "three pillars, star-forming globules");
        assert!(attrs.signals.explicit_features);
        assert_eq!(attrs.features_used, vec!["three pillars", "star-forming globules"]);
    }

    #[test]
    fn punctuation_only_features_are_not_explicit() {
        let record = ObjectRecord::new("Anonymous", ObjectCategory::Nebula)
            .with_visual_features([", ;", "  "]);
        let attrs = derive_attributes(&record);
        let defaults = category_defaults(ObjectCategory::Nebula);
        assert!(!attrs.signals.explicit_features);
        assert_eq!(attrs.structure, defaults.structure);
        assert_eq!(attrs.features_used, vec![defaults.structure, defaults.surface]);
    }

    #[test]
    fn blank_entries_dropped_from_explicit_features() {
        let record = ObjectRecord::new("Anonymous", ObjectCategory::Nebula)
            .with_visual_features(["", "  dark lanes ", "."]);
        let attrs = derive_attributes(&record);
        assert!(attrs.signals.explicit_features);
        assert_eq!(attrs.structure, "dark lanes");
        assert_eq!(attrs.features_used, vec!["dark lanes"]);
    }

    #[test]
    fn known_object_supplies_structure() {
        let record = ObjectRecord::new("Eagle Nebula", ObjectCategory::Nebula);
        let attrs = derive_attributes(&record);
        assert_eq!(attrs.structure, FAMOUS_NEBULAE[0].specific_features);
        assert_eq!(attrs.signals.famous_match, Some("Eagle Nebula (M16)"));
        assert!(!attrs.signals.explicit_features);
    }

    #[test]
    fn explicit_color_beats_known_object_color() {
        let record = ObjectRecord::new("Eagle Nebula", ObjectCategory::Nebula).with_overrides(
            CategoryOverrides {
                color: Some("monochrome silver".into()),
                ..Default::default()
            },
        );
        let attrs = derive_attributes(&record);
        assert_eq!(attrs.colors, "monochrome silver");
        assert!(attrs.signals.explicit_color);
    }

    #[test]
    fn spectral_rules_drive_star_detail() {
        let record = ObjectRecord::new("Sun", ObjectCategory::Star).with_spectral_type("G2V");
        let attrs = derive_attributes(&record);
        let star = attrs.star.unwrap();
        assert_eq!(star.granulation, "distinct honeycomb granulation of convection cells");
        assert_eq!(star.frame_fill, 70);
        assert!(attrs.colors.starts_with("golden yellow core"));
        assert_eq!(attrs.wavelength, "visible-light");
    }

    #[test]
    fn supergiant_modifies_granulation_and_prominences() {
        let record = ObjectRecord::new("Betelgeuse", ObjectCategory::Star).with_spectral_type("M2Iab");
        let attrs = derive_attributes(&record);
        let star = attrs.star.unwrap();
        assert_eq!(star.granulation, SUPERGIANT_MODIFIER.granulation);
        assert_eq!(star.prominences, SUPERGIANT_MODIFIER.prominences);
        assert_eq!(star.frame_fill, 85);
        assert!(attrs.object_description.contains("supergiant"));
    }

    #[test]
    fn star_without_spectral_type_uses_defaults() {
        let record = ObjectRecord::new("Nameless", ObjectCategory::Star).with_spectral_type("??");
        let attrs = derive_attributes(&record);
        assert!(attrs.signals.spectral.is_none());
        assert_eq!(attrs.star.unwrap().granulation, DEFAULT_STAR_PROFILE.granulation);
        assert_eq!(attrs.colors, category_defaults(ObjectCategory::Star).colors);
    }

    #[test]
    fn flare_indicator_appends_activity() {
        let record =
            ObjectRecord::new("Proxima Centauri", ObjectCategory::Star).with_spectral_type("M5.5Ve");
        let attrs = derive_attributes(&record);
        assert!(attrs.signals.flare_star);
        let prominences = attrs.star.unwrap().prominences;
        assert!(prominences.contains(FLARE_ACTIVITY));
        assert!(prominences.contains(EMISSION_LINE_ACTIVITY));
    }

    #[test]
    fn flare_indicator_ignored_outside_stars() {
        let record = ObjectRecord::new("Wolf 359 b", ObjectCategory::Exoplanet);
        let attrs = derive_attributes(&record);
        assert!(!attrs.signals.flare_star);
        assert!(attrs.star.is_none());
    }

    #[test]
    fn spectral_type_on_non_star_does_not_derive_colors() {
        let record = ObjectRecord::new("Luhman 16", ObjectCategory::BrownDwarf).with_spectral_type("L7.5");
        let attrs = derive_attributes(&record);
        assert!(attrs.signals.spectral.is_some());
        assert_eq!(attrs.colors, category_defaults(ObjectCategory::BrownDwarf).colors);
    }

    #[test]
    fn subtype_drives_description() {
        let record = ObjectRecord::new("NGC 1300", ObjectCategory::Galaxy).with_overrides(
            CategoryOverrides {
                galaxy_type: Some("Barred Spiral".into()),
                ..Default::default()
            },
        );
        let attrs = derive_attributes(&record);
        assert!(attrs.object_description.starts_with("a barred spiral galaxy"));
    }

    #[test]
    fn unknown_subtype_text_is_used_verbatim() {
        let record = ObjectRecord::new("Hoag's Object", ObjectCategory::Galaxy).with_overrides(
            CategoryOverrides {
                galaxy_type: Some("ring".into()),
                ..Default::default()
            },
        );
        assert_eq!(derive_attributes(&record).object_description, "a ring galaxy");
    }

    #[test]
    fn black_hole_mass_selects_description() {
        let big = ObjectRecord::new("Some AGN", ObjectCategory::BlackHole).with_mass(4.0e6);
        assert!(derive_attributes(&big).object_description.contains("supermassive"));
        let small = ObjectRecord::new("Some XRB", ObjectCategory::BlackHole).with_mass(15.0);
        assert!(derive_attributes(&small).object_description.contains("stellar-mass"));
    }

    #[test]
    fn unknown_category_uses_defaults() {
        let record = ObjectRecord::new("XYZ-001", ObjectCategory::Unknown);
        let attrs = derive_attributes(&record);
        let defaults = category_defaults(ObjectCategory::Unknown);
        assert_eq!(attrs.structure, defaults.structure);
        assert_eq!(attrs.object_description, "a celestial object");
        assert_eq!(attrs.features_used, vec![defaults.structure, defaults.surface]);
    }

    #[test]
    fn article_follows_spoken_letter() {
        let record = ObjectRecord::new("Rigel", ObjectCategory::Star).with_spectral_type("B8Ia");
        assert!(derive_attributes(&record).object_description.starts_with("a B-type"));
        let record = ObjectRecord::new("Antares", ObjectCategory::Star).with_spectral_type("M1.5Iab");
        assert!(derive_attributes(&record).object_description.starts_with("an M-type"));
    }
}
