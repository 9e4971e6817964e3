use serde::Serialize;

use crate::models::{FeatureSource, ObjectCategory};

/// Confidence thresholds used for reporting and batch rollups
pub mod thresholds {
    /// Below this: most of the prompt was inferred
    pub const LOW: f64 = 0.50;

    /// At or above this: prompt is driven by caller or catalog data
    pub const HIGH: f64 = 0.80;
}

/// Factor weights. They sum to 1.00.
pub mod weights {
    pub const HAS_TEMPLATE: f64 = 0.15;
    pub const EXPLICIT_FEATURES: f64 = 0.25;
    pub const SPECTRAL_TYPE: f64 = 0.15;
    pub const FAMOUS_OBJECT: f64 = 0.20;
    pub const PASSES_VALIDATION: f64 = 0.10;
    pub const EXPLICIT_COLOR: f64 = 0.08;
    pub const EXPLICIT_STRUCTURE: f64 = 0.07;
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ConfidenceFactors {
    pub has_template: bool,
    pub has_explicit_features: bool,
    pub has_spectral_type: bool,
    pub is_famous_object: bool,
    pub passes_validation: bool,
    pub has_explicit_color: bool,
    pub has_explicit_structure: bool,
}

impl ConfidenceFactors {
    /// Unrounded weighted sum of the active factors.
    pub fn weighted_sum(&self) -> f64 {
        [
            (self.has_template, weights::HAS_TEMPLATE),
            (self.has_explicit_features, weights::EXPLICIT_FEATURES),
            (self.has_spectral_type, weights::SPECTRAL_TYPE),
            (self.is_famous_object, weights::FAMOUS_OBJECT),
            (self.passes_validation, weights::PASSES_VALIDATION),
            (self.has_explicit_color, weights::EXPLICIT_COLOR),
            (self.has_explicit_structure, weights::EXPLICIT_STRUCTURE),
        ]
        .iter()
        .filter(|(active, _)| *active)
        .map(|(_, weight)| weight)
        .sum()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PromptConfidence {
    /// Rounded to two decimals, always within [0, 1].
    pub score: f64,
    pub factors: ConfidenceFactors,
    pub feature_source: FeatureSource,
    pub recommendations: Vec<String>,
}

impl PromptConfidence {
    pub fn is_low(&self) -> bool {
        self.score < thresholds::LOW
    }

    pub fn is_high(&self) -> bool {
        self.score >= thresholds::HIGH
    }
}

/// Score a compilation from its factor set.
///
/// `validation_warnings` is only used to word the recommendation; the
/// validation factor itself comes from `factors.passes_validation`.
pub fn score_confidence(
    factors: ConfidenceFactors,
    category: ObjectCategory,
    validation_warnings: usize,
) -> PromptConfidence {
    let score = round2(factors.weighted_sum()).clamp(0.0, 1.0);

    PromptConfidence {
        score,
        factors,
        feature_source: feature_source(&factors, category),
        recommendations: recommendations(&factors, category, validation_warnings),
    }
}

/// Provenance label: explicit > famous > spectral (stars only) > template > default.
pub fn feature_source(factors: &ConfidenceFactors, category: ObjectCategory) -> FeatureSource {
    if factors.has_explicit_features {
        FeatureSource::Explicit
    } else if factors.is_famous_object {
        FeatureSource::Famous
    } else if factors.has_spectral_type && category == ObjectCategory::Star {
        FeatureSource::Spectral
    } else if factors.has_template {
        FeatureSource::Template
    } else {
        FeatureSource::Default
    }
}

fn recommendations(
    factors: &ConfidenceFactors,
    category: ObjectCategory,
    validation_warnings: usize,
) -> Vec<String> {
    let mut recs = Vec::new();

    if !factors.has_explicit_features && !factors.is_famous_object {
        recs.push("Add explicit visual features".to_string());
    }
    if category == ObjectCategory::Star && !factors.has_spectral_type {
        recs.push("Add spectral type for stars".to_string());
    }
    if !factors.passes_validation {
        let n = validation_warnings.max(1);
        recs.push(format!(
            "Fix {n} validation warning{}",
            if n == 1 { "" } else { "s" }
        ));
    }
    if !factors.has_explicit_color {
        recs.push("Add color description".to_string());
    }
    if !factors.has_explicit_structure && !factors.has_explicit_features {
        recs.push("Add structure or surface description".to_string());
    }

    recs
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn all_true() -> ConfidenceFactors {
        ConfidenceFactors {
            has_template: true,
            has_explicit_features: true,
            has_spectral_type: true,
            is_famous_object: true,
            passes_validation: true,
            has_explicit_color: true,
            has_explicit_structure: true,
        }
    }

    #[test]
    fn every_factor_combination_scores_its_rounded_weight_sum() {
        let table = [
            weights::HAS_TEMPLATE,
            weights::EXPLICIT_FEATURES,
            weights::SPECTRAL_TYPE,
            weights::FAMOUS_OBJECT,
            weights::PASSES_VALIDATION,
            weights::EXPLICIT_COLOR,
            weights::EXPLICIT_STRUCTURE,
        ];
        for mask in 0u8..128 {
            let bit = |i: u8| mask & (1 << i) != 0;
            let factors = ConfidenceFactors {
                has_template: bit(0),
                has_explicit_features: bit(1),
                has_spectral_type: bit(2),
                is_famous_object: bit(3),
                passes_validation: bit(4),
                has_explicit_color: bit(5),
                has_explicit_structure: bit(6),
            };
            let expected: f64 = (0u8..7).filter(|i| bit(*i)).map(|i| table[i as usize]).sum();
            let score = score_confidence(factors, ObjectCategory::Galaxy, 0).score;
            assert_eq!(score, (expected * 100.0).round() / 100.0, "mask {mask:07b}");
            assert!((0.0..=1.0).contains(&score), "mask {mask:07b}: {score}");
        }
    }

    #[test]
    fn weights_sum_to_one() {
        let c = score_confidence(all_true(), ObjectCategory::Star, 0);
        assert_eq!(c.score, 1.0);
    }

    #[test]
    fn no_factors_scores_zero() {
        let c = score_confidence(ConfidenceFactors::default(), ObjectCategory::Unknown, 0);
        assert_eq!(c.score, 0.0);
        assert_eq!(c.feature_source, FeatureSource::Default);
    }

    #[test]
    fn template_and_validation_only() {
        let factors = ConfidenceFactors {
            has_template: true,
            passes_validation: true,
            ..Default::default()
        };
        let c = score_confidence(factors, ObjectCategory::Galaxy, 0);
        assert_eq!(c.score, 0.25);
        assert_eq!(c.feature_source, FeatureSource::Template);
    }

    #[test]
    fn star_with_spectral_type() {
        let factors = ConfidenceFactors {
            has_template: true,
            has_spectral_type: true,
            ..Default::default()
        };
        let c = score_confidence(factors, ObjectCategory::Star, 1);
        assert_eq!(c.score, 0.30);
        assert_eq!(c.feature_source, FeatureSource::Spectral);
        assert!(c.recommendations.contains(&"Fix 1 validation warning".to_string()));
    }

    #[test]
    fn spectral_source_only_for_stars() {
        let factors = ConfidenceFactors {
            has_template: true,
            has_spectral_type: true,
            ..Default::default()
        };
        let c = score_confidence(factors, ObjectCategory::BrownDwarf, 0);
        assert_eq!(c.feature_source, FeatureSource::Template);
        // The weight still counts.
        assert_eq!(c.score, 0.30);
    }

    #[test]
    fn explicit_outranks_everything() {
        let c = score_confidence(all_true(), ObjectCategory::Nebula, 0);
        assert_eq!(c.feature_source, FeatureSource::Explicit);

        let famous = ConfidenceFactors {
            has_explicit_features: false,
            ..all_true()
        };
        let c = score_confidence(famous, ObjectCategory::Nebula, 0);
        assert_eq!(c.feature_source, FeatureSource::Famous);
    }

    #[test]
    fn score_is_rounded_to_two_decimals() {
        let factors = ConfidenceFactors {
            has_explicit_color: true,
            has_explicit_structure: true,
            has_template: true,
            ..Default::default()
        };
        let c = score_confidence(factors, ObjectCategory::Planet, 0);
        assert_eq!(c.score, 0.30);
        assert_eq!(c.score, (c.score * 100.0).round() / 100.0);
    }

    #[test]
    fn recommendations_reflect_missing_inputs() {
        let c = score_confidence(ConfidenceFactors::default(), ObjectCategory::Star, 3);
        assert!(c.recommendations.contains(&"Add explicit visual features".to_string()));
        assert!(c.recommendations.contains(&"Add spectral type for stars".to_string()));
        assert!(c.recommendations.contains(&"Fix 3 validation warnings".to_string()));
        assert!(c.recommendations.contains(&"Add color description".to_string()));

        let c = score_confidence(all_true(), ObjectCategory::Star, 0);
        assert!(c.recommendations.is_empty());
    }

    #[test]
    fn threshold_helpers() {
        let low = score_confidence(ConfidenceFactors::default(), ObjectCategory::Moon, 0);
        assert!(low.is_low());
        let high = score_confidence(all_true(), ObjectCategory::Moon, 0);
        assert!(high.is_high());
    }
}
