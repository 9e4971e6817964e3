//! Prompt compiler: one object record in, one compiled prompt out.
//!
//! Runs derive → build → negative → validate → score. Compilation itself is
//! pure; the only side effect is the optional append to the generation log.

use std::sync::Arc;
use std::time::Instant;

use chrono::Utc;
use serde::Serialize;
use uuid::Uuid;

use super::builder::build_prompt;
use super::confidence::{score_confidence, ConfidenceFactors, PromptConfidence};
use super::derivation::{derive_attributes, ResolvedAttributes};
use super::generation_log::{GenerationLog, GenerationLogEntry};
use super::negative::get_negative_prompt;
use super::prompt_templates::has_template;
use super::validation::{validate_prompt, ValidationReport};
use crate::config::CompilerConfig;
use crate::error::CompileError;
use crate::models::{ObjectCategory, ObjectRecord};

/// Everything produced for one object.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompiledPrompt {
    pub object_id: String,
    pub object_name: String,
    pub category: ObjectCategory,
    pub prompt: String,
    pub negative_prompt: String,
    pub validation: ValidationReport,
    pub confidence: PromptConfidence,
    pub features_used: Vec<String>,
    pub duration_ms: f64,
}

impl CompiledPrompt {
    pub fn is_valid(&self) -> bool {
        self.validation.valid
    }
}

pub struct PromptCompiler {
    config: CompilerConfig,
    log: Option<Arc<GenerationLog>>,
}

impl Default for PromptCompiler {
    fn default() -> Self {
        Self::new(CompilerConfig::default())
    }
}

impl PromptCompiler {
    /// Compiler with its own generation log when `config.log_compilations` is set.
    pub fn new(config: CompilerConfig) -> Self {
        let log = config
            .log_compilations
            .then(|| Arc::new(GenerationLog::new(config.log_capacity)));
        Self { config, log }
    }

    /// Compiler appending to a log shared with other owners.
    pub fn with_log(config: CompilerConfig, log: Arc<GenerationLog>) -> Self {
        Self {
            config,
            log: Some(log),
        }
    }

    /// Compiler that never logs.
    pub fn without_log(config: CompilerConfig) -> Self {
        Self { config, log: None }
    }

    pub fn config(&self) -> &CompilerConfig {
        &self.config
    }

    pub fn log(&self) -> Option<&Arc<GenerationLog>> {
        self.log.as_ref()
    }

    /// Compile one record. Never fails: missing inputs fall back to defaults.
    pub fn compile(&self, record: &ObjectRecord) -> CompiledPrompt {
        let start = Instant::now();

        let attrs = derive_attributes(record);
        let prompt = build_prompt(record, &attrs);
        let negative_prompt =
            get_negative_prompt(record.category, record.overrides.subtype_for(record.category));
        let validation = validate_prompt(&prompt);
        let confidence = score_confidence(
            confidence_factors(record.category, &attrs, &validation),
            record.category,
            validation.warnings.len(),
        );

        if !validation.valid {
            tracing::warn!(
                name = %record.name,
                category = record.category.as_str(),
                warning_count = validation.warnings.len(),
                "Prompt validation warnings"
            );
        }

        let duration_ms = start.elapsed().as_secs_f64() * 1000.0;
        let low = self.is_low_confidence(&confidence);
        let high = self.is_high_confidence(&confidence);
        tracing::debug!(
            name = %record.name,
            category = record.category.as_str(),
            source = confidence.feature_source.as_str(),
            score = confidence.score,
            low,
            high,
            duration_ms,
            "Prompt compiled"
        );

        CompiledPrompt {
            object_id: record.log_key().to_string(),
            object_name: record.name.clone(),
            category: record.category,
            prompt,
            negative_prompt,
            validation,
            confidence,
            features_used: attrs.features_used,
            duration_ms,
        }
    }

    /// Compile and append the result to the generation log, if one is attached.
    pub fn compile_and_log(&self, record: &ObjectRecord) -> Result<CompiledPrompt, CompileError> {
        let compiled = self.compile(record);
        self.record(&compiled)?;
        Ok(compiled)
    }

    /// Append an already compiled prompt to the generation log, if attached.
    pub fn record(&self, compiled: &CompiledPrompt) -> Result<(), CompileError> {
        match &self.log {
            Some(log) => log.append(log_entry(compiled)),
            None => Ok(()),
        }
    }

    /// Whether `confidence` is at or above the configured high threshold.
    pub fn is_high_confidence(&self, confidence: &PromptConfidence) -> bool {
        confidence.score >= self.config.high_confidence_threshold
    }

    /// Whether `confidence` is below the configured low threshold.
    pub fn is_low_confidence(&self, confidence: &PromptConfidence) -> bool {
        confidence.score < self.config.low_confidence_threshold
    }
}

fn confidence_factors(
    category: ObjectCategory,
    attrs: &ResolvedAttributes,
    validation: &ValidationReport,
) -> ConfidenceFactors {
    let signals = &attrs.signals;
    ConfidenceFactors {
        has_template: has_template(category),
        has_explicit_features: signals.explicit_features,
        has_spectral_type: signals.spectral.is_some(),
        is_famous_object: signals.famous_match.is_some(),
        passes_validation: validation.valid,
        has_explicit_color: signals.explicit_color,
        has_explicit_structure: signals.explicit_structure,
    }
}

fn log_entry(compiled: &CompiledPrompt) -> GenerationLogEntry {
    GenerationLogEntry {
        id: Uuid::new_v4(),
        timestamp: Utc::now(),
        object_id: compiled.object_id.clone(),
        object_name: compiled.object_name.clone(),
        category: compiled.category,
        confidence: compiled.confidence.score,
        prompt_length: compiled.prompt.chars().count(),
        warnings: compiled.validation.warnings.clone(),
        feature_source: compiled.confidence.feature_source,
        features_used: compiled.features_used.clone(),
        duration_ms: compiled.duration_ms,
    }
}
