//! Batch orchestration: compile a collection, collect per-object rows and a
//! statistics rollup.
//!
//! A failing object never halts the batch. Its row carries the error text and
//! the remaining objects are still processed, in input order.

use std::collections::BTreeMap;
use std::time::Instant;

use serde::Serialize;

use super::compiler::{CompiledPrompt, PromptCompiler};
use super::confidence::PromptConfidence;
use crate::models::{CatalogObject, FeatureSource, ObjectCategory, ObjectRecord};

// ═══════════════════════════════════════════════════════════
// Types
// ═══════════════════════════════════════════════════════════

/// One row per input object.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BatchResult {
    pub index: usize,
    pub object_id: String,
    pub object_name: String,
    pub category: ObjectCategory,
    pub prompt: String,
    pub negative_prompt: String,
    pub valid: bool,
    pub warnings: Vec<String>,
    /// Absent when the object could not be compiled at all.
    pub confidence: Option<PromptConfidence>,
    pub error: Option<String>,
}

impl BatchResult {
    fn compiled(index: usize, compiled: CompiledPrompt, error: Option<String>) -> Self {
        Self {
            index,
            object_id: compiled.object_id,
            object_name: compiled.object_name,
            category: compiled.category,
            prompt: compiled.prompt,
            negative_prompt: compiled.negative_prompt,
            valid: compiled.validation.valid,
            warnings: compiled.validation.warnings,
            confidence: Some(compiled.confidence),
            error,
        }
    }

    fn failed(index: usize, name: String, category: ObjectCategory, error: String) -> Self {
        Self {
            index,
            object_id: name.clone(),
            object_name: name,
            category,
            prompt: String::new(),
            negative_prompt: String::new(),
            valid: false,
            warnings: Vec::new(),
            confidence: None,
            error: Some(error),
        }
    }

    pub fn is_failed(&self) -> bool {
        self.error.is_some()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ConfidenceDistribution {
    pub mean: f64,
    pub min: f64,
    pub max: f64,
    pub by_feature_source: BTreeMap<FeatureSource, usize>,
    pub below_low: usize,
    pub at_or_above_high: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct BatchStatistics {
    pub total: usize,
    pub valid: usize,
    pub failed: usize,
    pub with_warnings: usize,
    pub validity_rate: f64,
    pub by_category: BTreeMap<ObjectCategory, usize>,
    pub confidence: ConfidenceDistribution,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct BatchReport {
    pub results: Vec<BatchResult>,
    pub statistics: BatchStatistics,
}

/// Progress notification, emitted before each object is compiled.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BatchProgress {
    pub completed: usize,
    pub total: usize,
    pub current_name: String,
}

// ═══════════════════════════════════════════════════════════
// Orchestrator
// ═══════════════════════════════════════════════════════════

pub struct BatchOrchestrator {
    compiler: PromptCompiler,
}

impl BatchOrchestrator {
    pub fn new(compiler: PromptCompiler) -> Self {
        Self { compiler }
    }

    pub fn compiler(&self) -> &PromptCompiler {
        &self.compiler
    }

    /// Compile every record. Never returns an error.
    pub fn run(&self, records: &[ObjectRecord]) -> BatchReport {
        self.run_with_progress(records, None)
    }

    pub fn run_with_progress(
        &self,
        records: &[ObjectRecord],
        progress_fn: Option<&dyn Fn(BatchProgress)>,
    ) -> BatchReport {
        let start = Instant::now();
        tracing::info!(count = records.len(), "Batch compilation started");

        let results: Vec<BatchResult> = records
            .iter()
            .enumerate()
            .map(|(index, record)| {
                if let Some(progress) = progress_fn {
                    progress(BatchProgress {
                        completed: index,
                        total: records.len(),
                        current_name: record.name.clone(),
                    });
                }
                self.compile_row(index, record)
            })
            .collect();

        self.finish(results, start)
    }

    /// Normalize raw catalog objects, then compile them. Objects that fail
    /// normalization become failed rows.
    pub fn run_catalog(&self, objects: Vec<CatalogObject>) -> BatchReport {
        let start = Instant::now();
        tracing::info!(count = objects.len(), "Catalog batch compilation started");

        let results: Vec<BatchResult> = objects
            .into_iter()
            .enumerate()
            .map(|(index, raw)| {
                let name = raw.name.clone().unwrap_or_default();
                let category = raw
                    .category
                    .as_deref()
                    .map(ObjectCategory::from_catalog)
                    .unwrap_or_default();
                match ObjectRecord::try_from(raw) {
                    Ok(record) => self.compile_row(index, &record),
                    Err(e) => {
                        tracing::warn!(index, error = %e, "Catalog object rejected");
                        BatchResult::failed(index, name, category, e.to_string())
                    }
                }
            })
            .collect();

        self.finish(results, start)
    }

    fn compile_row(&self, index: usize, record: &ObjectRecord) -> BatchResult {
        let compiled = self.compiler.compile(record);
        let error = match self.compiler.record(&compiled) {
            Ok(()) => None,
            Err(e) => {
                tracing::warn!(index, name = %record.name, error = %e, "Failed to log compilation");
                Some(e.to_string())
            }
        };
        BatchResult::compiled(index, compiled, error)
    }

    fn finish(&self, results: Vec<BatchResult>, start: Instant) -> BatchReport {
        let config = self.compiler.config();
        let statistics = compute_statistics(
            &results,
            config.low_confidence_threshold,
            config.high_confidence_threshold,
        );
        tracing::info!(
            total = statistics.total,
            valid = statistics.valid,
            failed = statistics.failed,
            elapsed_ms = start.elapsed().as_millis() as u64,
            "Batch compilation finished"
        );
        BatchReport {
            results,
            statistics,
        }
    }
}

/// Roll up rows into batch statistics.
pub fn compute_statistics(results: &[BatchResult], low: f64, high: f64) -> BatchStatistics {
    let mut stats = BatchStatistics {
        total: results.len(),
        ..Default::default()
    };

    let mut scores = Vec::with_capacity(results.len());
    for row in results {
        if row.is_failed() {
            stats.failed += 1;
        }
        if row.valid && !row.is_failed() {
            stats.valid += 1;
        }
        if !row.warnings.is_empty() {
            stats.with_warnings += 1;
        }
        *stats.by_category.entry(row.category).or_insert(0) += 1;

        if let Some(confidence) = &row.confidence {
            scores.push(confidence.score);
            *stats
                .confidence
                .by_feature_source
                .entry(confidence.feature_source)
                .or_insert(0) += 1;
            if confidence.score < low {
                stats.confidence.below_low += 1;
            }
            if confidence.score >= high {
                stats.confidence.at_or_above_high += 1;
            }
        }
    }

    if stats.total > 0 {
        stats.validity_rate = stats.valid as f64 / stats.total as f64;
    }
    if !scores.is_empty() {
        stats.confidence.mean = scores.iter().sum::<f64>() / scores.len() as f64;
        stats.confidence.min = scores.iter().copied().fold(f64::INFINITY, f64::min);
        stats.confidence.max = scores.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    }

    stats
}
