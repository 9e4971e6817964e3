//! Bounded, insertion-ordered record of past compilations.
//!
//! Each `GenerationLog` is an independent instance with its own capacity, so
//! callers and tests never share state. Appends past capacity evict the
//! oldest entry first. All access goes through one mutex.

use std::collections::{BTreeMap, VecDeque};
use std::sync::{Mutex, MutexGuard};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::CompileError;
use crate::models::{FeatureSource, ObjectCategory};

pub const DEFAULT_CAPACITY: usize = 10_000;

// ═══════════════════════════════════════════════════════════
// Types
// ═══════════════════════════════════════════════════════════

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GenerationLogEntry {
    pub id: Uuid,
    pub timestamp: DateTime<Utc>,
    /// Catalog identifier, or the object name when none was supplied.
    pub object_id: String,
    pub object_name: String,
    pub category: ObjectCategory,
    pub confidence: f64,
    pub prompt_length: usize,
    pub warnings: Vec<String>,
    pub feature_source: FeatureSource,
    pub features_used: Vec<String>,
    pub duration_ms: f64,
}

/// Filter for `GenerationLog::query`. Unset fields match everything.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LogQuery {
    pub category: Option<ObjectCategory>,
    pub min_confidence: Option<f64>,
    pub has_warnings: Option<bool>,
    pub limit: Option<usize>,
}

impl LogQuery {
    fn matches(&self, entry: &GenerationLogEntry) -> bool {
        self.category.is_none_or(|c| entry.category == c)
            && self.min_confidence.is_none_or(|min| entry.confidence >= min)
            && self
                .has_warnings
                .is_none_or(|want| entry.warnings.is_empty() != want)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct LogSummary {
    pub total_logged: usize,
    pub average_confidence: f64,
    /// Average confidence per category.
    pub by_category: BTreeMap<ObjectCategory, f64>,
    pub by_feature_source: BTreeMap<FeatureSource, usize>,
    /// Fraction of entries with at least one validation warning.
    pub warning_rate: f64,
}

// ═══════════════════════════════════════════════════════════
// Store
// ═══════════════════════════════════════════════════════════

#[derive(Debug)]
pub struct GenerationLog {
    capacity: usize,
    entries: Mutex<VecDeque<GenerationLogEntry>>,
}

impl Default for GenerationLog {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

impl GenerationLog {
    /// Create an empty log. A capacity of zero is raised to one.
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            capacity,
            entries: Mutex::new(VecDeque::with_capacity(capacity.min(DEFAULT_CAPACITY))),
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    fn lock(&self) -> Result<MutexGuard<'_, VecDeque<GenerationLogEntry>>, CompileError> {
        self.entries
            .lock()
            .map_err(|_| CompileError::LogStore("generation log lock poisoned".into()))
    }

    /// Append an entry, evicting the oldest when full.
    pub fn append(&self, entry: GenerationLogEntry) -> Result<(), CompileError> {
        let mut entries = self.lock()?;
        while entries.len() >= self.capacity {
            if let Some(evicted) = entries.pop_front() {
                tracing::trace!(id = %evicted.id, "Generation log full, evicted oldest entry");
            }
        }
        entries.push_back(entry);
        Ok(())
    }

    /// Filtered entries, most recent first, truncated to `query.limit`.
    pub fn query(&self, query: &LogQuery) -> Result<Vec<GenerationLogEntry>, CompileError> {
        let entries = self.lock()?;
        let limit = query.limit.unwrap_or(usize::MAX);
        Ok(entries
            .iter()
            .rev()
            .filter(|e| query.matches(e))
            .take(limit)
            .cloned()
            .collect())
    }

    pub fn summary(&self) -> Result<LogSummary, CompileError> {
        let entries = self.lock()?;
        if entries.is_empty() {
            return Ok(LogSummary::default());
        }

        let total = entries.len();
        let mut category_sums: BTreeMap<ObjectCategory, (f64, usize)> = BTreeMap::new();
        let mut by_feature_source = BTreeMap::new();
        let mut confidence_sum = 0.0;
        let mut with_warnings = 0;

        for entry in entries.iter() {
            confidence_sum += entry.confidence;
            let slot = category_sums.entry(entry.category).or_insert((0.0, 0));
            slot.0 += entry.confidence;
            slot.1 += 1;
            *by_feature_source.entry(entry.feature_source).or_insert(0) += 1;
            if !entry.warnings.is_empty() {
                with_warnings += 1;
            }
        }

        Ok(LogSummary {
            total_logged: total,
            average_confidence: confidence_sum / total as f64,
            by_category: category_sums
                .into_iter()
                .map(|(category, (sum, count))| (category, sum / count as f64))
                .collect(),
            by_feature_source,
            warning_rate: with_warnings as f64 / total as f64,
        })
    }

    pub fn len(&self) -> Result<usize, CompileError> {
        Ok(self.lock()?.len())
    }

    pub fn is_empty(&self) -> Result<bool, CompileError> {
        Ok(self.lock()?.is_empty())
    }

    pub fn clear(&self) -> Result<(), CompileError> {
        self.lock()?.clear();
        Ok(())
    }

    /// All entries, oldest first.
    pub fn snapshot(&self) -> Result<Vec<GenerationLogEntry>, CompileError> {
        Ok(self.lock()?.iter().cloned().collect())
    }

    /// Pretty-printed JSON array of all entries, oldest first.
    pub fn export_json(&self) -> Result<String, CompileError> {
        let entries = self.snapshot()?;
        Ok(serde_json::to_string_pretty(&entries)?)
    }
}
