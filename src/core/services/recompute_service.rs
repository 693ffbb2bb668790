//! Memoized "recompute suggestions" operation for callers that re-run the
//! engine whenever any of its inputs change.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use tracing::debug;

use crate::core::engine::SuggestionEngine;
use crate::domain::{ChartAccount, ImportedAccount, Mapping, Suggestion};

/// Hash over everything the engine reads from its three inputs.
pub fn fingerprint(imported: &[ImportedAccount], chart: &[ChartAccount], existing: &[Mapping]) -> u64 {
    let mut hasher = DefaultHasher::new();
    imported.hash(&mut hasher);
    chart.hash(&mut hasher);
    existing.len().hash(&mut hasher);
    for mapping in existing {
        mapping.imported_account_id.hash(&mut hasher);
        mapping.chart_account_id.hash(&mut hasher);
        mapping.original_name.hash(&mut hasher);
    }
    hasher.finish()
}

/// Caches the last suggestion batch keyed by the input fingerprint.
#[derive(Debug, Default)]
pub struct RecomputeService {
    engine: SuggestionEngine,
    last_key: Option<u64>,
    cached: Vec<Suggestion>,
}

impl RecomputeService {
    pub fn new(engine: SuggestionEngine) -> Self {
        Self {
            engine,
            last_key: None,
            cached: Vec::new(),
        }
    }

    /// Returns the cached batch when inputs are unchanged, regenerating otherwise.
    pub fn recompute(
        &mut self,
        imported: &[ImportedAccount],
        chart: &[ChartAccount],
        existing: &[Mapping],
    ) -> &[Suggestion] {
        let key = fingerprint(imported, chart, existing);
        if self.last_key == Some(key) {
            debug!(key, "suggestion inputs unchanged, reusing cached batch");
        } else {
            self.cached = self.engine.generate(imported, chart, existing);
            self.last_key = Some(key);
            debug!(key, count = self.cached.len(), "recomputed suggestions");
        }
        &self.cached
    }

    pub fn invalidate(&mut self) {
        self.last_key = None;
        self.cached.clear();
    }

    pub fn is_cached(&self) -> bool {
        self.last_key.is_some()
    }
}
