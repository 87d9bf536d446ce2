//! Size report for one optimization run.

use crate::stage3_dedup::DedupStats;
use serde::Serialize;
use serde_json::Value;

/// Optimized document with token statistics.
#[derive(Debug, Clone, Serialize)]
pub struct OptimizationReport {
    pub output: Value,
    /// Estimate for the pretty-printed input.
    pub original_tokens: usize,
    /// Estimate for the compact output.
    pub optimized_tokens: usize,
    pub reduction_pct: f64,
    pub stages_applied: Vec<String>,
    pub dedup: DedupStats,
}

impl OptimizationReport {
    pub fn new(
        output: Value,
        original_tokens: usize,
        optimized_tokens: usize,
        stages_applied: Vec<String>,
        dedup: DedupStats,
    ) -> Self {
        let reduction_pct = if original_tokens > 0 {
            (original_tokens as f64 - optimized_tokens as f64) / original_tokens as f64 * 100.0
        } else {
            0.0
        };
        Self { output, original_tokens, optimized_tokens, reduction_pct, stages_applied, dedup }
    }

    pub fn ratio(&self) -> f64 {
        if self.original_tokens == 0 { return 1.0; }
        self.optimized_tokens as f64 / self.original_tokens as f64
    }

    pub fn rounded_reduction(&self) -> i64 {
        self.reduction_pct.round() as i64
    }

    pub fn tokens_saved(&self) -> i64 {
        self.original_tokens as i64 - self.optimized_tokens as i64
    }
}
