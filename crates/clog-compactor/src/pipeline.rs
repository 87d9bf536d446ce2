//! Optimizer pipeline: orchestrates the four stages.

use crate::report::OptimizationReport;
use crate::stage3_dedup::DedupStats;
use crate::{stage1_strip, stage2_redact, stage3_dedup, stage4_prune};
use clog_core::{CharRatioEstimator, OptimizerConfig, Result, TokenEstimator};
use serde_json::Value;

/// The main optimizer pipeline.
#[derive(Debug, Clone)]
pub struct OptimizerPipeline {
    pub config: OptimizerConfig,
}

struct Run {
    output: Value,
    stages: Vec<String>,
    dedup: DedupStats,
}

impl OptimizerPipeline {
    pub fn new(config: OptimizerConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Optimize a document. The input is only borrowed and never modified.
    pub fn optimize(&self, doc: &Value) -> Value {
        self.run(doc).output
    }

    fn run(&self, doc: &Value) -> Run {
        let mut stages = Vec::new();
        let mut dedup = DedupStats::default();

        // Stage 1: top-level drop
        let mut result = match &self.config.top_level_drop {
            Some(key) => {
                stages.push("strip".into());
                stage1_strip::strip_top_level(doc, key)
            }
            None => doc.clone(),
        };

        // Stage 2: redaction (always applied)
        let redaction = &self.config.redaction;
        result = stage2_redact::redact(&result, &redaction.key, &redaction.marker);
        stages.push("redact".into());

        // Stage 3: dedup, before pruning so `_id` is never a prune target
        if self.config.dedup {
            let (deduped, stats) = stage3_dedup::deduplicate_with_stats(&result);
            tracing::debug!(
                first = stats.first_occurrences,
                references = stats.references,
                passed = stats.passed_through,
                "deduplicated messages"
            );
            result = deduped;
            dedup = stats;
            stages.push("dedup".into());
        }

        // Stage 4: deep prune
        if !self.config.prune_keys.is_empty() {
            result = stage4_prune::prune(&result, self.config.prune_keys.as_slice());
            stages.push("prune".into());
        }

        tracing::debug!(stages = ?stages, "optimized document");
        Run { output: result, stages, dedup }
    }

    /// Optimize and estimate the token reduction with the default estimator.
    pub fn optimize_with_report(&self, doc: &Value) -> Result<OptimizationReport> {
        self.optimize_with_estimator(doc, &CharRatioEstimator::default())
    }

    /// Optimize and estimate the token reduction. The input is measured
    /// pretty-printed and the output compact.
    pub fn optimize_with_estimator(
        &self,
        doc: &Value,
        estimator: &dyn TokenEstimator,
    ) -> Result<OptimizationReport> {
        let original_tokens = estimator.estimate(&serde_json::to_string_pretty(doc)?);
        let run = self.run(doc);
        let optimized_tokens = estimator.estimate(&serde_json::to_string(&run.output)?);

        let report = OptimizationReport::new(run.output, original_tokens, optimized_tokens, run.stages, run.dedup);
        tracing::debug!(
            original = report.original_tokens,
            optimized = report.optimized_tokens,
            reduction = report.rounded_reduction(),
            "token reduction"
        );
        Ok(report)
    }

    /// Parse a JSON text, optimize it and return the compact serialization.
    pub fn optimize_str(&self, json: &str) -> Result<String> {
        let doc: Value = serde_json::from_str(json)?;
        Ok(serde_json::to_string(&self.optimize(&doc))?)
    }
}

impl Default for OptimizerPipeline {
    fn default() -> Self {
        Self { config: OptimizerConfig::default() }
    }
}

/// Optimize with the default configuration.
pub fn optimize(doc: &Value) -> Value {
    OptimizerPipeline::default().optimize(doc)
}
