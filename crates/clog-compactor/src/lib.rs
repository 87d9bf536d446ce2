//! Chat-log compactor: 4-stage conversation log optimizer.
//!
//! Stages:
//! 1. Strip: drop a top-level attribute (`chatStart`)
//! 2. Redact: replace `imageUrl` strings with a marker
//! 3. Dedup: repeated system/assistant content becomes a `contentRef`
//! 4. Prune: remove identifying attributes (`id`, `sessionId`) at every depth

pub mod pipeline;
pub mod report;
pub mod stage1_strip;
pub mod stage2_redact;
pub mod stage3_dedup;
pub mod stage4_prune;

pub use pipeline::{optimize, OptimizerPipeline};
pub use report::OptimizationReport;
pub use stage3_dedup::{DedupStats, RoleRegistries};
