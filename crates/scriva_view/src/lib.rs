//! SCRIVA View-Models
//!
//! This crate contains pure presentational types with no I/O.
//! Every presenter is a total function from input data to a plain-data
//! view, safe to rebuild on every frame.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod confidence;
pub mod distribution;
pub mod metrics;
pub mod patterns;
pub mod samples;
pub mod snapshot;
pub mod stats;
pub mod streak;

// Re-exports
pub use confidence::ConfidenceView;
pub use distribution::{DistributionEntry, DistributionView};
pub use metrics::{MetricValue, MetricVariant, StyleMetricView};
pub use patterns::{PatternChip, PatternItem, PatternListConfig, PatternListView};
pub use samples::{SampleContext, SampleListView, SampleText};
pub use snapshot::{
    ConfidenceBlock, DistributionBlock, PatternGroups, ProfileSnapshot, StatsBlock, StreakBlock,
};
pub use stats::{Accent, StatCardView, Trend};
pub use streak::StreakView;
