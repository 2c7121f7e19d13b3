//! Report types returned by the locator.
//!
//! [`LocationReport`] is the main entry point: the compact
//! [`LocationResult`](crate::types::LocationResult) plus per-source
//! summaries, the grid descriptor, credible regions, warnings and timings.

pub mod report;
pub mod timing;

pub use report::{GridDescriptor, LocationReport, SourceSummary};
pub use timing::{StageTiming, TimingBreakdown};
