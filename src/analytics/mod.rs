/// Analytics module: metrics, aggregation and derived summaries
///
/// Everything in here is a pure function over a habit snapshot and an
/// explicit reference date. Callers supply "today"; nothing below reads the
/// system clock.

pub mod aggregate;
pub mod metrics;
pub mod momentum;
pub mod report;
pub mod suggestions;
pub mod tracking;

// Re-export public types for easy access
pub use aggregate::*;
pub use metrics::*;
pub use momentum::*;
pub use report::*;
pub use suggestions::*;
pub use tracking::*;

use thiserror::Error;

/// Errors that can occur during analytics operations
#[derive(Error, Debug, PartialEq, Eq)]
pub enum AnalyticsError {
    #[error("Invalid analysis period: {0} days (must be at least 1)")]
    InvalidPeriod(u32),
}
