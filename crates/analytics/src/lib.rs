//! # Service Impact Analytics
//!
//! This crate turns two observation periods into the numbers the service impact
//! views display: per-period derived metrics, the before/after improvement
//! percentages, and the record set handed to the bar-chart renderer.
//!
//! ## Architectural Principles
//!
//! - **Layer 1 Logic:** This is a pure logic crate. It has no knowledge of files,
//!   terminals or the CLI. It depends only on `core-types` (Layer 0).
//! - **Stateless Calculation:** The `MetricsEngine` is a stateless calculator. It
//!   takes observation periods as input and produces `DerivedMetrics` and a
//!   `ComparisonResult` as output. Calling it twice with the same input gives the
//!   same answer.
//!
//! ## Public API
//!
//! - `MetricsEngine`: `compute_metrics` and `compare_metrics`.
//! - `DerivedMetrics` / `ComparisonResult`: the computed values.
//! - `ChartRecord`, `comparison_chart_data`, `format_tooltip`: the chart contract.
//! - `AnalyticsError`: the specific error types that can be returned from this crate.

// Declare the modules that constitute this crate.
pub mod chart;
pub mod engine;
pub mod error;
pub mod report;

// Re-export the key components to create a clean, public-facing API.
pub use chart::{ChartRecord, ChartSeries, chart_series, comparison_chart_data, format_tooltip};
pub use engine::{MetricsEngine, percent_increase, percent_reduction};
pub use error::AnalyticsError;
pub use report::{ComparisonResult, DerivedMetrics};
