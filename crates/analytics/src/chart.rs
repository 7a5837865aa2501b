use crate::report::ComparisonResult;
use core_types::Phase;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::Serialize;

/// One row of the grouped bar chart: a metric with its before and after values.
///
/// Serializes as `{ "metric", "before", "after", "unit" }` with numeric values,
/// which is the shape the bar-chart renderer consumes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChartRecord {
    pub metric: String,
    #[serde(serialize_with = "rust_decimal::serde::float::serialize")]
    pub before: Decimal,
    #[serde(serialize_with = "rust_decimal::serde::float::serialize")]
    pub after: Decimal,
    pub unit: String,
}

impl ChartRecord {
    fn new(metric: &str, before: Decimal, after: Decimal, unit: &str) -> Self {
        Self {
            metric: metric.to_string(),
            before,
            after,
            unit: unit.to_string(),
        }
    }

    pub fn value(&self, phase: Phase) -> Decimal {
        match phase {
            Phase::PreService => self.before,
            Phase::PostService => self.after,
        }
    }

    /// The tooltip text for this metric's bar in the given phase.
    pub fn tooltip(&self, phase: Phase) -> String {
        format_tooltip(self.value(phase), &self.unit)
    }
}

/// A bar series in the grouped chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ChartSeries {
    pub data_key: &'static str,
    pub name: &'static str,
    pub fill: &'static str,
}

/// The two bar series, before first.
pub fn chart_series() -> [ChartSeries; 2] {
    Phase::ALL.map(|phase| ChartSeries {
        data_key: phase.data_key(),
        name: phase.series_name(),
        fill: phase.color(),
    })
}

/// Projects a comparison onto the chart records, in display order.
pub fn comparison_chart_data(result: &ComparisonResult) -> Vec<ChartRecord> {
    vec![
        ChartRecord::new(
            "Oil Consumption",
            result.before.oil_consumption_per_1000km,
            result.after.oil_consumption_per_1000km,
            "L/1000km",
        ),
        ChartRecord::new(
            "Efficiency",
            result.before.efficiency_km_per_liter,
            result.after.efficiency_km_per_liter,
            "km/L",
        ),
        ChartRecord::new(
            "Daily Distance",
            result.before.daily_distance_km,
            result.after.daily_distance_km,
            "km/day",
        ),
    ]
}

/// Formats a chart value rounded to one decimal place, followed by its unit.
pub fn format_tooltip(value: Decimal, unit: &str) -> String {
    let rounded = value.round_dp_with_strategy(1, RoundingStrategy::MidpointAwayFromZero);
    if unit.is_empty() {
        format!("{rounded:.1}")
    } else {
        format!("{rounded:.1} {unit}")
    }
}
