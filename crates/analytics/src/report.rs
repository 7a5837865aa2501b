use core_types::{ObservationPeriod, Phase};
use rust_decimal::Decimal;
use serde::Serialize;

/// The values derived from a single observation period.
///
/// Never stored; `MetricsEngine::compute_metrics` recomputes it whenever needed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DerivedMetrics {
    /// Litres of oil per 1000 km.
    #[serde(serialize_with = "rust_decimal::serde::float::serialize")]
    pub oil_consumption_per_1000km: Decimal,
    /// Millilitres of oil per kilometre, which is numerically equal to litres per 1000 km.
    #[serde(serialize_with = "rust_decimal::serde::float::serialize")]
    pub daily_oil_consumption_ml: Decimal,
    /// Kilometres per litre of oil, rounded to a whole number.
    #[serde(serialize_with = "rust_decimal::serde::float::serialize")]
    pub efficiency_km_per_liter: Decimal,
    /// Average kilometres driven per monitored day.
    #[serde(serialize_with = "rust_decimal::serde::float::serialize")]
    pub daily_distance_km: Decimal,
}

/// A before/after comparison of two observation periods.
///
/// This is the single value every view (cards, improvement panel, chart,
/// timeline) is projected from. Percentages are unrounded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ComparisonResult {
    pub before_period: ObservationPeriod,
    pub after_period: ObservationPeriod,
    pub before: DerivedMetrics,
    pub after: DerivedMetrics,
    /// Positive when oil consumption went down.
    #[serde(serialize_with = "rust_decimal::serde::float::serialize")]
    pub consumption_improvement_pct: Decimal,
    /// Positive when efficiency went up.
    #[serde(serialize_with = "rust_decimal::serde::float::serialize")]
    pub efficiency_improvement_pct: Decimal,
}

impl ComparisonResult {
    pub fn period(&self, phase: Phase) -> &ObservationPeriod {
        match phase {
            Phase::PreService => &self.before_period,
            Phase::PostService => &self.after_period,
        }
    }

    pub fn metrics(&self, phase: Phase) -> &DerivedMetrics {
        match phase {
            Phase::PreService => &self.before,
            Phase::PostService => &self.after,
        }
    }

    pub fn is_improvement(&self) -> bool {
        self.efficiency_improvement_pct > Decimal::ZERO
    }
}
