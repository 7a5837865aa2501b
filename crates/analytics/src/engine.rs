use crate::error::AnalyticsError;
use crate::report::{ComparisonResult, DerivedMetrics};
use core_types::ObservationPeriod;
use rust_decimal::{Decimal, RoundingStrategy};
use tracing::{debug, warn};

const ONE_THOUSAND: Decimal = Decimal::ONE_THOUSAND;
const ONE_HUNDRED: Decimal = Decimal::ONE_HUNDRED;

/// A stateless calculator for deriving oil-consumption metrics from observation periods.
#[derive(Debug, Default)]
pub struct MetricsEngine {}

impl MetricsEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Derives the per-period metrics.
    ///
    /// # Arguments
    ///
    /// * `period` - The observation period. Its distance, oil volume and day
    ///   count must all be strictly positive.
    ///
    /// # Returns
    ///
    /// A `Result` containing the `DerivedMetrics` or an `AnalyticsError::InvalidInput`
    /// naming the first offending field.
    pub fn compute_metrics(&self, period: &ObservationPeriod) -> Result<DerivedMetrics, AnalyticsError> {
        if let Err(err) = period.validate() {
            warn!(label = %period.label, error = %err, "Rejected observation period.");
            return Err(err.into());
        }

        let oil_ml = checked("oil_added_liters", period.oil_added_liters.checked_mul(ONE_THOUSAND))?;
        let oil_consumption_per_1000km =
            checked("oil_consumption_per_1000km", oil_ml.checked_div(period.distance_km))?;

        // Litres per 1000 km and millilitres per km are the same number.
        let daily_oil_consumption_ml = oil_consumption_per_1000km;

        let efficiency_km_per_liter = checked(
            "efficiency_km_per_liter",
            period.distance_km.checked_div(period.oil_added_liters),
        )?
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);

        let daily_distance_km = checked(
            "daily_distance_km",
            period.distance_km.checked_div(Decimal::from(period.days_monitored)),
        )?;

        let metrics = DerivedMetrics {
            oil_consumption_per_1000km,
            daily_oil_consumption_ml,
            efficiency_km_per_liter,
            daily_distance_km,
        };
        debug!(label = %period.label, ?metrics, "Computed period metrics.");
        Ok(metrics)
    }

    /// Compares a period before the service with a period after it.
    ///
    /// Both periods go through `compute_metrics`; any invalid field is reported
    /// before a percentage is attempted.
    pub fn compare_metrics(
        &self,
        before: &ObservationPeriod,
        after: &ObservationPeriod,
    ) -> Result<ComparisonResult, AnalyticsError> {
        let before_metrics = self.compute_metrics(before)?;
        let after_metrics = self.compute_metrics(after)?;

        let consumption_improvement_pct = percent_change(
            "before.oil_consumption_per_1000km",
            before_metrics.oil_consumption_per_1000km,
            before_metrics
                .oil_consumption_per_1000km
                .checked_sub(after_metrics.oil_consumption_per_1000km),
        )?;

        // Efficiency is whole km/L, so a very thirsty engine can round down to zero.
        let efficiency_improvement_pct = percent_change(
            "before.efficiency_km_per_liter",
            before_metrics.efficiency_km_per_liter,
            after_metrics
                .efficiency_km_per_liter
                .checked_sub(before_metrics.efficiency_km_per_liter),
        )?;

        debug!(
            before = %before.label,
            after = %after.label,
            %consumption_improvement_pct,
            %efficiency_improvement_pct,
            "Compared observation periods."
        );

        Ok(ComparisonResult {
            before_period: before.clone(),
            after_period: after.clone(),
            before: before_metrics,
            after: after_metrics,
            consumption_improvement_pct,
            efficiency_improvement_pct,
        })
    }
}

/// Percentage by which `after` is lower than `before`.
///
/// Used for quantities where lower is better, such as oil consumption.
pub fn percent_reduction(before: Decimal, after: Decimal) -> Result<Decimal, AnalyticsError> {
    percent_change("before", before, before.checked_sub(after))
}

/// Percentage by which `after` is higher than `before`.
///
/// Used for quantities where higher is better, such as efficiency.
pub fn percent_increase(before: Decimal, after: Decimal) -> Result<Decimal, AnalyticsError> {
    percent_change("before", before, after.checked_sub(before))
}

/// `delta` is `None` when the subtraction that produced it overflowed.
fn percent_change(
    field: &str,
    base: Decimal,
    delta: Option<Decimal>,
) -> Result<Decimal, AnalyticsError> {
    if base <= Decimal::ZERO {
        warn!(field, %base, "Refusing to use a non-positive percentage denominator.");
        return Err(AnalyticsError::InvalidInput(
            field.to_string(),
            format!("percentage denominator must be greater than zero, got {base}"),
        ));
    }
    let delta = checked(field, delta)?;
    let ratio = checked(field, delta.checked_div(base))?;
    checked(field, ratio.checked_mul(ONE_HUNDRED))
}

fn checked(metric: &str, value: Option<Decimal>) -> Result<Decimal, AnalyticsError> {
    value.ok_or_else(|| AnalyticsError::Calculation(metric.to_string()))
}
