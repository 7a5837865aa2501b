use crate::error::CoreError;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

/// A monitored span of vehicle usage, as recorded by the owner.
///
/// This is an immutable value object. It can describe an unusable period (a
/// zero distance, say) so that it can be deserialized from configuration as-is;
/// call [`ObservationPeriod::validate`] before deriving any ratio from it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObservationPeriod {
    /// Identifying label, e.g. "Pre-Service (Oct)".
    pub label: String,
    /// Total distance travelled during the period, in kilometres.
    #[serde(serialize_with = "rust_decimal::serde::float::serialize")]
    pub distance_km: Decimal,
    /// Total oil topped up during the period, in litres.
    #[serde(serialize_with = "rust_decimal::serde::float::serialize")]
    pub oil_added_liters: Decimal,
    /// Number of days the period spans.
    pub days_monitored: u32,
}

impl ObservationPeriod {
    pub fn new(
        label: impl Into<String>,
        distance_km: Decimal,
        oil_added_liters: Decimal,
        days_monitored: u32,
    ) -> Self {
        Self {
            label: label.into(),
            distance_km,
            oil_added_liters,
            days_monitored,
        }
    }

    /// The October observation made before the engine was serviced.
    pub fn baseline_pre_service() -> Self {
        Self::new("Pre-Service (Oct)", dec!(887), dec!(2.3), 22)
    }

    /// The November/December observation made after the engine was serviced.
    pub fn baseline_post_service() -> Self {
        Self::new("Post-Service (Nov-Dec)", dec!(2013), dec!(2.75), 45)
    }

    /// Checks that every field used as a divisor is strictly positive.
    ///
    /// The label is not checked; an empty label is ugly but harmless.
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.distance_km <= Decimal::ZERO {
            return Err(CoreError::invalid(
                "distance_km",
                format!("must be greater than zero, got {}", self.distance_km),
            ));
        }
        if self.oil_added_liters <= Decimal::ZERO {
            return Err(CoreError::invalid(
                "oil_added_liters",
                format!("must be greater than zero, got {}", self.oil_added_liters),
            ));
        }
        if self.days_monitored == 0 {
            return Err(CoreError::invalid("days_monitored", "must be at least one day"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn baselines_are_valid() {
        assert!(ObservationPeriod::baseline_pre_service().validate().is_ok());
        assert!(ObservationPeriod::baseline_post_service().validate().is_ok());
    }

    #[test]
    fn zero_oil_is_rejected() {
        let period = ObservationPeriod::new("dry", dec!(100), Decimal::ZERO, 3);
        let err = period.validate().unwrap_err();
        assert_eq!(err.field(), "oil_added_liters");
        assert_eq!(
            err.to_string(),
            "Invalid input for oil_added_liters: must be greater than zero, got 0"
        );
    }

    #[test]
    fn zero_distance_is_rejected_before_oil() {
        let period = ObservationPeriod::new("parked", Decimal::ZERO, Decimal::ZERO, 3);
        assert_eq!(period.validate().unwrap_err().field(), "distance_km");
    }

    #[test]
    fn negative_values_are_rejected() {
        let period = ObservationPeriod::new("odd", dec!(-5), dec!(1), 3);
        assert!(period.validate().is_err());
    }

    #[test]
    fn zero_days_is_rejected() {
        let period = ObservationPeriod::new("instant", dec!(10), dec!(1), 0);
        assert_eq!(period.validate().unwrap_err().field(), "days_monitored");
    }

    #[test]
    fn serializes_quantities_as_numbers() {
        let json = serde_json::to_value(ObservationPeriod::baseline_post_service()).unwrap();
        assert_eq!(json["distance_km"], serde_json::json!(2013.0));
        assert_eq!(json["oil_added_liters"], serde_json::json!(2.75));
        assert_eq!(json["days_monitored"], serde_json::json!(45));
    }
}
