use rust_decimal::{Decimal, RoundingStrategy};

/// Rounds half away from zero and always prints exactly `dp` decimals.
pub fn fixed(value: Decimal, dp: u32) -> String {
    let rounded = value.round_dp_with_strategy(dp, RoundingStrategy::MidpointAwayFromZero);
    format!("{rounded:.prec$}", prec = dp as usize)
}

/// A percentage to one decimal place, e.g. `89.6%`.
pub fn percent(value: Decimal) -> String {
    format!("{}%", fixed(value, 1))
}

/// A recorded quantity as the owner entered it, without trailing zeros.
pub fn quantity(value: Decimal) -> String {
    value.normalize().to_string()
}
