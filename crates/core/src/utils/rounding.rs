use rust_decimal::{Decimal, RoundingStrategy};

use crate::constants::DISPLAY_DECIMAL_PRECISION;

/// Rounds a value to two decimal places, half away from zero.
///
/// Every externally visible currency amount or display percentage passes
/// through this exactly once, at the point of return; intermediate sums keep
/// full precision. A consequence worth knowing: summing rounded sub-results
/// and rounding the sum can differ by up to 0.01 per sub-result. Callers that
/// display both a breakdown and its total show the breakdown's arithmetic,
/// not a re-derived total.
pub fn round2(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(
        DISPLAY_DECIMAL_PRECISION,
        RoundingStrategy::MidpointAwayFromZero,
    )
}
