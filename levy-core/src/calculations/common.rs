//! Shared helpers for monetary arithmetic.

use rust_decimal::Decimal;

/// Rounds a monetary value to two decimal places, half away from zero.
///
/// Every amount the engine emits passes through this, so rounding is
/// identical across tax, penalty, and interest calculations.
///
/// ```
/// use rust_decimal_macros::dec;
/// use levy_core::calculations::round_half_up;
///
/// assert_eq!(round_half_up(dec!(9246.575)), dec!(9246.58));
/// assert_eq!(round_half_up(dec!(9246.574)), dec!(9246.57));
/// ```
pub fn round_half_up(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, rust_decimal::RoundingStrategy::MidpointAwayFromZero)
}

/// The larger of two amounts; used for the statutory greater-of rules and
/// penalty floors.
pub fn max(a: Decimal, b: Decimal) -> Decimal {
    if a > b { a } else { b }
}
