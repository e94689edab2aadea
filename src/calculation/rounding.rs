//! Rounding rules for monetary amounts.
//!
//! `rust_decimal` rounds half-to-even by default; documents in this domain
//! expect half-up, so every helper here names its strategy explicitly.

use rust_decimal::{Decimal, RoundingStrategy};

/// Rounds to the nearest whole currency unit, halves away from zero.
///
/// # Examples
///
/// ```
/// use compensation_engine::calculation::round_currency;
/// use rust_decimal::Decimal;
///
/// assert_eq!(round_currency(Decimal::new(25, 1)), Decimal::from(3));
/// assert_eq!(round_currency(Decimal::new(24999, 4)), Decimal::from(2));
/// ```
pub fn round_currency(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
}

/// Rounds to 2 decimal places, halves away from zero.
///
/// # Examples
///
/// ```
/// use compensation_engine::calculation::round_money;
/// use rust_decimal::Decimal;
///
/// assert_eq!(round_money(Decimal::new(1666665, 3)), Decimal::new(166667, 2));
/// ```
pub fn round_money(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}
