//! Indian digit grouping and the currency formatter built on it.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculation::{round_currency, round_money};

/// How amounts are rendered as currency on generated documents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CurrencyFormat {
    /// Symbol placed before the grouped digits.
    pub symbol: String,
    /// Render two decimal places (`₹1,00,000.00`) instead of a whole amount.
    pub append_decimals: bool,
}

impl Default for CurrencyFormat {
    fn default() -> Self {
        Self {
            symbol: "₹".to_string(),
            append_decimals: true,
        }
    }
}

/// Groups the integer part of an amount the Indian way.
///
/// The last three digits form one group and the remaining digits are grouped
/// in pairs. The sign and any fraction are ignored; the caller renders those.
///
/// # Examples
///
/// ```
/// use compensation_engine::formatting::format_indian_grouping;
/// use rust_decimal::Decimal;
///
/// assert_eq!(format_indian_grouping(Decimal::from(1_234_567)), "12,34,567");
/// assert_eq!(format_indian_grouping(Decimal::from(100_000)), "1,00,000");
/// assert_eq!(format_indian_grouping(Decimal::from(999)), "999");
/// ```
pub fn format_indian_grouping(value: Decimal) -> String {
    group_digits(&value.abs().trunc().to_string())
}

/// Formats an amount as Indian currency, e.g. `₹12,34,567.50`.
///
/// With `append_decimals` the amount is rounded half-up to two places,
/// otherwise to a whole unit. A negative amount gets a leading `-`.
///
/// ```
/// use compensation_engine::formatting::{CurrencyFormat, format_indian_currency};
/// use rust_decimal::Decimal;
///
/// let format = CurrencyFormat::default();
/// assert_eq!(format_indian_currency(Decimal::new(123456750, 2), &format), "₹12,34,567.50");
/// ```
pub fn format_indian_currency(value: Decimal, format: &CurrencyFormat) -> String {
    let (rounded, scale) = if format.append_decimals {
        (round_money(value), 2)
    } else {
        (round_currency(value), 0)
    };
    let sign = if rounded < Decimal::ZERO { "-" } else { "" };

    let mut magnitude = rounded.abs();
    magnitude.rescale(scale);
    let text = magnitude.to_string();
    match text.split_once('.') {
        Some((whole, fraction)) => {
            format!("{}{}{}.{}", sign, format.symbol, group_digits(whole), fraction)
        }
        None => format!("{}{}{}", sign, format.symbol, group_digits(&text)),
    }
}

fn group_digits(digits: &str) -> String {
    if digits.len() <= 3 {
        return digits.to_string();
    }
    let (head, last_three) = digits.split_at(digits.len() - 3);

    let mut groups: Vec<&str> = Vec::new();
    let mut end = head.len();
    while end > 0 {
        let start = end.saturating_sub(2);
        groups.push(&head[start..end]);
        end = start;
    }
    groups.reverse();
    groups.push(last_three);
    groups.join(",")
}
