//! Amount to words in the Indian numbering system.

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal_macros::dec;

use crate::error::{EngineError, EngineResult};

/// Exclusive upper bound on the magnitude accepted by [`number_to_words`] (10^12).
pub const WORDS_LIMIT: Decimal = dec!(1000000000000);

const ONES: [&str; 20] = [
    "Zero",
    "One",
    "Two",
    "Three",
    "Four",
    "Five",
    "Six",
    "Seven",
    "Eight",
    "Nine",
    "Ten",
    "Eleven",
    "Twelve",
    "Thirteen",
    "Fourteen",
    "Fifteen",
    "Sixteen",
    "Seventeen",
    "Eighteen",
    "Nineteen",
];

const TENS: [&str; 10] = [
    "", "", "Twenty", "Thirty", "Forty", "Fifty", "Sixty", "Seventy", "Eighty", "Ninety",
];

const HUNDRED: u64 = 100;
const THOUSAND: u64 = 1_000;
const LAKH: u64 = 100_000;
const CRORE: u64 = 10_000_000;

/// Renders an amount as English words using lakh and crore.
///
/// Digits after the decimal point are spoken one by one after `"Point"`;
/// trailing zeros are dropped first, so `12.50` reads `"Twelve Point Five"`.
/// Negative amounts are prefixed with `"Negative"`.
///
/// # Errors
///
/// Returns `OutOfDomain` if `|value| >= 10^12`.
///
/// # Examples
///
/// ```
/// use compensation_engine::formatting::number_to_words;
/// use rust_decimal::Decimal;
///
/// assert_eq!(
///     number_to_words(Decimal::from(1_234_567)).unwrap(),
///     "Twelve Lakh Thirty Four Thousand Five Hundred and Sixty Seven"
/// );
/// assert_eq!(number_to_words(Decimal::new(125, 1)).unwrap(), "Twelve Point Five");
/// ```
pub fn number_to_words(value: Decimal) -> EngineResult<String> {
    let magnitude = value.abs();
    if magnitude >= WORDS_LIMIT {
        return Err(out_of_domain(value));
    }
    if value.is_sign_negative() && !value.is_zero() {
        return Ok(format!("Negative {}", number_to_words(magnitude)?));
    }

    let whole = magnitude
        .trunc()
        .to_u64()
        .ok_or_else(|| out_of_domain(value))?;
    let mut words = integer_to_words(whole);

    let text = magnitude.normalize().to_string();
    if let Some((_, fraction)) = text.split_once('.') {
        words.push_str(" Point");
        for digit in fraction.chars().filter_map(|c| c.to_digit(10)) {
            words.push(' ');
            words.push_str(ONES[digit as usize]);
        }
    }

    Ok(words)
}

/// Renders a whole number as English words using lakh and crore.
///
/// Only the hundred band inserts `"and"` before its remainder. Crore counts
/// above 99 are themselves spelled in lakh and thousand, so every `u64` has a
/// rendering.
///
/// ```
/// use compensation_engine::formatting::integer_to_words;
///
/// assert_eq!(integer_to_words(100_000), "One Lakh");
/// assert_eq!(integer_to_words(120), "One Hundred and Twenty");
/// assert_eq!(integer_to_words(1_001), "One Thousand One");
/// ```
pub fn integer_to_words(value: u64) -> String {
    if value == 0 {
        return ONES[0].to_string();
    }
    spell(value)
}

fn spell(n: u64) -> String {
    match n {
        0..=19 => ONES[n as usize].to_string(),
        20..=99 => {
            let tens = TENS[(n / 10) as usize];
            match n % 10 {
                0 => tens.to_string(),
                ones => format!("{} {}", tens, ONES[ones as usize]),
            }
        }
        100..=999 => band(n, HUNDRED, "Hundred", " and "),
        1_000..=99_999 => band(n, THOUSAND, "Thousand", " "),
        100_000..=9_999_999 => band(n, LAKH, "Lakh", " "),
        _ => band(n, CRORE, "Crore", " "),
    }
}

fn band(n: u64, unit: u64, name: &str, joiner: &str) -> String {
    let head = format!("{} {}", spell(n / unit), name);
    match n % unit {
        0 => head,
        rest => format!("{}{}{}", head, joiner, spell(rest)),
    }
}

fn out_of_domain(value: Decimal) -> EngineError {
    EngineError::OutOfDomain {
        value: value.to_string(),
        limit: WORDS_LIMIT.to_string(),
    }
}
