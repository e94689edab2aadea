//! Document formatting for amounts.
//!
//! Two renderers used when an amount is printed on an offer letter, payslip
//! or appraisal letter: English words in the Indian numbering system, and
//! Indian digit grouping (3 digits, then groups of 2).

mod grouping;
mod words;

pub use grouping::{CurrencyFormat, format_indian_currency, format_indian_grouping};
pub use words::{WORDS_LIMIT, integer_to_words, number_to_words};
