use std::str::FromStr;

use once_cell::sync::Lazy;
use regex::Regex;

static LEADING_NUMBER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\s*([+-]?(?:[0-9]+(?:\.[0-9]*)?|\.[0-9]+)(?:[eE][+-]?[0-9]+)?)")
        .expect("leading number pattern is valid")
});

/// Result of a best effort amount conversion.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Amount {
    value: f64,
    exact: bool,
}

impl Amount {
    /// The parsed value, 0.0 when no numeric prefix was found.
    pub fn value(&self) -> f64 {
        self.value
    }

    /// True when the whole text, apart from surrounding blanks, was numeric.
    pub fn exact(&self) -> bool {
        self.exact
    }
}

/// Remove every occurrence of `ch` from `text` and convert the leading numeric prefix of what
/// remains.
///
/// Conversion never fails. Text without a numeric prefix yields 0.0, text with trailing garbage
/// yields the value of the prefix. Only `ch` is removed, so thousands separators stop the
/// conversion: `"$1,234.50"` yields 1.0.
///
/// # Examples
/// ```
/// use bid_sort::currency::parse_amount;
/// let amount = parse_amount("$1,234.50", '$');
/// assert_eq!(amount.value(), 1.0);
/// assert!(!amount.exact());
/// ```
pub fn parse_amount(text: &str, ch: char) -> Amount {
    let stripped: String = text.chars().filter(|c| *c != ch).collect();
    match LEADING_NUMBER.captures(stripped.as_str()).and_then(|c| c.get(1)) {
        None => Amount { value: 0.0, exact: false },
        Some(number) => {
            let value = f64::from_str(number.as_str()).unwrap_or(0.0);
            let exact = number.end() == stripped.trim_end().len();
            Amount { value, exact }
        }
    }
}

/// Shorthand for `parse_amount(text, ch).value()`.
pub fn str_to_double(text: &str, ch: char) -> f64 {
    parse_amount(text, ch).value()
}
