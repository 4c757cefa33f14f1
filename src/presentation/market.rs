use crate::model::market::Quote;
use std::fmt;

/// Inserts `,` between groups of three digits of an unsigned integer string
///
/// # Examples
/// ```
/// use algorhythm_client::presentation::market::group_thousands;
/// assert_eq!(group_thousands("124500"), "124,500");
/// assert_eq!(group_thousands("999"), "999");
/// ```
#[must_use]
pub fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

fn with_separators(value: f64, decimals: usize) -> String {
    let formatted = format!("{:.*}", decimals, value.abs());
    let (int_part, frac_part) = match formatted.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (formatted.as_str(), None),
    };
    let sign = if value < 0.0 && formatted.chars().any(|c| c.is_ascii_digit() && c != '0') {
        "-"
    } else {
        ""
    };
    match frac_part {
        Some(frac) => format!("{sign}{}.{frac}", group_thousands(int_part)),
        None => format!("{sign}{}", group_thousands(int_part)),
    }
}

/// Price with two decimals and thousands separators, e.g. `24,567.50`
#[must_use]
pub fn format_price(price: f64) -> String {
    with_separators(price, 2)
}

/// Portfolio valuation, e.g. `₹ 124,500`; fractional amounts keep two decimals
#[must_use]
pub fn format_valuation(amount: f64) -> String {
    if amount.fract() == 0.0 {
        format!("₹ {}", with_separators(amount, 0))
    } else {
        format!("₹ {}", with_separators(amount, 2))
    }
}

/// Direction of a price move
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Positive change
    Up,
    /// Negative change
    Down,
    /// No change
    Flat,
}

impl Direction {
    /// Direction of `change`
    #[must_use]
    pub fn of(change: f64) -> Self {
        if change > 0.0 {
            Direction::Up
        } else if change < 0.0 {
            Direction::Down
        } else {
            Direction::Flat
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Direction::Up => "▲",
            Direction::Down => "▼",
            Direction::Flat => "■",
        };
        write!(f, "{s}")
    }
}

/// Signed change, e.g. `+12.40` or `-3.10`
#[must_use]
pub fn format_change(quote: &Quote) -> String {
    let sign = if quote.change > 0.0 { "+" } else { "" };
    match quote.percent {
        Some(percent) => format!("{sign}{:.2} ({sign}{:.2}%)", quote.change, percent),
        None => format!("{sign}{:.2}", quote.change),
    }
}
