//! Display formatting for amounts and percentages.
//!
//! Amounts are carried at full precision and only rounded for display: max
//! four decimal places, trailing zeros stripped. Currency renders in BDT
//! with the Bangladeshi/Indian digit grouping (1,00,00,000 for one crore).

use crate::domains::billing::reconcile::round_to;

/// Max decimal places shown to the user.
const DISPLAY_PRECISION: u32 = 4;

/// Formats an amount for display: four decimals max, trailing zeros removed.
pub fn display_amount(amount: f64) -> String {
    let rounded = round_to(amount, DISPLAY_PRECISION);
    trim_trailing_zeros(&format!("{:.*}", DISPLAY_PRECISION as usize, rounded))
}

/// Formats a percentage for display, same rules as `display_amount`.
pub fn display_percentage(percentage: f64) -> String {
    display_amount(percentage)
}

/// Formats an amount as BDT currency with lakh/crore grouping.
pub fn format_bdt(amount: f64, show_decimals: bool) -> String {
    format!("\u{09f3}{}", format_indian_number(amount, show_decimals))
}

/// Formats a number with the Indian grouping system: the last three digits
/// form one group, every group before that has two digits.
pub fn format_indian_number(value: f64, show_decimals: bool) -> String {
    let decimals = if show_decimals { DISPLAY_PRECISION } else { 0 };
    let rounded = round_to(value, decimals);
    let negative = rounded < 0.0;

    let rendered = format!("{:.*}", decimals as usize, rounded.abs());
    let (int_digits, fraction) = match rendered.split_once('.') {
        Some((int_digits, fraction)) => (int_digits, fraction.trim_end_matches('0')),
        None => (rendered.as_str(), ""),
    };

    let mut out = String::new();
    if negative {
        out.push('-');
    }
    out.push_str(&group_indian(int_digits));
    if !fraction.is_empty() {
        out.push('.');
        out.push_str(fraction);
    }
    out
}

fn group_indian(digits: &str) -> String {
    if digits.len() <= 3 {
        return digits.to_string();
    }

    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut groups: Vec<&str> = Vec::new();
    let bytes = head.as_bytes();
    let mut end = bytes.len();
    while end > 2 {
        groups.push(&head[end - 2..end]);
        end -= 2;
    }
    groups.push(&head[..end]);
    groups.reverse();

    format!("{},{}", groups.join(","), tail)
}

fn trim_trailing_zeros(rendered: &str) -> String {
    if !rendered.contains('.') {
        return rendered.to_string();
    }
    rendered
        .trim_end_matches('0')
        .trim_end_matches('.')
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_amount_strips_trailing_zeros() {
        assert_eq!(display_amount(12.5), "12.5");
        assert_eq!(display_amount(12.0), "12");
        assert_eq!(display_amount(0.12345), "0.1235");
        assert_eq!(display_amount(0.0), "0");
    }

    #[test]
    fn display_percentage_matches_amount_rules() {
        assert_eq!(display_percentage(33.3300), "33.33");
        assert_eq!(display_percentage(100.0), "100");
    }

    #[test]
    fn indian_grouping() {
        assert_eq!(format_indian_number(123.0, false), "123");
        assert_eq!(format_indian_number(1234.0, false), "1,234");
        assert_eq!(format_indian_number(12345.0, false), "12,345");
        assert_eq!(format_indian_number(100_000.0, false), "1,00,000");
        assert_eq!(format_indian_number(10_000_000.0, false), "1,00,00,000");
        assert_eq!(format_indian_number(123_456_789.0, false), "12,34,56,789");
    }

    #[test]
    fn indian_grouping_with_decimals() {
        assert_eq!(format_indian_number(1234.5, true), "1,234.5");
        assert_eq!(format_indian_number(1234.0, true), "1,234");
        assert_eq!(format_indian_number(-100_000.25, true), "-1,00,000.25");
    }

    #[test]
    fn bdt_prefix() {
        assert_eq!(format_bdt(10_000_000.0, false), "\u{09f3}1,00,00,000");
        assert_eq!(format_bdt(1234.5, true), "\u{09f3}1,234.5");
        // Without decimals the amount rounds to a whole number first.
        assert_eq!(format_bdt(1234.5, false), "\u{09f3}1,235");
    }
}
