//! Indian-locale display formatting (`en-IN`): the last three integer
//! digits form one group, the rest are grouped in pairs (12,34,567.89).

use crate::math::round2;

/// Indian rupee sign.
pub const RUPEE: &str = "₹";

/// Number with Indian digit grouping and at most 2 fraction digits,
/// trailing zeros dropped: `1234567.5` → `"12,34,567.5"`.
pub fn format_number(n: f64) -> String {
    let rounded = round2(n);
    let fixed = format!("{:.2}", rounded.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));
    let frac_part = frac_part.trim_end_matches('0');

    let mut out = String::new();
    if rounded < 0.0 {
        out.push('-');
    }
    out.push_str(&group_indian(int_part));
    if !frac_part.is_empty() {
        out.push('.');
        out.push_str(frac_part);
    }
    out
}

/// Rupee amount with Indian grouping and exactly 2 fraction digits:
/// `-2400.0` → `"-₹2,400.00"`.
pub fn format_currency(n: f64) -> String {
    let rounded = round2(n);
    let fixed = format!("{:.2}", rounded.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));
    let sign = if rounded < 0.0 { "-" } else { "" };
    format!("{sign}{RUPEE}{}.{frac_part}", group_indian(int_part))
}

/// Currency with an explicit sign: `+₹100.00` / `-₹100.00`. Zero is positive.
pub fn format_signed_currency(n: f64) -> String {
    let sign = if n >= 0.0 { "+" } else { "-" };
    format!("{sign}{}", format_currency(n.abs()))
}

/// Percentage with one decimal: `16.666` → `"16.7%"`.
pub fn format_percent(n: f64) -> String {
    format!("{:.1}%", n)
}

fn group_indian(digits: &str) -> String {
    if digits.len() <= 3 {
        return digits.to_string();
    }
    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut groups: Vec<&str> = Vec::new();
    let mut end = head.len();
    while end > 0 {
        let start = end.saturating_sub(2);
        groups.push(&head[start..end]);
        end = start;
    }
    groups.reverse();
    format!("{},{}", groups.join(","), tail)
}
