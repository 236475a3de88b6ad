//! Currency display formatting (Vietnamese convention)

use super::ProjectedValue;

/// Group a plain digit string with `.` every three digits
fn group_digits(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push('.');
        }
        out.push(c);
    }
    out
}

/// Ordinary earnings amount, rounded to whole dong with the `₫` suffix
pub fn format_vnd(amount: f64) -> String {
    let whole = amount.round().max(0.0) as u64;
    format!("{} ₫", group_digits(&whole.to_string()))
}

/// Exact projected value with digit grouping and the `₫` suffix
pub fn format_projected(value: &ProjectedValue) -> String {
    format!("{} ₫", group_digits(&value.digits()))
}
