//! Human-readable labels for relative time ranges.

use crate::core::dashboard::TimeRange;

/// Describe a range the way the time picker shows it.
///
/// `now-6h` .. `now` reads "Last 6 hours"; anything else falls back to
/// `from to to`.
#[must_use]
pub fn describe(range: &TimeRange) -> String {
    if range.to == "now" {
        if let Some(label) = range
            .from
            .strip_prefix("now-")
            .and_then(describe_relative)
        {
            return format!("Last {label}");
        }
    }
    format!("{} to {}", range.from, range.to)
}

fn describe_relative(expr: &str) -> Option<String> {
    let split = expr.find(|ch: char| !ch.is_ascii_digit())?;
    let (digits, unit) = expr.split_at(split);
    let amount: u64 = digits.parse().ok()?;
    let unit = match unit {
        "s" => "second",
        "m" => "minute",
        "h" => "hour",
        "d" => "day",
        "w" => "week",
        "M" => "month",
        "y" => "year",
        _ => return None,
    };
    Some(if amount == 1 {
        unit.to_string()
    } else {
        format!("{amount} {unit}s")
    })
}
