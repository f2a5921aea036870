//! String formatting utilities for table rendering.

/// Format a mileage value with thousands separators, "-" when absent.
pub fn format_miles(miles: Option<f64>) -> String {
    match miles {
        Some(value) => group_thousands(value),
        None => "-".to_string(),
    }
}

/// Format a cost as dollars, "-" when absent.
pub fn format_cost(cost: Option<f64>) -> String {
    match cost {
        Some(value) => format!("${:.2}", value),
        None => "-".to_string(),
    }
}

/// Format signed remaining miles; negative values keep their sign.
pub fn format_remaining_miles(remaining: Option<f64>) -> String {
    match remaining {
        Some(value) if value < 0.0 => format!("-{}", group_thousands(-value)),
        Some(value) => group_thousands(value),
        None => "-".to_string(),
    }
}

/// Format remaining time as months and days (e.g. "3mo 15d" or "-2mo 5d").
pub fn format_remaining_time(remaining_days: Option<i64>) -> String {
    let days = match remaining_days {
        Some(days) => days,
        None => return "-".to_string(),
    };
    let sign = if days < 0 { "-" } else { "" };
    let days = days.abs();
    let months = days / 30;
    let rest = days % 30;
    if months > 0 {
        format!("{}{}mo {}d", sign, months, rest)
    } else {
        format!("{}{}d", sign, days)
    }
}

/// Truncate a string to max length, adding ellipsis if needed.
pub fn truncate(s: &str, max_len: usize) -> String {
    let char_count = s.chars().count();
    if char_count <= max_len {
        return s.to_string();
    }
    if max_len <= 3 {
        return s.chars().take(max_len).collect();
    }
    let truncated: String = s.chars().take(max_len - 3).collect();
    format!("{}...", truncated)
}

/// Render a rounded value with commas every three digits.
fn group_thousands(value: f64) -> String {
    let rounded = format!("{:.0}", value);
    let mut grouped = String::with_capacity(rounded.len() + rounded.len() / 3);
    let digits: Vec<char> = rounded.chars().collect();
    for (i, ch) in digits.iter().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(*ch);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_miles() {
        assert_eq!(format_miles(Some(7_500.0)), "7,500");
        assert_eq!(format_miles(Some(999.0)), "999");
        assert_eq!(format_miles(Some(1_234_567.0)), "1,234,567");
        assert_eq!(format_miles(None), "-");
    }

    #[test]
    fn test_format_remaining_miles_keeps_sign() {
        assert_eq!(format_remaining_miles(Some(-1_200.0)), "-1,200");
        assert_eq!(format_remaining_miles(Some(700.0)), "700");
    }

    #[test]
    fn test_format_remaining_time() {
        assert_eq!(format_remaining_time(Some(105)), "3mo 15d");
        assert_eq!(format_remaining_time(Some(-65)), "-2mo 5d");
        assert_eq!(format_remaining_time(Some(12)), "12d");
        assert_eq!(format_remaining_time(Some(-12)), "-12d");
        assert_eq!(format_remaining_time(None), "-");
    }

    #[test]
    fn test_format_cost() {
        assert_eq!(format_cost(Some(48.5)), "$48.50");
        assert_eq!(format_cost(None), "-");
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("short", 30), "short");
        assert_eq!(truncate("a very long note about the service", 10), "a very ...");
    }
}
