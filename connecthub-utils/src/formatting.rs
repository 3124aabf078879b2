/// Render a fraction in `[0, 1]` as a fixed-width bar, e.g. `[#####-----]`.
pub fn progress_bar(fraction: f64, width: usize) -> String {
    let width = width.max(1);
    let fraction = if fraction.is_nan() {
        0.0
    } else {
        fraction.clamp(0.0, 1.0)
    };
    let filled = ((fraction * width as f64).floor() as usize).min(width);

    format!("[{}{}]", "#".repeat(filled), "-".repeat(width - filled))
}

/// Group digits in thousands: 1234567 -> "1,234,567".
pub fn format_points(points: i64) -> String {
    let digits = points.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);

    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    if points < 0 {
        format!("-{grouped}")
    } else {
        grouped
    }
}

/// "1 day", "4 days".
pub fn format_streak(days: i64) -> String {
    if days == 1 {
        "1 day".to_owned()
    } else {
        format!("{} days", format_points(days))
    }
}

/// Capitalize the first character of a category key.
pub fn display_category(category: &str) -> String {
    let mut chars = category.chars();
    match chars.next() {
        Some(first) => format!("{}{}", first.to_uppercase(), chars.as_str()),
        None => String::new(),
    }
}

/// Checkbox marker used by list views.
pub fn status_marker(done: bool) -> &'static str {
    if done { "[x]" } else { "[ ]" }
}

#[cfg(test)]
mod tests {
    use super::{display_category, format_points, format_streak, progress_bar, status_marker};

    #[test]
    fn progress_bar_fills_proportionally() {
        assert_eq!(progress_bar(0.0, 10), "[----------]");
        assert_eq!(progress_bar(0.5, 10), "[#####-----]");
        assert_eq!(progress_bar(1.0, 10), "[##########]");
        assert_eq!(progress_bar(0.999, 10), "[#########-]");
    }

    #[test]
    fn progress_bar_clamps_bad_input() {
        assert_eq!(progress_bar(3.0, 4), "[####]");
        assert_eq!(progress_bar(-1.0, 4), "[----]");
        assert_eq!(progress_bar(f64::NAN, 4), "[----]");
        assert_eq!(progress_bar(1.0, 0), "[#]");
    }

    #[test]
    fn points_are_grouped() {
        assert_eq!(format_points(0), "0");
        assert_eq!(format_points(999), "999");
        assert_eq!(format_points(1_000), "1,000");
        assert_eq!(format_points(1_234_567), "1,234,567");
        assert_eq!(format_points(-12_500), "-12,500");
    }

    #[test]
    fn streaks_pluralize() {
        assert_eq!(format_streak(1), "1 day");
        assert_eq!(format_streak(0), "0 days");
        assert_eq!(format_streak(12), "12 days");
    }

    #[test]
    fn small_helpers() {
        assert_eq!(display_category("gamification"), "Gamification");
        assert_eq!(display_category(""), "");
        assert_eq!(status_marker(true), "[x]");
        assert_eq!(status_marker(false), "[ ]");
    }
}
