//! Display helpers for durations, scores and dates.

use chrono::{DateTime, Utc};

/// Remaining time counts as critical at or below this many seconds even for
/// long quizzes.
pub const CRITICAL_CAP_SECS: u64 = 60;

/// `MM:SS`, or `H:MM:SS` from one hour on.
pub fn format_clock(secs: u64) -> String {
    let hours = secs / 3600;
    let minutes = (secs % 3600) / 60;
    let seconds = secs % 60;
    if hours > 0 {
        format!("{hours}:{minutes:02}:{seconds:02}")
    } else {
        format!("{minutes:02}:{seconds:02}")
    }
}

/// Compact human form such as `1h 5m` or `42s`.
pub fn format_duration_short(secs: u64) -> String {
    let hours = secs / 3600;
    let minutes = (secs % 3600) / 60;
    let seconds = secs % 60;
    match (hours, minutes, seconds) {
        (0, 0, s) => format!("{s}s"),
        (0, m, 0) => format!("{m}m"),
        (0, m, s) => format!("{m}m {s}s"),
        (h, 0, _) => format!("{h}h"),
        (h, m, _) => format!("{h}h {m}m"),
    }
}

/// Whether a countdown should be drawn as running out.
///
/// The threshold is the smaller of 10% of the limit and one minute. An
/// unlimited quiz, or one already at zero, is never critical.
pub fn is_critical(remaining_secs: u64, time_limit_secs: u64) -> bool {
    if time_limit_secs == 0 || remaining_secs == 0 {
        return false;
    }
    let threshold = (time_limit_secs / 10).min(CRITICAL_CAP_SECS);
    remaining_secs <= threshold
}

pub fn format_score(score: f64) -> String {
    format!("{score:.2}%")
}

pub fn format_date(date: Option<&DateTime<Utc>>) -> String {
    date.map(|d| d.format("%d %b %Y").to_string())
        .unwrap_or_else(|| "-".to_string())
}

pub fn format_date_time(date: Option<&DateTime<Utc>>) -> String {
    date.map(|d| d.format("%d %b %Y %H:%M").to_string())
        .unwrap_or_else(|| "-".to_string())
}

/// File size with a binary unit, one decimal above bytes.
pub fn format_bytes(bytes: u64) -> String {
    const UNITS: [&str; 4] = ["KB", "MB", "GB", "TB"];
    if bytes < 1024 {
        return format!("{bytes} B");
    }
    let mut value = bytes as f64 / 1024.0;
    let mut unit = 0;
    while value >= 1024.0 && unit + 1 < UNITS.len() {
        value /= 1024.0;
        unit += 1;
    }
    format!("{value:.1} {}", UNITS[unit])
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn clock_switches_to_hours() {
        assert_eq!(format_clock(0), "00:00");
        assert_eq!(format_clock(65), "01:05");
        assert_eq!(format_clock(3599), "59:59");
        assert_eq!(format_clock(3600), "1:00:00");
        assert_eq!(format_clock(7325), "2:02:05");
    }

    #[test]
    fn short_durations_drop_zero_parts() {
        assert_eq!(format_duration_short(42), "42s");
        assert_eq!(format_duration_short(120), "2m");
        assert_eq!(format_duration_short(125), "2m 5s");
        assert_eq!(format_duration_short(3600), "1h");
        assert_eq!(format_duration_short(3900), "1h 5m");
    }

    #[test]
    fn critical_threshold_is_capped_at_a_minute() {
        assert!(!is_critical(30, 0));
        assert!(is_critical(30, 300));
        assert!(!is_critical(31, 300));
        assert!(is_critical(60, 3600));
        assert!(!is_critical(61, 3600));
        assert!(!is_critical(0, 300));
    }

    #[test]
    fn dates_and_sizes() {
        let date = Utc.with_ymd_and_hms(2024, 3, 7, 14, 5, 0).unwrap();
        assert_eq!(format_date(Some(&date)), "07 Mar 2024");
        assert_eq!(format_date_time(Some(&date)), "07 Mar 2024 14:05");
        assert_eq!(format_date(None), "-");
        assert_eq!(format_bytes(512), "512 B");
        assert_eq!(format_bytes(10 * 1024 * 1024), "10.0 MB");
        assert_eq!(format_score(66.666), "66.67%");
    }
}
