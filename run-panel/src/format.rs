//! Display formatting for credits, durations and timestamps

use chrono::{DateTime, Utc};

const SECS_PER_MINUTE: f64 = 60.0;
const SECS_PER_HOUR: f64 = 3_600.0;
const SECS_PER_DAY: f64 = 86_400.0;
// 400 Gregorian years hold 146_097 days
const DAYS_PER_400_YEARS: f64 = 146_097.0;

/// Format a credit amount (cents) as dollars, e.g. `300` -> `$3.00`.
pub fn format_credits(credits: i64) -> String {
    let sign = if credits < 0 { "-" } else { "" };
    let abs = credits.unsigned_abs();
    format!("{sign}${}.{:02}", abs / 100, abs % 100)
}

/// Humanize a span of seconds into a coarse phrase ("2 minutes", "a day").
///
/// Buckets follow the usual relative-time thresholds: under 45 seconds is
/// "a few seconds", under 45 minutes counts minutes, under 22 hours counts
/// hours, under 26 days counts days, under 11 months counts months.
pub fn humanize_duration(seconds: f64) -> String {
    let secs = seconds.abs();
    let days_exact = secs / SECS_PER_DAY;

    let rounded_secs = secs.round();
    let minutes = (secs / SECS_PER_MINUTE).round() as u64;
    let hours = (secs / SECS_PER_HOUR).round() as u64;
    let days = days_exact.round() as u64;
    let months = (days_exact * 4_800.0 / DAYS_PER_400_YEARS).round() as u64;
    let years = (days_exact * 400.0 / DAYS_PER_400_YEARS).round() as u64;

    if rounded_secs < 45.0 {
        "a few seconds".to_string()
    } else if minutes <= 1 {
        "a minute".to_string()
    } else if minutes < 45 {
        format!("{minutes} minutes")
    } else if hours <= 1 {
        "an hour".to_string()
    } else if hours < 22 {
        format!("{hours} hours")
    } else if days <= 1 {
        "a day".to_string()
    } else if days < 26 {
        format!("{days} days")
    } else if months <= 1 {
        "a month".to_string()
    } else if months < 11 {
        format!("{months} months")
    } else if years <= 1 {
        "a year".to_string()
    } else {
        format!("{years} years")
    }
}

/// Relative phrase for `then` as seen from `now`: "5 minutes ago", "in a day".
pub fn format_relative(then: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let delta = now.signed_duration_since(then);
    let seconds = delta.num_milliseconds() as f64 / 1_000.0;
    let phrase = humanize_duration(seconds);
    if seconds >= 0.0 {
        format!("{phrase} ago")
    } else {
        format!("in {phrase}")
    }
}

pub fn format_absolute(ts: DateTime<Utc>) -> String {
    ts.format("%Y-%m-%d %H:%M:%S").to_string()
}

/// Upper-case the first character.
pub fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn credits_render_as_dollars() {
        assert_eq!(format_credits(300), "$3.00");
        assert_eq!(format_credits(5), "$0.05");
        assert_eq!(format_credits(12_345), "$123.45");
        assert_eq!(format_credits(-250), "-$2.50");
        assert_eq!(format_credits(0), "$0.00");
    }

    #[test]
    fn humanize_buckets() {
        assert_eq!(humanize_duration(3.2), "a few seconds");
        assert_eq!(humanize_duration(50.0), "a minute");
        assert_eq!(humanize_duration(125.0), "2 minutes");
        assert_eq!(humanize_duration(44.0 * 60.0), "44 minutes");
        assert_eq!(humanize_duration(50.0 * 60.0), "an hour");
        assert_eq!(humanize_duration(5.0 * 3_600.0), "5 hours");
        assert_eq!(humanize_duration(30.0 * 3_600.0), "a day");
        assert_eq!(humanize_duration(3.0 * 86_400.0), "3 days");
        assert_eq!(humanize_duration(30.0 * 86_400.0), "a month");
        assert_eq!(humanize_duration(100.0 * 86_400.0), "3 months");
        assert_eq!(humanize_duration(365.0 * 86_400.0), "a year");
        assert_eq!(humanize_duration(3.0 * 365.0 * 86_400.0), "3 years");
    }

    #[test]
    fn relative_time_direction() {
        let now = Utc.with_ymd_and_hms(2026, 10, 15, 12, 0, 0).unwrap();
        let past = Utc.with_ymd_and_hms(2026, 10, 15, 11, 58, 0).unwrap();
        let future = Utc.with_ymd_and_hms(2026, 10, 16, 12, 0, 0).unwrap();
        assert_eq!(format_relative(past, now), "2 minutes ago");
        assert_eq!(format_relative(future, now), "in a day");
    }

    #[test]
    fn absolute_and_capitalize() {
        let ts = Utc.with_ymd_and_hms(2026, 10, 15, 9, 5, 7).unwrap();
        assert_eq!(format_absolute(ts), "2026-10-15 09:05:07");
        assert_eq!(capitalize("success"), "Success");
        assert_eq!(capitalize(""), "");
    }
}
