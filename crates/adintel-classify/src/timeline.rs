//! Timeline, run-length, and platform extraction from an ad's raw text.

use std::sync::LazyLock;

use adintel_core::{Platform, Timeline};
use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use regex::Regex;

static STARTED_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"Started running on (.+?)(?:\n|$)").expect("valid regex"));
static RAN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"Ran from (.+?) to (.+?)(?:\n|$)").expect("valid regex"));

/// Surface date formats seen in Ads Library timeline lines.
const DATE_FORMATS: &[&str] = &["%b %d, %Y", "%B %d, %Y", "%Y-%m-%d", "%m/%d/%Y"];

/// Extract the run timeline from the raw card text.
///
/// `"Started running on <date>"` marks an active ad; `"Ran from <a> to <b>"`
/// marks a finished one. With neither line present, all dates are `None` and
/// `is_active` keeps its optimistic `true` default.
#[must_use]
pub fn extract_timeline(raw_text: &str) -> Timeline {
    if let Some(captures) = STARTED_RE.captures(raw_text) {
        return Timeline {
            start_date: Some(captures[1].trim().to_owned()),
            end_date: None,
            is_active: true,
        };
    }

    if let Some(captures) = RAN_RE.captures(raw_text) {
        return Timeline {
            start_date: Some(captures[1].trim().to_owned()),
            end_date: Some(captures[2].trim().to_owned()),
            is_active: false,
        };
    }

    Timeline::default()
}

/// Parse a surface date string against the known Ads Library formats.
fn parse_surface_date(raw: &str) -> Option<NaiveDate> {
    let trimmed = raw.trim();
    DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(trimmed, format).ok())
}

/// Days elapsed since `start_date`, as a euclidean floor so a start date in
/// the future yields a negative count rather than clamping to zero.
/// `None` when the date string is absent or unparseable.
#[must_use]
pub fn days_running(start_date: Option<&str>, now: DateTime<Utc>) -> Option<i64> {
    let start = parse_surface_date(start_date?)?;
    let start_midnight = start.and_time(NaiveTime::MIN).and_utc();
    Some((now - start_midnight).num_seconds().div_euclid(86_400))
}

/// Platforms named in the raw card text, in fixed scan order. Defaults to
/// `[facebook]` when nothing is named.
#[must_use]
pub fn extract_platforms(raw_text: &str) -> Vec<Platform> {
    let lower = raw_text.to_lowercase();
    let mut platforms = Vec::new();

    if lower.contains("facebook") {
        platforms.push(Platform::Facebook);
    }
    if lower.contains("instagram") {
        platforms.push(Platform::Instagram);
    }
    if lower.contains("messenger") {
        platforms.push(Platform::Messenger);
    }
    if lower.contains("audience network") {
        platforms.push(Platform::AudienceNetwork);
    }

    if platforms.is_empty() {
        platforms.push(Platform::Facebook);
    }
    platforms
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(y: i32, m: u32, d: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, 12, 0, 0).unwrap()
    }

    // -----------------------------------------------------------------------
    // extract_timeline
    // -----------------------------------------------------------------------

    #[test]
    fn started_running_line_marks_active() {
        let timeline = extract_timeline("Library ID: 123\nStarted running on Jan 5, 2025\nMore");
        assert_eq!(timeline.start_date.as_deref(), Some("Jan 5, 2025"));
        assert!(timeline.end_date.is_none());
        assert!(timeline.is_active);
    }

    #[test]
    fn ran_from_line_marks_inactive_with_both_dates() {
        let timeline = extract_timeline("Ran from Jan 5, 2025 to Mar 1, 2025\n");
        assert_eq!(timeline.start_date.as_deref(), Some("Jan 5, 2025"));
        assert_eq!(timeline.end_date.as_deref(), Some("Mar 1, 2025"));
        assert!(!timeline.is_active);
    }

    #[test]
    fn started_line_takes_precedence_over_ran_line() {
        let text = "Started running on Jan 5, 2025\nRan from Jan 1, 2024 to Feb 1, 2024";
        let timeline = extract_timeline(text);
        assert_eq!(timeline.start_date.as_deref(), Some("Jan 5, 2025"));
        assert!(timeline.is_active);
    }

    #[test]
    fn no_timeline_text_defaults_optimistically_active() {
        let timeline = extract_timeline("no dates here");
        assert!(timeline.start_date.is_none());
        assert!(timeline.end_date.is_none());
        assert!(timeline.is_active);
    }

    #[test]
    fn date_at_end_of_text_is_captured() {
        let timeline = extract_timeline("Started running on Feb 12, 2025");
        assert_eq!(timeline.start_date.as_deref(), Some("Feb 12, 2025"));
    }

    // -----------------------------------------------------------------------
    // days_running
    // -----------------------------------------------------------------------

    #[test]
    fn days_running_counts_whole_elapsed_days() {
        let days = days_running(Some("Jan 5, 2025"), at(2025, 1, 15));
        // Jan 5 00:00 to Jan 15 12:00 is 10.5 days; floor to 10.
        assert_eq!(days, Some(10));
    }

    #[test]
    fn days_running_accepts_full_month_names() {
        let days = days_running(Some("January 5, 2025"), at(2025, 1, 6));
        assert_eq!(days, Some(1));
    }

    #[test]
    fn days_running_accepts_iso_dates() {
        let days = days_running(Some("2025-01-05"), at(2025, 1, 5));
        assert_eq!(days, Some(0));
    }

    #[test]
    fn future_start_date_goes_negative() {
        let days = days_running(Some("Jan 20, 2025"), at(2025, 1, 15));
        // 12:00 on the 15th is 4.5 days before the 20th; floor is -5.
        assert_eq!(days, Some(-5));
    }

    #[test]
    fn unparseable_date_yields_none() {
        assert_eq!(days_running(Some("sometime last spring"), at(2025, 1, 15)), None);
    }

    #[test]
    fn absent_date_yields_none() {
        assert_eq!(days_running(None, at(2025, 1, 15)), None);
    }

    // -----------------------------------------------------------------------
    // extract_platforms
    // -----------------------------------------------------------------------

    #[test]
    fn platforms_scan_in_fixed_order() {
        let platforms = extract_platforms("Platforms\nInstagram, Facebook, Audience Network");
        assert_eq!(
            platforms,
            vec![
                Platform::Facebook,
                Platform::Instagram,
                Platform::AudienceNetwork
            ]
        );
    }

    #[test]
    fn no_platform_text_defaults_to_facebook() {
        assert_eq!(extract_platforms("nothing here"), vec![Platform::Facebook]);
    }

    #[test]
    fn messenger_is_detected() {
        assert_eq!(
            extract_platforms("shown on Messenger"),
            vec![Platform::Messenger]
        );
    }
}
