/// Utilities for the dashboard date range
///
/// Date inputs carry `yyyy-mm-dd` strings; the analytics request expects
/// full UTC timestamps, so the bounds are widened to whole days here.
use chrono::{DateTime, Datelike, NaiveDate, TimeZone, Utc};

/// Default period: January 1st of the current year through today
pub fn default_range() -> (String, String) {
    let today = Utc::now().date_naive();
    let year_start = NaiveDate::from_ymd_opt(today.year(), 1, 1).expect("Invalid year start date");
    (
        year_start.format("%Y-%m-%d").to_string(),
        today.format("%Y-%m-%d").to_string(),
    )
}

/// Start-of-day bound for a `yyyy-mm-dd` input value
/// Example: "2024-03-15" -> 2024-03-15T00:00:00Z
pub fn day_start_utc(date: &str) -> Option<DateTime<Utc>> {
    let parsed = NaiveDate::parse_from_str(date, "%Y-%m-%d").ok()?;
    Some(Utc.from_utc_datetime(&parsed.and_hms_opt(0, 0, 0)?))
}

/// End-of-day bound for a `yyyy-mm-dd` input value
/// Example: "2024-03-15" -> 2024-03-15T23:59:59Z
pub fn day_end_utc(date: &str) -> Option<DateTime<Utc>> {
    let parsed = NaiveDate::parse_from_str(date, "%Y-%m-%d").ok()?;
    Some(Utc.from_utc_datetime(&parsed.and_hms_opt(23, 59, 59)?))
}

/// First and last day of the month containing `date`, `yyyy-mm-dd` both ways
pub fn month_bounds(date: NaiveDate) -> (String, String) {
    let year = date.year();
    let month = date.month();
    let month_start = NaiveDate::from_ymd_opt(year, month, 1).expect("Invalid month start date");
    let month_end = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
            .map(|d| d - chrono::Duration::days(1))
            .expect("Invalid month end date")
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)
            .map(|d| d - chrono::Duration::days(1))
            .expect("Invalid month end date")
    };
    (
        month_start.format("%Y-%m-%d").to_string(),
        month_end.format("%Y-%m-%d").to_string(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_day_start() {
        let bound = day_start_utc("2024-03-15").unwrap();
        assert_eq!(
            bound.to_rfc3339_opts(chrono::SecondsFormat::Secs, true),
            "2024-03-15T00:00:00Z"
        );
    }

    #[test]
    fn test_day_end() {
        let bound = day_end_utc("2024-12-31").unwrap();
        assert_eq!(
            bound.to_rfc3339_opts(chrono::SecondsFormat::Secs, true),
            "2024-12-31T23:59:59Z"
        );
    }

    #[test]
    fn test_invalid_input() {
        assert_eq!(day_start_utc("not-a-date"), None);
        assert_eq!(day_end_utc("2024-13-01"), None);
    }

    #[test]
    fn test_month_bounds() {
        let date = NaiveDate::from_ymd_opt(2024, 2, 10).unwrap();
        assert_eq!(
            month_bounds(date),
            ("2024-02-01".to_string(), "2024-02-29".to_string())
        );

        let date = NaiveDate::from_ymd_opt(2023, 12, 5).unwrap();
        assert_eq!(
            month_bounds(date),
            ("2023-12-01".to_string(), "2023-12-31".to_string())
        );
    }

    #[test]
    fn test_default_range_shape() {
        let (from, to) = default_range();
        assert!(from.ends_with("-01-01"));
        assert_eq!(to.len(), 10);
    }
}
