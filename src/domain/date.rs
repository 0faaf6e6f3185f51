//! Event date parsing and ordering
//!
//! Event dates are free strings. Every comparison between them goes through
//! [`compare_event_dates`], which also owns the policy for dates that do not parse:
//! they sort after every valid date and are equal to each other.

use std::cmp::Ordering;

use chrono::{DateTime, NaiveDate, NaiveDateTime};

/// Date-only layouts accepted in catalogs, tried in order.
const DATE_FORMATS: [&str; 8] =
    ["%Y-%m-%d", "%B %d, %Y", "%b %d, %Y", "%B %e, %Y", "%b %e, %Y", "%d %B %Y", "%m/%d/%Y", "%Y/%m/%d"];

/// Date-time layouts without offset, tried after RFC 3339.
const DATETIME_FORMATS: [&str; 3] = ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M"];

/// Parse an event date into a chronological instant.
///
/// Accepts RFC 3339 timestamps (normalized to UTC), ISO dates with or without a time,
/// and written forms such as `March 10, 2025` or `Mar 10, 2025`. Date-only values map
/// to midnight. Returns `None` for anything else.
pub fn parse_event_date(input: &str) -> Option<NaiveDateTime> {
    let input = input.trim();
    if input.is_empty() {
        return None;
    }

    if let Ok(timestamp) = DateTime::parse_from_rfc3339(input) {
        return Some(timestamp.naive_utc());
    }

    for fmt in DATETIME_FORMATS.iter() {
        if let Ok(timestamp) = NaiveDateTime::parse_from_str(input, fmt) {
            return Some(timestamp);
        }
    }

    for fmt in DATE_FORMATS.iter() {
        if let Ok(date) = NaiveDate::parse_from_str(input, fmt) {
            return date.and_hms_opt(0, 0, 0);
        }
    }

    None
}

/// Total order over parsed event dates; unparseable (`None`) sorts last.
pub fn compare_event_dates(a: Option<NaiveDateTime>, b: Option<NaiveDateTime>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.cmp(&b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal
    }
}

/// Convenience wrapper comparing two raw date strings.
pub fn compare_date_strings(a: &str, b: &str) -> Ordering {
    compare_event_dates(parse_event_date(a), parse_event_date(b))
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    fn midnight(year: i32, month: u32, day: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(year, month, day).unwrap().and_hms_opt(0, 0, 0).unwrap()
    }

    #[test]
    fn test_parses_iso_and_written_dates() {
        assert_eq!(parse_event_date("2025-03-10"), Some(midnight(2025, 3, 10)));
        assert_eq!(parse_event_date("March 10, 2025"), Some(midnight(2025, 3, 10)));
        assert_eq!(parse_event_date("September 5, 2024"), Some(midnight(2024, 9, 5)));
        assert_eq!(parse_event_date("Dec 20, 2024"), Some(midnight(2024, 12, 20)));
        assert_eq!(parse_event_date("03/10/2025"), Some(midnight(2025, 3, 10)));
    }

    #[test]
    fn test_parses_timestamps() {
        let expected = NaiveDate::from_ymd_opt(2025, 3, 10).unwrap().and_hms_opt(14, 30, 0).unwrap();
        assert_eq!(parse_event_date("2025-03-10T14:30:00"), Some(expected));
        assert_eq!(parse_event_date("2025-03-10T16:30:00+02:00"), Some(expected));
    }

    #[test]
    fn test_rejects_garbage() {
        assert_eq!(parse_event_date(""), None);
        assert_eq!(parse_event_date("   "), None);
        assert_eq!(parse_event_date("sometime next spring"), None);
        assert_eq!(parse_event_date("2025-13-45"), None);
    }

    #[test]
    fn test_valid_dates_compare_chronologically() {
        assert_eq!(compare_date_strings("2025-01-01", "2025-06-01"), Ordering::Less);
        assert_eq!(compare_date_strings("June 1, 2025", "2025-01-01"), Ordering::Greater);
        assert_eq!(compare_date_strings("2025-05-01", "May 1, 2025"), Ordering::Equal);
    }

    #[test]
    fn test_unparseable_dates_sort_last() {
        assert_eq!(compare_date_strings("not a date", "2025-01-01"), Ordering::Greater);
        assert_eq!(compare_date_strings("2099-12-31", "not a date"), Ordering::Less);
        assert_eq!(compare_date_strings("tbd", "not a date"), Ordering::Equal);
    }
}
