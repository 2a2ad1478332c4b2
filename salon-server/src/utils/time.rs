//! Time utilities — date and clock-time parsing
//!
//! Stored documents keep dates as `YYYY-MM-DD` strings and times of day
//! in the 12-hour format the booking screens produce (`"9:00 AM"`).
//! Parsing is lenient where aggregation filters need it (`Option`) and
//! strict where handlers validate input (`AppResult`).

use chrono::{NaiveDate, NaiveTime};

use shared::{AppError, AppResult};

/// Parse a `YYYY-MM-DD` date, `None` on malformed input
pub fn parse_date(date: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(date.trim(), "%Y-%m-%d").ok()
}

/// Parse a `YYYY-MM-DD` date, validation error on malformed input
pub fn require_date(date: &str) -> AppResult<NaiveDate> {
    parse_date(date).ok_or_else(|| AppError::validation(format!("Invalid date format: {}", date)))
}

/// Parse a clock time: 12-hour (`"9:00 AM"`) with a 24-hour
/// (`"13:00"`) fallback. `None` on malformed input.
pub fn parse_clock_time(value: &str) -> Option<NaiveTime> {
    let trimmed = value.trim();
    NaiveTime::parse_from_str(trimmed, "%I:%M %p")
        .or_else(|_| NaiveTime::parse_from_str(trimmed, "%H:%M"))
        .ok()
}

/// Minutes from `start` to `end`, `None` if either side is
/// unparseable. May be zero or negative; callers decide what to drop.
pub fn duration_minutes(start: &str, end: &str) -> Option<i64> {
    let start = parse_clock_time(start)?;
    let end = parse_clock_time(end)?;
    Some((end - start).num_minutes())
}

/// Format a clock time in the 12-hour style used on the wire
/// (`"9:00 AM"`, no leading zero on the hour)
pub fn format_clock_time(time: NaiveTime) -> String {
    time.format("%-I:%M %p").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_twelve_hour_times() {
        assert_eq!(
            parse_clock_time("9:00 AM"),
            NaiveTime::from_hms_opt(9, 0, 0)
        );
        assert_eq!(
            parse_clock_time("12:30 PM"),
            NaiveTime::from_hms_opt(12, 30, 0)
        );
        assert_eq!(
            parse_clock_time("12:15 AM"),
            NaiveTime::from_hms_opt(0, 15, 0)
        );
    }

    #[test]
    fn falls_back_to_twenty_four_hour() {
        assert_eq!(parse_clock_time("13:45"), NaiveTime::from_hms_opt(13, 45, 0));
    }

    #[test]
    fn rejects_garbage() {
        assert_eq!(parse_clock_time("noonish"), None);
        assert_eq!(parse_date("01/05/2024"), None);
    }

    #[test]
    fn duration_can_be_negative() {
        // End before start: the caller drops it, we just report it
        assert_eq!(duration_minutes("10:00 AM", "9:00 AM"), Some(-60));
        assert_eq!(duration_minutes("9:00 AM", "10:30 AM"), Some(90));
        assert_eq!(duration_minutes("9:00 AM", "bogus"), None);
    }

    #[test]
    fn round_trips_display_format() {
        let t = parse_clock_time("9:00 AM").unwrap();
        assert_eq!(format_clock_time(t), "9:00 AM");
    }
}
