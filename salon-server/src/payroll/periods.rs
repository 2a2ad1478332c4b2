//! Pay-period date computation
//!
//! Pure calendar arithmetic over the configured [`PaySchedule`]: the
//! period containing a reference date, its neighbours, and a
//! human-readable schedule description. Weekly and biweekly periods
//! tile outward from the anchor date in both directions; semimonthly
//! and monthly periods are fixed to the calendar and ignore the
//! anchor's day component.

use chrono::{Datelike, Days, Months, NaiveDate};

use shared::models::{PayCadence, PayPeriod, PaySchedule};

/// Mid-month boundary for semimonthly periods (1st–15th / 16th–end)
const SEMIMONTHLY_SPLIT: u32 = 15;

fn last_day_of_month(date: NaiveDate) -> NaiveDate {
    let first = date.with_day(1).unwrap_or(date);
    first
        .checked_add_months(Months::new(1))
        .and_then(|d| d.checked_sub_days(Days::new(1)))
        .unwrap_or(date)
}

fn first_day_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

/// The pay period containing `on`
pub fn current_period(schedule: &PaySchedule, on: NaiveDate) -> PayPeriod {
    match schedule.cadence {
        PayCadence::Weekly => tiled_period(schedule.anchor_date, on, 7),
        PayCadence::Biweekly => tiled_period(schedule.anchor_date, on, 14),
        PayCadence::Semimonthly => {
            if on.day() <= SEMIMONTHLY_SPLIT {
                PayPeriod {
                    start: first_day_of_month(on),
                    end: on.with_day(SEMIMONTHLY_SPLIT).unwrap_or(on),
                }
            } else {
                PayPeriod {
                    start: on.with_day(SEMIMONTHLY_SPLIT + 1).unwrap_or(on),
                    end: last_day_of_month(on),
                }
            }
        }
        PayCadence::Monthly => PayPeriod {
            start: first_day_of_month(on),
            end: last_day_of_month(on),
        },
    }
}

/// Fixed-length period tiling from the anchor; `div_euclid` keeps the
/// math correct for reference dates before the anchor
fn tiled_period(anchor: NaiveDate, on: NaiveDate, length_days: i64) -> PayPeriod {
    let offset = (on - anchor).num_days().div_euclid(length_days);
    let start = anchor + chrono::Duration::days(offset * length_days);
    PayPeriod {
        start,
        end: start + chrono::Duration::days(length_days - 1),
    }
}

/// The period immediately before the one containing `on`
pub fn previous_period(schedule: &PaySchedule, on: NaiveDate) -> PayPeriod {
    let current = current_period(schedule, on);
    let day_before = current
        .start
        .checked_sub_days(Days::new(1))
        .unwrap_or(current.start);
    current_period(schedule, day_before)
}

/// The `n` periods after the one containing `on`, nearest first
pub fn upcoming_periods(schedule: &PaySchedule, on: NaiveDate, n: usize) -> Vec<PayPeriod> {
    let mut periods = Vec::with_capacity(n);
    let mut cursor = current_period(schedule, on);
    for _ in 0..n {
        let next_start = match cursor.end.checked_add_days(Days::new(1)) {
            Some(d) => d,
            None => break,
        };
        cursor = current_period(schedule, next_start);
        periods.push(cursor);
    }
    periods
}

/// Human-readable schedule summary for the settings screen
pub fn schedule_description(schedule: &PaySchedule) -> String {
    match schedule.cadence {
        PayCadence::Weekly => format!(
            "Weekly, starting each {}",
            schedule.anchor_date.format("%A")
        ),
        PayCadence::Biweekly => format!(
            "Every other {}, anchored to {}",
            schedule.anchor_date.format("%A"),
            schedule.anchor_date.format("%Y-%m-%d")
        ),
        PayCadence::Semimonthly => {
            "Twice monthly: 1st-15th and 16th through end of month".to_string()
        }
        PayCadence::Monthly => "Monthly: 1st through end of month".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn schedule(cadence: PayCadence, anchor: NaiveDate) -> PaySchedule {
        PaySchedule {
            cadence,
            anchor_date: anchor,
        }
    }

    #[test]
    fn weekly_periods_tile_from_anchor() {
        // Anchor is a Friday
        let s = schedule(PayCadence::Weekly, date(2024, 1, 5));
        let p = current_period(&s, date(2024, 1, 17));
        assert_eq!(p.start, date(2024, 1, 12));
        assert_eq!(p.end, date(2024, 1, 18));
        assert!(p.contains(date(2024, 1, 17)));
    }

    #[test]
    fn weekly_handles_dates_before_anchor() {
        let s = schedule(PayCadence::Weekly, date(2024, 1, 5));
        let p = current_period(&s, date(2024, 1, 2));
        assert_eq!(p.start, date(2023, 12, 29));
        assert_eq!(p.end, date(2024, 1, 4));
    }

    #[test]
    fn biweekly_previous_abuts_current() {
        let s = schedule(PayCadence::Biweekly, date(2024, 1, 5));
        let on = date(2024, 3, 1);
        let current = current_period(&s, on);
        let previous = previous_period(&s, on);
        assert_eq!(
            previous.end.checked_add_days(Days::new(1)).unwrap(),
            current.start
        );
        assert_eq!((current.end - current.start).num_days(), 13);
    }

    #[test]
    fn semimonthly_splits_mid_month() {
        let s = schedule(PayCadence::Semimonthly, date(2024, 1, 1));
        let first_half = current_period(&s, date(2024, 2, 10));
        assert_eq!(first_half.start, date(2024, 2, 1));
        assert_eq!(first_half.end, date(2024, 2, 15));

        let second_half = current_period(&s, date(2024, 2, 16));
        assert_eq!(second_half.start, date(2024, 2, 16));
        // 2024 is a leap year
        assert_eq!(second_half.end, date(2024, 2, 29));
    }

    #[test]
    fn monthly_covers_whole_month() {
        let s = schedule(PayCadence::Monthly, date(2024, 1, 1));
        let p = current_period(&s, date(2024, 4, 17));
        assert_eq!(p.start, date(2024, 4, 1));
        assert_eq!(p.end, date(2024, 4, 30));
    }

    #[test]
    fn upcoming_periods_are_consecutive() {
        let s = schedule(PayCadence::Semimonthly, date(2024, 1, 1));
        let upcoming = upcoming_periods(&s, date(2024, 1, 10), 3);
        assert_eq!(upcoming.len(), 3);
        assert_eq!(upcoming[0].start, date(2024, 1, 16));
        assert_eq!(upcoming[1].start, date(2024, 2, 1));
        assert_eq!(upcoming[1].end, date(2024, 2, 15));
        assert_eq!(upcoming[2].start, date(2024, 2, 16));
    }

    #[test]
    fn descriptions_name_the_cadence() {
        let s = schedule(PayCadence::Biweekly, date(2024, 1, 5));
        assert_eq!(
            schedule_description(&s),
            "Every other Friday, anchored to 2024-01-05"
        );
        let s = schedule(PayCadence::Monthly, date(2024, 1, 1));
        assert_eq!(schedule_description(&s), "Monthly: 1st through end of month");
    }
}
