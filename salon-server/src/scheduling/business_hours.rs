//! Business-hours slot grid
//!
//! Candidate start times run from opening to closing time on the
//! configured interval. A slot is offered when the requested duration
//! fits before closing and does not overlap any appointment that still
//! occupies the calendar (cancelled ones do not).

use chrono::{Datelike, NaiveDate, NaiveTime, TimeDelta};

use shared::models::{Appointment, BusinessInfo};

use crate::utils::time::{format_clock_time, parse_clock_time};

/// One bookable start time
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AvailableSlot {
    /// 12-hour label, e.g. `"9:30 AM"`
    pub start_time: String,
    /// 12-hour label for start + duration
    pub end_time: String,
}

struct Booked {
    start: NaiveTime,
    end: NaiveTime,
}

/// Compute open slots of `duration_minutes` on `date`
///
/// `existing` should be that day's appointments; when `groomer_id` is
/// given, only that groomer's bookings block. A closed day or malformed
/// hours yields no slots.
pub fn available_slots(
    info: &BusinessInfo,
    date: NaiveDate,
    duration_minutes: u32,
    existing: &[Appointment],
    groomer_id: Option<&str>,
) -> Vec<AvailableSlot> {
    let day = info.hours.for_weekday(date.weekday());
    if day.closed || duration_minutes == 0 {
        return Vec::new();
    }
    let (Some(open), Some(close)) = (parse_clock_time(&day.open), parse_clock_time(&day.close))
    else {
        return Vec::new();
    };
    if close <= open {
        return Vec::new();
    }

    let booked: Vec<Booked> = existing
        .iter()
        .filter(|a| a.status.blocks_slot())
        .filter(|a| groomer_id.map_or(true, |g| a.groomer_id == g))
        .filter_map(|a| {
            let start = parse_clock_time(&a.start_time)?;
            let end = parse_clock_time(&a.end_time)?;
            (end > start).then_some(Booked { start, end })
        })
        .collect();

    let interval = TimeDelta::minutes(i64::from(info.slot_interval_minutes.max(1)));
    let duration = TimeDelta::minutes(i64::from(duration_minutes));

    let mut slots = Vec::new();
    let mut start = open;
    loop {
        // overflowing_add_signed wraps past midnight and reports the
        // wrap in the second tuple element
        let (end, wrapped) = start.overflowing_add_signed(duration);
        if wrapped != 0 || end > close {
            break;
        }

        let free = booked.iter().all(|b| end <= b.start || start >= b.end);
        if free {
            slots.push(AvailableSlot {
                start_time: format_clock_time(start),
                end_time: format_clock_time(end),
            });
        }

        let (next, wrapped) = start.overflowing_add_signed(interval);
        if wrapped != 0 || next <= start {
            break;
        }
        start = next;
    }
    slots
}
