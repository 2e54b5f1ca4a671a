//! Webinar schedule composition and display.
//!
//! The scheduler form collects a calendar date and a start/end wall-clock pair
//! from separate pickers. This module turns them into absolute instants under
//! a configurable [`TimezonePolicy`] and renders the labels shown next to the
//! pickers and in the webinar table.

use std::fmt;
use std::str::FromStr;

use chrono::{
    offset::LocalResult, DateTime, Datelike, FixedOffset, Local, NaiveDate, NaiveDateTime,
    NaiveTime, Offset, TimeZone, Timelike, Utc,
};
use chrono_tz::Tz;
use thiserror::Error;

/// Format produced by the date picker.
pub const PICKER_DATE_FORMAT: &str = "%Y-%m-%d";
/// Format produced by the time pickers (24h, zero padded).
pub const PICKER_TIME_FORMAT: &str = "%H:%M";

const CLOCK_FORMAT: &str = "%-I:%M %p";

const SHORT_MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScheduleError {
    #[error("{at} does not exist in timezone {zone}")]
    NonexistentLocalTime { at: NaiveDateTime, zone: String },

    #[error("end time {end} is before start time {start}")]
    EndBeforeStart { start: NaiveTime, end: NaiveTime },

    #[error("unknown timezone: {0}")]
    UnknownTimezone(String),
}

/// Which zone wall-clock picker values are interpreted in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TimezonePolicy {
    /// Zone of the process doing the composition.
    #[default]
    Local,
    Utc,
    Named(Tz),
}

impl TimezonePolicy {
    /// Resolve a wall-clock value to an absolute instant.
    ///
    /// A value that occurs twice (DST fold) resolves to the earlier instant.
    /// A value skipped by a DST gap is an error.
    pub fn localize(&self, naive: NaiveDateTime) -> Result<DateTime<FixedOffset>, ScheduleError> {
        match self {
            Self::Local => localize_in(&Local, naive, self),
            Self::Utc => localize_in(&Utc, naive, self),
            Self::Named(tz) => localize_in(tz, naive, self),
        }
    }
}

fn localize_in<Z: TimeZone>(
    tz: &Z,
    naive: NaiveDateTime,
    policy: &TimezonePolicy,
) -> Result<DateTime<FixedOffset>, ScheduleError> {
    let resolved = match tz.from_local_datetime(&naive) {
        LocalResult::Single(dt) => dt,
        LocalResult::Ambiguous(a, b) => {
            if a <= b {
                a
            } else {
                b
            }
        }
        LocalResult::None => {
            return Err(ScheduleError::NonexistentLocalTime {
                at: naive,
                zone: policy.to_string(),
            })
        }
    };

    let offset = resolved.offset().fix();
    Ok(resolved.with_timezone(&offset))
}

impl fmt::Display for TimezonePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Local => f.write_str("local"),
            Self::Utc => f.write_str("UTC"),
            Self::Named(tz) => f.write_str(tz.name()),
        }
    }
}

impl FromStr for TimezonePolicy {
    type Err = ScheduleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.eq_ignore_ascii_case("local") {
            return Ok(Self::Local);
        }
        if trimmed.eq_ignore_ascii_case("utc") {
            return Ok(Self::Utc);
        }
        trimmed
            .parse::<Tz>()
            .map(Self::Named)
            .map_err(|_| ScheduleError::UnknownTimezone(trimmed.to_string()))
    }
}

/// Absolute start/end pair for one webinar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Schedule {
    pub start: DateTime<FixedOffset>,
    pub end: DateTime<FixedOffset>,
}

/// Join a picker date and time into a single wall-clock value.
///
/// Pickers work at minute precision, so seconds are dropped.
pub fn wall_clock(date: NaiveDate, time: NaiveTime) -> NaiveDateTime {
    let minute = time
        .with_second(0)
        .and_then(|t| t.with_nanosecond(0))
        .unwrap_or(time);
    date.and_time(minute)
}

/// Compose the absolute start and end of a webinar held on `date`.
pub fn compose_schedule(
    date: NaiveDate,
    start: NaiveTime,
    end: NaiveTime,
    policy: &TimezonePolicy,
) -> Result<Schedule, ScheduleError> {
    let start_at = policy.localize(wall_clock(date, start))?;
    let end_at = policy.localize(wall_clock(date, end))?;

    if end_at < start_at {
        return Err(ScheduleError::EndBeforeStart { start, end });
    }

    Ok(Schedule {
        start: start_at,
        end: end_at,
    })
}

/// English ordinal suffix for a day of the month.
pub fn ordinal_suffix(day: u32) -> &'static str {
    if (11..=13).contains(&(day % 100)) {
        return "th";
    }
    match day % 10 {
        1 => "st",
        2 => "nd",
        3 => "rd",
        _ => "th",
    }
}

/// Day with ordinal suffix and short month, e.g. `5th Mar`.
pub fn day_month_label<D: Datelike>(date: &D) -> String {
    let day = date.day();
    format!(
        "{}{} {}",
        day,
        ordinal_suffix(day),
        SHORT_MONTHS[date.month0() as usize]
    )
}

/// Label shown in the date picker once a date is chosen.
pub fn picker_date_label(date: NaiveDate) -> String {
    day_month_label(&date)
}

/// Table label for a stored webinar, e.g. `9:30 AM - 10:15 AM | 5th Mar`.
pub fn schedule_label(
    start: Option<&DateTime<FixedOffset>>,
    end: Option<&DateTime<FixedOffset>>,
) -> String {
    match (start, end) {
        (Some(start), Some(end)) => format!(
            "{} - {} | {}",
            start.format(CLOCK_FORMAT),
            end.format(CLOCK_FORMAT),
            day_month_label(start)
        ),
        _ => "Not available".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn time(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    #[test]
    fn test_ordinal_suffix_for_every_day() {
        for day in 1..=31u32 {
            let expected = match day {
                11 | 12 | 13 => "th",
                d if d % 10 == 1 => "st",
                d if d % 10 == 2 => "nd",
                d if d % 10 == 3 => "rd",
                _ => "th",
            };
            assert_eq!(ordinal_suffix(day), expected, "day {}", day);
        }
    }

    #[test]
    fn test_ordinal_suffix_examples() {
        assert_eq!(ordinal_suffix(1), "st");
        assert_eq!(ordinal_suffix(2), "nd");
        assert_eq!(ordinal_suffix(3), "rd");
        assert_eq!(ordinal_suffix(4), "th");
        assert_eq!(ordinal_suffix(11), "th");
        assert_eq!(ordinal_suffix(12), "th");
        assert_eq!(ordinal_suffix(13), "th");
        assert_eq!(ordinal_suffix(21), "st");
        assert_eq!(ordinal_suffix(22), "nd");
        assert_eq!(ordinal_suffix(23), "rd");
        assert_eq!(ordinal_suffix(31), "st");
        assert_eq!(ordinal_suffix(111), "th");
        assert_eq!(ordinal_suffix(101), "st");
    }

    #[test]
    fn test_compose_in_local_zone() {
        let schedule =
            compose_schedule(date(2024, 3, 5), time(9, 30), time(10, 15), &TimezonePolicy::Local)
                .unwrap();

        let expected_start = Local
            .from_local_datetime(&date(2024, 3, 5).and_time(time(9, 30)))
            .earliest()
            .unwrap();
        let expected_end = Local
            .from_local_datetime(&date(2024, 3, 5).and_time(time(10, 15)))
            .earliest()
            .unwrap();

        assert_eq!(schedule.start, expected_start);
        assert_eq!(schedule.end, expected_end);
        assert!(schedule.start < schedule.end);
    }

    #[test]
    fn test_compose_in_named_zone() {
        let policy: TimezonePolicy = "Asia/Kolkata".parse().unwrap();
        let schedule = compose_schedule(date(2024, 3, 5), time(9, 30), time(10, 15), &policy).unwrap();

        assert_eq!(schedule.start.to_rfc3339(), "2024-03-05T09:30:00+05:30");
        assert_eq!(schedule.end.to_rfc3339(), "2024-03-05T10:15:00+05:30");
    }

    #[test]
    fn test_seconds_are_dropped() {
        let with_seconds = NaiveTime::from_hms_milli_opt(9, 30, 45, 500).unwrap();
        let composed = wall_clock(date(2024, 3, 5), with_seconds);
        assert_eq!(composed, date(2024, 3, 5).and_time(time(9, 30)));
    }

    #[test]
    fn test_end_before_start_rejected() {
        let err = compose_schedule(date(2024, 3, 5), time(10, 15), time(9, 30), &TimezonePolicy::Utc)
            .unwrap_err();
        assert_eq!(
            err,
            ScheduleError::EndBeforeStart {
                start: time(10, 15),
                end: time(9, 30),
            }
        );
    }

    #[test]
    fn test_equal_start_and_end_allowed() {
        let schedule =
            compose_schedule(date(2024, 3, 5), time(9, 30), time(9, 30), &TimezonePolicy::Utc)
                .unwrap();
        assert_eq!(schedule.start, schedule.end);
    }

    #[test]
    fn test_dst_gap_is_an_error() {
        let policy = TimezonePolicy::Named(chrono_tz::America::New_York);
        let err = compose_schedule(date(2024, 3, 10), time(2, 30), time(3, 30), &policy).unwrap_err();
        assert!(matches!(err, ScheduleError::NonexistentLocalTime { .. }));
    }

    #[test]
    fn test_dst_fold_takes_earlier_instant() {
        let policy = TimezonePolicy::Named(chrono_tz::America::New_York);
        let start = policy
            .localize(date(2024, 11, 3).and_time(time(1, 30)))
            .unwrap();
        assert_eq!(start.to_rfc3339(), "2024-11-03T01:30:00-04:00");
    }

    #[test]
    fn test_policy_parsing() {
        assert_eq!("local".parse::<TimezonePolicy>().unwrap(), TimezonePolicy::Local);
        assert_eq!("UTC".parse::<TimezonePolicy>().unwrap(), TimezonePolicy::Utc);
        assert_eq!(
            "Europe/Berlin".parse::<TimezonePolicy>().unwrap(),
            TimezonePolicy::Named(chrono_tz::Europe::Berlin)
        );
        assert!(matches!(
            "Mars/Olympus".parse::<TimezonePolicy>(),
            Err(ScheduleError::UnknownTimezone(_))
        ));
        assert_eq!(TimezonePolicy::Named(chrono_tz::Europe::Berlin).to_string(), "Europe/Berlin");
    }

    #[test]
    fn test_picker_date_label() {
        assert_eq!(picker_date_label(date(2024, 3, 5)), "5th Mar");
        assert_eq!(picker_date_label(date(2024, 3, 1)), "1st Mar");
        assert_eq!(picker_date_label(date(2024, 12, 22)), "22nd Dec");
        assert_eq!(picker_date_label(date(2024, 7, 12)), "12th Jul");
    }

    #[test]
    fn test_schedule_label() {
        let schedule = compose_schedule(date(2024, 3, 5), time(9, 30), time(13, 5), &TimezonePolicy::Utc)
            .unwrap();
        assert_eq!(
            schedule_label(Some(&schedule.start), Some(&schedule.end)),
            "9:30 AM - 1:05 PM | 5th Mar"
        );
        assert_eq!(schedule_label(Some(&schedule.start), None), "Not available");
        assert_eq!(schedule_label(None, None), "Not available");
    }
}
