//! Rolling leaderboard periods.
//!
//! A period runs from the 18th of one month through the 17th (23:59:59 UTC)
//! of the following month. Month arithmetic is done on a flat month index
//! (`year * 12 + month0`), so year rollover needs no special casing.

use std::fmt;

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, Utc};

use crate::error::{LeaderboardError, Result};

pub const PERIOD_START_DAY: u32 = 18;
pub const PERIOD_END_DAY: u32 = 17;

/// Which period to compute, relative to the one containing "now".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PeriodOffset {
    Current,
    Previous,
}

impl PeriodOffset {
    fn months_back(self) -> i32 {
        match self {
            PeriodOffset::Current => 0,
            PeriodOffset::Previous => 1,
        }
    }
}

/// Inclusive UTC range of one leaderboard period.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PeriodWindow {
    pub start: NaiveDate,
    /// End-of-day on the closing 17th.
    pub end: NaiveDateTime,
}

impl PeriodWindow {
    /// `start_at` query value, `YYYY-MM-DD`.
    pub fn start_param(&self) -> String {
        self.start.format("%Y-%m-%d").to_string()
    }

    /// `end_at` query value; upstream only takes day granularity.
    pub fn end_param(&self) -> String {
        self.end.date().format("%Y-%m-%d").to_string()
    }
}

impl fmt::Display for PeriodWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start_param(), self.end_param())
    }
}

/// Compute the period window for `offset` as seen at `now`.
pub fn window_for(offset: PeriodOffset, now: DateTime<Utc>) -> Result<PeriodWindow> {
    let today = now.date_naive();
    let in_current_period = today.day() >= PERIOD_START_DAY;

    let this_month = today.year() * 12 + today.month0() as i32;
    let start_month = this_month - i32::from(!in_current_period) - offset.months_back();

    let start = date_in_month(start_month, PERIOD_START_DAY)?;
    let end = date_in_month(start_month + 1, PERIOD_END_DAY)?
        .and_hms_opt(23, 59, 59)
        .ok_or_else(|| LeaderboardError::PeriodOutOfRange(now.to_rfc3339()))?;

    Ok(PeriodWindow { start, end })
}

fn date_in_month(month_index: i32, day: u32) -> Result<NaiveDate> {
    let year = month_index.div_euclid(12);
    let month = month_index.rem_euclid(12) as u32 + 1;
    NaiveDate::from_ymd_opt(year, month, day).ok_or_else(|| {
        LeaderboardError::PeriodOutOfRange(format!("{year:04}-{month:02}-{day:02}"))
    })
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, TimeZone};

    use super::*;

    fn at(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, h, min, s).unwrap()
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_current_on_or_after_18th() {
        let w = window_for(PeriodOffset::Current, at(2024, 5, 18, 0, 0, 0)).unwrap();
        assert_eq!(w.start, date(2024, 5, 18));
        assert_eq!(w.end, date(2024, 6, 17).and_hms_opt(23, 59, 59).unwrap());

        let w = window_for(PeriodOffset::Current, at(2024, 5, 31, 12, 0, 0)).unwrap();
        assert_eq!(w.start, date(2024, 5, 18));
        assert_eq!(w.end.date(), date(2024, 6, 17));
    }

    #[test]
    fn test_current_before_18th() {
        let w = window_for(PeriodOffset::Current, at(2024, 5, 17, 23, 59, 59)).unwrap();
        assert_eq!(w.start, date(2024, 4, 18));
        assert_eq!(w.end.date(), date(2024, 5, 17));

        let w = window_for(PeriodOffset::Current, at(2024, 5, 1, 0, 0, 0)).unwrap();
        assert_eq!(w.start, date(2024, 4, 18));
    }

    #[test]
    fn test_previous_shifts_one_period() {
        let w = window_for(PeriodOffset::Previous, at(2024, 5, 20, 8, 0, 0)).unwrap();
        assert_eq!(w.start, date(2024, 4, 18));
        assert_eq!(w.end.date(), date(2024, 5, 17));

        let w = window_for(PeriodOffset::Previous, at(2024, 5, 10, 8, 0, 0)).unwrap();
        assert_eq!(w.start, date(2024, 3, 18));
        assert_eq!(w.end.date(), date(2024, 4, 17));
    }

    #[test]
    fn test_year_rollover() {
        // Jan 5: current period started last December.
        let w = window_for(PeriodOffset::Current, at(2025, 1, 5, 0, 0, 0)).unwrap();
        assert_eq!(w.start, date(2024, 12, 18));
        assert_eq!(w.end.date(), date(2025, 1, 17));

        let w = window_for(PeriodOffset::Previous, at(2025, 1, 5, 0, 0, 0)).unwrap();
        assert_eq!(w.start, date(2024, 11, 18));
        assert_eq!(w.end.date(), date(2024, 12, 17));

        // Dec 20: current period ends next January.
        let w = window_for(PeriodOffset::Current, at(2024, 12, 20, 0, 0, 0)).unwrap();
        assert_eq!(w.start, date(2024, 12, 18));
        assert_eq!(w.end.date(), date(2025, 1, 17));

        let w = window_for(PeriodOffset::Current, at(2024, 12, 5, 0, 0, 0)).unwrap();
        assert_eq!(w.start, date(2024, 11, 18));
        assert_eq!(w.end.date(), date(2024, 12, 17));

        // Feb 2: previous period straddles the year boundary.
        let w = window_for(PeriodOffset::Previous, at(2025, 2, 2, 0, 0, 0)).unwrap();
        assert_eq!(w.start, date(2024, 12, 18));
        assert_eq!(w.end.date(), date(2025, 1, 17));
    }

    #[test]
    fn test_previous_ends_day_before_current_starts() {
        let mut now = at(2023, 1, 1, 6, 30, 0);
        let stop = at(2025, 1, 1, 0, 0, 0);
        while now < stop {
            let cur = window_for(PeriodOffset::Current, now).unwrap();
            let prev = window_for(PeriodOffset::Previous, now).unwrap();
            assert_eq!(prev.end.date() + Duration::days(1), cur.start, "at {now}");
            assert!(cur.start <= cur.end.date());
            assert!(cur.start <= now.date_naive() && now.date_naive() <= cur.end.date());
            now += Duration::days(1);
        }
    }

    #[test]
    fn test_query_params() {
        let w = window_for(PeriodOffset::Current, at(2024, 2, 29, 0, 0, 0)).unwrap();
        assert_eq!(w.start_param(), "2024-02-18");
        assert_eq!(w.end_param(), "2024-03-17");
        assert_eq!(w.to_string(), "2024-02-18..2024-03-17");
    }
}
