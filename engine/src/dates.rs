// Date arithmetic for the date panel: calendar difference and shifting a
// base date by day/month/year offsets.

use crate::error::EngineError;
use chrono::{Datelike, Duration, Months, NaiveDate};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateDifference {
    pub days: i64,
    pub months: i32,
    pub years: i32,
}

/// Difference from `start` to `end`: total days, whole calendar months, and
/// whole calendar years. Negative when `end` precedes `start`.
pub fn difference(start: NaiveDate, end: NaiveDate) -> DateDifference {
    let days = (end - start).num_days();
    let mut months =
        (end.year() - start.year()) * 12 + end.month() as i32 - start.month() as i32;
    // A month only counts once the day-of-month has been reached.
    if months > 0 && end.day() < start.day() {
        months -= 1;
    } else if months < 0 && end.day() > start.day() {
        months += 1;
    }
    DateDifference { days, months, years: months / 12 }
}

/// Shifts `base` by days, then months, then years, in that order. Month and
/// year steps clamp to the end of the target month (Jan 31 + 1 month =
/// Feb 28). Negative offsets subtract.
pub fn shift(base: NaiveDate, days: i64, months: i32, years: i32) -> Result<NaiveDate, EngineError> {
    let offset = Duration::try_days(days).ok_or(EngineError::DateOutOfRange)?;
    let mut date = base
        .checked_add_signed(offset)
        .ok_or(EngineError::DateOutOfRange)?;
    date = shift_months(date, months)?;
    date = shift_months(date, years.checked_mul(12).ok_or(EngineError::DateOutOfRange)?)?;
    Ok(date)
}

fn shift_months(date: NaiveDate, months: i32) -> Result<NaiveDate, EngineError> {
    let shifted = if months >= 0 {
        date.checked_add_months(Months::new(months as u32))
    } else {
        date.checked_sub_months(Months::new(months.unsigned_abs()))
    };
    shifted.ok_or(EngineError::DateOutOfRange)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_difference_simple() {
        let diff = difference(date(2023, 1, 15), date(2024, 3, 20));
        assert_eq!(diff.days, 430);
        assert_eq!(diff.months, 14);
        assert_eq!(diff.years, 1);
    }

    #[test]
    fn test_difference_partial_month_not_counted() {
        let diff = difference(date(2024, 1, 31), date(2024, 2, 28));
        assert_eq!(diff.days, 28);
        assert_eq!(diff.months, 0);
        assert_eq!(diff.years, 0);
    }

    #[test]
    fn test_difference_same_day_is_zero() {
        let diff = difference(date(2024, 6, 1), date(2024, 6, 1));
        assert_eq!(diff, DateDifference { days: 0, months: 0, years: 0 });
    }

    #[test]
    fn test_difference_negative() {
        let diff = difference(date(2024, 3, 10), date(2024, 1, 10));
        assert_eq!(diff.days, -60);
        assert_eq!(diff.months, -2);
    }

    #[test]
    fn test_shift_days_then_months_then_years() {
        let result = shift(date(2024, 1, 1), 10, 2, 1).unwrap();
        assert_eq!(result, date(2025, 3, 11));
    }

    #[test]
    fn test_shift_clamps_end_of_month() {
        assert_eq!(shift(date(2024, 1, 31), 0, 1, 0).unwrap(), date(2024, 2, 29));
        assert_eq!(shift(date(2023, 1, 31), 0, 1, 0).unwrap(), date(2023, 2, 28));
    }

    #[test]
    fn test_shift_negative_offsets() {
        assert_eq!(shift(date(2024, 3, 15), -14, -1, 0).unwrap(), date(2024, 2, 1));
        assert_eq!(shift(date(2024, 2, 29), 0, 0, -1).unwrap(), date(2023, 2, 28));
    }

    #[test]
    fn test_shift_zero_is_identity() {
        assert_eq!(shift(date(2024, 5, 5), 0, 0, 0).unwrap(), date(2024, 5, 5));
    }

    #[test]
    fn test_shift_huge_day_offset_is_rejected() {
        // Beyond what a day duration can represent at all.
        assert_eq!(
            shift(date(2024, 1, 1), 200_000_000_000, 0, 0),
            Err(EngineError::DateOutOfRange)
        );
        assert_eq!(
            shift(date(2024, 1, 1), i64::MIN, 0, 0),
            Err(EngineError::DateOutOfRange)
        );
        // Representable as a duration but past the calendar's end.
        assert_eq!(
            shift(date(2024, 1, 1), 100_000_000_000, 0, 0),
            Err(EngineError::DateOutOfRange)
        );
    }
}
