//! The point-in-time value and the field-assembly helpers shared by the
//! recognizer extractors.

use std::str::FromStr;

use chrono::{Duration, NaiveDate, NaiveDateTime};
use serde::Serialize;

use crate::error::HorodateError;

/// A timezone-naive instant with second precision, or the invalid sentinel.
///
/// Every valid value is built through calendar arithmetic, so field
/// overflow has already been normalized away: day 32 of January is
/// February 1, hour 25 is 1:00 the next day. The sentinel
/// [`Stamp::INVALID`] marks unparseable input and propagates — formatting
/// it yields the empty string, never a default instant. The sentinel
/// orders before every valid instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Stamp(pub(crate) Option<NaiveDateTime>);

impl Stamp {
    /// The distinguished unparseable-input value.
    pub const INVALID: Stamp = Stamp(None);

    pub fn is_valid(&self) -> bool {
        self.0.is_some()
    }

    /// The underlying instant, if any.
    pub fn instant(&self) -> Option<NaiveDateTime> {
        self.0
    }

    /// Build an instant from raw calendar fields. `month` is zero-based.
    ///
    /// Out-of-range fields roll over instead of failing: the instant is
    /// assembled by adding day/hour/minute/second offsets onto the first
    /// of the (year-normalized) month. The sentinel comes back only when
    /// the arithmetic leaves chrono's representable range.
    pub fn assemble(year: i32, month: i64, day: i64, hour: i64, minute: i64, second: i64) -> Stamp {
        Stamp(assemble_fields(
            i64::from(year),
            month,
            day,
            hour,
            minute,
            second,
        ))
    }
}

impl From<NaiveDateTime> for Stamp {
    fn from(instant: NaiveDateTime) -> Self {
        Stamp(Some(instant))
    }
}

impl TryFrom<Stamp> for NaiveDateTime {
    type Error = HorodateError;

    fn try_from(stamp: Stamp) -> Result<Self, Self::Error> {
        stamp.0.ok_or(HorodateError::InvalidStamp)
    }
}

impl FromStr for Stamp {
    type Err = HorodateError;

    /// [`crate::parse`] with a `Result` seam: unrecognized text is an
    /// error here instead of the sentinel.
    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let stamp = crate::parse::parse(text);
        if stamp.is_valid() {
            Ok(stamp)
        } else {
            Err(HorodateError::InvalidStamp)
        }
    }
}

/// Calendar-arithmetic assembly with silent rollover. `month` is
/// zero-based and may be any magnitude; whole years are carried first,
/// then the remaining fields are added as offsets from the first of the
/// month.
pub(crate) fn assemble_fields(
    year: i64,
    month: i64,
    day: i64,
    hour: i64,
    minute: i64,
    second: i64,
) -> Option<NaiveDateTime> {
    let year = year + month.div_euclid(12);
    let month0 = month.rem_euclid(12) as u32;
    let first = NaiveDate::from_ymd_opt(i32::try_from(year).ok()?, month0 + 1, 1)?;
    first
        .and_hms_opt(0, 0, 0)?
        .checked_add_signed(Duration::try_days(day - 1)?)?
        .checked_add_signed(Duration::try_hours(hour)?)?
        .checked_add_signed(Duration::try_minutes(minute)?)?
        .checked_add_signed(Duration::try_seconds(second)?)
}

/// 12-hour clock disambiguation: "12 am" is midnight, "12 pm" stays noon,
/// any other pm hour gains 12. Hours already in 24-hour range pass
/// through untouched when no meridiem is present.
pub(crate) fn apply_meridiem(hour: i64, meridiem: Option<&str>) -> i64 {
    match meridiem.map(str::to_ascii_lowercase).as_deref() {
        Some("pm") if hour < 12 => hour + 12,
        Some("am") if hour == 12 => 0,
        _ => hour,
    }
}

/// Two-digit years pivot at 50: 0..=49 land in the 2000s, 50..=99 in the
/// 1900s.
pub(crate) fn pivot_year(two_digit: i64) -> i64 {
    if two_digit < 50 {
        two_digit + 2000
    } else {
        two_digit + 1900
    }
}

/// Midnight `offset_days` away from `now`'s date, anchoring
/// "aujourd'hui"/"hier" to the caller's local midnight.
pub(crate) fn local_midnight(now: NaiveDateTime, offset_days: i64) -> Option<NaiveDateTime> {
    now.date()
        .checked_add_signed(Duration::try_days(offset_days)?)?
        .and_hms_opt(0, 0, 0)
}

/// Lay a wall-clock time onto a midnight base after meridiem
/// disambiguation. Oversized fields roll forward, matching
/// [`assemble_fields`].
pub(crate) fn at_time(
    base: NaiveDateTime,
    hour: i64,
    minute: i64,
    second: i64,
    meridiem: Option<&str>,
) -> Option<NaiveDateTime> {
    base.checked_add_signed(Duration::try_hours(apply_meridiem(hour, meridiem))?)?
        .checked_add_signed(Duration::try_minutes(minute)?)?
        .checked_add_signed(Duration::try_seconds(second)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn instant(
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        second: u32,
    ) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(year, month, day)
            .unwrap()
            .and_hms_opt(hour, minute, second)
            .unwrap()
    }

    #[test]
    fn assemble_plain_fields() {
        assert_eq!(
            Stamp::assemble(2025, 5, 8, 14, 5, 33).instant(),
            Some(instant(2025, 6, 8, 14, 5, 33))
        );
    }

    #[test]
    fn assemble_day_overflow_rolls_into_next_month() {
        assert_eq!(
            Stamp::assemble(2025, 0, 32, 0, 0, 0).instant(),
            Some(instant(2025, 2, 1, 0, 0, 0))
        );
    }

    #[test]
    fn assemble_day_zero_rolls_back() {
        assert_eq!(
            Stamp::assemble(2025, 0, 0, 0, 0, 0).instant(),
            Some(instant(2024, 12, 31, 0, 0, 0))
        );
    }

    #[test]
    fn assemble_month_overflow_carries_the_year() {
        assert_eq!(
            Stamp::assemble(2025, 12, 1, 0, 0, 0).instant(),
            Some(instant(2026, 1, 1, 0, 0, 0))
        );
    }

    #[test]
    fn assemble_hour_overflow_rolls_into_next_day() {
        assert_eq!(
            Stamp::assemble(2025, 5, 8, 25, 0, 0).instant(),
            Some(instant(2025, 6, 9, 1, 0, 0))
        );
    }

    #[test]
    fn meridiem_noon_and_midnight() {
        assert_eq!(apply_meridiem(12, Some("pm")), 12);
        assert_eq!(apply_meridiem(12, Some("am")), 0);
        assert_eq!(apply_meridiem(9, Some("pm")), 21);
        assert_eq!(apply_meridiem(9, Some("AM")), 9);
        assert_eq!(apply_meridiem(14, None), 14);
    }

    #[test]
    fn pivot_splits_at_fifty() {
        assert_eq!(pivot_year(49), 2049);
        assert_eq!(pivot_year(50), 1950);
        assert_eq!(pivot_year(0), 2000);
        assert_eq!(pivot_year(99), 1999);
    }

    #[test]
    fn midnight_anchoring() {
        let now = instant(2025, 6, 8, 14, 30, 0);
        assert_eq!(local_midnight(now, 0), Some(instant(2025, 6, 8, 0, 0, 0)));
        assert_eq!(local_midnight(now, -1), Some(instant(2025, 6, 7, 0, 0, 0)));
    }

    #[test]
    fn invalid_refuses_typed_conversion() {
        assert_eq!(
            NaiveDateTime::try_from(Stamp::INVALID),
            Err(HorodateError::InvalidStamp)
        );
        let valid = Stamp::from(instant(2025, 6, 8, 0, 0, 0));
        assert!(NaiveDateTime::try_from(valid).is_ok());
    }

    #[test]
    fn from_str_errors_on_garbage() {
        assert!("8 juin 2025".parse::<Stamp>().is_ok());
        assert_eq!(
            "not a date".parse::<Stamp>(),
            Err(HorodateError::InvalidStamp)
        );
    }
}
