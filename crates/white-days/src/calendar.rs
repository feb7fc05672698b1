//! Deterministic Gregorian ↔ Hijri conversion.
//!
//! Implements the tabular (arithmetic) Islamic calendar: a 30-year cycle with
//! 11 leap years, odd months of 30 days, even months of 29 days, and a 30th
//! day appended to Dhu al-Hijjah in leap years. This is an approximation of
//! the observed calendar; no moon-sighting or Umm al-Qura tables are used, so
//! results are reproducible everywhere and may differ by a day from a local
//! announcement. Use [`DayOffset`](crate::enumerator::DayOffset) to calibrate.
//!
//! Every conversion pivots through a Julian Day Number, which keeps the two
//! directions exact inverses of each other.
//!
//! # Domain
//!
//! The functions are total: any integer triple is accepted and no input
//! panics. Month values outside `1..=12` or day values beyond a month's
//! length are outside the contract and yield an unspecified (but
//! deterministic) date. Year 0 and negative years follow the proleptic
//! extension of either calendar.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate, Weekday};
use serde::Serialize;

use crate::error::WhiteDayError;

/// Julian Day of 1 Muharram 1 AH at midnight (16 July 622, Julian calendar).
pub(crate) const HIJRI_EPOCH: f64 = 1_948_439.5;

/// 1-based positions of the leap years within the 30-year cycle.
pub const LEAP_YEAR_POSITIONS: [i32; 11] = [2, 5, 7, 10, 13, 16, 18, 21, 24, 26, 29];

/// The Hijri days of every month that are white days (Ayyam al-Bid).
pub const WHITE_DAYS: [u32; 3] = [13, 14, 15];

/// Hijri month number of Ramadan.
pub const RAMADAN: u32 = 9;

// ── Date types ──────────────────────────────────────────────────────────────

/// A date in the tabular Islamic calendar.
///
/// Produced by the conversion functions in this module, or parsed (with
/// range validation) from `YYYY-MM-DD`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct HijriDate {
    year: i32,
    month: u32,
    day: u32,
}

impl HijriDate {
    pub fn year(&self) -> i32 {
        self.year
    }

    /// Month number, 1 (Muharram) through 12 (Dhu al-Hijjah).
    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn day(&self) -> u32 {
        self.day
    }

    /// Whether this date falls in Ramadan.
    pub fn is_ramadan(&self) -> bool {
        self.month == RAMADAN
    }

    /// Whether this is the 13th, 14th or 15th of its month.
    pub fn is_white_day(&self) -> bool {
        WHITE_DAYS.contains(&self.day)
    }
}

impl fmt::Display for HijriDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

impl FromStr for HijriDate {
    type Err = WhiteDayError;

    /// Parse `YYYY-MM-DD`, rejecting years below 1 and days the month lacks.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid =
            || WhiteDayError::InvalidDate(format!("'{s}' is not a Hijri YYYY-MM-DD date"));
        let mut parts = s.trim().splitn(3, '-');
        let (Some(year), Some(month), Some(day)) = (parts.next(), parts.next(), parts.next())
        else {
            return Err(invalid());
        };
        let year: i32 = year.parse().map_err(|_| invalid())?;
        let month: u32 = month.parse().map_err(|_| invalid())?;
        let day: u32 = day.parse().map_err(|_| invalid())?;

        if year < 1 || !(1..=12).contains(&month) {
            return Err(invalid());
        }
        if day < 1 || day > hijri_month_length(year, month) {
            return Err(WhiteDayError::InvalidDate(format!(
                "day {day} is out of range for Hijri month {year}-{month:02}"
            )));
        }
        Ok(HijriDate { year, month, day })
    }
}

/// A date in the proleptic Gregorian calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct GregorianDate {
    year: i32,
    month: u32,
    day: u32,
}

impl GregorianDate {
    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn day(&self) -> u32 {
        self.day
    }

    /// Shift by a whole number of civil days (negative moves backwards).
    pub fn add_days(self, days: i64) -> GregorianDate {
        let jd = gregorian_to_julian_day(self.year, self.month, self.day);
        julian_day_to_gregorian(JulianDay(jd.0 + days as f64))
    }

    /// Day of the week.
    pub fn weekday(&self) -> Weekday {
        // JDN 0 was a Monday.
        let jdn = gregorian_to_julian_day(self.year, self.month, self.day).0 as i64;
        match jdn.rem_euclid(7) {
            0 => Weekday::Mon,
            1 => Weekday::Tue,
            2 => Weekday::Wed,
            3 => Weekday::Thu,
            4 => Weekday::Fri,
            5 => Weekday::Sat,
            _ => Weekday::Sun,
        }
    }

    /// The same day as a [`NaiveDate`], or `None` outside chrono's range.
    pub fn to_naive_date(&self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month, self.day)
    }
}

impl From<NaiveDate> for GregorianDate {
    fn from(date: NaiveDate) -> Self {
        GregorianDate {
            year: date.year(),
            month: date.month(),
            day: date.day(),
        }
    }
}

impl fmt::Display for GregorianDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

// ── Julian Day pivot ────────────────────────────────────────────────────────

/// A Julian Day Number. Integral values denote noon; `.5` values midnight.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub(crate) struct JulianDay(pub(crate) f64);

/// Gregorian date → Julian Day Number (noon of that day).
pub(crate) fn gregorian_to_julian_day(year: i32, month: u32, day: u32) -> JulianDay {
    let (year, month, day) = (i64::from(year), i64::from(month), i64::from(day));
    let a = (14 - month).div_euclid(12);
    let y = year + 4800 - a;
    let m = month + 12 * a - 3;

    let jdn = day + (153 * m + 2).div_euclid(5) + 365 * y + y.div_euclid(4) - y.div_euclid(100)
        + y.div_euclid(400)
        - 32045;
    JulianDay(jdn as f64)
}

/// Julian Day → Gregorian date.
///
/// Julian days start at noon while civil days start at midnight, so the value
/// is shifted by half a day before flooring. Without the shift, midnight-based
/// values (such as those produced by [`hijri_to_julian_day`]) land one civil
/// day early.
pub(crate) fn julian_day_to_gregorian(jd: JulianDay) -> GregorianDate {
    let wjd = (jd.0 + 0.5).floor() as i64;

    let a = wjd + 32044;
    let b = (4 * a + 3).div_euclid(146_097);
    let c = a - (146_097 * b).div_euclid(4);
    let d = (4 * c + 3).div_euclid(1461);
    let e = c - (1461 * d).div_euclid(4);
    let m = (5 * e + 2).div_euclid(153);

    let day = e - (153 * m + 2).div_euclid(5) + 1;
    let month = m + 3 - 12 * (m / 10);
    let year = 100 * b + d - 4800 + m / 10;

    GregorianDate {
        year: year as i32,
        month: month as u32,
        day: day as u32,
    }
}

/// Days from the Hijri epoch to 1 Muharram of `year`.
fn days_before_hijri_year(year: i64) -> i64 {
    354 * (year - 1) + (3 + 11 * year).div_euclid(30)
}

/// Hijri date → Julian Day (midnight starting that day).
pub(crate) fn hijri_to_julian_day(year: i32, month: u32, day: u32) -> JulianDay {
    let mut days = days_before_hijri_year(i64::from(year));
    for m in 1..month {
        days += i64::from(hijri_month_length(year, m));
    }
    days += i64::from(day) - 1;

    JulianDay(HIJRI_EPOCH + days as f64)
}

/// Julian Day → Hijri date.
pub(crate) fn julian_day_to_hijri(jd: JulianDay) -> HijriDate {
    let days = (jd.0 - HIJRI_EPOCH).floor() as i64;
    let year = (30 * days + 10646).div_euclid(10631);
    let mut day_of_year = days - days_before_hijri_year(year);
    let year = year as i32;

    let mut month = 1;
    while month < 12 {
        let len = i64::from(hijri_month_length(year, month));
        if day_of_year < len {
            break;
        }
        day_of_year -= len;
        month += 1;
    }

    HijriDate {
        year,
        month,
        day: (day_of_year + 1) as u32,
    }
}

// ── Public conversions ──────────────────────────────────────────────────────

/// Whether `year` is one of the 11 leap years of the 30-year cycle.
pub fn is_hijri_leap_year(year: i32) -> bool {
    let position = (year - 1).rem_euclid(30) + 1;
    LEAP_YEAR_POSITIONS.contains(&position)
}

/// Number of days (29 or 30) in a Hijri month.
///
/// Odd months have 30 days, even months 29, except month 12 which has 30
/// days in a leap year.
pub fn hijri_month_length(year: i32, month: u32) -> u32 {
    if month == 12 {
        return if is_hijri_leap_year(year) { 30 } else { 29 };
    }
    if month % 2 == 1 {
        30
    } else {
        29
    }
}

/// Convert a Gregorian date to the tabular Hijri calendar.
///
/// # Examples
///
/// ```
/// use white_days::calendar::gregorian_to_hijri;
///
/// let h = gregorian_to_hijri(2024, 3, 11);
/// assert_eq!((h.year(), h.month(), h.day()), (1445, 9, 1));
/// ```
pub fn gregorian_to_hijri(year: i32, month: u32, day: u32) -> HijriDate {
    julian_day_to_hijri(gregorian_to_julian_day(year, month, day))
}

/// Convert a tabular Hijri date to the Gregorian calendar.
///
/// # Examples
///
/// ```
/// use white_days::calendar::hijri_to_gregorian;
///
/// let g = hijri_to_gregorian(1445, 9, 13);
/// assert_eq!(g.to_string(), "2024-03-23");
/// ```
pub fn hijri_to_gregorian(year: i32, month: u32, day: u32) -> GregorianDate {
    julian_day_to_gregorian(hijri_to_julian_day(year, month, day))
}

/// The Gregorian dates of the 13th, 14th and 15th of a Hijri month, in order.
pub fn white_days_for_month(hijri_year: i32, hijri_month: u32) -> [GregorianDate; 3] {
    WHITE_DAYS.map(|day| julian_day_to_gregorian(hijri_to_julian_day(hijri_year, hijri_month, day)))
}

// ── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(g: GregorianDate) -> (i32, u32, u32) {
        (g.year(), g.month(), g.day())
    }

    // ── Julian Day tests ────────────────────────────────────────────────

    #[test]
    fn test_gregorian_to_julian_day_known_values() {
        assert_eq!(gregorian_to_julian_day(2000, 1, 1), JulianDay(2_451_545.0));
        assert_eq!(gregorian_to_julian_day(2024, 3, 11), JulianDay(2_460_381.0));
        // Start of the Julian period, proleptic Gregorian
        assert_eq!(gregorian_to_julian_day(-4713, 11, 24), JulianDay(0.0));
        assert_eq!(gregorian_to_julian_day(0, 1, 1), JulianDay(1_721_060.0));
    }

    #[test]
    fn test_julian_day_to_gregorian_noon_value() {
        assert_eq!(ymd(julian_day_to_gregorian(JulianDay(2_460_381.0))), (2024, 3, 11));
    }

    #[test]
    fn test_julian_day_to_gregorian_midnight_starts_the_civil_day() {
        // 2460380.5 is the midnight that opens 11 March, not the one closing 10 March
        assert_eq!(ymd(julian_day_to_gregorian(JulianDay(2_460_380.5))), (2024, 3, 11));
        assert_eq!(ymd(julian_day_to_gregorian(JulianDay(2_460_381.49))), (2024, 3, 11));
        assert_eq!(ymd(julian_day_to_gregorian(JulianDay(2_460_381.5))), (2024, 3, 12));
    }

    #[test]
    fn test_hijri_epoch_julian_day() {
        assert_eq!(hijri_to_julian_day(1, 1, 1), JulianDay(HIJRI_EPOCH));
        // 16 July 622 Julian = 19 July 622 proleptic Gregorian
        assert_eq!(ymd(hijri_to_gregorian(1, 1, 1)), (622, 7, 19));
    }

    #[test]
    fn test_julian_day_to_hijri_inverts_hijri_to_julian_day() {
        let jd = hijri_to_julian_day(1445, 12, 30);
        let h = julian_day_to_hijri(jd);
        assert_eq!((h.year(), h.month(), h.day()), (1445, 12, 30));
    }

    #[test]
    fn test_julian_day_to_gregorian_inverts_gregorian_to_julian_day() {
        for (y, m, d) in [(1900, 2, 28), (2000, 2, 29), (2100, 3, 1), (1, 1, 1), (-1, 12, 31)] {
            let g = julian_day_to_gregorian(gregorian_to_julian_day(y, m, d));
            assert_eq!(ymd(g), (y, m, d));
        }
    }

    // ── Month length tests ──────────────────────────────────────────────

    #[test]
    fn test_month_lengths_alternate() {
        for m in 1..=11 {
            let expected = if m % 2 == 1 { 30 } else { 29 };
            assert_eq!(hijri_month_length(1446, m), expected, "month {m}");
        }
    }

    #[test]
    fn test_dhu_al_hijjah_follows_leap_year() {
        assert!(is_hijri_leap_year(1445)); // cycle position 5
        assert_eq!(hijri_month_length(1445, 12), 30);
        assert!(!is_hijri_leap_year(1446));
        assert_eq!(hijri_month_length(1446, 12), 29);
    }

    #[test]
    fn test_leap_year_non_positive_years_follow_cycle() {
        // Year 0 sits at cycle position 30, year -1 at 29
        assert!(!is_hijri_leap_year(0));
        assert!(is_hijri_leap_year(-1));
    }

    // ── Conversion tests ────────────────────────────────────────────────

    #[test]
    fn test_ramadan_1445_starts_2024_03_11() {
        let h = gregorian_to_hijri(2024, 3, 11);
        assert_eq!((h.year(), h.month(), h.day()), (1445, 9, 1));
        assert!(h.is_ramadan());
    }

    #[test]
    fn test_gregorian_to_hijri_y2k() {
        let h = gregorian_to_hijri(2000, 1, 1);
        assert_eq!((h.year(), h.month(), h.day()), (1420, 9, 24));
    }

    #[test]
    fn test_hijri_new_year_1446() {
        assert_eq!(ymd(hijri_to_gregorian(1446, 1, 1)), (2024, 7, 8));
    }

    #[test]
    fn test_white_days_for_ramadan_1445() {
        let days = white_days_for_month(1445, 9);
        assert_eq!(
            days.map(ymd),
            [(2024, 3, 23), (2024, 3, 24), (2024, 3, 25)]
        );
    }

    #[test]
    fn test_white_days_cross_gregorian_month() {
        // 15 Safar 1445 is 1 September 2023
        let days = white_days_for_month(1445, 2);
        assert_eq!(days.map(ymd), [(2023, 8, 30), (2023, 8, 31), (2023, 9, 1)]);
    }

    #[test]
    fn test_white_days_cross_gregorian_year() {
        let days = white_days_for_month(1447, 12);
        assert_eq!(days.map(ymd), [(2026, 5, 30), (2026, 5, 31), (2026, 6, 1)]);
        let days = white_days_for_month(1447, 7);
        assert_eq!(days.map(ymd), [(2026, 1, 2), (2026, 1, 3), (2026, 1, 4)]);
    }

    // ── GregorianDate helper tests ──────────────────────────────────────

    #[test]
    fn test_add_days_across_month_and_year() {
        let d = hijri_to_gregorian(1445, 6, 15); // 2023-12-28
        assert_eq!(ymd(d.add_days(4)), (2024, 1, 1));
        assert_eq!(ymd(d.add_days(-28)), (2023, 11, 30));
        assert_eq!(ymd(d.add_days(0)), ymd(d));
    }

    #[test]
    fn test_weekday_matches_chrono() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 11).unwrap();
        let g = GregorianDate::from(date);
        assert_eq!(g.weekday(), Weekday::Mon);
        for offset in 0..14 {
            let shifted = g.add_days(offset);
            let naive = shifted.to_naive_date().unwrap();
            assert_eq!(shifted.weekday(), naive.weekday());
        }
    }

    #[test]
    fn test_display_is_iso_like() {
        assert_eq!(hijri_to_gregorian(1445, 9, 1).to_string(), "2024-03-11");
        assert_eq!(gregorian_to_hijri(2024, 3, 11).to_string(), "1445-09-01");
    }

    #[test]
    fn test_ordering_is_chronological() {
        let a = hijri_to_gregorian(1445, 9, 15);
        let b = hijri_to_gregorian(1445, 10, 13);
        assert!(a < b);
        assert!(gregorian_to_hijri(2024, 3, 25) < gregorian_to_hijri(2024, 4, 22));
    }

    #[test]
    fn test_parse_hijri_date() {
        let h: HijriDate = "1445-12-30".parse().unwrap();
        assert_eq!((h.year(), h.month(), h.day()), (1445, 12, 30));
        assert_eq!(h, gregorian_to_hijri(2024, 7, 7));
    }

    #[test]
    fn test_parse_hijri_date_rejects_out_of_range() {
        for input in ["1446-12-30", "1445-13-01", "1445-02-30", "0-01-01", "1445-09", "x-1-1"] {
            let err = input.parse::<HijriDate>().unwrap_err().to_string();
            assert!(err.contains("Invalid date"), "{input}: {err}");
        }
    }

    #[test]
    fn test_out_of_contract_input_does_not_panic() {
        let _ = gregorian_to_hijri(2024, 13, 40);
        let _ = hijri_to_gregorian(1445, 0, 0);
        let _ = hijri_to_gregorian(-500, 12, 30);
    }
}
