//! Upcoming white days from an arbitrary "today".
//!
//! Walks Hijri months forward from the month containing today, takes the
//! 13th, 14th and 15th of each, converts them to Gregorian, applies the
//! optional calibration offset, and keeps every date not before today until
//! the requested count is reached.
//!
//! The "now" instant is an explicit argument, so results are reproducible:
//! callers normally pass `chrono::Utc::now()`.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Serialize, Serializer};
use tracing::{debug, trace};

use crate::calendar::{
    gregorian_to_hijri, white_days_for_month, GregorianDate, HijriDate, WHITE_DAYS,
};
use crate::error::WhiteDayError;
use crate::labels::{format_gregorian_date, format_hijri_date, weekday_name, Language};
use crate::timezone::resolve_timezone;

// ── Calibration offset ──────────────────────────────────────────────────────

/// Local calibration applied to each white day after it has been computed.
///
/// The tabular calendar can run a day ahead of or behind a local
/// moon-sighting announcement. The offset only moves the displayed date; it
/// never changes which Hijri days are selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DayOffset {
    /// One day earlier (-1).
    Earlier,
    #[default]
    None,
    /// One day later (+1).
    Later,
}

impl DayOffset {
    /// The offset in days: -1, 0 or 1.
    pub fn days(&self) -> i64 {
        match self {
            DayOffset::Earlier => -1,
            DayOffset::None => 0,
            DayOffset::Later => 1,
        }
    }
}

impl TryFrom<i64> for DayOffset {
    type Error = WhiteDayError;

    fn try_from(days: i64) -> Result<Self, Self::Error> {
        match days {
            -1 => Ok(DayOffset::Earlier),
            0 => Ok(DayOffset::None),
            1 => Ok(DayOffset::Later),
            other => Err(WhiteDayError::InvalidOffset(other.to_string())),
        }
    }
}

impl FromStr for DayOffset {
    type Err = WhiteDayError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let days = s
            .strip_prefix('+')
            .unwrap_or(s)
            .parse::<i64>()
            .map_err(|_| WhiteDayError::InvalidOffset(format!("'{s}'")))?;
        DayOffset::try_from(days)
    }
}

impl fmt::Display for DayOffset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DayOffset::Earlier => f.write_str("-1"),
            DayOffset::None => f.write_str("0"),
            DayOffset::Later => f.write_str("+1"),
        }
    }
}

impl Serialize for DayOffset {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_i64(self.days())
    }
}

// ── Enumeration ─────────────────────────────────────────────────────────────

/// Largest `count` accepted per call: the white days of 1,000 Hijri years.
pub const MAX_COUNT: usize = 36_000;

/// Options for [`upcoming_white_days_with_options`].
#[derive(Debug, Clone, Default)]
pub struct EnumerateOptions {
    /// Calibration applied to every emitted date.
    pub offset: DayOffset,
    /// Language of the weekday and date labels.
    pub language: Language,
}

/// One upcoming white day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WhiteDay {
    /// Civil date, after the calibration offset.
    pub gregorian_date: GregorianDate,
    /// Hijri date re-derived from `gregorian_date` (so it reflects the offset).
    pub hijri_date: HijriDate,
    /// Localized weekday name of `gregorian_date`.
    pub weekday: String,
    pub hijri_label: String,
    pub gregorian_label: String,
    /// IANA timezone used to determine "today".
    pub timezone_id: String,
    pub is_today: bool,
    pub is_ramadan: bool,
    pub offset_days: DayOffset,
}

/// List the next `count` white days with default options.
///
/// # Arguments
///
/// * `anchor` — The reference "now" instant (typically `Utc::now()`)
/// * `count` — How many white days to return
/// * `timezone` — IANA timezone in which "today" is determined; `None` detects
///   the host timezone
///
/// # Errors
///
/// Returns [`WhiteDayError::InvalidTimezone`] for an unknown timezone,
/// [`WhiteDayError::Configuration`] if the host timezone cannot be detected,
/// or [`WhiteDayError::InvalidCount`] if `count` exceeds [`MAX_COUNT`].
///
/// # Examples
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use white_days::enumerator::upcoming_white_days;
///
/// let now = Utc.with_ymd_and_hms(2024, 3, 20, 12, 0, 0).unwrap();
/// let days = upcoming_white_days(now, 3, Some("Europe/Berlin")).unwrap();
/// assert_eq!(days[0].gregorian_date.to_string(), "2024-03-23");
/// assert!(days.iter().all(|d| d.is_ramadan));
/// ```
pub fn upcoming_white_days(
    anchor: DateTime<Utc>,
    count: usize,
    timezone: Option<&str>,
) -> Result<Vec<WhiteDay>, WhiteDayError> {
    upcoming_white_days_with_options(anchor, count, timezone, &EnumerateOptions::default())
}

/// List the next `count` white days.
///
/// Returns exactly `count` items in ascending Gregorian order, none earlier
/// than today in `timezone`. A `count` of zero returns an empty list without
/// resolving the timezone.
///
/// # Errors
///
/// See [`upcoming_white_days`].
pub fn upcoming_white_days_with_options(
    anchor: DateTime<Utc>,
    count: usize,
    timezone: Option<&str>,
    options: &EnumerateOptions,
) -> Result<Vec<WhiteDay>, WhiteDayError> {
    if count == 0 {
        return Ok(Vec::new());
    }
    if count > MAX_COUNT {
        return Err(WhiteDayError::InvalidCount(count));
    }

    let (timezone_id, tz) = resolve_timezone(timezone)?;
    let today = GregorianDate::from(anchor.with_timezone(&tz).date_naive());
    let today_hijri = gregorian_to_hijri(today.year(), today.month(), today.day());

    // Past the 15th, this month's white days are over.
    let (mut year, mut month) = (today_hijri.year(), today_hijri.month());
    if today_hijri.day() > WHITE_DAYS[2] {
        (year, month) = next_hijri_month(year, month);
    }
    debug!(
        timezone = %timezone_id,
        %today,
        %today_hijri,
        start_year = year,
        start_month = month,
        offset = options.offset.days(),
        count,
        "enumerating white days"
    );

    let mut result: Vec<WhiteDay> = Vec::with_capacity(count);
    while result.len() < count {
        trace!(year, month, found = result.len(), "scanning hijri month");
        for date in white_days_for_month(year, month) {
            if result.len() == count {
                break;
            }
            let adjusted = date.add_days(options.offset.days());
            if adjusted < today {
                continue;
            }
            result.push(build_white_day(adjusted, today, &timezone_id, options));
        }
        (year, month) = next_hijri_month(year, month);
    }

    result.sort_by_key(|day| day.gregorian_date);
    Ok(result)
}

// ── Internal helpers ────────────────────────────────────────────────────────

/// The Hijri month after `(year, month)`, wrapping Dhu al-Hijjah into a new year.
fn next_hijri_month(year: i32, month: u32) -> (i32, u32) {
    if month >= 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    }
}

fn build_white_day(
    date: GregorianDate,
    today: GregorianDate,
    timezone_id: &str,
    options: &EnumerateOptions,
) -> WhiteDay {
    let hijri_date = gregorian_to_hijri(date.year(), date.month(), date.day());
    WhiteDay {
        gregorian_date: date,
        hijri_date,
        weekday: weekday_name(date.weekday(), options.language).to_string(),
        hijri_label: format_hijri_date(&hijri_date, options.language),
        gregorian_label: format_gregorian_date(&date, options.language),
        timezone_id: timezone_id.to_string(),
        is_today: date == today,
        is_ramadan: hijri_date.is_ramadan(),
        offset_days: options.offset,
    }
}

// ── Tests ───────────────────────────────────────────────────────────────────
