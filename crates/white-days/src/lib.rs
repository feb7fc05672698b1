//! # white-days
//!
//! Deterministic tabular Hijri calendar computation.
//!
//! Converts between the Gregorian and the arithmetic (tabular) Islamic
//! calendar through a Julian Day pivot, and enumerates the upcoming white
//! days (Ayyam al-Bid, the 13th to 15th of every Hijri month) from a given
//! "now". The tabular calendar is used on purpose: no moon-sighting or
//! Umm al-Qura tables are consulted, so every host computes the same dates.
//!
//! ## Modules
//!
//! - [`calendar`] — Gregorian ↔ Hijri conversion, month lengths, white days of a month
//! - [`enumerator`] — Upcoming white days from an explicit "now", with calibration offset
//! - [`labels`] — Month names, weekday names and date labels (de, en, ar)
//! - [`timezone`] — IANA timezone parsing, host detection, curated zone list
//! - [`export`] — iCalendar documents and Google/Outlook deep links
//! - [`error`] — Error types

pub mod calendar;
pub mod enumerator;
pub mod error;
pub mod export;
pub mod labels;
pub mod timezone;

pub use calendar::{
    gregorian_to_hijri, hijri_month_length, hijri_to_gregorian, is_hijri_leap_year,
    white_days_for_month, GregorianDate, HijriDate,
};
pub use enumerator::{
    upcoming_white_days, upcoming_white_days_with_options, DayOffset, EnumerateOptions, WhiteDay,
    MAX_COUNT,
};
pub use error::{Result, WhiteDayError};
pub use export::{generate_ics, google_calendar_url, outlook_url, DEFAULT_CALENDAR_TITLE};
pub use labels::{format_gregorian_date, format_hijri_date, hijri_month_name, weekday_name, Language};
pub use timezone::{
    current_offset, detect_host_timezone, parse_timezone, timezone_label, CommonTimezone,
    COMMON_TIMEZONES,
};
