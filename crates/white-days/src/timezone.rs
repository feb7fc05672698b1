//! Timezone resolution.
//!
//! The enumerator only needs the civil date of "now" in some IANA zone; this
//! module turns identifiers into [`Tz`] values, detects the host zone when
//! none is given, and carries the curated list of zones offered to users.

use chrono::{DateTime, Offset, TimeZone, Utc};
use chrono_tz::Tz;
use serde::Serialize;
use tracing::debug;

use crate::error::WhiteDayError;

/// A curated timezone entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CommonTimezone {
    /// IANA identifier.
    pub id: &'static str,
    /// Human-readable place name.
    pub label: &'static str,
    /// Typical offset(s), standard/daylight.
    pub offset_hint: &'static str,
}

const fn tz(id: &'static str, label: &'static str, offset_hint: &'static str) -> CommonTimezone {
    CommonTimezone {
        id,
        label,
        offset_hint,
    }
}

/// Timezones offered by default, grouped roughly by region.
pub const COMMON_TIMEZONES: [CommonTimezone; 24] = [
    tz("Europe/Berlin", "Berlin, Deutschland", "UTC+1/+2"),
    tz("Europe/Vienna", "Wien, Österreich", "UTC+1/+2"),
    tz("Europe/Zurich", "Zürich, Schweiz", "UTC+1/+2"),
    tz("Europe/London", "London, UK", "UTC+0/+1"),
    tz("Europe/Paris", "Paris, Frankreich", "UTC+1/+2"),
    tz("Europe/Amsterdam", "Amsterdam, Niederlande", "UTC+1/+2"),
    tz("Europe/Brussels", "Brüssel, Belgien", "UTC+1/+2"),
    tz("Europe/Istanbul", "Istanbul, Türkei", "UTC+3"),
    tz("Asia/Dubai", "Dubai, VAE", "UTC+4"),
    tz("Asia/Riyadh", "Riad, Saudi-Arabien", "UTC+3"),
    tz("Asia/Karachi", "Karachi, Pakistan", "UTC+5"),
    tz("Asia/Kolkata", "Mumbai, Indien", "UTC+5:30"),
    tz("Asia/Dhaka", "Dhaka, Bangladesch", "UTC+6"),
    tz("Asia/Jakarta", "Jakarta, Indonesien", "UTC+7"),
    tz("Asia/Kuala_Lumpur", "Kuala Lumpur, Malaysia", "UTC+8"),
    tz("Africa/Cairo", "Kairo, Ägypten", "UTC+2"),
    tz("Africa/Casablanca", "Casablanca, Marokko", "UTC+0/+1"),
    tz("Africa/Lagos", "Lagos, Nigeria", "UTC+1"),
    tz("America/New_York", "New York, USA", "UTC-5/-4"),
    tz("America/Los_Angeles", "Los Angeles, USA", "UTC-8/-7"),
    tz("America/Chicago", "Chicago, USA", "UTC-6/-5"),
    tz("America/Toronto", "Toronto, Kanada", "UTC-5/-4"),
    tz("Australia/Sydney", "Sydney, Australien", "UTC+10/+11"),
    tz("Pacific/Auckland", "Auckland, Neuseeland", "UTC+12/+13"),
];

/// Parse an IANA timezone string into `Tz`.
pub fn parse_timezone(s: &str) -> Result<Tz, WhiteDayError> {
    s.parse::<Tz>()
        .map_err(|_| WhiteDayError::InvalidTimezone(format!("'{}'", s)))
}

/// Detect the host's IANA timezone.
///
/// A non-empty `TZ` environment variable wins over the operating system
/// setting. Fails with [`WhiteDayError::Configuration`] rather than falling
/// back to UTC, since a wrong zone silently shifts "today".
pub fn detect_host_timezone() -> Result<String, WhiteDayError> {
    if let Ok(value) = std::env::var("TZ") {
        let id = value.trim().trim_start_matches(':');
        if !id.is_empty() {
            parse_timezone(id).map_err(|_| {
                WhiteDayError::Configuration(format!(
                    "TZ environment variable '{value}' is not an IANA timezone"
                ))
            })?;
            debug!(timezone = id, source = "TZ", "detected host timezone");
            return Ok(id.to_string());
        }
    }

    let id = iana_time_zone::get_timezone()
        .map_err(|e| WhiteDayError::Configuration(format!("cannot detect host timezone: {e}")))?;
    parse_timezone(&id).map_err(|_| {
        WhiteDayError::Configuration(format!("host timezone '{id}' is not an IANA timezone"))
    })?;
    debug!(timezone = %id, source = "os", "detected host timezone");
    Ok(id)
}

/// Resolve an optional identifier, detecting the host zone when absent.
///
/// Returns the identifier actually used together with the parsed zone.
pub fn resolve_timezone(timezone: Option<&str>) -> Result<(String, Tz), WhiteDayError> {
    let id = match timezone {
        Some(id) => id.to_string(),
        None => detect_host_timezone()?,
    };
    let tz = parse_timezone(&id)?;
    Ok((id, tz))
}

/// The curated label for `id`, or `id` itself when it is not in the list.
pub fn timezone_label(id: &str) -> &str {
    COMMON_TIMEZONES
        .iter()
        .find(|t| t.id == id)
        .map(|t| t.label)
        .unwrap_or(id)
}

/// The UTC offset of `id` at instant `at`, e.g. `"UTC+05:30"`.
pub fn current_offset(id: &str, at: DateTime<Utc>) -> Result<String, WhiteDayError> {
    let tz = parse_timezone(id)?;
    let offset_secs = tz
        .offset_from_utc_datetime(&at.naive_utc())
        .fix()
        .local_minus_utc();
    let sign = if offset_secs >= 0 { "+" } else { "-" };
    let abs_secs = offset_secs.unsigned_abs();
    let hours = abs_secs / 3600;
    let minutes = (abs_secs % 3600) / 60;
    Ok(format!("UTC{sign}{hours:02}:{minutes:02}"))
}
