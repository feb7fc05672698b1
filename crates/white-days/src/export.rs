//! Calendar export: iCalendar documents and web-calendar deep links.
//!
//! Each white day becomes an all-day event. The exported date is the
//! calibrated civil date carried by [`WhiteDay`]; nothing here recomputes
//! calendar data.

use chrono::{DateTime, Utc};
use url::form_urlencoded;

use crate::calendar::GregorianDate;
use crate::enumerator::{DayOffset, WhiteDay};

/// Calendar name used when the caller has no preference.
pub const DEFAULT_CALENDAR_TITLE: &str = "Weiße Tage (Ayyam al-Bid)";

const PRODID: &str = "-//White Days//white-days//DE";
const FASTING_NOTE: &str = "Ayyam al-Bid (weiße Tage) - empfohlen zu fasten.";
const GOOGLE_CALENDAR_URL: &str = "https://calendar.google.com/calendar/render";
const OUTLOOK_URL: &str = "https://outlook.live.com/calendar/0/deeplink/compose";

/// Maximum octets per content line before folding (RFC 5545 §3.1).
const MAX_LINE_OCTETS: usize = 75;

/// Render white days as an iCalendar (RFC 5545) document.
///
/// `stamp` becomes every event's `DTSTAMP`; pass `Utc::now()` for a fresh
/// export. Lines are CRLF-terminated and folded at 75 octets.
pub fn generate_ics(days: &[WhiteDay], title: &str, stamp: DateTime<Utc>) -> String {
    let timestamp = stamp.format("%Y%m%dT%H%M%SZ").to_string();

    let mut lines = vec![
        "BEGIN:VCALENDAR".to_string(),
        "VERSION:2.0".to_string(),
        format!("PRODID:{PRODID}"),
        "CALSCALE:GREGORIAN".to_string(),
        "METHOD:PUBLISH".to_string(),
        format!("X-WR-CALNAME:{}", escape_text(title)),
        "X-WR-TIMEZONE:UTC".to_string(),
    ];

    for (index, day) in days.iter().enumerate() {
        let start = ics_date(&day.gregorian_date);
        let end = ics_date(&day.gregorian_date.add_days(1));
        let categories = ["Islamischer Kalender", "Weiße Tage"]
            .map(escape_text)
            .join(",");

        lines.extend([
            "BEGIN:VEVENT".to_string(),
            format!("UID:whiteday-{start}-{index}@white-days"),
            format!("DTSTAMP:{timestamp}"),
            format!("DTSTART;VALUE=DATE:{start}"),
            format!("DTEND;VALUE=DATE:{end}"),
            format!("SUMMARY:{}", escape_text(&event_summary(day))),
            format!("DESCRIPTION:{}", escape_text(&event_description(day))),
            format!("CATEGORIES:{categories}"),
            "STATUS:CONFIRMED".to_string(),
            "TRANSP:TRANSPARENT".to_string(),
            "END:VEVENT".to_string(),
        ]);
    }
    lines.push("END:VCALENDAR".to_string());

    let mut out = String::new();
    for line in &lines {
        out.push_str(&fold_line(line));
        out.push_str("\r\n");
    }
    out
}

/// Google Calendar "create event" link for a single white day.
pub fn google_calendar_url(day: &WhiteDay) -> String {
    let dates = format!(
        "{}/{}",
        ics_date(&day.gregorian_date),
        ics_date(&day.gregorian_date.add_days(1))
    );
    let query = form_urlencoded::Serializer::new(String::new())
        .append_pair("action", "TEMPLATE")
        .append_pair("text", &event_summary(day))
        .append_pair("dates", &dates)
        .append_pair("details", &link_details(day))
        .append_pair("ctz", &day.timezone_id)
        .finish();
    format!("{GOOGLE_CALENDAR_URL}?{query}")
}

/// Outlook on the web "compose event" link for a single white day.
pub fn outlook_url(day: &WhiteDay) -> String {
    let query = form_urlencoded::Serializer::new(String::new())
        .append_pair("path", "/calendar/action/compose")
        .append_pair("rru", "addevent")
        .append_pair("subject", &event_summary(day))
        .append_pair("startdt", &day.gregorian_date.to_string())
        .append_pair("enddt", &day.gregorian_date.add_days(1).to_string())
        .append_pair("body", &link_details(day))
        .append_pair("allday", "true")
        .finish();
    format!("{OUTLOOK_URL}?{query}")
}

// ── Internal helpers ────────────────────────────────────────────────────────

fn event_summary(day: &WhiteDay) -> String {
    format!("Weißer Tag - {}. Tag", day.hijri_date.day())
}

fn link_details(day: &WhiteDay) -> String {
    format!("{}\n\n{FASTING_NOTE}", day.hijri_label)
}

fn event_description(day: &WhiteDay) -> String {
    let mut text = link_details(day);
    match day.offset_days {
        DayOffset::None => {}
        DayOffset::Earlier => {
            text.push_str("\n\nLokale Anpassung: -1 Tag gegenüber dem tabellarischen Kalender.")
        }
        DayOffset::Later => {
            text.push_str("\n\nLokale Anpassung: +1 Tag gegenüber dem tabellarischen Kalender.")
        }
    }
    text
}

/// `YYYYMMDD`, the iCalendar DATE form.
fn ics_date(date: &GregorianDate) -> String {
    format!("{:04}{:02}{:02}", date.year(), date.month(), date.day())
}

/// Escape a TEXT value: backslash, semicolon, comma and newlines.
fn escape_text(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            ';' => out.push_str("\\;"),
            ',' => out.push_str("\\,"),
            '\n' => out.push_str("\\n"),
            '\r' => {}
            _ => out.push(c),
        }
    }
    out
}

/// Fold a content line so no physical line exceeds 75 octets.
///
/// Continuation lines start with a single space, which counts toward their
/// length. Splits only on UTF-8 character boundaries.
fn fold_line(line: &str) -> String {
    if line.len() <= MAX_LINE_OCTETS {
        return line.to_string();
    }

    let mut out = String::with_capacity(line.len() + line.len() / MAX_LINE_OCTETS * 3);
    let mut budget = MAX_LINE_OCTETS;
    let mut used = 0;
    for c in line.chars() {
        if used + c.len_utf8() > budget {
            out.push_str("\r\n ");
            budget = MAX_LINE_OCTETS - 1;
            used = 0;
        }
        out.push(c);
        used += c.len_utf8();
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enumerator::{upcoming_white_days, upcoming_white_days_with_options, EnumerateOptions};
    use chrono::TimeZone;

    fn anchor() -> DateTime<Utc> {
        // 10 Ramadan 1445
        Utc.with_ymd_and_hms(2024, 3, 20, 12, 0, 0).unwrap()
    }

    fn ramadan_days() -> Vec<WhiteDay> {
        upcoming_white_days(anchor(), 3, Some("Asia/Riyadh")).unwrap()
    }

    // ── ICS tests ───────────────────────────────────────────────────────

    #[test]
    fn test_ics_envelope() {
        let ics = generate_ics(&ramadan_days(), DEFAULT_CALENDAR_TITLE, anchor());
        assert!(ics.starts_with("BEGIN:VCALENDAR\r\nVERSION:2.0\r\n"));
        assert!(ics.ends_with("END:VCALENDAR\r\n"));
        assert!(ics.contains("X-WR-CALNAME:Weiße Tage (Ayyam al-Bid)\r\n"));
        assert_eq!(ics.matches("BEGIN:VEVENT").count(), 3);
        assert_eq!(ics.matches("END:VEVENT").count(), 3);
    }

    #[test]
    fn test_ics_every_line_is_crlf_terminated() {
        let ics = generate_ics(&ramadan_days(), DEFAULT_CALENDAR_TITLE, anchor());
        assert!(!ics.replace("\r\n", "").contains('\n'));
    }

    #[test]
    fn test_ics_all_day_event_dates() {
        let ics = generate_ics(&ramadan_days(), DEFAULT_CALENDAR_TITLE, anchor());
        assert!(ics.contains("DTSTART;VALUE=DATE:20240323\r\n"));
        assert!(ics.contains("DTEND;VALUE=DATE:20240324\r\n"));
        assert!(ics.contains("DTSTART;VALUE=DATE:20240325\r\n"));
        assert!(ics.contains("DTEND;VALUE=DATE:20240326\r\n"));
        assert!(ics.contains("UID:whiteday-20240323-0@white-days\r\n"));
        assert!(ics.contains("DTSTAMP:20240320T120000Z\r\n"));
    }

    #[test]
    fn test_ics_summary_and_escaped_categories() {
        let ics = generate_ics(&ramadan_days(), DEFAULT_CALENDAR_TITLE, anchor());
        assert!(ics.contains("SUMMARY:Weißer Tag - 13. Tag\r\n"));
        assert!(ics.contains("CATEGORIES:Islamischer Kalender,Weiße Tage\r\n"));
    }

    #[test]
    fn test_ics_adjustment_note_only_when_offset() {
        let plain = generate_ics(&ramadan_days(), DEFAULT_CALENDAR_TITLE, anchor());
        assert!(!plain.contains("Lokale Anpassung"));

        let options = EnumerateOptions {
            offset: DayOffset::Later,
            ..EnumerateOptions::default()
        };
        let shifted =
            upcoming_white_days_with_options(anchor(), 1, Some("UTC"), &options).unwrap();
        let ics = generate_ics(&shifted, DEFAULT_CALENDAR_TITLE, anchor());
        // Folding may split the note; compare against the unfolded text
        let unfolded = ics.replace("\r\n ", "");
        assert!(unfolded.contains("Lokale Anpassung: +1 Tag"));
        assert!(unfolded.contains("DTSTART;VALUE=DATE:20240324"));
    }

    #[test]
    fn test_ics_empty_list_has_no_events() {
        let ics = generate_ics(&[], "Leer", anchor());
        assert!(!ics.contains("BEGIN:VEVENT"));
        assert!(ics.contains("X-WR-CALNAME:Leer\r\n"));
    }

    #[test]
    fn test_escape_text() {
        assert_eq!(escape_text("a,b;c\\d\ne"), "a\\,b\\;c\\\\d\\ne");
    }

    #[test]
    fn test_fold_line_limits_octets() {
        let line = format!("DESCRIPTION:{}", "ر".repeat(100));
        let folded = fold_line(&line);
        for physical in folded.split("\r\n") {
            assert!(physical.len() <= MAX_LINE_OCTETS, "{} octets", physical.len());
        }
        assert_eq!(folded.replace("\r\n ", ""), line);
    }

    #[test]
    fn test_fold_line_short_line_untouched() {
        assert_eq!(fold_line("VERSION:2.0"), "VERSION:2.0");
    }

    // ── Deep link tests ─────────────────────────────────────────────────

    #[test]
    fn test_google_calendar_url() {
        let url = google_calendar_url(&ramadan_days()[0]);
        assert!(url.starts_with("https://calendar.google.com/calendar/render?action=TEMPLATE"));
        assert!(url.contains("dates=20240323%2F20240324"), "{url}");
        assert!(url.contains("ctz=Asia%2FRiyadh"), "{url}");
    }

    #[test]
    fn test_outlook_url() {
        let url = outlook_url(&ramadan_days()[2]);
        assert!(url.starts_with("https://outlook.live.com/calendar/0/deeplink/compose?"));
        assert!(url.contains("startdt=2024-03-25"), "{url}");
        assert!(url.contains("enddt=2024-03-26"), "{url}");
        assert!(url.contains("allday=true"));
    }
}
