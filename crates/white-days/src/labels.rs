//! Month names, weekday names and date labels.
//!
//! Display-only: nothing in the conversion engine depends on these strings.

use std::fmt;
use std::str::FromStr;

use chrono::Weekday;
use serde::Serialize;

use crate::calendar::{GregorianDate, HijriDate};
use crate::error::WhiteDayError;

/// Label language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    De,
    En,
    Ar,
}

impl Language {
    /// The primary language subtag (`"de"`, `"en"`, `"ar"`).
    pub fn tag(&self) -> &'static str {
        match self {
            Language::De => "de",
            Language::En => "en",
            Language::Ar => "ar",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for Language {
    type Err = WhiteDayError;

    /// Accepts a bare subtag or a full tag such as `de-DE` or `en_US`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let primary = s
            .trim()
            .split(['-', '_'])
            .next()
            .unwrap_or_default()
            .to_ascii_lowercase();
        match primary.as_str() {
            "de" => Ok(Language::De),
            "en" => Ok(Language::En),
            "ar" => Ok(Language::Ar),
            _ => Err(WhiteDayError::InvalidLanguage(format!("'{s}'"))),
        }
    }
}

const HIJRI_MONTHS_DE: [&str; 12] = [
    "Muharram",
    "Safar",
    "Rabiʿ al-Awwal",
    "Rabiʿ ath-Thani",
    "Dschumada al-Ula",
    "Dschumada ath-Thania",
    "Radschab",
    "Schaʿban",
    "Ramadan",
    "Schawwal",
    "Dhu l-Qaʿda",
    "Dhu l-Hiddscha",
];

const HIJRI_MONTHS_EN: [&str; 12] = [
    "Muharram",
    "Safar",
    "Rabi al-Awwal",
    "Rabi al-Thani",
    "Jumada al-Ula",
    "Jumada al-Thani",
    "Rajab",
    "Shaʿban",
    "Ramadan",
    "Shawwal",
    "Dhu al-Qi’dah",
    "Dhu al-Hijjah",
];

const HIJRI_MONTHS_AR: [&str; 12] = [
    "محرم",
    "صفر",
    "ربيع الأول",
    "ربيع الثاني",
    "جمادى الأولى",
    "جمادى الثانية",
    "رجب",
    "شعبان",
    "رمضان",
    "شوال",
    "ذو القعدة",
    "ذو الحجة",
];

const GREGORIAN_MONTHS_DE: [&str; 12] = [
    "Januar",
    "Februar",
    "März",
    "April",
    "Mai",
    "Juni",
    "Juli",
    "August",
    "September",
    "Oktober",
    "November",
    "Dezember",
];

const GREGORIAN_MONTHS_EN: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

const GREGORIAN_MONTHS_AR: [&str; 12] = [
    "يناير",
    "فبراير",
    "مارس",
    "أبريل",
    "مايو",
    "يونيو",
    "يوليو",
    "أغسطس",
    "سبتمبر",
    "أكتوبر",
    "نوفمبر",
    "ديسمبر",
];

fn lookup(table: &[&'static str; 12], month: u32) -> &'static str {
    month
        .checked_sub(1)
        .and_then(|i| table.get(i as usize))
        .copied()
        .unwrap_or("")
}

/// Name of a Hijri month (1-12). Out-of-range months yield `""`.
pub fn hijri_month_name(month: u32, language: Language) -> &'static str {
    let table = match language {
        Language::De => &HIJRI_MONTHS_DE,
        Language::En => &HIJRI_MONTHS_EN,
        Language::Ar => &HIJRI_MONTHS_AR,
    };
    lookup(table, month)
}

fn gregorian_month_name(month: u32, language: Language) -> &'static str {
    let table = match language {
        Language::De => &GREGORIAN_MONTHS_DE,
        Language::En => &GREGORIAN_MONTHS_EN,
        Language::Ar => &GREGORIAN_MONTHS_AR,
    };
    lookup(table, month)
}

/// Full weekday name.
pub fn weekday_name(weekday: Weekday, language: Language) -> &'static str {
    match (language, weekday) {
        (Language::De, Weekday::Mon) => "Montag",
        (Language::De, Weekday::Tue) => "Dienstag",
        (Language::De, Weekday::Wed) => "Mittwoch",
        (Language::De, Weekday::Thu) => "Donnerstag",
        (Language::De, Weekday::Fri) => "Freitag",
        (Language::De, Weekday::Sat) => "Samstag",
        (Language::De, Weekday::Sun) => "Sonntag",
        (Language::En, Weekday::Mon) => "Monday",
        (Language::En, Weekday::Tue) => "Tuesday",
        (Language::En, Weekday::Wed) => "Wednesday",
        (Language::En, Weekday::Thu) => "Thursday",
        (Language::En, Weekday::Fri) => "Friday",
        (Language::En, Weekday::Sat) => "Saturday",
        (Language::En, Weekday::Sun) => "Sunday",
        (Language::Ar, Weekday::Mon) => "الاثنين",
        (Language::Ar, Weekday::Tue) => "الثلاثاء",
        (Language::Ar, Weekday::Wed) => "الأربعاء",
        (Language::Ar, Weekday::Thu) => "الخميس",
        (Language::Ar, Weekday::Fri) => "الجمعة",
        (Language::Ar, Weekday::Sat) => "السبت",
        (Language::Ar, Weekday::Sun) => "الأحد",
    }
}

/// Long civil date, e.g. `"11. März 2024"` / `"March 11, 2024"`.
pub fn format_gregorian_date(date: &GregorianDate, language: Language) -> String {
    let month = gregorian_month_name(date.month(), language);
    match language {
        Language::De => format!("{}. {} {}", date.day(), month, date.year()),
        Language::En => format!("{} {}, {}", month, date.day(), date.year()),
        Language::Ar => format!("{} {} {}", date.day(), month, date.year()),
    }
}

/// Hijri date label, e.g. `"13. Ramadan 1445"`.
pub fn format_hijri_date(date: &HijriDate, language: Language) -> String {
    format!(
        "{}. {} {}",
        date.day(),
        hijri_month_name(date.month(), language),
        date.year()
    )
}
