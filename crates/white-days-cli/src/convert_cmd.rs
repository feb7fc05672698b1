use anyhow::Result;
use chrono::Datelike;
use serde::Serialize;
use white_days::{
    format_gregorian_date, format_hijri_date, gregorian_to_hijri, hijri_to_gregorian,
    white_days_for_month, GregorianDate, HijriDate, Language,
};

use crate::cli::{ConvertFormat, ConvertOutput, MonthArgs, ToGregorianArgs, ToHijriArgs};
use crate::config::WhiteDaysConfig;

#[derive(Serialize)]
struct Conversion {
    gregorian: GregorianDate,
    hijri: HijriDate,
    gregorian_label: String,
    hijri_label: String,
}

impl Conversion {
    fn new(gregorian: GregorianDate, hijri: HijriDate, language: Language) -> Self {
        Self {
            gregorian,
            hijri,
            gregorian_label: format_gregorian_date(&gregorian, language),
            hijri_label: format_hijri_date(&hijri, language),
        }
    }
}

/// `--lang` if given, else the configured language.
fn language(output: &ConvertOutput, config: &WhiteDaysConfig) -> Result<Language> {
    match output.language {
        Some(language) => Ok(language),
        None => config.language(),
    }
}

fn print(conversions: &[Conversion], format: ConvertFormat) -> Result<()> {
    match format {
        ConvertFormat::Json => println!("{}", serde_json::to_string_pretty(conversions)?),
        ConvertFormat::Text => {
            for c in conversions {
                println!(
                    "{} (Gregorian) = {} (Hijri)  |  {}  |  {}",
                    c.gregorian, c.hijri, c.gregorian_label, c.hijri_label
                );
            }
        }
    }
    Ok(())
}

/// Run the `to-hijri` subcommand.
pub fn to_hijri(args: ToHijriArgs, config: &WhiteDaysConfig) -> Result<()> {
    let language = language(&args.output, config)?;
    let gregorian = GregorianDate::from(args.date);
    let hijri = gregorian_to_hijri(args.date.year(), args.date.month(), args.date.day());
    print(&[Conversion::new(gregorian, hijri, language)], args.output.format)
}

/// Run the `to-gregorian` subcommand.
pub fn to_gregorian(args: ToGregorianArgs, config: &WhiteDaysConfig) -> Result<()> {
    let language = language(&args.output, config)?;
    let h = args.date;
    let gregorian = hijri_to_gregorian(h.year(), h.month(), h.day());
    print(&[Conversion::new(gregorian, h, language)], args.output.format)
}

/// Run the `month` subcommand.
pub fn month(args: MonthArgs, config: &WhiteDaysConfig) -> Result<()> {
    let language = language(&args.output, config)?;
    let conversions: Vec<Conversion> = white_days_for_month(args.year, args.month)
        .into_iter()
        .map(|g| Conversion::new(g, gregorian_to_hijri(g.year(), g.month(), g.day()), language))
        .collect();
    print(&conversions, args.output.format)
}
