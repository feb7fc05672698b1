use anyhow::{Context, Result};
use chrono::Utc;
use tracing::info;
use white_days::{generate_ics, upcoming_white_days_with_options, EnumerateOptions, WhiteDay};

use crate::cli::{OutputFormat, UpcomingArgs};
use crate::config::WhiteDaysConfig;

/// Run the `upcoming` subcommand.
pub fn run(args: UpcomingArgs, config: &WhiteDaysConfig) -> Result<()> {
    let anchor = args.now.unwrap_or_else(Utc::now);
    let count = args.count.unwrap_or(config.count);
    let timezone = args.timezone.as_deref().or(config.timezone.as_deref());
    let options = EnumerateOptions {
        offset: match args.offset {
            Some(offset) => offset,
            None => config.offset()?,
        },
        language: match args.language {
            Some(language) => language,
            None => config.language()?,
        },
    };

    let days = upcoming_white_days_with_options(anchor, count, timezone, &options)
        .context("failed to enumerate white days")?;
    info!(count = days.len(), %anchor, "white days computed");

    match args.format {
        OutputFormat::Text => {
            for day in &days {
                println!("{}", text_line(day));
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&days)?);
        }
        OutputFormat::Ics => {
            print!("{}", generate_ics(&days, &config.title, anchor));
        }
    }
    Ok(())
}

/// One white day per line: ISO date, weekday, civil label, Hijri label, markers.
fn text_line(day: &WhiteDay) -> String {
    let mut line = format!(
        "{}  {}, {}  |  {}",
        day.gregorian_date, day.weekday, day.gregorian_label, day.hijri_label
    );
    if day.is_today {
        line.push_str("  [today]");
    }
    if day.is_ramadan {
        line.push_str("  [Ramadan]");
    }
    line
}
