use std::path::PathBuf;

use chrono::{DateTime, NaiveDate, Utc};
use clap::{Parser, Subcommand, ValueEnum};
use white_days::{DayOffset, HijriDate, Language};

/// White days (Ayyam al-Bid) and tabular Hijri calendar conversion.
#[derive(Parser)]
#[command(
    name = "white-days",
    version,
    about = "Upcoming white days and Hijri/Gregorian conversion (tabular calendar)"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Path to TOML configuration file (default: ./white-days.toml if present).
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// List the next white days.
    Upcoming(UpcomingArgs),
    /// Convert a Gregorian date (YYYY-MM-DD) to Hijri.
    ToHijri(ToHijriArgs),
    /// Convert a Hijri date (YYYY-MM-DD) to Gregorian.
    ToGregorian(ToGregorianArgs),
    /// Show the three white days of a Hijri month.
    Month(MonthArgs),
    /// List the curated timezones with their current UTC offsets.
    Timezones,
}

/// Output format of `upcoming`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    /// iCalendar document.
    Ics,
}

/// Output format of the conversion commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ConvertFormat {
    #[default]
    Text,
    Json,
}

/// Arguments for the `upcoming` subcommand.
#[derive(clap::Args)]
pub struct UpcomingArgs {
    /// Number of white days to list (overrides config).
    #[arg(short = 'n', long)]
    pub count: Option<usize>,

    /// IANA timezone in which "today" is determined (overrides config; default: host).
    #[arg(long = "tz")]
    pub timezone: Option<String>,

    /// Local calibration in days: -1, 0 or +1 (overrides config).
    #[arg(long, allow_hyphen_values = true)]
    pub offset: Option<DayOffset>,

    /// Label language: de, en or ar (overrides config).
    #[arg(long = "lang")]
    pub language: Option<Language>,

    /// Output format.
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Reference instant instead of the system clock (RFC 3339).
    #[arg(long)]
    pub now: Option<DateTime<Utc>>,
}

/// Arguments for the `to-hijri` subcommand.
#[derive(clap::Args)]
pub struct ToHijriArgs {
    /// Gregorian date, YYYY-MM-DD.
    pub date: NaiveDate,

    #[command(flatten)]
    pub output: ConvertOutput,
}

/// Arguments for the `to-gregorian` subcommand.
#[derive(clap::Args)]
pub struct ToGregorianArgs {
    /// Hijri date, YYYY-MM-DD.
    pub date: HijriDate,

    #[command(flatten)]
    pub output: ConvertOutput,
}

/// Arguments for the `month` subcommand.
#[derive(clap::Args)]
pub struct MonthArgs {
    /// Hijri year.
    #[arg(value_parser = clap::value_parser!(i32).range(1..))]
    pub year: i32,

    /// Hijri month, 1-12.
    #[arg(value_parser = clap::value_parser!(u32).range(1..=12))]
    pub month: u32,

    #[command(flatten)]
    pub output: ConvertOutput,
}

/// Output options shared by the conversion subcommands.
#[derive(clap::Args)]
pub struct ConvertOutput {
    /// Label language: de, en or ar (overrides config).
    #[arg(long = "lang")]
    pub language: Option<Language>,

    /// Output format.
    #[arg(short, long, value_enum, default_value_t = ConvertFormat::Text)]
    pub format: ConvertFormat,
}
