mod cli;
mod config;
mod convert_cmd;
mod logging;
mod timezones_cmd;
mod upcoming_cmd;

use std::process;

use anyhow::Result;
use clap::Parser;

use crate::cli::{Cli, Command};
use crate::config::WhiteDaysConfig;

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    if let Command::Timezones = cli.command {
        return timezones_cmd::run();
    }

    let config = WhiteDaysConfig::load(cli.config.as_deref())?;
    match cli.command {
        Command::Upcoming(args) => upcoming_cmd::run(args, &config),
        Command::ToHijri(args) => convert_cmd::to_hijri(args, &config),
        Command::ToGregorian(args) => convert_cmd::to_gregorian(args, &config),
        Command::Month(args) => convert_cmd::month(args, &config),
        Command::Timezones => timezones_cmd::run(),
    }
}
