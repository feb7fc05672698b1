use anyhow::Result;
use chrono::Utc;
use white_days::{current_offset, COMMON_TIMEZONES};

/// Run the `timezones` subcommand.
pub fn run() -> Result<()> {
    let now = Utc::now();
    for tz in COMMON_TIMEZONES {
        let offset = current_offset(tz.id, now)?;
        println!("{:<22} {:<28} {}", tz.id, tz.label, offset);
    }
    Ok(())
}
