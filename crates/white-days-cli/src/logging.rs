use tracing_subscriber::EnvFilter;

/// Log level for a `-v` count: none is warn, then info, debug, trace.
fn level(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Filter directives covering the library (`white_days`) and this binary.
fn directives(verbosity: u8) -> String {
    let level = level(verbosity);
    format!("white_days={level},white_days_cli={level}")
}

/// Install the stderr subscriber. `RUST_LOG` replaces the `-v` directives.
pub fn init(verbosity: u8) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(directives(verbosity)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
