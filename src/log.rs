use log::info;
use std::time::Duration;

/// Initializes env_logger with a default filter derived from the CLI
/// verbosity flags. `RUST_LOG` still takes precedence when set.
pub fn init_logging(verbose: bool, quiet: bool) {
    let default_level = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "info"
    };

    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(default_level),
    )
    .format_timestamp(None)
    .init();
}

pub fn show_farewell_with_timing(elapsed: Duration) {
    info!("total execution time: {:.2?}", elapsed);
}
