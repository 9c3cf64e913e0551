//! Logging setup for the jsmeta CLI.
//!
//! Log lines go to stderr through `tracing-subscriber`, so documents written
//! to stdout or files are never interleaved with diagnostics.
//!
//! ```rust,no_run
//! use jsmeta_cli::logger::init_logger;
//! use tracing::info;
//!
//! init_logger(false, false, false);
//! info!("analyzing widget.js");
//! ```

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const VERBOSE_FILTER: &str = "jsmeta=debug,jsmeta_cli=debug";
const QUIET_FILTER: &str = "jsmeta=error,jsmeta_cli=error";
const DEFAULT_FILTER: &str = "jsmeta=info,jsmeta_cli=info";

/// Initialize the global tracing subscriber.
///
/// Level selection, first match wins:
/// 1. `--verbose`: debug for the jsmeta crates
/// 2. `--quiet`: errors only
/// 3. `RUST_LOG`
/// 4. info for the jsmeta crates
///
/// ANSI styling follows the same rules as status lines: off with
/// `--no-color`, `NO_COLOR`, or when stderr is not a terminal.
pub fn init_logger(verbose: bool, quiet: bool, no_color: bool) {
    let no_color = no_color || !crate::ui::should_use_color();
    init_logger_with_filter(filter_for(verbose, quiet), no_color);
}

/// Initialize the subscriber with an explicit filter.
pub fn init_logger_with_filter(filter: EnvFilter, no_color: bool) {
    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_level(true)
        .with_ansi(!no_color)
        .compact();

    // A second initialization (tests driving several commands) keeps the first subscriber.
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init();
}

fn filter_for(verbose: bool, quiet: bool) -> EnvFilter {
    if verbose {
        EnvFilter::new(VERBOSE_FILTER)
    } else if quiet {
        EnvFilter::new(QUIET_FILTER)
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbose_wins_over_quiet() {
        let filter = filter_for(true, true).to_string();
        assert!(filter.contains("jsmeta=debug"));
    }

    #[test]
    fn quiet_only_shows_errors() {
        let filter = filter_for(false, true).to_string();
        assert!(filter.contains("jsmeta=error"));
        assert!(!filter.contains("debug"));
    }

    #[test]
    fn repeated_initialization_does_not_panic() {
        init_logger(false, true, true);
        init_logger(true, false, true);
    }

    #[test]
    fn colored_output_initializes() {
        init_logger_with_filter(EnvFilter::new(QUIET_FILTER), false);
        init_logger(false, false, false);
    }
}
