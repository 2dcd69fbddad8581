//! Diagnostic logging for the CLI.
//!
//! Logs go to stderr so they never mix with query output on stdout.
//!
//! Level priority: `RUST_LOG` > `--debug` > [`DEFAULT_LOG_LEVEL`].

use tracing_subscriber::EnvFilter;

/// Level used when neither `RUST_LOG` nor `--debug` is given.
pub const DEFAULT_LOG_LEVEL: &str = "warn";

/// Initialise the tracing subscriber.
pub fn init(debug_flag: bool) {
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if debug_flag {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new(DEFAULT_LOG_LEVEL)
    };

    // An already-installed global subscriber keeps receiving events
    if let Err(e) = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .compact()
        .try_init()
    {
        tracing::debug!(error = %e, "Tracing subscriber already installed");
    }

    tracing::debug!(version = env!("CARGO_PKG_VERSION"), "Logging initialised");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_twice_keeps_first_subscriber() {
        init(true);
        init(false);
        tracing::debug!("still logging after a second init");
    }
}
