//! Setup and initialization functions for CLI
//!
//! Logging setup and configuration resolution run once at startup, before
//! any command executes.

use std::path::Path;

use anyhow::Result;
use tracing_subscriber::EnvFilter;

use crate::config::{self, UsermgrConfig};

/// Map the `-v` count to a default filter directive.
pub fn verbosity_filter(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Install the global tracing subscriber, writing to stderr.
///
/// `RUST_LOG` takes precedence over the verbosity flag. `log` records from
/// library code are forwarded through the subscriber.
pub fn init_logging(verbose: u8) {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(verbosity_filter(verbose)));

    let result = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();

    if let Err(e) = result {
        // Already installed, e.g. when called twice in tests
        eprintln!("Note: Logging already configured: {}", e);
    }
}

/// Load the explicit config file when given, otherwise search for one.
pub fn resolve_config(explicit: Option<&Path>) -> Result<UsermgrConfig> {
    match explicit {
        Some(path) => Ok(config::load_config_file(path)?),
        None => Ok(config::load_config()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verbosity_filter() {
        assert_eq!(verbosity_filter(0), "warn");
        assert_eq!(verbosity_filter(1), "info");
        assert_eq!(verbosity_filter(2), "debug");
        assert_eq!(verbosity_filter(9), "trace");
    }

    #[test]
    fn test_init_logging_twice_does_not_panic() {
        init_logging(0);
        init_logging(2);
        tracing::info!("test log");
    }
}
