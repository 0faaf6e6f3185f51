//! Tracing subscriber setup for the `eb` binary

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::domain::error::EventsError;

/// Filter directive for a `-v` count; zero keeps the configured level.
pub fn level_for_verbosity(configured: &str, verbosity: u8) -> String {
    match verbosity {
        0 => configured.to_string(),
        1 => "info".to_string(),
        2 => "debug".to_string(),
        _ => "trace".to_string()
    }
}

/// Install the global subscriber; `RUST_LOG` wins over the configured level.
///
/// Logs go to stderr so rendered views on stdout can be piped.
pub fn init_logging(configured: &str, verbosity: u8) -> Result<(), EventsError> {
    let level = level_for_verbosity(configured, verbosity);
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(&level)
            .map_err(|e| EventsError::Configuration(format!("Invalid log level '{}': {}", level, e)))?
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr).with_target(false))
        .try_init()
        .map_err(|e| EventsError::Generic(format!("Failed to initialize logging: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verbosity_raises_level() {
        assert_eq!(level_for_verbosity("warn", 0), "warn");
        assert_eq!(level_for_verbosity("warn", 1), "info");
        assert_eq!(level_for_verbosity("error", 2), "debug");
        assert_eq!(level_for_verbosity("warn", 5), "trace");
    }
}
