//! Opt-in log output for hosts and examples.
//!
//! Library crates only emit `tracing` events; this installs a formatter
//! so they become visible. The filter comes from `RUST_LOG` and falls back
//! to [`DEFAULT_FILTER`].

use tracing_subscriber::EnvFilter;

use crate::Error;

/// Filter used when `RUST_LOG` is unset or invalid.
pub const DEFAULT_FILTER: &str = "formsmith=info,formsmith_core=info";

/// Install a global `fmt` subscriber. Fails if one is already installed.
pub fn try_init() -> Result<(), Error> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .try_init()
        .map_err(|err| Error::Logging(err.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn second_init_reports_error() {
        let _ = try_init();
        assert!(matches!(try_init(), Err(Error::Logging(_))));
    }
}
