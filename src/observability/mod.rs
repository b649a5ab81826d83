//! Observability setup.
//!
//! The library emits `tracing` events for every state change; this module
//! installs a subscriber for hosts that do not bring their own.

use crate::config::Config;
use tracing_subscriber::EnvFilter;

/// Install a stderr `fmt` subscriber.
///
/// The filter comes from `RUST_LOG` when set, otherwise from
/// `config.log_level`. Returns `false` if a global subscriber was already
/// installed.
pub fn init_tracing(config: &Config) -> bool {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_tracing_only_once() {
        let config = Config::default();
        init_tracing(&config);
        assert!(!init_tracing(&config));
    }
}
