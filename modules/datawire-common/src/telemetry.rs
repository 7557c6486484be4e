//! Tracing setup for processes embedding the datawire handlers.

use tracing_subscriber::filter::Directive;
use tracing_subscriber::EnvFilter;

use crate::config::Config;
use crate::error::{DatawireError, DatawireResult};

/// Install a fmt subscriber filtered by `RUST_LOG` plus `config.log_filter`.
///
/// Returns `Ok(false)` when a global subscriber is already installed.
pub fn init_tracing(config: &Config) -> DatawireResult<bool> {
    let directive = config.log_filter.parse::<Directive>().map_err(|e| {
        DatawireError::Config(format!("invalid log filter {:?}: {e}", config.log_filter))
    })?;
    let installed = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(directive))
        .try_init()
        .is_ok();
    if installed {
        tracing::info!(filter = %config.log_filter, "Tracing initialised");
    }
    Ok(installed)
}
