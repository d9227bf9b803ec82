//! Logger setup shared by every binary in the workspace.

use tracing_subscriber::{EnvFilter, fmt};

/// Install the global `tracing` subscriber.
///
/// `RUST_LOG` takes precedence. Without it, the binary's own crate and
/// `tower_http` log at `default_level`.
///
/// Calling this more than once is harmless; later calls are ignored.
pub fn setup_logger(bin_name: &str, default_level: &str) {
    let crate_target = bin_name.replace('-', "_");
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "{crate_target}={default_level},tower_http={default_level}"
        ))
    });

    let _ = fmt().with_env_filter(filter).with_target(true).try_init();
}
