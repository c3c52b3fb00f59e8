//! Diagnostics output for the `edict` binary.

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Installs a stderr `tracing` subscriber.
///
/// `RUST_LOG` wins when set; otherwise the edict crates log at `level` and
/// everything else at `warn`. Calling it twice leaves the first subscriber
/// in place.
pub fn init_logging(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter(level));
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .try_init();
}

fn default_filter(level: &str) -> EnvFilter {
    EnvFilter::new(format!(
        "warn,edict={level},edict_foundation={level},edict_storage={level},edict_parser={level},edict_runtime={level}"
    ))
}
