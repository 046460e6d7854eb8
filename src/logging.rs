//! Tracing subscriber setup

use crate::server::config::LogFormat;
use std::sync::Once;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Filter used when `RUST_LOG` is not set
pub const DEFAULT_LOG_FILTER: &str = "info,tower_http=debug";

static INIT: Once = Once::new();

/// Install the global subscriber. Safe to call more than once.
pub fn init_logging(format: LogFormat) {
    INIT.call_once(|| {
        let filter = || {
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER))
        };

        let result = match format {
            LogFormat::Compact => tracing_subscriber::registry()
                .with(filter())
                .with(fmt::layer().compact().with_target(false))
                .try_init(),
            LogFormat::Json => tracing_subscriber::registry()
                .with(filter())
                .with(fmt::layer().json().with_target(true))
                .try_init(),
        };

        if result.is_err() {
            tracing::warn!("Global subscriber already installed, keeping it");
        }
    });
}
