//! Logging initialization: a `tracing-subscriber` fmt layer on stderr.
//!
//! Filter precedence: `TFS_BRIDGE_LOG`, then `RUST_LOG`, then `warn`. Initialization happens at
//! most once per process and never panics when another global subscriber is already set.

use std::env;

use once_cell::sync::OnceCell;
use tracing_subscriber::prelude::*;
use tracing_subscriber::EnvFilter;

pub const ENV_LOG: &str = "TFS_BRIDGE_LOG";
const DEFAULT_FILTER: &str = "warn";

static INIT: OnceCell<bool> = OnceCell::new();

fn filter_directive() -> String {
    [ENV_LOG, "RUST_LOG"]
        .iter()
        .filter_map(|k| env::var(k).ok())
        .map(|s| s.trim().to_string())
        .find(|s| !s.is_empty())
        .unwrap_or_else(|| DEFAULT_FILTER.to_string())
}

fn build_filter(directive: &str) -> EnvFilter {
    EnvFilter::try_new(directive).unwrap_or_else(|e| {
        eprintln!("tfs-bridge: invalid log filter '{directive}' ({e}); using '{DEFAULT_FILTER}'");
        EnvFilter::new(DEFAULT_FILTER)
    })
}

/// Install the stderr subscriber. Returns true when this call (or an earlier one) installed it.
pub fn logging_init() -> bool {
    *INIT.get_or_init(|| {
        let fmt_layer = tracing_subscriber::fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(false);
        let registry = tracing_subscriber::registry()
            .with(build_filter(&filter_directive()))
            .with(fmt_layer);
        if registry.try_init().is_err() {
            eprintln!("tfs-bridge: logging init skipped (global subscriber already set)");
            return false;
        }
        true
    })
}
