//! Tracing setup for the binary
//!
//! Logs go to stderr so command output on stdout stays clean. `RUST_LOG`
//! takes precedence over the built-in default.

use std::sync::Once;

use tracing_subscriber::{fmt, EnvFilter};

static TRACING_INIT: Once = Once::new();

/// Default filter when `RUST_LOG` is unset
pub const DEFAULT_FILTER: &str = "expense_tracker=warn";
/// Filter used with `--verbose`
pub const VERBOSE_FILTER: &str = "expense_tracker=debug";

/// Install the global subscriber; later calls are no-ops
pub fn init_tracing(verbose: bool) {
    TRACING_INIT.call_once(|| {
        let fallback = if verbose { VERBOSE_FILTER } else { DEFAULT_FILTER };
        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));

        // Another subscriber may already be installed (e.g. by a test harness)
        let _ = fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .try_init();
    });
}
