//! Tracing initialization.
//!
//! Logs go to stderr so stdout carries nothing but the pick. The default
//! filter is `off`; set `SICBO_LOG=debug` to see why a pick fell back.

use std::io;
use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

static INIT: Once = Once::new();

/// Initialize the subscriber with `filter`. Idempotent.
///
/// An unparsable filter falls back to `off`.
pub fn init_tracing(filter: &str) {
    INIT.call_once(|| {
        let filter = EnvFilter::try_new(filter).unwrap_or_else(|_| EnvFilter::new("off"));

        let _ = tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_writer(io::stderr)
                    .with_target(true)
                    .with_file(true)
                    .with_line_number(true),
            )
            .with(filter)
            .try_init();
    });
}

/// Route panic reports through tracing instead of the default stderr print.
pub fn install_panic_hook() {
    std::panic::set_hook(Box::new(|info| {
        tracing::error!(panic = %info, "panic captured");
    }));
}
