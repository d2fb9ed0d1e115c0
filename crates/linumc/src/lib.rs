//! linum command-line driver.
//!
//! The binary is a thin shell over [`commands`]: parse the arguments into a
//! [`Cli`](commands::Cli), run it, print the output or the rendered error.
//!
//! # Tracing
//!
//! Enable with environment variables:
//! - `RUST_LOG=linum_arith=debug` - one span per arithmetic operation
//! - `RUST_LOG=linum_postfix=trace` - every operator pop during conversion
//! - `RUST_LOG=trace` - everything
//!
//! Log output goes to stderr so results on stdout stay pipeable.

pub mod commands;

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Call this once at startup. Safe to call multiple times.
/// Does nothing unless `RUST_LOG` is set.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(
                    fmt::layer()
                        .with_writer(std::io::stderr)
                        .with_target(true)
                        .with_level(true),
                )
                .with(filter)
                .init();
        }
    });
}
