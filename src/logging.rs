// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Logging setup for the `curves` binary.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Install a compact stderr logger.
///
/// `RUST_LOG` wins when set. Otherwise the crate logs at `info`, or at
/// `debug` when `verbose`, which shows every exceptional curve as it is found.
pub fn init_logger(verbose: bool) {
    let default = if verbose {
        "exceptional_curves=debug,info"
    } else {
        "exceptional_curves=info"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .compact(),
        )
        .init();
}
