// SPDX-License-Identifier: Apache-2.0

//! Logging initialization for the fwdport bot.
//!
//! Uses `tracing` with `tracing-subscriber` for structured logging to
//! stderr, where GitHub Actions collects step output. Log level can be
//! controlled via the `RUST_LOG` environment variable.
//!
//! # Examples
//!
//! ```bash
//! # Default: info for fwdport, warnings from dependencies
//! fwdport
//!
//! # Debug output for troubleshooting a workflow run
//! RUST_LOG=fwdport=debug fwdport
//! ```

use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, fmt};

/// Initialize the logging subsystem.
///
/// `RUST_LOG` overrides the default filter when set.
pub fn init_logging() {
    let fmt_layer = fmt::layer().with_target(false).with_writer(std::io::stderr);

    let filter_layer = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("fwdport=info,octocrab=warn"))
        .expect("valid default filter directives");

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt_layer)
        .init();
}
