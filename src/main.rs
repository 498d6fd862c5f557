// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

use std::process::ExitCode;

use clap::Parser;
use feedscan::bootstrap::{run, Cli};
use tracing_subscriber::EnvFilter;

/// Log target for the one-line diagnostic printed before a non-zero exit
const FATAL_TARGET: &str = "feedscan::fatal";

/// `RUST_LOG` (default `warn`), with fatal diagnostics always enabled
fn log_filter() -> EnvFilter {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    match format!("{FATAL_TARGET}=error").parse() {
        Ok(directive) => filter.add_directive(directive),
        Err(_) => filter,
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(log_filter())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    if let Err(e) = run(cli).await {
        tracing::error!(target: FATAL_TARGET, "feedscan failed: {e}");
        return ExitCode::from(1);
    }
    ExitCode::SUCCESS
}
