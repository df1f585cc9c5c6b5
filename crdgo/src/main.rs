mod commands;
mod ops;
mod reports;
mod trace;

use clap::Parser;
use eyre::Result;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use crate::commands::Cli;

fn main() -> Result<()> {
    color_eyre::install()?;
    init_tracing();

    Cli::parse().run()
}

/// Install a stderr subscriber when `RUST_LOG` is set, e.g. `RUST_LOG=crdgo_codegen=debug`.
fn init_tracing() {
    if std::env::var_os("RUST_LOG").is_none() {
        return;
    }

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true)
                .with_level(true),
        )
        .with(EnvFilter::from_default_env())
        .init();
}
