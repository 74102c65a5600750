// Copyright (c) 2026 Parley Contributors
// SPDX-License-Identifier: AGPL-3.0

//! # Introvert
//!
//! Keeps the most recent message it was sent, shows it on its index page and
//! shouts it back on `GET /api/message`.

use anyhow::Result;
use clap::Parser;
use tracing::info;

use parley_core::infrastructure::config::{load_dotenv, EchoConfig, ServiceConfig};
use parley_core::infrastructure::logging::init_logging;

/// Introvert - listens, and only repeats when asked
#[derive(Parser)]
#[command(name = "introvert")]
#[command(version, about, long_about = None)]
struct Cli {
    #[command(flatten)]
    service: ServiceConfig,

    #[command(flatten)]
    echo: EchoConfig,
}

#[tokio::main]
async fn main() -> Result<()> {
    let dotenv = load_dotenv();
    let cli = Cli::parse();

    init_logging(&cli.service.log_level)?;

    if let Some(path) = dotenv {
        info!("Loaded environment from {}", path.display());
    }

    parley_introvert::run(cli.service, cli.echo).await
}
