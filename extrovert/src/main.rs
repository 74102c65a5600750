// Copyright (c) 2026 Parley Contributors
// SPDX-License-Identifier: AGPL-3.0

//! # Extrovert
//!
//! Accepts messages from a browser form and relays them, in order, to the
//! introvert service named by `INTROVERT_HOST` / `INTROVERT_PORT`.

use anyhow::Result;
use clap::Parser;
use tracing::info;

use parley_core::infrastructure::config::{load_dotenv, PeerConfig, ServiceConfig};
use parley_core::infrastructure::logging::init_logging;

/// Extrovert - forwards every message it hears
#[derive(Parser)]
#[command(name = "extrovert")]
#[command(version, about, long_about = None)]
struct Cli {
    #[command(flatten)]
    service: ServiceConfig,

    #[command(flatten)]
    peer: PeerConfig,
}

#[tokio::main]
async fn main() -> Result<()> {
    let dotenv = load_dotenv();
    let cli = Cli::parse();

    init_logging(&cli.service.log_level)?;

    if let Some(path) = dotenv {
        info!("Loaded environment from {}", path.display());
    }

    parley_extrovert::run(cli.service, cli.peer).await
}
