// ABOUTME: Booking administration server binary
// ABOUTME: Loads configuration, opens the database, and serves the HTTP API
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Booking Admin Server Contributors

//! # Booking Administration Server Binary
//!
//! Starts the staff, service, and availability API over a `SQLite` database.

use anyhow::Result;
use booking_admin_server::{
    config::environment::{DatabaseUrl, ServerConfig},
    database::Database,
    logging,
    resources::ServerResources,
    server,
};
use clap::Parser;
use std::sync::Arc;
use tracing::info;

#[derive(Parser)]
#[command(name = "booking-admin-server")]
#[command(about = "Booking administration API with staff and service availability")]
pub struct Args {
    /// Override HTTP port
    #[arg(long)]
    http_port: Option<u16>,

    /// Override database URL (`sqlite:<path>` or `sqlite::memory:`)
    #[arg(long)]
    database_url: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    logging::init_from_env()?;

    let mut config = ServerConfig::from_env()?;
    if let Some(http_port) = args.http_port {
        config.http_port = http_port;
    }
    if let Some(database_url) = args.database_url {
        config.database_url = DatabaseUrl::parse_url(&database_url);
    }
    config.validate()?;

    info!("Starting booking administration server");
    info!("{}", config.summary());

    let database = Database::new(&config.database_url).await?;
    let resources = Arc::new(ServerResources::new(database, Arc::new(config)));

    server::serve(resources).await
}
