//! Mealplan CLI Application
//!
//! Command-line host for the meal plan wizard.

mod args;
mod cli;
mod renderer;

use std::{sync::Arc, time::Duration};

use anyhow::{Context, Result};
use args::{Args, Commands};
use clap::Parser;
use cli::{Cli, PlanArgs};
use log::info;
use mealplan_core::{Catalog, GatewayBuilder, MemoryGateway, PlanSubmissionGateway};
use renderer::TerminalRenderer;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let Args {
        database_file,
        no_color,
        catalog,
        submit_delay_ms,
        command,
    } = Args::parse();

    let catalog = match catalog {
        Some(path) => Catalog::from_json_file(&path)
            .with_context(|| format!("Failed to load catalog from {}", path.display()))?,
        None => Catalog::default(),
    };
    let cli = Cli::new(catalog, TerminalRenderer::new(!no_color));
    let gateway_builder = GatewayBuilder::new().with_database_path(database_file);

    info!("Mealplan started");

    match command.unwrap_or(Commands::Plan(PlanArgs::default())) {
        Commands::Plan(args) => {
            let gateway: Arc<dyn PlanSubmissionGateway> = if args.dry_run {
                Arc::new(MemoryGateway::new())
            } else {
                Arc::new(
                    gateway_builder
                        .build()
                        .await
                        .context("Failed to initialize submission gateway")?,
                )
            };
            cli.run_wizard(gateway, Duration::from_millis(submit_delay_ms))
                .await
        }
        Commands::History { command } => {
            let gateway = gateway_builder
                .build()
                .await
                .context("Failed to initialize submission gateway")?;
            cli.handle_history_command(&gateway, command).await
        }
        Commands::Catalog => cli.show_catalog(),
    }
}
