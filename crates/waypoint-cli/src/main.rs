//! Waypoint CLI Application
//!
//! Command-line interface for the waypoint goal planner.

mod args;
mod cli;
mod renderer;

use std::sync::Arc;

use anyhow::{Context, Result};
use args::{Args, Commands};
use clap::Parser;
use cli::Cli;
use log::info;
use renderer::TerminalRenderer;
use waypoint_core::{AssistantBuilder, GeminiClient, GeminiConfig};
use Commands::*;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let Args {
        database_file,
        no_color,
        command,
    } = Args::parse();

    let mut builder = AssistantBuilder::new().with_database_path(database_file);
    if command.as_ref().is_some_and(Commands::needs_model) {
        let config = GeminiConfig::from_env().context("Gemini API is not configured")?;
        let client = GeminiClient::new(config).context("Failed to create Gemini client")?;
        builder = builder.with_model(Arc::new(client));
    }

    let assistant = builder
        .build()
        .await
        .context("Failed to initialize assistant")?;

    let cli = Cli::new(assistant, TerminalRenderer::new(!no_color));

    info!("Waypoint started");

    match command {
        Some(Goal(args)) => cli.submit_goal(args).await,
        Some(Step(args)) => cli.solve_step(args).await,
        Some(History { command }) => cli.handle_history_command(command),
        Some(Settings { command }) => cli.handle_settings_command(command),
        None => cli.list_history(),
    }
}
