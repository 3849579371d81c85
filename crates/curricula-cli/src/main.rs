//! Curricula CLI Application
//!
//! Command-line interface and MCP server for the Curricula degree planner.

mod args;
mod cli;
mod mcp;
mod renderer;

use anyhow::{Context, Result};
use args::{Args, Commands};
use clap::Parser;
use cli::Cli;
use curricula_core::PlannerBuilder;
use log::info;
use mcp::{CurriculaMcpServer, run_stdio_server};
use renderer::TerminalRenderer;
use Commands::*;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let Args {
        database_file,
        catalog_dir,
        user,
        no_color,
        command,
    } = Args::parse();

    let planner = PlannerBuilder::new()
        .with_database_path(database_file)
        .with_catalog_dir(catalog_dir)
        .with_user(user)
        .build()
        .await
        .context("Failed to initialize planner")?;

    info!("Curricula started for user {}", planner.user());

    if let Some(Serve) = command {
        info!("Starting Curricula MCP server");
        return run_stdio_server(CurriculaMcpServer::new(planner))
            .await
            .context("MCP server failed");
    }

    let mut cli = Cli::new(planner, TerminalRenderer::new(!no_color));
    let result = match command {
        Some(Plan { command }) => cli.handle_plan_command(command),
        Some(Course { command }) => cli.handle_course_command(command),
        Some(Sem { command }) => cli.handle_semester_command(command),
        Some(Catalog { command }) => cli.handle_catalog_command(command),
        Some(Settings { command }) => cli.handle_settings_command(command),
        Some(Serve) | None => cli.overview(),
    };
    cli.shutdown().await;
    result
}
