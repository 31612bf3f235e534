// Oblique Gate - Main Entry Point
// Copyright 2026 Joseph Stone - All Rights Reserved
//
// MCP stdio server for Oblique Strategies.
// Usage:
//   oblique-gate            # card + thinking label
//   oblique-gate 1          # card only
//   oblique-gate 2          # thinking label only
//   oblique-gate --list     # print the tool definition and exit

use anyhow::{Context, Result};
use clap::Parser;
use oblique_gate::{config::ServerConfig, handlers::Handlers, mcp};

#[derive(Parser)]
#[command(name = "oblique-gate")]
#[command(author = "Joseph Stone")]
#[command(version)]
#[command(about = "MCP Oblique Strategies Server")]
struct Cli {
    /// Output mode: '1' omits thinking text, '2' omits card
    #[arg(value_parser = ["1", "2"])]
    mode: Option<String>,

    /// Print the tool definition as JSON and exit
    #[arg(long)]
    list: bool,
}

fn main() -> Result<()> {
    // stderr only; stdout carries JSON-RPC
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).try_init();

    let cli = Cli::parse();

    if cli.list {
        let tools = serde_json::json!({ "tools": mcp::tool_definitions() });
        println!("{}", serde_json::to_string_pretty(&tools)?);
        return Ok(());
    }

    let config = ServerConfig::from_arg(cli.mode.as_deref())
        .with_context(|| format!("Rejected output mode {:?}", cli.mode))?;

    log::info!("Initializing MCP server...");
    let handlers = Handlers::new(config);

    // Blocks until stdin closes
    mcp::run(&handlers).context("MCP server loop failed")?;

    Ok(())
}
