// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! jira-mattermost: relays issue tracker webhooks into chat channels.
//!
//! The tracker posts its webhook to `/?mattermost_hook_url=<hook>`. The
//! relay renders the event as a chat message and posts it to `<hook>`.

mod dispatch;
mod env;
mod server;
mod state;

use clap::Parser;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tracing::info;
use tracing_subscriber::EnvFilter;

use jm_core::{ParseMode, TransformConfig, Transformer};

use dispatch::HttpDispatcher;

/// Port used when neither `--port` nor `PORT` is set.
const DEFAULT_PORT: u16 = 5000;

/// jira-mattermost: issue tracker to chat webhook relay
#[derive(Parser, Debug)]
#[command(name = "jira-mattermost")]
#[command(about = "Relays issue tracker webhooks to chat incoming webhooks")]
struct Args {
    /// Address to bind the server to
    #[arg(long, default_value_t = IpAddr::V4(Ipv4Addr::UNSPECIFIED))]
    bind_ip: IpAddr,

    /// Port to listen on (defaults to $PORT, then 5000)
    #[arg(short, long)]
    port: Option<u16>,

    /// TOML file with transform settings (defaults to $JM_CONFIG)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// How to treat bodies that are not JSON objects: tolerant or strict
    /// (overrides the config file and $JM_PARSE_MODE)
    #[arg(long)]
    parse_mode: Option<ParseMode>,

    /// Timeout for posting to the chat webhook, in seconds
    #[arg(long, default_value = "10")]
    timeout_secs: u64,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    setup_logging(args.verbose);

    let port = args.port.or_else(env::port).unwrap_or(DEFAULT_PORT);
    let addr = SocketAddr::new(args.bind_ip, port);

    info!("Starting jira-mattermost relay");
    info!("  Bind address: {}", addr);

    let mut config = match args.config.or_else(env::config_path) {
        Some(path) => {
            info!("  Config file: {}", path.display());
            TransformConfig::load(&path)?
        }
        None => TransformConfig::default(),
    };
    if let Some(mode) = parse_mode_override(args.parse_mode, env::parse_mode())? {
        config.parse_mode = mode;
    }

    info!("  Parse mode: {}", config.parse_mode);
    info!("  Multiline fields: {}", config.multiline_fields.join(", "));
    info!("  Dispatch timeout: {}s", args.timeout_secs);

    let dispatcher = HttpDispatcher::new(Duration::from_secs(args.timeout_secs))?;
    let state = state::ServerState::new(Transformer::new(&config), Arc::new(dispatcher));

    server::run(addr, state).await?;

    Ok(())
}

/// Picks the parse mode set on the command line, then the environment.
fn parse_mode_override(
    flag: Option<ParseMode>,
    env_value: Option<String>,
) -> jm_core::Result<Option<ParseMode>> {
    match (flag, env_value) {
        (Some(mode), _) => Ok(Some(mode)),
        (None, Some(raw)) => raw.parse().map(Some),
        (None, None) => Ok(None),
    }
}

fn setup_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_env(env::names::RUST_LOG)
        .unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[cfg(test)]
#[path = "main_tests.rs"]
mod tests;
