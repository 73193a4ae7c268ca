//! CLI module for chat avatars
//!
//! Provides subcommands:
//! - `serve`: HTTP server exposing the session user's avatar
//! - `resolve`: one-off resolution with the configured strategy chain

pub mod resolve;
pub mod serve;

use clap::{Parser, Subcommand};

use crate::config::AppConfig;
use crate::infrastructure::logging;

/// Chat avatars - display pictures for chat participants
#[derive(Parser)]
#[command(name = "chat-avatars")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the HTTP server
    Serve,

    /// Resolve the avatar URL of a single user and print it
    Resolve(resolve::ResolveArgs),
}

/// Load configuration and install logging.
///
/// A configuration that fails to load is an error, never a silent fallback
/// to the default strategy chain.
fn load_config() -> anyhow::Result<AppConfig> {
    dotenvy::dotenv().ok();

    let config = match AppConfig::load() {
        Ok(config) => config,
        Err(e) => {
            logging::init_logging(&logging::LoggingConfig::from(
                &AppConfig::default().logging,
            ));
            tracing::error!(error = %e, "Failed to load configuration");
            return Err(anyhow::Error::new(e).context("invalid configuration"));
        }
    };

    logging::init_logging(&logging::LoggingConfig::from(&config.logging));

    Ok(config)
}
