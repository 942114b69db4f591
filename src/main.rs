//! # Main Entry Point
//!
//! Initializes the bot using a layered layout:
//! - Domain: Configuration, Types and Traits
//! - Infrastructure: Twitch chat, steak file store, liveness HTTP server
//! - Application: Catalog, Parsing, Router, Logging
//! - Interface: Command Handlers
//!

mod application;
mod domain;
mod infrastructure;
mod interface;
mod strings;
#[cfg(test)]
mod test_support;

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;

use crate::application::router::CommandRouter;
use crate::domain::config::AppConfig;
use crate::domain::traits::SteakStore;
use crate::infrastructure::store::FileSteakStore;
use crate::infrastructure::twitch::{self, ChatEvent, TwitchService};
use crate::strings::logs;

#[derive(Parser)]
#[command(name = "steakbot")]
#[command(about = "Twitch chat bot that hands out steaks")]
struct Cli {
    /// Optional YAML settings file
    #[arg(long, default_value = "data/config.yaml")]
    config: PathBuf,

    /// Address for the liveness endpoint (overrides config and HTTP_BIND)
    #[arg(long)]
    http_bind: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // 1. Load Configuration
    dotenv::dotenv().ok();
    let cli = Cli::parse();
    let mut config = AppConfig::load(&cli.config)?;
    if let Some(bind) = cli.http_bind {
        config.http.bind = bind;
    }

    // 2. Logging Setup
    let _guard = application::logging::init(&config.logging)?;
    tracing::info!("{}", logs::STARTING);
    tracing::info!(
        "{}",
        logs::config_loaded(&config.twitch.nick, &config.twitch.channels)
    );

    // 3. Liveness server, independent of the chat session
    if config.http.enabled {
        let bind = config.http.bind.clone();
        tokio::spawn(async move {
            if let Err(e) = infrastructure::http::serve(&bind).await {
                tracing::error!("{}", logs::http_failed(&format!("{e:#}")));
            }
        });
    } else {
        tracing::info!("{}", logs::HTTP_DISABLED);
    }

    // 4. Commands
    let file_store = FileSteakStore::new(&config.storage.custom_steaks_file);
    tracing::info!("{}", logs::store_path(&file_store.path().display().to_string()));
    let store: Arc<dyn SteakStore> = Arc::new(file_store);
    let router = CommandRouter::new(&config, store);

    // 5. Chat Event Loop
    let (mut incoming, client) = twitch::connect(&config.twitch)?;
    let nick = config.twitch.nick.clone();

    // Commands are awaited inline, so one finishes before the next message is read.
    let chat_loop = async {
        while let Some(message) = incoming.recv().await {
            let msg = match twitch::classify(&message, &nick) {
                Some(ChatEvent::Connected(name)) => {
                    tracing::info!("{}", logs::connected_as(&name));
                    continue;
                }
                Some(ChatEvent::Joined(channel)) => {
                    tracing::info!("{}", logs::joined_channel(&channel));
                    continue;
                }
                Some(ChatEvent::Message(msg)) => msg,
                None => continue,
            };
            let chat = TwitchService::new(client.clone(), msg.channel.clone());
            if let Err(e) = router.route(&chat, &msg).await {
                tracing::error!("{}", logs::route_failed(&msg.channel, &format!("{e:#}")));
            }
        }
        tracing::warn!("{}", logs::CHAT_CLOSED);
    };

    let shutdown = async {
        match tokio::signal::ctrl_c().await {
            Ok(()) => tracing::info!("{}", logs::SHUTDOWN),
            Err(e) => {
                tracing::error!("{}", logs::shutdown_fail(&e.to_string()));
                std::future::pending::<()>().await;
            }
        }
    };

    tokio::select! {
        _ = chat_loop => {}
        _ = shutdown => {}
    }

    Ok(())
}
