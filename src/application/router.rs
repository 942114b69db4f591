//! # Command Router
//!
//! Routes incoming chat lines to the appropriate command handler (in `interface/commands`).
//! It parses the command token (e.g., `!bettersteak`) and dispatches it with the necessary context.

use anyhow::Result;
use std::sync::Arc;

use crate::application::parsing::parse_command;
use crate::domain::config::AppConfig;
use crate::domain::traits::{ChatProvider, SteakStore};
use crate::domain::types::IncomingMessage;
use crate::interface::commands;

pub const STEAK_COMMAND: &str = "bettersteak";
pub const ADD_COMMAND: &str = "addsteak";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Steak,
    Add,
}

impl Command {
    fn from_name(name: &str) -> Option<Self> {
        match name {
            STEAK_COMMAND => Some(Command::Steak),
            ADD_COMMAND => Some(Command::Add),
            _ => None,
        }
    }
}

pub struct CommandRouter {
    prefix: String,
    store: Arc<dyn SteakStore>,
}

impl CommandRouter {
    pub fn new(config: &AppConfig, store: Arc<dyn SteakStore>) -> Self {
        Self {
            prefix: config.commands.prefix.clone(),
            store,
        }
    }

    /// Runs the command in `msg`, if any, to completion. Non-command lines are ignored.
    /// The handlers see the same untouched text the prefix was matched against.
    pub async fn route<C>(&self, chat: &C, msg: &IncomingMessage) -> Result<()>
    where
        C: ChatProvider,
    {
        let Some(name) = parse_command(&msg.text, &self.prefix) else {
            return Ok(());
        };

        let Some(command) = Command::from_name(name) else {
            return Ok(());
        };
        tracing::info!(
            "Router dispatching cmd='{}' sender='{}' channel='{}'",
            name,
            msg.author.name,
            msg.channel
        );

        match command {
            Command::Steak => commands::steak::handle_steak(self.store.as_ref(), chat, msg).await,
            Command::Add => {
                commands::add::handle_add(self.store.as_ref(), chat, msg, &self.prefix).await
            }
        }
    }
}
