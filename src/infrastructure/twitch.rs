//! # Twitch Service Adapter
//!
//! Implements the `ChatProvider` trait for Twitch chat using the `twitch_irc` client.
//! This module acts as the bridge between the generic `ChatProvider` interface used by the bot's core logic
//! and the IRC message types delivered by the client.

use crate::domain::config::TwitchConfig;
use crate::domain::traits::ChatProvider;
use crate::domain::types::{ChatAuthor, IncomingMessage};
use anyhow::{Result, anyhow};
use async_trait::async_trait;
use tokio::sync::mpsc::UnboundedReceiver;
use twitch_irc::login::StaticLoginCredentials;
use twitch_irc::message::{PrivmsgMessage, ServerMessage};
use twitch_irc::{ClientConfig, SecureTCPTransport, TwitchIRCClient};

pub type TwitchClient = TwitchIRCClient<SecureTCPTransport, StaticLoginCredentials>;

const MODERATOR_TAG: &str = "mod";
const MODERATOR_BADGES: [&str; 2] = ["moderator", "lead_moderator"];

/// Creates the client and requests every configured channel.
/// The connection itself is opened lazily by the client on the first join.
pub fn connect(config: &TwitchConfig) -> Result<(UnboundedReceiver<ServerMessage>, TwitchClient)> {
    let credentials =
        StaticLoginCredentials::new(config.nick.clone(), Some(config.token.clone()));
    let (incoming, client) = TwitchClient::new(ClientConfig::new_simple(credentials));

    for channel in &config.channels {
        client
            .join(channel.clone())
            .map_err(|e| anyhow!("Invalid channel name {:?}: {:?}", channel, e))?;
    }

    Ok((incoming, client))
}

#[derive(Clone)]
pub struct TwitchService {
    client: TwitchClient,
    channel: String,
}

impl TwitchService {
    pub fn new(client: TwitchClient, channel: impl Into<String>) -> Self {
        Self {
            client,
            channel: channel.into(),
        }
    }
}

#[async_trait]
impl ChatProvider for TwitchService {
    fn channel(&self) -> String {
        self.channel.clone()
    }

    async fn send_message(&self, content: &str) -> Result<(), String> {
        tracing::info!("Bot sending message to {}: {}", self.channel, content);
        self.client
            .say(self.channel.clone(), content.to_string())
            .await
            .map_err(|e| e.to_string())
    }
}

/// What the chat loop needs to know about a server message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChatEvent {
    /// Login accepted; carries the name the server knows the bot by.
    Connected(String),
    /// The bot itself joined this channel.
    Joined(String),
    /// A chat line from someone other than the bot.
    Message(IncomingMessage),
}

/// The server sets `mod=1` for every kind of channel moderator.
fn is_moderator(msg: &PrivmsgMessage) -> bool {
    let tagged = msg.source.tags.0.get(MODERATOR_TAG).and_then(|v| v.as_deref()) == Some("1");
    tagged || msg.badges.iter().any(|b| MODERATOR_BADGES.contains(&b.name.as_str()))
}

/// Maps a chat line to the command layer's view of it.
pub fn incoming_from_privmsg(msg: &PrivmsgMessage) -> IncomingMessage {
    IncomingMessage {
        author: ChatAuthor::new(msg.sender.login.clone(), is_moderator(msg)),
        channel: msg.channel_login.clone(),
        text: msg.message_text.clone(),
    }
}

/// Picks out the connection lifecycle and the chat lines worth dispatching.
/// Lines sent under the bot's own login are dropped here so it never answers itself,
/// and other users' JOINs are ignored.
pub fn classify(message: &ServerMessage, nick: &str) -> Option<ChatEvent> {
    match message {
        ServerMessage::GlobalUserState(state) => Some(ChatEvent::Connected(state.user_name.clone())),
        ServerMessage::Join(join) if join.user_login.eq_ignore_ascii_case(nick) => {
            Some(ChatEvent::Joined(join.channel_login.clone()))
        }
        ServerMessage::Privmsg(msg) if !msg.sender.login.eq_ignore_ascii_case(nick) => {
            Some(ChatEvent::Message(incoming_from_privmsg(msg)))
        }
        _ => None,
    }
}
