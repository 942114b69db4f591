//! # Log Lines
//!
//! Operator-facing log text.

pub const STARTING: &str = "Starting Steakbot...";
pub const SHUTDOWN: &str = "Shutting down...";
pub const HTTP_DISABLED: &str = "Liveness server disabled in config";

pub fn config_loaded(nick: &str, channels: &[String]) -> String {
    format!("Loaded configuration for {nick} (channels: {})", channels.join(", "))
}

pub fn store_path(path: &str) -> String {
    format!("Custom steaks file: {path}")
}

pub fn connected_as(nick: &str) -> String {
    format!("Bot connected as {nick}")
}

pub fn joined_channel(channel: &str) -> String {
    format!("Connected to channel: {channel}")
}

pub fn http_started(bind: &str) -> String {
    format!("Starting webserver on {bind}")
}

pub fn http_failed(err: &str) -> String {
    format!("Liveness server failed: {err}")
}

pub fn shutdown_fail(err: &str) -> String {
    format!("Unable to listen for shutdown signal: {err}")
}

pub fn steak_added(channel: &str, author: &str, steak: &str) -> String {
    format!("[{channel}] {author} added steak '{steak}'")
}

pub fn route_failed(channel: &str, err: &str) -> String {
    format!("Failed to route message in {channel}: {err}")
}

pub const CHAT_CLOSED: &str = "Chat connection closed";
