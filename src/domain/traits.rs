//! # Domain Traits
//!
//! Abstract interfaces for the two external collaborators (Chat, Steak storage).
//! Allows for pluggable implementations in the Infrastructure layer.

use anyhow::Result;
use async_trait::async_trait;

/// Abstract interface for a Chat Provider bound to one channel (e.g., Twitch, Console)
#[async_trait]
pub trait ChatProvider: Send + Sync {
    /// Send a message to the channel
    async fn send_message(&self, content: &str) -> Result<(), String>;

    /// Get the channel this provider replies to
    fn channel(&self) -> String;
}

/// Storage for steaks added at runtime.
///
/// Entries are only ever appended. `load` returns them in the order they were written.
#[async_trait]
pub trait SteakStore: Send + Sync {
    /// All stored entries, trimmed, blank lines skipped. A store that was never written is empty.
    async fn load(&self) -> Result<Vec<String>>;

    /// Append one entry.
    async fn append(&self, entry: &str) -> Result<()>;
}
