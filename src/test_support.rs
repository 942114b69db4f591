//! Test-only helpers for driving commands without a chat connection.

use crate::domain::traits::ChatProvider;
use crate::domain::types::{ChatAuthor, IncomingMessage};
use async_trait::async_trait;
use std::sync::Mutex;

/// Records every message sent through it.
pub struct RecordingChat {
    channel: String,
    sent: Mutex<Vec<String>>,
}

impl RecordingChat {
    pub fn new(channel: &str) -> Self {
        Self {
            channel: channel.to_string(),
            sent: Mutex::new(Vec::new()),
        }
    }

    pub fn sent(&self) -> Vec<String> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl ChatProvider for RecordingChat {
    async fn send_message(&self, content: &str) -> Result<(), String> {
        self.sent.lock().unwrap().push(content.to_string());
        Ok(())
    }

    fn channel(&self) -> String {
        self.channel.clone()
    }
}

/// A chat line from `author` in `channel`.
pub fn message(author: &str, is_mod: bool, channel: &str, text: &str) -> IncomingMessage {
    IncomingMessage {
        author: ChatAuthor::new(author, is_mod),
        channel: channel.to_string(),
        text: text.to_string(),
    }
}
