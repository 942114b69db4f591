//! # Steak Command
//!
//! Handles `!bettersteak [user]`: announces a random steak for the author,
//! optionally shared with another user.

use crate::application::catalog;
use crate::application::parsing::{as_mention, second_token};
use crate::domain::traits::{ChatProvider, SteakStore};
use crate::domain::types::IncomingMessage;
use crate::strings::messages;
use anyhow::Result;

pub async fn handle_steak(
    store: &dyn SteakStore,
    chat: &impl ChatProvider,
    msg: &IncomingMessage,
) -> Result<()> {
    let steak = catalog::pick_from_store(store).await?;
    let author = &msg.author.name;

    let reply = match second_token(&msg.text) {
        Some(target) => messages::steak_eaten_with(author, &steak, &as_mention(target)),
        None => messages::steak_eaten(author, &steak),
    };

    chat.send_message(&reply).await.map_err(|e| anyhow::anyhow!(e))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::catalog::DEFAULT_STEAKS;
    use crate::infrastructure::store::FileSteakStore;
    use crate::test_support::{RecordingChat, message};
    use tempfile::TempDir;

    /// Pulls the steak out of a reply built by `steak_eaten*`.
    fn steak_in<'a>(reply: &'a str, author: &str, suffix: &str) -> &'a str {
        let head = format!("@{author} has eaten a ");
        reply
            .strip_prefix(head.as_str())
            .and_then(|r| r.strip_suffix(suffix))
            .unwrap_or_else(|| panic!("unexpected reply: {reply}"))
    }

    #[tokio::test]
    async fn test_plain_announce() -> Result<()> {
        let dir = TempDir::new()?;
        let store = FileSteakStore::new(dir.path().join("steaks.txt"));
        let chat = RecordingChat::new("alice");

        handle_steak(&store, &chat, &message("alice", false, "alice", "!bettersteak")).await?;

        let sent = chat.sent();
        assert_eq!(sent.len(), 1);
        let steak = steak_in(&sent[0], "alice", "!");
        assert!(DEFAULT_STEAKS.contains(&steak));
        Ok(())
    }

    #[tokio::test]
    async fn test_mention_is_normalized() -> Result<()> {
        let dir = TempDir::new()?;
        let store = FileSteakStore::new(dir.path().join("steaks.txt"));
        let chat = RecordingChat::new("alice");

        handle_steak(&store, &chat, &message("alice", false, "alice", "!bettersteak @bob")).await?;
        handle_steak(&store, &chat, &message("alice", false, "alice", "!bettersteak bob extra")).await?;

        for reply in chat.sent() {
            let steak = steak_in(&reply, "alice", " with @bob!");
            assert!(DEFAULT_STEAKS.contains(&steak));
        }
        Ok(())
    }

    #[tokio::test]
    async fn test_custom_steaks_are_eligible() -> Result<()> {
        let dir = TempDir::new()?;
        let store = FileSteakStore::new(dir.path().join("steaks.txt"));
        store.append("wagyu steak").await?;
        let chat = RecordingChat::new("alice");

        let mut saw_custom = false;
        for _ in 0..300 {
            handle_steak(&store, &chat, &message("dave", false, "alice", "!bettersteak")).await?;
        }
        for reply in chat.sent() {
            let steak = steak_in(&reply, "dave", "!");
            assert!(steak == "wagyu steak" || DEFAULT_STEAKS.contains(&steak));
            saw_custom |= steak == "wagyu steak";
        }
        assert!(saw_custom);
        Ok(())
    }
}
