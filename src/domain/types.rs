//! # Domain Types
//!
//! Chat data as seen by the command layer, independent of the wire client.

/// The user who sent a message. Never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatAuthor {
    /// Login name, as used in `@mentions`.
    pub name: String,
    pub is_mod: bool,
}

impl ChatAuthor {
    pub fn new(name: impl Into<String>, is_mod: bool) -> Self {
        Self {
            name: name.into(),
            is_mod,
        }
    }

    /// The channel owner is the user whose login matches the channel name.
    pub fn owns(&self, channel: &str) -> bool {
        self.name.eq_ignore_ascii_case(channel)
    }

    /// Moderators and the channel owner may change the steak list.
    pub fn can_manage(&self, channel: &str) -> bool {
        self.is_mod || self.owns(channel)
    }
}

/// An inbound chat line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IncomingMessage {
    pub author: ChatAuthor,
    pub channel: String,
    pub text: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_owner_match_ignores_case() {
        let author = ChatAuthor::new("Alice", false);
        assert!(author.owns("alice"));
        assert!(author.can_manage("ALICE"));
        assert!(!author.can_manage("bob"));
    }

    #[test]
    fn test_moderator_can_manage_any_channel() {
        let author = ChatAuthor::new("carol", true);
        assert!(!author.owns("alice"));
        assert!(author.can_manage("alice"));
    }
}
