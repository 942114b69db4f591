//! # Messages
//!
//! Chat replies sent by the command handlers.

pub fn add_steak_usage(prefix: &str) -> String {
    format!("Usage: {prefix}addsteak [steak name]")
}

pub fn steak_eaten(author: &str, steak: &str) -> String {
    format!("@{author} has eaten a {steak}!")
}

/// `mention` is already in `@name` form.
pub fn steak_eaten_with(author: &str, steak: &str, mention: &str) -> String {
    format!("@{author} has eaten a {steak} with {mention}!")
}

pub fn add_steak_denied(author: &str) -> String {
    format!("@{author} only the streamer or a mod can add steaks.")
}

pub fn steak_added(steak: &str) -> String {
    format!("Added new steak: {steak}")
}
