//! # Application Layer
//!
//! Contains the bot's behaviour independent of the chat client:
//! the steak catalog, command parsing and routing, and logging setup.

pub mod catalog;
pub mod logging;
pub mod parsing;
pub mod router;
