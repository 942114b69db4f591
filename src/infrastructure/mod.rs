//! # Infrastructure Layer
//!
//! Handles interactions with external systems and services.
//! Implements the traits defined in the Domain layer (ChatProvider, SteakStore)
//! and hosts the liveness HTTP server.

pub mod http;
pub mod store;
pub mod twitch;
