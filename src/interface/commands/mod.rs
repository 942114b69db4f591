//! # Command Handlers
//!
//! Contains specific handler functions for each supported chat command (`bettersteak`, `addsteak`).
//! These handlers are invoked by the Router.

pub mod add;
pub mod steak;
