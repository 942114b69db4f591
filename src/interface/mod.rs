//! # Interface Layer
//!
//! User-facing entry points. Currently only chat commands.

pub mod commands;
