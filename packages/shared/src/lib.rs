//! Shared utilities for Jangter Chat.

pub mod logger;
pub mod time;
