//! User Directory CLI
//!
//! Terminal front-end over the user directory access layer: browse random
//! users, save them, and manage the saved list.

pub mod commands;
pub mod config;
pub mod display;
