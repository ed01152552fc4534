//! Command implementations and ambient plumbing for `layout-tool`.

pub mod cli;
pub mod commands;
pub mod exit;
pub mod logging;
pub mod settings;
pub mod types;
