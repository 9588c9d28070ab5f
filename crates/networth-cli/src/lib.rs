// NOTE: networth Architecture Rationale
//
// Why one router instance passed by reference (no global "force navigate")?
// - Every transition goes through SectionRouter::navigate, so the visibility,
//   link and notification steps can never drift apart
// - Hosts (the TUI, the headless `route` command) own the router and hand
//   `&mut` to whatever needs to navigate
//
// Why fall back to the dashboard instead of failing on unknown routes?
// - A stale bookmark or typo in the fragment must still show something
// - Trade-off: bad routes are only visible in debug logs
//
// Why resolve panes once at startup?
// - The route table is fixed; a pane missing from the config is reported once
//   and then simply not part of the registry

mod args;
mod commands;
pub mod config;
pub mod error;
mod handlers;
pub mod host;
pub mod listeners;
pub mod logging;
pub mod presentation;
pub mod types;

pub use args::{Cli, Commands, ConfigCommand};
pub use commands::run;
