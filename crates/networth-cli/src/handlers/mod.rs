pub mod config;
pub mod route;
pub mod sections;
pub mod tui;
