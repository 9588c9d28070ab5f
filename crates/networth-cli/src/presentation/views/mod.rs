//! TUI View Components
//!
//! Ratatui widgets wrapping a ViewModel reference. No logic beyond layout
//! and styling.

pub mod pane;
pub mod status_bar;
pub mod tabs;

pub use pane::PaneView;
pub use status_bar::StatusBarView;
pub use tabs::TabsView;
