//! ViewModels for the TUI and console output.

use networth_router::{NavigationChanged, RouterSnapshot};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabViewModel {
    pub title: String,
    pub href: String,
    pub hotkey: char,
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaneViewModel {
    pub title: String,
    pub lines: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusBarViewModel {
    pub fragment: String,
    pub can_go_back: bool,
    pub can_go_forward: bool,
    pub message: Option<String>,
}

/// Everything the TUI draws in one frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScreenViewModel {
    pub tabs: Vec<TabViewModel>,
    pub pane: PaneViewModel,
    pub status_bar: StatusBarViewModel,
}

/// Result of the headless `route` command.
#[derive(Debug, Clone, Serialize)]
pub struct RouteReport {
    pub fragment: String,
    pub history: Vec<String>,
    pub snapshot: RouterSnapshot,
    pub notifications: Vec<NavigationChanged>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SectionEntry {
    pub id: String,
    pub title: String,
    pub fragment: String,
}

/// Result of the `sections` command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SectionListing {
    pub sections: Vec<SectionEntry>,
    pub unregistered: Vec<String>,
}
