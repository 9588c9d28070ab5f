//! Terminal host document.
//!
//! Each configured pane becomes one section container plus one tab link. The
//! router takes ownership of both at startup; the renderer reads their state
//! back through router snapshots.

mod document;
mod pane;

pub use document::PaneDocument;
pub use pane::{PaneHandle, TabHandle};
