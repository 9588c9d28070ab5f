//! Presentation layer.
//!
//! Presenters turn router state into ViewModels; views and renderers only map
//! ViewModels onto the terminal (ratatui widgets or console text).

pub mod presenters;
pub mod renderers;
pub mod view_models;
pub mod views;
