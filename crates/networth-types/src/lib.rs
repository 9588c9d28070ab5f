pub mod event;
pub mod section;

pub use event::NavigationChanged;
pub use section::*;
