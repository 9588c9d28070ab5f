//! Section router for the networth tracker.
//!
//! The router is the single owner of "which section is visible". It resolves a
//! fragment (`#trends`) or an explicit request to a registered section, hides
//! every other section, marks the matching navigation link and notifies
//! listeners. Unknown routes fall back to the dashboard instead of failing.
//!
//! Everything host-specific sits behind the traits in [`traits`]: the
//! [`Document`] that owns section containers and links, the
//! [`LocationProvider`] that owns the fragment history, and the
//! [`NavigationListener`]s that react to transitions.

pub mod error;
pub mod listener;
pub mod location;
pub mod registry;
pub mod router;
pub mod traits;

pub use error::{Error, Result};
pub use listener::ListenerSet;
pub use location::HistoryLocation;
pub use registry::{Section, SectionRegistry};
pub use router::{LinkSnapshot, RouterBuilder, RouterSnapshot, SectionRouter, SectionSnapshot};
pub use traits::{Document, LocationProvider, NavLink, NavigationListener, SectionContainer};

pub use networth_types::{
    DEFAULT_SECTION, KNOWN_SECTIONS, NavigationChanged, SectionId, SectionState,
};
