use anyhow::Result;
use networth_types::{NavigationChanged, SectionState};

/// A show/hide-able region owned by the host (a DOM container, a TUI pane).
pub trait SectionContainer {
    /// Replace the visibility marker.
    fn set_state(&mut self, state: SectionState);

    fn state(&self) -> SectionState;
}

/// A navigation link pointing at one section.
pub trait NavLink {
    /// Reference attribute, `#<section-id>` for links the router manages.
    fn href(&self) -> &str;

    fn set_active(&mut self, active: bool);

    fn is_active(&self) -> bool;
}

/// Source of section containers and links.
///
/// Queried exactly once per identifier while the registry is built; ownership of
/// each found handle moves to the router. Handles are only taken when both the
/// container and the link of a section are present.
pub trait Document {
    fn has_container(&self, section_id: &str) -> bool;

    fn has_link(&self, href: &str) -> bool;

    /// Container element whose id is `section_id`.
    fn take_container(&mut self, section_id: &str) -> Option<Box<dyn SectionContainer>>;

    /// Navigation link whose reference attribute equals `href` exactly.
    fn take_link(&mut self, href: &str) -> Option<Box<dyn NavLink>>;
}

/// Fragment history of the host (browser location, in-memory stack).
pub trait LocationProvider {
    /// Current raw fragment including its leading `#`, or empty.
    fn fragment(&self) -> &str;

    /// Record a new entry without reloading anything.
    fn push_fragment(&mut self, fragment: &str);

    /// Step back one entry. Returns true when the visible fragment changed.
    fn back(&mut self) -> bool;

    /// Step forward one entry. Returns true when the visible fragment changed.
    fn forward(&mut self) -> bool;
}

/// Listener trait - reacts to completed section transitions
pub trait NavigationListener {
    /// Listener name for diagnostics
    fn name(&self) -> &str;

    /// Called synchronously, in registration order, once per transition.
    /// Errors are logged by the router and never abort the transition.
    fn on_navigation(&mut self, event: &NavigationChanged) -> Result<()>;
}
