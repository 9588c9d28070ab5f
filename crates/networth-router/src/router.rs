use crate::error::{Error, Result};
use crate::listener::ListenerSet;
use crate::registry::SectionRegistry;
use crate::traits::{Document, LocationProvider, NavigationListener};
use networth_types::{
    DEFAULT_SECTION, KNOWN_SECTIONS, NavigationChanged, SectionId, SectionState,
};
use serde::{Deserialize, Serialize};

/// Collects listeners before the router exists.
///
/// The builder is the router's uninitialized state: [`RouterBuilder::initialize`]
/// consumes it, so a router can only ever be initialized once.
pub struct RouterBuilder<L: LocationProvider> {
    location: L,
    listeners: ListenerSet,
}

impl<L: LocationProvider> RouterBuilder<L> {
    pub fn new(location: L) -> Self {
        Self {
            location,
            listeners: ListenerSet::new(),
        }
    }

    pub fn listener(mut self, listener: impl NavigationListener + 'static) -> Self {
        self.listeners.push(Box::new(listener));
        self
    }

    /// Build the registry from `document`, take over the location's
    /// fragment-change handling and navigate to the current fragment.
    ///
    /// Fails only when the default section itself could not be registered.
    pub fn initialize(self, document: &mut dyn Document) -> Result<SectionRouter<L>> {
        let registry = SectionRegistry::discover(document, KNOWN_SECTIONS);
        if !registry.contains(DEFAULT_SECTION) {
            return Err(Error::MissingDefaultSection(format!(
                "no container or link for '{}'",
                DEFAULT_SECTION
            )));
        }

        log::debug!(
            "Router initialized with {} section(s): {}",
            registry.len(),
            registry
                .ids()
                .map(|id| id.as_str())
                .collect::<Vec<_>>()
                .join(", ")
        );

        let mut router = SectionRouter {
            registry,
            location: self.location,
            listeners: self.listeners,
            current: SectionId::default_section(),
        };
        router.handle_fragment_change();
        Ok(router)
    }
}

/// Single source of truth for which section is visible.
pub struct SectionRouter<L: LocationProvider> {
    registry: SectionRegistry,
    location: L,
    listeners: ListenerSet,
    current: SectionId,
}

impl<L: LocationProvider> SectionRouter<L> {
    pub fn builder(location: L) -> RouterBuilder<L> {
        RouterBuilder::new(location)
    }

    /// Transition to `requested`, or to the default section when it is not
    /// registered.
    ///
    /// Always runs the full sequence, even when `requested` is already
    /// active: hide every section, show the target, re-mark links, notify
    /// listeners, record the new current section.
    pub fn navigate(&mut self, requested: &str) {
        let target = self.registry.resolve(requested);

        for section in self.registry.iter_mut() {
            section.set_state(SectionState::Hidden);
        }
        if let Some(section) = self.registry.get_mut(target.as_str()) {
            section.set_state(SectionState::Active);
        }

        let target_href = target.fragment();
        for section in self.registry.iter_mut() {
            let active = section.href() == target_href;
            section.set_link_active(active);
        }

        self.listeners.notify(&NavigationChanged::new(target.clone()));

        log::debug!("Navigated to '{}' (requested '{}')", target, requested);
        self.current = target;
    }

    /// Navigate to whatever the location's fragment currently names.
    pub fn handle_fragment_change(&mut self) {
        let requested = SectionId::from_fragment(self.location.fragment());
        self.navigate(requested.as_str());
    }

    /// User activated the link for `section_id`: record the fragment in
    /// history first, then transition.
    pub fn activate_link(&mut self, section_id: &str) {
        let href = SectionId::new(section_id).fragment();
        self.location.push_fragment(&href);
        self.navigate(section_id);
    }

    /// Browser-style back. Returns true when a transition ran.
    pub fn history_back(&mut self) -> bool {
        if self.location.back() {
            self.handle_fragment_change();
            true
        } else {
            false
        }
    }

    /// Browser-style forward. Returns true when a transition ran.
    pub fn history_forward(&mut self) -> bool {
        if self.location.forward() {
            self.handle_fragment_change();
            true
        } else {
            false
        }
    }

    /// Register another listener; it sees every later transition.
    pub fn subscribe(&mut self, listener: impl NavigationListener + 'static) {
        self.listeners.push(Box::new(listener));
    }

    pub fn current_section(&self) -> &SectionId {
        &self.current
    }

    pub fn registry(&self) -> &SectionRegistry {
        &self.registry
    }

    pub fn location(&self) -> &L {
        &self.location
    }

    /// Direct access for hosts that change the fragment out of band; call
    /// [`SectionRouter::handle_fragment_change`] afterwards.
    pub fn location_mut(&mut self) -> &mut L {
        &mut self.location
    }

    pub fn listener_names(&self) -> Vec<&str> {
        self.listeners.names()
    }

    pub fn snapshot(&self) -> RouterSnapshot {
        RouterSnapshot {
            active: self.current.clone(),
            sections: self
                .registry
                .iter()
                .map(|s| SectionSnapshot {
                    id: s.id().clone(),
                    state: s.state(),
                })
                .collect(),
            links: self
                .registry
                .iter()
                .map(|s| LinkSnapshot {
                    href: s.href().to_string(),
                    active: s.link_active(),
                })
                .collect(),
        }
    }
}

/// Visible state of the router at one point in time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouterSnapshot {
    pub active: SectionId,
    pub sections: Vec<SectionSnapshot>,
    pub links: Vec<LinkSnapshot>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionSnapshot {
    pub id: SectionId,
    pub state: SectionState,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkSnapshot {
    pub href: String,
    pub active: bool,
}

impl RouterSnapshot {
    pub fn active_sections(&self) -> Vec<&SectionId> {
        self.sections
            .iter()
            .filter(|s| s.state.is_active())
            .map(|s| &s.id)
            .collect()
    }

    pub fn active_links(&self) -> Vec<&str> {
        self.links
            .iter()
            .filter(|l| l.active)
            .map(|l| l.href.as_str())
            .collect()
    }
}
