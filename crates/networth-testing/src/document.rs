//! In-memory document for router tests.
//!
//! Handles are plain owned values; after initialization the router owns them
//! and tests read their state back through `SectionRouter::snapshot()`.

use networth_router::{Document, KNOWN_SECTIONS, NavLink, SectionContainer, SectionState};
use std::collections::HashMap;

#[derive(Debug)]
pub struct FakeContainer {
    state: SectionState,
}

impl FakeContainer {
    pub fn new(state: SectionState) -> Self {
        Self { state }
    }
}

impl SectionContainer for FakeContainer {
    fn set_state(&mut self, state: SectionState) {
        self.state = state;
    }

    fn state(&self) -> SectionState {
        self.state
    }
}

#[derive(Debug)]
pub struct FakeLink {
    href: String,
    active: bool,
}

impl FakeLink {
    pub fn new(href: impl Into<String>, active: bool) -> Self {
        Self {
            href: href.into(),
            active,
        }
    }
}

impl NavLink for FakeLink {
    fn href(&self) -> &str {
        &self.href
    }

    fn set_active(&mut self, active: bool) {
        self.active = active;
    }

    fn is_active(&self) -> bool {
        self.active
    }
}

/// Builder-style document.
///
/// # Example
/// ```
/// use networth_testing::FakeDocument;
///
/// let doc = FakeDocument::standard().without_container("trends");
/// assert!(!doc.holds_container("trends"));
/// ```
#[derive(Debug, Default)]
pub struct FakeDocument {
    containers: HashMap<String, FakeContainer>,
    links: HashMap<String, FakeLink>,
    container_lookups: Vec<String>,
    link_lookups: Vec<String>,
}

impl FakeDocument {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Container and link for every known section, all initially visible and
    /// all links active, so the first navigation has real cleanup to do.
    pub fn standard() -> Self {
        KNOWN_SECTIONS
            .iter()
            .fold(Self::empty(), |doc, id| doc.with_section(id))
    }

    pub fn with_section(mut self, id: &str) -> Self {
        self.containers
            .insert(id.to_string(), FakeContainer::new(SectionState::Active));
        let href = format!("#{}", id);
        self.links.insert(href.clone(), FakeLink::new(href, true));
        self
    }

    pub fn without_container(mut self, id: &str) -> Self {
        self.containers.remove(id);
        self
    }

    pub fn without_link(mut self, id: &str) -> Self {
        self.links.remove(&format!("#{}", id));
        self
    }

    /// Whether the section's container is still held by the document.
    pub fn holds_container(&self, id: &str) -> bool {
        self.containers.contains_key(id)
    }

    /// Whether the section's link is still held by the document.
    pub fn holds_link(&self, id: &str) -> bool {
        self.links.contains_key(&format!("#{}", id))
    }

    /// Identifiers requested through `take_container`, in call order.
    pub fn container_lookups(&self) -> &[String] {
        &self.container_lookups
    }

    /// References requested through `take_link`, in call order.
    pub fn link_lookups(&self) -> &[String] {
        &self.link_lookups
    }
}

impl Document for FakeDocument {
    fn has_container(&self, section_id: &str) -> bool {
        self.containers.contains_key(section_id)
    }

    fn has_link(&self, href: &str) -> bool {
        self.links.contains_key(href)
    }

    fn take_container(&mut self, section_id: &str) -> Option<Box<dyn SectionContainer>> {
        self.container_lookups.push(section_id.to_string());
        self.containers
            .remove(section_id)
            .map(|c| Box::new(c) as Box<dyn SectionContainer>)
    }

    fn take_link(&mut self, href: &str) -> Option<Box<dyn NavLink>> {
        self.link_lookups.push(href.to_string());
        self.links
            .remove(href)
            .map(|l| Box::new(l) as Box<dyn NavLink>)
    }
}
