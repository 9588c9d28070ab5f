use crate::traits::{Document, NavLink, SectionContainer};
use networth_types::{DEFAULT_SECTION, SectionId, SectionState};

/// A registered section: identifier plus the handles resolved at startup.
pub struct Section {
    id: SectionId,
    container: Box<dyn SectionContainer>,
    link: Box<dyn NavLink>,
}

impl Section {
    pub fn new(
        id: SectionId,
        container: Box<dyn SectionContainer>,
        link: Box<dyn NavLink>,
    ) -> Self {
        Self {
            id,
            container,
            link,
        }
    }

    pub fn id(&self) -> &SectionId {
        &self.id
    }

    pub fn state(&self) -> SectionState {
        self.container.state()
    }

    pub fn href(&self) -> &str {
        self.link.href()
    }

    pub fn link_active(&self) -> bool {
        self.link.is_active()
    }

    pub(crate) fn set_state(&mut self, state: SectionState) {
        self.container.set_state(state);
    }

    pub(crate) fn set_link_active(&mut self, active: bool) {
        self.link.set_active(active);
    }
}

/// Fixed route table, in discovery order.
///
/// Built once; sections are never added or removed afterwards.
#[derive(Default)]
pub struct SectionRegistry {
    sections: Vec<Section>,
}

impl SectionRegistry {
    /// Look up each identifier in `document` once.
    ///
    /// An identifier whose container or link is missing is left out of the
    /// registry entirely, so transitions never touch an absent handle.
    pub fn discover(document: &mut dyn Document, ids: &[&str]) -> Self {
        let mut sections = Vec::with_capacity(ids.len());

        for &raw in ids {
            let id = SectionId::new(raw);
            if sections.iter().any(|s: &Section| s.id == id) {
                continue;
            }

            let href = id.fragment();
            if !document.has_container(id.as_str()) {
                log::warn!("Section '{}' has no container; not registered", id);
                continue;
            }
            if !document.has_link(&href) {
                log::warn!(
                    "Section '{}' has no navigation link ({}); not registered",
                    id,
                    href
                );
                continue;
            }

            let (Some(container), Some(link)) =
                (document.take_container(id.as_str()), document.take_link(&href))
            else {
                log::warn!("Section '{}' disappeared during lookup; not registered", id);
                continue;
            };

            sections.push(Section::new(id, container, link));
        }

        Self { sections }
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    pub fn get(&self, id: &str) -> Option<&Section> {
        self.sections.iter().find(|s| s.id.as_str() == id)
    }

    pub(crate) fn get_mut(&mut self, id: &str) -> Option<&mut Section> {
        self.sections.iter_mut().find(|s| s.id.as_str() == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Section> {
        self.sections.iter()
    }

    pub(crate) fn iter_mut(&mut self) -> impl Iterator<Item = &mut Section> {
        self.sections.iter_mut()
    }

    pub fn ids(&self) -> impl Iterator<Item = &SectionId> {
        self.sections.iter().map(|s| &s.id)
    }

    /// Map a requested identifier to a registered one; unknown requests
    /// resolve to the default section.
    pub fn resolve(&self, requested: &str) -> SectionId {
        match self.get(requested) {
            Some(section) => section.id.clone(),
            None => {
                log::debug!(
                    "Unknown section '{}', falling back to '{}'",
                    requested,
                    DEFAULT_SECTION
                );
                SectionId::default_section()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    struct Pane(SectionState);

    impl SectionContainer for Pane {
        fn set_state(&mut self, state: SectionState) {
            self.0 = state;
        }

        fn state(&self) -> SectionState {
            self.0
        }
    }

    struct Tab {
        href: String,
        active: bool,
    }

    impl NavLink for Tab {
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

    #[derive(Default)]
    struct Doc {
        panes: HashMap<String, Pane>,
        tabs: HashMap<String, Tab>,
        container_lookups: usize,
    }

    impl Doc {
        fn with(mut self, id: &str, pane: bool, tab: bool) -> Self {
            if pane {
                self.panes
                    .insert(id.to_string(), Pane(SectionState::Hidden));
            }
            if tab {
                let href = format!("#{}", id);
                self.tabs.insert(
                    href.clone(),
                    Tab {
                        href,
                        active: false,
                    },
                );
            }
            self
        }
    }

    impl Document for Doc {
        fn has_container(&self, section_id: &str) -> bool {
            self.panes.contains_key(section_id)
        }

        fn has_link(&self, href: &str) -> bool {
            self.tabs.contains_key(href)
        }

        fn take_container(&mut self, section_id: &str) -> Option<Box<dyn SectionContainer>> {
            self.container_lookups += 1;
            self.panes
                .remove(section_id)
                .map(|p| Box::new(p) as Box<dyn SectionContainer>)
        }

        fn take_link(&mut self, href: &str) -> Option<Box<dyn NavLink>> {
            self.tabs
                .remove(href)
                .map(|t| Box::new(t) as Box<dyn NavLink>)
        }
    }

    #[test]
    fn test_discover_keeps_order() {
        let mut doc = Doc::default()
            .with("trends", true, true)
            .with("dashboard", true, true);
        let registry = SectionRegistry::discover(&mut doc, &["dashboard", "trends"]);

        let ids: Vec<&str> = registry.ids().map(|id| id.as_str()).collect();
        assert_eq!(ids, vec!["dashboard", "trends"]);
    }

    #[test]
    fn test_discover_excludes_missing_container() {
        let mut doc = Doc::default()
            .with("dashboard", true, true)
            .with("trends", false, true);
        let registry = SectionRegistry::discover(&mut doc, &["dashboard", "trends"]);

        assert_eq!(registry.len(), 1);
        assert!(!registry.contains("trends"));
    }

    #[test]
    fn test_discover_excludes_missing_link() {
        let mut doc = Doc::default()
            .with("dashboard", true, true)
            .with("trends", true, false);
        let registry = SectionRegistry::discover(&mut doc, &["dashboard", "trends"]);

        assert!(!registry.contains("trends"));
        assert!(doc.panes.contains_key("trends"));
    }

    #[test]
    fn test_discover_ignores_duplicate_ids() {
        let mut doc = Doc::default().with("dashboard", true, true);
        let registry = SectionRegistry::discover(&mut doc, &["dashboard", "dashboard"]);

        assert_eq!(registry.len(), 1);
        assert_eq!(doc.container_lookups, 1);
    }

    #[test]
    fn test_resolve_falls_back_to_default() {
        let mut doc = Doc::default()
            .with("dashboard", true, true)
            .with("trends", true, true);
        let registry = SectionRegistry::discover(&mut doc, &["dashboard", "trends"]);

        assert_eq!(registry.resolve("trends").as_str(), "trends");
        assert_eq!(registry.resolve("unknown-route").as_str(), "dashboard");
        assert_eq!(registry.resolve("").as_str(), "dashboard");
        assert_eq!(registry.resolve("Trends").as_str(), "dashboard");
    }
}
