use super::pane::{PaneHandle, TabHandle};
use crate::config::PaneConfig;
use networth_router::{Document, NavLink, SectionContainer, SectionId};
use std::collections::HashMap;

/// Panes and tabs built from the configured pane list.
#[derive(Debug, Default)]
pub struct PaneDocument {
    panes: HashMap<String, PaneHandle>,
    tabs: HashMap<String, TabHandle>,
}

impl PaneDocument {
    pub fn from_panes(panes: &[PaneConfig]) -> Self {
        let mut document = Self::default();
        for pane in panes {
            let href = SectionId::new(pane.id.as_str()).fragment();
            document.panes.insert(pane.id.clone(), PaneHandle::new());
            document.tabs.insert(href.clone(), TabHandle::new(href));
        }
        document
    }
}

impl Document for PaneDocument {
    fn has_container(&self, section_id: &str) -> bool {
        self.panes.contains_key(section_id)
    }

    fn has_link(&self, href: &str) -> bool {
        self.tabs.contains_key(href)
    }

    fn take_container(&mut self, section_id: &str) -> Option<Box<dyn SectionContainer>> {
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
