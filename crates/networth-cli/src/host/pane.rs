use networth_router::{NavLink, SectionContainer, SectionState};

/// Section body drawn in the main area while active.
#[derive(Debug, Clone)]
pub struct PaneHandle {
    state: SectionState,
}

impl PaneHandle {
    pub fn new() -> Self {
        Self {
            state: SectionState::Hidden,
        }
    }
}

impl Default for PaneHandle {
    fn default() -> Self {
        Self::new()
    }
}

impl SectionContainer for PaneHandle {
    fn set_state(&mut self, state: SectionState) {
        self.state = state;
    }

    fn state(&self) -> SectionState {
        self.state
    }
}

/// Entry in the tab bar.
#[derive(Debug, Clone)]
pub struct TabHandle {
    href: String,
    active: bool,
}

impl TabHandle {
    pub fn new(href: impl Into<String>) -> Self {
        Self {
            href: href.into(),
            active: false,
        }
    }
}

impl NavLink for TabHandle {
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
