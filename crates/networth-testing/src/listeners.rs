//! Navigation listeners for assertions.

use anyhow::{Result, anyhow};
use networth_router::{NavigationChanged, NavigationListener};
use std::cell::RefCell;
use std::rc::Rc;

/// Read side of a [`RecordingListener`], kept by the test after the listener
/// itself moved into the router.
#[derive(Debug, Clone, Default)]
pub struct Recording {
    events: Rc<RefCell<Vec<NavigationChanged>>>,
}

impl Recording {
    pub fn events(&self) -> Vec<NavigationChanged> {
        self.events.borrow().clone()
    }

    /// Section payloads in delivery order.
    pub fn sections(&self) -> Vec<String> {
        self.events
            .borrow()
            .iter()
            .map(|e| e.section.to_string())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.events.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.borrow().is_empty()
    }

    pub fn clear(&self) {
        self.events.borrow_mut().clear();
    }
}

pub struct RecordingListener {
    name: String,
    recording: Recording,
}

impl RecordingListener {
    pub fn new(name: impl Into<String>) -> (Self, Recording) {
        let recording = Recording::default();
        let listener = Self {
            name: name.into(),
            recording: recording.clone(),
        };
        (listener, recording)
    }
}

impl NavigationListener for RecordingListener {
    fn name(&self) -> &str {
        &self.name
    }

    fn on_navigation(&mut self, event: &NavigationChanged) -> Result<()> {
        self.recording.events.borrow_mut().push(event.clone());
        Ok(())
    }
}

/// Always errors; used to check that a broken listener cannot break routing.
pub struct FailingListener;

impl NavigationListener for FailingListener {
    fn name(&self) -> &str {
        "failing"
    }

    fn on_navigation(&mut self, event: &NavigationChanged) -> Result<()> {
        Err(anyhow!("refusing to render {}", event.section))
    }
}
