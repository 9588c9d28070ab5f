use crate::traits::NavigationListener;
use anyhow::{Result, anyhow};
use networth_types::NavigationChanged;
use std::sync::mpsc::Sender;

/// Ordered set of listeners notified after each transition.
#[derive(Default)]
pub struct ListenerSet {
    listeners: Vec<Box<dyn NavigationListener>>,
}

impl ListenerSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, listener: Box<dyn NavigationListener>) {
        self.listeners.push(listener);
    }

    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }

    pub fn names(&self) -> Vec<&str> {
        self.listeners.iter().map(|l| l.name()).collect()
    }

    /// Deliver `event` to every listener. A failing listener is logged and
    /// the remaining listeners still run.
    pub fn notify(&mut self, event: &NavigationChanged) {
        for listener in self.listeners.iter_mut() {
            if let Err(e) = listener.on_navigation(event) {
                log::warn!(
                    "Listener {} failed on navigation to {}: {}",
                    listener.name(),
                    event.section,
                    e
                );
            }
        }
    }
}

/// Forwards notifications to another part of the program (e.g. a render loop).
impl NavigationListener for Sender<NavigationChanged> {
    fn name(&self) -> &str {
        "channel"
    }

    fn on_navigation(&mut self, event: &NavigationChanged) -> Result<()> {
        self.send(event.clone())
            .map_err(|_| anyhow!("receiver dropped"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use networth_types::SectionId;
    use std::cell::RefCell;
    use std::rc::Rc;
    use std::sync::mpsc;

    struct Probe {
        name: &'static str,
        log: Rc<RefCell<Vec<String>>>,
        fail: bool,
    }

    impl NavigationListener for Probe {
        fn name(&self) -> &str {
            self.name
        }

        fn on_navigation(&mut self, event: &NavigationChanged) -> Result<()> {
            self.log
                .borrow_mut()
                .push(format!("{}:{}", self.name, event.section));
            if self.fail {
                return Err(anyhow!("boom"));
            }
            Ok(())
        }
    }

    #[test]
    fn test_notify_in_registration_order() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut set = ListenerSet::new();
        set.push(Box::new(Probe {
            name: "first",
            log: log.clone(),
            fail: false,
        }));
        set.push(Box::new(Probe {
            name: "second",
            log: log.clone(),
            fail: false,
        }));

        set.notify(&NavigationChanged::new(SectionId::new("trends")));

        assert_eq!(*log.borrow(), vec!["first:trends", "second:trends"]);
        assert_eq!(set.names(), vec!["first", "second"]);
    }

    #[test]
    fn test_failing_listener_does_not_stop_others() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut set = ListenerSet::new();
        set.push(Box::new(Probe {
            name: "broken",
            log: log.clone(),
            fail: true,
        }));
        set.push(Box::new(Probe {
            name: "healthy",
            log: log.clone(),
            fail: false,
        }));

        set.notify(&NavigationChanged::new(SectionId::new("dashboard")));

        assert_eq!(*log.borrow(), vec!["broken:dashboard", "healthy:dashboard"]);
    }

    #[test]
    fn test_channel_listener() {
        let (tx, rx) = mpsc::channel();
        let mut set = ListenerSet::new();
        set.push(Box::new(tx));

        set.notify(&NavigationChanged::new(SectionId::new("trends")));

        let received = rx.try_recv().unwrap();
        assert_eq!(received.section.as_str(), "trends");
    }

    #[test]
    fn test_channel_listener_reports_dropped_receiver() {
        let (mut tx, rx) = mpsc::channel::<NavigationChanged>();
        drop(rx);

        let result = tx.on_navigation(&NavigationChanged::new(SectionId::new("trends")));
        assert!(result.is_err());
    }
}
