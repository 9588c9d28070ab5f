use networth_router::LocationProvider;
use networth_testing::RouterWorld;
use networth_testing::assertions::assert_active;

#[test]
fn test_link_activation_pushes_fragment_before_navigating() {
    let mut fixture = RouterWorld::new().initialize().unwrap();

    fixture.router.activate_link("trends");

    assert_eq!(fixture.router.location().fragment(), "#trends");
    assert_eq!(fixture.router.location().entries(), &["", "#trends"]);
    assert_active(&fixture.router.snapshot(), "trends").unwrap();
}

#[test]
fn test_back_and_forward_replay_sections() {
    let mut fixture = RouterWorld::new().initialize().unwrap();
    fixture.router.activate_link("assets-liabilities");
    fixture.router.activate_link("trends");
    fixture.recording.clear();

    assert!(fixture.router.history_back());
    assert_active(&fixture.router.snapshot(), "assets-liabilities").unwrap();

    assert!(fixture.router.history_back());
    assert_active(&fixture.router.snapshot(), "dashboard").unwrap();

    assert!(!fixture.router.history_back());

    assert!(fixture.router.history_forward());
    assert_active(&fixture.router.snapshot(), "assets-liabilities").unwrap();

    assert_eq!(
        fixture.recording.sections(),
        vec!["assets-liabilities", "dashboard", "assets-liabilities"]
    );
}

#[test]
fn test_back_over_identical_fragment_does_not_navigate() {
    let mut fixture = RouterWorld::new()
        .with_fragment("#trends")
        .initialize()
        .unwrap();
    fixture.router.activate_link("trends");
    fixture.recording.clear();

    assert!(!fixture.router.history_back());
    assert!(fixture.recording.is_empty());
    assert_active(&fixture.router.snapshot(), "trends").unwrap();
}

#[test]
fn test_activating_unknown_link_records_fragment_but_shows_default() {
    let mut fixture = RouterWorld::new()
        .with_fragment("#trends")
        .initialize()
        .unwrap();

    fixture.router.activate_link("budget");

    assert_eq!(fixture.router.location().fragment(), "#budget");
    assert_active(&fixture.router.snapshot(), "dashboard").unwrap();
}

#[test]
fn test_new_link_after_back_drops_forward_history() {
    let mut fixture = RouterWorld::new().initialize().unwrap();
    fixture.router.activate_link("trends");
    fixture.router.history_back();
    fixture.router.activate_link("assets-liabilities");

    assert!(!fixture.router.history_forward());
    assert_active(&fixture.router.snapshot(), "assets-liabilities").unwrap();
}

#[test]
fn test_late_subscriber_sees_later_transitions_only() {
    let mut fixture = RouterWorld::new().initialize().unwrap();
    let (tx, rx) = std::sync::mpsc::channel();
    fixture.router.subscribe(tx);

    fixture.router.activate_link("trends");

    let received: Vec<String> = rx.try_iter().map(|e| e.section.to_string()).collect();
    assert_eq!(received, vec!["trends"]);
}
