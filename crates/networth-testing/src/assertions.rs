//! Invariant checks over router snapshots.
//!
//! Each assertion returns an error describing the violation instead of
//! panicking, so tests can add context with `?` or `.unwrap()`.

use anyhow::Result;
use networth_router::RouterSnapshot;

/// Exactly one registered section is active and it is the current section.
pub fn assert_exclusive_active(snapshot: &RouterSnapshot) -> Result<()> {
    let active = snapshot.active_sections();
    if active.len() != 1 {
        anyhow::bail!(
            "Expected exactly one active section, got {}: {:?}",
            active.len(),
            active
        );
    }
    if active[0] != &snapshot.active {
        anyhow::bail!(
            "Visible section {} does not match current section {}",
            active[0],
            snapshot.active
        );
    }
    Ok(())
}

/// Exactly one link is active and it targets the current section.
pub fn assert_link_consistency(snapshot: &RouterSnapshot) -> Result<()> {
    let expected = snapshot.active.fragment();
    let active = snapshot.active_links();
    if active != [expected.as_str()] {
        anyhow::bail!(
            "Expected only link {} to be active, got {:?}",
            expected,
            active
        );
    }
    Ok(())
}

/// Both invariants at once.
pub fn assert_router_consistent(snapshot: &RouterSnapshot) -> Result<()> {
    assert_exclusive_active(snapshot)?;
    assert_link_consistency(snapshot)
}

/// The current section is `expected`, with both invariants holding.
pub fn assert_active(snapshot: &RouterSnapshot, expected: &str) -> Result<()> {
    if snapshot.active.as_str() != expected {
        anyhow::bail!(
            "Expected active section {}, got {}",
            expected,
            snapshot.active
        );
    }
    assert_router_consistent(snapshot)
}
