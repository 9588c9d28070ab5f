//! Testing infrastructure for networth tests.
//!
//! This crate provides utilities for writing router and CLI tests:
//! - `document`: In-memory document with inspectable section and link handles
//! - `listeners`: Recording and failing navigation listeners
//! - `world`: `RouterWorld` for router setup, `CliWorld` for isolated CLI runs
//! - `assertions`: Invariant checks over router snapshots

pub mod assertions;
pub mod document;
pub mod listeners;
pub mod world;

pub use document::FakeDocument;
pub use listeners::{FailingListener, Recording, RecordingListener};
pub use world::{CliResult, CliWorld, RouterFixture, RouterWorld};
