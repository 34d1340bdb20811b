//! Shared helpers for in-memory recording integration tests.

use std::sync::Arc;

use activitylog::activity::{
    adapters::memory::{InMemoryActivityStore, InMemoryActorDirectory, StaticGeoLookup},
    domain::{GenericEntity, SharedEntity},
    ports::ActivityLogConfig,
    services::ActivityLog,
};
use mockable::DefaultClock;
use rstest::fixture;

/// Authentication driver used by the fixtures.
pub const DRIVER: &str = "web";

/// Activity log wired to in-memory adapters.
pub type MemoryLog =
    ActivityLog<InMemoryActorDirectory, InMemoryActivityStore, StaticGeoLookup, DefaultClock>;

/// Activity log plus handles to inspect its adapters.
pub struct Setup {
    pub directory: Arc<InMemoryActorDirectory>,
    pub store: Arc<InMemoryActivityStore>,
    pub log: MemoryLog,
}

/// Builds a setup from the given configuration, with Ada signed in.
#[must_use]
pub fn setup_with(config: ActivityLogConfig) -> Setup {
    let directory = Arc::new(InMemoryActorDirectory::new(DRIVER));
    directory.register(DRIVER, person("1", "Ada"));
    directory.register(DRIVER, person("2", "Linus"));
    directory.sign_in(DRIVER, "1");
    let store = Arc::new(InMemoryActivityStore::new());
    let log = ActivityLog::new(
        config,
        Arc::clone(&directory),
        Arc::clone(&store),
        Arc::new(StaticGeoLookup::default()),
        Arc::new(DefaultClock),
    );
    Setup {
        directory,
        store,
        log,
    }
}

/// Provides a default setup for each test.
#[fixture]
pub fn setup() -> Setup {
    setup_with(ActivityLogConfig::default())
}

/// Creates a user entity.
#[must_use]
pub fn person(id: &str, name: &str) -> SharedEntity {
    GenericEntity::new("user", id)
        .with_attribute("name", name)
        .into_shared()
}

/// Creates a project entity.
#[must_use]
pub fn project(id: &str, name: &str) -> SharedEntity {
    GenericEntity::new("project", id)
        .with_attribute("name", name)
        .into_shared()
}
