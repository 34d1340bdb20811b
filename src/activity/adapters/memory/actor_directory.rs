//! In-memory actor directory standing in for an authentication subsystem.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use tracing::warn;

use crate::activity::{
    domain::{ActorIdentifier, SharedEntity},
    ports::ActorResolver,
};

/// [`ActorResolver`] backed by per-driver maps of known actors.
///
/// Each driver keeps its own registered actors and, optionally, the key of
/// the actor currently signed in.
///
/// # Examples
///
/// ```
/// use activitylog::activity::{
///     adapters::memory::InMemoryActorDirectory,
///     domain::{ActorIdentifier, GenericEntity},
///     ports::ActorResolver,
/// };
///
/// let directory = InMemoryActorDirectory::new("web");
/// directory.register("web", GenericEntity::new("user", "1").into_shared());
/// directory.sign_in("web", "1");
///
/// assert!(directory.current_actor("web").is_some());
/// assert!(directory.resolve_by_id("web", &ActorIdentifier::from(2_u64)).is_none());
/// ```
#[derive(Debug, Clone)]
pub struct InMemoryActorDirectory {
    default_driver: String,
    guards: Arc<RwLock<HashMap<String, Guard>>>,
}

#[derive(Debug, Default)]
struct Guard {
    actors: HashMap<String, SharedEntity>,
    signed_in: Option<String>,
}

impl InMemoryActorDirectory {
    /// Creates an empty directory whose default driver is `default_driver`.
    #[must_use]
    pub fn new(default_driver: impl Into<String>) -> Self {
        Self {
            default_driver: default_driver.into(),
            guards: Arc::default(),
        }
    }

    /// Registers an actor under `driver`, keyed by its entity id.
    pub fn register(&self, driver: &str, actor: SharedEntity) {
        match self.guards.write() {
            Ok(mut guards) => {
                let guard = guards.entry(driver.to_owned()).or_default();
                guard.actors.insert(actor.entity_id(), actor);
            }
            Err(err) => warn!(
                driver,
                error = %err,
                "actor directory lock poisoned; registration dropped"
            ),
        }
    }

    /// Marks the actor with `identifier` as signed in through `driver`.
    pub fn sign_in(&self, driver: &str, identifier: impl Into<ActorIdentifier>) {
        let key = identifier.into();
        match self.guards.write() {
            Ok(mut guards) => {
                guards.entry(driver.to_owned()).or_default().signed_in = Some(key.to_string());
            }
            Err(err) => warn!(
                driver,
                error = %err,
                "actor directory lock poisoned; sign-in dropped"
            ),
        }
    }

    /// Clears the signed-in actor for `driver`.
    pub fn sign_out(&self, driver: &str) {
        if let Ok(mut guards) = self.guards.write()
            && let Some(guard) = guards.get_mut(driver)
        {
            guard.signed_in = None;
        }
    }

    fn lookup(&self, driver: &str, key: &str) -> Option<SharedEntity> {
        let guards = self.guards.read().ok()?;
        guards.get(driver)?.actors.get(key).cloned()
    }
}

impl ActorResolver for InMemoryActorDirectory {
    fn default_driver(&self) -> String {
        self.default_driver.clone()
    }

    fn current_actor(&self, driver: &str) -> Option<SharedEntity> {
        let key = {
            let guards = self.guards.read().ok()?;
            guards.get(driver)?.signed_in.clone()?
        };
        self.lookup(driver, &key)
    }

    fn resolve_by_id(&self, driver: &str, identifier: &ActorIdentifier) -> Option<SharedEntity> {
        self.lookup(driver, identifier.as_str())
    }
}
