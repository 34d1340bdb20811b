//! Actor resolution port backed by the authentication subsystem.

use crate::activity::domain::{ActorIdentifier, SharedEntity};

/// Looks up actors through named authentication drivers.
///
/// A driver corresponds to an authentication guard: each one knows who is
/// currently signed in and how to load an actor by key.
#[cfg_attr(test, mockall::automock)]
pub trait ActorResolver: Send + Sync {
    /// Returns the driver used when configuration names none.
    fn default_driver(&self) -> String;

    /// Returns the actor currently authenticated through `driver`.
    fn current_actor(&self, driver: &str) -> Option<SharedEntity>;

    /// Loads the actor with the given key through `driver`.
    ///
    /// Returns `None` when no such actor exists.
    fn resolve_by_id(&self, driver: &str, identifier: &ActorIdentifier) -> Option<SharedEntity>;
}
