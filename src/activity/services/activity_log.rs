//! Entry point that hands out recorders sharing one gate.

use std::sync::Arc;

use mockable::Clock;

use crate::activity::{
    ports::{ActivityLogConfig, ActivityStore, ActorResolver, GeoLookup},
    services::{ActivityRecorder, LogGate},
};

/// Factory for [`ActivityRecorder`]s.
///
/// Holds the collaborators, the configuration, and the [`LogGate`] built
/// from it. Every recorder it creates shares that gate.
pub struct ActivityLog<R, S, G, C>
where
    R: ActorResolver,
    S: ActivityStore,
    G: GeoLookup,
    C: Clock + Send + Sync,
{
    config: ActivityLogConfig,
    resolver: Arc<R>,
    store: Arc<S>,
    geo: Arc<G>,
    clock: Arc<C>,
    gate: LogGate,
}

impl<R, S, G, C> ActivityLog<R, S, G, C>
where
    R: ActorResolver,
    S: ActivityStore,
    G: GeoLookup,
    C: Clock + Send + Sync,
{
    /// Creates the factory and its gate.
    #[must_use]
    pub fn new(
        config: ActivityLogConfig,
        resolver: Arc<R>,
        store: Arc<S>,
        geo: Arc<G>,
        clock: Arc<C>,
    ) -> Self {
        let gate = LogGate::from_config(&config);
        Self {
            config,
            resolver,
            store,
            geo,
            clock,
            gate,
        }
    }

    /// Returns a fresh recorder on the default log channel.
    #[must_use]
    pub fn recorder(&self) -> ActivityRecorder<R, S, G, C> {
        ActivityRecorder::new(
            &self.config,
            Arc::clone(&self.resolver),
            Arc::clone(&self.store),
            Arc::clone(&self.geo),
            Arc::clone(&self.clock),
            self.gate.clone(),
        )
    }

    /// Returns a fresh recorder writing to `log_name`.
    #[must_use]
    pub fn activity(&self, log_name: impl Into<String>) -> ActivityRecorder<R, S, G, C> {
        self.recorder().use_log(log_name)
    }

    /// Returns the shared gate.
    #[must_use]
    pub const fn gate(&self) -> &LogGate {
        &self.gate
    }

    /// Returns the configuration recorders are seeded from.
    #[must_use]
    pub const fn config(&self) -> &ActivityLogConfig {
        &self.config
    }
}
