//! Port contracts for activity recording.
//!
//! Ports define infrastructure-agnostic interfaces used by the recorder.

pub mod actor_resolver;
pub mod config;
pub mod geo;
pub mod store;

pub use actor_resolver::ActorResolver;
pub use config::ActivityLogConfig;
pub use geo::GeoLookup;
pub use store::{ActivityStore, ActivityStoreError, ActivityStoreResult};

#[cfg(test)]
pub use actor_resolver::MockActorResolver;
#[cfg(test)]
pub use geo::MockGeoLookup;
#[cfg(test)]
pub use store::MockActivityStore;
