//! In-memory adapters for activity ports.

mod actor_directory;
mod geo;
mod store;

pub use actor_directory::InMemoryActorDirectory;
pub use geo::StaticGeoLookup;
pub use store::InMemoryActivityStore;
