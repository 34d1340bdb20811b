//! In-memory activity store for tests and embedding.

use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, RwLock};

use crate::activity::{
    domain::{ActivityId, ActivityRecord, EntityRef},
    ports::{ActivityStore, ActivityStoreError, ActivityStoreResult},
};

/// Thread-safe in-memory activity store.
///
/// Records are kept in save order. Associations are indexed by activity.
#[derive(Debug, Clone, Default)]
pub struct InMemoryActivityStore {
    state: Arc<RwLock<InMemoryActivityState>>,
}

#[derive(Debug, Default)]
struct InMemoryActivityState {
    records: Vec<ActivityRecord>,
    associations: HashMap<ActivityId, Vec<EntityRef>>,
}

fn lock_error(err: &impl fmt::Display) -> ActivityStoreError {
    ActivityStoreError::persistence(std::io::Error::other(err.to_string()))
}

impl InMemoryActivityStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns all saved records in save order.
    ///
    /// # Errors
    ///
    /// Returns [`ActivityStoreError::Persistence`] when the lock is poisoned.
    pub fn records(&self) -> ActivityStoreResult<Vec<ActivityRecord>> {
        let state = self.state.read().map_err(|err| lock_error(&err))?;
        Ok(state.records.clone())
    }

    /// Returns saved records belonging to one log channel.
    ///
    /// # Errors
    ///
    /// Returns [`ActivityStoreError::Persistence`] when the lock is poisoned.
    pub fn records_in_log(&self, log_name: &str) -> ActivityStoreResult<Vec<ActivityRecord>> {
        let state = self.state.read().map_err(|err| lock_error(&err))?;
        Ok(state
            .records
            .iter()
            .filter(|record| record.log_name() == log_name)
            .cloned()
            .collect())
    }

    /// Returns the entities associated with a record.
    ///
    /// # Errors
    ///
    /// Returns [`ActivityStoreError::Persistence`] when the lock is poisoned.
    pub fn associations_for(&self, id: ActivityId) -> ActivityStoreResult<Vec<EntityRef>> {
        let state = self.state.read().map_err(|err| lock_error(&err))?;
        Ok(state.associations.get(&id).cloned().unwrap_or_default())
    }
}

impl ActivityStore for InMemoryActivityStore {
    fn save(&self, record: &ActivityRecord) -> ActivityStoreResult<()> {
        let mut state = self.state.write().map_err(|err| lock_error(&err))?;
        if state.records.iter().any(|stored| stored.id() == record.id()) {
            return Err(ActivityStoreError::DuplicateActivity(record.id()));
        }
        state.records.push(record.clone());
        Ok(())
    }

    fn associate(&self, record: &ActivityRecord, entity: &EntityRef) -> ActivityStoreResult<()> {
        let mut state = self.state.write().map_err(|err| lock_error(&err))?;
        if !state.records.iter().any(|stored| stored.id() == record.id()) {
            return Err(ActivityStoreError::UnknownActivity(record.id()));
        }
        state
            .associations
            .entry(record.id())
            .or_default()
            .push(entity.clone());
        Ok(())
    }
}
