//! Persistence port for activity records and their secondary associations.

use crate::activity::domain::{ActivityId, ActivityRecord, EntityRef};
use std::sync::Arc;
use thiserror::Error;

/// Result type for activity store operations.
pub type ActivityStoreResult<T> = Result<T, ActivityStoreError>;

/// Activity persistence contract.
#[cfg_attr(test, mockall::automock)]
pub trait ActivityStore: Send + Sync {
    /// Persists a newly built record.
    ///
    /// # Errors
    ///
    /// Returns [`ActivityStoreError::DuplicateActivity`] when a record with
    /// the same identifier already exists, or
    /// [`ActivityStoreError::Persistence`] when the backend fails.
    fn save(&self, record: &ActivityRecord) -> ActivityStoreResult<()>;

    /// Links a secondary entity to a persisted record.
    ///
    /// # Errors
    ///
    /// Returns [`ActivityStoreError::UnknownActivity`] when the record has
    /// not been saved, or [`ActivityStoreError::Persistence`] when the
    /// backend fails.
    fn associate(&self, record: &ActivityRecord, entity: &EntityRef) -> ActivityStoreResult<()>;
}

/// Errors returned by activity store implementations.
#[derive(Debug, Clone, Error)]
pub enum ActivityStoreError {
    /// A record with the same identifier already exists.
    #[error("duplicate activity identifier: {0}")]
    DuplicateActivity(ActivityId),

    /// The record has not been persisted.
    #[error("activity not found: {0}")]
    UnknownActivity(ActivityId),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl ActivityStoreError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
