//! Secondary associations ("contragents") linked to recorded activities.

use super::SharedEntity;

/// Normalised set of secondary entities for a recording.
///
/// Each entity produces its own activity record. Empty collections
/// normalise to [`Contragent::None`] rather than an empty [`Contragent::Many`].
///
/// # Examples
///
/// ```
/// use activitylog::activity::domain::{Contragent, GenericEntity, SharedEntity};
///
/// let empty: Vec<SharedEntity> = Vec::new();
/// assert!(Contragent::from(empty).is_none());
///
/// let pair = [
///     GenericEntity::new("team", "1").into_shared(),
///     GenericEntity::new("team", "2").into_shared(),
/// ];
/// assert_eq!(Contragent::from(pair).len(), 2);
/// ```
#[derive(Debug, Clone, Default)]
pub enum Contragent {
    /// No secondary association.
    #[default]
    None,
    /// One secondary entity.
    Single(SharedEntity),
    /// An ordered, non-empty collection of secondary entities.
    Many(Vec<SharedEntity>),
}

impl Contragent {
    /// Returns `true` when no association is set.
    #[must_use]
    pub const fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }

    /// Returns the number of records a recording will fan out to.
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::None => 0,
            Self::Single(_) => 1,
            Self::Many(entities) => entities.len(),
        }
    }

    /// Returns `true` when there are no secondary entities.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the secondary entities in order.
    #[must_use]
    pub fn entities(&self) -> &[SharedEntity] {
        match self {
            Self::None => &[],
            Self::Single(entity) => std::slice::from_ref(entity),
            Self::Many(entities) => entities,
        }
    }
}

impl From<SharedEntity> for Contragent {
    fn from(entity: SharedEntity) -> Self {
        Self::Single(entity)
    }
}

impl From<Vec<SharedEntity>> for Contragent {
    fn from(entities: Vec<SharedEntity>) -> Self {
        if entities.is_empty() {
            Self::None
        } else {
            Self::Many(entities)
        }
    }
}

impl From<&[SharedEntity]> for Contragent {
    fn from(entities: &[SharedEntity]) -> Self {
        Self::from(entities.to_vec())
    }
}

impl<const N: usize> From<[SharedEntity; N]> for Contragent {
    fn from(entities: [SharedEntity; N]) -> Self {
        Self::from(Vec::from(entities))
    }
}

impl<T> From<Option<T>> for Contragent
where
    T: Into<Self>,
{
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::None, Into::into)
    }
}
