//! Input accepted when crediting an activity to an actor.

use super::{ActorIdentifier, SharedEntity};
use uuid::Uuid;

/// Either an actor entity, an identifier to resolve, or nothing.
///
/// [`CauserInput::Absent`] leaves the recorder's current actor untouched,
/// which lets callers forward optional values without branching.
#[derive(Debug, Clone)]
pub enum CauserInput {
    /// No actor supplied.
    Absent,
    /// An already loaded actor.
    Entity(SharedEntity),
    /// A key to resolve through the actor resolver.
    Identifier(ActorIdentifier),
}

impl From<SharedEntity> for CauserInput {
    fn from(entity: SharedEntity) -> Self {
        Self::Entity(entity)
    }
}

impl From<ActorIdentifier> for CauserInput {
    fn from(identifier: ActorIdentifier) -> Self {
        Self::Identifier(identifier)
    }
}

impl<T> From<Option<T>> for CauserInput
where
    T: Into<Self>,
{
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Absent, Into::into)
    }
}

macro_rules! identifier_causer_input {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for CauserInput {
                fn from(value: $ty) -> Self {
                    Self::Identifier(ActorIdentifier::from(value))
                }
            }
        )*
    };
}

identifier_causer_input!(&str, String, Uuid, i32, i64, u32, u64);
