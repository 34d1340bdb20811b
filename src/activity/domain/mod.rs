//! Domain model for activity recording.
//!
//! Everything here is free of infrastructure: records, entity references,
//! property maps, secondary associations, and the description templating
//! engine.

mod causer;
mod contragent;
mod entity;
mod ids;
mod properties;
mod record;
mod template;

pub use causer::CauserInput;
pub use contragent::Contragent;
pub use entity::{EntityRef, GenericEntity, Loggable, SharedEntity};
pub use ids::{ActivityId, ActorIdentifier};
pub use properties::Properties;
pub use record::{ActivityRecord, ActivityRecordBuilder};
pub use template::{DescriptionContext, lookup_path, render_description};
