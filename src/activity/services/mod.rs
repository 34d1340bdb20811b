//! Application services for activity recording.

mod activity_log;
mod gate;
mod recorder;

pub use activity_log::ActivityLog;
pub use gate::LogGate;
pub use recorder::{ActivityLogError, ActivityLogResult, ActivityRecorder};
