//! Step definitions for activity recording scenarios.

pub mod given;
pub mod then;
pub mod when;
