//! Activitylog: structured activity recording for audit trails.
//!
//! This crate provides a builder-style recording API that sits in front of a
//! persistence layer. Application code uses it to note who performed an
//! action, which entity the action touched, and any contextual properties,
//! producing audit-trail entries with a rendered description.
//!
//! # Architecture
//!
//! Activitylog follows hexagonal architecture principles:
//!
//! - **Domain**: Pure record construction and templating logic
//! - **Ports**: Abstract trait interfaces for storage, authentication, and
//!   client address lookup
//! - **Adapters**: Concrete implementations of ports (in-memory)
//!
//! # Modules
//!
//! - [`activity`]: Activity recording, gating, and description templating

pub mod activity;
