//! Activity recording for audit trails.
//!
//! This module records who did what, to what, under which log channel, with
//! free-form properties attached. Recording is driven by a fluent builder
//! that resolves the acting entity, renders a human-readable description
//! against the record's own attributes, and fans out one record per
//! secondary entity ("contragent") when several are attached.
//!
//! # Architecture
//!
//! - **Domain**: records, entity references, properties, and the
//!   description templating engine ([`domain`])
//! - **Ports**: actor resolution, persistence, client address lookup, and
//!   configuration ([`ports`])
//! - **Adapters**: in-memory implementations of every port ([`adapters`])
//! - **Services**: the shared [`services::LogGate`], the
//!   [`services::ActivityRecorder`] builder, and the
//!   [`services::ActivityLog`] factory ([`services`])
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//!
//! use activitylog::activity::{
//!     adapters::memory::{InMemoryActivityStore, InMemoryActorDirectory, StaticGeoLookup},
//!     domain::GenericEntity,
//!     ports::ActivityLogConfig,
//!     services::ActivityLog,
//! };
//! use mockable::DefaultClock;
//!
//! let store = Arc::new(InMemoryActivityStore::new());
//! let log = ActivityLog::new(
//!     ActivityLogConfig::default(),
//!     Arc::new(InMemoryActorDirectory::new("web")),
//!     Arc::clone(&store),
//!     Arc::new(StaticGeoLookup::default()),
//!     Arc::new(DefaultClock),
//! );
//!
//! let article = GenericEntity::new("article", "7")
//!     .with_attribute("title", "Hello")
//!     .into_shared();
//!
//! let records = log
//!     .recorder()
//!     .performed_on(article)
//!     .with_property("section", "news")
//!     .log("published :subject.title in :properties.section")
//!     .expect("recording succeeds")
//!     .expect("logging is enabled");
//!
//! assert_eq!(records.len(), 1);
//! assert_eq!(records.first().map(|r| r.description()), Some("published Hello in news"));
//! ```

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;
