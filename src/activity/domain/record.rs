//! The persisted activity record and its builder.

use super::{
    ActivityId, DescriptionContext, EntityRef, Loggable, Properties, render_description,
};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// One audit-trail entry.
///
/// Records reference their subject and causer by `(type, id)` rather than
/// holding copies of them. Properties are copied by value at build time, so
/// changes made to a recorder afterwards never reach a built record.
///
/// # Invariants
///
/// - `description` has every resolvable placeholder substituted
/// - `id` is unique per built record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityRecord {
    id: ActivityId,
    log_name: String,
    description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    subject: Option<EntityRef>,
    #[serde(skip_serializing_if = "Option::is_none")]
    causer: Option<EntityRef>,
    properties: Properties,
    ip_address: String,
    created_at: DateTime<Utc>,
}

impl ActivityRecord {
    /// Starts building a record for the given log channel.
    ///
    /// # Examples
    ///
    /// ```
    /// use activitylog::activity::domain::{ActivityRecord, GenericEntity};
    /// use mockable::DefaultClock;
    ///
    /// let user = GenericEntity::new("user", "5").with_attribute("name", "Ada");
    /// let record = ActivityRecord::builder("default")
    ///     .caused_by(Some(&user))
    ///     .with_ip_address("10.0.0.1")
    ///     .build("signed in as :causer.name", &DefaultClock);
    ///
    /// assert_eq!(record.description(), "signed in as Ada");
    /// assert_eq!(record.causer().map(ToString::to_string), Some("user#5".to_owned()));
    /// ```
    #[must_use]
    pub fn builder<'a>(log_name: impl Into<String>) -> ActivityRecordBuilder<'a> {
        ActivityRecordBuilder::new(log_name)
    }

    /// Returns the record identifier.
    #[must_use]
    pub const fn id(&self) -> ActivityId {
        self.id
    }

    /// Returns the log channel name.
    #[must_use]
    pub fn log_name(&self) -> &str {
        &self.log_name
    }

    /// Returns the rendered description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the subject reference.
    #[must_use]
    pub const fn subject(&self) -> Option<&EntityRef> {
        self.subject.as_ref()
    }

    /// Returns the causer reference.
    #[must_use]
    pub const fn causer(&self) -> Option<&EntityRef> {
        self.causer.as_ref()
    }

    /// Returns the record properties.
    #[must_use]
    pub const fn properties(&self) -> &Properties {
        &self.properties
    }

    /// Returns the captured client address.
    #[must_use]
    pub fn ip_address(&self) -> &str {
        &self.ip_address
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

/// Builder assembling an [`ActivityRecord`] from borrowed entities.
#[derive(Debug, Clone)]
pub struct ActivityRecordBuilder<'a> {
    log_name: String,
    subject: Option<&'a dyn Loggable>,
    causer: Option<&'a dyn Loggable>,
    properties: Properties,
    ip_address: String,
}

impl<'a> ActivityRecordBuilder<'a> {
    fn new(log_name: impl Into<String>) -> Self {
        Self {
            log_name: log_name.into(),
            subject: None,
            causer: None,
            properties: Properties::new(),
            ip_address: String::new(),
        }
    }

    /// Sets the subject the activity was performed on.
    #[must_use]
    pub fn performed_on(mut self, subject: Option<&'a dyn Loggable>) -> Self {
        self.subject = subject;
        self
    }

    /// Sets the actor credited with the activity.
    #[must_use]
    pub fn caused_by(mut self, causer: Option<&'a dyn Loggable>) -> Self {
        self.causer = causer;
        self
    }

    /// Sets the record properties.
    #[must_use]
    pub fn with_properties(mut self, properties: Properties) -> Self {
        self.properties = properties;
        self
    }

    /// Sets the client address.
    #[must_use]
    pub fn with_ip_address(mut self, ip_address: impl Into<String>) -> Self {
        self.ip_address = ip_address.into();
        self
    }

    /// Renders the description and produces the record.
    #[must_use]
    pub fn build(self, description: &str, clock: &impl Clock) -> ActivityRecord {
        let context = DescriptionContext::new(self.subject, self.causer, &self.properties);
        let rendered = render_description(description, &context);
        ActivityRecord {
            id: ActivityId::new(),
            log_name: self.log_name,
            description: rendered,
            subject: self.subject.map(Loggable::entity_ref),
            causer: self.causer.map(Loggable::entity_ref),
            properties: self.properties,
            ip_address: self.ip_address,
            created_at: clock.utc(),
        }
    }
}
