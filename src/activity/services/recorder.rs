//! Fluent recorder that builds and persists activity records.

use std::sync::Arc;

use mockable::Clock;
use thiserror::Error;
use tracing::{debug, warn};

use crate::activity::{
    domain::{
        ActivityRecord, ActorIdentifier, CauserInput, Contragent, Properties, SharedEntity,
    },
    ports::{ActivityLogConfig, ActivityStore, ActivityStoreError, ActorResolver, GeoLookup},
    services::LogGate,
};

/// Service-level errors for activity recording.
#[derive(Debug, Error)]
pub enum ActivityLogError {
    /// An actor identifier did not resolve to any actor.
    #[error("could not determine a user with identifier `{0}`")]
    CouldNotDetermineActor(ActorIdentifier),
    /// The store rejected a write.
    #[error(transparent)]
    Store(#[from] ActivityStoreError),
}

/// Result type for activity recording operations.
pub type ActivityLogResult<T> = Result<T, ActivityLogError>;

/// Builder accumulating one activity before it is recorded.
///
/// A recorder starts out credited to the actor currently signed in through
/// the configured driver and writes to the configured default log channel.
/// Calls chain by value; [`ActivityRecorder::log`] borrows, so one recorder
/// may record several descriptions with the same configuration.
pub struct ActivityRecorder<R, S, G, C>
where
    R: ActorResolver,
    S: ActivityStore,
    G: GeoLookup,
    C: Clock + Send + Sync,
{
    resolver: Arc<R>,
    store: Arc<S>,
    geo: Arc<G>,
    clock: Arc<C>,
    gate: LogGate,
    auth_driver: String,
    log_name: String,
    subject: Option<SharedEntity>,
    causer: Option<SharedEntity>,
    properties: Properties,
    contragent: Contragent,
}

impl<R, S, G, C> ActivityRecorder<R, S, G, C>
where
    R: ActorResolver,
    S: ActivityStore,
    G: GeoLookup,
    C: Clock + Send + Sync,
{
    /// Creates a recorder seeded from configuration and the current actor.
    #[must_use]
    pub fn new(
        config: &ActivityLogConfig,
        resolver: Arc<R>,
        store: Arc<S>,
        geo: Arc<G>,
        clock: Arc<C>,
        gate: LogGate,
    ) -> Self {
        let auth_driver = config
            .default_auth_driver
            .clone()
            .unwrap_or_else(|| resolver.default_driver());
        let causer = resolver.current_actor(&auth_driver);
        Self {
            resolver,
            store,
            geo,
            clock,
            gate,
            auth_driver,
            log_name: config.default_log_name.clone(),
            subject: None,
            causer,
            properties: Properties::new(),
            contragent: Contragent::None,
        }
    }

    /// Replaces the gate this recorder consults.
    #[must_use]
    pub fn set_log_status(mut self, gate: LogGate) -> Self {
        self.gate = gate;
        self
    }

    /// Sets the entity the activity was performed on.
    #[must_use]
    pub fn performed_on(mut self, subject: SharedEntity) -> Self {
        self.subject = Some(subject);
        self
    }

    /// Alias for [`ActivityRecorder::performed_on`].
    #[must_use]
    pub fn on(self, subject: SharedEntity) -> Self {
        self.performed_on(subject)
    }

    /// Credits the activity to an actor.
    ///
    /// Absent input keeps the current actor. Identifiers are resolved
    /// through the configured authentication driver.
    ///
    /// # Errors
    ///
    /// Returns [`ActivityLogError::CouldNotDetermineActor`] when an
    /// identifier does not resolve.
    pub fn caused_by(mut self, causer: impl Into<CauserInput>) -> ActivityLogResult<Self> {
        match causer.into() {
            CauserInput::Absent => {}
            CauserInput::Entity(entity) => self.causer = Some(entity),
            CauserInput::Identifier(identifier) => {
                let Some(actor) = self.resolver.resolve_by_id(&self.auth_driver, &identifier)
                else {
                    warn!(
                        driver = %self.auth_driver,
                        %identifier,
                        "actor identifier did not resolve"
                    );
                    return Err(ActivityLogError::CouldNotDetermineActor(identifier));
                };
                self.causer = Some(actor);
            }
        }
        Ok(self)
    }

    /// Alias for [`ActivityRecorder::caused_by`].
    ///
    /// # Errors
    ///
    /// Returns [`ActivityLogError::CouldNotDetermineActor`] when an
    /// identifier does not resolve.
    pub fn by(self, causer: impl Into<CauserInput>) -> ActivityLogResult<Self> {
        self.caused_by(causer)
    }

    /// Replaces all properties.
    #[must_use]
    pub fn with_properties(mut self, properties: impl Into<Properties>) -> Self {
        self.properties = properties.into();
        self
    }

    /// Inserts or replaces one property.
    #[must_use]
    pub fn with_property(
        mut self,
        key: impl Into<String>,
        value: impl Into<serde_json::Value>,
    ) -> Self {
        self.properties.insert(key, value);
        self
    }

    /// Selects the log channel.
    #[must_use]
    pub fn use_log(mut self, log_name: impl Into<String>) -> Self {
        self.log_name = log_name.into();
        self
    }

    /// Alias for [`ActivityRecorder::use_log`].
    #[must_use]
    pub fn in_log(self, log_name: impl Into<String>) -> Self {
        self.use_log(log_name)
    }

    /// Attaches secondary entities; one record is written per entity.
    ///
    /// Input that normalises to [`Contragent::None`] (an empty collection or
    /// `None`) leaves any earlier association in place.
    #[must_use]
    pub fn with_contragent(mut self, contragent: impl Into<Contragent>) -> Self {
        let normalized = contragent.into();
        if !normalized.is_none() {
            self.contragent = normalized;
        }
        self
    }

    /// Alias for [`ActivityRecorder::with_contragent`].
    #[must_use]
    pub fn with_contragents(self, contragents: impl Into<Contragent>) -> Self {
        self.with_contragent(contragents)
    }

    /// Turns recording on for every holder of the shared gate.
    #[must_use]
    pub fn enable_logging(self) -> Self {
        self.gate.enable();
        self
    }

    /// Turns recording off for every holder of the shared gate.
    #[must_use]
    pub fn disable_logging(self) -> Self {
        self.gate.disable();
        self
    }

    /// Returns the selected log channel.
    #[must_use]
    pub fn log_name(&self) -> &str {
        &self.log_name
    }

    /// Returns the subject, if set.
    #[must_use]
    pub const fn subject(&self) -> Option<&SharedEntity> {
        self.subject.as_ref()
    }

    /// Returns the actor the activity will be credited to.
    #[must_use]
    pub const fn causer(&self) -> Option<&SharedEntity> {
        self.causer.as_ref()
    }

    /// Returns the accumulated properties.
    #[must_use]
    pub const fn properties(&self) -> &Properties {
        &self.properties
    }

    /// Returns the secondary association.
    #[must_use]
    pub const fn contragent(&self) -> &Contragent {
        &self.contragent
    }

    /// Returns the gate consulted by [`ActivityRecorder::log`].
    #[must_use]
    pub const fn log_status(&self) -> &LogGate {
        &self.gate
    }

    /// Records the activity.
    ///
    /// Returns `Ok(None)` without touching the store while the gate is
    /// disabled. Otherwise one record is written per secondary entity (or a
    /// single record when none is attached) and the records are returned in
    /// write order.
    ///
    /// # Errors
    ///
    /// Returns [`ActivityLogError::Store`] when a save or association fails.
    /// Records written before the failure stay persisted and the remaining
    /// entities are skipped.
    pub fn log(&self, description: &str) -> ActivityLogResult<Option<Vec<ActivityRecord>>> {
        if self.gate.is_disabled() {
            debug!(log_name = %self.log_name, "activity logging disabled; skipping");
            return Ok(None);
        }

        let records = match &self.contragent {
            Contragent::None => vec![self.log_one(description)?],
            Contragent::Single(_) | Contragent::Many(_) => self
                .contragent
                .entities()
                .iter()
                .map(|entity| self.log_with_contragent(description, entity))
                .collect::<ActivityLogResult<Vec<_>>>()?,
        };
        Ok(Some(records))
    }

    fn log_one(&self, description: &str) -> ActivityLogResult<ActivityRecord> {
        let record = ActivityRecord::builder(self.log_name.clone())
            .performed_on(self.subject.as_deref())
            .caused_by(self.causer.as_deref())
            .with_properties(self.properties.clone())
            .with_ip_address(self.geo.client_ip_address())
            .build(description, &*self.clock);
        self.store.save(&record)?;
        debug!(activity_id = %record.id(), log_name = %record.log_name(), "activity recorded");
        Ok(record)
    }

    fn log_with_contragent(
        &self,
        description: &str,
        contragent: &SharedEntity,
    ) -> ActivityLogResult<ActivityRecord> {
        let record = self.log_one(description)?;
        let entity = contragent.entity_ref();
        self.store.associate(&record, &entity)?;
        debug!(activity_id = %record.id(), %entity, "contragent associated");
        Ok(record)
    }
}
