//! Actor resolution and description rendering end to end.

use super::helpers::{DRIVER, Setup, setup, setup_with};
use activitylog::activity::{
    domain::{ActorIdentifier, EntityRef},
    ports::ActivityLogConfig,
    services::ActivityLogError,
};
use rstest::rstest;
use serde_json::json;

#[rstest]
fn default_log_name_comes_from_configuration() {
    let configured = setup_with(ActivityLogConfig::default().with_default_log_name("audit"));
    configured
        .log
        .recorder()
        .log("entry")
        .expect("recording succeeds");

    assert_eq!(
        configured
            .store
            .records_in_log("audit")
            .expect("readable")
            .len(),
        1
    );
}

#[rstest]
fn identifier_is_resolved_before_recording(setup: Setup) {
    let records = setup
        .log
        .recorder()
        .caused_by(2_u64)
        .expect("actor exists")
        .with_properties(json!({"ticket": {"id": 881, "state": "closed"}}))
        .log(":causer.name :properties.ticket.state ticket #:properties.ticket.id")
        .expect("recording succeeds")
        .expect("logging enabled");

    let record = records.first().expect("one record");
    assert_eq!(record.description(), "Linus closed ticket #881");
    assert_eq!(record.causer(), Some(&EntityRef::new("user", "2")));
}

#[rstest]
fn unknown_identifier_fails_without_writes(setup: Setup) {
    let result = setup.log.recorder().by("999");

    let Err(ActivityLogError::CouldNotDetermineActor(identifier)) = result else {
        panic!("expected CouldNotDetermineActor");
    };
    assert_eq!(identifier, ActorIdentifier::from("999"));
    assert_eq!(
        ActivityLogError::CouldNotDetermineActor(identifier).to_string(),
        "could not determine a user with identifier `999`"
    );
    assert!(setup.store.records().expect("readable").is_empty());
}

#[rstest]
fn signed_out_session_records_without_causer(setup: Setup) {
    setup.directory.sign_out(DRIVER);
    let records = setup
        .log
        .recorder()
        .log("system :causer.name")
        .expect("recording succeeds")
        .expect("logging enabled");

    let record = records.first().expect("one record");
    assert!(record.causer().is_none());
    assert_eq!(record.description(), "system :causer.name");
}
