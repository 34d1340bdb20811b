//! Contragent fan-out through the in-memory store.

use super::helpers::{Setup, person, project, setup};
use activitylog::activity::domain::{EntityRef, SharedEntity};
use rstest::rstest;

#[rstest]
fn each_contragent_gets_its_own_record(setup: Setup) {
    let members: Vec<SharedEntity> = vec![
        person("10", "Ken"),
        person("11", "Barbara"),
        person("12", "Dennis"),
    ];
    let records = setup
        .log
        .recorder()
        .on(project("p1", "Compiler"))
        .with_property("role", "reviewer")
        .with_contragents(members)
        .log(":causer.name added reviewers to :subject.name")
        .expect("recording succeeds")
        .expect("logging enabled");

    assert_eq!(records.len(), 3);
    let stored = setup.store.records().expect("store readable");
    assert_eq!(stored, records);

    let linked: Vec<Vec<EntityRef>> = records
        .iter()
        .map(|record| {
            setup
                .store
                .associations_for(record.id())
                .expect("store readable")
        })
        .collect();
    assert_eq!(
        linked,
        vec![
            vec![EntityRef::new("user", "10")],
            vec![EntityRef::new("user", "11")],
            vec![EntityRef::new("user", "12")],
        ]
    );
    assert!(
        records
            .iter()
            .all(|record| record.description() == "Ada added reviewers to Compiler")
    );
}

#[rstest]
fn array_like_contragents_fan_out_in_order(setup: Setup) {
    let records = setup
        .log
        .recorder()
        .with_contragent([project("a", "A"), project("b", "B")])
        .log("linked")
        .expect("recording succeeds")
        .expect("logging enabled");

    let first = records.first().expect("first record");
    let last = records.last().expect("last record");
    assert_eq!(
        setup.store.associations_for(first.id()).expect("readable"),
        vec![EntityRef::new("project", "a")]
    );
    assert_eq!(
        setup.store.associations_for(last.id()).expect("readable"),
        vec![EntityRef::new("project", "b")]
    );
}

#[rstest]
fn one_recorder_can_log_several_descriptions(setup: Setup) {
    let recorder = setup.log.recorder().with_contragent(project("x", "X"));
    recorder.log("first").expect("recording succeeds");
    recorder.log("second").expect("recording succeeds");

    let descriptions: Vec<String> = setup
        .store
        .records()
        .expect("readable")
        .iter()
        .map(|record| record.description().to_owned())
        .collect();
    assert_eq!(descriptions, ["first", "second"]);
}
