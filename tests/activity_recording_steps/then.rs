//! Then steps for activity recording scenarios.

use super::world::ActivityWorld;
use activitylog::activity::services::ActivityLogError;
use rstest_bdd_macros::then;

#[then("{count:usize} activity is stored")]
fn one_activity_stored(world: &ActivityWorld, count: usize) -> Result<(), eyre::Report> {
    stored_count_matches(world, count)
}

#[then("{count:usize} activities are stored")]
fn activities_stored(world: &ActivityWorld, count: usize) -> Result<(), eyre::Report> {
    stored_count_matches(world, count)
}

#[then("no activity is stored")]
fn no_activity_stored(world: &ActivityWorld) -> Result<(), eyre::Report> {
    stored_count_matches(world, 0)
}

fn stored_count_matches(world: &ActivityWorld, expected: usize) -> Result<(), eyre::Report> {
    let stored = world
        .store
        .records()
        .map_err(|err| eyre::eyre!("store unreadable: {err}"))?;
    if stored.len() != expected {
        return Err(eyre::eyre!(
            "expected {expected} stored activities, found {}",
            stored.len()
        ));
    }
    Ok(())
}

#[then(r#"every stored description reads "{expected}""#)]
fn every_description_reads(world: &ActivityWorld, expected: String) -> Result<(), eyre::Report> {
    let stored = world
        .store
        .records()
        .map_err(|err| eyre::eyre!("store unreadable: {err}"))?;
    if let Some(record) = stored
        .iter()
        .find(|record| record.description() != expected)
    {
        return Err(eyre::eyre!(
            "expected description '{expected}', found '{}'",
            record.description()
        ));
    }
    Ok(())
}

#[then("each stored activity is linked to exactly one contragent")]
fn each_activity_linked_once(world: &ActivityWorld) -> Result<(), eyre::Report> {
    let stored = world
        .store
        .records()
        .map_err(|err| eyre::eyre!("store unreadable: {err}"))?;
    let mut linked = Vec::new();
    for record in &stored {
        let links = world
            .store
            .associations_for(record.id())
            .map_err(|err| eyre::eyre!("store unreadable: {err}"))?;
        if links.len() != 1 {
            return Err(eyre::eyre!(
                "activity {} has {} contragent links",
                record.id(),
                links.len()
            ));
        }
        linked.extend(links);
    }
    let expected: Vec<_> = world
        .contragents
        .iter()
        .map(|entity| entity.entity_ref())
        .collect();
    if linked != expected {
        return Err(eyre::eyre!(
            "linked contragents {linked:?} differ from {expected:?}"
        ));
    }
    Ok(())
}

#[then("the recorder reports that nothing was logged")]
fn nothing_logged(world: &ActivityWorld) -> Result<(), eyre::Report> {
    match world.last_result.as_ref() {
        Some(Ok(None)) => Ok(()),
        other => Err(eyre::eyre!("expected a skipped recording, got {other:?}")),
    }
}

#[then("recording fails because the actor could not be determined")]
fn actor_not_determined(world: &ActivityWorld) -> Result<(), eyre::Report> {
    match world.last_result.as_ref() {
        Some(Err(ActivityLogError::CouldNotDetermineActor(_))) => Ok(()),
        other => Err(eyre::eyre!(
            "expected CouldNotDetermineActor, got {other:?}"
        )),
    }
}
