//! When steps for activity recording scenarios.

use super::world::ActivityWorld;
use activitylog::activity::domain::GenericEntity;
use rstest_bdd_macros::when;

#[when(r#"the user records "{description}" on the subject"#)]
fn record_on_subject(world: &mut ActivityWorld, description: String) -> Result<(), eyre::Report> {
    let subject = world
        .subject
        .clone()
        .ok_or_else(|| eyre::eyre!("missing subject in scenario world"))?;
    world.last_result = Some(world.log.recorder().on(subject).log(&description));
    Ok(())
}

#[when(r#"the user records "{description}" on the subject with {count:usize} contragents"#)]
fn record_with_contragents(
    world: &mut ActivityWorld,
    description: String,
    count: usize,
) -> Result<(), eyre::Report> {
    let subject = world
        .subject
        .clone()
        .ok_or_else(|| eyre::eyre!("missing subject in scenario world"))?;
    world.contragents = (1..=count)
        .map(|index| GenericEntity::new("team", index.to_string()).into_shared())
        .collect();
    let recorder = world
        .log
        .recorder()
        .on(subject)
        .with_contragents(world.contragents.clone());
    world.last_result = Some(recorder.log(&description));
    Ok(())
}

#[when(r#"the user records "{description}" without a subject"#)]
fn record_without_subject(world: &mut ActivityWorld, description: String) {
    world.last_result = Some(world.log.recorder().log(&description));
}

#[when(r#"an activity is credited to actor id "{id}""#)]
fn credit_unknown_actor(world: &mut ActivityWorld, id: String) {
    let result = world
        .log
        .recorder()
        .caused_by(id)
        .and_then(|recorder| recorder.log("credited"));
    world.last_result = Some(result);
}
