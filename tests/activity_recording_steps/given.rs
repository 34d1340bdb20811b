//! Given steps for activity recording scenarios.

use super::world::{ActivityWorld, DRIVER};
use activitylog::activity::domain::GenericEntity;
use rstest_bdd_macros::given;

#[given(r#"a signed-in user "{name}" with id "{id}""#)]
fn signed_in_user(world: &mut ActivityWorld, name: String, id: String) {
    world.directory.register(
        DRIVER,
        GenericEntity::new("user", id.as_str())
            .with_attribute("name", name)
            .into_shared(),
    );
    world.directory.sign_in(DRIVER, id);
}

#[given(r#"a subject "{entity_type}" "{id}" titled "{title}""#)]
fn subject_titled(world: &mut ActivityWorld, entity_type: String, id: String, title: String) {
    world.subject = Some(
        GenericEntity::new(entity_type, id)
            .with_attribute("title", title)
            .into_shared(),
    );
}

#[given("logging is disabled")]
fn logging_disabled(world: &mut ActivityWorld) {
    world.log.gate().disable();
}
