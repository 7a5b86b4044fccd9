use crate::core::state::LandscapeState;
use crate::landscape::components::LandscapeEntity;
use crate::landscape::events::TeardownView;
use crate::landscape::resources::{ModelLoad, ModelStatus};
use bevy::prelude::*;

pub fn setup_scene(mut commands: Commands) {
    commands.insert_resource(ClearColor(Color::WHITE));
}

/// Cancel the view: nothing it owns is rendered or updated afterwards
pub fn teardown_view(
    mut teardown_events: MessageReader<TeardownView>,
    mut commands: Commands,
    owned: Query<Entity, With<LandscapeEntity>>,
    mut model_load: ResMut<ModelLoad>,
    mut next_state: ResMut<NextState<LandscapeState>>,
) {
    if teardown_events.read().count() == 0 {
        return;
    }

    for entity in &owned {
        commands.entity(entity).despawn();
    }
    // dropping the handle lets the asset server cancel a pending load
    model_load.status = ModelStatus::Cancelled;
    next_state.set(LandscapeState::TornDown);

    info!("Landscape view torn down ({} entities released)", owned.iter().count());
}
