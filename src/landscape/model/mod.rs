pub mod systems;

use crate::core::state::LandscapeState;
use bevy::prelude::*;

pub struct ModelPlugin;

impl Plugin for ModelPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, systems::request_model).add_systems(
            Update,
            (systems::poll_model_load, systems::finish_model_spawn)
                .chain()
                .run_if(in_state(LandscapeState::Active)),
        );
    }
}
