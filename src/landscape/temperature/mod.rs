pub mod systems;

use crate::core::state::LandscapeState;
use bevy::prelude::*;

pub struct TemperaturePlugin;

impl Plugin for TemperaturePlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Update,
            systems::apply_temperature
                .after(crate::landscape::model::systems::finish_model_spawn)
                .run_if(in_state(LandscapeState::Active)),
        );
    }
}
