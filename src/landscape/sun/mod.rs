pub mod systems;

use crate::core::state::LandscapeState;
use bevy::prelude::*;

pub struct SunPlugin;

impl Plugin for SunPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, (systems::spawn_sun, systems::apply_initial_hour))
            .add_systems(
                Update,
                systems::apply_time.run_if(in_state(LandscapeState::Active)),
            );
    }
}
