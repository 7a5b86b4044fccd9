pub mod systems;

use crate::core::state::LandscapeState;
use bevy::prelude::*;

pub struct WeatherPlugin;

impl Plugin for WeatherPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Update,
            systems::record_weather.run_if(in_state(LandscapeState::Active)),
        );
    }
}
