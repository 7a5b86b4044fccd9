pub mod components;
pub mod events;
pub mod model;
pub mod resources;
pub mod sun;
pub mod systems;
pub mod temperature;
pub mod weather;

use crate::core::state::LandscapeState;
use crate::landscape::components::*;
use crate::landscape::events::*;
use crate::landscape::resources::*;
use crate::landscape::systems::*;
use bevy::prelude::*;

pub struct LandscapeViewPlugin;

impl Plugin for LandscapeViewPlugin {
    fn build(&self, app: &mut App) {
        app.register_type::<LandscapeEntity>()
            .register_type::<SunLight>()
            .register_type::<LandscapeModel>()
            .register_type::<ModelReady>()
            .add_message::<ResizeView>()
            .add_message::<SetTime>()
            .add_message::<SetTemperature>()
            .add_message::<SetWeather>()
            .add_message::<TeardownView>()
            .add_message::<ModelLoaded>()
            .add_message::<ModelLoadFailed>()
            .init_resource::<ModelLoad>()
            .init_resource::<CurrentWeather>()
            .add_plugins((
                sun::SunPlugin,
                model::ModelPlugin,
                temperature::TemperaturePlugin,
                weather::WeatherPlugin,
            ))
            .add_systems(Startup, setup_scene)
            .add_systems(
                Update,
                teardown_view
                    .after(model::systems::poll_model_load)
                    .after(model::systems::finish_model_spawn)
                    .run_if(in_state(LandscapeState::Active)),
            );
    }
}
