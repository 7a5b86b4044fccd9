pub mod components;
mod systems;

use crate::core::camera::components::*;
use crate::core::camera::systems::*;
use crate::core::state::LandscapeState;
use bevy::prelude::*;

pub(crate) use systems::center_and_zoom;

pub(crate) struct CameraPlugin;

impl Plugin for CameraPlugin {
    fn build(&self, app: &mut App) {
        app.register_type::<LandscapeCamera>()
            .register_type::<RenderOutput>()
            .add_systems(Startup, spawn_camera)
            .add_systems(
                Update,
                resize_view.run_if(in_state(LandscapeState::Active)),
            );
    }
}
