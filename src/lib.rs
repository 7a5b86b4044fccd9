mod core;
pub mod landscape;
pub mod ui;

use crate::core::camera::CameraPlugin;
use crate::landscape::LandscapeViewPlugin;
use crate::landscape::resources::LandscapeConfig;
use bevy::app::App;
use bevy::prelude::*;
use landscape_core::LandscapeSettings;

pub use crate::core::camera::components::{LandscapeCamera, RenderOutput};
pub use crate::core::state::LandscapeState;
pub use crate::landscape::components::{LandscapeEntity, LandscapeModel, ModelReady, SunLight};
pub use crate::landscape::events::{
    ModelLoadFailed, ModelLoaded, ResizeView, SetTemperature, SetTime, SetWeather, TeardownView,
};
pub use crate::landscape::resources::{CurrentWeather, ModelLoad, ModelStatus};

/// A lit glTF landscape with a sun driven by time of day and a
/// temperature tint on its materials.
///
/// The host app provides the engine (`DefaultPlugins` or a headless subset)
/// and talks to the view through the setter messages.
pub struct LandscapePlugin {
    pub settings: LandscapeSettings,
}

impl LandscapePlugin {
    pub fn new(settings: LandscapeSettings) -> Self {
        Self { settings }
    }
}

impl Plugin for LandscapePlugin {
    fn build(&self, app: &mut App) {
        app.init_state::<LandscapeState>()
            .insert_resource(LandscapeConfig(self.settings.clone()))
            .add_plugins((CameraPlugin, LandscapeViewPlugin));
    }
}
