pub mod systems;

use crate::core::state::LandscapeState;
use bevy::prelude::*;
use bevy_egui::EguiPrimaryContextPass;
use systems::*;

/// Side panel that drives the landscape setters, for hosts that run egui
pub struct ControlPanelPlugin;

impl Plugin for ControlPanelPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ControlPanelState>().add_systems(
            EguiPrimaryContextPass,
            render_control_panel.run_if(in_state(LandscapeState::Active)),
        );
    }
}
