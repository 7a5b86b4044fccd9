// disable console on windows for release builds
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use bevy::DefaultPlugins;
use bevy::prelude::*;
use bevy::window::{PresentMode, WindowResized, WindowResolution};
use bevy_egui::EguiPlugin;
use landscape_core::ViewerConfig;
use landscape_core::config::DEFAULT_CONFIG_PATH;
use weather_landscape::ui::ControlPanelPlugin;
use weather_landscape::ui::systems::ControlPanelState;
use weather_landscape::{LandscapePlugin, LandscapeState, ResizeView, TeardownView};

fn main() {
    // logging isn't up until DefaultPlugins is added, so report config problems from Startup
    let (config, config_error) = match ViewerConfig::load_from_file(DEFAULT_CONFIG_PATH) {
        Ok(config) => (config, None),
        Err(err) => (ViewerConfig::default(), Some(err.to_string())),
    };

    let panel = ControlPanelState {
        hour: config.landscape.initial_hour.unwrap_or(12.0),
        temperature: config.landscape.initial_temperature.unwrap_or(20.0),
    };

    let mut app = App::new();
    app.add_plugins(DefaultPlugins.set(WindowPlugin {
        primary_window: Some(Window {
            title: config.window.title.clone(),
            resolution: WindowResolution::new(config.window.width, config.window.height),
            present_mode: PresentMode::AutoVsync,
            ..default()
        }),
        ..default()
    }))
    .add_plugins(EguiPlugin::default())
    .add_plugins(LandscapePlugin::new(config.landscape.clone()))
    .add_plugins(ControlPanelPlugin)
    .insert_resource(panel)
    .add_systems(
        Update,
        (forward_window_resize, teardown_on_escape).run_if(in_state(LandscapeState::Active)),
    );

    if let Some(err) = config_error {
        app.add_systems(Startup, move || {
            warn!("{err}, using default config");
        });
    }

    app.run();
}

/// The view doesn't watch the window itself; the host forwards resizes
fn forward_window_resize(
    mut window_resized: MessageReader<WindowResized>,
    mut resize_events: MessageWriter<ResizeView>,
) {
    if window_resized.read().count() > 0 {
        resize_events.write(ResizeView);
    }
}

fn teardown_on_escape(
    keyboard_input: Res<ButtonInput<KeyCode>>,
    mut teardown_events: MessageWriter<TeardownView>,
) {
    if keyboard_input.just_pressed(KeyCode::Escape) {
        teardown_events.write(TeardownView);
    }
}
