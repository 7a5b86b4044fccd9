use crate::landscape::components::{LandscapeEntity, SunLight};
use crate::landscape::events::SetTime;
use crate::landscape::resources::LandscapeConfig;
use bevy::prelude::*;
use landscape_core::constants::{SUN_INITIAL_POSITION, SUN_INTENSITY};
use landscape_core::sun::sun_position;

/// Illuminance of a light with intensity 1.0
const DAYLIGHT_LUX: f32 = 10_000.0;

pub fn spawn_sun(mut commands: Commands) {
    commands.spawn((
        DirectionalLight {
            color: Color::WHITE,
            illuminance: SUN_INTENSITY * DAYLIGHT_LUX,
            ..default()
        },
        Transform::from_translation(SUN_INITIAL_POSITION).looking_at(Vec3::ZERO, Vec3::Y),
        SunLight,
        LandscapeEntity,
    ));
}

pub fn apply_initial_hour(config: Res<LandscapeConfig>, mut time_events: MessageWriter<SetTime>) {
    if let Some(hours) = config.initial_hour {
        time_events.write(SetTime { hours });
    }
}

/// Move the sun along its daily orbit; the last request of the frame wins
pub fn apply_time(
    mut time_events: MessageReader<SetTime>,
    mut sun_q: Query<&mut Transform, With<SunLight>>,
) {
    let Some(request) = time_events.read().last() else {
        return;
    };

    let position = sun_position(request.hours);
    for mut transform in &mut sun_q {
        *transform = Transform::from_translation(position).looking_at(Vec3::ZERO, Vec3::Y);
    }
}
