use crate::core::camera::components::{LandscapeCamera, RenderOutput};
use crate::landscape::components::LandscapeEntity;
use crate::landscape::events::ResizeView;
use crate::landscape::resources::LandscapeConfig;
use bevy::prelude::*;
use bevy::window::PrimaryWindow;
use landscape_core::constants::{
    AMBIENT_INTENSITY, CAMERA_FAR, CAMERA_FOV_DEGREES, CAMERA_NEAR, CAMERA_UP,
};
use landscape_core::framing::{ViewFrustum, aspect_ratio, frame_bounds};
use landscape_core::Bounds;

/// Surface size used when the host has no primary window (headless apps)
const FALLBACK_SURFACE: Vec2 = Vec2::new(1280.0, 720.0);

/// Ambient brightness of a light with intensity 1.0
const AMBIENT_BRIGHTNESS_SCALE: f32 = 1000.0;

/// Current logical size and pixel ratio of the host surface
fn host_surface(window: Option<&Window>) -> (Vec2, f32) {
    match window {
        Some(window) => (
            Vec2::new(window.width(), window.height()),
            window.scale_factor(),
        ),
        None => (FALLBACK_SURFACE, 1.0),
    }
}

pub fn spawn_camera(
    mut commands: Commands,
    config: Res<LandscapeConfig>,
    primary_window: Query<&Window, With<PrimaryWindow>>,
) {
    let (surface, pixel_ratio) = host_surface(primary_window.single().ok());
    let aspect = aspect_ratio(surface.x, surface.y)
        .unwrap_or(FALLBACK_SURFACE.x / FALLBACK_SURFACE.y);

    commands.spawn((
        Camera3d::default(),
        Projection::Perspective(PerspectiveProjection {
            fov: CAMERA_FOV_DEGREES.to_radians(),
            aspect_ratio: aspect,
            near: CAMERA_NEAR,
            far: CAMERA_FAR,
            ..default()
        }),
        Transform::from_xyz(0.0, 0.0, 60.0).looking_at(Vec3::ZERO, CAMERA_UP),
        if config.antialias {
            Msaa::Sample4
        } else {
            Msaa::Off
        },
        AmbientLight {
            color: Color::WHITE,
            brightness: AMBIENT_INTENSITY * AMBIENT_BRIGHTNESS_SCALE,
            ..default()
        },
        RenderOutput {
            size: surface.as_uvec2(),
            pixel_ratio,
        },
        LandscapeCamera,
        LandscapeEntity,
    ));

    info!("Landscape camera spawned ({}x{})", surface.x, surface.y);
}

/// Match camera aspect and renderer output to the host surface
pub fn resize_view(
    mut resize_events: MessageReader<ResizeView>,
    primary_window: Query<&Window, With<PrimaryWindow>>,
    mut camera_q: Query<(&mut Projection, &mut RenderOutput), With<LandscapeCamera>>,
) {
    if resize_events.read().count() == 0 {
        return;
    }

    let (surface, pixel_ratio) = host_surface(primary_window.single().ok());
    let Some(aspect) = aspect_ratio(surface.x, surface.y) else {
        debug!("Ignoring resize to empty surface {}x{}", surface.x, surface.y);
        return;
    };

    for (mut projection, mut output) in &mut camera_q {
        if let Projection::Perspective(perspective) = projection.as_mut() {
            perspective.aspect_ratio = aspect;
        }
        output.size = surface.as_uvec2();
        output.pixel_ratio = pixel_ratio;
    }
}

/// Move the camera so the whole box is in view, aimed at its center.
///
/// Returns false and leaves the camera alone when the box can't be framed.
pub fn center_and_zoom(camera: &mut Transform, projection: &Projection, bounds: &Bounds) -> bool {
    let Some(pose) = frame_bounds(bounds) else {
        return false;
    };
    *camera = Transform::from_translation(pose.position).looking_at(pose.target, CAMERA_UP);

    if let Projection::Perspective(perspective) = projection {
        let frustum = ViewFrustum::landscape(pose, perspective.aspect_ratio);
        if !frustum.contains_bounds(bounds) {
            warn!(
                "Model of size {} does not fit the camera view",
                bounds.size()
            );
        }
    }
    true
}
