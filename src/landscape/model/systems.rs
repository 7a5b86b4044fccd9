// glTF model lifecycle: request, spawn, frame

use crate::core::camera::center_and_zoom;
use crate::core::camera::components::LandscapeCamera;
use crate::landscape::components::{LandscapeEntity, LandscapeModel, ModelReady};
use crate::landscape::events::{ModelLoadFailed, ModelLoaded, SetTemperature};
use crate::landscape::resources::{LandscapeConfig, ModelLoad, ModelStatus};
use bevy::asset::LoadState;
use bevy::camera::primitives::Aabb;
use bevy::gltf::Gltf;
use bevy::prelude::*;
use landscape_core::Bounds;

/// Log the failure and publish it once on the diagnostic channel
fn report_load_failure(
    model_load: &mut ModelLoad,
    reason: String,
    failures: &mut MessageWriter<ModelLoadFailed>,
) {
    error!("GLTF load error for '{}': {}", model_load.url, reason);
    failures.write(ModelLoadFailed {
        url: model_load.url.clone(),
        reason,
    });
    model_load.status = ModelStatus::Failed;
}

/// Fire-and-forget load of the configured model
pub fn request_model(
    config: Res<LandscapeConfig>,
    asset_server: Res<AssetServer>,
    mut model_load: ResMut<ModelLoad>,
    mut failures: MessageWriter<ModelLoadFailed>,
) {
    model_load.url = config.model_url.clone();

    if config.model_url.is_empty() {
        report_load_failure(&mut model_load, "no model path configured".into(), &mut failures);
        return;
    }

    info!("Loading model from '{}'", config.model_url);
    let handle = asset_server.load::<Gltf>(config.model_url.clone());
    model_load.status = ModelStatus::Loading(handle);
}

/// Resolve a pending load into either a spawned scene or a reported failure
pub fn poll_model_load(
    mut commands: Commands,
    asset_server: Res<AssetServer>,
    gltfs: Res<Assets<Gltf>>,
    mut model_load: ResMut<ModelLoad>,
    mut failures: MessageWriter<ModelLoadFailed>,
) {
    let ModelStatus::Loading(handle) = &model_load.status else {
        return;
    };
    let handle = handle.clone();

    match asset_server.get_load_state(handle.id()) {
        Some(LoadState::Loaded) => {
            let scene = gltfs
                .get(&handle)
                .and_then(|gltf| {
                    gltf.default_scene
                        .clone()
                        .or_else(|| gltf.scenes.first().cloned())
                });
            let Some(scene) = scene else {
                report_load_failure(&mut model_load, "file contains no scene".into(), &mut failures);
                return;
            };

            let entity = commands
                .spawn((
                    SceneRoot(scene),
                    Transform::default(),
                    LandscapeModel,
                    LandscapeEntity,
                ))
                .id();
            info!("Model '{}' loaded, spawning scene", model_load.url);
            model_load.status = ModelStatus::Spawned(entity);
        }
        Some(LoadState::Failed(err)) => {
            let reason = err.to_string();
            report_load_failure(&mut model_load, reason, &mut failures);
        }
        _ => {}
    }
}

/// World-space bounds of every mesh under `root`
fn model_bounds(
    root: Entity,
    children_q: &Query<&Children>,
    mesh_bounds_q: &Query<(&Aabb, &GlobalTransform)>,
) -> Bounds {
    let mut bounds = Bounds::EMPTY;
    for entity in std::iter::once(root).chain(children_q.iter_descendants(root)) {
        let Ok((aabb, transform)) = mesh_bounds_q.get(entity) else {
            continue;
        };
        let local = Bounds::from_min_max(aabb.min().into(), aabb.max().into());
        for corner in local.corners() {
            bounds.extend(transform.transform_point(corner));
        }
    }
    bounds
}

/// Once the scene's meshes have bounds, frame them and mark the model ready
pub fn finish_model_spawn(
    mut commands: Commands,
    config: Res<LandscapeConfig>,
    models_q: Query<Entity, (With<LandscapeModel>, Without<ModelReady>)>,
    children_q: Query<&Children>,
    mesh_bounds_q: Query<(&Aabb, &GlobalTransform)>,
    mut camera_q: Query<(&mut Transform, &Projection), With<LandscapeCamera>>,
    mut loaded_events: MessageWriter<ModelLoaded>,
    mut temperature_events: MessageWriter<SetTemperature>,
) {
    for model in &models_q {
        let bounds = model_bounds(model, &children_q, &mesh_bounds_q);
        if bounds.is_empty() {
            // scene not instanced yet, or bounds not computed
            continue;
        }

        for (mut transform, projection) in &mut camera_q {
            if !center_and_zoom(&mut transform, projection, &bounds) {
                warn!("Model bounds {:?} are degenerate, camera not moved", bounds);
            }
        }

        commands.entity(model).insert(ModelReady);
        loaded_events.write(ModelLoaded { entity: model });
        info!(
            "Model ready, size {} centered at {}",
            bounds.size(),
            bounds.center()
        );

        if let Some(celsius) = config.initial_temperature {
            temperature_events.write(SetTemperature { celsius });
        }
    }
}
