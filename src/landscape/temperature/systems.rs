// Temperature tint of the model's materials

use crate::landscape::components::{LandscapeModel, ModelReady};
use crate::landscape::events::SetTemperature;
use bevy::prelude::*;
use landscape_core::tint::temperature_tint;

/// Tint every mesh material of the model for the requested temperature.
///
/// Does nothing until the model is ready; materials are edited in place.
pub fn apply_temperature(
    mut temperature_events: MessageReader<SetTemperature>,
    models_q: Query<Entity, (With<LandscapeModel>, With<ModelReady>)>,
    children_q: Query<&Children>,
    mesh_materials_q: Query<&MeshMaterial3d<StandardMaterial>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let Some(request) = temperature_events.read().last() else {
        return;
    };
    let Some(model) = models_q.iter().next() else {
        debug!("Model not loaded yet, ignoring temperature {}", request.celsius);
        return;
    };

    let tint = temperature_tint(request.celsius);
    let color = Color::linear_rgb(tint.x, tint.y, tint.z);

    let mut tinted = 0;
    for entity in std::iter::once(model).chain(children_q.iter_descendants(model)) {
        let Ok(mesh_material) = mesh_materials_q.get(entity) else {
            continue;
        };
        if let Some(material) = materials.get_mut(&mesh_material.0) {
            material.base_color = color;
            tinted += 1;
        }
    }

    debug!("Temperature {}°C tinted {} materials", request.celsius, tinted);
}
