use bevy::gltf::Gltf;
use bevy::prelude::*;
use landscape_core::LandscapeSettings;

#[derive(Resource, Clone, Debug, Deref)]
pub struct LandscapeConfig(pub LandscapeSettings);

#[derive(Debug, Clone, Default)]
pub enum ModelStatus {
    #[default]
    NotRequested,
    Loading(Handle<Gltf>),
    Spawned(Entity),
    Failed,
    Cancelled,
}

#[derive(Resource, Debug, Default)]
pub struct ModelLoad {
    pub url: String,
    pub status: ModelStatus,
}

impl ModelLoad {
    pub fn is_failed(&self) -> bool {
        matches!(self.status, ModelStatus::Failed)
    }
}

/// Last weather requested through `SetWeather`
#[derive(Resource, Debug, Default, Clone, PartialEq)]
pub struct CurrentWeather(pub Option<String>);
