use bevy::prelude::*;

/// Everything the landscape view spawns and owns
#[derive(Component, Reflect, Default)]
#[reflect(Component)]
pub struct LandscapeEntity;

#[derive(Component, Reflect, Default)]
#[reflect(Component)]
pub struct SunLight;

/// Root of the loaded glTF scene
#[derive(Component, Reflect, Default)]
#[reflect(Component)]
pub struct LandscapeModel;

/// The model's scene instance is complete and the camera has framed it
#[derive(Component, Reflect, Default)]
#[reflect(Component)]
pub struct ModelReady;
