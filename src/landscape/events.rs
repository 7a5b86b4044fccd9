use bevy::prelude::*;

/// The host surface changed size; re-read it and adjust camera and renderer
#[derive(Message, Debug, Clone, Copy, Default)]
pub struct ResizeView;

#[derive(Message, Debug, Clone, Copy)]
pub struct SetTime {
    /// Hours on a 24-hour clock; other values wrap around
    pub hours: f32,
}

#[derive(Message, Debug, Clone, Copy)]
pub struct SetTemperature {
    pub celsius: f32,
}

#[derive(Message, Debug, Clone)]
pub struct SetWeather {
    pub label: String,
}

/// Stop the view: despawn camera, lights and model and ignore further setters
#[derive(Message, Debug, Clone, Copy, Default)]
pub struct TeardownView;

#[derive(Message, Debug, Clone)]
pub struct ModelLoaded {
    pub entity: Entity,
}

/// Diagnostic channel for asset load failures
#[derive(Message, Debug, Clone)]
pub struct ModelLoadFailed {
    pub url: String,
    pub reason: String,
}
