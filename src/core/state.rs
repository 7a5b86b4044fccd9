use bevy::prelude::States;

/// Lifecycle of the landscape view
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, Hash, States)]
pub enum LandscapeState {
    #[default]
    Active,
    // camera, lights and model are gone; setters are ignored from here on
    TornDown,
}
