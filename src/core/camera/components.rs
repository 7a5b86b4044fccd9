use bevy::prelude::*;

#[derive(Component, Reflect, Default)]
#[reflect(Component)]
pub struct LandscapeCamera;

/// Size of the image the renderer draws for the landscape camera.
///
/// Kept in sync with the host surface by `ResizeView`.
#[derive(Component, Reflect, Debug, Clone, Copy, PartialEq)]
#[reflect(Component)]
pub struct RenderOutput {
    /// Logical size in surface units
    pub size: UVec2,
    /// Device pixel ratio applied on top of `size`
    pub pixel_ratio: f32,
}

impl RenderOutput {
    pub fn physical_size(&self) -> UVec2 {
        (self.size.as_vec2() * self.pixel_ratio).round().as_uvec2()
    }
}
