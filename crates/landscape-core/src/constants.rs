use glam::Vec3;

// Camera
pub const CAMERA_FOV_DEGREES: f32 = 60.0;
pub const CAMERA_NEAR: f32 = 0.1;
pub const CAMERA_FAR: f32 = 1000.0;
pub const CAMERA_UP: Vec3 = Vec3::Y;
/// Distance from the model center, as a multiple of its largest dimension
pub const FRAMING_DISTANCE_FACTOR: f32 = 2.2;
/// Height of the framing offset relative to its horizontal components
pub const FRAMING_HEIGHT_FACTOR: f32 = 0.8;

// Lights, as unitless intensities (1.0 = full albedo)
pub const AMBIENT_INTENSITY: f32 = 0.4;
pub const SUN_INTENSITY: f32 = 1.2;
pub const SUN_INITIAL_POSITION: Vec3 = Vec3::new(50.0, 60.0, 25.0);

// Sun path
pub const HOURS_PER_DAY: f32 = 24.0;
pub const SUN_ORBIT_RADIUS: f32 = 60.0;
pub const SUN_ELEVATION_AMPLITUDE: f32 = 30.0;
pub const SUN_ELEVATION_OFFSET: f32 = 20.0;

// Temperature tint
pub const COLD_COLOR_HEX: u32 = 0x3399ff;
pub const HOT_COLOR_HEX: u32 = 0xff6600;
pub const COLD_TEMPERATURE: f32 = 0.0;
pub const HOT_TEMPERATURE: f32 = 40.0;
