pub mod config;
pub mod constants;
pub mod framing;
pub mod sun;
pub mod tint;

pub use config::{ConfigError, LandscapeSettings, ViewerConfig, WindowConfig};
pub use framing::{Bounds, CameraPose};
