//! UI, window and pointer constants.

/// Default window width
pub const WINDOW_DEFAULT_WIDTH: u32 = 1280;
/// Default window height
pub const WINDOW_DEFAULT_HEIGHT: u32 = 720;

/// Figure yaw per pixel of horizontal drag (radians)
pub const DRAG_SENSITIVITY: f32 = 0.01;

/// Prefix shown before the active pose's name
pub const POSE_NAME_PREFIX: &str = "Pose: ";

/// Address the puffin profiler server listens on when enabled
pub const PROFILER_ADDR: &str = "127.0.0.1:8585";
