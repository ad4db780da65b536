//! Camera-related constants.

/// Distance from the orbit target to the eye
pub const CAMERA_DISTANCE: f32 = 16.0;
/// Elevation of the eye above the horizon (degrees)
pub const CAMERA_ELEVATION_DEG: f32 = 20.0;
/// Height the camera looks at (roughly the figure's waist)
pub const CAMERA_TARGET_HEIGHT: f32 = 4.2;
/// Vertical field of view (degrees)
pub const CAMERA_FOV_DEG: f32 = 40.0;
pub const CAMERA_NEAR: f32 = 0.1;
pub const CAMERA_FAR: f32 = 100.0;
