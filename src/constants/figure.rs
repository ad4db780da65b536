//! Figure layout and pose geometry constants.

use glam::Vec3;

/// Uniform scale of the whole figure
pub const FIGURE_SCALE: f32 = 2.2;
/// Offset of the figure's root above the floor
pub const FIGURE_ROOT: Vec3 = Vec3::new(0.0, 0.2, 0.0);

/// Hip joint x offset from the body's midline
pub const LEG_ANCHOR_X: f32 = 0.25;
/// Hip joint height in figure space
pub const LEG_ANCHOR_Y: f32 = 0.9;
/// How far each foot moves per unit of `front`
pub const FRONT_OFFSET_SCALE: f32 = 0.5;

/// Hand-authored hip anchors of the crossed (fifth) position
pub const CROSSED_LEFT_ANCHOR: Vec3 = Vec3::new(-0.1, 0.9, 0.42);
pub const CROSSED_RIGHT_ANCHOR: Vec3 = Vec3::new(0.1, 0.9, -0.42);

/// Resting arm tilt before any pose lift is added (degrees)
pub const ARM_BASE_TILT_DEG: f32 = 25.0;

/// Figure colours (CSS named colours, linear 0-1)
pub mod colors {
    use glam::Vec3;

    pub const WHITE: Vec3 = Vec3::new(1.0, 1.0, 1.0);
    pub const WHITESMOKE: Vec3 = Vec3::new(0.961, 0.961, 0.961);
    pub const MISTYROSE: Vec3 = Vec3::new(1.0, 0.894, 0.882);
    pub const PINK: Vec3 = Vec3::new(1.0, 0.753, 0.796);
    pub const GAINSBORO: Vec3 = Vec3::new(0.863, 0.863, 0.863);
    pub const LINEN: Vec3 = Vec3::new(0.980, 0.941, 0.902);
}
