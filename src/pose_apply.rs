//! Pose application: turns a live `PoseState` into concrete node transforms.
//!
//! The computation is pure (`PoseTransforms::compute`); writing the result
//! onto scene nodes happens behind the `PoseSink` trait so the transition
//! driver never touches the scene directly.

use crate::constants::*;
use crate::pose::PoseState;
use glam::Vec3;

/// Anything that can display a pose state
pub trait PoseSink {
    fn apply(&mut self, state: &PoseState);
}

/// Every transform the applicator writes, in figure space
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PoseTransforms {
    pub left_leg_center: Vec3,
    pub right_leg_center: Vec3,
    pub left_leg_spin: Vec3,
    pub right_leg_spin: Vec3,
    pub left_foot_spin: Vec3,
    pub right_foot_spin: Vec3,
    pub left_arm_spin: Vec3,
    pub right_arm_spin: Vec3,
    pub left_elbow_spin: Vec3,
    pub right_elbow_spin: Vec3,
    pub left_knee_spin: Vec3,
    pub right_knee_spin: Vec3,
}

impl PoseTransforms {
    pub fn compute(state: &PoseState) -> Self {
        let p = &state.params;
        let a = p.turnout.to_radians();
        let half = p.dist / 2.0;

        let derived_left = Vec3::new(
            -LEG_ANCHOR_X - half,
            LEG_ANCHOR_Y,
            p.front * FRONT_OFFSET_SCALE,
        );
        let derived_right = Vec3::new(
            LEG_ANCHOR_X + half,
            LEG_ANCHOR_Y,
            -p.front * FRONT_OFFSET_SCALE,
        );

        let w = state.crossing;
        let left_leg_center = blend_anchor(derived_left, CROSSED_LEFT_ANCHOR, w);
        let right_leg_center = blend_anchor(derived_right, CROSSED_RIGHT_ANCHOR, w);

        let leg_spin = Vec3::new(a, 0.0, 0.0);
        let arm_tilt = (ARM_BASE_TILT_DEG + p.arm_lift).to_radians();
        let elbow = p.elbow_bend.to_radians();
        let knee = p.knee_bend.to_radians();

        Self {
            left_leg_center,
            right_leg_center,
            left_leg_spin: leg_spin,
            right_leg_spin: -leg_spin,
            // Feet carry the same turn as their leg
            left_foot_spin: leg_spin,
            right_foot_spin: -leg_spin,
            left_arm_spin: Vec3::new(0.0, 0.0, arm_tilt),
            right_arm_spin: Vec3::new(0.0, 0.0, -arm_tilt),
            left_elbow_spin: Vec3::new(0.0, 0.0, elbow),
            right_elbow_spin: Vec3::new(0.0, 0.0, -elbow),
            left_knee_spin: Vec3::new(0.0, knee, 0.0),
            right_knee_spin: Vec3::new(0.0, knee, 0.0),
        }
    }
}

/// Exact at both ends: `w == 0` gives `derived`, `w == 1` gives `crossed`
fn blend_anchor(derived: Vec3, crossed: Vec3, w: f32) -> Vec3 {
    if w <= 0.0 {
        derived
    } else if w >= 1.0 {
        crossed
    } else {
        derived * (1.0 - w) + crossed * w
    }
}
