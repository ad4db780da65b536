//! The ballerina: scene construction and the rig the pose applicator drives.

use crate::constants::colors::*;
use crate::constants::*;
use crate::pose::PoseState;
use crate::pose_apply::{PoseSink, PoseTransforms};
use crate::scene::Scene;
use glam::Vec3;
use hecs::Entity;
use thiserror::Error;

/// Node labels the rig resolves at startup
pub mod labels {
    pub const ROOT: &str = "ballerina";
    pub const LEFT_LEG: &str = "left_leg";
    pub const RIGHT_LEG: &str = "right_leg";
    pub const LEFT_KNEE: &str = "left_knee";
    pub const RIGHT_KNEE: &str = "right_knee";
    pub const LEFT_FOOT: &str = "left_foot";
    pub const RIGHT_FOOT: &str = "right_foot";
    pub const LEFT_ARM: &str = "left_arm";
    pub const RIGHT_ARM: &str = "right_arm";
    pub const LEFT_ELBOW: &str = "left_elbow";
    pub const RIGHT_ELBOW: &str = "right_elbow";
}

#[derive(Error, Debug, PartialEq)]
pub enum RigError {
    #[error("Scene node '{0}' not found")]
    MissingNode(&'static str),
}

/// Build the ballerina into `scene` and return its root group
pub fn build(scene: &mut Scene) -> Entity {
    let root = scene.group();
    scene.label(root, labels::ROOT);
    scene.set_size(root, Vec3::splat(FIGURE_SCALE));
    scene.set_center(root, FIGURE_ROOT);

    // Body
    let torso = scene.cylinder([0.0, 2.2, 0.0], [0.7, 1.4, 0.7], WHITE);
    let head = scene.sphere([0.0, 3.5, 0.0], 0.42, MISTYROSE);
    let tutu = scene.cone([0.0, 1.55, 0.0], [1.4, 0.8, 1.4], PINK);

    let left_arm = build_arm(scene, -0.95, labels::LEFT_ARM, labels::LEFT_ELBOW);
    let right_arm = build_arm(scene, 0.95, labels::RIGHT_ARM, labels::RIGHT_ELBOW);

    let left_leg = build_leg(scene, -LEG_ANCHOR_X, labels::LEFT_LEG, labels::LEFT_KNEE, labels::LEFT_FOOT);
    let right_leg = build_leg(scene, LEG_ANCHOR_X, labels::RIGHT_LEG, labels::RIGHT_KNEE, labels::RIGHT_FOOT);

    scene.add(root, &[torso, head, tutu, left_arm, right_arm, left_leg, right_leg]);
    root
}

/// Arm pivoting about its midpoint, split at the elbow
fn build_arm(scene: &mut Scene, x: f32, arm_label: &'static str, elbow_label: &'static str) -> Entity {
    let arm = scene.group();
    scene.label(arm, arm_label);
    scene.set_center(arm, Vec3::new(x, 2.35, 0.0));

    let upper = scene.cylinder([0.0, 0.2625, 0.0], [0.14, 0.525, 0.14], MISTYROSE);
    let elbow = scene.group();
    scene.label(elbow, elbow_label);
    let forearm = scene.cylinder([0.0, -0.2625, 0.0], [0.13, 0.525, 0.13], MISTYROSE);
    scene.add(elbow, &[forearm]);

    scene.add(arm, &[upper, elbow]);
    arm
}

/// Leg group anchored at the hip; shin and foot hang from the knee
fn build_leg(
    scene: &mut Scene,
    x: f32,
    leg_label: &'static str,
    knee_label: &'static str,
    foot_label: &'static str,
) -> Entity {
    let leg = scene.group();
    scene.label(leg, leg_label);
    scene.set_center(leg, Vec3::new(x, LEG_ANCHOR_Y, 0.0));

    let thigh = scene.cylinder([0.0, 0.9, 0.0], [0.2, 1.0, 0.2], GAINSBORO);

    let knee = scene.group();
    scene.label(knee, knee_label);
    scene.set_center(knee, Vec3::new(0.0, 0.5, 0.0));
    let shin = scene.cylinder([0.0, -0.4, 0.0], [0.16, 0.8, 0.16], GAINSBORO);
    let foot = scene.cube([0.0, -0.8, 0.3], [0.55, 0.15, 1.05], LINEN);
    scene.label(foot, foot_label);
    scene.add(knee, &[shin, foot]);

    scene.add(leg, &[thigh, knee]);
    leg
}

/// Handles to every node the pose applicator writes to
#[derive(Debug, Clone, Copy)]
pub struct PoseRig {
    pub root: Entity,
    pub left_leg: Entity,
    pub right_leg: Entity,
    pub left_knee: Entity,
    pub right_knee: Entity,
    pub left_foot: Entity,
    pub right_foot: Entity,
    pub left_arm: Entity,
    pub right_arm: Entity,
    pub left_elbow: Entity,
    pub right_elbow: Entity,
}

impl PoseRig {
    /// Look up every required node; any missing one aborts the whole rig
    pub fn resolve(scene: &Scene) -> Result<Self, RigError> {
        let find = |name: &'static str| scene.find(name).ok_or(RigError::MissingNode(name));
        Ok(Self {
            root: find(labels::ROOT)?,
            left_leg: find(labels::LEFT_LEG)?,
            right_leg: find(labels::RIGHT_LEG)?,
            left_knee: find(labels::LEFT_KNEE)?,
            right_knee: find(labels::RIGHT_KNEE)?,
            left_foot: find(labels::LEFT_FOOT)?,
            right_foot: find(labels::RIGHT_FOOT)?,
            left_arm: find(labels::LEFT_ARM)?,
            right_arm: find(labels::RIGHT_ARM)?,
            left_elbow: find(labels::LEFT_ELBOW)?,
            right_elbow: find(labels::RIGHT_ELBOW)?,
        })
    }

    pub fn write(&self, scene: &mut Scene, t: &PoseTransforms) {
        scene.set_center(self.left_leg, t.left_leg_center);
        scene.set_center(self.right_leg, t.right_leg_center);
        scene.set_spin(self.left_leg, t.left_leg_spin);
        scene.set_spin(self.right_leg, t.right_leg_spin);
        scene.set_spin(self.left_foot, t.left_foot_spin);
        scene.set_spin(self.right_foot, t.right_foot_spin);
        scene.set_spin(self.left_arm, t.left_arm_spin);
        scene.set_spin(self.right_arm, t.right_arm_spin);
        scene.set_spin(self.left_elbow, t.left_elbow_spin);
        scene.set_spin(self.right_elbow, t.right_elbow_spin);
        scene.set_spin(self.left_knee, t.left_knee_spin);
        scene.set_spin(self.right_knee, t.right_knee_spin);
    }
}

/// The figure's scene together with its rig
pub struct Figure {
    pub scene: Scene,
    pub rig: PoseRig,
}

impl Figure {
    pub fn new() -> Result<Self, RigError> {
        let mut scene = Scene::new();
        build(&mut scene);
        let rig = PoseRig::resolve(&scene)?;
        Ok(Self { scene, rig })
    }

    /// Turn the whole figure about the vertical axis
    pub fn add_yaw(&mut self, radians: f32) {
        let spin = self.scene.spin(self.rig.root).unwrap_or(Vec3::ZERO);
        self.scene
            .set_spin(self.rig.root, Vec3::new(spin.x + radians, spin.y, spin.z));
    }

    pub fn yaw(&self) -> f32 {
        self.scene.spin(self.rig.root).map(|s| s.x).unwrap_or(0.0)
    }
}

impl PoseSink for Figure {
    fn apply(&mut self, state: &PoseState) {
        let transforms = PoseTransforms::compute(state);
        self.rig.write(&mut self.scene, &transforms);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pose::PoseTable;

    #[test]
    fn test_rig_resolves_on_built_figure() {
        let figure = Figure::new().unwrap();
        assert_eq!(figure.scene.parent(figure.rig.left_foot), Some(figure.rig.left_knee));
        assert_eq!(figure.scene.parent(figure.rig.left_knee), Some(figure.rig.left_leg));
        assert_eq!(figure.scene.parent(figure.rig.left_leg), Some(figure.rig.root));
    }

    #[test]
    fn test_missing_node_is_reported() {
        let mut scene = Scene::new();
        let root = scene.group();
        scene.label(root, labels::ROOT);
        assert_eq!(
            PoseRig::resolve(&scene).unwrap_err(),
            RigError::MissingNode(labels::LEFT_LEG)
        );
    }

    #[test]
    fn test_apply_writes_nodes() {
        let mut figure = Figure::new().unwrap();
        let table = PoseTable::builtin().unwrap();
        figure.apply(&table.get(2).unwrap().target_state());

        let left = figure.scene.center(figure.rig.left_leg).unwrap();
        let right = figure.scene.center(figure.rig.right_leg).unwrap();
        assert!((left - Vec3::new(-0.75, 0.9, 0.0)).length() < 1e-5);
        assert!((right - Vec3::new(0.75, 0.9, 0.0)).length() < 1e-5);

        let foot_spin = figure.scene.spin(figure.rig.right_foot).unwrap();
        assert!((foot_spin.x + 45f32.to_radians()).abs() < 1e-6);
    }

    #[test]
    fn test_yaw_accumulates_without_wrapping() {
        let mut figure = Figure::new().unwrap();
        for _ in 0..10 {
            figure.add_yaw(1.0);
        }
        assert!((figure.yaw() - 10.0).abs() < 1e-5);
    }

    #[test]
    fn test_yaw_leaves_pose_nodes_alone() {
        let mut figure = Figure::new().unwrap();
        let before = figure.scene.center(figure.rig.left_leg);
        figure.add_yaw(0.5);
        assert_eq!(figure.scene.center(figure.rig.left_leg), before);
    }
}
