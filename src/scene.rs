//! Primitive scene graph.
//!
//! Nodes live in a `hecs` world: every node has a `Center`, `Spin` and
//! `Size`; drawable nodes add a `Shape`; grouping is a `Parent` link.
//! World matrices are composed parent-first on demand.

use crate::components::{Center, Label, Parent, Primitive, Shape, Size, Spin};
use glam::{EulerRot, Mat4, Quat, Vec3};
use hecs::{Entity, World};

/// A shape ready to draw: world matrix plus material
#[derive(Debug, Clone, Copy)]
pub struct DrawItem {
    pub primitive: Primitive,
    pub color: Vec3,
    pub model: Mat4,
}

pub struct Scene {
    world: World,
}

impl Scene {
    pub fn new() -> Self {
        Self {
            world: World::new(),
        }
    }

    fn spawn_node(&mut self, center: Vec3, size: Vec3) -> Entity {
        self.world
            .spawn((Center(center), Spin(Vec3::ZERO), Size(size)))
    }

    fn spawn_shape(&mut self, primitive: Primitive, center: Vec3, size: Vec3, color: Vec3) -> Entity {
        let node = self.spawn_node(center, size);
        let _ = self.world.insert_one(node, Shape { primitive, color });
        node
    }

    /// Sphere with the given diameter
    pub fn sphere(&mut self, center: [f32; 3], diameter: f32, color: Vec3) -> Entity {
        self.spawn_shape(Primitive::Sphere, center.into(), Vec3::splat(diameter), color)
    }

    pub fn cylinder(&mut self, center: [f32; 3], size: [f32; 3], color: Vec3) -> Entity {
        self.spawn_shape(Primitive::Cylinder, center.into(), size.into(), color)
    }

    /// Cone with its apex pointing up
    pub fn cone(&mut self, center: [f32; 3], size: [f32; 3], color: Vec3) -> Entity {
        self.spawn_shape(Primitive::Cone, center.into(), size.into(), color)
    }

    pub fn cube(&mut self, center: [f32; 3], size: [f32; 3], color: Vec3) -> Entity {
        self.spawn_shape(Primitive::Cube, center.into(), size.into(), color)
    }

    /// Empty group at the origin with unit scale
    pub fn group(&mut self) -> Entity {
        self.spawn_node(Vec3::ZERO, Vec3::ONE)
    }

    /// Re-parent `children` under `parent`. Stale handles are skipped.
    pub fn add(&mut self, parent: Entity, children: &[Entity]) {
        for &child in children {
            if self.world.insert_one(child, Parent(parent)).is_err() {
                tracing::warn!("Cannot parent {child:?} under {parent:?}: no such node");
            }
        }
    }

    pub fn label(&mut self, node: Entity, name: &'static str) {
        if self.world.insert_one(node, Label(name)).is_err() {
            tracing::warn!("Cannot label {node:?} as {name}: no such node");
        }
    }

    /// Find a node by label
    pub fn find(&self, name: &str) -> Option<Entity> {
        self.world
            .query::<&Label>()
            .iter()
            .find(|(_, label)| label.0 == name)
            .map(|(id, _)| id)
    }

    pub fn center(&self, node: Entity) -> Option<Vec3> {
        self.world.get::<&Center>(node).ok().map(|c| c.0)
    }

    pub fn spin(&self, node: Entity) -> Option<Vec3> {
        self.world.get::<&Spin>(node).ok().map(|s| s.0)
    }

    pub fn parent(&self, node: Entity) -> Option<Entity> {
        self.world.get::<&Parent>(node).ok().map(|p| p.0)
    }

    pub fn set_center(&mut self, node: Entity, center: Vec3) {
        if let Ok(mut c) = self.world.get::<&mut Center>(node) {
            c.0 = center;
        }
    }

    pub fn set_spin(&mut self, node: Entity, spin: Vec3) {
        if let Ok(mut s) = self.world.get::<&mut Spin>(node) {
            s.0 = spin;
        }
    }

    pub fn set_size(&mut self, node: Entity, size: Vec3) {
        if let Ok(mut s) = self.world.get::<&mut Size>(node) {
            s.0 = size;
        }
    }

    /// Local transform of a node: translate, then spin, then scale
    fn local_matrix(&self, node: Entity) -> Mat4 {
        let Ok(mut query) = self.world.query_one::<(&Center, &Spin, &Size)>(node) else {
            return Mat4::IDENTITY;
        };
        let matrix = match query.get() {
            Some((center, spin, size)) => local_matrix(center.0, spin.0, size.0),
            None => Mat4::IDENTITY,
        };
        matrix
    }

    /// Compose the node's local transform with all of its ancestors
    pub fn world_matrix(&self, node: Entity) -> Mat4 {
        let mut matrix = self.local_matrix(node);
        let mut current = self.parent(node);
        while let Some(parent) = current {
            matrix = self.local_matrix(parent) * matrix;
            current = self.parent(parent);
        }
        matrix
    }

    /// Collect every drawable node with its world matrix
    pub fn collect_drawables(&self) -> Vec<DrawItem> {
        puffin::profile_function!();

        let shapes: Vec<(Entity, Shape)> = self
            .world
            .query::<&Shape>()
            .iter()
            .map(|(id, shape)| (id, *shape))
            .collect();

        shapes
            .into_iter()
            .map(|(id, shape)| DrawItem {
                primitive: shape.primitive,
                color: shape.color,
                model: self.world_matrix(id),
            })
            .collect()
    }
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}

/// Build a local matrix from a node's center, spin and size
pub fn local_matrix(center: Vec3, spin: Vec3, size: Vec3) -> Mat4 {
    let rotation = Quat::from_euler(EulerRot::YXZ, spin.x, spin.y, spin.z);
    Mat4::from_scale_rotation_translation(size, rotation, center)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::FRAC_PI_2;

    fn assert_vec_near(a: Vec3, b: Vec3) {
        assert!((a - b).length() < 1e-5, "{a:?} != {b:?}");
    }

    #[test]
    fn test_child_inherits_parent_translation_and_scale() {
        let mut scene = Scene::new();
        let root = scene.group();
        scene.set_center(root, Vec3::new(0.0, 1.0, 0.0));
        scene.set_size(root, Vec3::splat(2.0));
        let ball = scene.sphere([1.0, 0.0, 0.0], 1.0, Vec3::ONE);
        scene.add(root, &[ball]);

        let origin = scene.world_matrix(ball).transform_point3(Vec3::ZERO);
        assert_vec_near(origin, Vec3::new(2.0, 1.0, 0.0));
    }

    #[test]
    fn test_stale_child_is_skipped() {
        let mut scene = Scene::new();
        let root = scene.group();
        let gone = scene.sphere([0.0, 0.0, 0.0], 1.0, Vec3::ONE);
        let kept = scene.sphere([1.0, 0.0, 0.0], 1.0, Vec3::ONE);
        scene.world.despawn(gone).unwrap();

        scene.add(root, &[gone, kept]);
        scene.label(gone, "gone");

        assert_eq!(scene.parent(kept), Some(root));
        assert_eq!(scene.parent(gone), None);
        assert_eq!(scene.find("gone"), None);
    }

    #[test]
    fn test_yaw_turns_about_vertical() {
        let mut scene = Scene::new();
        let group = scene.group();
        scene.set_spin(group, Vec3::new(FRAC_PI_2, 0.0, 0.0));
        let cube = scene.cube([0.0, 0.0, 1.0], [1.0, 1.0, 1.0], Vec3::ONE);
        scene.add(group, &[cube]);

        // +Z rotated a quarter turn about +Y lands on +X
        let p = scene.world_matrix(cube).transform_point3(Vec3::ZERO);
        assert_vec_near(p, Vec3::new(1.0, 0.0, 0.0));
    }

    #[test]
    fn test_find_by_label() {
        let mut scene = Scene::new();
        let leg = scene.group();
        scene.label(leg, "left_leg");
        assert_eq!(scene.find("left_leg"), Some(leg));
        assert_eq!(scene.find("right_leg"), None);
    }

    #[test]
    fn test_only_shapes_are_drawn() {
        let mut scene = Scene::new();
        let group = scene.group();
        let a = scene.cone([0.0, 0.0, 0.0], [1.0, 1.0, 1.0], Vec3::ONE);
        let b = scene.cylinder([0.0, 1.0, 0.0], [1.0, 1.0, 1.0], Vec3::ONE);
        scene.add(group, &[a, b]);

        let drawables = scene.collect_drawables();
        assert_eq!(drawables.len(), 2);
    }

    #[test]
    fn test_setters_update_components() {
        let mut scene = Scene::new();
        let node = scene.group();
        scene.set_center(node, Vec3::new(1.0, 2.0, 3.0));
        scene.set_spin(node, Vec3::new(0.5, 0.0, 0.0));
        assert_eq!(scene.center(node), Some(Vec3::new(1.0, 2.0, 3.0)));
        assert_eq!(scene.spin(node), Some(Vec3::new(0.5, 0.0, 0.0)));
    }
}
