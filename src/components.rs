use glam::Vec3;
use hecs::Entity;

/// Center component - position relative to the parent node
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Center(pub Vec3);

/// Spin component - rotation in radians relative to the parent node.
///
/// Components are (yaw about Y, pitch about X, tilt about Z), applied in that
/// order, so `Spin(Vec3::new(a, 0.0, 0.0))` turns a node about the vertical.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spin(pub Vec3);

/// Size component - full extents of a primitive, or the scale of a group
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Size(pub Vec3);

/// Primitive mesh kinds. Each unit mesh fits the [-0.5, 0.5] cube.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Primitive {
    Sphere,
    Cylinder,
    Cone,
    Cube,
}

impl Primitive {
    pub const ALL: [Primitive; 4] = [
        Primitive::Sphere,
        Primitive::Cylinder,
        Primitive::Cone,
        Primitive::Cube,
    ];
}

/// Shape component - present on drawable nodes only (groups have none)
#[derive(Debug, Clone, Copy)]
pub struct Shape {
    pub primitive: Primitive,
    pub color: Vec3,
}

/// Parent component - the group this node was added to
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Parent(pub Entity);

/// Label component - lets startup code find nodes by name
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Label(pub &'static str);
