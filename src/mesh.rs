//! Unit meshes for the scene primitives.
//!
//! Every mesh fits the [-0.5, 0.5] cube so a node's `Size` is its extents.
//! Vertices are interleaved position + normal, drawn as plain triangles.

use crate::components::Primitive;
use glam::Vec3;
use std::f32::consts::{PI, TAU};

const SEGMENTS: u32 = 24;
const RINGS: u32 = 12;

/// Interleaved vertex: position then normal
#[derive(Debug, Clone, Copy, PartialEq)]
#[repr(C)]
pub struct Vertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
}

impl Vertex {
    fn new(position: Vec3, normal: Vec3) -> Self {
        Self {
            position: position.into(),
            normal: normal.normalize_or_zero().into(),
        }
    }
}

pub fn build(primitive: Primitive) -> Vec<Vertex> {
    match primitive {
        Primitive::Sphere => sphere(),
        Primitive::Cylinder => cylinder(),
        Primitive::Cone => cone(),
        Primitive::Cube => cube(),
    }
}

fn ring_point(i: u32, radius: f32, y: f32) -> Vec3 {
    let angle = TAU * i as f32 / SEGMENTS as f32;
    Vec3::new(radius * angle.cos(), y, radius * angle.sin())
}

fn push_quad(out: &mut Vec<Vertex>, a: Vertex, b: Vertex, c: Vertex, d: Vertex) {
    out.extend_from_slice(&[a, b, c, a, c, d]);
}

fn sphere() -> Vec<Vertex> {
    let mut out = Vec::new();
    let point = |ring: u32, seg: u32| {
        let theta = PI * ring as f32 / RINGS as f32;
        let phi = TAU * seg as f32 / SEGMENTS as f32;
        let n = Vec3::new(theta.sin() * phi.cos(), theta.cos(), theta.sin() * phi.sin());
        Vertex::new(n * 0.5, n)
    };
    for ring in 0..RINGS {
        for seg in 0..SEGMENTS {
            push_quad(
                &mut out,
                point(ring, seg),
                point(ring, seg + 1),
                point(ring + 1, seg + 1),
                point(ring + 1, seg),
            );
        }
    }
    out
}

/// Flat disc at height `y` facing `normal_y`
fn cap(out: &mut Vec<Vertex>, y: f32, normal_y: f32) {
    let normal = Vec3::new(0.0, normal_y, 0.0);
    let center = Vertex::new(Vec3::new(0.0, y, 0.0), normal);
    for seg in 0..SEGMENTS {
        out.extend_from_slice(&[
            center,
            Vertex::new(ring_point(seg, 0.5, y), normal),
            Vertex::new(ring_point(seg + 1, 0.5, y), normal),
        ]);
    }
}

fn cylinder() -> Vec<Vertex> {
    let mut out = Vec::new();
    for seg in 0..SEGMENTS {
        let n0 = ring_point(seg, 1.0, 0.0);
        let n1 = ring_point(seg + 1, 1.0, 0.0);
        push_quad(
            &mut out,
            Vertex::new(ring_point(seg, 0.5, -0.5), n0),
            Vertex::new(ring_point(seg + 1, 0.5, -0.5), n1),
            Vertex::new(ring_point(seg + 1, 0.5, 0.5), n1),
            Vertex::new(ring_point(seg, 0.5, 0.5), n0),
        );
    }
    cap(&mut out, 0.5, 1.0);
    cap(&mut out, -0.5, -1.0);
    out
}

fn cone() -> Vec<Vertex> {
    let mut out = Vec::new();
    let apex = Vec3::new(0.0, 0.5, 0.0);
    for seg in 0..SEGMENTS {
        // Side normal tilts up by the slope (radius 0.5 over height 1)
        let n0 = ring_point(seg, 1.0, 0.5);
        let n1 = ring_point(seg + 1, 1.0, 0.5);
        let n_mid = (n0 + n1) * 0.5;
        out.extend_from_slice(&[
            Vertex::new(ring_point(seg, 0.5, -0.5), n0),
            Vertex::new(apex, n_mid),
            Vertex::new(ring_point(seg + 1, 0.5, -0.5), n1),
        ]);
    }
    cap(&mut out, -0.5, -1.0);
    out
}

fn cube() -> Vec<Vertex> {
    let mut out = Vec::new();
    let faces = [Vec3::X, Vec3::NEG_X, Vec3::Y, Vec3::NEG_Y, Vec3::Z, Vec3::NEG_Z];
    for normal in faces {
        // Two axes spanning the face
        let u = if normal.y.abs() > 0.5 { Vec3::X } else { Vec3::Y };
        let v = normal.cross(u);
        let c = normal * 0.5;
        push_quad(
            &mut out,
            Vertex::new(c - u * 0.5 - v * 0.5, normal),
            Vertex::new(c + u * 0.5 - v * 0.5, normal),
            Vertex::new(c + u * 0.5 + v * 0.5, normal),
            Vertex::new(c - u * 0.5 + v * 0.5, normal),
        );
    }
    out
}
