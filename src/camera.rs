use crate::constants::*;
use glam::{Mat4, Vec3};

/// Fixed orbit camera looking at the figure from slightly above
pub struct Camera {
    pub target: Vec3,
    pub distance: f32,
    /// Elevation above the horizon (radians)
    pub elevation: f32,
    pub viewport_width: f32,
    pub viewport_height: f32,
}

impl Camera {
    pub fn new(viewport_width: f32, viewport_height: f32) -> Self {
        Self {
            target: Vec3::new(0.0, CAMERA_TARGET_HEIGHT, 0.0),
            distance: CAMERA_DISTANCE,
            elevation: CAMERA_ELEVATION_DEG.to_radians(),
            viewport_width,
            viewport_height,
        }
    }

    pub fn resize(&mut self, width: f32, height: f32) {
        self.viewport_width = width;
        self.viewport_height = height;
    }

    pub fn eye(&self) -> Vec3 {
        let horizontal = self.distance * self.elevation.cos();
        let vertical = self.distance * self.elevation.sin();
        self.target + Vec3::new(0.0, vertical, horizontal)
    }

    pub fn aspect(&self) -> f32 {
        if self.viewport_height <= 0.0 {
            1.0
        } else {
            self.viewport_width / self.viewport_height
        }
    }

    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh_gl(
            CAMERA_FOV_DEG.to_radians(),
            self.aspect(),
            CAMERA_NEAR,
            CAMERA_FAR,
        )
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye(), self.target, Vec3::Y)
    }

    pub fn view_projection(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }
}
