use std::f32::consts::FRAC_PI_4;

use glam::{Mat4, Quat, Vec3};

/// A camera: where it sits, where it looks and how much it sees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewingVolume {
    position: Vec3,
    direction: Quat,
    fovy: f32,
    near: f32,
    far: f32,
}

impl ViewingVolume {
    pub fn new() -> Self {
        ViewingVolume {
            position: Vec3::ZERO,
            direction: Quat::IDENTITY,
            fovy: FRAC_PI_4,
            near: 1.0,
            far: 3000.0,
        }
    }

    pub fn set_position(&mut self, position: Vec3) {
        self.position = position;
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    pub fn set_direction(&mut self, direction: Quat) {
        self.direction = direction.normalize();
    }

    pub fn direction(&self) -> Quat {
        self.direction
    }

    /// Turns the camera to face `target`, keeping `up` as the vertical.
    pub fn look_at(&mut self, target: Vec3, up: Vec3) {
        let view = Mat4::look_at_rh(self.position, target, up);
        let (_, rotation, _) = view.inverse().to_scale_rotation_translation();
        self.direction = rotation.normalize();
    }

    pub fn set_fovy(&mut self, fovy: f32) {
        self.fovy = fovy;
    }

    pub fn fovy(&self) -> f32 {
        self.fovy
    }

    pub fn set_clip_planes(&mut self, near: f32, far: f32) {
        self.near = near;
        self.far = far;
    }

    pub fn clip_planes(&self) -> (f32, f32) {
        (self.near, self.far)
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::from_rotation_translation(self.direction, self.position).inverse()
    }

    pub fn projection_matrix(&self, aspect_ratio: f32) -> Mat4 {
        Mat4::perspective_rh(self.fovy, aspect_ratio, self.near, self.far)
    }
}

impl Default for ViewingVolume {
    fn default() -> Self {
        Self::new()
    }
}
