//! Orbiting camera
//!
//! The camera circles the Z axis at a fixed radius and height while always
//! looking at the newest trajectory point. Its placement is a pure function
//! of the orbit angle; the only state carried between frames is the angle.

use lorenz_math::{mat4, Mat4, Vec3};

/// Camera circling the attractor, always with a perspective projection
#[derive(Clone, Debug)]
pub struct OrbitCamera {
    /// Distance from the Z axis
    pub radius: f32,
    /// Fixed Z coordinate of the camera
    pub height: f32,
    /// Radians added to the angle each frame
    pub angle_step: f32,
    /// Up direction
    pub up: Vec3,
    /// Vertical field of view in degrees
    pub fovy: f32,
    pub near: f32,
    pub far: f32,
    angle: f32,
}

impl Default for OrbitCamera {
    fn default() -> Self {
        Self::new()
    }
}

impl OrbitCamera {
    /// Camera used by the viewer: r = 60, h = 40, 0.01 rad/frame, 30° FOV
    pub fn new() -> Self {
        Self {
            radius: 60.0,
            height: 40.0,
            angle_step: 0.01,
            up: Vec3::Y,
            fovy: 30.0,
            near: 0.01,
            far: 1000.0,
            angle: 0.0,
        }
    }

    /// Current orbit angle in radians (unbounded)
    pub fn angle(&self) -> f32 {
        self.angle
    }

    /// Set the orbit angle directly
    pub fn set_angle(&mut self, angle: f32) {
        self.angle = angle;
    }

    /// Advance the orbit by one frame
    pub fn advance(&mut self) {
        self.angle += self.angle_step;
    }

    /// Camera position for an arbitrary angle
    pub fn position_at(&self, angle: f32) -> Vec3 {
        Vec3::new(
            self.radius * angle.cos(),
            self.radius * angle.sin(),
            self.height,
        )
    }

    /// Camera position for the current angle
    pub fn position(&self) -> Vec3 {
        self.position_at(self.angle)
    }

    /// Full camera for this frame, aimed at `target`
    pub fn view(&self, target: Vec3) -> CameraView {
        CameraView {
            position: self.position(),
            target,
            up: self.up,
            fovy: self.fovy,
            near: self.near,
            far: self.far,
        }
    }
}

/// Camera placement for a single frame
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CameraView {
    pub position: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub fovy: f32,
    pub near: f32,
    pub far: f32,
}

impl CameraView {
    /// World-to-view matrix
    pub fn view_matrix(&self) -> Mat4 {
        mat4::look_at(self.position, self.target, self.up)
    }

    /// View-to-clip matrix for a surface with the given aspect ratio
    pub fn projection_matrix(&self, aspect: f32) -> Mat4 {
        mat4::perspective(self.fovy.to_radians(), aspect, self.near, self.far)
    }

    /// Combined world-to-clip matrix
    pub fn view_projection(&self, aspect: f32) -> Mat4 {
        mat4::mul(self.projection_matrix(aspect), self.view_matrix())
    }
}
