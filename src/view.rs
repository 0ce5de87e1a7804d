use glam::{Mat4, Vec3};
use serde::{Deserialize, Serialize};

/// Lower bound for the vertical field of view, in degrees.
pub const FOV_MIN: f32 = 15.0;
/// Upper bound for the vertical field of view, in degrees.
pub const FOV_MAX: f32 = 120.0;
/// Lower bound for the projection aspect ratio.
pub const ASPECT_MIN: f32 = 0.1;
/// Floor for the near clip plane distance.
pub const NEAR_MIN: f32 = 1e-4;
/// The far plane is kept at least this many times the near plane away.
pub const FAR_NEAR_RATIO: f32 = 10.0;

/// Viewing parameters for the perspective camera.
///
/// The camera always looks from `eye` toward the world origin with a fixed
/// up vector. One instance is owned by the application state and handed by
/// reference to the input controller and the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViewState {
    pub eye: Vec3,
    /// Vertical field of view in degrees.
    pub fov_y: f32,
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            eye: Vec3::new(7.0, 5.0, 7.0),
            fov_y: 45.0,
            aspect: 1.0,
            near: 1.0,
            far: 100.0,
        }
    }
}

impl ViewState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Restores the viewing invariants after a field mutation.
    ///
    /// The near floor is applied before the far check: the far plane's
    /// minimum is relative to the already-clamped near value.
    pub fn clamp(&mut self) {
        self.fov_y = self.fov_y.clamp(FOV_MIN, FOV_MAX);
        self.aspect = self.aspect.max(ASPECT_MIN);
        self.near = self.near.max(NEAR_MIN);
        self.far = self.far.max(self.near * FAR_NEAR_RATIO);
    }

    /// Perspective projection derived from the current parameters.
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fov_y.to_radians(), self.aspect, self.near, self.far)
    }

    /// Look-at transform from the eye toward the origin.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, Vec3::ZERO, Vec3::Y)
    }

    /// Combined projection * view matrix consumed by the renderer.
    pub fn view_proj(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }

    /// Recomputes the aspect ratio for a resized viewport.
    ///
    /// A zero height is floored to one pixel so the division is always
    /// defined.
    pub fn set_viewport(&mut self, width: u32, height: u32) {
        self.aspect = width as f32 / height.max(1) as f32;
        self.clamp();
    }
}
