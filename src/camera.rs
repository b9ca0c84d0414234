//! View collaborator
//!
//! The core never renders; it only needs something that can turn a screen
//! position into a world-space ray. `ViewCamera` is that collaborator: a
//! pinhole view matching the scene framing. Orbit damping, zoom limits and
//! the rest of the camera feel live with the renderer, not here.

use glam::{Vec2, Vec3};

use crate::consts::{CAMERA_EYE, CAMERA_FOV_DEG};
use crate::picking::{Ray, RayCaster};

/// Pinhole camera looking at the board center
#[derive(Debug, Clone, Copy)]
pub struct ViewCamera {
    pub eye: Vec3,
    pub target: Vec3,
    /// Vertical field of view in radians
    pub fov_y: f32,
    /// Width / height
    pub aspect: f32,
}

impl ViewCamera {
    /// Default framing: eye above and to the side, looking at the origin
    pub fn new(aspect: f32) -> Self {
        Self {
            eye: Vec3::from_array(CAMERA_EYE),
            target: Vec3::ZERO,
            fov_y: CAMERA_FOV_DEG.to_radians(),
            aspect,
        }
    }

    pub fn set_aspect(&mut self, aspect: f32) {
        self.aspect = aspect;
    }

    /// Orthonormal basis: forward toward the target, right, up
    fn basis(&self) -> (Vec3, Vec3, Vec3) {
        let forward = (self.target - self.eye).normalize();
        let right = forward.cross(Vec3::Y).normalize();
        let up = right.cross(forward);
        (forward, right, up)
    }
}

impl RayCaster for ViewCamera {
    fn screen_ray(&self, ndc: Vec2) -> Ray {
        let (forward, right, up) = self.basis();
        let half_h = (self.fov_y / 2.0).tan();
        let half_w = half_h * self.aspect;
        Ray::new(
            self.eye,
            forward + right * (ndc.x * half_w) + up * (ndc.y * half_h),
        )
    }
}
