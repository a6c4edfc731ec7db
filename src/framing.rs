//! Camera framing ("focus on scene").

use glam::{Mat4, Vec3};

use crate::scene::BoundingBox;
use crate::settings::CameraSettings;

/// Camera placement produced by framing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraPose {
    pub position: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub fov_degrees: f32,
}

impl CameraPose {
    /// Right-handed view matrix for this pose.
    #[must_use]
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.target, self.up)
    }

    #[must_use]
    pub fn distance(&self) -> f32 {
        self.position.distance(self.target)
    }
}

/// Places the camera on the bounding sphere `(center, radius)`, looking at
/// its center from `settings.view_direction`.
///
/// A non-positive or non-finite radius is treated as `1.0`.
#[must_use]
pub fn focus_on_sphere(center: Vec3, radius: f32, settings: &CameraSettings) -> CameraPose {
    let radius = if radius.is_finite() && radius > 0.0 { radius } else { 1.0 };
    let direction = settings.view_direction().try_normalize().unwrap_or(Vec3::Z);

    CameraPose {
        // Offset from `center`, not from the origin.
        position: center + direction * radius,
        target: center,
        up: Vec3::Y,
        fov_degrees: settings.fov_degrees,
    }
}

/// [`focus_on_sphere`] for the sphere enclosing `bounds`.
#[must_use]
pub fn focus_on_bounds(bounds: &BoundingBox, settings: &CameraSettings) -> CameraPose {
    let (center, radius) = bounds.bounding_sphere();
    focus_on_sphere(center, radius, settings)
}
