//! Camera configuration.
//!
//! [`CameraConfig`] is the plain record a render job carries around (and
//! can serialize as JSON); the derived basis vectors and pixel grid live
//! in the tracer's camera, built from this record once per render.

use rift_math::Vec3;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors from camera configuration validation.
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum CameraError {
    #[error("image width must be at least 1 pixel")]
    InvalidImageWidth,

    #[error("aspect ratio must be positive and finite, got {0}")]
    InvalidAspectRatio(f32),

    #[error("samples per pixel must be at least 1")]
    InvalidSamplesPerPixel,

    #[error("max bounce depth must be at least 1")]
    InvalidMaxDepth,

    #[error("vertical field of view must be in (0, 180) degrees, got {0}")]
    InvalidFov(f32),

    #[error("defocus angle must be in [0, 180) degrees, got {0}")]
    InvalidDefocusAngle(f32),

    #[error("focus distance must be positive and finite, got {0}")]
    InvalidFocusDistance(f32),

    #[error("camera field {0} must be finite")]
    NonFinite(&'static str),

    #[error("look_from and look_at must be distinct points")]
    DegenerateView,

    #[error("vup must not be parallel to the viewing direction")]
    DegenerateUp,
}

pub type CameraResult<T> = Result<T, CameraError>;

/// Full camera description for a render.
///
/// Everything the renderer needs to build its ray generator: image
/// geometry, sampling controls, and the view/lens parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CameraConfig {
    /// Target width / height ratio. The realized ratio differs slightly
    /// because pixel counts are integers.
    pub aspect_ratio: f32,

    /// Rendered image width in pixels.
    pub image_width: u32,

    /// Monte-Carlo samples per pixel.
    pub samples_per_pixel: u32,

    /// Maximum number of scattering bounces per sample.
    pub max_depth: u32,

    /// Vertical field of view in degrees.
    pub vfov: f32,

    /// Eye position.
    pub look_from: Vec3,

    /// Point the camera looks at.
    pub look_at: Vec3,

    /// Up direction hint for the camera frame.
    pub vup: Vec3,

    /// Lens cone angle in degrees; 0 disables defocus blur.
    pub defocus_angle: f32,

    /// Distance from the eye to the plane of perfect focus.
    pub focus_dist: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            aspect_ratio: 16.0 / 9.0,
            image_width: 400,
            samples_per_pixel: 10,
            max_depth: 50,
            vfov: 90.0,
            look_from: Vec3::ZERO,
            look_at: Vec3::new(0.0, 0.0, -1.0),
            vup: Vec3::new(0.0, 1.0, 0.0),
            defocus_angle: 0.0,
            focus_dist: 1.0,
        }
    }
}

impl CameraConfig {
    /// Image height implied by the width and aspect ratio, never below 1.
    pub fn image_height(&self) -> u32 {
        ((self.image_width as f32 / self.aspect_ratio) as u32).max(1)
    }

    /// Check every field is usable before a camera is derived from it.
    pub fn validate(&self) -> CameraResult<()> {
        if self.image_width == 0 {
            return Err(CameraError::InvalidImageWidth);
        }
        if !self.aspect_ratio.is_finite() || self.aspect_ratio <= 0.0 {
            return Err(CameraError::InvalidAspectRatio(self.aspect_ratio));
        }
        if self.samples_per_pixel == 0 {
            return Err(CameraError::InvalidSamplesPerPixel);
        }
        if self.max_depth == 0 {
            return Err(CameraError::InvalidMaxDepth);
        }
        if !self.vfov.is_finite() || self.vfov <= 0.0 || self.vfov >= 180.0 {
            return Err(CameraError::InvalidFov(self.vfov));
        }
        if !self.defocus_angle.is_finite() || !(0.0..180.0).contains(&self.defocus_angle) {
            return Err(CameraError::InvalidDefocusAngle(self.defocus_angle));
        }
        if !self.focus_dist.is_finite() || self.focus_dist <= 0.0 {
            return Err(CameraError::InvalidFocusDistance(self.focus_dist));
        }
        if !self.look_from.is_finite() {
            return Err(CameraError::NonFinite("look_from"));
        }
        if !self.look_at.is_finite() {
            return Err(CameraError::NonFinite("look_at"));
        }
        if !self.vup.is_finite() {
            return Err(CameraError::NonFinite("vup"));
        }

        let view = self.look_from - self.look_at;
        if view.length_squared() < 1e-12 {
            return Err(CameraError::DegenerateView);
        }
        if self.vup.cross(view).length_squared() < 1e-12 {
            return Err(CameraError::DegenerateUp);
        }

        Ok(())
    }
}
