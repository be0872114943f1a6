//! Geometric primitives.

use rift_math::Vec3;
use thiserror::Error;

use crate::material::MaterialId;

/// Errors from shape construction.
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum ShapeError {
    #[error("shape radius must be positive and finite, got {0}")]
    InvalidRadius(f32),
}

pub type ShapeResult<T> = Result<T, ShapeError>;

fn check_radius(radius: f32) -> ShapeResult<f32> {
    if !radius.is_finite() || radius <= 0.0 {
        return Err(ShapeError::InvalidRadius(radius));
    }
    Ok(radius)
}

/// A sphere defined by center and radius.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sphere {
    pub center: Vec3,
    pub radius: f32,
    pub material: MaterialId,
}

impl Sphere {
    /// Create a sphere. Fails on a non-positive or non-finite radius.
    pub fn new(center: Vec3, radius: f32, material: MaterialId) -> ShapeResult<Self> {
        Ok(Self {
            center,
            radius: check_radius(radius)?,
            material,
        })
    }
}

/// A flat circular disk, visible from one side only.
///
/// The disk lies in the plane through `center` perpendicular to `normal`.
/// Which side is visible is decided by the intersection routine from the
/// ray origin's position relative to that plane.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Disk {
    pub center: Vec3,
    pub normal: Vec3,
    pub radius: f32,
    pub material: MaterialId,
}

impl Disk {
    /// Create a disk. Fails on a non-positive or non-finite radius.
    pub fn new(center: Vec3, normal: Vec3, radius: f32, material: MaterialId) -> ShapeResult<Self> {
        Ok(Self {
            center,
            normal,
            radius: check_radius(radius)?,
            material,
        })
    }
}

/// Any geometry the tracer can intersect.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shape {
    Sphere(Sphere),
    Disk(Disk),
}

impl Shape {
    /// The material table entry this shape is shaded with.
    pub fn material(&self) -> MaterialId {
        match self {
            Shape::Sphere(sphere) => sphere.material,
            Shape::Disk(disk) => disk.material,
        }
    }
}
