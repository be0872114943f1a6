//! Hit records and the intersection protocol.

use rift_math::{Interval, Ray, Vec3};
use rift_scene::{MaterialId, Scene, Shape};

/// Information about a ray-surface intersection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HitRecord {
    /// The intersection point.
    pub point: Vec3,
    /// Surface normal at the hit, always facing against the ray.
    pub normal: Vec3,
    /// Ray parameter of the hit.
    pub t: f32,
    /// True if the ray hit the side the geometric normal points out of.
    pub front_face: bool,
    /// Material table entry to shade with.
    pub material: MaterialId,
}

impl HitRecord {
    /// Build a record from the geometric outward normal, flipping it to
    /// oppose the ray and remembering which side was hit.
    pub fn new(ray: &Ray, outward_normal: Vec3, t: f32, material: MaterialId) -> Self {
        let front_face = ray.direction().dot(outward_normal) < 0.0;
        let normal = if front_face {
            outward_normal
        } else {
            -outward_normal
        };

        Self {
            point: ray.at(t),
            normal,
            t,
            front_face,
            material,
        }
    }
}

/// Anything a ray can intersect.
pub trait Hittable {
    /// The nearest intersection whose ray parameter lies strictly inside
    /// `ray_t`, or `None` if the ray misses.
    fn hit(&self, ray: &Ray, ray_t: Interval) -> Option<HitRecord>;
}

impl Hittable for Shape {
    fn hit(&self, ray: &Ray, ray_t: Interval) -> Option<HitRecord> {
        match self {
            Shape::Sphere(sphere) => sphere.hit(ray, ray_t),
            Shape::Disk(disk) => disk.hit(ray, ray_t),
        }
    }
}

impl Hittable for Scene {
    /// Linear scan over every shape, shrinking the search window to the
    /// closest hit found so far.
    fn hit(&self, ray: &Ray, ray_t: Interval) -> Option<HitRecord> {
        let mut closest = ray_t.max;
        let mut nearest = None;

        for shape in self.shapes() {
            if let Some(rec) = shape.hit(ray, Interval::new(ray_t.min, closest)) {
                closest = rec.t;
                nearest = Some(rec);
            }
        }

        nearest
    }
}
