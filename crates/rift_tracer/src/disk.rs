//! Ray-disk intersection.
//!
//! Disks are one-sided: only rays starting on the far side of the plane,
//! the side the normal points away from, can hit.

use rift_math::{Interval, Ray};
use rift_scene::Disk;

use crate::hittable::{HitRecord, Hittable};

/// Hits whose point drifts further than this from the disk plane are
/// treated as misses.
const PLANE_EPSILON: f32 = 1e-3;

impl Hittable for Disk {
    fn hit(&self, ray: &Ray, ray_t: Interval) -> Option<HitRecord> {
        let signed_dist = (self.center - ray.origin()).dot(self.normal);
        if signed_dist <= 0.0 {
            // Origin is on the invisible side of the plane.
            return None;
        }

        let root = (signed_dist / ray.direction().dot(self.normal)).abs();
        if !ray_t.surrounds(root) {
            return None;
        }

        let point = ray.at(root);

        // The abs above can fabricate a positive parameter for rays moving
        // away from the plane; those land off-plane and are rejected here.
        if (point - self.center).dot(self.normal).abs() > PLANE_EPSILON {
            return None;
        }

        if point.distance(self.center) > self.radius {
            return None;
        }

        Some(HitRecord::new(ray, self.normal, root, self.material))
    }
}
