//! Ray-sphere intersection.

use rift_math::{Interval, Ray};
use rift_scene::Sphere;

use crate::hittable::{HitRecord, Hittable};

impl Hittable for Sphere {
    fn hit(&self, ray: &Ray, ray_t: Interval) -> Option<HitRecord> {
        let oc = self.center - ray.origin();
        let a = ray.direction().length_squared();
        let h = ray.direction().dot(oc);
        let c = oc.length_squared() - self.radius * self.radius;

        let discriminant = h * h - a * c;
        if discriminant < 0.0 {
            return None;
        }
        let sqrtd = discriminant.sqrt();

        // Nearest root inside the window, trying the far one if the near
        // root falls outside.
        let mut root = (h - sqrtd) / a;
        if !ray_t.surrounds(root) {
            root = (h + sqrtd) / a;
            if !ray_t.surrounds(root) {
                return None;
            }
        }

        let outward_normal = (ray.at(root) - self.center) / self.radius;
        Some(HitRecord::new(ray, outward_normal, root, self.material))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rift_math::Vec3;
    use rift_scene::MaterialId;

    fn unit_sphere_at(center: Vec3) -> Sphere {
        Sphere::new(center, 1.0, MaterialId(0)).unwrap()
    }

    #[test]
    fn test_direct_hit() {
        let sphere = unit_sphere_at(Vec3::new(0.0, 0.0, -5.0));
        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, 0.0, -1.0));

        let rec = sphere
            .hit(&ray, Interval::new(0.001, f32::INFINITY))
            .expect("ray aimed at the center should hit");

        assert!((rec.t - 4.0).abs() < 1e-4);
        assert!(rec.front_face);
        assert!((rec.normal - Vec3::Z).length() < 1e-4);
    }

    #[test]
    fn test_miss() {
        let sphere = unit_sphere_at(Vec3::new(0.0, 0.0, -5.0));
        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, 1.0, 0.0));

        assert!(sphere.hit(&ray, Interval::new(0.001, f32::INFINITY)).is_none());
    }

    #[test]
    fn test_hit_from_inside() {
        let sphere = unit_sphere_at(Vec3::ZERO);
        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, 0.0, -1.0));

        let rec = sphere
            .hit(&ray, Interval::new(0.001, f32::INFINITY))
            .expect("ray from the center should exit through the shell");

        assert!((rec.t - 1.0).abs() < 1e-4);
        assert!(!rec.front_face);
        // Normal is flipped to face back along the ray.
        assert!((rec.normal - Vec3::Z).length() < 1e-4);
    }

    #[test]
    fn test_hit_point_on_surface() {
        let center = Vec3::new(0.5, -0.2, -4.0);
        let sphere = unit_sphere_at(center);
        let ray = Ray::new(Vec3::new(0.1, 0.3, 1.0), Vec3::new(0.1, -0.1, -1.0));

        if let Some(rec) = sphere.hit(&ray, Interval::new(0.001, f32::INFINITY)) {
            let distance = (rec.point - center).length();
            assert!((distance - 1.0).abs() < 1e-4);
        } else {
            panic!("angled ray should graze the sphere");
        }
    }

    #[test]
    fn test_window_excludes_hit() {
        let sphere = unit_sphere_at(Vec3::new(0.0, 0.0, -5.0));
        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, 0.0, -1.0));

        // Both roots (t=4, t=6) sit beyond the window.
        assert!(sphere.hit(&ray, Interval::new(0.001, 3.0)).is_none());
    }
}
