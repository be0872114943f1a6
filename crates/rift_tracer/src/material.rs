//! Scattering laws for the material table.

use rand::RngCore;
use rift_math::{Ray, Vec3};
use rift_scene::{Material, PortalTransform};

use crate::hittable::HitRecord;
use crate::sampling::{gen_f32, random_unit_vector};

/// RGB color with linear components.
pub type Color = Vec3;

/// Outcome of a scattering event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScatterResult {
    /// The continuation ray.
    pub scattered: Ray,
    /// Per-channel throughput multiplier.
    pub attenuation: Color,
}

/// Materials respond to a hit by either spawning a continuation ray or
/// absorbing the path.
pub trait Scatter {
    fn scatter(
        &self,
        ray_in: &Ray,
        rec: &HitRecord,
        rng: &mut dyn RngCore,
    ) -> Option<ScatterResult>;
}

impl Scatter for Material {
    fn scatter(
        &self,
        ray_in: &Ray,
        rec: &HitRecord,
        rng: &mut dyn RngCore,
    ) -> Option<ScatterResult> {
        match self {
            Material::Lambertian { albedo } => scatter_lambertian(*albedo, rec, rng),
            Material::Metal { albedo, fuzz } => scatter_metal(*albedo, *fuzz, ray_in, rec, rng),
            Material::Dielectric { refraction_index } => {
                scatter_dielectric(*refraction_index, ray_in, rec, rng)
            }
            Material::Portal(transform) => Some(scatter_portal(transform, ray_in, rec)),
        }
    }
}

fn scatter_lambertian(
    albedo: Color,
    rec: &HitRecord,
    rng: &mut dyn RngCore,
) -> Option<ScatterResult> {
    let mut scatter_direction = rec.normal + random_unit_vector(rng);

    // Catch the degenerate case where the random vector nearly cancels
    // the normal.
    if scatter_direction.length_squared() < 1e-8 {
        scatter_direction = rec.normal;
    }

    Some(ScatterResult {
        scattered: Ray::new(rec.point, scatter_direction),
        attenuation: albedo,
    })
}

fn scatter_metal(
    albedo: Color,
    fuzz: f32,
    ray_in: &Ray,
    rec: &HitRecord,
    rng: &mut dyn RngCore,
) -> Option<ScatterResult> {
    let reflected = reflect(ray_in.direction().normalize(), rec.normal);
    let scattered = reflected + fuzz * random_unit_vector(rng);

    // Fuzz can push the ray below the surface; absorb it there.
    if scattered.dot(rec.normal) <= 0.0 {
        return None;
    }

    Some(ScatterResult {
        scattered: Ray::new(rec.point, scattered),
        attenuation: albedo,
    })
}

fn scatter_dielectric(
    refraction_index: f32,
    ray_in: &Ray,
    rec: &HitRecord,
    rng: &mut dyn RngCore,
) -> Option<ScatterResult> {
    let ri = if rec.front_face {
        1.0 / refraction_index
    } else {
        refraction_index
    };

    let unit_direction = ray_in.direction().normalize();
    let cos_theta = (-unit_direction).dot(rec.normal).min(1.0);
    let sin_theta = (1.0 - cos_theta * cos_theta).sqrt();

    let cannot_refract = ri * sin_theta > 1.0;
    let direction = if cannot_refract || reflectance(cos_theta, ri) > gen_f32(rng) {
        reflect(unit_direction, rec.normal)
    } else {
        refract(unit_direction, rec.normal, ri)
    };

    Some(ScatterResult {
        scattered: Ray::new(rec.point, direction),
        attenuation: Color::ONE,
    })
}

fn scatter_portal(transform: &PortalTransform, ray_in: &Ray, rec: &HitRecord) -> ScatterResult {
    ScatterResult {
        scattered: Ray::new(
            transform.warp_point(rec.point),
            transform.warp_direction(ray_in.direction()),
        ),
        attenuation: Color::ONE,
    }
}

// ====== Helper functions ======

fn reflect(v: Vec3, n: Vec3) -> Vec3 {
    v - 2.0 * v.dot(n) * n
}

fn refract(uv: Vec3, n: Vec3, etai_over_etat: f32) -> Vec3 {
    let cos_theta = (-uv).dot(n).min(1.0);
    let r_out_perp = etai_over_etat * (uv + cos_theta * n);
    let r_out_parallel = -(1.0 - r_out_perp.length_squared()).abs().sqrt() * n;
    r_out_perp + r_out_parallel
}

/// Schlick's approximation for the Fresnel reflectance.
fn reflectance(cosine: f32, refraction_index: f32) -> f32 {
    let mut r0 = (1.0 - refraction_index) / (1.0 + refraction_index);
    r0 = r0 * r0;
    r0 + (1.0 - r0) * (1.0 - cosine).powi(5)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use rift_math::Interval;
    use rift_scene::{MaterialId, Sphere};

    use crate::hittable::Hittable;

    fn hit_unit_sphere(ray: &Ray) -> HitRecord {
        let sphere = Sphere::new(Vec3::ZERO, 1.0, MaterialId(0)).unwrap();
        sphere
            .hit(ray, Interval::new(0.001, f32::INFINITY))
            .expect("test ray must hit the probe sphere")
    }

    #[test]
    fn test_reflect_mirror_law() {
        let incoming = Vec3::new(0.7071, -0.7071, 0.0);
        let reflected = reflect(incoming, Vec3::Y);
        assert!((reflected - Vec3::new(0.7071, 0.7071, 0.0)).length() < 1e-4);
    }

    #[test]
    fn test_reflectance_at_normal_incidence() {
        // cos = 1 collapses Schlick to r0 = ((1-n)/(1+n))^2.
        let r = reflectance(1.0, 1.5);
        assert!((r - 0.04).abs() < 1e-6);
    }

    #[test]
    fn test_lambertian_always_scatters() {
        let material = Material::lambertian(Vec3::new(0.8, 0.4, 0.2));
        let ray = Ray::new(Vec3::new(0.0, 0.0, 2.0), Vec3::new(0.0, 0.0, -1.0));
        let rec = hit_unit_sphere(&ray);
        let mut rng = StdRng::seed_from_u64(11);

        for _ in 0..100 {
            let result = material
                .scatter(&ray, &rec, &mut rng)
                .expect("lambertian never absorbs");
            assert_eq!(result.attenuation, Vec3::new(0.8, 0.4, 0.2));
            // Direction stays in the hemisphere around the normal.
            assert!(result.scattered.direction().dot(rec.normal) >= 0.0);
            assert_eq!(result.scattered.origin(), rec.point);
        }
    }

    #[test]
    fn test_metal_reflects_without_fuzz() {
        let material = Material::metal(Vec3::new(0.9, 0.9, 0.9), 0.0);
        let ray = Ray::new(Vec3::new(0.0, 2.0, 0.0), Vec3::new(0.0, -1.0, 0.0));
        let rec = hit_unit_sphere(&ray);
        let mut rng = StdRng::seed_from_u64(3);

        let result = material.scatter(&ray, &rec, &mut rng).expect("head-on reflection");
        assert!((result.scattered.direction() - Vec3::new(0.0, 1.0, 0.0)).length() < 1e-4);
    }

    #[test]
    fn test_fuzzy_metal_absorbs_grazing_rays() {
        let material = Material::metal(Vec3::splat(0.9), 1.0);
        // Grazing hit near the sphere's equator.
        let ray = Ray::new(Vec3::new(-2.0, 0.999, 0.0), Vec3::new(1.0, 0.0, 0.0));
        let rec = hit_unit_sphere(&ray);
        let mut rng = StdRng::seed_from_u64(19);

        let absorbed = (0..200)
            .filter(|_| material.scatter(&ray, &rec, &mut rng).is_none())
            .count();
        assert!(absorbed > 0, "full fuzz at grazing incidence should absorb sometimes");
    }

    #[test]
    fn test_dielectric_total_internal_reflection() {
        let material = Material::dielectric(1.5);
        // Exiting at 60 degrees off the surface normal: 1.5 * sin(60) > 1,
        // so refraction is impossible.
        let direction = Vec3::new(0.866, 0.5, 0.0);
        let ray = Ray::new(Vec3::new(0.0, -1.0, 0.0), direction);
        let rec = HitRecord::new(&ray, Vec3::Y, 2.0, MaterialId(0));
        assert!(!rec.front_face);
        let mut rng = StdRng::seed_from_u64(5);

        let result = material.scatter(&ray, &rec, &mut rng).expect("glass never absorbs");
        let expected = Vec3::new(0.866, -0.5, 0.0);
        assert!((result.scattered.direction() - expected).length() < 1e-3);
        assert_eq!(result.attenuation, Vec3::ONE);
    }

    #[test]
    fn test_dielectric_mostly_refracts_head_on() {
        let material = Material::dielectric(1.5);
        let ray = Ray::new(Vec3::new(0.0, 0.0, 2.0), Vec3::new(0.0, 0.0, -1.0));
        let rec = hit_unit_sphere(&ray);
        let mut rng = StdRng::seed_from_u64(23);

        // At normal incidence reflectance is 0.04, so almost every sample
        // passes straight through.
        let mut refracted = 0;
        for _ in 0..100 {
            let result = material.scatter(&ray, &rec, &mut rng).unwrap();
            if result.scattered.direction().dot(ray.direction()) > 0.0 {
                refracted += 1;
            }
        }
        assert!(refracted >= 80, "refracted {refracted}/100");
    }

    #[test]
    fn test_portal_warps_ray() {
        let transform = PortalTransform::between(
            Vec3::new(5.0, 1.0, 0.0),
            Vec3::NEG_X,
            Vec3::new(0.0, 1.0, -2.0),
            Vec3::Z,
        )
        .unwrap();
        let material = Material::portal(transform);

        let ray = Ray::new(Vec3::new(8.0, 1.0, 0.0), Vec3::new(-1.0, 0.0, 0.0));
        let rec = HitRecord::new(&ray, Vec3::NEG_X, 3.0, MaterialId(0));
        let mut rng = StdRng::seed_from_u64(1);

        let result = material.scatter(&ray, &rec, &mut rng).expect("portals never absorb");
        assert_eq!(result.attenuation, Vec3::ONE);
        // The hit at the source center re-emerges at the destination
        // center, traveling along the destination normal.
        assert!((result.scattered.origin() - Vec3::new(0.0, 1.0, -2.0)).length() < 1e-4);
        assert!((result.scattered.direction() - Vec3::Z).length() < 1e-4);
    }
}
