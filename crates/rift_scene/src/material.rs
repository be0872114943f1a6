//! Material definitions.
//!
//! Materials are a closed set of surface models kept as plain data: the
//! scattering behavior lives in the tracer, and the GPU encoder copies
//! these fields straight into its wire records. Scenes own materials in a
//! table; shapes reference them by [`MaterialId`] so one material can be
//! shared by many shapes.

use rift_math::Vec3;

use crate::portal::PortalTransform;

/// Index of a material in a scene's material table.
///
/// Ids are only meaningful for the scene that issued them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MaterialId(pub usize);

/// A surface material.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Material {
    /// Diffuse surface scattering around the surface normal.
    Lambertian { albedo: Vec3 },
    /// Mirror reflection, roughened by `fuzz`.
    Metal { albedo: Vec3, fuzz: f32 },
    /// Clear surface refracting by Snell's law (glass, water, ...).
    Dielectric { refraction_index: f32 },
    /// Non-physical surface: rays hitting it continue from the paired
    /// location defined by the transform.
    Portal(PortalTransform),
}

impl Material {
    /// A diffuse material with the given albedo.
    pub fn lambertian(albedo: Vec3) -> Self {
        Material::Lambertian { albedo }
    }

    /// A reflective material. `fuzz` is clamped to `[0, 1]`.
    pub fn metal(albedo: Vec3, fuzz: f32) -> Self {
        Material::Metal {
            albedo,
            fuzz: fuzz.clamp(0.0, 1.0),
        }
    }

    /// A transparent material with the given refraction index
    /// (e.g. 1.5 for glass).
    pub fn dielectric(refraction_index: f32) -> Self {
        Material::Dielectric { refraction_index }
    }

    /// A portal surface that teleports rays through `transform`.
    pub fn portal(transform: PortalTransform) -> Self {
        Material::Portal(transform)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metal_fuzz_clamped() {
        let shiny = Material::metal(Vec3::ONE, -0.5);
        let rough = Material::metal(Vec3::ONE, 7.0);

        match (shiny, rough) {
            (Material::Metal { fuzz: a, .. }, Material::Metal { fuzz: b, .. }) => {
                assert_eq!(a, 0.0);
                assert_eq!(b, 1.0);
            }
            _ => panic!("expected metal materials"),
        }
    }

    #[test]
    fn test_metal_fuzz_in_range_untouched() {
        match Material::metal(Vec3::ONE, 0.3) {
            Material::Metal { fuzz, .. } => assert_eq!(fuzz, 0.3),
            _ => panic!("expected a metal material"),
        }
    }

    #[test]
    fn test_material_id_equality() {
        assert_eq!(MaterialId(3), MaterialId(3));
        assert_ne!(MaterialId(3), MaterialId(4));
    }
}
