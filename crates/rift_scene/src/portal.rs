//! Portal pairing transforms.
//!
//! A portal is a pair of oriented disks; rays hitting the source disk
//! continue from the destination disk. The mapping is rigid: translate the
//! hit point into the source's local frame, rotate the source normal onto
//! the destination normal, translate into the destination frame. The same
//! three matrices drive CPU scattering and the GPU material record, so
//! they are built in exactly one place.

use rift_math::{Mat4, Vec3, Vec4};
use thiserror::Error;

/// Angle threshold (radians) for the degenerate-rotation fallbacks: below
/// it the normals count as parallel, within it of pi they count as
/// opposite.
const DEGENERATE_ANGLE: f32 = 0.1;

/// Errors from portal construction.
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum PortalError {
    /// No rotation taking the source normal onto the destination normal
    /// could be resolved. Raised instead of letting a NaN-bearing matrix
    /// into the scene.
    #[error("portal rotation is unresolvable between the given normals (angle {angle} rad)")]
    DegenerateRotation { angle: f32 },
}

pub type PortalResult<T> = Result<T, PortalError>;

/// The rigid transform carrying hit points and ray directions from a
/// source portal disk to its destination.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PortalTransform {
    translate_before: Mat4,
    rotation: Mat4,
    translate_after: Mat4,
}

impl PortalTransform {
    /// Build the transform mapping a source disk onto a destination disk.
    ///
    /// The rotation takes the source normal onto the destination normal by
    /// the shortest arc. Two degenerate alignments get explicit handling:
    /// near-parallel normals use the identity, and near-opposite normals
    /// rotate about a fallback axis perpendicular to the source normal
    /// (built from a component permutation, so it is deterministic). Any
    /// rotation that still cannot be resolved is an error; the constructor
    /// never returns a transform containing NaN.
    pub fn between(
        source_center: Vec3,
        source_normal: Vec3,
        destination_center: Vec3,
        destination_normal: Vec3,
    ) -> PortalResult<Self> {
        let translate_before = Mat4::from_translation(-source_center);
        let translate_after = Mat4::from_translation(destination_center);

        let axis = source_normal.cross(destination_normal).normalize();
        let angle = source_normal
            .normalize()
            .dot(destination_normal.normalize())
            .clamp(-1.0, 1.0)
            .acos();

        let mut rotation = Mat4::from_axis_angle(axis, angle);
        if (rotation * Vec4::ONE).is_nan() {
            if angle < DEGENERATE_ANGLE {
                rotation = Mat4::IDENTITY;
            } else if angle > std::f32::consts::PI - DEGENERATE_ANGLE {
                // Any axis perpendicular to the normal serves for a
                // half-turn; permuting components gives a deterministic one.
                let n = source_normal;
                let fallback = n.cross(Vec3::new(n.z, n.x, n.y)).normalize();
                rotation = Mat4::from_axis_angle(fallback, angle);
                if (rotation * Vec4::ONE).is_nan() {
                    return Err(PortalError::DegenerateRotation { angle });
                }
            } else {
                return Err(PortalError::DegenerateRotation { angle });
            }
        }

        Ok(Self {
            translate_before,
            rotation,
            translate_after,
        })
    }

    /// Carry a point on the source disk over to the destination disk.
    pub fn warp_point(&self, point: Vec3) -> Vec3 {
        let local = self.translate_before.transform_point3(point);
        let rotated = self.rotation.transform_vector3(local);
        self.translate_after.transform_point3(rotated)
    }

    /// Carry a direction through the portal. Directions only rotate.
    pub fn warp_direction(&self, direction: Vec3) -> Vec3 {
        self.rotation.transform_vector3(direction)
    }

    /// Translation into the source disk's local frame.
    pub fn translate_before(&self) -> Mat4 {
        self.translate_before
    }

    /// The source-normal-onto-destination-normal rotation.
    pub fn rotation(&self) -> Mat4 {
        self.rotation
    }

    /// Translation out into the destination disk's frame.
    pub fn translate_after(&self) -> Mat4 {
        self.translate_after
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOLERANCE: f32 = 1e-4;

    fn assert_vec3_near(a: Vec3, b: Vec3) {
        assert!(
            (a - b).length() < TOLERANCE,
            "expected {:?} to be near {:?}",
            a,
            b
        );
    }

    #[test]
    fn test_source_center_maps_to_destination_center() {
        let portal = PortalTransform::between(
            Vec3::new(5.0, 1.0, 0.0),
            Vec3::new(-1.0, 0.0, 0.0),
            Vec3::new(0.0, 1.0, -2.0),
            Vec3::new(0.0, 0.0, 1.0),
        )
        .unwrap();

        assert_vec3_near(
            portal.warp_point(Vec3::new(5.0, 1.0, 0.0)),
            Vec3::new(0.0, 1.0, -2.0),
        );
    }

    #[test]
    fn test_source_normal_rotates_onto_destination_normal() {
        let portal = PortalTransform::between(
            Vec3::new(5.0, 1.0, 0.0),
            Vec3::new(-1.0, 0.0, 0.0),
            Vec3::new(0.0, 1.0, -2.0),
            Vec3::new(0.0, 0.0, 1.0),
        )
        .unwrap();

        assert_vec3_near(
            portal.warp_direction(Vec3::new(-1.0, 0.0, 0.0)),
            Vec3::new(0.0, 0.0, 1.0),
        );
    }

    #[test]
    fn test_parallel_normals_use_identity_rotation() {
        let portal = PortalTransform::between(
            Vec3::new(1.0, 2.0, 3.0),
            Vec3::Y,
            Vec3::new(-4.0, 0.0, 7.0),
            Vec3::Y,
        )
        .unwrap();

        assert_eq!(portal.rotation(), Mat4::IDENTITY);
        // Pure translation: offsets from the source center are preserved.
        assert_vec3_near(
            portal.warp_point(Vec3::new(1.5, 2.0, 3.0)),
            Vec3::new(-3.5, 0.0, 7.0),
        );
        assert_vec3_near(portal.warp_direction(Vec3::new(0.3, -0.8, 0.1)), Vec3::new(0.3, -0.8, 0.1));
    }

    #[test]
    fn test_opposite_normals_fall_back_deterministically() {
        let build = || {
            PortalTransform::between(
                Vec3::new(2.0, 0.0, 0.0),
                Vec3::X,
                Vec3::new(-2.0, 0.0, 0.0),
                Vec3::NEG_X,
            )
            .unwrap()
        };
        let portal = build();

        // The half-turn must be fully resolved: no NaN anywhere.
        let warped = portal.warp_point(Vec3::new(2.0, 0.5, 0.0));
        assert!(warped.is_finite());
        assert_vec3_near(portal.warp_direction(Vec3::X), Vec3::NEG_X);
        assert_vec3_near(portal.warp_point(Vec3::new(2.0, 0.0, 0.0)), Vec3::new(-2.0, 0.0, 0.0));

        // And identical on every construction.
        assert_eq!(portal.rotation(), build().rotation());
    }

    #[test]
    fn test_permutation_parallel_normal_is_rejected() {
        // (1,1,1) is parallel to its own component permutation, so the
        // opposite-normals fallback axis degenerates too.
        let n = Vec3::ONE.normalize();
        let result = PortalTransform::between(Vec3::ZERO, n, Vec3::X, -n);

        assert!(matches!(
            result,
            Err(PortalError::DegenerateRotation { .. })
        ));
    }

    #[test]
    fn test_right_angle_portal_round_trip() {
        let source_center = Vec3::new(5.0, 1.0, 0.0);
        let source_normal = Vec3::new(-1.0, 0.0, 0.0);
        let destination_center = Vec3::new(0.0, 1.0, -2.0);
        let destination_normal = Vec3::new(0.0, 0.0, 1.0);

        let forward = PortalTransform::between(
            source_center,
            source_normal,
            destination_center,
            destination_normal,
        )
        .unwrap();
        let backward = PortalTransform::between(
            destination_center,
            destination_normal,
            source_center,
            source_normal,
        )
        .unwrap();

        let on_source = source_center + Vec3::new(0.0, 0.3, 0.4);
        let there = forward.warp_point(on_source);
        let back = backward.warp_point(there);
        assert_vec3_near(back, on_source);
    }
}
