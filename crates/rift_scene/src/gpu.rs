//! GPU backend scene contract.
//!
//! The compute backend consumes a scene as one fixed-layout blob: a shape
//! count, the wire camera, and fixed-capacity shape and material tables.
//! The layout is std140-flavored: `vec3` fields are padded out to 16
//! bytes, matrices are column-major `[[f32; 4]; 4]`, and padding is
//! explicit so every struct is `bytemuck::Pod`. Reordering any field here
//! is a breaking change for the backend; the layout tests pin every
//! offset.

use bytemuck::{Pod, Zeroable};
use thiserror::Error;

use crate::camera::CameraConfig;
use crate::material::Material;
use crate::scene::Scene;
use crate::shape::Shape;

/// Capacity of the wire shape table.
pub const MAX_SHAPES: usize = 500;
/// Capacity of the wire material table.
pub const MAX_MATERIALS: usize = 500;

/// Wire tag for sphere records.
pub const SHAPE_KIND_SPHERE: u32 = 0;
/// Wire tag for disk records.
pub const SHAPE_KIND_DISK: u32 = 1;

/// Wire tag for diffuse material records.
pub const MATERIAL_KIND_LAMBERTIAN: u32 = 0;
/// Wire tag for metal material records.
pub const MATERIAL_KIND_METAL: u32 = 1;
/// Wire tag for dielectric material records.
pub const MATERIAL_KIND_DIELECTRIC: u32 = 2;
/// Wire tag for portal material records.
pub const MATERIAL_KIND_PORTAL: u32 = 3;

/// Errors from packing a scene into the wire blob.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum EncodeError {
    #[error("scene has {0} shapes, wire capacity is {MAX_SHAPES}")]
    TooManyShapes(usize),

    #[error("scene has {0} materials, wire capacity is {MAX_MATERIALS}")]
    TooManyMaterials(usize),
}

pub type EncodeResult<T> = Result<T, EncodeError>;

/// One wire shape record: a kind-tagged sphere or disk.
///
/// `normal` is only meaningful for disks and stays zeroed for spheres.
#[repr(C)]
#[derive(Copy, Clone, Debug, Pod, Zeroable)]
pub struct GpuShape {
    pub kind: u32,
    _pad0: [u32; 3],
    pub center: [f32; 3],
    _pad1: f32,
    pub normal: [f32; 3],
    pub radius: f32,
    pub material_index: u32,
    _pad2: [u32; 3],
}

/// One wire material record.
///
/// `parameter` carries the metal fuzz or the dielectric refraction index;
/// the three matrices are populated for portals and stay zeroed for
/// everything else.
#[repr(C)]
#[derive(Copy, Clone, Debug, Pod, Zeroable)]
pub struct GpuMaterial {
    pub kind: u32,
    _pad0: [u32; 3],
    pub color: [f32; 3],
    pub parameter: f32,
    pub translation_before: [[f32; 4]; 4],
    pub translation_after: [[f32; 4]; 4],
    pub rotation: [[f32; 4]; 4],
}

/// The wire camera: view and lens parameters only. Image dimensions and
/// sampling controls are dispatch parameters on the backend side, not
/// scene data.
#[repr(C)]
#[derive(Copy, Clone, Debug, Pod, Zeroable)]
pub struct GpuCamera {
    pub eye: [f32; 3],
    _pad0: f32,
    pub center: [f32; 3],
    _pad1: f32,
    pub up: [f32; 3],
    pub vfov: f32,
    pub defocus_angle: f32,
    pub focus_dist: f32,
    _pad2: [f32; 2],
}

/// The complete scene blob uploaded to the backend.
#[repr(C)]
#[derive(Copy, Clone, Debug, Pod, Zeroable)]
pub struct GpuScene {
    pub shape_count: u32,
    _pad0: [u32; 3],
    pub camera: GpuCamera,
    pub shapes: [GpuShape; MAX_SHAPES],
    pub materials: [GpuMaterial; MAX_MATERIALS],
}

impl GpuScene {
    /// The raw bytes to upload.
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::bytes_of(self)
    }
}

fn encode_shape(shape: &Shape) -> GpuShape {
    let mut record = GpuShape::zeroed();
    match shape {
        Shape::Sphere(sphere) => {
            record.kind = SHAPE_KIND_SPHERE;
            record.center = sphere.center.to_array();
            record.radius = sphere.radius;
            record.material_index = sphere.material.0 as u32;
        }
        Shape::Disk(disk) => {
            record.kind = SHAPE_KIND_DISK;
            record.center = disk.center.to_array();
            record.normal = disk.normal.to_array();
            record.radius = disk.radius;
            record.material_index = disk.material.0 as u32;
        }
    }
    record
}

fn encode_material(material: &Material) -> GpuMaterial {
    let mut record = GpuMaterial::zeroed();
    match material {
        Material::Lambertian { albedo } => {
            record.kind = MATERIAL_KIND_LAMBERTIAN;
            record.color = albedo.to_array();
        }
        Material::Metal { albedo, fuzz } => {
            record.kind = MATERIAL_KIND_METAL;
            record.color = albedo.to_array();
            record.parameter = *fuzz;
        }
        Material::Dielectric { refraction_index } => {
            record.kind = MATERIAL_KIND_DIELECTRIC;
            record.parameter = *refraction_index;
        }
        Material::Portal(transform) => {
            record.kind = MATERIAL_KIND_PORTAL;
            record.translation_before = transform.translate_before().to_cols_array_2d();
            record.translation_after = transform.translate_after().to_cols_array_2d();
            record.rotation = transform.rotation().to_cols_array_2d();
        }
    }
    record
}

fn encode_camera(config: &CameraConfig) -> GpuCamera {
    let mut record = GpuCamera::zeroed();
    record.eye = config.look_from.to_array();
    record.center = config.look_at.to_array();
    record.up = config.vup.to_array();
    record.vfov = config.vfov;
    record.defocus_angle = config.defocus_angle;
    record.focus_dist = config.focus_dist;
    record
}

/// Pack a scene and camera into the backend's wire blob.
///
/// Material references need no checking here; [`Scene`] refuses shapes
/// with unknown material ids at append time. The returned blob is
/// heap-allocated (a `GpuScene` is ~141 KiB).
pub fn encode_scene(scene: &Scene, camera: &CameraConfig) -> EncodeResult<Box<GpuScene>> {
    if scene.shape_count() > MAX_SHAPES {
        return Err(EncodeError::TooManyShapes(scene.shape_count()));
    }
    if scene.material_count() > MAX_MATERIALS {
        return Err(EncodeError::TooManyMaterials(scene.material_count()));
    }

    let mut blob = Box::new(GpuScene::zeroed());
    blob.shape_count = scene.shape_count() as u32;
    blob.camera = encode_camera(camera);
    for (slot, shape) in blob.shapes.iter_mut().zip(scene.shapes()) {
        *slot = encode_shape(shape);
    }
    for (slot, material) in blob.materials.iter_mut().zip(scene.materials()) {
        *slot = encode_material(material);
    }

    log::debug!(
        "encoded scene blob: {} shapes, {} materials, {} bytes",
        scene.shape_count(),
        scene.material_count(),
        std::mem::size_of::<GpuScene>()
    );
    Ok(blob)
}
