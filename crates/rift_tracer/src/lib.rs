//! rift tracer - CPU path tracing.
//!
//! A Monte Carlo path tracer over the `rift_scene` data model: spheres
//! and one-sided disks, diffuse/metal/dielectric surfaces, paired portal
//! disks, a thin-lens camera, and a tile-parallel renderer whose sampling
//! is reproducible from a seed.

mod sampling;
mod hittable;
mod sphere;
mod disk;
mod material;
mod camera;
mod tile;
mod renderer;
mod ppm;

pub use camera::Camera;
pub use hittable::{HitRecord, Hittable};
pub use material::{Color, Scatter, ScatterResult};
pub use ppm::{color_to_rgb8, linear_to_gamma, save_ppm, write_ppm};
pub use renderer::{ray_color, render, render_pixel, ImageBuffer, RenderOptions};
pub use sampling::gen_f32;
pub use tile::{generate_tiles, render_tile, Tile, TileResult, DEFAULT_TILE_SIZE};

/// Re-export the math and scene vocabulary used at this crate's surface
pub use rift_math::{Interval, Ray, Vec3};
pub use rift_scene::{CameraConfig, Material, MaterialId, PortalTransform, Scene};
