//! Scene data model for the rift path tracer.
//!
//! This crate holds everything a render consumes but nothing that renders:
//!
//! - **Geometry**: `Sphere`, `Disk`, the `Shape` sum type
//! - **Materials**: the `Material` sum type, shared through `MaterialId`
//! - **Portals**: `PortalTransform`, the rigid disk-to-disk mapping
//! - **Assembly**: `Scene`, camera configuration records
//! - **Wire format**: the `gpu` module with the backend's fixed-layout blob
//!
//! # Example
//!
//! ```
//! use rift_math::Vec3;
//! use rift_scene::{Material, Scene};
//!
//! let mut scene = Scene::new();
//! let gray = scene.add_material(Material::lambertian(Vec3::splat(0.5)));
//! scene.add_sphere(Vec3::new(0.0, -1000.0, 0.0), 1000.0, gray)?;
//! # Ok::<(), rift_scene::SceneError>(())
//! ```

pub mod camera;
pub mod gpu;
pub mod material;
pub mod portal;
pub mod scene;
pub mod shape;

// Re-export commonly used types
pub use camera::{CameraConfig, CameraError};
pub use material::{Material, MaterialId};
pub use portal::{PortalError, PortalTransform};
pub use scene::{Scene, SceneError};
pub use shape::{Disk, Shape, ShapeError, Sphere};
