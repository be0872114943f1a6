//! Scene assembly: a flat shape list plus the material table it references.

use rift_math::Vec3;
use thiserror::Error;

use crate::material::{Material, MaterialId};
use crate::shape::{Disk, Shape, ShapeError, Sphere};

/// Errors from scene assembly.
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum SceneError {
    #[error(transparent)]
    Shape(#[from] ShapeError),

    /// The shape names a material id the table does not hold.
    #[error("shape references material {referenced} but the table holds {available}")]
    UnknownMaterial { referenced: usize, available: usize },
}

pub type SceneResult<T> = Result<T, SceneError>;

/// A renderable scene: shapes in insertion order plus the materials they
/// reference.
///
/// Every shape's [`MaterialId`] is checked against the table when the
/// shape is appended, so material lookups during shading cannot fail.
/// Shape order is preserved; with the tracer's strict nearest-hit scan
/// that makes render results independent of everything except the scene
/// content itself.
#[derive(Debug, Clone, Default)]
pub struct Scene {
    shapes: Vec<Shape>,
    materials: Vec<Material>,
}

impl Scene {
    /// Create an empty scene.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a material to the table, returning its id.
    pub fn add_material(&mut self, material: Material) -> MaterialId {
        self.materials.push(material);
        MaterialId(self.materials.len() - 1)
    }

    /// Append a shape. Fails if it references a material id that has not
    /// been added to this scene.
    pub fn add_shape(&mut self, shape: Shape) -> SceneResult<()> {
        let id = shape.material();
        if id.0 >= self.materials.len() {
            return Err(SceneError::UnknownMaterial {
                referenced: id.0,
                available: self.materials.len(),
            });
        }
        self.shapes.push(shape);
        Ok(())
    }

    /// Validate and append a sphere.
    pub fn add_sphere(
        &mut self,
        center: Vec3,
        radius: f32,
        material: MaterialId,
    ) -> SceneResult<()> {
        self.add_shape(Shape::Sphere(Sphere::new(center, radius, material)?))
    }

    /// Validate and append a one-sided disk.
    pub fn add_disk(
        &mut self,
        center: Vec3,
        normal: Vec3,
        radius: f32,
        material: MaterialId,
    ) -> SceneResult<()> {
        self.add_shape(Shape::Disk(Disk::new(center, normal, radius, material)?))
    }

    /// All shapes in insertion order.
    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    /// The material table, indexed by [`MaterialId`].
    pub fn materials(&self) -> &[Material] {
        &self.materials
    }

    /// Look up a material by id.
    ///
    /// Ids handed out by [`Scene::add_material`] are always valid for the
    /// scene that issued them.
    pub fn material(&self, id: MaterialId) -> &Material {
        &self.materials[id.0]
    }

    /// Number of shapes in the scene.
    pub fn shape_count(&self) -> usize {
        self.shapes.len()
    }

    /// Number of materials in the table.
    pub fn material_count(&self) -> usize {
        self.materials.len()
    }

    /// True if the scene holds no shapes.
    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }
}
