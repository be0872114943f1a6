//! Path tracing integrator and the tile-parallel render driver.

use std::time::Instant;

use rand::RngCore;
use rayon::prelude::*;
use rift_math::{Interval, Ray};
use rift_scene::Scene;

use crate::camera::Camera;
use crate::hittable::Hittable;
use crate::material::{Color, Scatter};
use crate::tile::{generate_tiles, render_tile, DEFAULT_TILE_SIZE};

/// Knobs for a render pass that live outside the camera.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    /// Base seed for the per-tile generators. Renders with equal seeds
    /// and tile sizes produce identical images.
    pub seed: u64,
    /// Tile edge length in pixels.
    pub tile_size: u32,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            seed: 0,
            tile_size: DEFAULT_TILE_SIZE,
        }
    }
}

/// Radiance arriving along `ray`, following scattered paths for at most
/// `depth` bounces.
pub fn ray_color(ray: &Ray, scene: &Scene, depth: u32, rng: &mut dyn RngCore) -> Color {
    // Bounce budget exhausted; no more light is gathered.
    if depth == 0 {
        return Color::ZERO;
    }

    // Start at 0.001 to avoid shadow acne from self-intersection.
    if let Some(rec) = scene.hit(ray, Interval::new(0.001, f32::INFINITY)) {
        return match scene.material(rec.material).scatter(ray, &rec, rng) {
            Some(scatter) => {
                scatter.attenuation * ray_color(&scatter.scattered, scene, depth - 1, rng)
            }
            None => Color::ZERO,
        };
    }

    sky_gradient(ray)
}

/// White-to-blue vertical gradient for rays that escape the scene.
fn sky_gradient(ray: &Ray) -> Color {
    let unit_direction = ray.direction().normalize();
    let a = 0.5 * (unit_direction.y + 1.0);
    (1.0 - a) * Color::ONE + a * Color::new(0.5, 0.7, 1.0)
}

/// Average radiance over the camera's sample count for one pixel.
pub fn render_pixel(
    camera: &Camera,
    scene: &Scene,
    x: u32,
    y: u32,
    rng: &mut dyn RngCore,
) -> Color {
    let mut color = Color::ZERO;
    for _ in 0..camera.samples_per_pixel() {
        let ray = camera.get_ray(x, y, rng);
        color += ray_color(&ray, scene, camera.max_depth(), rng);
    }
    color / camera.samples_per_pixel() as f32
}

/// A rendered image in linear color, row-major from the top-left.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageBuffer {
    width: u32,
    height: u32,
    pixels: Vec<Color>,
}

impl ImageBuffer {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![Color::ZERO; width as usize * height as usize],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn get(&self, x: u32, y: u32) -> Color {
        self.pixels[(y * self.width + x) as usize]
    }

    pub fn set(&mut self, x: u32, y: u32, color: Color) {
        self.pixels[(y * self.width + x) as usize] = color;
    }
}

/// Render the scene to an image, tracing tiles in parallel.
pub fn render(scene: &Scene, camera: &Camera, options: &RenderOptions) -> ImageBuffer {
    let tiles = generate_tiles(camera.image_width(), camera.image_height(), options.tile_size);

    log::info!(
        "rendering {}x{} at {} spp across {} tiles",
        camera.image_width(),
        camera.image_height(),
        camera.samples_per_pixel(),
        tiles.len()
    );
    let start = Instant::now();

    let results: Vec<_> = tiles
        .par_iter()
        .map(|tile| render_tile(*tile, camera, scene, options.seed))
        .collect();

    let mut image = ImageBuffer::new(camera.image_width(), camera.image_height());
    for result in &results {
        let tile = result.tile;
        for dy in 0..tile.height {
            for dx in 0..tile.width {
                let color = result.pixels[(dy * tile.width + dx) as usize];
                image.set(tile.x + dx, tile.y + dy, color);
            }
        }
    }

    log::info!("render finished in {:.2?}", start.elapsed());
    image
}
