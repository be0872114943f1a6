//! Tile decomposition for parallel rendering.

use rand::rngs::StdRng;
use rand::SeedableRng;
use rift_scene::Scene;

use crate::camera::Camera;
use crate::material::Color;
use crate::renderer::render_pixel;

/// Default tile edge length in pixels.
pub const DEFAULT_TILE_SIZE: u32 = 64;

/// A rectangular region of the image, identified by its position in the
/// row-major tile grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tile {
    /// Left edge in image pixels.
    pub x: u32,
    /// Top edge in image pixels.
    pub y: u32,
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Position in the row-major tile grid, used to derive the tile's
    /// RNG seed.
    pub index: usize,
}

impl Tile {
    pub fn new(x: u32, y: u32, width: u32, height: u32, index: usize) -> Self {
        Self {
            x,
            y,
            width,
            height,
            index,
        }
    }

    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }
}

/// Pixels rendered for one tile, row-major within the tile.
#[derive(Debug, Clone, PartialEq)]
pub struct TileResult {
    pub tile: Tile,
    pub pixels: Vec<Color>,
}

/// Split an image into row-major tiles of at most `tile_size` pixels per
/// edge. Tiles on the right and bottom edges shrink to fit. A zero tile
/// size is treated as 1.
pub fn generate_tiles(image_width: u32, image_height: u32, tile_size: u32) -> Vec<Tile> {
    let tile_size = tile_size.max(1);
    let mut tiles = Vec::new();
    let mut index = 0;

    let mut y = 0;
    while y < image_height {
        let height = tile_size.min(image_height - y);
        let mut x = 0;
        while x < image_width {
            let width = tile_size.min(image_width - x);
            tiles.push(Tile::new(x, y, width, height, index));
            index += 1;
            x += tile_size;
        }
        y += tile_size;
    }

    tiles
}

/// Render every pixel of one tile with the tile's own seeded generator.
///
/// The generator is seeded from the render seed and the tile index alone,
/// so a tile's pixels never depend on which thread picked it up.
pub fn render_tile(tile: Tile, camera: &Camera, scene: &Scene, seed: u64) -> TileResult {
    let mut rng = StdRng::seed_from_u64(seed.wrapping_add(tile.index as u64));
    let mut pixels = Vec::with_capacity(tile.pixel_count());

    for y in tile.y..tile.y + tile.height {
        for x in tile.x..tile.x + tile.width {
            pixels.push(render_pixel(camera, scene, x, y, &mut rng));
        }
    }

    TileResult { tile, pixels }
}
