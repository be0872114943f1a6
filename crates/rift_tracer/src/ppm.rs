//! Plain-text PPM (P3) image output.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use rift_math::Interval;

use crate::material::Color;
use crate::renderer::ImageBuffer;

/// Displayable component range. The top end stays just under 1 so the
/// integer conversion below never produces 256.
const INTENSITY: Interval = Interval::new(0.0, 0.999);

/// Gamma 2 transfer: linear light to display space.
pub fn linear_to_gamma(linear: f32) -> f32 {
    if linear > 0.0 {
        linear.sqrt()
    } else {
        0.0
    }
}

/// Gamma-correct and quantize one linear color to 8-bit channels.
pub fn color_to_rgb8(color: Color) -> [u8; 3] {
    let r = linear_to_gamma(color.x);
    let g = linear_to_gamma(color.y);
    let b = linear_to_gamma(color.z);

    [
        (256.0 * INTENSITY.clamp(r)) as u8,
        (256.0 * INTENSITY.clamp(g)) as u8,
        (256.0 * INTENSITY.clamp(b)) as u8,
    ]
}

/// Write the image as P3: a text header, then one "r g b" line per pixel
/// in row-major order.
pub fn write_ppm<W: Write>(image: &ImageBuffer, writer: &mut W) -> io::Result<()> {
    writeln!(writer, "P3")?;
    writeln!(writer, "{} {}", image.width(), image.height())?;
    writeln!(writer, "255")?;

    for y in 0..image.height() {
        for x in 0..image.width() {
            let [r, g, b] = color_to_rgb8(image.get(x, y));
            writeln!(writer, "{r} {g} {b}")?;
        }
    }

    Ok(())
}

/// Write the image to a file at `path`, replacing any existing file.
pub fn save_ppm<P: AsRef<Path>>(image: &ImageBuffer, path: P) -> io::Result<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    write_ppm(image, &mut writer)?;
    writer.flush()
}
