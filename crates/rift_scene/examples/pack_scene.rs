//! Example: Pack a portal scene into the GPU backend blob.
//!
//! Run with: cargo run --example pack_scene
//!
//! Writes `scene.bin`, the fixed-layout blob the compute backend uploads
//! as-is.

use std::fs::File;
use std::io::{BufWriter, Write};

use rift_math::Vec3;
use rift_scene::gpu::encode_scene;
use rift_scene::{CameraConfig, Material, PortalTransform, Scene};

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let mut scene = Scene::new();

    let ground = scene.add_material(Material::lambertian(Vec3::new(0.5, 0.5, 0.5)));
    let glass = scene.add_material(Material::dielectric(1.5));
    let gold = scene.add_material(Material::metal(Vec3::new(0.7, 0.6, 0.5), 0.0));

    scene.add_sphere(Vec3::new(0.0, -1000.0, 0.0), 1000.0, ground)?;
    scene.add_sphere(Vec3::new(0.0, 1.0, 0.0), 1.0, glass)?;
    scene.add_sphere(Vec3::new(4.0, 1.0, 0.0), 1.0, gold)?;

    // A portal pair: step through the disk at x=5 and come out at z=-2.
    let source_center = Vec3::new(5.0, 1.0, 0.0);
    let source_normal = Vec3::new(-1.0, 0.0, 0.0);
    let destination_center = Vec3::new(0.0, 1.0, -2.0);
    let destination_normal = Vec3::new(0.0, 0.0, 1.0);

    let forward = scene.add_material(Material::portal(PortalTransform::between(
        source_center,
        source_normal,
        destination_center,
        destination_normal,
    )?));
    let backward = scene.add_material(Material::portal(PortalTransform::between(
        destination_center,
        destination_normal,
        source_center,
        source_normal,
    )?));

    scene.add_disk(source_center, source_normal, 1.0, forward)?;
    scene.add_disk(destination_center, destination_normal, 1.0, backward)?;

    let camera = CameraConfig {
        aspect_ratio: 16.0 / 9.0,
        image_width: 400,
        samples_per_pixel: 500,
        max_depth: 50,
        vfov: 20.0,
        look_from: Vec3::new(12.0, 2.0, 3.0),
        look_at: Vec3::ZERO,
        vup: Vec3::new(0.0, 1.0, 0.0),
        defocus_angle: 0.6,
        focus_dist: 10.0,
    };
    camera.validate()?;

    let blob = encode_scene(&scene, &camera)?;

    let file = File::create("scene.bin")?;
    let mut writer = BufWriter::new(file);
    writer.write_all(blob.as_bytes())?;
    writer.flush()?;

    println!(
        "Packed {} shapes and {} materials into scene.bin ({} bytes)",
        scene.shape_count(),
        scene.material_count(),
        blob.as_bytes().len()
    );

    Ok(())
}
