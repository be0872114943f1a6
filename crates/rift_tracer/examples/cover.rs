//! Cover scene: the random sphere field with a portal pair.
//!
//! Run with: cargo run --release --example cover

use anyhow::Result;
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use rift_tracer::{
    gen_f32, render, save_ppm, Camera, CameraConfig, Material, PortalTransform, RenderOptions,
    Scene, Vec3,
};

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let mut rng = StdRng::seed_from_u64(7);
    let scene = build_scene(&mut rng)?;
    println!("Created {} shapes", scene.shape_count());

    let config = CameraConfig {
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
    let camera = Camera::new(&config)?;

    println!(
        "Rendering {}x{} @ {} spp...",
        camera.image_width(),
        camera.image_height(),
        camera.samples_per_pixel()
    );
    let image = render(&scene, &camera, &RenderOptions::default());

    let filename = "cover.ppm";
    save_ppm(&image, filename)?;
    println!("Saved to {}", filename);

    Ok(())
}

fn build_scene(rng: &mut dyn RngCore) -> Result<Scene> {
    let mut scene = Scene::new();

    let ground = scene.add_material(Material::lambertian(Vec3::splat(0.5)));
    scene.add_sphere(Vec3::new(0.0, -1000.0, 0.0), 1000.0, ground)?;

    // Small random spheres.
    for a in -11..11 {
        for b in -11..11 {
            let center = Vec3::new(
                a as f32 + 0.9 * gen_f32(rng),
                0.2,
                b as f32 + 0.9 * gen_f32(rng),
            );

            if (center - Vec3::new(4.0, 0.2, 0.0)).length() <= 0.9 {
                continue;
            }

            let choose_mat = gen_f32(rng);
            let material = if choose_mat < 0.8 {
                // Diffuse
                Material::lambertian(random_color(rng) * random_color(rng))
            } else if choose_mat < 0.95 {
                // Metal
                let albedo = 0.5 * random_color(rng) + Vec3::splat(0.5);
                Material::metal(albedo, 0.5 * gen_f32(rng))
            } else {
                // Glass
                Material::dielectric(1.5)
            };

            let id = scene.add_material(material);
            scene.add_sphere(center, 0.2, id)?;
        }
    }

    // Three main spheres.
    let glass = scene.add_material(Material::dielectric(1.5));
    scene.add_sphere(Vec3::new(0.0, 1.0, 0.0), 1.0, glass)?;

    let matte = scene.add_material(Material::lambertian(Vec3::new(0.4, 0.2, 0.1)));
    scene.add_sphere(Vec3::new(-4.0, 1.0, 0.0), 1.0, matte)?;

    let chrome = scene.add_material(Material::metal(Vec3::new(0.7, 0.6, 0.5), 0.0));
    scene.add_sphere(Vec3::new(4.0, 1.0, 0.0), 1.0, chrome)?;

    // A portal pair, one disk warping to the other in each direction.
    let source_center = Vec3::new(5.0, 1.0, 0.0);
    let source_normal = Vec3::NEG_X;
    let dest_center = Vec3::new(0.0, 1.0, -2.0);
    let dest_normal = Vec3::Z;

    let forward = scene.add_material(Material::portal(PortalTransform::between(
        source_center,
        source_normal,
        dest_center,
        dest_normal,
    )?));
    scene.add_disk(source_center, source_normal, 1.0, forward)?;

    let backward = scene.add_material(Material::portal(PortalTransform::between(
        dest_center,
        dest_normal,
        source_center,
        source_normal,
    )?));
    scene.add_disk(dest_center, dest_normal, 1.0, backward)?;

    Ok(scene)
}

fn random_color(rng: &mut dyn RngCore) -> Vec3 {
    Vec3::new(gen_f32(rng), gen_f32(rng), gen_f32(rng))
}
