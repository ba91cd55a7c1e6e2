use std::path::PathBuf;
use std::time::Instant;

use log::{info, LevelFilter};
use rayon::prelude::*;
use structopt::StructOpt;

pub mod camera;
pub mod film;
pub mod geometry;
pub mod math;
pub mod output;
pub mod parsing;
pub mod scene;
pub mod tracer;

use camera::Camera;
use film::Film;
use geometry::Sphere;
use math::{Color, Point3};
use parsing::SceneData;
use scene::Scene;
use tracer::trace;

#[derive(StructOpt)]
#[structopt(name = "giftray", about = "A minimal recursive ray tracer")]
struct Opt {
    /// Image width in pixels
    #[structopt(long, default_value = "4096")]
    width: usize,

    /// Image height in pixels
    #[structopt(long, default_value = "2160")]
    height: usize,

    /// Vertical field of view in degrees (ignored when --scene is given)
    #[structopt(long, default_value = "30")]
    fov: f32,

    /// Maximum reflection bounces per primary ray
    #[structopt(long, default_value = "5")]
    max_depth: u32,

    /// JSON scene description; renders the built-in scene when absent
    #[structopt(long, parse(from_os_str))]
    scene: Option<PathBuf>,

    /// Output image path, .png or .ppm
    #[structopt(short, long, default_value = "fig/gift.ppm", parse(from_os_str))]
    output: PathBuf,

    /// Worker threads for the pixel loop, 0 to use every core
    #[structopt(long, default_value = "0")]
    threads: usize,

    #[structopt(short, long)]
    verbose: bool,
}

fn builtin_scene() -> Scene {
    let mut scene = Scene::new();
    // floor
    scene.add(Box::new(Sphere::new(
        10000.0,
        Point3::new(0.0, -10004.0, -20.0),
        Color::new(0.20, 0.20, 0.20),
    )));
    scene.add(Box::new(Sphere::new(
        4.0,
        Point3::new(0.0, 0.0, -20.0),
        Color::new(1.00, 0.32, 0.36),
    )));
    scene.add(Box::new(Sphere::new(
        2.0,
        Point3::new(5.0, -1.0, -15.0),
        Color::new(0.90, 0.76, 0.46),
    )));
    scene.add(Box::new(Sphere::new(
        3.0,
        Point3::new(5.0, 0.0, -25.0),
        Color::new(0.65, 0.77, 0.97),
    )));
    scene.add(Box::new(Sphere::new(
        3.0,
        Point3::new(-5.5, 0.0, -15.0),
        Color::new(0.90, 0.90, 0.90),
    )));
    // light
    scene.add(Box::new(Sphere::emissive(
        3.0,
        Point3::new(0.0, 20.0, -30.0),
        Color::ZERO,
        Color::splat(3.0),
    )));
    scene
}

fn main() {
    let opt = Opt::from_args();

    env_logger::Builder::from_default_env()
        .filter_level(if opt.verbose {
            LevelFilter::Debug
        } else {
            LevelFilter::Info
        })
        .init();

    let threads = if opt.threads == 0 {
        num_cpus::get()
    } else {
        opt.threads
    };
    rayon::ThreadPoolBuilder::new()
        .num_threads(threads)
        .build_global()
        .expect("failed to build the worker pool");

    let (scene, camera) = match &opt.scene {
        Some(path) => {
            let data: SceneData =
                parsing::load_json(path.clone()).expect("failed to parse scene");
            let camera = Camera::from(data.camera.clone());
            (Scene::from(data), camera)
        }
        None => (builtin_scene(), Camera::new(opt.fov)),
    };

    let mut film = Film::new(opt.width, opt.height, Color::ZERO);
    let aspect_ratio = film.aspect_ratio();
    let (w, h) = (opt.width, opt.height);
    let (inv_width, inv_height) = (1.0 / w as f32, 1.0 / h as f32);
    let max_depth = opt.max_depth;

    info!(
        "rendering {}x{} on {} threads, {} objects, max depth {}",
        w,
        h,
        threads,
        scene.primitives.len(),
        max_depth
    );
    let start = Instant::now();

    film.buffer.par_iter_mut().enumerate().for_each(|(i, pixel)| {
        let (px, py) = (i % w, i / w);
        let x = (px as f32 * inv_width * 2.0 - 1.0) * aspect_ratio;
        let y = 1.0 - 2.0 * (py as f32 * inv_height);
        *pixel = trace(camera.primary_ray(x, y), &scene, max_depth);
    });

    info!("render finished in {:.2?}", start.elapsed());

    if let Some(dir) = opt.output.parent() {
        if !dir.as_os_str().is_empty() {
            std::fs::create_dir_all(dir).expect("failed to create the output directory");
        }
    }
    output::output_film(&film, &opt.output).expect("failed to write the output image");
}
