use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use phong_raytracer::{
    render::{canvas::ImageFormat, renderer::RendererBuilder},
    scene::demo::{self, DemoScene},
};

const DEFAULT_WIDTH: usize = 800;
const DEFAULT_HEIGHT: usize = 600;
const DEFAULT_FOV: f64 = demo::DEFAULT_FOV;

/// Simple raytracer renderer
/// Renders one of the built-in scenes with the Phong lighting model
#[derive(Parser, Debug)]
#[command(about, long_about = None)]
struct Args {
    /// The scene to render
    #[clap(long, value_enum, default_value_t = DemoScene::Spheres)]
    scene: DemoScene,

    /// The format of the output image
    #[clap(short = 'f', long, default_value = "png")]
    image_format: ImageFormat,

    /// The output path of the rendered image.
    /// By default it's `./<scene>.<image_format>`
    #[clap(short, long)]
    output_path: Option<PathBuf>,

    /// Width (in pixels) of the output image.
    #[clap(long, default_value_t = DEFAULT_WIDTH)]
    width: usize,

    /// Height (in pixels) of the output image.
    #[clap(long, default_value_t = DEFAULT_HEIGHT)]
    height: usize,

    /// Field of view of the camera in radians.
    /// Defaults to π/3
    #[clap(long, default_value_t = DEFAULT_FOV)]
    fov: f64,

    /// Test whether every surface point can see each light
    #[clap(long)]
    shadows: bool,

    /// Show a progress bar while rendering
    #[clap(long)]
    progress: bool,

    /// Print more about what's going on, repeat for even more
    #[clap(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_logger(verbosity: u8) {
    let level = match verbosity {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        2 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .format_timestamp(None)
        .format_target(false)
        .init();
}

fn main() -> Result<(), String> {
    let args = Args::parse();
    init_logger(args.verbose);

    let scene = args
        .scene
        .scene(args.shadows)
        .map_err(|e| format!("Failed to build scene: {}", e))?;
    let camera = args
        .scene
        .camera(args.width, args.height, args.fov)
        .map_err(|e| format!("Failed to set up camera: {}", e))?;

    let renderer = RendererBuilder::default()
        .scene(scene)
        .camera(camera)
        .use_progress_bar(args.progress)
        .build()
        .map_err(|e| format!("Failed to set up renderer: {}", e))?;
    let canvas = renderer
        .render()
        .map_err(|e| format!("Failed to render: {}", e))?;

    let output_path = args.output_path.unwrap_or_else(|| {
        let name = args
            .scene
            .to_possible_value()
            .map_or_else(|| "image".to_string(), |v| v.get_name().to_string());
        let mut path = PathBuf::from(name);
        path.set_extension(args.image_format.to_string());
        path
    });
    canvas
        .save_to_file(&output_path, args.image_format)
        .map_err(|e| format!("Failed to save image: {}", e))?;
    println!("Image saved to {:?}", output_path);
    Ok(())
}
