mod controls;
mod room;
mod stats;

use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use minifb::{Key, Window, WindowOptions};
use rayroom_renderer::{Camera, FrameBuffer, RenderConfig, Renderer, Scene};

use controls::{Controls, KeyState};
use stats::FrameStats;

/// Fly around a small ray traced room.
///
/// Arrow keys turn, W/S/A/D move, Escape quits.
#[derive(Parser, Debug)]
#[command(name = "rayroom", version, about)]
struct Args {
    /// Frame width in pixels
    #[arg(long, default_value_t = 800, value_parser = clap::value_parser!(u32).range(1..))]
    width: u32,

    /// Frame height in pixels
    #[arg(long, default_value_t = 600, value_parser = clap::value_parser!(u32).range(1..))]
    height: u32,

    /// Target frames per second for the window
    #[arg(long, default_value_t = 60)]
    fps: usize,

    /// Maximum path length per pixel (1 disables reflections)
    #[arg(long, default_value_t = 3)]
    bounces: u32,

    /// Worker threads for row rendering (defaults to one per core)
    #[arg(long)]
    threads: Option<usize>,

    /// Degrees turned per frame while an arrow key is held
    #[arg(long, default_value_t = 0.4)]
    rotate_speed: f32,

    /// Units moved per frame while a movement key is held
    #[arg(long, default_value_t = 0.02)]
    move_speed: f32,

    /// Render one frame from the start position to this PNG and exit
    #[arg(long)]
    snapshot: Option<PathBuf>,
}

/// Log filter used when the filter variable is unset.
const DEFAULT_LOG_FILTER: &str = "info";

/// Logger configuration read from `filter_var`, falling back to `info`.
fn log_env(filter_var: &str) -> env_logger::Env<'_> {
    env_logger::Env::new().filter_or(filter_var, DEFAULT_LOG_FILTER)
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(log_env(env_logger::DEFAULT_FILTER_ENV)).init();

    let args = Args::parse();
    log::info!("Starting rayroom");

    if let Some(threads) = args.threads {
        rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build_global()
            .context("Failed to configure render thread pool")?;
    }
    log::info!("Rendering with {} threads", rayon::current_num_threads());

    let scene = room::build().context("Failed to build room scene")?;
    let mut renderer = Renderer::new(RenderConfig {
        max_bounces: args.bounces,
        ..Default::default()
    });
    let mut camera = room::start_camera();
    let mut frame = FrameBuffer::new(args.width, args.height);

    match &args.snapshot {
        Some(path) => snapshot(&scene, &camera, &mut renderer, &mut frame, path),
        None => run_window(&args, &scene, &mut camera, &mut renderer, &mut frame),
    }
}

fn snapshot(
    scene: &Scene,
    camera: &Camera,
    renderer: &mut Renderer,
    frame: &mut FrameBuffer,
    path: &Path,
) -> Result<()> {
    let start = Instant::now();
    renderer.render(scene, camera, frame)?;
    log::info!("Rendered {}x{} in {:?}", frame.width, frame.height, start.elapsed());

    let image = image::RgbImage::from_raw(frame.width, frame.height, frame.to_rgb())
        .ok_or_else(|| anyhow!("Frame buffer does not match {}x{}", frame.width, frame.height))?;
    image
        .save(path)
        .with_context(|| format!("Failed to write {}", path.display()))?;

    log::info!("Saved snapshot to {}", path.display());
    Ok(())
}

fn run_window(
    args: &Args,
    scene: &Scene,
    camera: &mut Camera,
    renderer: &mut Renderer,
    frame: &mut FrameBuffer,
) -> Result<()> {
    let width = frame.width as usize;
    let height = frame.height as usize;

    let mut window = Window::new(
        "rayroom - arrows turn, WASD move, Esc quits",
        width,
        height,
        WindowOptions::default(),
    )
    .map_err(|e| anyhow!("Failed to create window: {}", e))?;
    window.set_target_fps(args.fps);

    let controls = Controls {
        rotate_speed: args.rotate_speed,
        move_speed: args.move_speed,
    };
    let mut stats = FrameStats::default();
    let mut last_frame = Instant::now();

    log::info!("Running render loop");
    while window.is_open() && !window.is_key_down(Key::Escape) {
        let keys = read_keys(&window);
        if keys.any() {
            controls.apply(&keys, camera);
        }

        renderer.render(scene, camera, frame)?;
        window
            .update_with_buffer(&frame.pixels, width, height)
            .map_err(|e| anyhow!("Failed to present frame: {}", e))?;

        let now = Instant::now();
        if let Some(fps) = stats.tick(now - last_frame) {
            log::info!(
                "{:.1} fps | camera at {:.2} yaw {:.1} pitch {:.1}",
                fps,
                camera.position,
                camera.yaw(),
                camera.pitch()
            );
        }
        last_frame = now;
    }

    log::info!("Window closed (last {:.1} fps)", stats.fps());
    Ok(())
}

fn read_keys(window: &Window) -> KeyState {
    KeyState {
        turn_left: window.is_key_down(Key::Left),
        turn_right: window.is_key_down(Key::Right),
        look_up: window.is_key_down(Key::Up),
        look_down: window.is_key_down(Key::Down),
        forward: window.is_key_down(Key::W),
        back: window.is_key_down(Key::S),
        strafe_left: window.is_key_down(Key::A),
        strafe_right: window.is_key_down(Key::D),
    }
}
