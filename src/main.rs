mod app;
mod camera;

use std::error::Error;
use std::path::PathBuf;

use clap::Parser;
use scout_labels::{OverlayConfig, load_config_from_path};
use scout_scene::load_scene_from_path;

use app::App;

#[derive(Parser, Debug)]
#[command(name = "scout", about = "Map viewer with per-object info overlays")]
struct Args {
    /// Scene description to load
    #[arg(long, default_value = "assets/scene.toml")]
    scene: PathBuf,

    /// Overlay settings; reloaded on change
    #[arg(long, default_value = "assets/overlay.toml")]
    config: PathBuf,

    #[arg(long, default_value_t = 1280)]
    width: i32,

    #[arg(long, default_value_t = 720)]
    height: i32,

    /// Vertical field of view in degrees
    #[arg(long, default_value_t = 60.0)]
    fov: f32,

    /// Disable hot-reload of the overlay config
    #[arg(long)]
    no_watch: bool,
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let scene = load_scene_from_path(&args.scene)?;
    let config = if args.config.exists() {
        load_config_from_path(&args.config)?
    } else {
        log::warn!(
            "overlay config {} not found; using defaults",
            args.config.display()
        );
        OverlayConfig::default()
    };

    let (mut rl, thread) = raylib::init()
        .size(args.width, args.height)
        .resizable()
        .title("Scout")
        .build();
    rl.set_target_fps(60);

    let mut app = App::new(scene, config, args.config, !args.no_watch, args.fov);
    while !rl.window_should_close() {
        let dt = rl.get_frame_time();
        app.step(&mut rl, dt);
        app.render(&mut rl, &thread);
    }
    Ok(())
}
