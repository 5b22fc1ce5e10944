//! Demo binary driving the orrery section navigator with logging renderers.

use std::path::Path;
use std::time::Duration;

use orrery::camera::Camera;
use orrery::engine::{NavCommand, Orrery, OverlayRenderer, SceneRenderer, Viewport};
use orrery::options::Options;
use orrery::scene::{DirectoryAssets, SceneGraph};

/// Simulated display refresh.
const FRAME: Duration = Duration::from_micros(16_667);
/// Upper bound on frames spent waiting for one transition.
const MAX_SETTLE_FRAMES: u32 = 600;

/// Logs what a 3D renderer would draw.
struct LogScene;

impl SceneRenderer for LogScene {
    fn set_size(&mut self, viewport: Viewport) {
        log::debug!("scene surface {}x{}", viewport.width, viewport.height);
    }

    fn render(&mut self, scene: &SceneGraph, camera: &Camera) {
        log::trace!(
            "draw: eye {:?} -> {:?}, {} planets visible",
            camera.eye,
            camera.target,
            scene.visible_sections().count()
        );
    }

    fn release(&mut self) {
        log::debug!("scene surface released");
    }
}

/// Logs where the overlays would be placed.
struct LogOverlays;

impl OverlayRenderer for LogOverlays {
    fn set_size(&mut self, viewport: Viewport) {
        log::debug!("overlay surface {}x{}", viewport.width, viewport.height);
    }

    fn render(&mut self, scene: &SceneGraph, _camera: &Camera) {
        for section in scene.visible_sections() {
            log::trace!(
                "overlay {}: label {:.2}, content {:.2} at {:?}",
                section.id(),
                section.label().opacity(),
                section.content().opacity(),
                section.content_world_position()
            );
        }
    }

    fn release(&mut self) {
        log::debug!("overlay surface released");
    }
}

fn parse_command(arg: &str) -> Option<NavCommand> {
    match arg {
        "next" | "n" => Some(NavCommand::Next),
        "prev" | "previous" | "p" => Some(NavCommand::Previous),
        "overview" | "home" => Some(NavCommand::Overview),
        other => other.parse().ok().map(NavCommand::Section),
    }
}

/// Run frames until the current transition settles.
fn settle(engine: &mut Orrery, now: &mut Duration) {
    for _ in 0..MAX_SETTLE_FRAMES {
        *now += FRAME;
        engine.frame_at(*now);
        if !engine.state().transitioning {
            return;
        }
    }
    log::warn!("transition still running after {MAX_SETTLE_FRAMES} frames");
}

fn main() {
    env_logger::init();

    let mut args: Vec<String> = std::env::args().skip(1).collect();
    let options = if args.first().is_some_and(|a| a.ends_with(".toml")) {
        let path = args.remove(0);
        match Options::load(Path::new(&path)) {
            Ok(options) => options,
            Err(e) => {
                log::error!("{e}");
                std::process::exit(1);
            }
        }
    } else {
        Options::default()
    };

    if args.is_empty() {
        log::error!(
            "Usage: orrery [options.toml] <next|prev|overview|INDEX>..."
        );
        std::process::exit(1);
    }

    let built = Orrery::builder()
        .options(options)
        .scene_renderer(LogScene)
        .overlay_renderer(LogOverlays)
        .assets(DirectoryAssets::new("assets"))
        .build();
    let mut engine = match built {
        Ok(engine) => engine,
        Err(e) => {
            log::error!("{e}");
            std::process::exit(1);
        }
    };

    let mut now = Duration::ZERO;
    engine.frame_at(now);

    for arg in &args {
        let Some(command) = parse_command(arg) else {
            log::warn!("unknown command {arg:?}");
            continue;
        };
        if engine.execute(command) {
            settle(&mut engine, &mut now);
        }
        let state = engine.state();
        let controls = engine.nav_controls();
        log::info!(
            "{command:?} -> {:?} (previous {}, next {})",
            state.view,
            if controls.previous_enabled { "on" } else { "off" },
            if controls.next_enabled { "on" } else { "off" },
        );
    }

    engine.teardown();
}
