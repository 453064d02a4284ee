// fountain - Headless fountain runner
//
// Runs the simulation into an off-screen canvas, replays pointer clicks,
// then presses 's' to write the screenshot.
//
// Usage: cargo run --bin fountain -- [--frames N] [--width W] [--height H]
//                                    [--config PATH] [--seed S] [--click X,Y]...

use std::env;
use std::process;

use fountain_engine::assets;
use fountain_engine::{Canvas, Command, Fountain, FountainConfig, FountainError, InputEvent};
use tracing::{info, warn, Level};
use tracing_subscriber::FmtSubscriber;

struct Args {
    frames: u32,
    width: u32,
    height: u32,
    config: Option<String>,
    seed: Option<u64>,
    clicks: Vec<(f32, f32)>,
}

fn parse_args() -> Args {
    let args: Vec<String> = env::args().collect();
    let mut parsed = Args {
        frames: 120,
        width: 800,
        height: 600,
        config: None,
        seed: None,
        clicks: Vec::new(),
    };

    let mut i = 1;
    while i < args.len() {
        let value = args.get(i + 1);
        match args[i].as_str() {
            "--frames" => { parsed.frames = value.and_then(|s| s.parse().ok()).unwrap_or(120); i += 2; }
            "--width" => { parsed.width = value.and_then(|s| s.parse().ok()).unwrap_or(800); i += 2; }
            "--height" => { parsed.height = value.and_then(|s| s.parse().ok()).unwrap_or(600); i += 2; }
            "--config" => { parsed.config = value.cloned(); i += 2; }
            "--seed" => { parsed.seed = value.and_then(|s| s.parse().ok()); i += 2; }
            "--click" => {
                match value.and_then(|s| parse_point(s)) {
                    Some(p) => parsed.clicks.push(p),
                    None => warn!("ignoring malformed --click, expected X,Y"),
                }
                i += 2;
            }
            other => {
                warn!("unknown argument {other}");
                i += 1;
            }
        }
    }

    parsed
}

fn parse_point(s: &str) -> Option<(f32, f32)> {
    let (x, y) = s.split_once(',')?;
    Some((x.trim().parse().ok()?, y.trim().parse().ok()?))
}

fn run(args: Args) -> Result<(), FountainError> {
    let config = match &args.config {
        Some(path) => FountainConfig::load(path)?,
        None => FountainConfig::default(),
    };

    let mut canvas = Canvas::new(args.width, args.height);
    let mut fountain = match args.seed {
        Some(seed) => Fountain::with_seed(config.clone(), args.width, args.height, seed),
        None => Fountain::new(config.clone(), args.width, args.height),
    };

    match assets::load_sprite(&config.image_path) {
        Ok(sprite) => fountain.set_sprite(Some(sprite)),
        Err(e) => warn!("drawing without fountain image: {e}"),
    }

    // Spread clicks evenly over the run
    let every = args.frames / (args.clicks.len() as u32 + 1);
    let mut clicks = args.clicks.iter();

    info!(frames = args.frames, w = args.width, h = args.height, "running fountain");
    for frame in 1..=args.frames {
        if every > 0 && frame % every == 0 {
            if let Some(&(x, y)) = clicks.next() {
                fountain.handle(InputEvent::PointerPressed { x, y });
            }
        }
        fountain.tick(&mut canvas);
    }
    info!(live = fountain.live(), capacity = fountain.capacity(), "run finished");

    if fountain.handle(InputEvent::KeyPressed('s')) == Some(Command::SaveScreenshot) {
        assets::save_png(&canvas, &config.screenshot_path)?;
    }
    Ok(())
}

fn main() {
    // Init logging
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .with_env_filter("info")
        .finish();
    let _ = tracing::subscriber::set_global_default(subscriber);

    info!("Fountain starting");
    if let Err(e) = run(parse_args()) {
        eprintln!("Fountain error: {e}");
        process::exit(1);
    }
}
