use clap::Parser;
use floating_balls::logging::{init_logging, level_for_verbosity};
use floating_balls::{App, AppConfig, FrameSource, PacedFrames, Result};
use log::{info, warn};
use rand::SeedableRng;
use rand_pcg::Pcg64;
use std::path::PathBuf;
use std::time::Duration;

/// Floating balls drifting across the page's containers.
#[derive(Parser, Debug)]
#[command(name = "floating-balls", version)]
struct Cli {
    /// TOML config file; built-in defaults are used without one.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Use the landing page preset as the base config.
    #[arg(long)]
    landing_page: bool,

    /// Seed for a reproducible run.
    #[arg(long)]
    seed: Option<u64>,

    /// Stop after this many frames (0 runs until the window closes).
    #[arg(long, default_value_t = 0)]
    frames: u64,

    /// Run without a window, logging the state once per second.
    #[arg(long)]
    headless: bool,

    /// Repeat for more log output; overrides `[logging] level` from the config.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

const REPORT_EVERY: u64 = 60;

pub fn main() -> Result<()> {
    let cli = Cli::parse();

    let base = if cli.landing_page {
        AppConfig::landing_page()
    } else {
        AppConfig::default()
    };
    let config = AppConfig::load(cli.config.as_deref(), base)?;
    let level = if cli.verbose > 0 {
        level_for_verbosity(cli.verbose)
    } else {
        config.logging.level_filter()?
    };
    init_logging(level)?;
    if let Some(path) = &cli.config {
        info!("Loaded config from {}", path.display());
    }
    let rng = match cli.seed {
        Some(seed) => Pcg64::seed_from_u64(seed),
        None => Pcg64::from_entropy(),
    };
    let mut app = App::new(&config, rng);
    let limit = if cli.frames == 0 { None } else { Some(cli.frames) };
    let mut frames = PacedFrames::new(Duration::from_millis(config.display.frame_time_cap_ms), limit);

    if cli.headless || !cfg!(feature = "sdl") {
        if !cli.headless {
            warn!("Built without the `sdl` feature, running headless");
        }
        run_headless(&mut app, &mut frames);
        return Ok(());
    }
    #[cfg(feature = "sdl")]
    run_windowed(&mut app, &mut frames, &config)?;
    Ok(())
}

fn run_headless(app: &mut App<Pcg64>, frames: &mut PacedFrames) {
    app.start(Duration::ZERO);
    while let Some(now) = frames.next_frame() {
        let report = match app.frame(now) {
            Some(report) => report,
            None => break,
        };
        if let Some(transfer) = report.transfer {
            info!(
                "Ball {} moved from container {} to {}",
                transfer.ball.get(),
                transfer.from,
                transfer.to
            );
        }
        if app.frames() % REPORT_EVERY == 0 {
            let counts: Vec<String> = app
                .balls()
                .instances()
                .iter()
                .map(|instance| format!("{}={}", instance.name(), instance.len()))
                .collect();
            info!("t={:.1}s {}", now.as_secs_f64(), counts.join(" "));
        }
    }
    app.stop();
}

#[cfg(feature = "sdl")]
fn run_windowed(
    app: &mut App<Pcg64>,
    frames: &mut PacedFrames,
    config: &AppConfig,
) -> Result<()> {
    use floating_balls::render::{init_graphics, render_backgrounds};
    use floating_balls::Error;
    use sdl2::event::Event;
    use sdl2::keyboard::Keycode;

    let mut graphics = init_graphics(&config.display, app.balls().instances())?;
    let mut event_pump = graphics.sdl_context.event_pump().map_err(Error::Render)?;

    app.start(Duration::ZERO);
    'running: while let Some(now) = frames.next_frame() {
        for event in event_pump.poll_iter() {
            match event {
                Event::Quit { .. }
                | Event::KeyDown {
                    keycode: Some(Keycode::Escape),
                    ..
                } => break 'running,
                Event::KeyDown {
                    keycode: Some(Keycode::R),
                    ..
                } => app.reset(),
                _ => {}
            }
        }
        if app.frame(now).is_none() {
            break;
        }
        render_backgrounds(&mut graphics, app.balls().instances())?;
    }
    app.stop();
    Ok(())
}
