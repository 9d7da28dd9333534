//! Accel Discs entry point
//!
//! Runs the disc simulation headless on the virtual-clock event loop with a
//! slowly rotating tilt, logging the status readouts and a population summary.

use std::path::PathBuf;

use clap::Parser;

use accel_discs::platform::{EventLoop, ScriptedAccelerometer};
use accel_discs::renderer::VertexCanvas;
use accel_discs::sim::AccelSample;
use accel_discs::status::{self, BatteryState};
use accel_discs::{DisplayShape, Driver, Settings};

#[derive(Parser, Debug)]
#[command(about = "Tilt-driven discs bouncing around a watch face")]
struct Args {
    /// JSON settings file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Number of ticks to run before tearing down
    #[arg(short, long, default_value_t = 200)]
    ticks: u64,

    /// Override the display shape (rect or round)
    #[arg(long, value_parser = parse_shape)]
    shape: Option<DisplayShape>,
}

fn parse_shape(s: &str) -> Result<DisplayShape, String> {
    DisplayShape::parse(s).ok_or_else(|| format!("unknown display shape `{s}`"))
}

/// Gravity vector circling the screen plane, one revolution per ~125 ticks
fn tilt_sample(tick: u64) -> AccelSample {
    let t = tick as f32 * 0.05;
    AccelSample::new(
        (600.0 * t.cos()) as i16,
        (600.0 * t.sin()) as i16,
        -800,
    )
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    let mut settings = Settings::load(args.config.as_deref());
    if let Some(shape) = args.shape {
        settings = settings.with_display(shape);
    }
    log::info!("Accel Discs starting ({} display)", settings.display.as_str());

    let battery = BatteryState {
        percent: 100,
        charging: false,
    };
    log::info!("{}", status::time_text_from_secs(0));
    log::info!("{}", status::battery_text(battery));
    log::info!("{}", status::connection_text(true));

    let mut event_loop = EventLoop::new();
    let mut accel = ScriptedAccelerometer::from_samples((0..args.ticks).map(tilt_sample));
    let mut canvas = VertexCanvas::new();
    let mut driver = Driver::new(settings);

    driver.start(&mut event_loop);

    let mut ticks = 0;
    while ticks < args.ticks {
        let Some(id) = event_loop.next_timer() else {
            break;
        };
        if !driver.on_timer(id, &mut event_loop, &mut accel, &mut canvas) {
            continue;
        }
        ticks += 1;

        let Some(sim) = driver.simulation() else {
            break;
        };
        canvas.redraw(sim);

        if ticks % 20 == 0
            && let Some(first) = sim.discs().first()
        {
            log::info!(
                "{} tick {}: energy {:.3}, disc 0 at ({:.1}, {:.1}), {} vertices",
                status::time_text_from_secs(event_loop.now_ms() / 1000),
                ticks,
                sim.kinetic_energy(),
                first.pos.x,
                first.pos.y,
                canvas.vertices().len()
            );
        }
    }

    if let Some(sim) = driver.simulation() {
        match serde_json::to_string(sim) {
            Ok(json) => log::debug!("Final state: {json}"),
            Err(e) => log::warn!("Could not serialize final state: {e}"),
        }
    }

    driver.stop(&mut event_loop);
    debug_assert_eq!(event_loop.pending(), 0);
    log::info!("{} frames drawn", canvas.frames());
}
