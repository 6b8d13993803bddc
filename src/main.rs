/*
 * Gesture Field
 *
 * An interactive installation: a grid of particles is pulled back to rest
 * by homing and damping while a distortion pulse follows a tracked hand.
 * Particle color shows how far each one has been pushed off its anchor.
 *
 * Without a sensor attached, the mouse or a simulated actor plays the hand.
 */

use std::sync::OnceLock;

use clap::Parser;
use log::error;
use nannou::prelude::*;

use gesture_field::app::{self, Model};
use gesture_field::{logging, Settings, SourceKind};

static SETTINGS: OnceLock<Settings> = OnceLock::new();

/// A particle field that bends around a tracked hand
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Surface width in pixels
    #[arg(long, default_value_t = 1024)]
    width: u32,

    /// Surface height in pixels
    #[arg(long, default_value_t = 768)]
    height: u32,

    /// Spacing between grid particles
    #[arg(short, long, default_value_t = 8.0)]
    interval: f32,

    /// Where the tracked hand comes from
    #[arg(short, long, value_enum, default_value_t = SourceKind::Pointer)]
    source: SourceKind,

    /// Seed for the simulated actor
    #[arg(long)]
    seed: Option<u64>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

impl Args {
    fn settings(&self) -> Settings {
        Settings {
            width: self.width,
            height: self.height,
            interval: self.interval,
            source: self.source,
            seed: self.seed,
        }
    }
}

fn main() {
    let args = Args::parse();
    logging::init(args.verbose);

    let settings = args.settings();
    if let Err(e) = settings.validate() {
        error!("{}", e);
        std::process::exit(1);
    }
    let _ = SETTINGS.set(settings);

    nannou::app(model).update(app::update).run();
}

fn model(app: &App) -> Model {
    let settings = SETTINGS.get().cloned().unwrap_or_default();
    match app::try_model(app, &settings) {
        Ok(model) => model,
        Err(e) => {
            error!("{}", e);
            std::process::exit(1);
        }
    }
}
