/*
 * Application Module
 *
 * This module defines the nannou model for the installation and wires the
 * window, control panel, tracking source and simulation together.
 *
 * Frame order:
 * - update: poll tracking, run the control panel, step the simulation
 * - view: draw what update produced (see renderer.rs)
 */

use log::info;
use nannou::prelude::*;
use nannou_egui::Egui;

use crate::debug::DebugInfo;
use crate::error::StartupError;
use crate::input;
use crate::params::SimulationParams;
use crate::renderer::view;
use crate::settings::{Settings, SourceKind};
use crate::simulation::Simulation;
use crate::tracking::{PointerSource, SimulatedActor, TrackingSource};
use crate::ui;
use crate::viewport::Viewport;

// Main model for the application
pub struct Model {
    pub simulation: Simulation,
    pub params: SimulationParams,
    pub source: Box<dyn TrackingSource>,
    pub egui: Egui,
    pub debug_info: DebugInfo,
    pub viewport: Viewport,
}

// Build the tracking source picked on the command line
pub fn make_source(settings: &Settings) -> Box<dyn TrackingSource> {
    match settings.source {
        SourceKind::Pointer => Box::new(PointerSource::new()),
        SourceKind::Simulated => Box::new(SimulatedActor::new(
            vec2(settings.surface_width(), settings.surface_height()),
            settings.seed,
        )),
    }
}

// Initialize the model
pub fn try_model(app: &App, settings: &Settings) -> Result<Model, StartupError> {
    settings.validate()?;

    let window_id = app
        .new_window()
        .title("Gesture Field")
        .size(settings.width, settings.height)
        .resizable(false)
        .view(view)
        .key_pressed(input::key_pressed)
        .mouse_moved(input::mouse_moved)
        .mouse_exited(input::mouse_exited)
        .raw_event(input::raw_window_event)
        .build()
        .map_err(|e| StartupError::Window(format!("{:?}", e)))?;

    let window = app
        .window(window_id)
        .ok_or_else(|| StartupError::Window("window closed during setup".to_string()))?;

    let egui = Egui::from_window(&window);
    let params = SimulationParams::default();
    let simulation = Simulation::new(settings, &params);
    let source = make_source(settings);

    let mut viewport = Viewport::new(simulation.surface());
    viewport.fit(window.rect());

    info!("tracking source: {}", source.name());

    let debug_info = DebugInfo {
        source_name: source.name(),
        particles: simulation.system().len(),
        ..DebugInfo::default()
    };

    Ok(Model {
        simulation,
        params,
        source,
        egui,
        debug_info,
        viewport,
    })
}

// Update the model
pub fn update(app: &App, model: &mut Model, update: Update) {
    model.debug_info.fps = app.fps();
    model.debug_info.frame_time = update.since_last;
    model.viewport.fit(app.window_rect());

    let (should_reset, params_changed) = ui::update_ui(&mut model.egui, &mut model.params, &model.debug_info);
    if params_changed {
        model.simulation.apply_params(&model.params);
    }
    if should_reset {
        model.simulation.reset_particles();
    }

    // Snapshots still arrive while paused; they just do not move anything
    let incoming = model.source.poll();
    if model.params.pause_simulation {
        model.simulation.receive(incoming);
        return;
    }

    let report = model.simulation.step(incoming, model.params.time_step);

    let info = &mut model.debug_info;
    info.actors = report.actors;
    info.reach = report.reach;
    info.phase = model.simulation.phase();
    info.chase_distance = model.simulation.chase().distance();
    if let Some(distortion) = model.simulation.distortion() {
        info.distortion_magnitude = distortion.magnitude;
        info.exp_factor = distortion.exp_factor;
    }
}
