/*
 * Input Module
 *
 * This module handles keyboard and mouse events for the installation.
 *
 * Keys:
 * - d: toggle debug overlay
 * - c: toggle chase marker
 * - p / space: pause
 * - r: reset particles to their grid
 * - g: toggle the control panel
 *
 * Mouse movement feeds the tracking source in surface coordinates.
 */

use log::info;
use nannou::prelude::*;

use crate::app::Model;

pub fn key_pressed(_app: &App, model: &mut Model, key: Key) {
    let params = &mut model.params;
    match key {
        Key::D => params.show_debug = !params.show_debug,
        Key::C => params.show_chase_marker = !params.show_chase_marker,
        Key::P | Key::Space => {
            params.pause_simulation = !params.pause_simulation;
            info!("simulation {}", if params.pause_simulation { "paused" } else { "resumed" });
        }
        Key::R => {
            model.simulation.reset_particles();
            info!("particles reset to grid");
        }
        Key::G => params.show_controls = !params.show_controls,
        _ => {}
    }
}

// Mouse moved event handler
pub fn mouse_moved(_app: &App, model: &mut Model, pos: Point2) {
    // Ignore the pointer while it is over the control panel
    if model.params.show_controls && model.egui.ctx().is_pointer_over_area() {
        return;
    }
    let surface_pos = model.viewport.screen_to_surface(pos);
    model.source.pointer_moved(surface_pos);
}

// Leaving the window counts as losing the tracked hand
pub fn mouse_exited(_app: &App, model: &mut Model) {
    model.source.pointer_left();
}

// Handle raw window events for egui
pub fn raw_window_event(_app: &App, model: &mut Model, event: &nannou::winit::event::WindowEvent) {
    model.egui.handle_raw_event(event);
}
