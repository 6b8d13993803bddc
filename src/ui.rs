/*
 * UI Module
 *
 * This module contains functions for the control panel, built with
 * nannou_egui, and the plain text debug overlay drawn with nannou.
 * Parameter change detection is handled by the SimulationParams struct.
 */

use nannou_egui::{egui, Egui};

use crate::debug::DebugInfo;
use crate::params::SimulationParams;

// Update the UI. Returns (should_reset_particles, physics_params_changed).
pub fn update_ui(egui: &mut Egui, params: &mut SimulationParams, debug_info: &DebugInfo) -> (bool, bool) {
    let mut should_reset_particles = false;

    // Take a snapshot of current parameter values for change detection
    params.take_snapshot();

    let ctx = egui.begin_frame();
    if !params.show_controls {
        return (false, false);
    }

    egui::Window::new("Field Controls")
        .default_pos([10.0, 10.0])
        .show(&ctx, |ui| {
            ui.collapsing("Particles", |ui| {
                ui.add(egui::Slider::new(&mut params.homing, SimulationParams::get_homing_range()).text("Homing"));
                ui.add(egui::Slider::new(&mut params.damping, SimulationParams::get_damping_range()).text("Damping"));
                ui.add(egui::Slider::new(&mut params.acceleration_limit, SimulationParams::get_limit_range()).text("Acceleration Limit"));
                ui.add(egui::Slider::new(&mut params.velocity_limit, SimulationParams::get_limit_range()).text("Velocity Limit"));

                if ui.button("Reset Particles").clicked() {
                    should_reset_particles = true;
                }
            });

            ui.collapsing("Chase", |ui| {
                ui.add(egui::Slider::new(&mut params.easing, SimulationParams::get_easing_range()).text("Easing"));
                ui.add(egui::Slider::new(&mut params.dead_zone, SimulationParams::get_threshold_range()).text("Dead Zone"));
                ui.add(egui::Slider::new(&mut params.pulse.settle_threshold, SimulationParams::get_threshold_range()).text("Settle Threshold"));
            });

            ui.collapsing("Pulse", |ui| {
                ui.add(egui::Slider::new(&mut params.distortion_radius, SimulationParams::get_radius_range()).text("Radius"));
                ui.add(egui::Slider::new(&mut params.pulse.kick_magnitude, SimulationParams::get_kick_range()).text("Kick"));
                ui.add(egui::Slider::new(&mut params.pulse.decay, SimulationParams::get_decay_range()).text("Decay per Frame"));
                ui.label(format!("Falloff: {:.4}", debug_info.exp_factor));
                ui.label(format!("Magnitude: {:.2}", debug_info.distortion_magnitude));
            });

            ui.separator();

            ui.label(format!("FPS: {:.1}", debug_info.fps));
            ui.label(format!("Frame time: {:.2} ms", debug_info.frame_time.as_secs_f64() * 1000.0));
            ui.label(format!("Particles: {}", debug_info.particles));

            ui.checkbox(&mut params.show_debug, "Show Debug Info");
            ui.checkbox(&mut params.show_chase_marker, "Show Chase Marker");
            ui.checkbox(&mut params.pause_simulation, "Pause Simulation");
        });

    (should_reset_particles, params.detect_changes())
}

// Draw debug information on the screen
pub fn draw_debug_info(draw: &nannou::Draw, debug_info: &DebugInfo, window_rect: nannou::geom::Rect) {
    let margin = 20.0;
    let line_height = 20.0;
    let panel_width = 280.0;
    let lines = debug_info.lines();
    let panel_height = line_height * lines.len() as f32 + margin;

    // Background panel in the bottom-left corner
    draw.rect()
        .x_y(window_rect.left() + panel_width / 2.0, window_rect.bottom() + panel_height / 2.0)
        .w_h(panel_width, panel_height)
        .color(nannou::color::rgba(0.0, 0.0, 0.0, 0.7));

    let text_x = window_rect.left() + margin;
    let top = window_rect.bottom() + panel_height - margin;

    for (i, text) in lines.iter().enumerate() {
        let y = top - i as f32 * line_height;
        draw.text(text)
            .x_y(text_x + panel_width / 2.0 - margin, y)
            .w(panel_width - margin)
            .left_justify()
            .color(nannou::color::WHITE)
            .font_size(14);
    }
}
