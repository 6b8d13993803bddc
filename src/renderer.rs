/*
 * Renderer Module
 *
 * This module draws the particle field, the chase marker and the optional
 * debug overlay. It only reads the model; every simulation parameter was
 * already settled during update.
 */

use nannou::prelude::*;

use crate::app::Model;
use crate::ui;

// Light yellow at low alpha, drawn over the field
const CHASE_MARKER_COLOR: (f32, f32, f32, f32) = (1.0, 1.0, 0.88, 56.0 / 255.0);

// Render the model
pub fn view(app: &App, model: &Model, frame: Frame) {
    let draw = app.draw();
    draw.background().color(BLACK);

    let window_rect = app.window_rect();

    model.simulation.system().draw(&draw, &model.viewport, model.params.point_size);

    // Only meaningful once someone has been tracked
    if model.params.show_chase_marker && model.simulation.latest().actor_count() > 0 {
        let chase = model.simulation.chase().current();
        let (r, g, b, a) = CHASE_MARKER_COLOR;
        draw.ellipse()
            .xy(model.viewport.surface_to_screen(chase.truncate()))
            .radius(model.params.chase_marker_radius)
            .color(rgba(r, g, b, a));
    }

    if model.params.show_debug {
        ui::draw_debug_info(&draw, &model.debug_info, window_rect);
    }

    if let Err(e) = draw.to_frame(app, &frame) {
        log::error!("failed to draw frame: {:?}", e);
    }

    if model.params.show_controls {
        if let Err(e) = model.egui.draw_to_frame(&frame) {
            log::error!("failed to draw controls: {:?}", e);
        }
    }
}
