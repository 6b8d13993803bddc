/*
 * Viewport Module
 *
 * This module defines the Viewport struct that maps between surface space
 * (origin top-left, y down, where the grid and tracking data live) and
 * nannou's window space (origin at the center, y up).
 */

use nannou::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub surface: Vec2,
    pub window_center: Vec2,
}

impl Viewport {
    pub fn new(surface: Vec2) -> Self {
        Self {
            surface,
            window_center: Vec2::ZERO,
        }
    }

    // Keep the surface centered if the window rect moves
    pub fn fit(&mut self, window_rect: Rect) {
        self.window_center = window_rect.xy();
    }

    // Convert a point from surface space to screen space
    pub fn surface_to_screen(&self, point: Vec2) -> Vec2 {
        let half = self.surface * 0.5;
        vec2(point.x - half.x, half.y - point.y) + self.window_center
    }

    // Convert a point from screen space to surface space
    pub fn screen_to_surface(&self, point: Vec2) -> Vec2 {
        let half = self.surface * 0.5;
        let centered = point - self.window_center;
        vec2(centered.x + half.x, half.y - centered.y)
    }
}
