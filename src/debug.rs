/*
 * Debug Information Module
 *
 * This module defines the DebugInfo struct that holds per-frame metrics for
 * the overlay and the control panel:
 * - FPS and frame time
 * - Tracked actor count and reach
 * - Pulse phase and distortion parameters
 */

use std::time::Duration;

use crate::pulse::PulsePhase;

pub struct DebugInfo {
    pub fps: f32,
    pub frame_time: Duration,
    pub source_name: &'static str,
    pub actors: usize,
    pub reach: Option<f32>,
    pub phase: PulsePhase,
    pub chase_distance: f32,
    pub distortion_magnitude: f32,
    pub exp_factor: f32,
    pub particles: usize,
}

impl Default for DebugInfo {
    fn default() -> Self {
        Self {
            fps: 0.0,
            frame_time: Duration::ZERO,
            source_name: "none",
            actors: 0,
            reach: None,
            phase: PulsePhase::Settling,
            chase_distance: 0.0,
            distortion_magnitude: 0.0,
            exp_factor: 0.0,
            particles: 0,
        }
    }
}

impl DebugInfo {
    // Lines shown in the on-screen overlay
    pub fn lines(&self) -> Vec<String> {
        vec![
            format!("FPS: {:.1}", self.fps),
            format!("Frame time: {:.2} ms", self.frame_time.as_secs_f64() * 1000.0),
            format!("Source: {} ({} actor(s))", self.source_name, self.actors),
            match self.reach {
                Some(reach) => format!("Reach: {:.1}", reach),
                None => "Reach: -".to_string(),
            },
            format!("Pulse: {:?} (chase {:.1})", self.phase, self.chase_distance),
            format!("Magnitude: {:.2}  Falloff: {:.4}", self.distortion_magnitude, self.exp_factor),
            format!("Particles: {}", self.particles),
        ]
    }
}
