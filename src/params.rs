/*
 * Simulation Parameters Module
 *
 * This module defines the SimulationParams struct that contains all the
 * adjustable parameters for the particle field. These parameters can be
 * modified through the control panel. It also provides change detection so
 * the simulation only re-reads them when something moved.
 */

use crate::pulse::PulseTuning;

// Parameters for the simulation that can be adjusted via UI
#[derive(Clone, Debug)]
pub struct SimulationParams {
    pub acceleration_limit: f32,
    pub velocity_limit: f32,
    pub homing: f32,
    pub damping: f32,
    pub distortion_radius: f32,
    pub initial_exp_factor: f32,
    pub easing: f32,
    pub dead_zone: f32,
    pub pulse: PulseTuning,
    pub time_step: f32,
    // Display
    pub point_size: f32,
    pub chase_marker_radius: f32,
    pub show_debug: bool,
    pub show_chase_marker: bool,
    pub show_controls: bool,
    pub pause_simulation: bool,

    // Internal state for tracking changes
    previous_values: Option<ParamSnapshot>,
}

// A snapshot of the physics-relevant values used for change detection
#[derive(Clone, Debug, PartialEq)]
struct ParamSnapshot {
    acceleration_limit: f32,
    velocity_limit: f32,
    homing: f32,
    damping: f32,
    distortion_radius: f32,
    easing: f32,
    dead_zone: f32,
    pulse: PulseTuning,
}

impl Default for SimulationParams {
    fn default() -> Self {
        Self {
            acceleration_limit: 2.0,
            velocity_limit: 10.0,
            homing: 0.175,
            damping: 0.95,
            distortion_radius: 1000.0,
            initial_exp_factor: 0.5,
            easing: 0.05,
            dead_zone: 2.0,
            pulse: PulseTuning::default(),
            time_step: 1.0,
            point_size: 10.0,
            chase_marker_radius: 18.0,
            show_debug: false,
            show_chase_marker: true,
            show_controls: false,
            pause_simulation: false,
            previous_values: None,
        }
    }
}

impl SimulationParams {
    fn snapshot(&self) -> ParamSnapshot {
        ParamSnapshot {
            acceleration_limit: self.acceleration_limit,
            velocity_limit: self.velocity_limit,
            homing: self.homing,
            damping: self.damping,
            distortion_radius: self.distortion_radius,
            easing: self.easing,
            dead_zone: self.dead_zone,
            pulse: self.pulse,
        }
    }

    // Take a snapshot of current parameter values for change detection
    pub fn take_snapshot(&mut self) {
        self.previous_values = Some(self.snapshot());
    }

    // Whether any physics parameter changed since the last snapshot
    pub fn detect_changes(&self) -> bool {
        match &self.previous_values {
            Some(prev) => *prev != self.snapshot(),
            None => false,
        }
    }

    // Get parameter ranges for UI sliders
    pub fn get_limit_range() -> std::ops::RangeInclusive<f32> {
        0.1..=50.0
    }

    pub fn get_homing_range() -> std::ops::RangeInclusive<f32> {
        0.0..=1.0
    }

    pub fn get_damping_range() -> std::ops::RangeInclusive<f32> {
        0.5..=1.0
    }

    pub fn get_radius_range() -> std::ops::RangeInclusive<f32> {
        10.0..=2000.0
    }

    pub fn get_easing_range() -> std::ops::RangeInclusive<f32> {
        0.01..=1.0
    }

    pub fn get_threshold_range() -> std::ops::RangeInclusive<f32> {
        0.0..=200.0
    }

    pub fn get_kick_range() -> std::ops::RangeInclusive<f32> {
        -300.0..=300.0
    }

    pub fn get_decay_range() -> std::ops::RangeInclusive<f32> {
        0.0..=1.0
    }
}
