/*
 * Particle Module
 *
 * This module defines the Particle struct: a point mass anchored to a home
 * position on the layout grid. Particles never steer themselves; behaviors
 * push on them and the particle system integrates and clamps.
 */

use nannou::color::{hsva, Hsva};
use nannou::prelude::*;

// Upper end of the saturation/value/alpha scale used by ParticleColor
pub const CHANNEL_MAX: f32 = 255.0;

// Hue wraps at a full turn
pub const HUE_RANGE: f32 = 360.0;

// Color in HSB space with alpha. Hue is in degrees, the other channels
// use a 0-255 scale.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ParticleColor {
    pub hue: f32,
    pub saturation: f32,
    pub value: f32,
    pub alpha: f32,
}

impl ParticleColor {
    pub fn new(hue: f32, saturation: f32, value: f32, alpha: f32) -> Self {
        Self {
            hue: hue.rem_euclid(HUE_RANGE),
            saturation: saturation.clamp(0.0, CHANNEL_MAX),
            value: value.clamp(0.0, CHANNEL_MAX),
            alpha: alpha.clamp(0.0, CHANNEL_MAX),
        }
    }

    // Convert to nannou's normalized HSVA for drawing
    pub fn to_hsva(self) -> Hsva {
        hsva(
            self.hue / HUE_RANGE,
            self.saturation / CHANNEL_MAX,
            self.value / CHANNEL_MAX,
            self.alpha / CHANNEL_MAX,
        )
    }
}

impl Default for ParticleColor {
    // Fully transparent until the first color pass
    fn default() -> Self {
        Self::new(0.0, 0.0, CHANNEL_MAX, 0.0)
    }
}

#[derive(Clone, Debug)]
pub struct Particle {
    pub position: Vec3,
    pub velocity: Vec3,
    pub acceleration: Vec3,
    pub color: ParticleColor,
    home: Vec3,
}

impl Particle {
    pub fn new(home: Vec3) -> Self {
        Self {
            position: home,
            velocity: Vec3::ZERO,
            acceleration: Vec3::ZERO,
            color: ParticleColor::default(),
            home,
        }
    }

    pub fn home(&self) -> Vec3 {
        self.home
    }

    // Displacement from the rest anchor
    pub fn displacement(&self) -> Vec3 {
        self.home - self.position
    }

    pub fn is_finite(&self) -> bool {
        self.position.is_finite() && self.velocity.is_finite() && self.acceleration.is_finite()
    }

    // Snap back to the rest anchor with no motion
    pub fn reset(&mut self) {
        self.position = self.home;
        self.velocity = Vec3::ZERO;
        self.acceleration = Vec3::ZERO;
    }

    // Advance one step. Acceleration is capped before it feeds velocity and
    // velocity is capped before it feeds position; forces do not persist.
    pub fn integrate(&mut self, dt: f32, acceleration_limit: f32, velocity_limit: f32) {
        self.acceleration = limit_length(self.acceleration, acceleration_limit);
        self.velocity = limit_length(self.velocity + self.acceleration * dt, velocity_limit);
        self.position += self.velocity * dt;
        self.acceleration = Vec3::ZERO;
    }
}

// Rescale a vector down to `max` while keeping its direction
pub fn limit_length(v: Vec3, max: f32) -> Vec3 {
    let length_squared = v.length_squared();
    if length_squared > max * max {
        v * (max / length_squared.sqrt())
    } else {
        v
    }
}
