/*
 * Behavior Module
 *
 * Behaviors are the per-particle force and color modifiers that the particle
 * system runs every tick, in registration order:
 * 1. Homing: pull back toward the home anchor
 * 2. Damping: bleed off velocity
 * 3. Distortion: radial pulse around a moving center
 * 4. ColorShift: color from displacement
 *
 * A behavior only ever touches the particle it is handed.
 */

use nannou::prelude::*;

use crate::particle::{Particle, ParticleColor, CHANNEL_MAX};

// Below this length a direction vector is treated as undefined
pub const DIRECTION_EPSILON: f32 = 1e-6;

// Reasons a behavior skipped a particle for one tick
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Degeneracy {
    NonFinitePosition,
    ZeroLengthDirection,
}

impl Degeneracy {
    pub fn describe(self) -> &'static str {
        match self {
            Degeneracy::NonFinitePosition => "particle position is not finite",
            Degeneracy::ZeroLengthDirection => "particle sits on the distortion center",
        }
    }
}

// Outcome of applying one behavior to one particle
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Applied {
    Done,
    Skipped(Degeneracy),
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Homing {
    pub magnitude: f32,
}

impl Homing {
    pub fn new(magnitude: f32) -> Self {
        Self { magnitude }
    }

    fn apply(&self, particle: &mut Particle) -> Applied {
        if !particle.position.is_finite() {
            return Applied::Skipped(Degeneracy::NonFinitePosition);
        }
        particle.acceleration += particle.displacement() * self.magnitude;
        Applied::Done
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Damping {
    pub magnitude: f32,
}

impl Damping {
    pub fn new(magnitude: f32) -> Self {
        Self {
            magnitude: magnitude.clamp(0.0, 1.0),
        }
    }

    fn apply(&self, particle: &mut Particle) -> Applied {
        particle.velocity *= self.magnitude;
        Applied::Done
    }
}

// A radial pulse. Positive magnitude pushes particles away from the center.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Distortion {
    pub center: Vec3,
    pub radius: f32,
    pub magnitude: f32,
    pub exp_factor: f32,
}

impl Distortion {
    pub fn new(center: Vec3, radius: f32, exp_factor: f32) -> Self {
        Self {
            center,
            radius: radius.max(0.0),
            magnitude: 0.0,
            exp_factor,
        }
    }

    /// Scalar strength of the pulse at `distance` from the center.
    ///
    /// Exponential falloff, tapered by a smooth window that is 1 at the center
    /// and reaches 0 exactly at the radius so there is no visible seam.
    pub fn falloff(&self, distance: f32) -> f32 {
        if !(distance < self.radius) {
            return 0.0;
        }
        let t = distance.max(0.0) / self.radius;
        let window = (1.0 - t * t).powi(2);
        self.magnitude * (-self.exp_factor * distance).exp() * window
    }

    fn apply(&self, particle: &mut Particle) -> Applied {
        if !particle.position.is_finite() {
            return Applied::Skipped(Degeneracy::NonFinitePosition);
        }
        let offset = particle.position - self.center;
        let distance = offset.length();
        if distance >= self.radius {
            return Applied::Done;
        }
        if distance < DIRECTION_EPSILON {
            return Applied::Skipped(Degeneracy::ZeroLengthDirection);
        }
        let strength = self.falloff(distance);
        if strength.is_finite() {
            particle.acceleration += offset / distance * strength;
        }
        Applied::Done
    }
}

// Color from how far a particle has been pushed off its anchor
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ColorShift;

impl ColorShift {
    // Displacement length is doubled before it becomes a color channel
    pub const GAIN: f32 = 2.0;

    pub fn color_for(displacement: Vec3) -> ParticleColor {
        let len = displacement.length() * Self::GAIN;
        ParticleColor::new(len, len, CHANNEL_MAX, len)
    }

    fn apply(&self, particle: &mut Particle) -> Applied {
        let displacement = particle.displacement();
        if !displacement.is_finite() {
            return Applied::Skipped(Degeneracy::NonFinitePosition);
        }
        particle.color = Self::color_for(displacement);
        Applied::Done
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Behavior {
    Homing(Homing),
    Damping(Damping),
    Distortion(Distortion),
    ColorShift(ColorShift),
}

impl Behavior {
    // `dt` is accepted for every variant; the current set is
    // frame-based and integrates time in the particle system instead.
    pub fn apply(&self, particle: &mut Particle, _dt: f32) -> Applied {
        match self {
            Behavior::Homing(b) => b.apply(particle),
            Behavior::Damping(b) => b.apply(particle),
            Behavior::Distortion(b) => b.apply(particle),
            Behavior::ColorShift(b) => b.apply(particle),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Behavior::Homing(_) => "homing",
            Behavior::Damping(_) => "damping",
            Behavior::Distortion(_) => "distortion",
            Behavior::ColorShift(_) => "color shift",
        }
    }
}

impl From<Homing> for Behavior {
    fn from(b: Homing) -> Self {
        Behavior::Homing(b)
    }
}

impl From<Damping> for Behavior {
    fn from(b: Damping) -> Self {
        Behavior::Damping(b)
    }
}

impl From<Distortion> for Behavior {
    fn from(b: Distortion) -> Self {
        Behavior::Distortion(b)
    }
}

impl From<ColorShift> for Behavior {
    fn from(b: ColorShift) -> Self {
        Behavior::ColorShift(b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rstest::rstest;

    fn displaced(home: Vec3, position: Vec3) -> Particle {
        let mut p = Particle::new(home);
        p.position = position;
        p
    }

    #[test]
    fn homing_pulls_toward_home() {
        let mut p = displaced(Vec3::ZERO, vec3(10.0, 0.0, 0.0));
        Behavior::from(Homing::new(0.175)).apply(&mut p, 1.0);
        assert_relative_eq!(p.acceleration.x, -1.75, epsilon = 1e-5);
    }

    #[test]
    fn damping_scales_velocity() {
        let mut p = Particle::new(Vec3::ZERO);
        p.velocity = vec3(4.0, -2.0, 0.0);
        Behavior::from(Damping::new(0.95)).apply(&mut p, 1.0);
        assert_relative_eq!(p.velocity.x, 3.8, epsilon = 1e-5);
        assert_relative_eq!(p.velocity.y, -1.9, epsilon = 1e-5);
    }

    #[test]
    fn falloff_equals_magnitude_at_center() {
        let mut d = Distortion::new(Vec3::ZERO, 1000.0, 0.5);
        d.magnitude = 100.0;
        assert_relative_eq!(d.falloff(0.0), 100.0, epsilon = 1e-4);
    }

    #[rstest]
    #[case(0.0)]
    #[case(0.01)]
    #[case(0.5)]
    fn falloff_vanishes_at_radius(#[case] exp_factor: f32) {
        let mut d = Distortion::new(Vec3::ZERO, 50.0, exp_factor);
        d.magnitude = 100.0;
        assert!(d.falloff(50.0).abs() <= 1e-4);
        assert!(d.falloff(49.999).abs() <= 1e-2);
        assert_eq!(d.falloff(75.0), 0.0);
    }

    #[test]
    fn distortion_pushes_outward() {
        let mut d = Distortion::new(vec3(100.0, 100.0, 0.0), 1000.0, 0.01);
        d.magnitude = 100.0;
        let mut p = displaced(Vec3::ZERO, vec3(110.0, 100.0, 0.0));
        assert_eq!(Behavior::from(d).apply(&mut p, 1.0), Applied::Done);
        assert!(p.acceleration.x > 0.0);
        assert_relative_eq!(p.acceleration.y, 0.0, epsilon = 1e-6);
    }

    #[test]
    fn distortion_at_center_contributes_nothing() {
        let mut d = Distortion::new(vec3(5.0, 5.0, 0.0), 100.0, 0.5);
        d.magnitude = 100.0;
        let mut p = displaced(vec3(5.0, 5.0, 0.0), vec3(5.0, 5.0, 0.0));
        let applied = Behavior::from(d).apply(&mut p, 1.0);
        assert_eq!(applied, Applied::Skipped(Degeneracy::ZeroLengthDirection));
        assert_eq!(p.acceleration, Vec3::ZERO);
    }

    #[test]
    fn non_finite_position_is_skipped() {
        let mut d = Distortion::new(Vec3::ZERO, 100.0, 0.5);
        d.magnitude = 100.0;
        let mut p = displaced(Vec3::ZERO, vec3(f32::NAN, 0.0, 0.0));
        let applied = Behavior::from(d).apply(&mut p, 1.0);
        assert_eq!(applied, Applied::Skipped(Degeneracy::NonFinitePosition));
        assert_eq!(p.acceleration, Vec3::ZERO);

        let applied = Behavior::from(Homing::new(0.2)).apply(&mut p, 1.0);
        assert_eq!(applied, Applied::Skipped(Degeneracy::NonFinitePosition));
        assert_eq!(p.acceleration, Vec3::ZERO);
    }

    #[test]
    fn color_at_home_is_blank() {
        let mut p = Particle::new(vec3(3.0, 3.0, 0.0));
        Behavior::from(ColorShift).apply(&mut p, 1.0);
        assert_eq!(p.color.hue, 0.0);
        assert_eq!(p.color.saturation, 0.0);
        assert_eq!(p.color.alpha, 0.0);
        assert_eq!(p.color.value, 255.0);
    }

    #[test]
    fn color_clamps_saturation_and_wraps_hue() {
        // len = 200 * 2 = 400
        let mut p = displaced(Vec3::ZERO, vec3(200.0, 0.0, 0.0));
        Behavior::from(ColorShift).apply(&mut p, 1.0);
        assert_eq!(p.color.saturation, 255.0);
        assert_eq!(p.color.alpha, 255.0);
        assert_relative_eq!(p.color.hue, 40.0, epsilon = 1e-3);
    }

    #[test]
    fn color_tracks_small_displacement() {
        let c = ColorShift::color_for(vec3(30.0, 40.0, 0.0));
        assert_relative_eq!(c.hue, 100.0, epsilon = 1e-4);
        assert_relative_eq!(c.saturation, 100.0, epsilon = 1e-4);
        assert_relative_eq!(c.alpha, 100.0, epsilon = 1e-4);
    }
}
