/*
 * Particle System Module
 *
 * Owns the particle grid and the ordered behavior pipeline. Each tick every
 * behavior visits every particle, then the particles integrate under the
 * configured acceleration and velocity limits.
 *
 * Degenerate cases (a particle on the distortion center, a particle whose
 * state went non-finite) are absorbed locally and reported once per class.
 */

use log::warn;
use nannou::prelude::*;

use crate::behavior::{Applied, Behavior, Degeneracy, Distortion};
use crate::particle::Particle;
use crate::viewport::Viewport;

// Additive blending: overlapping particles brighten each other
const ADDITIVE: wgpu::BlendComponent = wgpu::BlendComponent {
    src_factor: wgpu::BlendFactor::SrcAlpha,
    dst_factor: wgpu::BlendFactor::One,
    operation: wgpu::BlendOperation::Add,
};

// Columns and rows of a grid covering 0..=width x 0..=height
pub fn grid_dimensions(width: f32, height: f32, interval: f32) -> (usize, usize) {
    let columns = (width / interval).floor() as usize + 1;
    let rows = (height / interval).floor() as usize + 1;
    (columns, rows)
}

pub struct ParticleSystem {
    particles: Vec<Particle>,
    behaviors: Vec<Behavior>,
    acceleration_limit: f32,
    velocity_limit: f32,
    reported: Vec<Degeneracy>,
}

impl ParticleSystem {
    pub fn new(acceleration_limit: f32, velocity_limit: f32) -> Self {
        Self {
            particles: Vec::new(),
            behaviors: Vec::new(),
            acceleration_limit: acceleration_limit.max(0.0),
            velocity_limit: velocity_limit.max(0.0),
            reported: Vec::new(),
        }
    }

    // Lay particles out on a grid covering 0..=width x 0..=height, row-major
    pub fn with_grid(width: f32, height: f32, interval: f32, acceleration_limit: f32, velocity_limit: f32) -> Self {
        let mut system = Self::new(acceleration_limit, velocity_limit);
        let (columns, rows) = grid_dimensions(width, height, interval);
        system.particles.reserve(columns * rows);

        for row in 0..rows {
            let y = row as f32 * interval;
            for column in 0..columns {
                let x = column as f32 * interval;
                system.add_particle(Particle::new(vec3(x, y, 0.0)));
            }
        }
        system
    }

    pub fn add_particle(&mut self, particle: Particle) {
        self.particles.push(particle);
    }

    pub fn add_behavior(&mut self, behavior: impl Into<Behavior>) {
        self.behaviors.push(behavior.into());
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn particles_mut(&mut self) -> &mut [Particle] {
        &mut self.particles
    }

    pub fn behaviors(&self) -> &[Behavior] {
        &self.behaviors
    }

    pub fn behaviors_mut(&mut self) -> &mut [Behavior] {
        &mut self.behaviors
    }

    // First registered distortion, the one the pulse controller drives
    pub fn distortion(&self) -> Option<&Distortion> {
        self.behaviors.iter().find_map(|b| match b {
            Behavior::Distortion(d) => Some(d),
            _ => None,
        })
    }

    pub fn distortion_mut(&mut self) -> Option<&mut Distortion> {
        self.behaviors.iter_mut().find_map(|b| match b {
            Behavior::Distortion(d) => Some(d),
            _ => None,
        })
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn acceleration_limit(&self) -> f32 {
        self.acceleration_limit
    }

    pub fn velocity_limit(&self) -> f32 {
        self.velocity_limit
    }

    pub fn set_limits(&mut self, acceleration_limit: f32, velocity_limit: f32) {
        self.acceleration_limit = acceleration_limit.max(0.0);
        self.velocity_limit = velocity_limit.max(0.0);
    }

    // Put every particle back on its home anchor
    pub fn reset(&mut self) {
        for particle in &mut self.particles {
            particle.reset();
        }
    }

    // One simulation tick
    pub fn update(&mut self, dt: f32) {
        let acceleration_limit = self.acceleration_limit;
        let velocity_limit = self.velocity_limit;
        let mut skipped: Vec<Degeneracy> = Vec::new();

        for particle in &mut self.particles {
            for behavior in &self.behaviors {
                if let Applied::Skipped(reason) = behavior.apply(particle, dt) {
                    if !skipped.contains(&reason) {
                        skipped.push(reason);
                    }
                }
            }

            particle.integrate(dt, acceleration_limit, velocity_limit);

            // A particle that went non-finite would never come back on its own
            if !particle.is_finite() {
                particle.reset();
                if !skipped.contains(&Degeneracy::NonFinitePosition) {
                    skipped.push(Degeneracy::NonFinitePosition);
                }
            }
        }

        for reason in skipped {
            self.report(reason);
        }
    }

    fn report(&mut self, reason: Degeneracy) {
        if self.reported.contains(&reason) {
            return;
        }
        warn!("skipping degenerate particle update: {}", reason.describe());
        self.reported.push(reason);
    }

    // Draw every particle as a small square in storage order
    pub fn draw(&self, draw: &Draw, viewport: &Viewport, point_size: f32) {
        let draw = draw.color_blend(ADDITIVE);
        for particle in &self.particles {
            let screen_pos = viewport.surface_to_screen(particle.position.truncate());
            draw.rect()
                .xy(screen_pos)
                .w_h(point_size, point_size)
                .color(particle.color.to_hsva());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::behavior::{ColorShift, Damping, Homing};
    use approx::assert_relative_eq;

    #[test]
    fn grid_is_row_major_and_inclusive() {
        let system = ParticleSystem::with_grid(16.0, 8.0, 8.0, 2.0, 10.0);
        // 3 columns (0, 8, 16) by 2 rows (0, 8)
        assert_eq!(system.len(), 6);
        let homes: Vec<Vec3> = system.particles().iter().map(|p| p.home()).collect();
        assert_eq!(homes[0], vec3(0.0, 0.0, 0.0));
        assert_eq!(homes[1], vec3(8.0, 0.0, 0.0));
        assert_eq!(homes[2], vec3(16.0, 0.0, 0.0));
        assert_eq!(homes[3], vec3(0.0, 8.0, 0.0));
    }

    #[test]
    fn behaviors_run_in_registration_order() {
        // Damping before homing leaves the homing acceleration intact;
        // the velocity it adds is not damped this tick.
        let mut system = ParticleSystem::new(100.0, 100.0);
        let mut p = Particle::new(Vec3::ZERO);
        p.position = vec3(10.0, 0.0, 0.0);
        system.add_particle(p.clone());
        system.add_behavior(Damping::new(0.5));
        system.add_behavior(Homing::new(0.1));
        system.update(1.0);
        assert_relative_eq!(system.particles()[0].velocity.x, -1.0, epsilon = 1e-5);

        let mut reversed = ParticleSystem::new(100.0, 100.0);
        let mut q = p;
        q.velocity = vec3(2.0, 0.0, 0.0);
        reversed.add_particle(q);
        reversed.add_behavior(Homing::new(0.1));
        reversed.add_behavior(Damping::new(0.5));
        reversed.update(1.0);
        // (2 * 0.5) + (-1)
        assert_relative_eq!(reversed.particles()[0].velocity.x, 0.0, epsilon = 1e-5);
    }

    #[test]
    fn update_clears_acceleration() {
        let mut system = ParticleSystem::with_grid(8.0, 8.0, 8.0, 2.0, 10.0);
        system.add_behavior(Homing::new(0.175));
        system.particles_mut()[0].position = vec3(50.0, 50.0, 0.0);
        system.update(1.0);
        assert!(system.particles().iter().all(|p| p.acceleration == Vec3::ZERO));
    }

    #[test]
    fn distortion_lookup_finds_first_distortion() {
        let mut system = ParticleSystem::new(2.0, 10.0);
        system.add_behavior(Homing::new(0.1));
        assert!(system.distortion().is_none());
        system.add_behavior(Distortion::new(vec3(1.0, 2.0, 0.0), 100.0, 0.5));
        system.add_behavior(ColorShift);
        if let Some(d) = system.distortion_mut() {
            d.magnitude = 42.0;
        }
        assert_eq!(system.distortion().map(|d| d.magnitude), Some(42.0));
    }

    #[test]
    fn corrupted_particle_heals_back_home() {
        let mut system = ParticleSystem::new(2.0, 10.0);
        let mut p = Particle::new(vec3(4.0, 4.0, 0.0));
        p.velocity = vec3(f32::NAN, 0.0, 0.0);
        system.add_particle(p);
        system.add_behavior(Homing::new(0.175));
        system.add_behavior(ColorShift);
        system.update(1.0);

        let healed = &system.particles()[0];
        assert!(healed.is_finite());
        assert_eq!(healed.position, healed.home());
    }

    #[test]
    fn reset_restores_grid() {
        let mut system = ParticleSystem::with_grid(8.0, 8.0, 8.0, 2.0, 10.0);
        for p in system.particles_mut() {
            p.position += vec3(3.0, 3.0, 0.0);
            p.velocity = vec3(1.0, 0.0, 0.0);
        }
        system.reset();
        assert!(system.particles().iter().all(|p| p.position == p.home() && p.velocity == Vec3::ZERO));
    }
}
