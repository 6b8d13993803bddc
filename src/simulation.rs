/*
 * Simulation Module
 *
 * The per-frame loop without any window attached. One call to `step`:
 * 1. takes the newest tracking snapshot, or keeps the previous one
 * 2. decays the distortion pulse
 * 3. eases the chase point toward the primary hand and lets the pulse
 *    controller react (skipped while nobody is tracked)
 * 4. runs one particle system tick with the resulting parameters
 *
 * Rendering only ever reads from here.
 */

use log::{debug, info};
use nannou::prelude::*;

use crate::behavior::{Behavior, ColorShift, Damping, Distortion, Homing};
use crate::chase::ChaseTarget;
use crate::params::SimulationParams;
use crate::particle_system::ParticleSystem;
use crate::pulse::{PulseController, PulsePhase};
use crate::settings::Settings;
use crate::tracking::FrameSnapshot;

// What happened during one frame, for the overlay and for tests
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FrameReport {
    pub actors: usize,
    pub phase: Option<PulsePhase>,
    pub reach: Option<f32>,
    pub chase_moved: bool,
}

pub struct Simulation {
    system: ParticleSystem,
    chase: ChaseTarget,
    pulse: PulseController,
    latest: FrameSnapshot,
    surface: Vec2,
    frame: u64,
    last_report: FrameReport,
}

impl Simulation {
    pub fn new(settings: &Settings, params: &SimulationParams) -> Self {
        let surface = vec2(settings.surface_width(), settings.surface_height());
        let mut system = ParticleSystem::with_grid(
            surface.x,
            surface.y,
            settings.interval,
            params.acceleration_limit,
            params.velocity_limit,
        );

        system.add_behavior(Homing::new(params.homing));
        system.add_behavior(Damping::new(params.damping));
        system.add_behavior(Distortion::new(
            vec3(surface.x * 0.5, surface.y * 0.5, 0.0),
            params.distortion_radius,
            params.initial_exp_factor,
        ));
        system.add_behavior(ColorShift);

        info!(
            "laid out {} particles on a {}x{} surface every {} units",
            system.len(),
            settings.width,
            settings.height,
            settings.interval
        );

        Self {
            system,
            chase: ChaseTarget::new(Vec3::ZERO, params.easing, params.dead_zone),
            pulse: PulseController::new(params.pulse),
            latest: FrameSnapshot::empty(),
            surface,
            frame: 0,
            last_report: FrameReport::default(),
        }
    }

    // Push edited tunables into the running behaviors
    pub fn apply_params(&mut self, params: &SimulationParams) {
        self.system.set_limits(params.acceleration_limit, params.velocity_limit);
        for behavior in self.system.behaviors_mut() {
            match behavior {
                Behavior::Homing(h) => h.magnitude = params.homing,
                Behavior::Damping(d) => *d = Damping::new(params.damping),
                Behavior::Distortion(d) => d.radius = params.distortion_radius.max(0.0),
                Behavior::ColorShift(_) => {}
            }
        }
        self.chase.easing = params.easing.clamp(0.0, 1.0);
        self.chase.dead_zone = params.dead_zone.max(0.0);
        self.pulse.tuning = params.pulse;
        debug!("simulation parameters updated");
    }

    // Keep the newest snapshot; `None` leaves the previous one in place
    pub fn receive(&mut self, incoming: Option<FrameSnapshot>) {
        if let Some(snapshot) = incoming {
            if snapshot.actor_count() != self.latest.actor_count() {
                info!("tracking {} actor(s)", snapshot.actor_count());
            }
            self.latest = snapshot;
        }
    }

    pub fn step(&mut self, incoming: Option<FrameSnapshot>, dt: f32) -> FrameReport {
        self.receive(incoming);

        let mut report = FrameReport {
            actors: self.latest.actor_count(),
            ..FrameReport::default()
        };

        if let Some(distortion) = self.system.distortion_mut() {
            self.pulse.decay(distortion);
        }

        if let Some(hand) = self.latest.primary_hand() {
            self.chase.set_target(hand);
            report.chase_moved = self.chase.step();
            if let Some(distortion) = self.system.distortion_mut() {
                report.phase = Some(self.pulse.react(&self.chase, distortion));
            }
            report.reach = self.latest.actor(0).and_then(|a| a.reach_left());
            if let Some(reach) = report.reach {
                debug!("frame {} reach {:.1}", self.frame, reach);
            }
        }

        self.system.update(dt);
        self.frame += 1;
        self.last_report = report;
        report
    }

    pub fn reset_particles(&mut self) {
        self.system.reset();
    }

    pub fn system(&self) -> &ParticleSystem {
        &self.system
    }

    pub fn system_mut(&mut self) -> &mut ParticleSystem {
        &mut self.system
    }

    pub fn chase(&self) -> &ChaseTarget {
        &self.chase
    }

    pub fn chase_mut(&mut self) -> &mut ChaseTarget {
        &mut self.chase
    }

    pub fn distortion(&self) -> Option<&Distortion> {
        self.system.distortion()
    }

    pub fn phase(&self) -> PulsePhase {
        self.pulse.phase()
    }

    pub fn latest(&self) -> &FrameSnapshot {
        &self.latest
    }

    pub fn last_report(&self) -> FrameReport {
        self.last_report
    }

    pub fn surface(&self) -> Vec2 {
        self.surface
    }

    pub fn frame(&self) -> u64 {
        self.frame
    }
}
