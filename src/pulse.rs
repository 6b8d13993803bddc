/*
 * Pulse Module
 *
 * Couples the chase point to the distortion behavior. Every frame the pulse
 * first decays, then the chase distance picks a phase:
 * - Settling: the falloff factor climbs back toward its ceiling (the pulse
 *   tightens and cools down)
 * - Pursuing: the distortion jumps to the chase point with a full kick and
 *   the falloff factor slowly widens, bouncing back off its floor
 *
 * The two ladders (chase position and falloff) run at different rates on
 * purpose. The decay-then-override order shapes the pulse curve.
 */

use log::debug;

use crate::behavior::Distortion;
use crate::chase::ChaseTarget;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PulsePhase {
    Settling,
    Pursuing,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PulseTuning {
    // Chase distance above which the pulse follows the hand
    pub settle_threshold: f32,
    // Magnitude forced onto the distortion while pursuing
    pub kick_magnitude: f32,
    // Per-frame multiplier applied to the magnitude before the phase logic
    pub decay: f32,
    pub exp_step_down: f32,
    pub exp_floor: f32,
    pub exp_reset: f32,
    pub exp_step_up: f32,
    pub exp_ceiling: f32,
}

impl Default for PulseTuning {
    fn default() -> Self {
        Self {
            settle_threshold: 30.0,
            kick_magnitude: 100.0,
            decay: 0.5,
            exp_step_down: 0.0005 * 1.0002,
            exp_floor: 1.0,
            exp_reset: 0.95,
            exp_step_up: 0.0075,
            exp_ceiling: 2.0,
        }
    }
}

#[derive(Clone, Debug)]
pub struct PulseController {
    pub tuning: PulseTuning,
    phase: PulsePhase,
}

impl PulseController {
    pub fn new(tuning: PulseTuning) -> Self {
        Self {
            tuning,
            phase: PulsePhase::Settling,
        }
    }

    pub fn phase(&self) -> PulsePhase {
        self.phase
    }

    // Frame-wide decay of the pulse, runs before `react`
    pub fn decay(&self, distortion: &mut Distortion) {
        distortion.magnitude *= self.tuning.decay;
    }

    pub fn classify(&self, chase: &ChaseTarget) -> PulsePhase {
        if chase.distance() > self.tuning.settle_threshold {
            PulsePhase::Pursuing
        } else {
            PulsePhase::Settling
        }
    }

    // Apply the phase for this frame's chase state to the distortion
    pub fn react(&mut self, chase: &ChaseTarget, distortion: &mut Distortion) -> PulsePhase {
        let phase = self.classify(chase);
        let t = &self.tuning;

        match phase {
            PulsePhase::Pursuing => {
                distortion.center = chase.current();
                distortion.magnitude = t.kick_magnitude;
                distortion.exp_factor -= t.exp_step_down;
                if distortion.exp_factor <= t.exp_floor {
                    distortion.exp_factor = t.exp_reset;
                }
            }
            PulsePhase::Settling => {
                distortion.exp_factor = (distortion.exp_factor + t.exp_step_up).min(t.exp_ceiling);
            }
        }

        if phase != self.phase {
            debug!("pulse {:?} -> {:?} (chase distance {:.1})", self.phase, phase, chase.distance());
            self.phase = phase;
        }
        phase
    }
}

impl Default for PulseController {
    fn default() -> Self {
        Self::new(PulseTuning::default())
    }
}
