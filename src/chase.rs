/*
 * Chase Module
 *
 * A ChaseTarget eases a follow point toward the latest tracked point. Inside
 * the dead zone the follow point is left alone so a resting hand does not
 * make the pulse jitter.
 */

use nannou::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ChaseTarget {
    target: Vec3,
    current: Vec3,
    pub easing: f32,
    pub dead_zone: f32,
}

impl ChaseTarget {
    pub const DEFAULT_EASING: f32 = 0.05;
    pub const DEFAULT_DEAD_ZONE: f32 = 2.0;

    pub fn new(start: Vec3, easing: f32, dead_zone: f32) -> Self {
        Self {
            target: start,
            current: start,
            easing: easing.clamp(0.0, 1.0),
            dead_zone: dead_zone.max(0.0),
        }
    }

    pub fn target(&self) -> Vec3 {
        self.target
    }

    pub fn current(&self) -> Vec3 {
        self.current
    }

    pub fn set_target(&mut self, target: Vec3) {
        self.target = target;
    }

    // Remaining distance between the follow point and the target
    pub fn distance(&self) -> f32 {
        self.target.distance(self.current)
    }

    pub fn has_arrived(&self) -> bool {
        !(self.distance() > self.dead_zone)
    }

    // Move a fraction of the remaining delta. Returns whether the follow
    // point moved.
    pub fn step(&mut self) -> bool {
        if self.has_arrived() {
            return false;
        }
        self.current += (self.target - self.current) * self.easing;
        true
    }
}

impl Default for ChaseTarget {
    fn default() -> Self {
        Self::new(Vec3::ZERO, Self::DEFAULT_EASING, Self::DEFAULT_DEAD_ZONE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn eases_by_fraction_of_remaining_delta() {
        let mut chase = ChaseTarget::default();
        chase.set_target(vec3(100.0, 0.0, 0.0));
        assert!(chase.step());
        assert_relative_eq!(chase.current().x, 5.0, epsilon = 1e-5);
        assert!(chase.step());
        assert_relative_eq!(chase.current().x, 9.75, epsilon = 1e-5);
    }

    #[test]
    fn settles_inside_dead_zone_and_stays_put() {
        let mut chase = ChaseTarget::default();
        chase.set_target(vec3(100.0, 0.0, 0.0));

        let mut previous = chase.distance();
        let mut steps = 0;
        while chase.step() {
            let distance = chase.distance();
            assert!(distance < previous);
            previous = distance;
            steps += 1;
            assert!(steps < 1000, "chase never settled");
        }

        assert!(chase.distance() <= 2.0);
        let settled = chase.current();
        for _ in 0..10 {
            assert!(!chase.step());
            assert_eq!(chase.current(), settled);
        }
    }

    #[test]
    fn new_target_restarts_pursuit() {
        let mut chase = ChaseTarget::new(vec3(10.0, 10.0, 0.0), 0.5, 2.0);
        assert!(!chase.step());
        chase.set_target(vec3(20.0, 10.0, 0.0));
        assert!(chase.step());
        assert_relative_eq!(chase.current().x, 15.0, epsilon = 1e-5);
    }
}
