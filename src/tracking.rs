/*
 * Tracking Module
 *
 * Snapshot types for body tracking data and the sources that produce them.
 * A snapshot is an immutable per-frame list of skeletons, each exposing named
 * joints in surface coordinates. The sensor parser itself lives outside this
 * crate and plugs in through the TrackingSource trait.
 *
 * Sources provided here:
 * - PointerSource: the mouse stands in for a left hand
 * - SimulatedActor: a seeded wandering hand for running without a sensor
 */

use log::debug;
use nannou::prelude::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum JointType {
    Head,
    SpineShoulder,
    ShoulderLeft,
    ElbowLeft,
    WristLeft,
    HandLeft,
    ShoulderRight,
    ElbowRight,
    WristRight,
    HandRight,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Skeleton {
    joints: Vec<(JointType, Vec3)>,
}

impl Skeleton {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_joint(mut self, joint: JointType, position: Vec3) -> Self {
        self.set_joint(joint, position);
        self
    }

    pub fn set_joint(&mut self, joint: JointType, position: Vec3) {
        match self.joints.iter_mut().find(|(j, _)| *j == joint) {
            Some(entry) => entry.1 = position,
            None => self.joints.push((joint, position)),
        }
    }

    pub fn joint(&self, joint: JointType) -> Option<Vec3> {
        self.joints.iter().find(|(j, _)| *j == joint).map(|(_, p)| *p)
    }

    pub fn hand_left(&self) -> Option<Vec3> {
        self.joint(JointType::HandLeft)
    }

    // Hand-to-elbow distance on the left side
    pub fn reach_left(&self) -> Option<f32> {
        Some(self.joint(JointType::HandLeft)?.distance(self.joint(JointType::ElbowLeft)?))
    }

    pub fn reach_right(&self) -> Option<f32> {
        Some(self.joint(JointType::HandRight)?.distance(self.joint(JointType::ElbowRight)?))
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct FrameSnapshot {
    actors: Vec<Skeleton>,
}

impl FrameSnapshot {
    pub fn new(actors: Vec<Skeleton>) -> Self {
        Self { actors }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn actor_count(&self) -> usize {
        self.actors.len()
    }

    pub fn actor(&self, index: usize) -> Option<&Skeleton> {
        self.actors.get(index)
    }

    pub fn actors(&self) -> &[Skeleton] {
        &self.actors
    }

    // Left hand of the first tracked actor, projected onto the particle plane.
    // Non-finite coordinates count as no update.
    pub fn primary_hand(&self) -> Option<Vec3> {
        let hand = self.actor(0)?.hand_left()?;
        let projected = vec3(hand.x, hand.y, 0.0);
        projected.is_finite().then_some(projected)
    }
}

// A non-blocking feed of tracking snapshots. `None` means nothing new
// arrived since the last poll.
pub trait TrackingSource {
    fn poll(&mut self) -> Option<FrameSnapshot>;

    fn name(&self) -> &'static str;

    // Raw pointer position in surface coordinates, for sources that use one
    fn pointer_moved(&mut self, _position: Vec2) {}

    fn pointer_left(&mut self) {}
}

// Mouse as a left hand. The elbow trails a fixed offset below so the reach
// metric stays meaningful.
#[derive(Debug, Default)]
pub struct PointerSource {
    pending: Option<FrameSnapshot>,
}

impl PointerSource {
    pub const ELBOW_OFFSET: f32 = 120.0;

    pub fn new() -> Self {
        Self::default()
    }

    fn skeleton_at(position: Vec2) -> Skeleton {
        Skeleton::new()
            .with_joint(JointType::HandLeft, vec3(position.x, position.y, 0.0))
            .with_joint(JointType::ElbowLeft, vec3(position.x, position.y + Self::ELBOW_OFFSET, 0.0))
    }
}

impl TrackingSource for PointerSource {
    fn poll(&mut self) -> Option<FrameSnapshot> {
        self.pending.take()
    }

    fn name(&self) -> &'static str {
        "pointer"
    }

    fn pointer_moved(&mut self, position: Vec2) {
        self.pending = Some(FrameSnapshot::new(vec![Self::skeleton_at(position)]));
    }

    fn pointer_left(&mut self) {
        self.pending = Some(FrameSnapshot::empty());
    }
}

// A single actor whose hand drifts between random waypoints on the surface,
// pausing now and then so the pulse gets time to settle.
#[derive(Debug)]
pub struct SimulatedActor {
    rng: StdRng,
    surface: Vec2,
    hand: Vec2,
    waypoint: Vec2,
    speed: f32,
    rest_frames: u32,
}

impl SimulatedActor {
    pub const DEFAULT_SPEED: f32 = 9.0;
    const MAX_REST_FRAMES: u32 = 90;

    pub fn new(surface: Vec2, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let centre = surface * 0.5;
        Self {
            rng,
            surface,
            hand: centre,
            waypoint: centre,
            speed: Self::DEFAULT_SPEED,
            rest_frames: 0,
        }
    }

    pub fn hand(&self) -> Vec2 {
        self.hand
    }

    fn pick_waypoint(&mut self) {
        let x = self.rng.gen_range(0.0..=self.surface.x);
        let y = self.rng.gen_range(0.0..=self.surface.y);
        self.waypoint = vec2(x, y);
        self.rest_frames = self.rng.gen_range(0..=Self::MAX_REST_FRAMES);
        debug!("simulated actor heading to ({:.0}, {:.0})", x, y);
    }

    fn advance(&mut self) {
        let remaining = self.waypoint - self.hand;
        let distance = remaining.length();
        if distance > self.speed {
            self.hand += remaining / distance * self.speed;
        } else if self.rest_frames > 0 {
            self.hand = self.waypoint;
            self.rest_frames -= 1;
        } else {
            self.hand = self.waypoint;
            self.pick_waypoint();
        }
    }
}

impl TrackingSource for SimulatedActor {
    fn poll(&mut self) -> Option<FrameSnapshot> {
        self.advance();
        Some(FrameSnapshot::new(vec![PointerSource::skeleton_at(self.hand)]))
    }

    fn name(&self) -> &'static str {
        "simulated"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn primary_hand_is_first_actor_on_plane() {
        let first = Skeleton::new().with_joint(JointType::HandLeft, vec3(10.0, 20.0, 1.5));
        let second = Skeleton::new().with_joint(JointType::HandLeft, vec3(99.0, 99.0, 0.0));
        let snapshot = FrameSnapshot::new(vec![first, second]);
        assert_eq!(snapshot.actor_count(), 2);
        assert_eq!(snapshot.primary_hand(), Some(vec3(10.0, 20.0, 0.0)));
    }

    #[test]
    fn non_finite_hand_is_ignored() {
        let skeleton = Skeleton::new().with_joint(JointType::HandLeft, vec3(f32::INFINITY, 20.0, 0.0));
        let snapshot = FrameSnapshot::new(vec![skeleton]);
        assert_eq!(snapshot.actor_count(), 1);
        assert_eq!(snapshot.primary_hand(), None);

        let skeleton = Skeleton::new().with_joint(JointType::HandLeft, vec3(10.0, f32::NAN, 0.0));
        assert_eq!(FrameSnapshot::new(vec![skeleton]).primary_hand(), None);
    }

    #[test]
    fn empty_snapshot_has_no_hand() {
        assert_eq!(FrameSnapshot::empty().primary_hand(), None);
        let handless = FrameSnapshot::new(vec![Skeleton::new()]);
        assert_eq!(handless.primary_hand(), None);
    }

    #[test]
    fn reach_needs_both_joints() {
        let mut skeleton = Skeleton::new().with_joint(JointType::HandLeft, vec3(0.0, 0.0, 0.0));
        assert_eq!(skeleton.reach_left(), None);
        skeleton.set_joint(JointType::ElbowLeft, vec3(3.0, 4.0, 0.0));
        assert_relative_eq!(skeleton.reach_left().unwrap_or_default(), 5.0, epsilon = 1e-5);
        assert_eq!(skeleton.reach_right(), None);
    }

    #[test]
    fn set_joint_overwrites() {
        let mut skeleton = Skeleton::new();
        skeleton.set_joint(JointType::Head, vec3(1.0, 1.0, 1.0));
        skeleton.set_joint(JointType::Head, vec3(2.0, 2.0, 2.0));
        assert_eq!(skeleton.joint(JointType::Head), Some(vec3(2.0, 2.0, 2.0)));
    }

    #[test]
    fn pointer_source_reports_only_new_data() {
        let mut source = PointerSource::new();
        assert!(source.poll().is_none());

        source.pointer_moved(vec2(40.0, 60.0));
        let snapshot = source.poll().expect("pointer snapshot");
        assert_eq!(snapshot.primary_hand(), Some(vec3(40.0, 60.0, 0.0)));
        assert!(source.poll().is_none());

        source.pointer_left();
        let lost = source.poll().expect("empty snapshot");
        assert_eq!(lost.actor_count(), 0);
    }

    #[test]
    fn simulated_actor_is_deterministic_and_stays_on_surface() {
        let surface = vec2(1024.0, 768.0);
        let mut a = SimulatedActor::new(surface, Some(7));
        let mut b = SimulatedActor::new(surface, Some(7));
        for _ in 0..500 {
            let ha = a.poll().and_then(|s| s.primary_hand());
            let hb = b.poll().and_then(|s| s.primary_hand());
            assert_eq!(ha, hb);
            let hand = a.hand();
            assert!(hand.x >= 0.0 && hand.x <= surface.x);
            assert!(hand.y >= 0.0 && hand.y <= surface.y);
        }
    }
}
