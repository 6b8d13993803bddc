/*
 * Gesture Field - Module Definitions
 *
 * A particle field that rests on a grid and bends around a tracked hand.
 * The simulation core (particles, behaviors, chase, pulse) is independent
 * of the window; app, input, renderer and ui wire it into nannou.
 */

// Re-export key components for easier access
pub use app::Model;
pub use behavior::{Behavior, ColorShift, Damping, Distortion, Homing};
pub use chase::ChaseTarget;
pub use error::StartupError;
pub use params::SimulationParams;
pub use particle::{Particle, ParticleColor};
pub use particle_system::ParticleSystem;
pub use pulse::{PulseController, PulsePhase, PulseTuning};
pub use settings::{Settings, SourceKind};
pub use simulation::{FrameReport, Simulation};
pub use tracking::{FrameSnapshot, JointType, PointerSource, SimulatedActor, Skeleton, TrackingSource};

// Define modules
pub mod app;
pub mod behavior;
pub mod chase;
pub mod debug;
pub mod error;
pub mod input;
pub mod logging;
pub mod params;
pub mod particle;
pub mod particle_system;
pub mod pulse;
pub mod renderer;
pub mod settings;
pub mod simulation;
pub mod tracking;
pub mod ui;
pub mod viewport;
