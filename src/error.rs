/*
 * Error Module
 *
 * Startup is the only place the installation can fail. Everything that
 * happens per frame is absorbed by clamping or fallbacks instead.
 */

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StartupError {
    #[error("surface size {width}x{height} must be positive")]
    InvalidSurface { width: u32, height: u32 },
    #[error("grid interval {0} must be a positive, finite number")]
    InvalidInterval(f32),
    #[error("grid interval {interval} leaves no room on a {width}x{height} surface")]
    IntervalTooLarge { interval: f32, width: u32, height: u32 },
    #[error("grid interval {interval} would lay out {particles} particles, more than the limit of {limit}")]
    GridTooDense { interval: f32, particles: usize, limit: usize },
    #[error("could not open the render window: {0}")]
    Window(String),
}
