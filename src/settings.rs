/*
 * Settings Module
 *
 * Startup settings chosen on the command line: surface size, grid spacing
 * and where tracking data comes from. They are fixed for the whole run;
 * resizing the window later does not re-lay the grid.
 */

use clap::ValueEnum;

use crate::error::StartupError;
use crate::particle_system::grid_dimensions;

// Upper bound on the grid, far above any installation layout
pub const MAX_PARTICLES: usize = 1_000_000;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum SourceKind {
    /// The mouse drives the hand
    #[default]
    Pointer,
    /// A wandering simulated actor drives the hand
    Simulated,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Settings {
    pub width: u32,
    pub height: u32,
    pub interval: f32,
    pub source: SourceKind,
    pub seed: Option<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            width: 1024,
            height: 768,
            interval: 8.0,
            source: SourceKind::Pointer,
            seed: None,
        }
    }
}

impl Settings {
    pub fn validate(&self) -> Result<(), StartupError> {
        if self.width == 0 || self.height == 0 {
            return Err(StartupError::InvalidSurface {
                width: self.width,
                height: self.height,
            });
        }
        if !self.interval.is_finite() || self.interval <= 0.0 {
            return Err(StartupError::InvalidInterval(self.interval));
        }
        if self.interval > self.width.max(self.height) as f32 {
            return Err(StartupError::IntervalTooLarge {
                interval: self.interval,
                width: self.width,
                height: self.height,
            });
        }
        let (columns, rows) = grid_dimensions(self.surface_width(), self.surface_height(), self.interval);
        match columns.checked_mul(rows) {
            Some(particles) if particles <= MAX_PARTICLES => Ok(()),
            particles => Err(StartupError::GridTooDense {
                interval: self.interval,
                particles: particles.unwrap_or(usize::MAX),
                limit: MAX_PARTICLES,
            }),
        }
    }

    pub fn surface_width(&self) -> f32 {
        self.width as f32
    }

    pub fn surface_height(&self) -> f32 {
        self.height as f32
    }
}
