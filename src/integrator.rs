//! Verlet integration of external accelerations.

use crate::config::{PhysicsConfig, MAX_STEP_DT};
use crate::grid::ClothGrid;

/// Why a step was not taken.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum SkipReason {
    /// `dt <= 0`.
    NonPositive,
    /// `dt > MAX_STEP_DT`, usually a frame-time spike.
    TooLarge,
    /// NaN or infinite.
    NonFinite,
}

/// Result of asking the integrator to advance.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum StepOutcome {
    Integrated { dt: f32 },
    Skipped { dt: f32, reason: SkipReason },
}

impl StepOutcome {
    pub fn is_integrated(&self) -> bool {
        matches!(self, StepOutcome::Integrated { .. })
    }
}

/// Advances free particles under gravity and wind.
pub struct Integrator;

impl Integrator {
    /// Classify `dt`. Anything outside `(0, MAX_STEP_DT]` is skipped.
    pub fn check_dt(dt: f32) -> Result<f32, SkipReason> {
        if !dt.is_finite() {
            Err(SkipReason::NonFinite)
        } else if dt <= 0.0 {
            Err(SkipReason::NonPositive)
        } else if dt > MAX_STEP_DT {
            Err(SkipReason::TooLarge)
        } else {
            Ok(dt)
        }
    }

    /// Accumulate external acceleration on every free particle, then take one
    /// damped Verlet step. Rejected deltas leave the grid untouched.
    ///
    /// Damping is taken from [`PhysicsConfig::effective_damping`], so a
    /// config edited in place past 1 still cannot add energy.
    pub fn step(grid: &mut ClothGrid, config: &PhysicsConfig, dt: f32) -> StepOutcome {
        let dt = match Self::check_dt(dt) {
            Ok(dt) => dt,
            Err(reason) => {
                tracing::debug!(dt, ?reason, "cloth step skipped");
                return StepOutcome::Skipped { dt, reason };
            }
        };

        let accel = config.external_acceleration();
        let damping = config.effective_damping();
        let particles = grid.particles_mut();

        for p in particles.iter_mut() {
            p.set_acceleration(accel);
        }

        for p in particles.iter_mut() {
            p.integrate(dt, damping);
        }

        StepOutcome::Integrated { dt }
    }
}
