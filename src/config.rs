//! Physics configuration and simulation constants.

use crate::error::{ClothError, ClothResult};
use crate::vec::Vec3;

/// Largest frame delta the integrator accepts. Larger deltas are skipped.
pub const MAX_STEP_DT: f32 = 0.1;

/// Pairs closer than this are treated as coincident and left alone.
pub const DEGENERATE_EPSILON: f32 = 1e-4;

/// Default constraint relaxation passes per frame.
pub const DEFAULT_ITERATIONS: usize = 5;

/// Smallest damping the integrator will use.
pub const MIN_DAMPING: f32 = 1e-3;

/// Physical parameters for a cloth.
///
/// # Builder Pattern
/// ```
/// use drape::{PhysicsConfig, Vec3};
///
/// let config = PhysicsConfig::new()
///     .with_gravity(Vec3::new(0.0, 0.0, -980.0))
///     .with_damping(0.99)
///     .with_iterations(5)
///     .with_wind(Vec3::X, 50.0);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PhysicsConfig {
    /// Gravity acceleration. Default: `(0, -600, 0)`.
    pub gravity: Vec3,
    /// Fraction of velocity kept per step, in (0, 1]. Default: 0.99.
    pub damping: f32,
    /// Constraint relaxation passes per step. Default: 5.
    pub iterations: usize,
    /// Wind strength. 0 disables wind. Default: 0.
    pub wind_magnitude: f32,
    /// Wind direction. Used as supplied, not normalized: callers that want
    /// `wind_magnitude` to be the acceleration must pass a unit vector.
    pub wind_direction: Vec3,
}

impl PhysicsConfig {
    pub fn new() -> Self {
        PhysicsConfig {
            gravity: Vec3::new(0.0, -600.0, 0.0),
            damping: 0.99,
            iterations: DEFAULT_ITERATIONS,
            wind_magnitude: 0.0,
            wind_direction: Vec3::X,
        }
    }

    /// Z-up hanging banner: strong gravity with a steady breeze along +X.
    pub fn banner() -> Self {
        PhysicsConfig::new()
            .with_gravity(Vec3::new(0.0, 0.0, -980.0))
            .with_wind(Vec3::X, 50.0)
    }

    pub fn with_gravity(mut self, gravity: Vec3) -> Self {
        self.gravity = gravity;
        self
    }

    /// Set damping, clamped to `[MIN_DAMPING, 1]`. NaN falls back to 1.
    pub fn with_damping(mut self, damping: f32) -> Self {
        self.damping = clamp_damping(damping);
        self
    }

    pub fn with_iterations(mut self, iterations: usize) -> Self {
        self.iterations = iterations;
        self
    }

    /// Set wind direction and magnitude. Negative magnitudes clamp to 0.
    pub fn with_wind(mut self, direction: Vec3, magnitude: f32) -> Self {
        self.wind_direction = direction;
        self.wind_magnitude = if magnitude.is_nan() { 0.0 } else { magnitude.max(0.0) };
        self
    }

    /// Check values that were set directly rather than through the builder.
    pub fn validate(&self) -> ClothResult<()> {
        if !(self.damping > 0.0 && self.damping <= 1.0) {
            return Err(ClothError::InvalidDamping(self.damping));
        }
        if !(self.wind_magnitude >= 0.0 && self.wind_magnitude.is_finite()) {
            return Err(ClothError::InvalidWindMagnitude(self.wind_magnitude));
        }
        Ok(())
    }

    /// Damping as the integrator applies it: `damping` clamped to
    /// `[MIN_DAMPING, 1]`, NaN treated as 1. Direct field edits can never
    /// make velocity grow.
    pub fn effective_damping(&self) -> f32 {
        clamp_damping(self.damping)
    }

    /// Acceleration applied to every free particle this step.
    pub fn external_acceleration(&self) -> Vec3 {
        if self.wind_magnitude > 0.0 {
            self.gravity + self.wind_direction * self.wind_magnitude
        } else {
            self.gravity
        }
    }
}

fn clamp_damping(damping: f32) -> f32 {
    if damping.is_nan() { 1.0 } else { damping.clamp(MIN_DAMPING, 1.0) }
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self::new()
    }
}
