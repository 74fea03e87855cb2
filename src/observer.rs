//! Step observer trait for monitoring cloth updates.

use crate::integrator::SkipReason;

/// Hooks into a cloth update. All methods default to no-ops.
pub trait StepObserver {
    /// Called after every free particle has been integrated.
    fn on_integrate(&mut self, _dt: f32) {}

    /// Called after each full relaxation pass.
    fn on_constraint_iteration(&mut self, _iteration: usize) {}

    /// Called when a step was rejected before touching any particle.
    fn on_step_skipped(&mut self, _dt: f32, _reason: SkipReason) {}

    /// Called when integration and relaxation have both finished.
    fn on_step_complete(&mut self) {}
}

/// Observer that ignores everything.
pub struct NoOpStepObserver;

impl StepObserver for NoOpStepObserver {}
