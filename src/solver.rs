//! Iterative relaxation of the cloth's distance constraints.

use crate::grid::ClothGrid;
use crate::observer::{NoOpStepObserver, StepObserver};

/// Gauss-Seidel style relaxation over the implicit grid constraints.
///
/// Each pass applies every structural constraint, then every shear
/// constraint, once. Passes only approximately satisfy the set as a whole;
/// more iterations give a stiffer cloth.
pub struct ConstraintSolver;

impl ConstraintSolver {
    pub fn relax(grid: &mut ClothGrid, iterations: usize) {
        Self::relax_observed(grid, iterations, &mut NoOpStepObserver);
    }

    pub fn relax_observed<O: StepObserver>(grid: &mut ClothGrid, iterations: usize, observer: &mut O) {
        let topology = grid.topology();
        let particles = grid.particles_mut();

        for i in 0..iterations {
            for c in topology.constraints() {
                c.solve(particles);
            }
            observer.on_constraint_iteration(i);
        }
    }

    /// Largest relative deviation from rest length over all constraints.
    pub fn max_strain(grid: &ClothGrid) -> f32 {
        let particles = grid.particles();
        grid.topology()
            .constraints()
            .map(|c| c.strain(particles))
            .fold(0.0, f32::max)
    }
}
