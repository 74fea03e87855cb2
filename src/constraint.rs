//! Distance constraints between grid neighbours.
//!
//! Constraints are never stored. Each relaxation pass walks the grid
//! topology and derives them from adjacency.

use crate::config::DEGENERATE_EPSILON;
use crate::grid::GridTopology;
use crate::particle::Particle;
use core::f32::consts::SQRT_2;

/// Which neighbour relation a constraint comes from.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ConstraintKind {
    /// Horizontal or vertical neighbours, rest length = spacing.
    Structural,
    /// Diagonal neighbours, rest length = spacing * sqrt(2).
    Shear,
}

/// Keeps particles `a` and `b` at `rest_length` apart.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct DistanceConstraint {
    pub a: usize,
    pub b: usize,
    pub rest_length: f32,
    pub kind: ConstraintKind,
}

impl DistanceConstraint {
    pub fn structural(a: usize, b: usize, spacing: f32) -> Self {
        DistanceConstraint { a, b, rest_length: spacing, kind: ConstraintKind::Structural }
    }

    pub fn shear(a: usize, b: usize, spacing: f32) -> Self {
        DistanceConstraint { a, b, rest_length: spacing * SQRT_2, kind: ConstraintKind::Shear }
    }

    /// Move both endpoints halfway toward the rest length.
    ///
    /// Pinned endpoints stay put. Coincident pairs are skipped.
    pub fn solve(&self, particles: &mut [Particle]) {
        let delta = particles[self.b].pos - particles[self.a].pos;
        let len = delta.length();
        if len < DEGENERATE_EPSILON {
            return;
        }

        let diff = (len - self.rest_length) / len;
        let correction = delta * (diff * 0.5);

        if !particles[self.a].is_pinned() {
            particles[self.a].pos += correction;
        }
        if !particles[self.b].is_pinned() {
            particles[self.b].pos -= correction;
        }
    }

    /// Relative deviation from rest length, `|len - rest| / rest`.
    pub fn strain(&self, particles: &[Particle]) -> f32 {
        let len = particles[self.a].pos.distance(particles[self.b].pos);
        libm::fabsf(len - self.rest_length) / self.rest_length
    }
}

/// Every constraint of `topology` in solve order: horizontal structural
/// (row by row), vertical structural (column by column), then both
/// diagonals of each cell.
pub fn grid_constraints(topology: GridTopology) -> impl Iterator<Item = DistanceConstraint> {
    let GridTopology { cols, rows, spacing } = topology;
    let t = topology;

    let horizontal = (0..rows).flat_map(move |r| {
        (0..cols - 1).map(move |c| DistanceConstraint::structural(t.index(c, r), t.index(c + 1, r), spacing))
    });

    let vertical = (0..cols).flat_map(move |c| {
        (0..rows - 1).map(move |r| DistanceConstraint::structural(t.index(c, r), t.index(c, r + 1), spacing))
    });

    let shear = (0..rows - 1).flat_map(move |r| {
        (0..cols - 1).flat_map(move |c| {
            [
                DistanceConstraint::shear(t.index(c, r), t.index(c + 1, r + 1), spacing),
                DistanceConstraint::shear(t.index(c + 1, r), t.index(c, r + 1), spacing),
            ]
        })
    });

    horizontal.chain(vertical).chain(shear)
}
