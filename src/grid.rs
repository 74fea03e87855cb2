//! Cloth particle grid.

use crate::constraint::{grid_constraints, DistanceConstraint};
use crate::error::{ClothError, ClothResult};
use crate::particle::Particle;
use crate::vec::{TexCoord, Vec3};
use alloc::vec::Vec as AllocVec;

/// Largest particle count a grid may have. Mesh indices are `u32`.
pub const MAX_PARTICLES: usize = u32::MAX as usize;

/// Layout of a cloth grid in world space.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridConfig {
    pub cols: usize,
    pub rows: usize,
    /// Rest distance between axis-adjacent particles.
    pub spacing: f32,
    /// World position of particle (0, 0).
    pub origin: Vec3,
    /// Direction of increasing column.
    pub right: Vec3,
    /// Direction of increasing row.
    pub down: Vec3,
}

impl GridConfig {
    /// A flat grid in the XY plane with rows growing along +Y.
    pub fn new(cols: usize, rows: usize, spacing: f32) -> Self {
        GridConfig {
            cols,
            rows,
            spacing,
            origin: Vec3::ZERO,
            right: Vec3::X,
            down: Vec3::Y,
        }
    }

    /// 20x20 banner hanging from z = 200 in a Z-up world.
    pub fn banner() -> Self {
        GridConfig::new(20, 20, 10.0)
            .with_origin(Vec3::new(0.0, 0.0, 200.0))
            .with_axes(Vec3::X, -Vec3::Z)
    }

    pub fn with_origin(mut self, origin: Vec3) -> Self {
        self.origin = origin;
        self
    }

    pub fn with_axes(mut self, right: Vec3, down: Vec3) -> Self {
        self.right = right;
        self.down = down;
        self
    }
}

/// Dimensions and rest spacing of a grid, detached from particle state.
///
/// Constraint enumeration borrows only this, so the solver can mutate
/// particles while walking it. Only [`ClothGrid::new`] builds one, so
/// `cols` and `rows` are always at least 2.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct GridTopology {
    pub(crate) cols: usize,
    pub(crate) rows: usize,
    pub(crate) spacing: f32,
}

impl GridTopology {
    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn spacing(&self) -> f32 {
        self.spacing
    }

    /// Linear index of `(col, row)`: `row * cols + col`.
    pub fn index(&self, col: usize, row: usize) -> usize {
        row * self.cols + col
    }

    pub fn particle_count(&self) -> usize {
        self.cols * self.rows
    }

    /// Structural then shear constraints, in solve order.
    pub fn constraints(&self) -> impl Iterator<Item = DistanceConstraint> {
        grid_constraints(*self)
    }

    pub fn constraint_count(&self) -> usize {
        let (c, r) = (self.cols, self.rows);
        (c - 1) * r + c * (r - 1) + 2 * (c - 1) * (r - 1)
    }

    pub fn cell_count(&self) -> usize {
        (self.cols - 1) * (self.rows - 1)
    }
}

/// A cloth made of a fixed `cols x rows` grid of Verlet particles.
///
/// Particle at `(col, row)` has index `row * cols + col`. Only positions
/// change after construction.
#[derive(Clone, Debug)]
pub struct ClothGrid {
    particles: AllocVec<Particle>,
    topology: GridTopology,
}

impl ClothGrid {
    /// Lay out particles at `origin + right * (c * spacing) + down * (r * spacing)`.
    ///
    /// Every particle starts at rest. Fails without allocating if the grid
    /// is smaller than 2x2, holds more than [`MAX_PARTICLES`], or the
    /// spacing is not a positive finite number.
    pub fn new(config: &GridConfig) -> ClothResult<Self> {
        let GridConfig { cols, rows, spacing, origin, right, down } = *config;
        if cols < 2 || rows < 2 {
            return Err(ClothError::InvalidGridDimensions { cols, rows });
        }
        let count = match cols.checked_mul(rows) {
            Some(n) if n <= MAX_PARTICLES => n,
            _ => return Err(ClothError::InvalidGridDimensions { cols, rows }),
        };
        if !(spacing > 0.0 && spacing.is_finite()) {
            return Err(ClothError::InvalidSpacing(spacing));
        }

        let mut particles = AllocVec::with_capacity(count);
        for row in 0..rows {
            for col in 0..cols {
                let pos = origin
                    + right * (col as f32 * spacing)
                    + down * (row as f32 * spacing);
                particles.push(Particle::new(pos, TexCoord::for_cell(col, row, cols, rows)));
            }
        }

        Ok(ClothGrid {
            particles,
            topology: GridTopology { cols, rows, spacing },
        })
    }

    pub fn index(&self, col: usize, row: usize) -> usize {
        self.topology.index(col, row)
    }

    fn checked_index(&self, col: usize, row: usize) -> ClothResult<usize> {
        let GridTopology { cols, rows, .. } = self.topology;
        if col >= cols || row >= rows {
            return Err(ClothError::ParticleOutOfBounds { col, row, cols, rows });
        }
        Ok(self.index(col, row))
    }

    /// Pin a single particle where it currently is.
    pub fn pin(&mut self, col: usize, row: usize) -> ClothResult<()> {
        let idx = self.checked_index(col, row)?;
        self.particles[idx].pin();
        Ok(())
    }

    /// Pin every particle of row 0.
    pub fn pin_top_edge(&mut self) {
        for col in 0..self.topology.cols {
            let idx = self.index(col, 0);
            self.particles[idx].pin();
        }
    }

    /// Pin the two top corners.
    pub fn pin_corners(&mut self) {
        let last = self.topology.cols - 1;
        for col in [0, last] {
            let idx = self.index(col, 0);
            self.particles[idx].pin();
        }
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub(crate) fn particles_mut(&mut self) -> &mut [Particle] {
        &mut self.particles
    }

    pub fn particle(&self, index: usize) -> &Particle {
        &self.particles[index]
    }

    /// Mutable access for placing free particles by hand (e.g. a grab).
    ///
    /// Moving a pinned particle this way moves its anchor.
    pub fn particle_mut(&mut self, index: usize) -> &mut Particle {
        &mut self.particles[index]
    }

    pub fn position_at(&self, col: usize, row: usize) -> Vec3 {
        self.particles[self.index(col, row)].pos
    }

    pub fn tex_coord_at(&self, col: usize, row: usize) -> TexCoord {
        self.particles[self.index(col, row)].tex_coord()
    }

    pub fn positions(&self) -> AllocVec<Vec3> {
        self.particles.iter().map(|p| p.pos).collect()
    }

    pub fn topology(&self) -> GridTopology {
        self.topology
    }

    pub fn cols(&self) -> usize { self.topology.cols }
    pub fn rows(&self) -> usize { self.topology.rows }
    pub fn spacing(&self) -> f32 { self.topology.spacing }
    pub fn particle_count(&self) -> usize { self.particles.len() }
    pub fn pinned_count(&self) -> usize { self.particles.iter().filter(|p| p.is_pinned()).count() }
}
