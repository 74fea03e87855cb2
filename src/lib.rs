//! Real-time mass-spring cloth.
//!
//! `drape` simulates a rectangular cloth as a grid of Verlet particles held
//! together by structural and shear distance constraints, and hands back a
//! textured triangle mesh each frame. Designed for games: small, frame-driven,
//! no threads, no graphics API.
//!
//! # Features
//!
//! - **Verlet integration**: implicit velocity with per-step damping
//! - **Constraint relaxation**: structural + shear, configurable passes
//! - **Pinning**: top edge, top corners or single particles as fixed anchors
//! - **Mesh extraction**: two triangles per cell with stable texture coordinates
//! - **Injected capabilities**: time source, texture provider and render sink traits
//! - **Observable**: monitor steps via the `StepObserver` trait
//! - **`no_std` compatible**: needs only `alloc`
//!
//! # Example
//! ```
//! use drape::{ClothGrid, ClothMesh, ConstraintSolver, GridConfig, Integrator, PhysicsConfig};
//!
//! let mut grid = ClothGrid::new(&GridConfig::new(8, 8, 1.0)).unwrap();
//! grid.pin_top_edge();
//! let config = PhysicsConfig::new();
//!
//! Integrator::step(&mut grid, &config, 1.0 / 60.0);
//! ConstraintSolver::relax(&mut grid, config.iterations);
//!
//! let mesh = ClothMesh::extract(&grid);
//! assert_eq!(mesh.triangle_count(), 2 * 7 * 7);
//! ```

#![cfg_attr(not(test), no_std)]

extern crate alloc;

pub mod vec;
pub mod particle;
pub mod grid;
pub mod constraint;
pub mod integrator;
pub mod solver;
pub mod mesh;
pub mod clock;
pub mod texture;
pub mod render;
pub mod simulation;
pub mod observer;
pub mod config;
pub mod error;

// Re-export primary API
pub use vec::{TexCoord, Vec3};
pub use particle::Particle;
pub use grid::{ClothGrid, GridConfig, GridTopology, MAX_PARTICLES};
pub use constraint::{ConstraintKind, DistanceConstraint};
pub use integrator::{Integrator, SkipReason, StepOutcome};
pub use solver::ConstraintSolver;
pub use mesh::{ClothMesh, MeshVertex};
pub use clock::{FrameClock, ManualTime, TimeSource};
pub use texture::{TextureBinding, TextureHandle, TextureProvider, DEFAULT_TEXTURE};
pub use render::{ClothFrame, NullRenderSink, RenderSink};
pub use simulation::ClothSimulation;
pub use observer::{NoOpStepObserver, StepObserver};
pub use config::{PhysicsConfig, DEFAULT_ITERATIONS, MAX_STEP_DT};
pub use error::{ClothError, ClothResult};
