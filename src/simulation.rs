//! The cloth simulation object and its per-frame driver.

use crate::clock::{FrameClock, TimeSource};
use crate::config::PhysicsConfig;
use crate::error::ClothResult;
use crate::grid::{ClothGrid, GridConfig};
use crate::integrator::{Integrator, StepOutcome};
use crate::mesh::ClothMesh;
use crate::observer::{NoOpStepObserver, StepObserver};
use crate::render::{ClothFrame, RenderSink};
use crate::solver::ConstraintSolver;
use crate::texture::{TextureBinding, TextureProvider, DEFAULT_TEXTURE};

/// Console command that rebinds the cloth texture.
pub const TEXTURE_COMMAND: &str = "cloth_texture";

/// A cloth together with the capabilities it needs to run each frame.
///
/// Owned by whatever context shows the cloth (a scene, a level, a test) and
/// dropped with it. `update` and `render` take `&mut self`, so a frame's
/// update always finishes before its render reads the mesh.
pub struct ClothSimulation<T, P, R> {
    grid: ClothGrid,
    config: PhysicsConfig,
    clock: FrameClock,
    texture: TextureBinding,
    time: T,
    textures: P,
    sink: R,
}

impl<T, P, R> ClothSimulation<T, P, R>
where
    T: TimeSource,
    P: TextureProvider,
    R: RenderSink,
{
    /// Wrap an already-built (and usually already-pinned) grid.
    ///
    /// The clock is primed from `time`, so the first `update` measures from
    /// construction. No texture is bound yet.
    pub fn new(grid: ClothGrid, config: PhysicsConfig, time: T, textures: P, sink: R) -> ClothResult<Self> {
        config.validate()?;
        let clock = FrameClock::starting_at(time.now());
        Ok(ClothSimulation {
            grid,
            config,
            clock,
            texture: TextureBinding::new(),
            time,
            textures,
            sink,
        })
    }

    /// The stock scene: a 20x20 banner pinned along its top edge, blowing in
    /// a light breeze, bound to [`DEFAULT_TEXTURE`].
    pub fn banner(time: T, textures: P, sink: R) -> ClothResult<Self> {
        let mut grid = ClothGrid::new(&GridConfig::banner())?;
        grid.pin_top_edge();
        let mut sim = Self::new(grid, PhysicsConfig::banner(), time, textures, sink)?;
        sim.set_texture(DEFAULT_TEXTURE);
        Ok(sim)
    }

    /// Sample the time source and advance by the elapsed time.
    ///
    /// Returns `None` when the clock had no prior sample.
    pub fn update(&mut self) -> Option<StepOutcome> {
        let now = self.time.now();
        self.clock.tick(now).map(|dt| self.advance(dt))
    }

    /// Integrate by `dt` and relax the constraints.
    pub fn advance(&mut self, dt: f32) -> StepOutcome {
        self.advance_observed(dt, &mut NoOpStepObserver)
    }

    pub fn advance_observed<O: StepObserver>(&mut self, dt: f32, observer: &mut O) -> StepOutcome {
        let outcome = Integrator::step(&mut self.grid, &self.config, dt);
        match outcome {
            StepOutcome::Skipped { dt, reason } => {
                observer.on_step_skipped(dt, reason);
                return outcome;
            }
            StepOutcome::Integrated { dt } => observer.on_integrate(dt),
        }

        ConstraintSolver::relax_observed(&mut self.grid, self.config.iterations, observer);
        observer.on_step_complete();
        tracing::trace!(dt, iterations = self.config.iterations, "cloth step complete");
        outcome
    }

    /// Mesh of the current state.
    pub fn mesh(&self) -> ClothMesh {
        ClothMesh::extract(&self.grid)
    }

    /// Hand the current mesh to the render sink.
    ///
    /// Nothing is drawn while the texture is unloaded. Returns whether a
    /// frame was submitted.
    pub fn render(&mut self) -> bool {
        let Some(texture) = self.texture.handle() else {
            tracing::debug!(texture = %self.texture.name(), "cloth render suppressed: texture not loaded");
            return false;
        };

        let mesh = ClothMesh::extract(&self.grid);
        let frame = ClothFrame {
            mesh: &mesh,
            texture,
            texture_name: self.texture.name(),
        };
        self.sink.draw(&frame);
        true
    }

    /// Bind `name` as the cloth texture. Particles are not touched.
    pub fn set_texture(&mut self, name: &str) -> bool {
        self.texture.bind(name, &mut self.textures)
    }

    /// Handle `cloth_texture <name>`. `args[0]` is the command itself.
    pub fn texture_command(&mut self, args: &[&str]) -> bool {
        match args.get(1) {
            Some(name) => self.set_texture(name),
            None => {
                tracing::warn!("usage: {TEXTURE_COMMAND} <texture_name>");
                false
            }
        }
    }

    pub fn grid(&self) -> &ClothGrid {
        &self.grid
    }

    pub fn grid_mut(&mut self) -> &mut ClothGrid {
        &mut self.grid
    }

    pub fn config(&self) -> &PhysicsConfig {
        &self.config
    }

    pub fn config_mut(&mut self) -> &mut PhysicsConfig {
        &mut self.config
    }

    pub fn texture(&self) -> &TextureBinding {
        &self.texture
    }

    pub fn clock(&self) -> &FrameClock {
        &self.clock
    }

    pub fn time(&self) -> &T {
        &self.time
    }

    pub fn textures_mut(&mut self) -> &mut P {
        &mut self.textures
    }

    pub fn sink(&self) -> &R {
        &self.sink
    }

    /// Tear down, returning the grid and the injected capabilities.
    pub fn into_parts(self) -> (ClothGrid, T, P, R) {
        (self.grid, self.time, self.textures, self.sink)
    }
}
