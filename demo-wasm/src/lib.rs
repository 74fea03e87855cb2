use drape::{
    ClothFrame, ClothGrid, ClothSimulation, GridConfig, ManualTime, PhysicsConfig, RenderSink,
    TextureHandle, TextureProvider, Vec3, DEFAULT_TEXTURE,
};
use wasm_bindgen::prelude::*;

/// Textures the page has uploaded, addressed by name.
#[derive(Default)]
struct PageTextures {
    names: Vec<String>,
}

impl TextureProvider for PageTextures {
    fn find_texture(&mut self, name: &str) -> Option<TextureHandle> {
        self.names
            .iter()
            .position(|n| n == name)
            .map(|i| TextureHandle(i as u32 + 1))
    }
}

/// Keeps the last submitted frame as flat `[x, y, z, u, v]` triangles.
#[derive(Default)]
struct FrameBuffer {
    vertices: Vec<f32>,
    texture: u32,
}

impl RenderSink for FrameBuffer {
    fn draw(&mut self, frame: &ClothFrame<'_>) {
        self.vertices = frame.mesh.interleaved();
        self.texture = frame.texture.0;
    }
}

// ---- Cloth Demo ----

#[wasm_bindgen]
pub struct ClothDemo {
    sim: ClothSimulation<ManualTime, PageTextures, FrameBuffer>,
}

#[wasm_bindgen]
impl ClothDemo {
    /// Banner hanging from its top edge, Y-down canvas space.
    #[wasm_bindgen(constructor)]
    pub fn new(cols: usize, rows: usize, spacing: f32) -> Result<ClothDemo, JsError> {
        let config = GridConfig::new(cols, rows, spacing)
            .with_origin(Vec3::new(140.0, 40.0, 0.0))
            .with_axes(Vec3::X, Vec3::Y);
        let mut grid = ClothGrid::new(&config)?;
        grid.pin_top_edge();

        let physics = PhysicsConfig::new()
            .with_gravity(Vec3::new(0.0, 600.0, 0.0))
            .with_iterations(8);

        let mut textures = PageTextures::default();
        textures.names.push(DEFAULT_TEXTURE.to_string());

        let mut sim = ClothSimulation::new(grid, physics, ManualTime::new(0.0), textures, FrameBuffer::default())?;
        sim.set_texture(DEFAULT_TEXTURE);
        Ok(ClothDemo { sim })
    }

    /// Advance to page time `now_ms` (e.g. `requestAnimationFrame`'s timestamp).
    pub fn update(&mut self, now_ms: f64) {
        self.sim.time().set(now_ms / 1000.0);
        self.sim.update();
    }

    pub fn set_wind(&mut self, strength: f32) {
        let config = self.sim.config_mut();
        config.wind_direction = Vec3::X;
        config.wind_magnitude = strength.max(0.0);
    }

    /// Register a texture name the page can draw, then bind it.
    pub fn load_texture(&mut self, name: &str) -> bool {
        let names = &mut self.sim.textures_mut().names;
        if !names.iter().any(|n| n == name) {
            names.push(name.to_string());
        }
        self.sim.set_texture(name)
    }

    /// Bind a texture by name. Unknown names blank the cloth.
    pub fn set_texture(&mut self, name: &str) -> bool {
        self.sim.set_texture(name)
    }

    /// Submit the current mesh. Returns false when nothing was drawn.
    pub fn render(&mut self) -> bool {
        self.sim.render()
    }

    /// Last rendered frame as flat `[x, y, z, u, v]` per triangle vertex.
    pub fn vertices(&self) -> Vec<f32> {
        self.sim.sink().vertices.clone()
    }

    /// 1-based index into the page's texture list for the last frame.
    pub fn texture(&self) -> u32 {
        self.sim.sink().texture
    }

    pub fn cols(&self) -> usize {
        self.sim.grid().cols()
    }

    pub fn rows(&self) -> usize {
        self.sim.grid().rows()
    }
}
