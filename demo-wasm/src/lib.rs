use windcloth::{Cloth, ClothConfig, Vec3};
use wasm_bindgen::prelude::*;

// ---- Cloth Demo ----

/// Browser-side wrapper: the page owns the render loop and sliders, this
/// only steps the cloth and hands back flat buffers.
#[wasm_bindgen]
pub struct ClothDemo {
    cloth: Cloth<f32>,
}

#[wasm_bindgen]
impl ClothDemo {
    #[wasm_bindgen(constructor)]
    pub fn new(width: usize, height: usize) -> Result<ClothDemo, JsError> {
        let config = ClothConfig::new(width, height);
        let cloth = Cloth::new(&config).map_err(|e| JsError::new(&e.to_string()))?;
        Ok(ClothDemo { cloth })
    }

    pub fn update(&mut self, dt: f32) {
        self.cloth.step(dt);
    }

    pub fn set_air_velocity(&mut self, x: f32, y: f32, z: f32) -> Result<(), JsError> {
        self.cloth
            .set_air_velocity(Vec3::new(x, y, z))
            .map_err(|e| JsError::new(&e.to_string()))
    }

    pub fn set_mass(&mut self, mass: f32) -> Result<(), JsError> {
        self.cloth.set_mass(mass).map_err(|e| JsError::new(&e.to_string()))
    }

    pub fn set_anchoring(&mut self, anchoring: bool) {
        self.cloth.set_anchoring(anchoring);
    }

    /// Returns flat [x0, y0, z0, x1, y1, z1, ...] in row-major order
    pub fn positions(&self) -> Vec<f32> {
        let pos = self.cloth.positions();
        let mut out = Vec::with_capacity(pos.len() * 3);
        for p in &pos {
            out.extend_from_slice(&[p.x, p.y, p.z]);
        }
        out
    }

    /// Returns flat [ax, ay, az, bx, by, bz, ...] per spring, for line drawing
    pub fn spring_segments(&self) -> Vec<f32> {
        let segments = self.cloth.spring_segments();
        let mut out = Vec::with_capacity(segments.len() * 6);
        for [a, b] in &segments {
            out.extend_from_slice(&[a.x, a.y, a.z, b.x, b.y, b.z]);
        }
        out
    }

    pub fn width(&self) -> usize {
        self.cloth.width()
    }
    pub fn height(&self) -> usize {
        self.cloth.height()
    }
}
