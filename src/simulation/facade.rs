use wasm_bindgen::prelude::*;

use crate::rigid_body_system::SNAPSHOT_STRIDE;
use crate::vec2::Vec2;

use super::events::InputEvent;
use super::perf_stats::PerfStats;
use super::settings::SimulationSettings;
use super::StickmanCore;

/// Browser-facing handle around `StickmanCore`.
///
/// All coordinates are world space (meters, y up); screen conversion is the
/// host's job.
#[wasm_bindgen]
pub struct StickmanWorld {
    core: StickmanCore,
}

#[wasm_bindgen]
impl StickmanWorld {
    /// Create a world with default settings (ground included)
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self {
            core: StickmanCore::default(),
        }
    }

    #[wasm_bindgen(js_name = withSettings)]
    pub fn with_settings(json: String) -> Result<StickmanWorld, JsValue> {
        let settings = SimulationSettings::from_json(&json).map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(Self {
            core: StickmanCore::new(settings),
        })
    }

    // === RAGDOLLS ===

    /// Spawn a ragdoll from a skeleton document; returns its id
    pub fn spawn_ragdoll(&mut self, json: String, x: f32, y: f32) -> Result<u32, JsValue> {
        self.core
            .spawn_ragdoll_json(&json, Vec2::new(x, y))
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    pub fn despawn_ragdoll(&mut self, id: u32) -> bool {
        self.core.despawn_ragdoll(id)
    }

    #[wasm_bindgen(getter)]
    pub fn ragdoll_count(&self) -> usize {
        self.core.ragdoll_count()
    }

    // === INPUT ===

    pub fn set_pointer(&mut self, x: f32, y: f32) {
        self.core.set_pointer(Vec2::new(x, y));
    }

    pub fn pointer_down(&mut self, x: f32, y: f32) {
        self.core.set_pointer(Vec2::new(x, y));
        self.core.emit(InputEvent::PointerDown);
    }

    pub fn pointer_move(&mut self, x: f32, y: f32) {
        self.core.set_pointer(Vec2::new(x, y));
        self.core.emit(InputEvent::PointerMove);
    }

    pub fn pointer_up(&mut self) {
        self.core.emit(InputEvent::PointerUp);
    }

    pub fn set_paused(&mut self, paused: bool) {
        self.core.emit(InputEvent::PausePhysics { is_paused: paused });
    }

    pub fn set_camera_target(&mut self, x: f32, y: f32) {
        self.core.emit(InputEvent::SetCameraTarget { target: Vec2::new(x, y) });
    }

    pub fn zoom_camera(&mut self, delta: f32) {
        self.core.emit(InputEvent::CameraZoom { delta });
    }

    pub fn toggle_debug(&mut self) {
        self.core.emit(InputEvent::ToggleDebug);
    }

    // === FRAME ===

    /// Step the simulation forward once (no-op while paused)
    pub fn step(&mut self) -> bool {
        self.core.step()
    }

    #[wasm_bindgen(getter)]
    pub fn frame(&self) -> u64 {
        self.core.frame_count()
    }

    #[wasm_bindgen(getter)]
    pub fn paused(&self) -> bool {
        self.core.is_paused()
    }

    #[wasm_bindgen(getter)]
    pub fn dragging(&self) -> bool {
        self.core.drag().is_dragging()
    }

    #[wasm_bindgen(getter)]
    pub fn body_count(&self) -> usize {
        self.core.world().body_count()
    }

    #[wasm_bindgen(getter)]
    pub fn joint_count(&self) -> usize {
        self.core.world().joint_count()
    }

    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        self.core.enable_perf_metrics(enabled);
    }

    pub fn get_perf_stats(&self) -> PerfStats {
        self.core.perf_stats()
    }

    // === RENDER ===

    /// `[x, y, angle, kind, a, b]` per body (see `snapshot_stride`)
    pub fn body_transforms(&self) -> js_sys::Float32Array {
        let data = self.core.world().flatten_snapshots();
        js_sys::Float32Array::from(data.as_slice())
    }

    #[wasm_bindgen(getter)]
    pub fn snapshot_stride(&self) -> usize {
        SNAPSHOT_STRIDE
    }

    #[wasm_bindgen(getter)]
    pub fn camera_x(&self) -> f32 {
        self.core.camera().target.x
    }

    #[wasm_bindgen(getter)]
    pub fn camera_y(&self) -> f32 {
        self.core.camera().target.y
    }

    #[wasm_bindgen(getter)]
    pub fn camera_zoom(&self) -> f32 {
        self.core.camera().zoom
    }

    #[wasm_bindgen(getter)]
    pub fn debug_draw(&self) -> bool {
        self.core.debug_draw()
    }
}

impl Default for StickmanWorld {
    fn default() -> Self {
        Self::new()
    }
}
