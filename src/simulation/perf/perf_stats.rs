use wasm_bindgen::prelude::*;

/// Timings and counters of the last frame (zeros while perf is disabled)
#[wasm_bindgen]
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PerfStats {
    pub(super) frame_ms: f64,
    pub(super) dispatch_ms: f64,
    pub(super) physics_ms: f64,
    pub(super) events_dispatched: u32,
    pub(super) handlers_run: u32,
    pub(super) stepped: bool,
    pub(super) body_count: u32,
    pub(super) joint_count: u32,
}

impl PerfStats {
    pub(crate) fn reset(&mut self) {
        *self = PerfStats::default();
    }
}

#[wasm_bindgen]
impl PerfStats {
    #[wasm_bindgen(getter)]
    pub fn frame_ms(&self) -> f64 { self.frame_ms }
    #[wasm_bindgen(getter)]
    pub fn dispatch_ms(&self) -> f64 { self.dispatch_ms }
    #[wasm_bindgen(getter)]
    pub fn physics_ms(&self) -> f64 { self.physics_ms }
    #[wasm_bindgen(getter)]
    pub fn events_dispatched(&self) -> u32 { self.events_dispatched }
    #[wasm_bindgen(getter)]
    pub fn handlers_run(&self) -> u32 { self.handlers_run }
    #[wasm_bindgen(getter)]
    pub fn stepped(&self) -> bool { self.stepped }
    #[wasm_bindgen(getter)]
    pub fn body_count(&self) -> u32 { self.body_count }
    #[wasm_bindgen(getter)]
    pub fn joint_count(&self) -> u32 { self.joint_count }
}
