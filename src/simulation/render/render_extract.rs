use crate::vec2::Vec2;

use super::StickmanCore;

/// Camera state driven by input events, read by the external renderer
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CameraState {
    /// Point the renderer centers on (world units)
    pub target: Vec2,
    pub zoom: f32,
}

impl Default for CameraState {
    fn default() -> Self {
        Self {
            target: Vec2::zero(),
            zoom: 1.0,
        }
    }
}

pub(super) fn set_camera_target(core: &mut StickmanCore, target: Vec2) {
    core.camera.target = target;
}

/// `delta` is relative to the current zoom, so steps feel even at any scale.
pub(super) fn zoom_camera(core: &mut StickmanCore, delta: f32) {
    let min = core.settings.min_zoom.max(f32::EPSILON);
    let max = core.settings.max_zoom.max(min);
    let zoom = core.camera.zoom;
    core.camera.zoom = (zoom + delta * zoom).clamp(min, max);
}
