use std::collections::VecDeque;

use crate::drag::DragController;
use crate::rigid_body_system::PhysicsWorld;
use crate::vec2::Vec2;

use super::events::{EventBus, EventKind, InputEvent};
use super::perf_stats::PerfStats;
use super::render_extract::{self, CameraState};
use super::settings::SimulationSettings;
use super::StickmanCore;

pub(super) fn create_core(settings: SimulationSettings) -> StickmanCore {
    let mut world = PhysicsWorld::new(settings.physics.clone());
    if settings.ground.enabled {
        world.create_ground(settings.ground.center, settings.ground.half_extents);
    }

    StickmanCore {
        drag: DragController::new(settings.drag.clone()),
        world,
        ragdolls: Vec::new(),
        bus: default_bus(),
        dispatching: false,
        pending_events: VecDeque::new(),
        pending_subscribers: Vec::new(),
        pointer: Vec2::zero(),
        camera: CameraState::default(),
        debug_draw: false,
        frame: 0,
        perf_enabled: false,
        perf_stats: PerfStats::default(),
        settings,
    }
}

/// Built-in subscribers: drag transitions, pause, camera, debug flag.
fn default_bus() -> EventBus<StickmanCore> {
    let mut bus = EventBus::new();

    bus.subscribe(EventKind::PausePhysics, |core: &mut StickmanCore, e: &InputEvent| {
        if let InputEvent::PausePhysics { is_paused } = *e {
            core.world.set_paused(is_paused);
        }
    });

    bus.subscribe(EventKind::PointerDown, |core: &mut StickmanCore, _: &InputEvent| {
        let at = core.pointer;
        core.drag.pointer_down(&mut core.world, at);
    });
    bus.subscribe(EventKind::PointerMove, |core: &mut StickmanCore, _: &InputEvent| {
        let at = core.pointer;
        core.drag.pointer_move(&mut core.world, at);
    });
    bus.subscribe(EventKind::PointerUp, |core: &mut StickmanCore, _: &InputEvent| {
        core.drag.pointer_up(&mut core.world);
    });

    bus.subscribe(EventKind::SetCameraTarget, |core: &mut StickmanCore, e: &InputEvent| {
        if let InputEvent::SetCameraTarget { target } = *e {
            render_extract::set_camera_target(core, target);
        }
    });
    bus.subscribe(EventKind::CameraZoom, |core: &mut StickmanCore, e: &InputEvent| {
        if let InputEvent::CameraZoom { delta } = *e {
            render_extract::zoom_camera(core, delta);
        }
    });
    bus.subscribe(EventKind::ToggleDebug, |core: &mut StickmanCore, _: &InputEvent| {
        core.debug_draw = !core.debug_draw;
    });

    bus
}
