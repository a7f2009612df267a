use std::cell::Cell;
use std::rc::Rc;

use super::*;
use crate::collision::CollisionCategory;
use crate::skeleton::{Bone, Layer, ShapeKind};

const SKELETON: &str = r#"{
    "stickman": {
        "name": "torso", "width": 0.3, "shape_type": "box",
        "start": {"x": 0, "y": 0}, "end": {"x": 0, "y": 0.8},
        "children": [
            { "name": "head", "width": 0.4, "shape_type": "circle", "layer": "middle",
              "start": {"x": 0, "y": 0}, "end": {"x": 0, "y": 0.4} },
            { "name": "leftLeg", "width": 0.16, "shape_type": "box", "layer": "left",
              "start": {"x": -0.05, "y": -0.8}, "end": {"x": -0.05, "y": -1.3} },
            { "name": "rightLeg", "width": 0.16, "shape_type": "box", "layer": "right",
              "start": {"x": 0.05, "y": -0.8}, "end": {"x": 0.05, "y": -1.3} }
        ]
    }
}"#;

fn core_without_ground() -> StickmanCore {
    let mut settings = SimulationSettings::default();
    settings.ground.enabled = false;
    StickmanCore::new(settings)
}

#[test]
fn four_bone_scenario() {
    let mut core = core_without_ground();
    let id = core.spawn_ragdoll_json(SKELETON, Vec2::new(0.0, 5.0)).unwrap();

    let ragdoll = core.ragdoll(id).unwrap();
    assert_eq!(ragdoll.body_count(), 4);
    assert_eq!(ragdoll.joint_count(), 3);
    assert_eq!(core.world().body_count(), 4);
    assert_eq!(core.world().joint_count(), 3);

    let left = core.world().body_filter(ragdoll.bodies()[2]).unwrap();
    let right = core.world().body_filter(ragdoll.bodies()[3]).unwrap();
    let ground = CollisionCategory::Ground.bits();
    assert_eq!(left.category & right.category, 0);
    assert_ne!(left.mask & ground, 0);
    assert_ne!(right.mask & ground, 0);
}

#[test]
fn default_settings_create_ground() {
    let core = StickmanCore::default();
    assert_eq!(core.world().body_count(), 1);
    assert_eq!(core.ragdoll_count(), 0);
}

#[test]
fn invalid_document_spawns_nothing() {
    let mut core = core_without_ground();
    let err = core.spawn_ragdoll_json("{\"stickman\": {\"name\": \"x\"}}", Vec2::zero());
    assert!(matches!(err, Err(SkeletonLoadError::MissingField(_))));
    assert_eq!(core.world().body_count(), 0);
    assert_eq!(core.ragdoll_count(), 0);
}

#[test]
fn frame_drag_sequence_cleans_up() {
    let mut core = StickmanCore::default();
    core.spawn_ragdoll_json(SKELETON, Vec2::new(0.0, 5.0)).unwrap();
    let bodies = core.world().body_count();
    let joints = core.world().joint_count();

    // Torso center is at (0, 5.4).
    assert!(core.frame(Vec2::new(0.0, 5.4), &[InputEvent::PointerDown]));
    assert!(core.drag().is_dragging());
    assert_eq!(core.world().body_count(), bodies + 1);
    assert_eq!(core.world().joint_count(), joints + 1);

    for i in 0..5 {
        core.frame(Vec2::new(0.1 * i as f32, 5.6), &[InputEvent::PointerMove]);
        assert_eq!(core.world().joint_count(), joints + 1);
    }

    core.frame(Vec2::new(0.5, 5.6), &[InputEvent::PointerUp]);
    assert!(!core.drag().is_dragging());
    assert_eq!(core.world().body_count(), bodies);
    assert_eq!(core.world().joint_count(), joints);

    // Release while idle changes nothing.
    core.frame(Vec2::new(0.5, 5.6), &[InputEvent::PointerUp]);
    assert_eq!(core.world().body_count(), bodies);
    assert_eq!(core.frame_count(), 8);
}

#[test]
fn pointer_down_on_empty_space_stays_idle() {
    let mut core = StickmanCore::default();
    core.spawn_ragdoll_json(SKELETON, Vec2::new(0.0, 5.0)).unwrap();
    let bodies = core.world().body_count();

    core.frame(Vec2::new(40.0, 40.0), &[InputEvent::PointerDown]);
    assert!(!core.drag().is_dragging());
    assert_eq!(core.world().body_count(), bodies);
}

#[test]
fn pause_stops_stepping() {
    let mut core = core_without_ground();
    assert!(!core.frame(Vec2::zero(), &[InputEvent::PausePhysics { is_paused: true }]));
    assert!(core.is_paused());
    assert_eq!(core.world().step_count(), 0);
    assert!(core.frame(Vec2::zero(), &[InputEvent::PausePhysics { is_paused: false }]));
    assert_eq!(core.world().step_count(), 1);
}

#[test]
fn camera_target_and_relative_zoom() {
    let mut core = core_without_ground();
    core.emit(InputEvent::SetCameraTarget { target: Vec2::new(1.0, 0.0) });
    core.emit(InputEvent::SetCameraTarget { target: Vec2::new(0.5, -2.0) });
    assert_eq!(core.camera().target, Vec2::new(0.5, -2.0));

    core.emit(InputEvent::CameraZoom { delta: 0.5 });
    assert_eq!(core.camera().zoom, 1.5);
    core.emit(InputEvent::CameraZoom { delta: 0.5 });
    assert_eq!(core.camera().zoom, 2.25);

    core.emit(InputEvent::CameraZoom { delta: 10.0 });
    assert_eq!(core.camera().zoom, core.settings().max_zoom);
    core.emit(InputEvent::CameraZoom { delta: -10.0 });
    assert_eq!(core.camera().zoom, core.settings().min_zoom);

    assert!(!core.debug_draw());
    core.emit(InputEvent::ToggleDebug);
    assert!(core.debug_draw());
}

#[test]
fn subscribers_may_emit_and_subscribe() {
    let mut core = core_without_ground();
    let late = Rc::new(Cell::new(0));
    let late_in = late.clone();
    core.subscribe(EventKind::PointerDown, move |c, _| {
        let counter = late_in.clone();
        c.subscribe(EventKind::ToggleDebug, move |_, _| counter.set(counter.get() + 1));
        assert_eq!(c.emit(InputEvent::ToggleDebug), 0);
    });

    // drag + custom for the pointer, then built-in + late subscriber for the queued toggle
    assert_eq!(core.emit(InputEvent::PointerDown), 4);
    assert!(core.debug_draw());
    assert_eq!(late.get(), 1);

    assert_eq!(core.emit(InputEvent::ToggleDebug), 2);
    assert!(!core.debug_draw());
    assert_eq!(late.get(), 2);
}

#[test]
fn despawn_during_drag_releases_drag() {
    let mut core = core_without_ground();
    let id = core.spawn_ragdoll_json(SKELETON, Vec2::new(0.0, 5.0)).unwrap();
    core.frame(Vec2::new(0.0, 5.4), &[InputEvent::PointerDown]);
    assert!(core.drag().is_dragging());

    assert!(core.despawn_ragdoll(id));
    assert!(!core.drag().is_dragging());
    assert_eq!(core.world().body_count(), 0);
    assert_eq!(core.world().joint_count(), 0);
    assert!(!core.despawn_ragdoll(id));
    assert!(core.ragdoll(id).is_none());
}

#[test]
fn extra_subscribers_run_after_builtin() {
    let mut core = core_without_ground();
    let seen = Rc::new(Cell::new(0));
    let counter = seen.clone();
    core.subscribe(EventKind::PointerDown, move |c, _| {
        counter.set(counter.get() + 1);
        assert!(!c.drag().is_dragging());
    });
    assert_eq!(core.emit(InputEvent::PointerDown), 2);
    assert_eq!(seen.get(), 1);
}

#[test]
fn perf_stats_report_frame() {
    let mut core = core_without_ground();
    core.spawn_ragdoll(
        &Skeleton::new(
            Bone::new("plank", Vec2::zero(), Vec2::new(1.0, 0.0), 0.2, ShapeKind::Box).with_layer(Layer::Left),
        ),
        Vec2::zero(),
    );
    core.enable_perf_metrics(true);
    core.frame(Vec2::zero(), &[InputEvent::PointerMove]);
    let stats = core.perf_stats();
    assert!(stats.frame_ms() >= 0.0);
    assert!(stats.stepped());
    assert_eq!(stats.events_dispatched(), 1);
    assert_eq!(stats.body_count(), 1);
}

#[test]
fn perf_stats_stay_zero_when_disabled() {
    let mut core = core_without_ground();
    core.frame(Vec2::zero(), &[InputEvent::PointerMove]);
    assert_eq!(core.perf_stats(), PerfStats::default());
}
