//! StickmanCore - one physics world, its ragdolls, and the pointer drag
//!
//! Per frame, in order:
//! 1. input sampling (`set_pointer`)
//! 2. event dispatch through the `EventBus` (drag transitions, pause, camera)
//! 3. exactly one fixed-timestep physics step (skipped while paused)
//! 4. read-only extraction for the renderer
//!
//! Everything runs on the caller's thread; nothing blocks.

use std::collections::VecDeque;

use crate::drag::DragController;
use crate::loader::SkeletonLoadError;
use crate::ragdoll::Ragdoll;
use crate::rigid_body_system::{BodySnapshot, PhysicsWorld};
use crate::skeleton::Skeleton;
use crate::vec2::Vec2;

#[path = "events/events.rs"]
mod events;
#[path = "perf/perf_timer.rs"]
mod perf_timer;
#[path = "perf/perf_stats.rs"]
mod perf_stats;
#[path = "init/init.rs"]
mod init;
#[path = "init/settings.rs"]
mod settings;
#[path = "commands/commands.rs"]
mod commands;
#[path = "step/step.rs"]
mod step;
#[path = "render/render_extract.rs"]
mod render_extract;
mod facade;

pub use events::{EventBus, EventKind, InputEvent, Subscriber};
pub use facade::StickmanWorld;
pub use perf_stats::PerfStats;
pub use render_extract::CameraState;
pub use settings::{GroundSettings, SettingsError, SimulationSettings};

use perf_timer::PerfTimer;

/// Ragdoll handle issued by `StickmanCore::spawn_ragdoll`
pub type RagdollId = u32;

pub struct StickmanCore {
    settings: SimulationSettings,
    world: PhysicsWorld,
    drag: DragController,
    /// Slot per spawned ragdoll; despawned slots stay `None` so ids are stable.
    ragdolls: Vec<Option<Ragdoll>>,
    bus: EventBus<StickmanCore>,
    /// Set while the bus is out dispatching; nested emits/subscribes queue up.
    dispatching: bool,
    pending_events: VecDeque<InputEvent>,
    pending_subscribers: Vec<(EventKind, Subscriber<StickmanCore>)>,

    // Shared state read by subscribers and the renderer
    pointer: Vec2,
    camera: CameraState,
    debug_draw: bool,

    frame: u64,
    perf_enabled: bool,
    perf_stats: PerfStats,
}

impl StickmanCore {
    pub fn new(settings: SimulationSettings) -> Self {
        init::create_core(settings)
    }

    pub fn settings(&self) -> &SimulationSettings {
        &self.settings
    }

    pub fn world(&self) -> &PhysicsWorld {
        &self.world
    }

    pub fn world_mut(&mut self) -> &mut PhysicsWorld {
        &mut self.world
    }

    pub fn drag(&self) -> &DragController {
        &self.drag
    }

    /// Register an extra subscriber (after the built-in ones).
    ///
    /// Safe to call from inside a subscriber; it takes effect for events
    /// dispatched after the current one.
    pub fn subscribe(&mut self, kind: EventKind, handler: impl FnMut(&mut StickmanCore, &InputEvent) + 'static) {
        commands::subscribe(self, kind, Box::new(handler));
    }

    // === INPUT ===

    /// Pointer position in world space, read by pointer events.
    pub fn set_pointer(&mut self, at: Vec2) {
        self.pointer = at;
    }

    pub fn pointer(&self) -> Vec2 {
        self.pointer
    }

    /// Dispatch one event immediately. Returns how many subscribers ran.
    ///
    /// From inside a subscriber the event is queued behind the current one
    /// and this returns 0.
    pub fn emit(&mut self, event: InputEvent) -> usize {
        commands::emit(self, event)
    }

    // === RAGDOLLS ===

    pub fn spawn_ragdoll(&mut self, skeleton: &Skeleton, origin: Vec2) -> RagdollId {
        commands::spawn_ragdoll(self, skeleton, origin)
    }

    /// Parse a skeleton document and spawn it.
    pub fn spawn_ragdoll_json(&mut self, json: &str, origin: Vec2) -> Result<RagdollId, SkeletonLoadError> {
        commands::spawn_ragdoll_json(self, json, origin)
    }

    /// Remove a ragdoll (ending the drag first if it holds one of its bodies).
    pub fn despawn_ragdoll(&mut self, id: RagdollId) -> bool {
        commands::despawn_ragdoll(self, id)
    }

    pub fn ragdoll(&self, id: RagdollId) -> Option<&Ragdoll> {
        self.ragdolls.get(id as usize).and_then(|r| r.as_ref())
    }

    pub fn ragdoll_count(&self) -> usize {
        self.ragdolls.iter().filter(|r| r.is_some()).count()
    }

    // === FRAME ===

    /// Run one frame: sample pointer, dispatch `events`, step once.
    /// Returns whether the world advanced.
    pub fn frame(&mut self, pointer: Vec2, events: &[InputEvent]) -> bool {
        step::frame(self, pointer, events)
    }

    /// Physics step only (no event dispatch).
    pub fn step(&mut self) -> bool {
        step::step_world(self)
    }

    pub fn frame_count(&self) -> u64 {
        self.frame
    }

    pub fn is_paused(&self) -> bool {
        self.world.is_paused()
    }

    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        self.perf_enabled = enabled;
    }

    /// Last frame's perf snapshot (zeros when perf disabled)
    pub fn perf_stats(&self) -> PerfStats {
        self.perf_stats.clone()
    }

    // === RENDER ===

    pub fn camera(&self) -> CameraState {
        self.camera
    }

    pub fn debug_draw(&self) -> bool {
        self.debug_draw
    }

    pub fn body_snapshots(&self) -> Vec<BodySnapshot> {
        self.world.body_snapshots()
    }
}

impl Default for StickmanCore {
    fn default() -> Self {
        Self::new(SimulationSettings::default())
    }
}

#[cfg(test)]
#[path = "tests/tests.rs"]
mod tests;
