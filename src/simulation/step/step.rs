use crate::vec2::Vec2;

use super::events::InputEvent;
use super::{commands, PerfTimer, StickmanCore};

pub(super) fn frame(core: &mut StickmanCore, pointer: Vec2, events: &[InputEvent]) -> bool {
    let perf_on = core.perf_enabled;
    if perf_on {
        core.perf_stats.reset();
    }
    let frame_timer = PerfTimer::start_if(perf_on);

    // (a) input sampling
    core.pointer = pointer;

    // (b) drag / pause / camera transitions
    let dispatch_timer = PerfTimer::start_if(perf_on);
    let handlers: usize = events.iter().map(|event| commands::emit(core, *event)).sum();
    if let Some(ms) = dispatch_timer.elapsed_ms() {
        core.perf_stats.dispatch_ms = ms;
        core.perf_stats.events_dispatched = events.len() as u32;
        core.perf_stats.handlers_run = handlers as u32;
    }

    // (c) exactly one step
    let stepped = step_world(core);

    if let Some(ms) = frame_timer.elapsed_ms() {
        core.perf_stats.frame_ms = ms;
        core.perf_stats.body_count = core.world.body_count() as u32;
        core.perf_stats.joint_count = core.world.joint_count() as u32;
    }
    stepped
}

pub(super) fn step_world(core: &mut StickmanCore) -> bool {
    let physics_timer = PerfTimer::start_if(core.perf_enabled);
    let stepped = core.world.step();
    if let Some(ms) = physics_timer.elapsed_ms() {
        core.perf_stats.physics_ms = ms;
        core.perf_stats.stepped = stepped;
    }
    core.frame += 1;
    stepped
}
