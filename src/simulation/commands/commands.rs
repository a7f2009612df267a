use crate::loader::SkeletonLoadError;
use crate::ragdoll::Ragdoll;
use crate::skeleton::Skeleton;
use crate::vec2::Vec2;

use super::events::{EventKind, InputEvent, Subscriber};
use super::{RagdollId, StickmanCore};

/// Dispatch `event`. Events emitted by a running subscriber are queued and
/// delivered after it, in order, within this call; the count covers them all.
pub(super) fn emit(core: &mut StickmanCore, event: InputEvent) -> usize {
    if core.dispatching {
        core.pending_events.push_back(event);
        return 0;
    }

    // The bus is taken out so subscribers can borrow the core mutably.
    core.dispatching = true;
    let mut bus = std::mem::take(&mut core.bus);
    let mut ran = bus.emit(core, &event);
    loop {
        for (kind, handler) in core.pending_subscribers.drain(..) {
            bus.subscribe_boxed(kind, handler);
        }
        let Some(next) = core.pending_events.pop_front() else {
            break;
        };
        ran += bus.emit(core, &next);
    }
    core.bus = bus;
    core.dispatching = false;
    ran
}

/// Register on the live bus, or park the subscriber until the running dispatch ends.
pub(super) fn subscribe(core: &mut StickmanCore, kind: EventKind, handler: Subscriber<StickmanCore>) {
    if core.dispatching {
        core.pending_subscribers.push((kind, handler));
    } else {
        core.bus.subscribe_boxed(kind, handler);
    }
}

pub(super) fn spawn_ragdoll(core: &mut StickmanCore, skeleton: &Skeleton, origin: Vec2) -> RagdollId {
    let ragdoll = Ragdoll::build(&mut core.world, skeleton, origin);
    let id = core.ragdolls.len() as RagdollId;
    core.ragdolls.push(Some(ragdoll));
    id
}

pub(super) fn spawn_ragdoll_json(
    core: &mut StickmanCore,
    json: &str,
    origin: Vec2,
) -> Result<RagdollId, SkeletonLoadError> {
    let skeleton = Skeleton::from_document_json(json)?;
    Ok(spawn_ragdoll(core, &skeleton, origin))
}

pub(super) fn despawn_ragdoll(core: &mut StickmanCore, id: RagdollId) -> bool {
    let Some(ragdoll) = core.ragdolls.get_mut(id as usize).and_then(|slot| slot.take()) else {
        return false;
    };

    let holds_drag = core
        .drag
        .session()
        .map(|s| ragdoll.bodies().contains(&s.body))
        .unwrap_or(false);
    if holds_drag {
        core.drag.pointer_up(&mut core.world);
    }

    ragdoll.despawn(&mut core.world);
    true
}
