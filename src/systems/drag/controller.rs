use serde::{Deserialize, Serialize};

use crate::rigid_body_system::{ImpulseJointHandle, PhysicsWorld, RigidBodyHandle};
use crate::vec2::Vec2;

/// Spring parameters of the drag joint
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DragSettings {
    pub stiffness: f32,
    pub damping: f32,
    /// Max joint force = this * mass of the dragged body
    pub max_force_per_mass: f32,
    /// Half size of the query box around the pointer
    pub query_half_extent: f32,
}

impl Default for DragSettings {
    fn default() -> Self {
        Self {
            stiffness: 50.0,
            damping: 5.0,
            max_force_per_mass: 1000.0,
            query_half_extent: 0.001,
        }
    }
}

/// Resources alive for one pointer-held interval
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragSession {
    pub anchor: RigidBodyHandle,
    pub body: RigidBodyHandle,
    pub joint: ImpulseJointHandle,
    /// Current pointer position (world space)
    pub target: Vec2,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum DragState {
    #[default]
    Idle,
    Dragging(DragSession),
}

#[derive(Debug, Default)]
pub struct DragController {
    settings: DragSettings,
    state: DragState,
}

impl DragController {
    pub fn new(settings: DragSettings) -> Self {
        Self {
            settings,
            state: DragState::Idle,
        }
    }

    pub fn settings(&self) -> &DragSettings {
        &self.settings
    }

    pub fn state(&self) -> DragState {
        self.state
    }

    pub fn session(&self) -> Option<&DragSession> {
        match &self.state {
            DragState::Dragging(session) => Some(session),
            DragState::Idle => None,
        }
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.state, DragState::Dragging(_))
    }

    /// Grab the dynamic body under `at`, if any. Returns true when a drag began.
    ///
    /// A stale session (missed pointer-up) is released first.
    pub fn pointer_down(&mut self, world: &mut PhysicsWorld, at: Vec2) -> bool {
        self.pointer_up(world);

        let Some(body) = world.dynamic_body_at(at, self.settings.query_half_extent) else {
            return false;
        };
        let Some((center, angle)) = world.body_pose(body) else {
            return false;
        };
        let mass = world.body_mass(body).unwrap_or(0.0);

        let local_anchor = (at - center).rotate(-angle);
        let anchor = world.create_anchor(at);
        let joint = world.create_spring_joint(
            anchor,
            body,
            local_anchor,
            self.settings.stiffness,
            self.settings.damping,
            self.settings.max_force_per_mass * mass,
        );
        world.wake_body(body);

        self.state = DragState::Dragging(DragSession {
            anchor,
            body,
            joint,
            target: at,
        });
        console_log!("drag start at ({:.2}, {:.2})", at.x, at.y);
        true
    }

    /// Move the drag target. No-op while idle.
    pub fn pointer_move(&mut self, world: &mut PhysicsWorld, at: Vec2) -> bool {
        let DragState::Dragging(session) = &mut self.state else {
            return false;
        };
        session.target = at;
        world.set_body_translation(session.anchor, at);
        world.wake_body(session.body);
        true
    }

    /// Release the joint and anchor. No-op while idle.
    pub fn pointer_up(&mut self, world: &mut PhysicsWorld) -> bool {
        let DragState::Dragging(session) = std::mem::take(&mut self.state) else {
            return false;
        };
        // The joint is already gone if the dragged body was removed mid-drag.
        world.remove_joint(session.joint);
        world.remove_body(session.anchor);
        console_log!("drag end at ({:.2}, {:.2})", session.target.x, session.target.y);
        true
    }
}
