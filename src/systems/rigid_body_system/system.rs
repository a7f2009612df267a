use std::num::NonZeroUsize;

use rapier2d::prelude::*;
use serde::{Deserialize, Serialize};

use crate::collision::CollisionFilter;
use crate::rigid_body::{BodyShape, BodySpec, JointSpec};
use crate::vec2::Vec2;

use super::collision::interaction_groups;

/// Colliders never get a half extent below this (keeps degenerate bones massive).
pub const MIN_HALF_EXTENT: f32 = 0.01;

/// Fixed-step contract of the physics world
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhysicsSettings {
    pub gravity: Vec2,
    /// Seconds per step
    pub timestep: f32,
    pub solver_iterations: usize,
    pub density: f32,
    pub friction: f32,
}

impl Default for PhysicsSettings {
    fn default() -> Self {
        Self {
            gravity: Vec2::new(0.0, -10.0),
            timestep: 1.0 / 60.0,
            solver_iterations: 8,
            density: 1.0,
            friction: 0.3,
        }
    }
}

/// Owns every rapier set. Passed explicitly to whoever creates or removes bodies.
pub struct PhysicsWorld {
    pub(super) gravity: Vector<Real>,
    pub(super) integration_parameters: IntegrationParameters,
    pub(super) pipeline: PhysicsPipeline,
    pub(super) islands: IslandManager,
    pub(super) broad_phase: DefaultBroadPhase,
    pub(super) narrow_phase: NarrowPhase,
    pub(super) bodies: RigidBodySet,
    pub(super) colliders: ColliderSet,
    pub(super) impulse_joints: ImpulseJointSet,
    pub(super) multibody_joints: MultibodyJointSet,
    pub(super) ccd_solver: CCDSolver,
    pub(super) query_pipeline: QueryPipeline,
    settings: PhysicsSettings,
    paused: bool,
    steps: u64,
}

#[inline]
pub(crate) fn to_vector(v: Vec2) -> Vector<Real> {
    vector![v.x, v.y]
}

#[inline]
pub(crate) fn to_point(v: Vec2) -> Point<Real> {
    point![v.x, v.y]
}

#[inline]
pub(crate) fn from_point(p: &Point<Real>) -> Vec2 {
    Vec2::new(p.x, p.y)
}

impl PhysicsWorld {
    pub fn new(settings: PhysicsSettings) -> Self {
        let mut integration_parameters = IntegrationParameters::default();
        integration_parameters.dt = settings.timestep;
        integration_parameters.num_solver_iterations =
            NonZeroUsize::new(settings.solver_iterations).unwrap_or(NonZeroUsize::MIN);

        Self {
            gravity: to_vector(settings.gravity),
            integration_parameters,
            pipeline: PhysicsPipeline::new(),
            islands: IslandManager::new(),
            broad_phase: DefaultBroadPhase::new(),
            narrow_phase: NarrowPhase::new(),
            bodies: RigidBodySet::new(),
            colliders: ColliderSet::new(),
            impulse_joints: ImpulseJointSet::new(),
            multibody_joints: MultibodyJointSet::new(),
            ccd_solver: CCDSolver::new(),
            query_pipeline: QueryPipeline::new(),
            settings,
            paused: false,
            steps: 0,
        }
    }

    pub fn settings(&self) -> &PhysicsSettings {
        &self.settings
    }

    pub fn set_paused(&mut self, paused: bool) {
        self.paused = paused;
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Number of steps actually integrated
    pub fn step_count(&self) -> u64 {
        self.steps
    }

    /// Advance one fixed timestep. Returns false when paused.
    pub fn step(&mut self) -> bool {
        if self.paused {
            return false;
        }
        self.pipeline.step(
            &self.gravity,
            &self.integration_parameters,
            &mut self.islands,
            &mut self.broad_phase,
            &mut self.narrow_phase,
            &mut self.bodies,
            &mut self.colliders,
            &mut self.impulse_joints,
            &mut self.multibody_joints,
            &mut self.ccd_solver,
            Some(&mut self.query_pipeline),
            &(),
            &(),
        );
        self.steps += 1;
        true
    }

    // === BODIES ===

    /// Create a dynamic body with one collider from a planned bone body.
    pub fn create_body(&mut self, spec: &BodySpec) -> RigidBodyHandle {
        let body = RigidBodyBuilder::dynamic()
            .translation(to_vector(spec.center))
            .rotation(spec.angle)
            .user_data(spec.bone as u128)
            .build();
        let handle = self.bodies.insert(body);

        let builder = match spec.shape {
            BodyShape::Box { half_width, half_length } => ColliderBuilder::cuboid(
                half_length.max(MIN_HALF_EXTENT),
                half_width.max(MIN_HALF_EXTENT),
            ),
            BodyShape::Circle { radius } => ColliderBuilder::ball(radius.max(MIN_HALF_EXTENT)),
        };
        let collider = builder
            .density(self.settings.density)
            .friction(self.settings.friction)
            .collision_groups(interaction_groups(spec.filter))
            .build();
        self.colliders.insert_with_parent(collider, handle, &mut self.bodies);
        handle
    }

    /// Fixed box the ragdolls can land on.
    pub fn create_ground(&mut self, center: Vec2, half_extents: Vec2) -> RigidBodyHandle {
        let handle = self
            .bodies
            .insert(RigidBodyBuilder::fixed().translation(to_vector(center)).build());
        let collider = ColliderBuilder::cuboid(half_extents.x, half_extents.y)
            .friction(self.settings.friction)
            .collision_groups(interaction_groups(CollisionFilter::GROUND))
            .build();
        self.colliders.insert_with_parent(collider, handle, &mut self.bodies);
        handle
    }

    /// Fixed body without colliders, used as the far end of a drag joint.
    pub fn create_anchor(&mut self, at: Vec2) -> RigidBodyHandle {
        self.bodies
            .insert(RigidBodyBuilder::fixed().translation(to_vector(at)).build())
    }

    /// Remove a body together with its colliders and attached joints.
    pub fn remove_body(&mut self, handle: RigidBodyHandle) -> bool {
        self.bodies
            .remove(
                handle,
                &mut self.islands,
                &mut self.colliders,
                &mut self.impulse_joints,
                &mut self.multibody_joints,
                true,
            )
            .is_some()
    }

    pub fn contains_body(&self, handle: RigidBodyHandle) -> bool {
        self.bodies.contains(handle)
    }

    pub fn body_count(&self) -> usize {
        self.bodies.len()
    }

    /// World position and rotation angle of a body.
    pub fn body_pose(&self, handle: RigidBodyHandle) -> Option<(Vec2, f32)> {
        let body = self.bodies.get(handle)?;
        let t = body.translation();
        Some((Vec2::new(t.x, t.y), body.rotation().angle()))
    }

    /// Mass summed from the body's colliders (valid before the first step).
    pub fn body_mass(&self, handle: RigidBodyHandle) -> Option<f32> {
        let body = self.bodies.get(handle)?;
        Some(
            body.colliders()
                .iter()
                .filter_map(|h| self.colliders.get(*h))
                .map(|c| c.mass())
                .sum(),
        )
    }

    pub fn is_dynamic(&self, handle: RigidBodyHandle) -> bool {
        self.bodies.get(handle).map(|b| b.is_dynamic()).unwrap_or(false)
    }

    /// Teleport a body and wake it.
    pub fn set_body_translation(&mut self, handle: RigidBodyHandle, at: Vec2) -> bool {
        match self.bodies.get_mut(handle) {
            Some(body) => {
                body.set_translation(to_vector(at), true);
                true
            }
            None => false,
        }
    }

    pub fn wake_body(&mut self, handle: RigidBodyHandle) {
        if let Some(body) = self.bodies.get_mut(handle) {
            body.wake_up(true);
        }
    }

    /// Collision filter of the body's first collider (`NONE` for collider-less anchors).
    pub fn body_filter(&self, handle: RigidBodyHandle) -> Option<CollisionFilter> {
        let body = self.bodies.get(handle)?;
        let Some(first) = body.colliders().first() else {
            return Some(CollisionFilter::NONE);
        };
        let collider = self.colliders.get(*first)?;
        let groups = collider.collision_groups();
        Some(CollisionFilter {
            category: groups.memberships.bits(),
            mask: groups.filter.bits(),
        })
    }

    // === JOINTS ===

    /// Revolute joint between two ragdoll bodies, no contacts between them.
    pub fn create_revolute_joint(
        &mut self,
        parent: RigidBodyHandle,
        child: RigidBodyHandle,
        spec: &JointSpec,
    ) -> ImpulseJointHandle {
        let joint = RevoluteJointBuilder::new()
            .local_anchor1(to_point(spec.local_anchor_a))
            .local_anchor2(to_point(spec.local_anchor_b))
            .contacts_enabled(false)
            .build();
        self.impulse_joints.insert(parent, child, joint, true)
    }

    /// Spring joint pulling `local_anchor` on `body` toward the anchor body's origin.
    pub fn create_spring_joint(
        &mut self,
        anchor: RigidBodyHandle,
        body: RigidBodyHandle,
        local_anchor: Vec2,
        stiffness: f32,
        damping: f32,
        max_force: f32,
    ) -> ImpulseJointHandle {
        let joint = GenericJointBuilder::new(JointAxesMask::empty())
            .local_anchor1(point![0.0, 0.0])
            .local_anchor2(to_point(local_anchor))
            .motor_position(JointAxis::LinX, 0.0, stiffness, damping)
            .motor_position(JointAxis::LinY, 0.0, stiffness, damping)
            .motor_max_force(JointAxis::LinX, max_force)
            .motor_max_force(JointAxis::LinY, max_force)
            .contacts_enabled(false)
            .build();
        self.impulse_joints.insert(anchor, body, joint, true)
    }

    pub fn remove_joint(&mut self, handle: ImpulseJointHandle) -> bool {
        self.impulse_joints.remove(handle, true).is_some()
    }

    pub fn contains_joint(&self, handle: ImpulseJointHandle) -> bool {
        self.impulse_joints.contains(handle)
    }

    pub fn joint_count(&self) -> usize {
        self.impulse_joints.len()
    }

    /// Both joint anchors mapped to world space through their bodies' current poses.
    pub fn joint_world_anchors(&self, handle: ImpulseJointHandle) -> Option<(Vec2, Vec2)> {
        let joint = self.impulse_joints.get(handle)?;
        let b1 = self.bodies.get(joint.body1)?;
        let b2 = self.bodies.get(joint.body2)?;
        let a = b1.position() * joint.data.local_anchor1();
        let b = b2.position() * joint.data.local_anchor2();
        Some((from_point(&a), from_point(&b)))
    }
}

impl Default for PhysicsWorld {
    fn default() -> Self {
        Self::new(PhysicsSettings::default())
    }
}
