//! Ragdoll - bodies and joints instantiated from one skeleton
//!
//! Geometry is planned first (`RagdollPlan`, pure), then created in the
//! physics world in a single pass. The ragdoll keeps non-owning handles;
//! the world owns the bodies.

use crate::rigid_body::{BuildError, RagdollPlan};
use crate::rigid_body_system::{ImpulseJointHandle, PhysicsWorld, RigidBodyHandle};
use crate::skeleton::{BoneId, Skeleton};
use crate::vec2::Vec2;

pub struct Ragdoll {
    name: String,
    /// Pre-order, root first; `bones[i]` is the bone of `bodies[i]`
    bodies: Vec<RigidBodyHandle>,
    bones: Vec<BoneId>,
    joints: Vec<ImpulseJointHandle>,
    warnings: Vec<BuildError>,
}

impl Ragdoll {
    /// Instantiate `skeleton` with its root placed at `origin`.
    pub fn build(world: &mut PhysicsWorld, skeleton: &Skeleton, origin: Vec2) -> Self {
        let plan = RagdollPlan::from_skeleton(skeleton, origin);
        Self::from_plan(world, skeleton.root().name.clone(), plan)
    }

    pub fn from_plan(world: &mut PhysicsWorld, name: String, plan: RagdollPlan) -> Self {
        for warning in plan.warnings.iter() {
            console_warn!("{}", warning);
        }

        let mut bodies = Vec::with_capacity(plan.bodies.len());
        let mut bones = Vec::with_capacity(plan.bodies.len());
        for spec in plan.bodies.iter() {
            bodies.push(world.create_body(spec));
            bones.push(spec.bone);
            console_log!(
                "  bone '{}' at ({:.2}, {:.2}) angle {:.2}",
                spec.name, spec.center.x, spec.center.y, spec.angle
            );
        }

        let mut joints = Vec::with_capacity(plan.joints.len());
        for joint in plan.joints.iter() {
            joints.push(world.create_revolute_joint(bodies[joint.parent], bodies[joint.child], joint));
        }

        console_log!("built ragdoll '{}': {} bodies, {} joints", name, bodies.len(), joints.len());

        Self {
            name,
            bodies,
            bones,
            joints,
            warnings: plan.warnings,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn bodies(&self) -> &[RigidBodyHandle] {
        &self.bodies
    }

    pub fn joints(&self) -> &[ImpulseJointHandle] {
        &self.joints
    }

    pub fn body_count(&self) -> usize {
        self.bodies.len()
    }

    pub fn joint_count(&self) -> usize {
        self.joints.len()
    }

    /// Body created for `bone`, if any.
    pub fn body_for_bone(&self, bone: BoneId) -> Option<RigidBodyHandle> {
        self.bones.iter().position(|&b| b == bone).map(|i| self.bodies[i])
    }

    pub fn warnings(&self) -> &[BuildError] {
        &self.warnings
    }

    /// Remove every joint and body from the world.
    pub fn despawn(self, world: &mut PhysicsWorld) {
        for joint in self.joints {
            world.remove_joint(joint);
        }
        for body in self.bodies {
            world.remove_body(body);
        }
    }
}
