//! RigidBodySystem - the physics world the ragdolls live in
//!
//! Thin ownership layer over `rapier2d`. Integration is a black box with a
//! fixed timestep; this module only creates and removes bodies/joints, answers
//! point queries, and exposes read-only snapshots for rendering.

mod collision;
mod snapshot;
mod system;

pub use snapshot::{BodySnapshot, SnapshotShape, SNAPSHOT_STRIDE};
pub use system::{PhysicsSettings, PhysicsWorld, MIN_HALF_EXTENT};

pub use rapier2d::prelude::{ImpulseJointHandle, RigidBodyHandle};

#[cfg(test)]
mod tests;
