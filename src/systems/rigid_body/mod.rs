//! Rigid body geometry derived from skeleton bones
//!
//! Pure data: nothing here touches the physics world. `RagdollPlan` walks a
//! skeleton depth-first and produces one `BodySpec` per bone and one
//! `JointSpec` per parent/child edge, ready to be instantiated.

mod body;
mod plan;

pub use body::{derive_body_spec, BodyShape, BodySpec, DEGENERATE_LENGTH};
pub use plan::{BuildError, JointSpec, RagdollPlan};
