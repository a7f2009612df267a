use thiserror::Error;

use crate::skeleton::{BoneId, Skeleton};
use crate::vec2::Vec2;

use super::body::{derive_body_spec, BodySpec};

/// Non-fatal geometry problems found while planning a ragdoll.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum BuildError {
    #[error("bone `{bone}` has zero length; built with orientation 0")]
    DegenerateGeometry { bone: String },
}

/// Revolute joint between two planned bodies (indices into `RagdollPlan::bodies`).
#[derive(Clone, Debug, PartialEq)]
pub struct JointSpec {
    pub parent: usize,
    pub child: usize,
    /// Shared connection point (child's world start)
    pub world_anchor: Vec2,
    pub local_anchor_a: Vec2,
    pub local_anchor_b: Vec2,
}

/// Bodies and joints for one skeleton, before anything touches the physics world.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RagdollPlan {
    /// Pre-order, root first
    pub bodies: Vec<BodySpec>,
    pub joints: Vec<JointSpec>,
    pub warnings: Vec<BuildError>,
}

impl RagdollPlan {
    pub fn from_skeleton(skeleton: &Skeleton, origin: Vec2) -> Self {
        let mut plan = RagdollPlan {
            bodies: Vec::with_capacity(skeleton.len()),
            joints: Vec::with_capacity(skeleton.len().saturating_sub(1)),
            warnings: Vec::new(),
        };
        plan.visit(skeleton, Skeleton::ROOT, origin, None);
        plan
    }

    fn visit(&mut self, skeleton: &Skeleton, id: BoneId, origin: Vec2, parent: Option<usize>) {
        let Some(bone) = skeleton.get(id) else {
            return;
        };

        let spec = derive_body_spec(id, bone, origin);
        if spec.degenerate {
            self.warnings.push(BuildError::DegenerateGeometry { bone: bone.name.clone() });
        }
        let child_origin = spec.world_end;
        let index = self.bodies.len();

        if let Some(parent) = parent {
            let anchor = spec.world_start;
            self.joints.push(JointSpec {
                parent,
                child: index,
                world_anchor: anchor,
                local_anchor_a: self.bodies[parent].world_to_local(anchor),
                local_anchor_b: spec.world_to_local(anchor),
            });
        }
        self.bodies.push(spec);

        for &child in bone.children() {
            self.visit(skeleton, child, child_origin, Some(index));
        }
    }
}
