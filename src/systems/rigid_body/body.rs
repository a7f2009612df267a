use crate::collision::{filter_for, BodyRole, CollisionFilter};
use crate::skeleton::{Bone, BoneId, ShapeKind};
use crate::vec2::Vec2;

/// Segments shorter than this have no usable direction.
pub const DEGENERATE_LENGTH: f32 = 1.0e-6;

/// Collider geometry in the body's local frame.
///
/// Local x runs along the bone segment (start -> end), local y across it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum BodyShape {
    Box {
        /// Half of the bone width (across the segment)
        half_width: f32,
        /// Half of the segment length (along the segment)
        half_length: f32,
    },
    Circle { radius: f32 },
}

/// Everything needed to create one rigid body, derived purely from a bone.
#[derive(Clone, Debug, PartialEq)]
pub struct BodySpec {
    pub bone: BoneId,
    pub name: String,
    pub role: BodyRole,
    /// Segment endpoints in world space
    pub world_start: Vec2,
    pub world_end: Vec2,
    /// World position (segment midpoint)
    pub center: Vec2,
    /// Rotation angle (radians) of the segment start -> end
    pub angle: f32,
    pub shape: BodyShape,
    pub filter: CollisionFilter,
    /// Zero-length segment, built with angle 0
    pub degenerate: bool,
}

impl BodySpec {
    /// Transform a local point to world coordinates.
    #[inline]
    pub fn local_to_world(&self, local: Vec2) -> Vec2 {
        self.center + local.rotate(self.angle)
    }

    /// Transform a world point into this body's local frame.
    #[inline]
    pub fn world_to_local(&self, world: Vec2) -> Vec2 {
        (world - self.center).rotate(-self.angle)
    }

    /// Segment endpoints recovered from center, angle and shape.
    ///
    /// Circles have no length of their own; their endpoints collapse to the center.
    pub fn segment_endpoints(&self) -> (Vec2, Vec2) {
        match self.shape {
            BodyShape::Box { half_length, .. } => (
                self.local_to_world(Vec2::new(-half_length, 0.0)),
                self.local_to_world(Vec2::new(half_length, 0.0)),
            ),
            BodyShape::Circle { .. } => (self.center, self.center),
        }
    }
}

/// Derive body geometry for `bone` placed at `origin`.
///
/// Child coordinates are authored relative to the parent's end point, so only
/// translation composes down the tree.
pub fn derive_body_spec(id: BoneId, bone: &Bone, origin: Vec2) -> BodySpec {
    let world_start = origin + bone.start;
    let world_end = origin + bone.end;
    let diff = world_end - world_start;
    let length = diff.length();

    let degenerate = length < DEGENERATE_LENGTH;
    let angle = if degenerate { 0.0 } else { diff.y.atan2(diff.x) };

    let shape = match bone.shape {
        ShapeKind::Box => BodyShape::Box {
            half_width: bone.width / 2.0,
            half_length: length / 2.0,
        },
        ShapeKind::Circle => BodyShape::Circle { radius: bone.width / 2.0 },
    };

    let role = if bone.is_root() { BodyRole::Root } else { BodyRole::Limb };

    BodySpec {
        bone: id,
        name: bone.name.clone(),
        role,
        world_start,
        world_end,
        center: world_start.midpoint(world_end),
        angle,
        shape,
        filter: filter_for(bone.layer, role),
        degenerate,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::skeleton::Layer;
    use approx::assert_relative_eq;

    #[test]
    fn box_bone_geometry() {
        let bone = Bone::new("arm", Vec2::new(0.0, 0.0), Vec2::new(0.0, -0.5), 0.16, ShapeKind::Box)
            .with_layer(Layer::Right);
        let spec = derive_body_spec(0, &bone, Vec2::new(2.0, 3.0));

        assert_eq!(spec.center, Vec2::new(2.0, 2.75));
        assert_relative_eq!(spec.angle, -std::f32::consts::FRAC_PI_2);
        match spec.shape {
            BodyShape::Box { half_width, half_length } => {
                assert_relative_eq!(half_width, 0.08);
                assert_relative_eq!(half_length, 0.25);
            }
            other => panic!("expected box, got {:?}", other),
        }
        assert!(!spec.degenerate);
    }

    #[test]
    fn endpoints_round_trip() {
        let bone = Bone::new("fore", Vec2::new(0.1, 0.2), Vec2::new(-0.4, 0.7), 0.1, ShapeKind::Box);
        let spec = derive_body_spec(0, &bone, Vec2::new(-1.0, 5.0));
        let (s, e) = spec.segment_endpoints();
        assert_relative_eq!(s.x, -0.9, epsilon = 1e-5);
        assert_relative_eq!(s.y, 5.2, epsilon = 1e-5);
        assert_relative_eq!(e.x, -1.4, epsilon = 1e-5);
        assert_relative_eq!(e.y, 5.7, epsilon = 1e-5);
    }

    #[test]
    fn zero_length_bone_has_zero_angle() {
        let bone = Bone::new("dot", Vec2::new(1.0, 1.0), Vec2::new(1.0, 1.0), 0.2, ShapeKind::Box);
        let spec = derive_body_spec(0, &bone, Vec2::zero());
        assert!(spec.degenerate);
        assert_eq!(spec.angle, 0.0);
        assert!(spec.angle.is_finite());
    }

    #[test]
    fn circle_radius_is_half_width() {
        let bone = Bone::new("head", Vec2::zero(), Vec2::new(0.0, 0.4), 0.4, ShapeKind::Circle);
        let spec = derive_body_spec(0, &bone, Vec2::zero());
        assert_eq!(spec.shape, BodyShape::Circle { radius: 0.2 });
        assert_eq!(spec.center, Vec2::new(0.0, 0.2));
    }

    #[test]
    fn world_local_inverse() {
        let bone = Bone::new("x", Vec2::zero(), Vec2::new(1.0, 1.0), 0.1, ShapeKind::Box);
        let spec = derive_body_spec(0, &bone, Vec2::zero());
        let p = Vec2::new(0.3, -0.2);
        let back = spec.local_to_world(spec.world_to_local(p));
        assert_relative_eq!(back.x, p.x, epsilon = 1e-6);
        assert_relative_eq!(back.y, p.y, epsilon = 1e-6);
    }
}
