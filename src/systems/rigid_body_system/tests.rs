use approx::assert_relative_eq;

use super::*;
use crate::rigid_body::RagdollPlan;
use crate::skeleton::{Bone, Layer, ShapeKind, Skeleton};
use crate::vec2::Vec2;

fn arm() -> Skeleton {
    let mut sk = Skeleton::new(Bone::new(
        "upper",
        Vec2::zero(),
        Vec2::new(0.5, 0.0),
        0.2,
        ShapeKind::Box,
    ));
    sk.add_child(
        Skeleton::ROOT,
        Bone::new("lower", Vec2::zero(), Vec2::new(0.3, 0.4), 0.2, ShapeKind::Box).with_layer(Layer::Left),
    );
    sk
}

#[test]
fn created_body_matches_spec_pose() {
    let mut world = PhysicsWorld::default();
    let plan = RagdollPlan::from_skeleton(&arm(), Vec2::new(1.0, 2.0));
    let spec = &plan.bodies[1];
    let handle = world.create_body(spec);

    let (pos, angle) = world.body_pose(handle).unwrap();
    assert_relative_eq!(pos.x, spec.center.x, epsilon = 1e-5);
    assert_relative_eq!(pos.y, spec.center.y, epsilon = 1e-5);
    assert_relative_eq!(angle, spec.angle, epsilon = 1e-5);
    assert_eq!(world.body_filter(handle), Some(spec.filter));
    assert!(world.body_mass(handle).unwrap() > 0.0);
}

#[test]
fn joint_anchors_coincide_in_world() {
    let mut world = PhysicsWorld::default();
    let plan = RagdollPlan::from_skeleton(&arm(), Vec2::new(-3.0, 4.0));
    let a = world.create_body(&plan.bodies[0]);
    let b = world.create_body(&plan.bodies[1]);
    let joint = world.create_revolute_joint(a, b, &plan.joints[0]);

    let (wa, wb) = world.joint_world_anchors(joint).unwrap();
    assert_relative_eq!(wa.x, wb.x, epsilon = 1e-4);
    assert_relative_eq!(wa.y, wb.y, epsilon = 1e-4);
    assert_relative_eq!(wa.x, -2.5, epsilon = 1e-4);
    assert_relative_eq!(wa.y, 4.0, epsilon = 1e-4);
}

#[test]
fn point_query_ignores_fixed_bodies() {
    let mut world = PhysicsWorld::default();
    world.create_ground(Vec2::new(0.0, -1.0), Vec2::new(10.0, 0.5));
    assert!(world.dynamic_body_at(Vec2::new(0.0, -1.0), 0.001).is_none());

    let plan = RagdollPlan::from_skeleton(&arm(), Vec2::zero());
    let upper = world.create_body(&plan.bodies[0]);
    assert_eq!(world.dynamic_body_at(Vec2::new(0.25, 0.0), 0.001), Some(upper));
    assert!(world.dynamic_body_at(Vec2::new(0.25, 3.0), 0.001).is_none());
}

#[test]
fn paused_world_does_not_step() {
    let mut world = PhysicsWorld::default();
    world.set_paused(true);
    assert!(!world.step());
    assert_eq!(world.step_count(), 0);
    world.set_paused(false);
    assert!(world.step());
    assert_eq!(world.step_count(), 1);
}

#[test]
fn dynamic_body_falls() {
    let mut world = PhysicsWorld::default();
    let plan = RagdollPlan::from_skeleton(&arm(), Vec2::new(0.0, 10.0));
    let h = world.create_body(&plan.bodies[0]);
    for _ in 0..30 {
        world.step();
    }
    let (pos, _) = world.body_pose(h).unwrap();
    assert!(pos.y < 10.0);
}

#[test]
fn removing_body_drops_its_joints() {
    let mut world = PhysicsWorld::default();
    let plan = RagdollPlan::from_skeleton(&arm(), Vec2::zero());
    let a = world.create_body(&plan.bodies[0]);
    let b = world.create_body(&plan.bodies[1]);
    let j = world.create_revolute_joint(a, b, &plan.joints[0]);
    assert_eq!(world.joint_count(), 1);

    assert!(world.remove_body(b));
    assert!(!world.contains_joint(j));
    assert_eq!(world.joint_count(), 0);
    assert!(!world.remove_body(b));
}

#[test]
fn snapshots_describe_shapes() {
    let mut world = PhysicsWorld::default();
    world.create_ground(Vec2::new(0.0, -1.0), Vec2::new(10.0, 0.5));
    let anchor = world.create_anchor(Vec2::new(1.0, 1.0));
    assert_eq!(world.body_filter(anchor), Some(crate::collision::CollisionFilter::NONE));

    let snaps = world.body_snapshots();
    assert_eq!(snaps.len(), 2);
    assert!(snaps.iter().any(|s| matches!(s.shape, SnapshotShape::Box { .. }) && !s.dynamic));
    assert!(snaps.iter().any(|s| s.shape == SnapshotShape::Empty));
    assert_eq!(world.flatten_snapshots().len(), 2 * SNAPSHOT_STRIDE);
}
