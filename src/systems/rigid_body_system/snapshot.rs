use rapier2d::prelude::*;

use crate::vec2::Vec2;

use super::system::PhysicsWorld;

/// Floats per body in `PhysicsWorld::flatten_snapshots`
pub const SNAPSHOT_STRIDE: usize = 6;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SnapshotShape {
    Box { half_extents: Vec2 },
    Circle { radius: f32 },
    /// Bodies with no collider (drag anchors)
    Empty,
}

impl SnapshotShape {
    fn kind_code(&self) -> f32 {
        match self {
            SnapshotShape::Empty => 0.0,
            SnapshotShape::Box { .. } => 1.0,
            SnapshotShape::Circle { .. } => 2.0,
        }
    }
}

/// Read-only view of one body for the renderer
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BodySnapshot {
    pub handle: RigidBodyHandle,
    pub position: Vec2,
    pub angle: f32,
    pub dynamic: bool,
    pub shape: SnapshotShape,
}

impl PhysicsWorld {
    pub fn body_snapshots(&self) -> Vec<BodySnapshot> {
        let mut out = Vec::with_capacity(self.bodies.len());
        for (handle, body) in self.bodies.iter() {
            let shape = body
                .colliders()
                .first()
                .and_then(|h| self.colliders.get(*h))
                .map(|c| {
                    let shape = c.shape();
                    if let Some(cuboid) = shape.as_cuboid() {
                        SnapshotShape::Box {
                            half_extents: Vec2::new(cuboid.half_extents.x, cuboid.half_extents.y),
                        }
                    } else if let Some(ball) = shape.as_ball() {
                        SnapshotShape::Circle { radius: ball.radius }
                    } else {
                        SnapshotShape::Empty
                    }
                })
                .unwrap_or(SnapshotShape::Empty);

            let t = body.translation();
            out.push(BodySnapshot {
                handle,
                position: Vec2::new(t.x, t.y),
                angle: body.rotation().angle(),
                dynamic: body.is_dynamic(),
                shape,
            });
        }
        out
    }

    /// `[x, y, angle, kind, a, b]` per body; kind 1 = box (a, b = half extents),
    /// kind 2 = circle (a = radius), kind 0 = no shape.
    pub fn flatten_snapshots(&self) -> Vec<f32> {
        let snapshots = self.body_snapshots();
        let mut out = Vec::with_capacity(snapshots.len() * SNAPSHOT_STRIDE);
        for s in snapshots.iter() {
            let (a, b) = match s.shape {
                SnapshotShape::Box { half_extents } => (half_extents.x, half_extents.y),
                SnapshotShape::Circle { radius } => (radius, 0.0),
                SnapshotShape::Empty => (0.0, 0.0),
            };
            out.extend_from_slice(&[s.position.x, s.position.y, s.angle, s.shape.kind_code(), a, b]);
        }
        out
    }
}
