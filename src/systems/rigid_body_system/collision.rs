use rapier2d::parry::bounding_volume::Aabb;
use rapier2d::parry::query::PointQuery;
use rapier2d::prelude::*;

use crate::collision::CollisionFilter;
use crate::vec2::Vec2;

use super::system::{to_point, PhysicsWorld};

pub(crate) fn interaction_groups(filter: CollisionFilter) -> InteractionGroups {
    InteractionGroups::new(
        Group::from_bits_truncate(filter.category),
        Group::from_bits_truncate(filter.mask),
    )
}

impl PhysicsWorld {
    /// First dynamic body whose collider contains `point`.
    ///
    /// Candidates come from a box of `half_extent` around the point; each is
    /// then tested exactly against its shape.
    pub fn dynamic_body_at(&mut self, point: Vec2, half_extent: f32) -> Option<RigidBodyHandle> {
        // Bodies created since the last step are not indexed yet.
        self.query_pipeline.update(&self.colliders);

        let p = to_point(point);
        let d = vector![half_extent, half_extent];
        let region = Aabb::new(p - d, p + d);

        let bodies = &self.bodies;
        let colliders = &self.colliders;
        let mut found = None;
        self.query_pipeline
            .colliders_with_aabb_intersecting_aabb(&region, |handle| {
                let Some(collider) = colliders.get(*handle) else {
                    return true;
                };
                let Some(parent) = collider.parent() else {
                    return true;
                };
                let dynamic = bodies.get(parent).map(|b| b.is_dynamic()).unwrap_or(false);
                if dynamic && collider.shape().contains_point(collider.position(), &p) {
                    found = Some(parent);
                    return false;
                }
                true
            });
        found
    }
}
