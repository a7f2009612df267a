//! Collision filter policy
//!
//! Category bits (visible to skeleton authors):
//!
//! | Category   | Bits     |
//! |------------|----------|
//! | Torso      | `0x0001` |
//! | RightSide  | `0x0002` |
//! | LeftSide   | `0x0004` |
//! | Ground     | `0x0008` |
//!
//! Rule table, (layer, role) -> (category, mask):
//!
//! | Layer  | Role  | Category  | Mask           |
//! |--------|-------|-----------|----------------|
//! | any    | Root  | Torso     | Torso, Ground  |
//! | Middle | Limb  | Torso     | Ground         |
//! | Left   | Limb  | LeftSide  | Ground         |
//! | Right  | Limb  | RightSide | Ground         |
//!
//! The ground uses `Ground` / (Torso, LeftSide, RightSide). A pair collides
//! only when each side's mask contains the other's category, so limbs never
//! touch each other or the torso, and everything touches the ground.

use super::skeleton::Layer;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u32)]
pub enum CollisionCategory {
    Torso = 0x0001,
    RightSide = 0x0002,
    LeftSide = 0x0004,
    Ground = 0x0008,
}

impl CollisionCategory {
    pub const ALL: [CollisionCategory; 4] = [
        CollisionCategory::Torso,
        CollisionCategory::RightSide,
        CollisionCategory::LeftSide,
        CollisionCategory::Ground,
    ];

    #[inline]
    pub const fn bits(self) -> u32 {
        self as u32
    }
}

/// Structural role of a body within its ragdoll
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BodyRole {
    /// Root bone of the skeleton
    Root,
    /// Any non-root bone
    Limb,
}

/// Category / mask pair applied to a collider
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CollisionFilter {
    pub category: u32,
    pub mask: u32,
}

const RAGDOLL_MASK: u32 = CollisionCategory::Torso.bits()
    | CollisionCategory::LeftSide.bits()
    | CollisionCategory::RightSide.bits();

impl CollisionFilter {
    pub const GROUND: CollisionFilter = CollisionFilter {
        category: CollisionCategory::Ground.bits(),
        mask: RAGDOLL_MASK,
    };

    /// Explicitly non-colliding (drag anchors).
    pub const NONE: CollisionFilter = CollisionFilter { category: 0, mask: 0 };

    pub const fn new(category: CollisionCategory, mask: u32) -> Self {
        Self { category: category.bits(), mask }
    }

    /// Both masks must accept the other category.
    pub fn collides_with(&self, other: &CollisionFilter) -> bool {
        (self.mask & other.category) != 0 && (other.mask & self.category) != 0
    }
}

/// Total mapping from (layer, role) to the filter a ragdoll body gets.
pub fn filter_for(layer: Layer, role: BodyRole) -> CollisionFilter {
    let ground = CollisionCategory::Ground.bits();
    match (role, layer) {
        (BodyRole::Root, _) => {
            CollisionFilter::new(CollisionCategory::Torso, CollisionCategory::Torso.bits() | ground)
        }
        (BodyRole::Limb, Layer::Middle) => CollisionFilter::new(CollisionCategory::Torso, ground),
        (BodyRole::Limb, Layer::Left) => CollisionFilter::new(CollisionCategory::LeftSide, ground),
        (BodyRole::Limb, Layer::Right) => CollisionFilter::new(CollisionCategory::RightSide, ground),
    }
}
