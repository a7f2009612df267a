//! Stickman Engine - procedural ragdolls in a 2D rigid-body world
//!
//! Architecture:
//! - core/          - Logging macros
//! - domain/        - Skeleton model, document loader, collision policy
//! - systems/       - Body planning, physics world, ragdoll builder, dragging
//! - simulation/    - Frame orchestration, events, settings, JS facade

// Macros must be declared first.
#[macro_use]
pub mod core;
pub mod domain;
pub mod simulation;
pub mod systems;

// Short paths used throughout the crate
pub use domain::collision;
pub use domain::loader;
pub use domain::skeleton;
pub use domain::vec2;
pub use systems::drag;
pub use systems::ragdoll;
pub use systems::rigid_body;
pub use systems::rigid_body_system;

use wasm_bindgen::prelude::*;

use domain::collision::CollisionCategory;

// Better error messages in debug mode
#[cfg(feature = "console_error_panic_hook")]
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Initialize the engine
#[wasm_bindgen]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    set_panic_hook();

    console_log!("Stickman engine {} initialized", version());
}

/// Get engine version
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

// Re-export main types
pub use domain::loader::SkeletonLoadError;
pub use domain::skeleton::{Bone, Layer, ShapeKind, Skeleton};
pub use domain::vec2::Vec2;
pub use simulation::{InputEvent, StickmanCore, StickmanWorld};

// Collision category bits for JS tooling
#[wasm_bindgen]
pub fn category_torso() -> u32 { CollisionCategory::Torso.bits() }
#[wasm_bindgen]
pub fn category_right_side() -> u32 { CollisionCategory::RightSide.bits() }
#[wasm_bindgen]
pub fn category_left_side() -> u32 { CollisionCategory::LeftSide.bits() }
#[wasm_bindgen]
pub fn category_ground() -> u32 { CollisionCategory::Ground.bits() }

/// Tab-indented bone outline of a skeleton document (debug aid)
#[wasm_bindgen]
pub fn skeleton_outline(json: String) -> Result<String, JsValue> {
    let skeleton = Skeleton::from_document_json(&json).map_err(|e| JsValue::from_str(&e.to_string()))?;
    Ok(skeleton.outline())
}
