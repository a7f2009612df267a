pub mod collision;
pub mod loader;
pub mod skeleton;
pub mod vec2;
