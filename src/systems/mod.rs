pub mod drag;
pub mod ragdoll;
pub mod rigid_body;
pub mod rigid_body_system;
