//! Pointer dragging
//!
//! While the pointer is held over a dynamic body, a fixed anchor body sits
//! under the pointer and a spring joint pulls the grabbed point toward it.
//! Both exist only between pointer-down and pointer-up.

mod controller;

pub use controller::{DragController, DragSession, DragSettings, DragState};
