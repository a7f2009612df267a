//! Core utilities shared by every layer (macros must be declared first).

#[macro_use]
pub mod utils;
