#[macro_use]
mod log;

pub use log::{log_line, warn_line};
