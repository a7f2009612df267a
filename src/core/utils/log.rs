//! Console logging macros
//!
//! In the browser: lines go to `console.log` / `console.warn`.
//! Everywhere else (native tests, tools): lines go to stderr.
//!
//! Usage:
//! ```rust
//! use stickman_engine::{console_log, console_warn};
//!
//! console_log!("created {} bodies", 11);
//! console_warn!("bone '{}' has zero length", "neck");
//! ```

#[cfg(target_arch = "wasm32")]
pub fn log_line(msg: &str) {
    web_sys::console::log_1(&msg.into());
}

#[cfg(not(target_arch = "wasm32"))]
pub fn log_line(msg: &str) {
    eprintln!("[stickman] {}", msg);
}

#[cfg(target_arch = "wasm32")]
pub fn warn_line(msg: &str) {
    web_sys::console::warn_1(&msg.into());
}

#[cfg(not(target_arch = "wasm32"))]
pub fn warn_line(msg: &str) {
    eprintln!("[stickman] WARN {}", msg);
}

/// Log an informational line.
#[macro_export]
macro_rules! console_log {
    ($($arg:tt)*) => {
        $crate::core::utils::log_line(&format!($($arg)*))
    };
}

/// Log a warning line.
#[macro_export]
macro_rules! console_warn {
    ($($arg:tt)*) => {
        $crate::core::utils::warn_line(&format!($($arg)*))
    };
}
