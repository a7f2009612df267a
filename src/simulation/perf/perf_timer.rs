//! Millisecond clock for the per-frame perf breakdown

#[cfg(target_arch = "wasm32")]
fn now_ms() -> f64 {
    js_sys::Date::now()
}

#[cfg(not(target_arch = "wasm32"))]
fn now_ms() -> f64 {
    use std::sync::OnceLock;
    use std::time::Instant;

    static EPOCH: OnceLock<Instant> = OnceLock::new();
    EPOCH.get_or_init(Instant::now).elapsed().as_secs_f64() * 1000.0
}

/// Stopwatch that only reads the clock when metrics are on.
#[derive(Clone, Copy, Debug)]
pub(crate) struct PerfTimer {
    start_ms: Option<f64>,
}

impl PerfTimer {
    pub(crate) fn start_if(enabled: bool) -> Self {
        Self {
            start_ms: enabled.then(now_ms),
        }
    }

    /// `None` when the timer was started disabled.
    pub(crate) fn elapsed_ms(&self) -> Option<f64> {
        self.start_ms.map(|start| now_ms() - start)
    }
}
