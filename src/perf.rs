//! Profiling instrumentation for hot paths.
//!
//! Hit testing, barcode rendering and canvas painting are wrapped in
//! `profile_scope!`. With the `profiling` feature enabled, each scope logs
//! its duration at trace level when it exceeds a threshold; without the
//! feature the macro compiles to nothing.
//!
//! ```ignore
//! fn item_at(&self, x: f32, y: f32) -> Option<u64> {
//!     profile_scope!("label_item_at");
//!     // ...
//! }
//! ```

use std::time::Instant;

/// Frame budget at 60 FPS
pub const TARGET_FRAME_MS: f64 = 16.67;

/// Threshold used by `profile_scope!` without an explicit one
const PROFILING_THRESHOLD_MS: f64 = 1.0;

/// Profile a scope with the given name. Zero-cost when profiling is disabled.
#[macro_export]
macro_rules! profile_scope {
    ($name:expr) => {
        #[cfg(feature = "profiling")]
        let _timer = $crate::perf::ScopedTimer::for_profiling($name);
        #[cfg(not(feature = "profiling"))]
        let _ = $name;
    };
    ($name:expr, $threshold_ms:expr) => {
        #[cfg(feature = "profiling")]
        let _timer = $crate::perf::ScopedTimer::new($name, $threshold_ms);
        #[cfg(not(feature = "profiling"))]
        let _ = ($name, $threshold_ms);
    };
}

/// RAII timer that logs on drop when the scope ran longer than its threshold.
pub struct ScopedTimer {
    name: &'static str,
    start: Instant,
    threshold_ms: f64,
}

impl ScopedTimer {
    pub fn new(name: &'static str, threshold_ms: f64) -> Self {
        Self {
            name,
            start: Instant::now(),
            threshold_ms,
        }
    }

    pub fn for_profiling(name: &'static str) -> Self {
        Self::new(name, PROFILING_THRESHOLD_MS)
    }

    /// Timer that warns when a whole frame's budget is exceeded
    pub fn for_frame(name: &'static str) -> Self {
        Self::new(name, TARGET_FRAME_MS)
    }

    pub fn elapsed_ms(&self) -> f64 {
        self.start.elapsed().as_secs_f64() * 1000.0
    }

    pub fn name(&self) -> &'static str {
        self.name
    }
}

impl Drop for ScopedTimer {
    fn drop(&mut self) {
        let elapsed_ms = self.elapsed_ms();
        if elapsed_ms > self.threshold_ms {
            tracing::trace!("[PERF] {}: {:.2}ms", self.name, elapsed_ms);
        }
    }
}
