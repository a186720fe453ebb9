//! Opt-in wall-clock timing, enabled with `NARWHAL_TIMING=1` (or `true`).

use std::sync::OnceLock;
use std::time::Instant;

pub(crate) fn enabled() -> bool {
    static ENABLED: OnceLock<bool> = OnceLock::new();
    *ENABLED.get_or_init(|| match std::env::var("NARWHAL_TIMING").as_deref() {
        Ok("1") => true,
        Ok(v) => v.eq_ignore_ascii_case("true"),
        Err(_) => false,
    })
}

/// Logs the elapsed time of a scope at debug level when timing is enabled.
pub(crate) struct Timer {
    label: &'static str,
    start: Option<Instant>,
}

impl Timer {
    pub(crate) fn start(label: &'static str) -> Self {
        Self {
            label,
            start: enabled().then(Instant::now),
        }
    }
}

impl Drop for Timer {
    fn drop(&mut self) {
        if let Some(start) = self.start {
            tracing::debug!(
                algorithm = self.label,
                elapsed_us = start.elapsed().as_micros() as u64,
                "timing"
            );
        }
    }
}
