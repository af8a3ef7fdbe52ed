//! Runtime configuration

use std::time::Duration;

/// Runtime configuration
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    /// Maximum delta time clamp (prevents runaway steps after a stall)
    pub max_delta: Duration,
    /// Frame composition time above which a warning is logged
    pub frame_budget: Duration,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            max_delta: Duration::from_millis(100),
            frame_budget: Duration::from_micros(4000), // 4ms at 60fps
        }
    }
}
