//! Gesture configuration.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Multiplier applied to raw pointer displacement
pub const DAMPING_FACTOR: f64 = 0.65;

/// Damped offset (in pixels) at or above which a drag commits
pub const COMMIT_THRESHOLD_PX: f64 = 200.0;

/// Duration of the snap-back transition when not dragging
pub const TRANSITION_MS: u32 = 100;

/// Tunables for one slidable row
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SlideConfig {
    pub damping: f64,
    pub threshold: f64,
    pub transition_ms: u32,
    /// Re-dispatch a bubbling `mouseup` on the row after a commit
    pub redispatch_release: bool,
}

impl Default for SlideConfig {
    fn default() -> Self {
        Self {
            damping: DAMPING_FACTOR,
            threshold: COMMIT_THRESHOLD_PX,
            transition_ms: TRANSITION_MS,
            redispatch_release: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("damping must be a positive finite number, got {0}")]
    Damping(f64),
    #[error("threshold must be a positive finite number, got {0}")]
    Threshold(f64),
}

impl SlideConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.damping.is_finite() || self.damping <= 0.0 {
            return Err(ConfigError::Damping(self.damping));
        }
        if !self.threshold.is_finite() || self.threshold <= 0.0 {
            return Err(ConfigError::Threshold(self.threshold));
        }
        Ok(())
    }

    /// CSS `transition` value used while the row is at rest
    pub fn rest_transition(&self) -> String {
        format!("all {}ms linear", self.transition_ms)
    }
}
