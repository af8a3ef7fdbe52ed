//! Error types for scene construction and configuration
//!
//! Frame composition itself is infallible. Everything that can go wrong is
//! caught while building the composer from its parameters.

use std::path::PathBuf;

/// Construction-time validation failure
#[derive(Debug, thiserror::Error)]
pub enum SceneError {
    /// Placement table must hold at least one entry
    #[error("placement table length must be positive, got {0}")]
    InvalidPlacementCount(usize),

    /// A zero path frequency collapses the track to a line and the heading to 0/0
    #[error("path frequency must be non-zero")]
    ZeroFrequency,

    /// A numeric parameter was NaN or infinite
    #[error("{field} must be finite, got {value}")]
    NonFinite { field: &'static str, value: f32 },

    /// The train needs at least its locomotive
    #[error("train must have at least one car, got {0}")]
    InvalidCarCount(usize),

    /// Camera smoothing must lie in [0, 1)
    #[error("camera smoothing must be in [0, 1), got {0}")]
    InvalidSmoothing(f32),

    /// A session step or clamp is out of range
    #[error("{field} {requirement}, got {value}")]
    InvalidSessionLimit {
        field: &'static str,
        requirement: &'static str,
        value: f32,
    },

    /// Viewport aspect ratio must be positive
    #[error("aspect ratio must be positive, got {0}")]
    InvalidAspect(f32),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Failure loading or saving a scene configuration file
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to access config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// A name that does not match any known variant
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {kind} {value:?} (expected one of: {expected})")]
pub struct ParseNameError {
    pub kind: &'static str,
    pub value: String,
    pub expected: &'static str,
}

/// Reject NaN and infinities for a named parameter
pub(crate) fn ensure_finite(field: &'static str, value: f32) -> Result<f32, SceneError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(SceneError::NonFinite { field, value })
    }
}
