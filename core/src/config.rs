//! Scene configuration (`railscape.toml`)
//!
//! Every field has a default, so a partial or empty file is valid. Values
//! are validated when the composer and camera rig are built from them.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use railscape_shared::constants::{
    BASE_TRAIN_SPEED, CAMERA_SMOOTHING, CAR_SPACING, DEFAULT_CAR_COUNT, DEFAULT_FOV,
    PLACEMENT_TABLE_LEN,
};
use serde::{Deserialize, Serialize};

use crate::camera::{CameraAnchor, CameraRig};
use crate::error::{ConfigError, SceneError, ensure_finite};
use crate::path::{PathParameters, TrainLayout};
use crate::session::{SessionConfig, SessionLimits, Trigger};

/// File name inside [`config_dir`]
pub const CONFIG_FILE: &str = "railscape.toml";

/// Scene configuration, one struct per TOML section
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct SceneConfig {
    #[serde(default)]
    pub placement: PlacementConfig,
    #[serde(default)]
    pub path: PathConfig,
    #[serde(default)]
    pub train: TrainConfig,
    #[serde(default)]
    pub camera: CameraConfig,
    #[serde(default)]
    pub controls: ControlsConfig,
}

/// Placement table generation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlacementConfig {
    /// RNG seed (default: 2021)
    #[serde(default = "default_seed")]
    pub seed: u64,
    /// Entries per sequence (default: 750)
    #[serde(default = "default_count")]
    pub count: usize,
}

/// Track shape
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PathConfig {
    #[serde(default = "default_amplitude")]
    pub amplitude: f32,
    /// Must be non-zero
    #[serde(default = "default_frequency")]
    pub frequency: f32,
    #[serde(default)]
    pub phase: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainConfig {
    /// Locomotive included (default: 6)
    #[serde(default = "default_cars")]
    pub cars: usize,
    #[serde(default = "default_spacing")]
    pub spacing: f32,
    #[serde(default = "default_base_speed")]
    pub base_speed: f32,
    /// Speed multiplier change per trigger (default: 0.25)
    #[serde(default = "default_speed_step")]
    pub speed_step: f32,
    #[serde(default = "default_max_speed")]
    pub max_speed: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CameraConfig {
    /// Fraction of the remaining error kept each frame, in [0, 1)
    #[serde(default = "default_smoothing")]
    pub smoothing: f32,
    /// Initial vertical field of view in radians
    #[serde(default = "default_fov")]
    pub fov: f32,
    #[serde(default = "default_zoom_step")]
    pub zoom_step: f32,
    #[serde(default = "default_min_fov")]
    pub min_fov: f32,
    #[serde(default = "default_max_fov")]
    pub max_fov: f32,
}

/// Key names bound to each trigger. Matching is case-insensitive.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ControlsConfig {
    #[serde(default = "default_speed_up")]
    pub speed_up: String,
    #[serde(default = "default_speed_down")]
    pub speed_down: String,
    #[serde(default = "default_zoom_in")]
    pub zoom_in: String,
    #[serde(default = "default_zoom_out")]
    pub zoom_out: String,
    #[serde(default = "default_attach_follow")]
    pub attach_follow: String,
    #[serde(default = "default_attach_interior")]
    pub attach_interior: String,
    #[serde(default = "default_attach_cinematic")]
    pub attach_cinematic: String,
    #[serde(default = "default_detach")]
    pub detach: String,
}

fn default_seed() -> u64 {
    2021
}
fn default_count() -> usize {
    PLACEMENT_TABLE_LEN
}

fn default_amplitude() -> f32 {
    4.5
}
fn default_frequency() -> f32 {
    0.1
}

fn default_cars() -> usize {
    DEFAULT_CAR_COUNT
}
fn default_spacing() -> f32 {
    CAR_SPACING
}
fn default_base_speed() -> f32 {
    BASE_TRAIN_SPEED
}
fn default_speed_step() -> f32 {
    SessionLimits::default().speed_step
}
fn default_max_speed() -> f32 {
    SessionLimits::default().max_speed
}

fn default_smoothing() -> f32 {
    CAMERA_SMOOTHING
}
fn default_fov() -> f32 {
    DEFAULT_FOV
}
fn default_zoom_step() -> f32 {
    SessionLimits::default().zoom_step
}
fn default_min_fov() -> f32 {
    SessionLimits::default().min_fov
}
fn default_max_fov() -> f32 {
    SessionLimits::default().max_fov
}

fn default_speed_up() -> String {
    "]".to_string()
}
fn default_speed_down() -> String {
    "[".to_string()
}
fn default_zoom_in() -> String {
    "=".to_string()
}
fn default_zoom_out() -> String {
    "-".to_string()
}
fn default_attach_follow() -> String {
    "1".to_string()
}
fn default_attach_interior() -> String {
    "2".to_string()
}
fn default_attach_cinematic() -> String {
    "3".to_string()
}
fn default_detach() -> String {
    "0".to_string()
}

impl Default for PlacementConfig {
    fn default() -> Self {
        Self {
            seed: default_seed(),
            count: default_count(),
        }
    }
}

impl Default for PathConfig {
    fn default() -> Self {
        Self {
            amplitude: default_amplitude(),
            frequency: default_frequency(),
            phase: 0.0,
        }
    }
}

impl Default for TrainConfig {
    fn default() -> Self {
        Self {
            cars: default_cars(),
            spacing: default_spacing(),
            base_speed: default_base_speed(),
            speed_step: default_speed_step(),
            max_speed: default_max_speed(),
        }
    }
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            smoothing: default_smoothing(),
            fov: default_fov(),
            zoom_step: default_zoom_step(),
            min_fov: default_min_fov(),
            max_fov: default_max_fov(),
        }
    }
}

impl Default for ControlsConfig {
    fn default() -> Self {
        Self {
            speed_up: default_speed_up(),
            speed_down: default_speed_down(),
            zoom_in: default_zoom_in(),
            zoom_out: default_zoom_out(),
            attach_follow: default_attach_follow(),
            attach_interior: default_attach_interior(),
            attach_cinematic: default_attach_cinematic(),
            detach: default_detach(),
        }
    }
}

impl ControlsConfig {
    /// Every binding with its trigger, in declaration order
    pub fn bindings(&self) -> [(&str, Trigger); 8] {
        [
            (self.speed_up.as_str(), Trigger::SpeedUp),
            (self.speed_down.as_str(), Trigger::SpeedDown),
            (self.zoom_in.as_str(), Trigger::ZoomIn),
            (self.zoom_out.as_str(), Trigger::ZoomOut),
            (self.attach_follow.as_str(), Trigger::Attach(CameraAnchor::TrainFollow)),
            (self.attach_interior.as_str(), Trigger::Attach(CameraAnchor::EngineInterior)),
            (self.attach_cinematic.as_str(), Trigger::Attach(CameraAnchor::Cinematic)),
            (self.detach.as_str(), Trigger::Detach),
        ]
    }

    /// Trigger bound to `key`, if any. The first matching binding wins.
    pub fn trigger_for_key(&self, key: &str) -> Option<Trigger> {
        self.bindings()
            .into_iter()
            .find(|(bound, _)| bound.eq_ignore_ascii_case(key))
            .map(|(_, trigger)| trigger)
    }
}

impl SceneConfig {
    pub fn path_parameters(&self) -> Result<PathParameters, SceneError> {
        PathParameters::new(self.path.amplitude, self.path.frequency, self.path.phase)
    }

    pub fn train_layout(&self) -> Result<TrainLayout, SceneError> {
        TrainLayout::new(self.train.cars, self.train.spacing, self.train.base_speed)
    }

    pub fn session_limits(&self) -> Result<SessionLimits, SceneError> {
        SessionLimits::new(
            self.train.speed_step,
            self.train.max_speed,
            self.camera.zoom_step,
            self.camera.min_fov,
            self.camera.max_fov,
        )
    }

    /// Session state at startup, with this config's limits and field of view
    pub fn session(&self) -> Result<SessionConfig, SceneError> {
        let fov = ensure_finite("camera.fov", self.camera.fov)?;
        Ok(SessionConfig::new(self.session_limits()?, fov))
    }

    pub fn camera_rig(&self) -> Result<CameraRig, SceneError> {
        CameraRig::new(self.camera.smoothing)
    }
}

/// Returns the platform-specific configuration directory.
///
/// On Linux: `~/.config/railscape`
///
/// Returns `None` if the home directory cannot be determined.
pub fn config_dir() -> Option<PathBuf> {
    directories::ProjectDirs::from("org", "railscape", "railscape")
        .map(|dirs| dirs.config_dir().to_path_buf())
}

/// Loads the configuration from the config directory.
///
/// Returns default values if the file doesn't exist or cannot be parsed.
pub fn load() -> SceneConfig {
    let Some(path) = config_dir().map(|dir| dir.join(CONFIG_FILE)) else {
        return SceneConfig::default();
    };
    match load_from(&path) {
        Ok(config) => {
            tracing::info!(path = %path.display(), "loaded scene config");
            config
        }
        Err(err) => {
            tracing::debug!(%err, "using default scene config");
            SceneConfig::default()
        }
    }
}

/// Loads the configuration from an explicit file.
///
/// # Errors
///
/// Returns `ConfigError::Io` if the file cannot be read and
/// `ConfigError::Parse` if it is not valid TOML for [`SceneConfig`].
pub fn load_from(path: &Path) -> Result<SceneConfig, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    toml::from_str(&content).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Writes the configuration, creating parent directories as needed.
pub fn save_to(config: &SceneConfig, path: &Path) -> Result<(), ConfigError> {
    let io_err = |source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    };
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(io_err)?;
    }
    let content = toml::to_string_pretty(config)?;
    std::fs::write(path, content).map_err(io_err)?;
    Ok(())
}

/// Validate that no two controls share a key.
///
/// Returns one warning per conflicting binding.
pub fn validate_keybindings(controls: &ControlsConfig) -> Vec<String> {
    let names = [
        "controls.speed_up",
        "controls.speed_down",
        "controls.zoom_in",
        "controls.zoom_out",
        "controls.attach_follow",
        "controls.attach_interior",
        "controls.attach_cinematic",
        "controls.detach",
    ];
    let mut warnings = Vec::new();
    let mut used_keys: HashSet<String> = HashSet::new();

    for ((key, _), name) in controls.bindings().into_iter().zip(names) {
        if !used_keys.insert(key.to_uppercase()) {
            warnings.push(format!("{name} key '{key}' conflicts with another binding"));
        }
    }
    warnings
}

#[cfg(test)]
mod tests {
    use super::*;

    // =============================================================
    // Default value tests
    // =============================================================

    #[test]
    fn test_config_default() {
        let config = SceneConfig::default();
        assert_eq!(config.placement.count, 750);
        assert!((config.path.amplitude - 4.5).abs() < f32::EPSILON);
        assert!((config.path.frequency - 0.1).abs() < f32::EPSILON);
        assert_eq!(config.train.cars, 6);
        assert!((config.camera.smoothing - 0.97).abs() < f32::EPSILON);
        assert_eq!(config.controls.detach, "0");
    }

    #[test]
    fn test_config_default_builds() {
        let config = SceneConfig::default();
        assert!(config.path_parameters().is_ok());
        assert!(config.train_layout().is_ok());
        assert!(config.camera_rig().is_ok());
        assert_eq!(config.session_limits().unwrap(), SessionLimits::default());
    }

    // =============================================================
    // TOML serialization tests
    // =============================================================

    #[test]
    fn test_config_serialize_roundtrip() {
        let mut config = SceneConfig::default();
        config.placement.seed = 99;
        config.path.phase = 1.5;
        config.controls.speed_up = "Up".to_string();

        let toml_str = toml::to_string(&config).unwrap();
        let parsed: SceneConfig = toml::from_str(&toml_str).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_config_deserialize_empty() {
        let config: SceneConfig = toml::from_str("").unwrap();
        assert_eq!(config, SceneConfig::default());
    }

    #[test]
    fn test_config_deserialize_partial_path() {
        let toml_str = r#"
[path]
amplitude = 2.0
"#;
        let config: SceneConfig = toml::from_str(toml_str).unwrap();
        assert!((config.path.amplitude - 2.0).abs() < f32::EPSILON);
        assert!((config.path.frequency - 0.1).abs() < f32::EPSILON); // default
        assert_eq!(config.train, TrainConfig::default());
    }

    #[test]
    fn test_zero_frequency_fails_validation() {
        let config: SceneConfig = toml::from_str("[path]\nfrequency = 0.0\n").unwrap();
        assert!(matches!(
            config.path_parameters(),
            Err(SceneError::ZeroFrequency)
        ));
    }

    #[test]
    fn test_nan_speed_step_fails_validation() {
        let config: SceneConfig = toml::from_str("[train]\nspeed_step = nan\n").unwrap();
        assert!(matches!(
            config.session(),
            Err(SceneError::NonFinite { field: "train.speed_step", .. })
        ));
    }

    #[test]
    fn test_negative_zoom_step_fails_validation() {
        let config: SceneConfig = toml::from_str("[camera]\nzoom_step = -0.5\n").unwrap();
        assert!(matches!(
            config.session_limits(),
            Err(SceneError::InvalidSessionLimit { field: "camera.zoom_step", .. })
        ));
    }

    #[test]
    fn test_inverted_fov_range_fails_validation() {
        let toml_str = r#"
[camera]
min_fov = 2.0
max_fov = 1.0
"#;
        let config: SceneConfig = toml::from_str(toml_str).unwrap();
        assert!(matches!(
            config.session_limits(),
            Err(SceneError::InvalidSessionLimit { field: "camera.min_fov", .. })
        ));
    }

    #[test]
    fn test_negative_max_speed_fails_validation() {
        let config: SceneConfig = toml::from_str("[train]\nmax_speed = -1.0\n").unwrap();
        assert!(matches!(
            config.session_limits(),
            Err(SceneError::InvalidSessionLimit { field: "train.max_speed", .. })
        ));
    }

    #[test]
    fn test_non_finite_fov_fails_validation() {
        let config: SceneConfig = toml::from_str("[camera]\nfov = inf\n").unwrap();
        assert!(matches!(
            config.session(),
            Err(SceneError::NonFinite { field: "camera.fov", .. })
        ));
    }

    // =============================================================
    // Controls
    // =============================================================

    #[test]
    fn test_trigger_for_key() {
        let controls = ControlsConfig::default();
        assert_eq!(controls.trigger_for_key("]"), Some(Trigger::SpeedUp));
        assert_eq!(
            controls.trigger_for_key("3"),
            Some(Trigger::Attach(CameraAnchor::Cinematic))
        );
        assert_eq!(controls.trigger_for_key("0"), Some(Trigger::Detach));
        assert_eq!(controls.trigger_for_key("q"), None);
    }

    #[test]
    fn test_trigger_for_key_ignores_case() {
        let controls = ControlsConfig {
            zoom_in: "PageUp".to_string(),
            ..Default::default()
        };
        assert_eq!(controls.trigger_for_key("pageup"), Some(Trigger::ZoomIn));
    }

    #[test]
    fn test_validate_keybindings() {
        assert!(validate_keybindings(&ControlsConfig::default()).is_empty());

        let controls = ControlsConfig {
            detach: "1".to_string(),
            ..Default::default()
        };
        let warnings = validate_keybindings(&controls);
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].contains("controls.detach"));
    }

    // =============================================================
    // File IO
    // =============================================================

    #[test]
    fn test_save_and_load_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join(CONFIG_FILE);

        let mut config = SceneConfig::default();
        config.train.cars = 3;
        save_to(&config, &path).unwrap();

        let loaded = load_from(&path).unwrap();
        assert_eq!(loaded.train.cars, 3);
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_from(&dir.path().join("absent.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }

    #[test]
    fn test_load_malformed_file_is_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        std::fs::write(&path, "[train]\ncars = \"many\"\n").unwrap();
        let err = load_from(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }
}
