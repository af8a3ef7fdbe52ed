//! Externally settable session state and the triggers that mutate it

use std::f32::consts::PI;

use railscape_shared::constants::DEFAULT_FOV;

use crate::camera::CameraAnchor;
use crate::error::{SceneError, ensure_finite};

/// Named user input. The only way to change a [`SessionConfig`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Trigger {
    SpeedUp,
    SpeedDown,
    Attach(CameraAnchor),
    Detach,
    ZoomIn,
    ZoomOut,
}

/// Step sizes and clamps applied by triggers
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SessionLimits {
    pub speed_step: f32,
    pub max_speed: f32,
    /// Radians of field of view per zoom trigger
    pub zoom_step: f32,
    pub min_fov: f32,
    pub max_fov: f32,
}

impl Default for SessionLimits {
    fn default() -> Self {
        Self {
            speed_step: 0.25,
            max_speed: 4.0,
            zoom_step: 0.1,
            min_fov: 0.2,
            max_fov: 1.5,
        }
    }
}

impl SessionLimits {
    /// Validated limits.
    ///
    /// Steps must be positive, `max_speed` non-negative and
    /// `0 < min_fov <= max_fov < π`.
    pub fn new(
        speed_step: f32,
        max_speed: f32,
        zoom_step: f32,
        min_fov: f32,
        max_fov: f32,
    ) -> Result<Self, SceneError> {
        let speed_step = ensure_finite("train.speed_step", speed_step)?;
        let max_speed = ensure_finite("train.max_speed", max_speed)?;
        let zoom_step = ensure_finite("camera.zoom_step", zoom_step)?;
        let min_fov = ensure_finite("camera.min_fov", min_fov)?;
        let max_fov = ensure_finite("camera.max_fov", max_fov)?;

        let invalid = |field: &'static str, requirement: &'static str, value: f32| {
            SceneError::InvalidSessionLimit {
                field,
                requirement,
                value,
            }
        };
        if speed_step <= 0.0 {
            return Err(invalid("train.speed_step", "must be positive", speed_step));
        }
        if max_speed < 0.0 {
            return Err(invalid("train.max_speed", "must not be negative", max_speed));
        }
        if zoom_step <= 0.0 {
            return Err(invalid("camera.zoom_step", "must be positive", zoom_step));
        }
        if min_fov <= 0.0 {
            return Err(invalid("camera.min_fov", "must be positive", min_fov));
        }
        if max_fov >= PI {
            return Err(invalid("camera.max_fov", "must be below pi", max_fov));
        }
        if min_fov > max_fov {
            return Err(invalid("camera.min_fov", "must not exceed camera.max_fov", min_fov));
        }

        Ok(Self {
            speed_step,
            max_speed,
            zoom_step,
            min_fov,
            max_fov,
        })
    }
}

/// Speed multiplier, field of view and camera attachment for the session
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SessionConfig {
    speed: f32,
    field_of_view: f32,
    attached: Option<CameraAnchor>,
    limits: SessionLimits,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self::new(SessionLimits::default(), DEFAULT_FOV)
    }
}

impl SessionConfig {
    /// Normal speed and a detached camera. `field_of_view` is clamped to the limits.
    pub fn new(limits: SessionLimits, field_of_view: f32) -> Self {
        Self {
            speed: 1.0,
            field_of_view: field_of_view.max(limits.min_fov).min(limits.max_fov),
            attached: None,
            limits,
        }
    }

    pub fn speed(&self) -> f32 {
        self.speed
    }

    pub fn field_of_view(&self) -> f32 {
        self.field_of_view
    }

    pub fn attached(&self) -> Option<CameraAnchor> {
        self.attached
    }

    pub fn limits(&self) -> &SessionLimits {
        &self.limits
    }

    pub fn apply(&mut self, trigger: Trigger) {
        let limits = self.limits;
        match trigger {
            Trigger::SpeedUp => {
                self.speed = (self.speed + limits.speed_step).min(limits.max_speed);
            }
            Trigger::SpeedDown => {
                self.speed = (self.speed - limits.speed_step).max(0.0);
            }
            Trigger::ZoomIn => {
                self.field_of_view = (self.field_of_view - limits.zoom_step).max(limits.min_fov);
            }
            Trigger::ZoomOut => {
                self.field_of_view = (self.field_of_view + limits.zoom_step).min(limits.max_fov);
            }
            Trigger::Attach(anchor) => {
                if self.attached != Some(anchor) {
                    tracing::info!(%anchor, "camera attached");
                }
                self.attached = Some(anchor);
            }
            Trigger::Detach => {
                if let Some(anchor) = self.attached.take() {
                    tracing::info!(%anchor, "camera detached");
                }
            }
        }
        tracing::trace!(?trigger, speed = self.speed, fov = self.field_of_view, "trigger applied");
    }
}
