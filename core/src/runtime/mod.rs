//! Frame driver
//!
//! Owns the composer, the session state and the camera rig, and pushes each
//! composed frame through a [`Renderer`].

use std::time::Instant;

use glam::Mat4;

use crate::camera::CameraRig;
use crate::composer::Composer;
use crate::config::{ControlsConfig, SceneConfig};
use crate::error::{SceneError, ensure_finite};
use crate::material::MaterialTable;
use crate::renderer::Renderer;
use crate::session::{SessionConfig, Trigger};

mod config;


pub use config::RuntimeConfig;

/// What one call to [`Runtime::frame`] did
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameStats {
    /// Draw calls issued
    pub draws: usize,
    /// Delta time after clamping, in seconds
    pub delta: f32,
    /// Whether the camera rig moved the view
    pub camera_updated: bool,
    /// Wall-clock time spent composing and submitting
    pub elapsed: std::time::Duration,
}

/// Scene runtime for a single session
pub struct Runtime {
    composer: Composer,
    session: SessionConfig,
    rig: CameraRig,
    controls: ControlsConfig,
    materials: MaterialTable,
    config: RuntimeConfig,
    frame_count: u64,
}

impl Runtime {
    pub fn new(
        composer: Composer,
        session: SessionConfig,
        rig: CameraRig,
        controls: ControlsConfig,
    ) -> Self {
        Self {
            composer,
            session,
            rig,
            controls,
            materials: MaterialTable::new(),
            config: RuntimeConfig::default(),
            frame_count: 0,
        }
    }

    /// Build every piece from a scene configuration
    pub fn from_config(config: &SceneConfig) -> Result<Self, SceneError> {
        for warning in crate::config::validate_keybindings(&config.controls) {
            tracing::warn!("{warning}");
        }
        Ok(Self::new(
            Composer::from_config(config)?,
            config.session()?,
            config.camera_rig()?,
            config.controls.clone(),
        ))
    }

    pub fn with_runtime_config(mut self, config: RuntimeConfig) -> Self {
        self.config = config;
        self
    }

    pub fn composer(&self) -> &Composer {
        &self.composer
    }

    pub fn session(&self) -> &SessionConfig {
        &self.session
    }

    pub fn rig(&self) -> &CameraRig {
        &self.rig
    }

    pub fn materials(&self) -> &MaterialTable {
        &self.materials
    }

    pub fn config(&self) -> &RuntimeConfig {
        &self.config
    }

    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    pub fn apply(&mut self, trigger: Trigger) {
        self.session.apply(trigger);
    }

    /// Apply the trigger bound to `key`, if any
    pub fn handle_key(&mut self, key: &str) -> Option<Trigger> {
        let trigger = self.controls.trigger_for_key(key)?;
        self.apply(trigger);
        Some(trigger)
    }

    /// Report the view chosen by the host's own camera controller.
    ///
    /// An attached camera starts its approach from this view.
    pub fn sync_view(&mut self, view: Mat4) {
        self.rig.set_view(view);
    }

    /// Clamp a host delta into `[0, max_delta]`. NaN counts as zero.
    pub fn clamp_delta(&self, delta_time: f32) -> f32 {
        let max = self.config.max_delta.as_secs_f32();
        if delta_time.is_nan() {
            0.0
        } else {
            delta_time.clamp(0.0, max)
        }
    }

    /// Compose the frame at `simulation_time` and submit it to `renderer`.
    ///
    /// # Errors
    ///
    /// `SceneError::NonFinite` if `simulation_time` or `aspect` is NaN or
    /// infinite, `SceneError::InvalidAspect` if `aspect` is not positive.
    /// Nothing is submitted in either case.
    pub fn frame(
        &mut self,
        renderer: &mut impl Renderer,
        simulation_time: f32,
        delta_time: f32,
        aspect: f32,
    ) -> Result<FrameStats, SceneError> {
        let t = ensure_finite("simulation_time", simulation_time)?;
        let aspect = ensure_finite("aspect", aspect)?;
        if aspect <= 0.0 {
            return Err(SceneError::InvalidAspect(aspect));
        }
        let start = Instant::now();
        let delta = self.clamp_delta(delta_time);

        let frame = self.composer.compose_frame(&self.session, t, aspect);
        renderer.set_projection(&frame.projection);

        let view = self.rig.update(self.session.attached(), &frame.anchors);
        if let Some(view) = view {
            renderer.set_camera(view);
        }

        for instruction in &frame.instructions {
            let material = self.materials.get(instruction.material);
            match instruction.color {
                Some(color) => renderer.draw(
                    instruction.mesh,
                    &instruction.transform,
                    instruction.material,
                    &material.tinted(color),
                ),
                None => renderer.draw(
                    instruction.mesh,
                    &instruction.transform,
                    instruction.material,
                    material,
                ),
            }
        }

        let elapsed = start.elapsed();
        if elapsed > self.config.frame_budget {
            tracing::warn!(
                "Frame took {:?}, exceeds budget of {:?}",
                elapsed,
                self.config.frame_budget
            );
        }
        self.frame_count += 1;

        Ok(FrameStats {
            draws: frame.instructions.len(),
            delta,
            camera_updated: view.is_some(),
            elapsed,
        })
    }
}
