//! Camera attachment resolver
//!
//! While detached the host's own controller owns the view and the rig stays
//! silent. While attached, every frame moves the view a fixed fraction of
//! the way toward a standoff point behind the chosen anchor. The approach is
//! exponential: it never overshoots and never lands exactly.

use std::f32::consts::TAU;
use std::fmt;
use std::str::FromStr;

use glam::{Mat4, Vec3};
use railscape_shared::constants::{ANCHOR_STANDOFF, CAMERA_SMOOTHING, FAR_PLANE, NEAR_PLANE};
use serde::{Deserialize, Serialize};

use crate::error::{ParseNameError, SceneError};


/// Eye position of the initial, detached view
pub const INITIAL_EYE: Vec3 = Vec3::new(0.0, 10.0, 20.0);

/// Seconds per orbit of the cinematic anchor
const CINEMATIC_ORBIT: f32 = 40.0;

/// Named viewpoint the camera can follow
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CameraAnchor {
    /// Above and beside the locomotive
    TrainFollow,
    /// Inside the cab
    EngineInterior,
    /// Slow orbit around the middle of the train
    Cinematic,
}

impl CameraAnchor {
    pub const ALL: [CameraAnchor; 3] = [
        CameraAnchor::TrainFollow,
        CameraAnchor::EngineInterior,
        CameraAnchor::Cinematic,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            CameraAnchor::TrainFollow => "train_follow",
            CameraAnchor::EngineInterior => "engine_interior",
            CameraAnchor::Cinematic => "cinematic",
        }
    }
}

impl fmt::Display for CameraAnchor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for CameraAnchor {
    type Err = ParseNameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.replace('-', "_");
        CameraAnchor::ALL
            .into_iter()
            .find(|a| a.name().eq_ignore_ascii_case(&normalized))
            .ok_or_else(|| ParseNameError {
                kind: "camera anchor",
                value: s.to_string(),
                expected: "train_follow, engine_interior, cinematic",
            })
    }
}

/// World transform of every anchor for one frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnchorSet {
    pub train_follow: Mat4,
    pub engine_interior: Mat4,
    pub cinematic: Mat4,
}

impl AnchorSet {
    pub fn get(&self, anchor: CameraAnchor) -> Mat4 {
        match anchor {
            CameraAnchor::TrainFollow => self.train_follow,
            CameraAnchor::EngineInterior => self.engine_interior,
            CameraAnchor::Cinematic => self.cinematic,
        }
    }
}

/// Orbit anchor: circles `center` once every 40 seconds, raised and pulled back
pub fn cinematic_anchor(center: Mat4, t: f32) -> Mat4 {
    center
        * Mat4::from_rotation_y(TAU * t / CINEMATIC_ORBIT)
        * Mat4::from_translation(Vec3::new(0.0, 8.0, 35.0))
        * Mat4::from_rotation_x(-0.2)
}

/// Perspective projection parameters
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projection {
    /// Vertical field of view in radians
    pub fov: f32,
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
}

impl Projection {
    pub fn new(fov: f32, aspect: f32) -> Self {
        Self {
            fov,
            aspect,
            near: NEAR_PLANE,
            far: FAR_PLANE,
        }
    }

    pub fn matrix(&self) -> Mat4 {
        Mat4::perspective_rh_gl(self.fov, self.aspect, self.near, self.far)
    }
}

/// View a camera attached to `anchor` is pulled toward
pub fn desired_view(anchor: Mat4) -> Mat4 {
    (anchor * Mat4::from_translation(Vec3::new(0.0, 0.0, ANCHOR_STANDOFF))).inverse()
}

/// Element-wise blend keeping `smoothing` of the current view
pub fn blend(current: Mat4, desired: Mat4, smoothing: f32) -> Mat4 {
    desired + (current - desired) * smoothing
}

/// Largest element-wise difference between two matrices
pub fn transform_distance(a: Mat4, b: Mat4) -> f32 {
    (a - b)
        .to_cols_array()
        .iter()
        .fold(0.0_f32, |max, v| max.max(v.abs()))
}

/// Smoothed view matrix following an optional anchor
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraRig {
    view: Mat4,
    smoothing: f32,
}

impl Default for CameraRig {
    fn default() -> Self {
        Self {
            view: Self::initial_view(),
            smoothing: CAMERA_SMOOTHING,
        }
    }
}

impl CameraRig {
    /// Build a rig with a custom retention factor.
    ///
    /// # Errors
    ///
    /// `SceneError::InvalidSmoothing` unless `0 <= smoothing < 1`.
    pub fn new(smoothing: f32) -> Result<Self, SceneError> {
        if !(0.0..1.0).contains(&smoothing) {
            return Err(SceneError::InvalidSmoothing(smoothing));
        }
        Ok(Self {
            view: Self::initial_view(),
            smoothing,
        })
    }

    /// Looking at the origin from above and in front of the track
    pub fn initial_view() -> Mat4 {
        Mat4::look_at_rh(INITIAL_EYE, Vec3::ZERO, Vec3::Y)
    }

    pub fn view(&self) -> Mat4 {
        self.view
    }

    pub fn smoothing(&self) -> f32 {
        self.smoothing
    }

    /// Adopt a view set by the external controller
    pub fn set_view(&mut self, view: Mat4) {
        self.view = view;
    }

    /// Advance one frame. Returns the new view while attached, `None` while free.
    pub fn update(&mut self, attached: Option<CameraAnchor>, anchors: &AnchorSet) -> Option<Mat4> {
        let anchor = attached?;
        let desired = desired_view(anchors.get(anchor));
        self.view = blend(self.view, desired, self.smoothing);
        Some(self.view)
    }
}
