//! Railscape Core - procedural scene composer
//!
//! Builds every frame of a train crossing a generated landscape as a pure
//! function of simulation time. The crate never talks to a GPU: frames are
//! plain lists of draw instructions handed to a host [`Renderer`].
//!
//! # Architecture
//!
//! - [`PlacementTable`] - seeded offsets/scales partitioned by [`Stride`] walks
//! - [`path`] - sinusoidal track and per-car poses
//! - [`rules`] - transform composition for every object in the scene
//! - [`color`] - time-varying ground and foliage tint
//! - [`CameraRig`] - smoothed camera attachment to moving anchors
//! - [`Composer`] - assembles one [`Frame`]
//! - [`Runtime`] - drives frames through a [`Renderer`]

pub mod camera;
pub mod color;
pub mod composer;
pub mod config;
pub mod draw;
pub mod error;
pub mod material;
pub mod path;
pub mod placement;
pub mod renderer;
pub mod rules;
pub mod runtime;
pub mod session;

pub use camera::{AnchorSet, CameraAnchor, CameraRig, Projection};
pub use color::{ColorRamp, modulate};
pub use composer::{Composer, Frame};
pub use config::SceneConfig;
pub use draw::{DrawInstruction, DrawList, DrawRecord, InstanceData};
pub use error::{ConfigError, ParseNameError, SceneError};
pub use material::{Material, MaterialTable, ShaderVariant};
pub use path::{PathParameters, TrainLayout, TrainState};
pub use placement::{PlacementTable, RandomSource, SeededRandom, Stride};
pub use renderer::{RecordingRenderer, Renderer};
pub use runtime::{FrameStats, Runtime, RuntimeConfig};
pub use session::{SessionConfig, SessionLimits, Trigger};
