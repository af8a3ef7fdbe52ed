//! Centralized scene constants.
//!
//! Single source of truth for numbers the composer, its tests and renderer
//! hosts must agree on.

/// Number of entries in each placement table sequence.
pub const PLACEMENT_TABLE_LEN: usize = 750;

/// Inclusive range of placement offsets.
pub const OFFSET_MIN: i32 = -25;
pub const OFFSET_MAX: i32 = 25;

/// Inclusive range of placement scales.
pub const SCALE_MIN: i32 = 10;
pub const SCALE_MAX: i32 = 60;

/// Period, in seconds of simulation time, of the ground/foliage color cycle.
pub const COLOR_PERIOD: f32 = 150.0;

/// Constant phase added to every color modulation.
pub const COLOR_PHASE: f32 = 11.0;

/// Fraction of the remaining camera error kept each frame while attached.
pub const CAMERA_SMOOTHING: f32 = 0.97;

/// Distance behind an anchor the attached camera sits.
pub const ANCHOR_STANDOFF: f32 = 5.0;

/// Default vertical field of view (radians).
pub const DEFAULT_FOV: f32 = std::f32::consts::FRAC_PI_4;

/// Projection clip planes.
pub const NEAR_PLANE: f32 = 0.1;
pub const FAR_PLANE: f32 = 1000.0;

/// Longitudinal distance between consecutive cars.
pub const CAR_SPACING: f32 = 8.8;

/// Track speed at `speed = 1.0`, in world units per second.
pub const BASE_TRAIN_SPEED: f32 = 1.1;

/// Height of every car's base transform.
pub const TRAIN_HEIGHT: f32 = -3.0;

/// Locomotive plus five boxcars.
pub const DEFAULT_CAR_COUNT: usize = 6;

/// Height of the ground plane.
pub const GROUND_HEIGHT: f32 = -5.0;
