//! Track path and train layout
//!
//! The track is a sine wave in the XZ plane that slowly travels with time.
//! Cars are laid out at fixed longitudinal spacing along it.

use glam::{Mat4, Vec3};
use railscape_shared::constants::{BASE_TRAIN_SPEED, CAR_SPACING, DEFAULT_CAR_COUNT, TRAIN_HEIGHT};

use crate::error::{SceneError, ensure_finite};

/// Sinusoidal track parameters, fixed for a session
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PathParameters {
    amplitude: f32,
    frequency: f32,
    phase: f32,
}

impl PathParameters {
    /// Validate and build path parameters
    ///
    /// # Errors
    ///
    /// Returns `SceneError::NonFinite` for NaN/infinite inputs and
    /// `SceneError::ZeroFrequency` when `frequency == 0`.
    pub fn new(amplitude: f32, frequency: f32, phase: f32) -> Result<Self, SceneError> {
        let amplitude = ensure_finite("path.amplitude", amplitude)?;
        let frequency = ensure_finite("path.frequency", frequency)?;
        let phase = ensure_finite("path.phase", phase)?;
        if frequency == 0.0 {
            return Err(SceneError::ZeroFrequency);
        }
        Ok(Self {
            amplitude,
            frequency,
            phase,
        })
    }

    pub fn amplitude(&self) -> f32 {
        self.amplitude
    }

    pub fn frequency(&self) -> f32 {
        self.frequency
    }

    pub fn phase(&self) -> f32 {
        self.phase
    }

    /// Lateral offset of the track at longitudinal position `x`
    #[inline]
    pub fn lateral(&self, x: f32, t: f32) -> f32 {
        self.amplitude * (self.frequency * x + self.phase + t / 5.0).sin()
    }
}

/// Track position `(x, z)` at longitudinal position `x` and time `t`
pub fn path_position(x: f32, params: &PathParameters, t: f32) -> (f32, f32) {
    (x, params.lateral(x, t))
}

/// Heading (radians) of the track at `x`.
///
/// Forward difference over one world unit, not the analytic derivative:
/// `atan2(z(x + 1) - z(x), 1)`.
pub fn tangent_heading(x: f32, params: &PathParameters, t: f32) -> f32 {
    let dz = params.lateral(x + 1.0, t) - params.lateral(x, t);
    dz.atan2(1.0)
}

/// How cars are strung along the track
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrainLayout {
    cars: usize,
    spacing: f32,
    base_speed: f32,
}

impl Default for TrainLayout {
    fn default() -> Self {
        Self {
            cars: DEFAULT_CAR_COUNT,
            spacing: CAR_SPACING,
            base_speed: BASE_TRAIN_SPEED,
        }
    }
}

impl TrainLayout {
    pub fn new(cars: usize, spacing: f32, base_speed: f32) -> Result<Self, SceneError> {
        if cars == 0 {
            return Err(SceneError::InvalidCarCount(cars));
        }
        Ok(Self {
            cars,
            spacing: ensure_finite("train.spacing", spacing)?,
            base_speed: ensure_finite("train.base_speed", base_speed)?,
        })
    }

    pub fn cars(&self) -> usize {
        self.cars
    }

    pub fn spacing(&self) -> f32 {
        self.spacing
    }

    pub fn base_speed(&self) -> f32 {
        self.base_speed
    }

    /// Longitudinal position of the locomotive. The train runs toward -x.
    pub fn lead_x(&self, speed: f32, t: f32) -> f32 {
        -self.base_speed * speed * t
    }
}

/// Pose of one car for the current frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CarPose {
    pub index: usize,
    pub position: Vec3,
    /// Yaw relative to +x, radians
    pub heading: f32,
}

impl CarPose {
    pub fn is_locomotive(&self) -> bool {
        self.index == 0
    }

    /// Car base transform: translate onto the track, then yaw to the heading
    pub fn transform(&self) -> Mat4 {
        Mat4::from_translation(self.position) * Mat4::from_rotation_y(-self.heading)
    }
}

/// Every car's pose for one frame
#[derive(Debug, Clone, PartialEq)]
pub struct TrainState {
    pub cars: Vec<CarPose>,
}

impl TrainState {
    /// Lay the train out on the track at time `t`.
    ///
    /// The locomotive defines the train's reference frame and keeps a zero
    /// heading; boxcars yaw to the track tangent under them. On curved track
    /// the locomotive crabs: it follows the lateral offset without turning,
    /// and so do the camera anchors mounted on it.
    pub fn compute(layout: &TrainLayout, params: &PathParameters, speed: f32, t: f32) -> Self {
        let lead = layout.lead_x(speed, t);
        let cars = (0..layout.cars)
            .map(|index| {
                let (x, z) = path_position(lead + layout.spacing * index as f32, params, t);
                let heading = if index == 0 {
                    0.0
                } else {
                    tangent_heading(x, params, t)
                };
                CarPose {
                    index,
                    position: Vec3::new(x, TRAIN_HEIGHT, z),
                    heading,
                }
            })
            .collect();
        Self { cars }
    }

    pub fn locomotive(&self) -> &CarPose {
        &self.cars[0]
    }

    pub fn boxcars(&self) -> &[CarPose] {
        &self.cars[1..]
    }

    /// Car nearest the middle of the train
    pub fn middle(&self) -> &CarPose {
        &self.cars[self.cars.len() / 2]
    }

    pub fn last(&self) -> &CarPose {
        &self.cars[self.cars.len() - 1]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params() -> PathParameters {
        PathParameters::new(4.5, 0.1, 0.0).unwrap()
    }

    #[test]
    fn test_rejects_zero_frequency() {
        assert!(matches!(
            PathParameters::new(1.0, 0.0, 0.0),
            Err(SceneError::ZeroFrequency)
        ));
    }

    #[test]
    fn test_rejects_non_finite() {
        assert!(matches!(
            PathParameters::new(f32::NAN, 0.1, 0.0),
            Err(SceneError::NonFinite { field: "path.amplitude", .. })
        ));
        assert!(PathParameters::new(1.0, 0.1, f32::INFINITY).is_err());
    }

    #[test]
    fn test_origin_at_time_zero() {
        let (x, z) = path_position(0.0, &params(), 0.0);
        assert_eq!(x, 0.0);
        assert_eq!(z, 0.0);
    }

    #[test]
    fn test_lateral_formula() {
        let p = PathParameters::new(2.0, 0.5, 0.25).unwrap();
        let (x, t) = (3.0_f32, 10.0_f32);
        let expected = 2.0 * (0.5 * x + 0.25 + t / 5.0).sin();
        assert_eq!(path_position(x, &p, t).1, expected);
    }

    #[test]
    fn test_heading_is_forward_difference() {
        let p = params();
        let (x, t) = (7.5_f32, 3.0_f32);
        let dz = 4.5 * (0.1 * (x + 1.0) + t / 5.0).sin() - 4.5 * (0.1 * x + t / 5.0).sin();
        assert_eq!(tangent_heading(x, &p, t), dz.atan2(1.0));
    }

    #[test]
    fn test_flat_track_has_zero_heading() {
        let p = PathParameters::new(0.0, 1.0, 0.0).unwrap();
        assert_eq!(tangent_heading(12.0, &p, 4.0), 0.0);
    }

    #[test]
    fn test_train_layout_rejects_empty_train() {
        assert!(matches!(
            TrainLayout::new(0, 8.8, 1.1),
            Err(SceneError::InvalidCarCount(0))
        ));
    }

    #[test]
    fn test_train_state_spacing_and_height() {
        let layout = TrainLayout::default();
        let state = TrainState::compute(&layout, &params(), 1.0, 2.0);
        assert_eq!(state.cars.len(), 6);
        let lead = layout.lead_x(1.0, 2.0);
        for car in &state.cars {
            let expected_x = lead + CAR_SPACING * car.index as f32;
            assert!((car.position.x - expected_x).abs() < 1e-4);
            assert_eq!(car.position.y, TRAIN_HEIGHT);
        }
    }

    #[test]
    fn test_locomotive_keeps_zero_heading() {
        let state = TrainState::compute(&TrainLayout::default(), &params(), 1.0, 17.0);
        assert!(state.locomotive().is_locomotive());
        assert_eq!(state.locomotive().heading, 0.0);
        for car in state.boxcars() {
            let expected = tangent_heading(car.position.x, &params(), 17.0);
            assert_eq!(car.heading, expected);
        }
    }

    #[test]
    fn test_locomotive_crabs_while_track_curves() {
        let layout = TrainLayout::default();
        for &t in &[3.0_f32, 40.0, 95.5] {
            let state = TrainState::compute(&layout, &params(), 1.0, t);
            let engine = state.locomotive();
            assert_ne!(tangent_heading(engine.position.x, &params(), t), 0.0);
            assert_eq!(engine.heading, 0.0);
            let (_, z) = path_position(engine.position.x, &params(), t);
            assert_eq!(engine.position.z, z);
        }
    }

    #[test]
    fn test_train_moves_toward_negative_x() {
        let layout = TrainLayout::default();
        let early = TrainState::compute(&layout, &params(), 1.0, 1.0);
        let late = TrainState::compute(&layout, &params(), 1.0, 2.0);
        assert!(late.locomotive().position.x < early.locomotive().position.x);
    }

    #[test]
    fn test_zero_speed_parks_train() {
        let layout = TrainLayout::default();
        let a = TrainState::compute(&layout, &params(), 0.0, 1.0);
        let b = TrainState::compute(&layout, &params(), 0.0, 50.0);
        assert_eq!(a.locomotive().position.x, b.locomotive().position.x);
    }

    #[test]
    fn test_car_transform_places_origin_on_track() {
        let pose = CarPose {
            index: 2,
            position: Vec3::new(4.0, -3.0, 1.5),
            heading: 0.3,
        };
        let origin = pose.transform().transform_point3(Vec3::ZERO);
        assert!((origin - pose.position).length() < 1e-6);
        // Local +x follows the heading in the XZ plane.
        let forward = pose.transform().transform_vector3(Vec3::X);
        assert!((forward.z - 0.3_f32.sin()).abs() < 1e-6);
    }
}
