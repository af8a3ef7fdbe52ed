//! Frame composition
//!
//! `compose_frame` is a pure function of the composer's fixed inputs, the
//! session state and simulation time: the same arguments always produce the
//! same instructions in the same order.

use crate::camera::{AnchorSet, Projection, cinematic_anchor};
use crate::config::SceneConfig;
use crate::draw::{DrawInstruction, DrawList};
use crate::error::SceneError;
use crate::path::{PathParameters, TrainLayout, TrainState};
use crate::placement::PlacementTable;
use crate::rules;
use crate::session::SessionConfig;

/// Typical instruction count for the default scene
const FRAME_CAPACITY: usize = 3072;

/// Everything one frame hands to the renderer
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    pub instructions: Vec<DrawInstruction>,
    pub anchors: AnchorSet,
    pub projection: Projection,
}

/// Session-constant scene inputs
#[derive(Debug, Clone, PartialEq)]
pub struct Composer {
    table: PlacementTable,
    path: PathParameters,
    layout: TrainLayout,
}

impl Composer {
    pub fn new(table: PlacementTable, path: PathParameters, layout: TrainLayout) -> Self {
        Self {
            table,
            path,
            layout,
        }
    }

    /// Generate the placement table and validate parameters from `config`
    pub fn from_config(config: &SceneConfig) -> Result<Self, SceneError> {
        let table = PlacementTable::from_seed(config.placement.seed, config.placement.count)?;
        let path = config.path_parameters()?;
        let layout = config.train_layout()?;
        tracing::info!(
            seed = config.placement.seed,
            entries = table.len(),
            cars = layout.cars(),
            "scene composer ready"
        );
        Ok(Self::new(table, path, layout))
    }

    pub fn table(&self) -> &PlacementTable {
        &self.table
    }

    pub fn path(&self) -> &PathParameters {
        &self.path
    }

    pub fn layout(&self) -> &TrainLayout {
        &self.layout
    }

    pub fn train_state(&self, speed: f32, t: f32) -> TrainState {
        TrainState::compute(&self.layout, &self.path, speed, t)
    }

    /// Build every draw instruction and camera anchor for time `t`
    pub fn compose_frame(&self, session: &SessionConfig, t: f32, aspect: f32) -> Frame {
        let train = self.train_state(session.speed(), t);
        let mut list = DrawList::with_capacity(FRAME_CAPACITY);

        rules::draw_ground(&mut list, t);
        let locomotive = rules::draw_train(&mut list, &train, t);
        rules::draw_rail_ties(&mut list, &train, &self.path, t);
        rules::draw_trees(&mut list, &self.table, t);
        rules::draw_mountain_range(&mut list, &self.table);
        rules::draw_cacti(&mut list, &self.table);
        rules::draw_clouds(&mut list, &self.table);
        rules::draw_sun(&mut list);

        let anchors = AnchorSet {
            train_follow: locomotive.train_follow,
            engine_interior: locomotive.engine_interior,
            cinematic: cinematic_anchor(train.middle().transform(), t),
        };

        tracing::trace!(t, instructions = list.len(), "frame composed");
        Frame {
            instructions: list.into_vec(),
            anchors,
            projection: Projection::new(session.field_of_view(), aspect),
        }
    }
}

#[cfg(test)]
mod tests {
    use railscape_shared::MeshId;

    use super::*;
    use crate::session::Trigger;

    fn composer() -> Composer {
        Composer::from_config(&SceneConfig::default()).unwrap()
    }

    #[test]
    fn test_compose_is_deterministic() {
        let composer = composer();
        let session = SessionConfig::default();
        let a = composer.compose_frame(&session, 17.25, 1.5);
        let b = composer.compose_frame(&session, 17.25, 1.5);
        assert_eq!(a, b);
    }

    #[test]
    fn test_same_seed_same_scene() {
        let session = SessionConfig::default();
        let a = composer().compose_frame(&session, 3.0, 1.0);
        let b = composer().compose_frame(&session, 3.0, 1.0);
        assert_eq!(a.instructions, b.instructions);
    }

    #[test]
    fn test_frame_starts_with_ground_and_train() {
        let frame = composer().compose_frame(&SessionConfig::default(), 0.0, 1.0);
        assert_eq!(frame.instructions[0].mesh, MeshId::Plane);
        assert_eq!(frame.instructions[1].mesh, MeshId::Cube);
        assert_eq!(
            frame
                .instructions
                .iter()
                .filter(|d| d.mesh == MeshId::Engine)
                .count(),
            1
        );
    }

    #[test]
    fn test_speed_moves_the_train() {
        let composer = composer();
        let mut session = SessionConfig::default();
        let slow = composer.train_state(session.speed(), 10.0);
        session.apply(Trigger::SpeedUp);
        let fast = composer.train_state(session.speed(), 10.0);
        assert!(fast.locomotive().position.x < slow.locomotive().position.x);
    }

    #[test]
    fn test_projection_follows_session() {
        let composer = composer();
        let mut session = SessionConfig::default();
        session.apply(Trigger::ZoomIn);
        let frame = composer.compose_frame(&session, 0.0, 2.0);
        assert_eq!(frame.projection.fov, session.field_of_view());
        assert_eq!(frame.projection.aspect, 2.0);
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let mut config = SceneConfig::default();
        config.placement.count = 0;
        assert!(matches!(
            Composer::from_config(&config),
            Err(SceneError::InvalidPlacementCount(0))
        ));

        let mut config = SceneConfig::default();
        config.train.cars = 0;
        assert!(matches!(
            Composer::from_config(&config),
            Err(SceneError::InvalidCarCount(0))
        ));
    }
}
