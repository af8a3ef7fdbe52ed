//! End-to-end properties of composed scenes

use glam::Vec3;
use railscape_core::camera::{desired_view, transform_distance};
use railscape_core::color::{FOLIAGE_RAMP, GROUND_RAMP};
use railscape_core::draw::pack_instances;
use railscape_core::path::path_position;
use railscape_core::{
    CameraAnchor, Composer, MaterialTable, PlacementTable, RecordingRenderer, Runtime,
    SceneConfig, SessionConfig, Stride, Trigger, modulate,
};
use railscape_shared::MeshId;

fn composer() -> Composer {
    Composer::from_config(&SceneConfig::default()).unwrap()
}

// ============================================================================
// Determinism
// ============================================================================

#[test]
fn same_seed_and_time_give_identical_frames() {
    let session = SessionConfig::default();
    for t in [0.0, 1.5, 60.0, 600.25] {
        let a = composer().compose_frame(&session, t, 1.6);
        let b = composer().compose_frame(&session, t, 1.6);
        assert_eq!(a, b, "frames differ at t = {t}");
    }
}

#[test]
fn different_seeds_give_different_landscapes() {
    let mut config = SceneConfig::default();
    let session = SessionConfig::default();
    let a = Composer::from_config(&config).unwrap().compose_frame(&session, 0.0, 1.0);
    config.placement.seed += 1;
    let b = Composer::from_config(&config).unwrap().compose_frame(&session, 0.0, 1.0);

    assert_eq!(a.instructions.len(), b.instructions.len());
    assert_ne!(a.instructions, b.instructions);
}

// ============================================================================
// Bounds
// ============================================================================

#[test]
fn stride_catalog_stays_in_bounds() {
    for len in [1, 2, 3, 10, 99, 100, 101, 750, 1000] {
        for (name, stride) in Stride::CATALOG {
            assert!(stride.in_bounds(len), "{name} overruns a table of {len}");
        }
        for center in Stride::CLOUD_CENTERS.indices(len) {
            assert!(Stride::cloud_puffs(center).in_bounds(len));
        }
    }
}

#[test]
fn small_tables_compose_without_panicking() {
    let config = SceneConfig::default();
    let session = SessionConfig::default();
    for count in [1, 5, 30, 120] {
        let table = PlacementTable::from_seed(3, count).unwrap();
        let composer = Composer::new(
            table,
            config.path_parameters().unwrap(),
            config.train_layout().unwrap(),
        );
        let frame = composer.compose_frame(&session, 2.0, 1.0);
        assert!(!frame.instructions.is_empty());
    }
}

// ============================================================================
// Scene layout
// ============================================================================

#[test]
fn default_frame_instruction_budget() {
    let frame = composer().compose_frame(&SessionConfig::default(), 0.0, 1.0);
    // ground, train, ties, trees, mountains, cacti, clouds, sun
    let expected = 1 + 365 + 43 + 1496 + 52 + 561 + 325 + 2;
    assert_eq!(frame.instructions.len(), expected);
}

#[test]
fn train_starts_at_origin() {
    let train = composer().train_state(1.0, 0.0);
    let locomotive = train.locomotive();
    assert!(locomotive.position.abs_diff_eq(Vec3::new(0.0, -3.0, 0.0), 1e-6));
    assert_eq!(locomotive.heading, 0.0);

    let first = &train.cars[1];
    assert!((first.position.x - 8.8).abs() < 1e-5);
    assert_eq!(train.cars.len(), 6);
}

#[test]
fn train_advances_toward_negative_x() {
    let composer = composer();
    let early = composer.train_state(1.0, 1.0).locomotive().position.x;
    let late = composer.train_state(1.0, 2.0).locomotive().position.x;
    assert!((late - early + 1.1).abs() < 1e-5);
}

#[test]
fn path_is_continuous_across_integer_positions() {
    let params = SceneConfig::default().path_parameters().unwrap();
    let eps = 1e-3_f32;
    for x in -40..40 {
        let x = x as f32;
        let (_, below) = path_position(x - eps, &params, 3.0);
        let (_, above) = path_position(x + eps, &params, 3.0);
        // |dz/dx| <= amplitude * frequency = 0.45
        assert!((above - below).abs() <= 0.45 * 2.0 * eps + 1e-5, "jump at x = {x}");
    }
    let (_, now) = path_position(10.0, &params, 4.0);
    let (_, soon) = path_position(10.0, &params, 4.0 + eps);
    assert!((soon - now).abs() <= 4.5 / 5.0 * eps + 1e-5);
}

#[test]
fn one_locomotive_per_frame() {
    let frame = composer().compose_frame(&SessionConfig::default(), 42.0, 1.0);
    let engines = frame
        .instructions
        .iter()
        .filter(|d| d.mesh == MeshId::Engine)
        .count();
    assert_eq!(engines, 1);
}

// ============================================================================
// Color
// ============================================================================

#[test]
fn color_cycle_has_a_150_second_period() {
    for t in [0.0_f32, 13.0, 77.7] {
        let now = modulate(t, 0.0, &GROUND_RAMP);
        let later = modulate(t + 150.0, 0.0, &GROUND_RAMP);
        assert!(now.max_channel_delta(later) < 1e-3, "t = {t}");

        let leaf = modulate(t, -12.0, &FOLIAGE_RAMP);
        let leaf_later = modulate(t + 150.0, -12.0, &FOLIAGE_RAMP);
        assert!(leaf.max_channel_delta(leaf_later) < 1e-3);
    }
}

// ============================================================================
// Camera
// ============================================================================

#[test]
fn attached_camera_closes_in_without_arriving() {
    let mut runtime = Runtime::from_config(&SceneConfig::default()).unwrap();
    let mut renderer = RecordingRenderer::new();
    runtime.apply(Trigger::Attach(CameraAnchor::TrainFollow));

    // hold time still so the anchor does not move
    let anchors = runtime
        .composer()
        .compose_frame(runtime.session(), 5.0, 1.0)
        .anchors;
    let target = desired_view(anchors.train_follow);

    let mut previous = transform_distance(runtime.rig().view(), target);
    for _ in 0..200 {
        runtime.frame(&mut renderer, 5.0, 0.016, 1.0).unwrap();
        let distance = transform_distance(runtime.rig().view(), target);
        assert!(distance < previous);
        assert!(distance > 0.0);
        previous = distance;
    }
}

#[test]
fn detaching_freezes_the_rig() {
    let mut runtime = Runtime::from_config(&SceneConfig::default()).unwrap();
    let mut renderer = RecordingRenderer::new();
    runtime.apply(Trigger::Attach(CameraAnchor::Cinematic));
    runtime.frame(&mut renderer, 1.0, 0.016, 1.0).unwrap();
    runtime.apply(Trigger::Detach);

    let view = runtime.rig().view();
    for i in 0..10 {
        runtime.frame(&mut renderer, 1.0 + i as f32, 0.016, 1.0).unwrap();
    }
    assert_eq!(runtime.rig().view(), view);
}

// ============================================================================
// Renderer packing
// ============================================================================

#[test]
fn frame_packs_into_one_instance_buffer() {
    let frame = composer().compose_frame(&SessionConfig::default(), 9.0, 1.0);
    let bytes = pack_instances(&frame.instructions, &MaterialTable::new());
    assert_eq!(bytes.len(), frame.instructions.len() * 80);
}
