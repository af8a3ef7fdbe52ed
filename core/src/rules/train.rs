//! Locomotive, boxcars and the assembled train

use std::f32::consts::FRAC_PI_2;

use glam::Mat4;
use railscape_shared::{MaterialId, MeshId};

use super::smoke::draw_smokestack;
use super::wheels::{DEFAULT_WHEEL_SPACING, draw_wheel_base};
use super::{rotate_x, rotate_y, rotate_z, scale, translate};
use crate::draw::DrawList;
use crate::path::TrainState;

/// Boxcar body variant, chosen by car index parity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyStyle {
    /// Even index: floor and walls, no roof
    Open,
    /// Odd index: closed box
    Roofed,
}

impl BodyStyle {
    pub fn for_car(index: usize) -> Self {
        if index % 2 == 0 {
            BodyStyle::Open
        } else {
            BodyStyle::Roofed
        }
    }
}

/// Camera anchors published by the locomotive rule
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LocomotiveAnchors {
    /// Inside the cab, facing down the track (-x)
    pub engine_interior: Mat4,
    /// Above and beside the locomotive
    pub train_follow: Mat4,
}

/// Open car body: floor, two long sides and two end walls
pub fn draw_empty_box(list: &mut DrawList, base: Mat4) {
    list.push(MeshId::Cube, MaterialId::Pink, base * scale(4.0, 0.1, 1.0));

    let side = base * translate(0.0, 0.9, -0.9) * rotate_x(FRAC_PI_2) * scale(4.0, 0.1, 1.0);
    list.push(MeshId::Cube, MaterialId::Pink, side);
    list.push(MeshId::Cube, MaterialId::Pink, side * translate(0.0, 18.0, 0.0));

    let end = base * translate(-3.9, 0.9, 0.0) * rotate_z(FRAC_PI_2) * scale(1.0, 0.1, 1.0);
    list.push(MeshId::Cube, MaterialId::Pink, end);
    list.push(MeshId::Cube, MaterialId::Pink, end * translate(0.0, -78.0, 0.0));
}

/// One boxcar. Body style follows `index` parity; wheel placement does not.
pub fn draw_boxcar(list: &mut DrawList, base: Mat4, t: f32, index: usize) {
    match BodyStyle::for_car(index) {
        BodyStyle::Open => {
            let mut m = base * translate(0.0, -0.8, 0.0);
            draw_empty_box(list, m);
            m *= scale(4.0, 1.0, 1.0);
            // under belly
            m *= translate(0.0, -0.25, 0.0) * scale(1.0, 0.2, 0.5);
            list.push(MeshId::Cube, MaterialId::Pink, m);
            m *= translate(0.0, -1.0, 0.0) * scale(1.1, 0.5, 0.5);
            list.push(MeshId::Cube, MaterialId::Pink, m);
        }
        BodyStyle::Roofed => {
            let mut m = base * scale(4.0, 1.0, 1.0) * translate(0.0, 0.1, 0.0);
            list.push(MeshId::Cube, MaterialId::Pink, m);
            // under belly
            m *= translate(0.0, -0.1, 0.0);
            m *= translate(0.0, -0.25, 0.0) * scale(1.0, 1.0, 0.5);
            list.push(MeshId::Cube, MaterialId::Pink, m);
            // links
            m *= translate(0.0, -1.0, 0.0) * scale(1.1, 0.1, 0.5);
            list.push(MeshId::Cube, MaterialId::Pink, m);
        }
    }

    let front = base * translate(-3.5, 0.0, 0.0);
    draw_wheel_base(list, front, t, DEFAULT_WHEEL_SPACING);
    draw_wheel_base(list, front * translate(5.5, 0.0, 0.0), t, DEFAULT_WHEEL_SPACING);
}

/// Locomotive assembly. Returns the camera anchors it carries.
pub fn draw_locomotive(list: &mut DrawList, base: Mat4, t: f32) -> LocomotiveAnchors {
    // cab
    draw_empty_box(list, base * translate(2.75, -0.9, 0.0) * scale(0.35, 0.5, 1.0));
    // links
    list.push(
        MeshId::Cube,
        MaterialId::Pink,
        base * translate(2.75, -1.25, 0.0) * scale(1.75, 0.1, 0.25),
    );
    draw_wheel_base(list, base * translate(2.0, 0.0, 0.0), t, DEFAULT_WHEEL_SPACING);

    let engine = base * translate(-0.5, 0.0, 0.0);
    list.push(
        MeshId::Cube,
        MaterialId::Pink,
        engine * translate(0.0, 0.25, 0.0) * scale(1.0, 1.2, 1.0),
    );
    list.push(
        MeshId::Cube,
        MaterialId::Pink,
        engine * translate(-2.0, -1.0, 0.0) * scale(3.5, 0.2, 1.0),
    );

    let boiler = engine * translate(-2.0, 0.0, 0.0) * rotate_y(FRAC_PI_2) * scale(1.0, 1.0, 5.5);
    list.push(MeshId::Engine, MaterialId::Pink, boiler);
    list.push(
        MeshId::DiscLowPoly,
        MaterialId::Pink,
        boiler * translate(0.0, 0.0, -0.5),
    );

    // chimney
    list.push(
        MeshId::Wheel,
        MaterialId::Pink,
        engine * translate(-4.0, 1.0, 0.0) * rotate_x(FRAC_PI_2) * scale(0.25, 0.25, 1.0),
    );
    // roof
    list.push(
        MeshId::Cube,
        MaterialId::Pink,
        engine * translate(0.0, 1.5, 0.0) * scale(1.2, 0.1, 1.1),
    );

    let drive = engine * translate(-1.0, 1.0, 0.0) * scale(1.5, 1.5, 1.5);
    draw_wheel_base(list, drive, t, 1.0);
    draw_wheel_base(
        list,
        drive * translate(-2.35, -0.5, 0.0) * scale(0.75, 0.75, 1.0),
        t,
        1.0,
    );

    draw_smokestack(list, engine * translate(-4.0, 1.5, 0.0), t);

    LocomotiveAnchors {
        engine_interior: engine * translate(-4.5, 0.9, 0.0) * rotate_y(FRAC_PI_2),
        train_follow: engine * translate(-2.0, 4.0, 10.0) * rotate_x(-0.2),
    }
}

/// Whole train: locomotive at car 0, boxcars after it
pub fn draw_train(list: &mut DrawList, train: &TrainState, t: f32) -> LocomotiveAnchors {
    let anchors = draw_locomotive(list, train.locomotive().transform(), t);
    for car in train.boxcars() {
        draw_boxcar(list, car.transform(), t, car.index);
    }
    anchors
}
