//! Ground, trackside decorations and the distant landscape

use std::f32::consts::FRAC_PI_2;

use glam::Mat4;
use railscape_shared::constants::GROUND_HEIGHT;
use railscape_shared::{MaterialId, MeshId};

use super::{rotate_x, rotate_y, scale, translate, uniform_scale};
use crate::color::{FOLIAGE_RAMP, GROUND_RAMP, modulate};
use crate::draw::DrawList;
use crate::path::{PathParameters, TrainState, tangent_heading};
use crate::placement::{PlacementTable, Stride};

const TREE_DEPTH_BIAS: f32 = 29.0;
const MOUNTAIN_DEPTH_BIAS: f32 = 40.0;
const CACTUS_DEPTH_BIAS: f32 = 35.0;
const SMALL_CACTUS: f32 = 0.6;

/// Distance between rail ties along the track
const TIE_INTERVAL: f32 = 2.0;
/// Ties extend this far beyond either end of the train
const TIE_MARGIN: f32 = 20.0;
const TIE_HEIGHT: f32 = GROUND_HEIGHT + 0.05;

/// Ground plane tinted by the sand/grass cycle
pub fn draw_ground(list: &mut DrawList, t: f32) {
    list.push_tinted(
        MeshId::Plane,
        MaterialId::Sand,
        modulate(t, 0.0, &GROUND_RAMP),
        translate(0.0, GROUND_HEIGHT, 0.0) * rotate_x(FRAC_PI_2) * uniform_scale(1000.0),
    );
}

pub fn draw_tree_big(list: &mut DrawList, base: Mat4, t: f32, phase: f32) {
    let crown = base * translate(0.0, -0.5, 0.0) * rotate_x(-FRAC_PI_2) * uniform_scale(3.0);
    list.push_tinted(
        MeshId::Leaves,
        MaterialId::Green,
        modulate(t, phase, &FOLIAGE_RAMP),
        crown,
    );
    list.push(
        MeshId::Trunk,
        MaterialId::Brown,
        crown * translate(0.0, 0.0, -1.5) * scale(0.25, 0.25, 1.0),
    );
}

pub fn draw_tree_small(list: &mut DrawList, base: Mat4, t: f32, phase: f32) {
    let crown = base * translate(0.0, -3.0, 0.0) * rotate_x(-FRAC_PI_2) * uniform_scale(1.5);
    list.push_tinted(
        MeshId::Leaves,
        MaterialId::Green,
        modulate(t, phase, &FOLIAGE_RAMP),
        crown,
    );
    list.push(
        MeshId::Trunk,
        MaterialId::Brown,
        crown * translate(0.0, 0.0, -1.5) * scale(0.15, 0.15, 1.0),
    );
}

/// Both rows of trees. The west row mirrors the east placement through the origin.
pub fn draw_trees(list: &mut DrawList, table: &PlacementTable, t: f32) {
    for (stride, side) in [(Stride::TREES_EAST, 1.0), (Stride::TREES_WEST, -1.0)] {
        for i in table.walk(stride) {
            let base = translate(
                side * 5.0 * table.offset(i),
                0.0,
                side * 2.0 * (table.offset(i + 1) - TREE_DEPTH_BIAS),
            );
            let phase = table.offset(i);
            if i % 4 == 0 {
                draw_tree_small(list, base, t, phase);
            } else {
                draw_tree_big(list, base, t, phase);
            }
        }
    }
}

/// Cone with a snow cap, lifted by `height`
pub fn draw_mountain(list: &mut DrawList, base: Mat4, height: f32) {
    let body = base * translate(0.0, height, 0.0) * rotate_x(-FRAC_PI_2) * scale(40.0, 40.0, 30.0);
    list.push(MeshId::Mountain, MaterialId::Purple, body);
    list.push(
        MeshId::Mountain,
        MaterialId::White,
        body * translate(0.0, 0.0, 0.91) * uniform_scale(0.1),
    );
}

pub fn draw_mountain_range(list: &mut DrawList, table: &PlacementTable) {
    for (stride, side) in [(Stride::MOUNTAINS_EAST, 1.0), (Stride::MOUNTAINS_WEST, -1.0)] {
        for i in table.walk(stride) {
            let base = translate(
                side * 5.0 * table.offset(i),
                0.0,
                side * 2.0 * (table.offset(i + 1) - MOUNTAIN_DEPTH_BIAS),
            );
            draw_mountain(list, base, table.offset(i));
        }
    }
}

/// Trunk and two arms, uniformly shrunk when `small`
pub fn draw_cactus(list: &mut DrawList, base: Mat4, small: bool) {
    let m = if small {
        base * uniform_scale(SMALL_CACTUS)
    } else {
        base
    };
    let upright = rotate_x(-FRAC_PI_2);
    list.push(
        MeshId::Trunk,
        MaterialId::Cactus,
        m * translate(0.0, -2.0, 0.0) * upright * scale(0.5, 0.5, 3.0),
    );
    list.push(
        MeshId::Trunk,
        MaterialId::Cactus,
        m * translate(0.8, -1.5, 0.0) * upright * scale(0.3, 0.3, 1.2),
    );
    list.push(
        MeshId::Trunk,
        MaterialId::Cactus,
        m * translate(-0.8, -1.0, 0.0) * upright * scale(0.3, 0.3, 1.0),
    );
}

pub fn draw_cacti(list: &mut DrawList, table: &PlacementTable) {
    for i in table.walk(Stride::CACTI) {
        let base = translate(
            7.0 * table.offset(i),
            0.0,
            3.0 * (table.offset(i + 1) + CACTUS_DEPTH_BIAS),
        );
        draw_cactus(list, base, i % 8 < 4);
    }
}

/// Sleepers under the train, fixed to world positions on a
/// [`TIE_INTERVAL`] grid so they scroll past as the train moves.
pub fn draw_rail_ties(list: &mut DrawList, train: &TrainState, params: &PathParameters, t: f32) {
    let front = train.locomotive().position.x.min(train.last().position.x) - TIE_MARGIN;
    let back = train.locomotive().position.x.max(train.last().position.x) + TIE_MARGIN;

    let first = (front / TIE_INTERVAL).ceil() as i64;
    let last = (back / TIE_INTERVAL).floor() as i64;
    for step in first..=last {
        let x = step as f32 * TIE_INTERVAL;
        let z = params.lateral(x, t);
        let heading = tangent_heading(x, params, t);
        list.push(
            MeshId::Cube,
            MaterialId::Brown,
            translate(x, TIE_HEIGHT, z) * rotate_y(-heading) * scale(0.15, 0.08, 1.2),
        );
    }
}
