//! Wheels and bogies

use std::f32::consts::{FRAC_PI_2, FRAC_PI_4};

use glam::Mat4;
use railscape_shared::{MaterialId, MeshId};

use super::{rotate_z, scale, translate};
use crate::draw::DrawList;

/// Axle spacing of a boxcar bogie
pub const DEFAULT_WHEEL_SPACING: f32 = 1.5;

/// Spoke angles about the axle. 90° appears twice.
const SPOKE_ANGLES: [f32; 4] = [0.0, FRAC_PI_2, FRAC_PI_4, FRAC_PI_2];

/// One wheel: rim tube, face disc and four spokes, spinning with `t`
pub fn draw_wheel(list: &mut DrawList, base: Mat4, t: f32) {
    let wheel = base * scale(0.5, 0.5, 0.25) * rotate_z(t / 1.5);
    list.push(MeshId::Wheel, MaterialId::Pink, wheel);
    list.push(MeshId::Disc, MaterialId::Pink, wheel);

    for angle in SPOKE_ANGLES {
        list.push(
            MeshId::Cube,
            MaterialId::Pink,
            wheel * rotate_z(angle) * scale(0.05, 0.98, 0.25),
        );
    }
}

/// Bogie frame plus four wheels at fixed offsets from `base`
pub fn draw_wheel_base(list: &mut DrawList, base: Mat4, t: f32, spacing: f32) {
    list.push(
        MeshId::Cube,
        MaterialId::Pink,
        base * translate(spacing / 2.0, -1.25, 0.0) * scale(1.0, 0.35, 0.75),
    );

    let mut m = base * translate(0.0, -1.5, -0.76);
    draw_wheel(list, m, t);
    m *= translate(0.0, 0.0, 1.52);
    draw_wheel(list, m, t);
    m *= translate(spacing, 0.0, 0.0);
    draw_wheel(list, m, t);
    m *= translate(0.0, 0.0, -1.52);
    draw_wheel(list, m, t);
}
