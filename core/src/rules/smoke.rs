//! Smokestack puff trail

use std::f32::consts::PI;

use glam::Mat4;
use railscape_shared::{MaterialId, MeshId};

use super::{translate, uniform_scale};
use crate::draw::DrawList;

/// Spheres in the trail
pub const SMOKE_PUFFS: usize = 5;

/// Growth of each puff relative to the one below it
const PUFF_GROWTH: f32 = 1.15;

/// Vertical bob of the whole trail at time `t`
pub fn smoke_bob(t: f32) -> f32 {
    0.1 * (PI * t / 5.0).cos() / 2.0
}

/// Puffs rise and drift toward +x (behind the moving train), alternating
/// low- and high-detail spheres.
pub fn draw_smokestack(list: &mut DrawList, base: Mat4, t: f32) {
    let mut m = base * translate(0.0, smoke_bob(t), 0.0) * uniform_scale(0.3);
    for puff in 0..SMOKE_PUFFS {
        let mesh = if puff % 2 == 0 {
            MeshId::SphereLowPoly
        } else {
            MeshId::Sphere
        };
        list.push(mesh, MaterialId::DarkWhite, m);
        m *= translate(0.6, 1.2, 0.0) * uniform_scale(PUFF_GROWTH);
    }
}
