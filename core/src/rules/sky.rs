//! Clouds and the sun

use glam::Mat4;
use railscape_shared::{MaterialId, MeshId};

use super::{scale, translate, uniform_scale};
use crate::draw::DrawList;
use crate::placement::{PlacementTable, Stride};

const CLOUD_ALTITUDE: f32 = 40.0;
const SUN_POSITION: [f32; 3] = [-250.0, 180.0, -600.0];
const SUN_RADIUS: f32 = 40.0;
const HALO_SPREAD: f32 = 1.8;

/// Puffs of the cloud whose centre transform is `center`, read from the
/// table starting at `start`.
pub fn draw_cloud(list: &mut DrawList, table: &PlacementTable, center: Mat4, start: usize) {
    for k in table.walk(Stride::cloud_puffs(start)) {
        let puff = center
            * translate(
                table.offset(k) / 15.0,
                table.offset(k + 1) / 13.0,
                table.offset(k + 2) / 15.0,
            )
            * uniform_scale(table.scale(k) / 15.0);
        list.push(MeshId::SphereLowPoly, MaterialId::DarkWhite, puff);
    }
}

pub fn draw_clouds(list: &mut DrawList, table: &PlacementTable) {
    let sky = translate(1.0, CLOUD_ALTITUDE, 1.0);
    for i in table.walk(Stride::CLOUD_CENTERS) {
        let size = table.scale(i);
        let center = sky
            * translate(
                6.0 * table.offset(i),
                table.offset(i + 1) / 10.0,
                6.0 * table.offset(i + 2),
            )
            * scale(size / 8.0, size / 10.0, size / 10.0);
        draw_cloud(list, table, center, i);
    }
}

/// Textured sun disc with a ring halo just behind it
pub fn draw_sun(list: &mut DrawList) {
    let [x, y, z] = SUN_POSITION;
    let sun = translate(x, y, z) * uniform_scale(SUN_RADIUS);
    list.push(MeshId::Disc, MaterialId::Sun, sun);
    list.push(
        MeshId::Disc,
        MaterialId::SunHalo,
        sun * translate(0.0, 0.0, -0.05) * uniform_scale(HALO_SPREAD),
    );
}
