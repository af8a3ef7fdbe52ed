//! Transform composition rules
//!
//! Each rule takes a base transform, right-multiplies a fixed chain of
//! translate/rotate/scale steps onto it and emits one instruction per
//! primitive into a [`DrawList`](crate::draw::DrawList). Rules never read
//! state beyond their arguments.

use glam::{Mat4, Vec3};

mod sky;
mod smoke;
mod terrain;
mod train;
mod wheels;


pub use sky::{draw_cloud, draw_clouds, draw_sun};
pub use smoke::{SMOKE_PUFFS, draw_smokestack, smoke_bob};
pub use terrain::{
    draw_cacti, draw_cactus, draw_ground, draw_mountain, draw_mountain_range, draw_rail_ties,
    draw_tree_big, draw_tree_small, draw_trees,
};
pub use train::{
    BodyStyle, LocomotiveAnchors, draw_boxcar, draw_empty_box, draw_locomotive, draw_train,
};
pub use wheels::{DEFAULT_WHEEL_SPACING, draw_wheel, draw_wheel_base};

#[inline]
pub(crate) fn translate(x: f32, y: f32, z: f32) -> Mat4 {
    Mat4::from_translation(Vec3::new(x, y, z))
}

#[inline]
pub(crate) fn scale(x: f32, y: f32, z: f32) -> Mat4 {
    Mat4::from_scale(Vec3::new(x, y, z))
}

#[inline]
pub(crate) fn uniform_scale(s: f32) -> Mat4 {
    Mat4::from_scale(Vec3::splat(s))
}

#[inline]
pub(crate) fn rotate_x(angle: f32) -> Mat4 {
    Mat4::from_rotation_x(angle)
}

#[inline]
pub(crate) fn rotate_y(angle: f32) -> Mat4 {
    Mat4::from_rotation_y(angle)
}

#[inline]
pub(crate) fn rotate_z(angle: f32) -> Mat4 {
    Mat4::from_rotation_z(angle)
}
