//! Time-driven color modulation
//!
//! Ground and foliage colors drift between two endpoints on a slow sine
//! cycle. Trees pass their placement offset as a phase so neighbouring trees
//! change color out of step.

use std::f32::consts::TAU;

use railscape_shared::Rgba;
use railscape_shared::constants::{COLOR_PERIOD, COLOR_PHASE};

/// Pair of colors a modulation blends between
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorRamp {
    pub low: Rgba,
    pub high: Rgba,
}

/// Ground: dry sand toward meadow green
pub const GROUND_RAMP: ColorRamp = ColorRamp {
    low: Rgba::from_rgb8(0xd0, 0xdd, 0x97),
    high: Rgba::from_rgb8(0x96, 0xca, 0x96),
};

/// Foliage: summer green toward autumn amber
pub const FOLIAGE_RAMP: ColorRamp = ColorRamp {
    low: Rgba::from_rgb8(0x96, 0xca, 0x96),
    high: Rgba::from_rgb8(0xe0, 0xa4, 0x58),
};

/// Blend weight `sin(2π/150 · t + 11 + phase_offset)`
pub fn blend_weight(t: f32, phase_offset: f32) -> f32 {
    (TAU / COLOR_PERIOD * t + COLOR_PHASE + phase_offset).sin()
}

/// Color of `ramp` at time `t`.
///
/// Each channel is `(1 - m)·low + m·high`. The weight swings through
/// `[-1, 1]`, so half the cycle extrapolates past `low` and channels can leave
/// `[0, 1]`. The result is not clamped here; [`DrawInstruction::instance_data`]
/// clamps when packing.
///
/// [`DrawInstruction::instance_data`]: crate::draw::DrawInstruction::instance_data
pub fn modulate(t: f32, phase_offset: f32, ramp: &ColorRamp) -> Rgba {
    ramp.low.mix(ramp.high, blend_weight(t, phase_offset))
}
