//! RGBA colors
//!
//! Linear `f32` channels, laid out for direct uniform upload.

use bytemuck::{Pod, Zeroable};
use serde::{Deserialize, Serialize};

/// RGBA color with `f32` channels in `[0, 1]` (by convention, not enforced)
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize, Pod, Zeroable)]
#[repr(C)]
pub struct Rgba {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

/// Error returned when a hex color string cannot be parsed
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ColorParseError {
    #[error("hex color must be 6 or 8 digits after '#', got {0:?}")]
    InvalidLength(String),

    #[error("invalid hex digit in color {0:?}")]
    InvalidDigit(String),
}

impl Rgba {
    pub const BLACK: Self = Self::new(0.0, 0.0, 0.0, 1.0);
    pub const WHITE: Self = Self::new(1.0, 1.0, 1.0, 1.0);

    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Opaque color from 8-bit channels
    pub const fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        Self::new(r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0, 1.0)
    }

    /// Parse `#rrggbb` or `#rrggbbaa` (leading `#` optional)
    pub fn from_hex(hex: &str) -> Result<Self, ColorParseError> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        if digits.len() != 6 && digits.len() != 8 {
            return Err(ColorParseError::InvalidLength(hex.to_string()));
        }

        let mut channels = [255u8; 4];
        for (slot, chunk) in channels.iter_mut().zip(digits.as_bytes().chunks(2)) {
            let pair =
                std::str::from_utf8(chunk).map_err(|_| ColorParseError::InvalidDigit(hex.to_string()))?;
            *slot = u8::from_str_radix(pair, 16)
                .map_err(|_| ColorParseError::InvalidDigit(hex.to_string()))?;
        }

        Ok(Self::new(
            f32::from(channels[0]) / 255.0,
            f32::from(channels[1]) / 255.0,
            f32::from(channels[2]) / 255.0,
            f32::from(channels[3]) / 255.0,
        ))
    }

    /// Channels as `[r, g, b, a]`
    pub const fn to_array(self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// Component-wise `(1 - weight) * self + weight * other`.
    ///
    /// `weight` is not clamped, so values outside `[0, 1]` extrapolate.
    pub fn mix(self, other: Self, weight: f32) -> Self {
        let keep = 1.0 - weight;
        Self::new(
            keep * self.r + weight * other.r,
            keep * self.g + weight * other.g,
            keep * self.b + weight * other.b,
            keep * self.a + weight * other.a,
        )
    }

    /// Every channel clamped into `[0, 1]`
    pub fn clamped(self) -> Self {
        Self::new(
            self.r.clamp(0.0, 1.0),
            self.g.clamp(0.0, 1.0),
            self.b.clamp(0.0, 1.0),
            self.a.clamp(0.0, 1.0),
        )
    }

    /// Largest per-channel absolute difference
    pub fn max_channel_delta(self, other: Self) -> f32 {
        (self.r - other.r)
            .abs()
            .max((self.g - other.g).abs())
            .max((self.b - other.b).abs())
            .max((self.a - other.a).abs())
    }
}
