//! Math types for Railscape
//!
//! Provides POD (Plain Old Data) math types that are serializable and
//! can be shared across crates without requiring glam as a dependency.

use bytemuck::{Pod, Zeroable};
use serde::{Deserialize, Serialize};

/// 4x4 matrix in column-major storage (POD type)
///
/// Same memory layout as `glam::Mat4` and GLSL `mat4`, so a host can upload
/// it without transposing. Memory layout (64 bytes): four columns of
/// `[x, y, z, w]`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize, Pod, Zeroable)]
#[repr(C)]
pub struct Matrix4 {
    pub cols: [[f32; 4]; 4],
}

impl Default for Matrix4 {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Matrix4 {
    /// Identity matrix (no transformation)
    pub const IDENTITY: Self = Self {
        cols: [
            [1.0, 0.0, 0.0, 0.0],
            [0.0, 1.0, 0.0, 0.0],
            [0.0, 0.0, 1.0, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ],
    };

    /// Create from a flat column-major array
    pub fn from_cols_array(arr: [f32; 16]) -> Self {
        Self {
            cols: [
                [arr[0], arr[1], arr[2], arr[3]],
                [arr[4], arr[5], arr[6], arr[7]],
                [arr[8], arr[9], arr[10], arr[11]],
                [arr[12], arr[13], arr[14], arr[15]],
            ],
        }
    }

    /// Flatten to a column-major array for GPU upload
    pub fn to_cols_array(&self) -> [f32; 16] {
        bytemuck::cast(self.cols)
    }

    /// Translation component (fourth column)
    pub fn translation(&self) -> [f32; 3] {
        [self.cols[3][0], self.cols[3][1], self.cols[3][2]]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity() {
        let m = Matrix4::IDENTITY;
        assert_eq!(m.cols[0], [1.0, 0.0, 0.0, 0.0]);
        assert_eq!(m.cols[3], [0.0, 0.0, 0.0, 1.0]);
        assert_eq!(Matrix4::default(), m);
    }

    #[test]
    fn test_from_cols_array() {
        let arr: [f32; 16] = std::array::from_fn(|i| i as f32);
        let m = Matrix4::from_cols_array(arr);
        assert_eq!(m.cols[1], [4.0, 5.0, 6.0, 7.0]);
        assert_eq!(m.translation(), [12.0, 13.0, 14.0]);
        assert_eq!(m.to_cols_array(), arr);
    }
}
