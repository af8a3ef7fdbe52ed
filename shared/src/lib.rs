//! Shared types for the Railscape procedural scene composer.
//!
//! Everything in this crate is plain data: identifiers, colors, matrices and
//! scene constants that both the composer and any renderer host agree on.
//! It deliberately avoids a math library dependency so hosts can consume it
//! with whatever linear algebra they already use.

pub mod color;
pub mod constants;
pub mod ids;
pub mod math;

pub use color::{ColorParseError, Rgba};
pub use ids::{MaterialId, MeshId, MeshShape, ShapeKind};
pub use math::Matrix4;
