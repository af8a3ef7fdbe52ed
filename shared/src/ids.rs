//! Mesh and material identifiers.
//!
//! The composer refers to geometry and materials only by these ids. Hosts
//! build the actual GPU resources from [`MeshId::shape`] and the material
//! table in `railscape-core`.

use serde::{Deserialize, Serialize};

/// Base detail level the shape catalog is expressed in.
const POLY_RES: u32 = 24;

/// Primitive mesh referenced by a draw instruction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MeshId {
    /// Unit cube centred on the origin, extents [-1, 1]
    Cube,
    /// Ground plane polygon
    Plane,
    /// Smooth open tube used for wheels and the chimney
    Wheel,
    /// Flat-shaded boiler tube
    Engine,
    /// Low-detail disc capping the boiler
    DiscLowPoly,
    /// High-detail disc used for wheel faces and the sun
    Disc,
    /// Flat-shaded cone for mountains and snow caps
    Mountain,
    /// Flat-shaded cone for tree foliage
    Leaves,
    /// Thin tube for tree trunks and cactus limbs
    Trunk,
    /// Flat-shaded subdivision sphere, 2 subdivisions
    SphereLowPoly,
    /// Smooth subdivision sphere, 3 subdivisions
    Sphere,
}

/// Primitive family a mesh is generated from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShapeKind {
    Cube,
    RegularPolygon,
    CylindricalTube,
    ConeTip,
    SubdivisionSphere,
}

/// Generation parameters for a [`MeshId`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MeshShape {
    pub kind: ShapeKind,
    /// Rows/columns for polygons, tubes and cones; subdivision count for spheres
    pub detail: u32,
    pub flat_shaded: bool,
}

impl MeshShape {
    const fn smooth(kind: ShapeKind, detail: u32) -> Self {
        Self {
            kind,
            detail,
            flat_shaded: false,
        }
    }

    const fn flat(kind: ShapeKind, detail: u32) -> Self {
        Self {
            kind,
            detail,
            flat_shaded: true,
        }
    }
}

impl MeshId {
    pub const ALL: [MeshId; 11] = [
        MeshId::Cube,
        MeshId::Plane,
        MeshId::Wheel,
        MeshId::Engine,
        MeshId::DiscLowPoly,
        MeshId::Disc,
        MeshId::Mountain,
        MeshId::Leaves,
        MeshId::Trunk,
        MeshId::SphereLowPoly,
        MeshId::Sphere,
    ];

    /// Stable lowercase name, matching the serde representation
    pub const fn name(self) -> &'static str {
        match self {
            MeshId::Cube => "cube",
            MeshId::Plane => "plane",
            MeshId::Wheel => "wheel",
            MeshId::Engine => "engine",
            MeshId::DiscLowPoly => "disc_low_poly",
            MeshId::Disc => "disc",
            MeshId::Mountain => "mountain",
            MeshId::Leaves => "leaves",
            MeshId::Trunk => "trunk",
            MeshId::SphereLowPoly => "sphere_low_poly",
            MeshId::Sphere => "sphere",
        }
    }

    pub const fn shape(self) -> MeshShape {
        match self {
            MeshId::Cube => MeshShape::smooth(ShapeKind::Cube, 1),
            MeshId::Plane => MeshShape::smooth(ShapeKind::RegularPolygon, POLY_RES),
            MeshId::Wheel => MeshShape::smooth(ShapeKind::CylindricalTube, 2 * POLY_RES),
            MeshId::Engine => MeshShape::flat(ShapeKind::CylindricalTube, POLY_RES / 2),
            MeshId::DiscLowPoly => MeshShape::smooth(ShapeKind::RegularPolygon, POLY_RES / 2),
            MeshId::Disc => MeshShape::smooth(ShapeKind::RegularPolygon, 3 * POLY_RES),
            MeshId::Mountain | MeshId::Leaves => MeshShape::flat(ShapeKind::ConeTip, POLY_RES / 4),
            MeshId::Trunk => MeshShape::smooth(ShapeKind::CylindricalTube, POLY_RES / 6),
            MeshId::SphereLowPoly => MeshShape::flat(ShapeKind::SubdivisionSphere, 2),
            MeshId::Sphere => MeshShape::smooth(ShapeKind::SubdivisionSphere, 3),
        }
    }
}

impl std::fmt::Display for MeshId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Named material from the scene's material table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MaterialId {
    /// Train body paint
    Pink,
    /// Mountain rock
    Purple,
    /// Ground
    Sand,
    /// Tree foliage
    Green,
    /// Trunks and rail ties
    Brown,
    /// Snow caps
    White,
    /// Clouds and smoke
    DarkWhite,
    /// Cactus skin
    Cactus,
    /// Sun disc (rotating texture)
    Sun,
    /// Sun halo (ring shader)
    SunHalo,
}

impl MaterialId {
    pub const ALL: [MaterialId; 10] = [
        MaterialId::Pink,
        MaterialId::Purple,
        MaterialId::Sand,
        MaterialId::Green,
        MaterialId::Brown,
        MaterialId::White,
        MaterialId::DarkWhite,
        MaterialId::Cactus,
        MaterialId::Sun,
        MaterialId::SunHalo,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            MaterialId::Pink => "pink",
            MaterialId::Purple => "purple",
            MaterialId::Sand => "sand",
            MaterialId::Green => "green",
            MaterialId::Brown => "brown",
            MaterialId::White => "white",
            MaterialId::DarkWhite => "dark_white",
            MaterialId::Cactus => "cactus",
            MaterialId::Sun => "sun",
            MaterialId::SunHalo => "sun_halo",
        }
    }
}

impl std::fmt::Display for MaterialId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
