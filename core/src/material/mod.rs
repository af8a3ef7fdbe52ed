//! Materials
//!
//! A [`Material`] is a shader variant plus the uniforms it reads. Scene
//! materials are declared as [`MaterialOverrides`] merged over the
//! documented defaults, then collected once into a [`MaterialTable`].

use railscape_shared::{MaterialId, Rgba};

mod shader;

pub use shader::{ShaderSource, ShaderVariant, shader_source};

/// Default base color: opaque black
pub const DEFAULT_COLOR: Rgba = Rgba::BLACK;
/// Default ambient term
pub const DEFAULT_AMBIENT: f32 = 0.0;
/// Default diffuse term
pub const DEFAULT_DIFFUSIVITY: f32 = 1.0;
/// Default specular term
pub const DEFAULT_SPECULARITY: f32 = 1.0;
/// Default specular exponent
pub const DEFAULT_SMOOTHNESS: f32 = 40.0;

/// Fully resolved material, as handed to the renderer
#[derive(Debug, Clone, PartialEq)]
pub struct Material {
    pub shader: ShaderVariant,
    pub color: Rgba,
    pub ambient: f32,
    pub diffusivity: f32,
    pub specularity: f32,
    pub smoothness: f32,
    /// Texture asset name, resolved by the host
    pub texture: Option<&'static str>,
}

impl Default for Material {
    fn default() -> Self {
        Self {
            shader: ShaderVariant::Phong,
            color: DEFAULT_COLOR,
            ambient: DEFAULT_AMBIENT,
            diffusivity: DEFAULT_DIFFUSIVITY,
            specularity: DEFAULT_SPECULARITY,
            smoothness: DEFAULT_SMOOTHNESS,
            texture: None,
        }
    }
}

/// Caller-specified material fields; `None` keeps the default
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct MaterialOverrides {
    pub shader: Option<ShaderVariant>,
    pub color: Option<Rgba>,
    pub ambient: Option<f32>,
    pub diffusivity: Option<f32>,
    pub specularity: Option<f32>,
    pub smoothness: Option<f32>,
    pub texture: Option<&'static str>,
}

impl Material {
    /// Overlay `overrides` onto `self`, field by field
    pub fn with_overrides(&self, overrides: &MaterialOverrides) -> Self {
        Self {
            shader: overrides.shader.unwrap_or(self.shader),
            color: overrides.color.unwrap_or(self.color),
            ambient: overrides.ambient.unwrap_or(self.ambient),
            diffusivity: overrides.diffusivity.unwrap_or(self.diffusivity),
            specularity: overrides.specularity.unwrap_or(self.specularity),
            smoothness: overrides.smoothness.unwrap_or(self.smoothness),
            texture: overrides.texture.or(self.texture),
        }
    }

    /// This material with its color replaced
    pub fn tinted(&self, color: Rgba) -> Self {
        Self {
            color,
            ..self.clone()
        }
    }
}

/// Phong material with the given ambient/diffuse terms and color
const fn phong(ambient: f32, diffusivity: f32, color: Rgba) -> MaterialOverrides {
    MaterialOverrides {
        shader: None,
        color: Some(color),
        ambient: Some(ambient),
        diffusivity: Some(diffusivity),
        specularity: None,
        smoothness: None,
        texture: None,
    }
}

/// Scene declaration for each material id
pub const fn overrides_for(id: MaterialId) -> MaterialOverrides {
    match id {
        MaterialId::Pink => phong(1.0, 0.5, Rgba::from_rgb8(0xf7, 0xca, 0xc9)),
        MaterialId::Purple => phong(1.0, 0.5, Rgba::from_rgb8(0xc5, 0xb9, 0xcd)),
        MaterialId::Sand => phong(1.0, 0.5, Rgba::from_rgb8(0xd0, 0xdd, 0x97)),
        MaterialId::Green => phong(1.0, 0.6, Rgba::from_rgb8(0x96, 0xca, 0x96)),
        MaterialId::Brown => phong(1.0, 0.5, Rgba::from_rgb8(0x7b, 0x5c, 0x43)),
        MaterialId::White => phong(1.0, 0.5, Rgba::WHITE),
        MaterialId::DarkWhite => phong(0.9, 0.5, Rgba::WHITE),
        MaterialId::Cactus => phong(1.0, 0.6, Rgba::from_rgb8(0x6a, 0x9a, 0x5b)),
        MaterialId::Sun => MaterialOverrides {
            shader: Some(ShaderVariant::RotatingTexture),
            color: Some(Rgba::from_rgb8(0xfa, 0xc9, 0x1a)),
            ambient: Some(1.0),
            diffusivity: Some(0.0),
            specularity: Some(0.0),
            smoothness: None,
            texture: Some("sun.png"),
        },
        MaterialId::SunHalo => MaterialOverrides {
            shader: Some(ShaderVariant::Ring),
            color: Some(Rgba::from_rgb8(0xb0, 0x80, 0x40)),
            ambient: None,
            diffusivity: None,
            specularity: None,
            smoothness: None,
            texture: None,
        },
    }
}

/// Resolved materials indexed by [`MaterialId`]
#[derive(Debug, Clone)]
pub struct MaterialTable {
    materials: Vec<Material>,
}

impl Default for MaterialTable {
    fn default() -> Self {
        Self::new()
    }
}

impl MaterialTable {
    pub fn new() -> Self {
        let base = Material::default();
        let materials = MaterialId::ALL
            .iter()
            .map(|&id| base.with_overrides(&overrides_for(id)))
            .collect();
        Self { materials }
    }

    pub fn get(&self, id: MaterialId) -> &Material {
        // ALL is declared in discriminant order.
        &self.materials[id as usize]
    }

    pub fn iter(&self) -> impl Iterator<Item = (MaterialId, &Material)> {
        MaterialId::ALL.into_iter().zip(self.materials.iter())
    }
}
