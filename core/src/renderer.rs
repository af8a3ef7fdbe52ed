//! Renderer boundary
//!
//! The composer never touches GPU state. A host implements [`Renderer`] and
//! receives the projection, an optional camera and one draw per instruction.

use std::collections::BTreeMap;

use glam::Mat4;
use railscape_shared::{MaterialId, MeshId, Rgba};

use crate::camera::Projection;
use crate::material::Material;

/// Draw target for composed frames
pub trait Renderer {
    fn set_projection(&mut self, projection: &Projection);

    /// Replace the view matrix. Only called while the camera is attached.
    fn set_camera(&mut self, view: Mat4);

    /// Issue one draw. `material` already carries any per-draw color override.
    fn draw(&mut self, mesh: MeshId, transform: &Mat4, id: MaterialId, material: &Material);
}

/// Headless renderer that tallies what it was asked to do
#[derive(Debug, Clone, Default)]
pub struct RecordingRenderer {
    pub draws: usize,
    pub mesh_counts: BTreeMap<MeshId, usize>,
    pub material_counts: BTreeMap<MaterialId, usize>,
    pub camera: Option<Mat4>,
    pub camera_updates: usize,
    pub projection: Option<Projection>,
    pub last_color: Option<Rgba>,
}

impl RecordingRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mesh_count(&self, mesh: MeshId) -> usize {
        self.mesh_counts.get(&mesh).copied().unwrap_or(0)
    }
}

impl Renderer for RecordingRenderer {
    fn set_projection(&mut self, projection: &Projection) {
        self.projection = Some(*projection);
    }

    fn set_camera(&mut self, view: Mat4) {
        self.camera = Some(view);
        self.camera_updates += 1;
    }

    fn draw(&mut self, mesh: MeshId, _transform: &Mat4, id: MaterialId, material: &Material) {
        self.draws += 1;
        *self.mesh_counts.entry(mesh).or_default() += 1;
        *self.material_counts.entry(id).or_default() += 1;
        self.last_color = Some(material.color);
    }
}
