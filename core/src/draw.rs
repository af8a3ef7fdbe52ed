//! Draw instructions
//!
//! The composer's only output unit. Instructions are rebuilt every frame and
//! never retained.

use bytemuck::{Pod, Zeroable};
use glam::Mat4;
use railscape_shared::{MaterialId, Matrix4, MeshId, Rgba};
use serde::Serialize;

use crate::material::MaterialTable;

/// One renderer-bound draw: mesh, material and world transform
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrawInstruction {
    pub mesh: MeshId,
    pub material: MaterialId,
    /// Replaces the material's base color for this draw only
    pub color: Option<Rgba>,
    pub transform: Mat4,
}

/// Per-instance GPU data: column-major model matrix followed by color
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
#[repr(C)]
pub struct InstanceData {
    pub model: [f32; 16],
    pub color: [f32; 4],
}

/// Serializable snapshot of an instruction, for dumps and golden files
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DrawRecord {
    pub mesh: MeshId,
    pub material: MaterialId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<Rgba>,
    pub transform: Matrix4,
}

impl DrawInstruction {
    /// Effective color: the override if present, else the material's
    pub fn resolved_color(&self, materials: &MaterialTable) -> Rgba {
        self.color
            .unwrap_or_else(|| materials.get(self.material).color)
    }

    /// GPU instance for this draw. The color is clamped into `[0, 1]`.
    pub fn instance_data(&self, materials: &MaterialTable) -> InstanceData {
        InstanceData {
            model: self.transform.to_cols_array(),
            color: self.resolved_color(materials).clamped().to_array(),
        }
    }

    pub fn to_record(&self) -> DrawRecord {
        DrawRecord {
            mesh: self.mesh,
            material: self.material,
            color: self.color,
            transform: Matrix4::from_cols_array(self.transform.to_cols_array()),
        }
    }
}

/// Growable list of instructions emitted by the composition rules
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DrawList {
    instructions: Vec<DrawInstruction>,
}

impl DrawList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            instructions: Vec::with_capacity(capacity),
        }
    }

    pub fn push(&mut self, mesh: MeshId, material: MaterialId, transform: Mat4) {
        self.instructions.push(DrawInstruction {
            mesh,
            material,
            color: None,
            transform,
        });
    }

    /// Push with a per-draw color override
    pub fn push_tinted(&mut self, mesh: MeshId, material: MaterialId, color: Rgba, transform: Mat4) {
        self.instructions.push(DrawInstruction {
            mesh,
            material,
            color: Some(color),
            transform,
        });
    }

    pub fn len(&self) -> usize {
        self.instructions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instructions.is_empty()
    }

    pub fn as_slice(&self) -> &[DrawInstruction] {
        &self.instructions
    }

    pub fn into_vec(self) -> Vec<DrawInstruction> {
        self.instructions
    }

    pub fn count_mesh(&self, mesh: MeshId) -> usize {
        self.instructions.iter().filter(|d| d.mesh == mesh).count()
    }
}

/// Pack a frame's instructions into one instance buffer
pub fn pack_instances(instructions: &[DrawInstruction], materials: &MaterialTable) -> Vec<u8> {
    let instances: Vec<InstanceData> = instructions
        .iter()
        .map(|d| d.instance_data(materials))
        .collect();
    bytemuck::cast_slice(&instances).to_vec()
}

#[cfg(test)]
mod tests {
    use glam::Vec3;

    use super::*;
    use crate::color::GROUND_RAMP;

    #[test]
    fn test_push_and_count() {
        let mut list = DrawList::new();
        list.push(MeshId::Cube, MaterialId::Pink, Mat4::IDENTITY);
        list.push(MeshId::Cube, MaterialId::Pink, Mat4::IDENTITY);
        list.push_tinted(MeshId::Leaves, MaterialId::Green, Rgba::WHITE, Mat4::IDENTITY);
        assert_eq!(list.len(), 3);
        assert_eq!(list.count_mesh(MeshId::Cube), 2);
        assert_eq!(list.as_slice()[2].color, Some(Rgba::WHITE));
    }

    #[test]
    fn test_resolved_color_prefers_override() {
        let materials = MaterialTable::new();
        let plain = DrawInstruction {
            mesh: MeshId::Plane,
            material: MaterialId::Sand,
            color: None,
            transform: Mat4::IDENTITY,
        };
        assert_eq!(plain.resolved_color(&materials), materials.get(MaterialId::Sand).color);

        let tinted = DrawInstruction {
            color: Some(Rgba::BLACK),
            ..plain
        };
        assert_eq!(tinted.resolved_color(&materials), Rgba::BLACK);
    }

    #[test]
    fn test_pack_instances_layout() {
        let materials = MaterialTable::new();
        let transform = Mat4::from_translation(Vec3::new(1.0, 2.0, 3.0));
        let instruction = DrawInstruction {
            mesh: MeshId::Cube,
            material: MaterialId::White,
            color: None,
            transform,
        };
        let bytes = pack_instances(&[instruction, instruction], &materials);
        assert_eq!(bytes.len(), 2 * std::mem::size_of::<InstanceData>());
        assert_eq!(std::mem::size_of::<InstanceData>(), 80);

        let first: InstanceData = bytemuck::pod_read_unaligned(&bytes[..80]);
        assert_eq!(first.model[12..15], [1.0, 2.0, 3.0]);
        assert_eq!(first.color, [1.0, 1.0, 1.0, 1.0]);
    }

    #[test]
    fn test_instance_color_is_clamped() {
        let materials = MaterialTable::new();
        // weight -1 pushes the ground's red channel above 1
        let ground = GROUND_RAMP.low.mix(GROUND_RAMP.high, -1.0);
        assert!(ground.r > 1.0);

        let instruction = DrawInstruction {
            mesh: MeshId::Plane,
            material: MaterialId::Sand,
            color: Some(ground),
            transform: Mat4::IDENTITY,
        };
        let color = instruction.instance_data(&materials).color;
        assert_eq!(color[0], 1.0);
        assert!(color.iter().all(|c| (0.0..=1.0).contains(c)));
        // the instruction itself keeps the unclamped tint
        assert_eq!(instruction.resolved_color(&materials), ground);
    }

    #[test]
    fn test_record_keeps_translation() {
        let instruction = DrawInstruction {
            mesh: MeshId::Disc,
            material: MaterialId::Sun,
            color: None,
            transform: Mat4::from_translation(Vec3::new(-4.0, 5.0, 6.0)),
        };
        let record = instruction.to_record();
        assert_eq!(record.transform.translation(), [-4.0, 5.0, 6.0]);
        assert_eq!(record.mesh, MeshId::Disc);
    }
}
