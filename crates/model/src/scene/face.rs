use super::{MaterialIndex, MeshIndex};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrimitiveType {
    Point,
    Line,
    Polygon,
}

/// Position of a face in a [`Scene`](super::Scene): the mesh it belongs to and
/// its rank inside that mesh.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FaceId {
    pub mesh: MeshIndex,
    pub face: usize,
}

/// A primitive as written in the obj file.
///
/// Indices are kept 1-based, exactly as in the source. The texture coordinate
/// and normal lists may be empty or shorter than the vertex list.
#[derive(Debug, Clone, PartialEq)]
pub struct Face {
    primitive_type: PrimitiveType,
    vertex_indices: Vec<u32>,
    texture_coordinate_indices: Vec<u32>,
    normal_indices: Vec<u32>,
    material: MaterialIndex,
}

impl Face {
    pub(crate) fn new(
        primitive_type: PrimitiveType,
        vertex_indices: Vec<u32>,
        texture_coordinate_indices: Vec<u32>,
        normal_indices: Vec<u32>,
        material: MaterialIndex,
    ) -> Self {
        Self {
            primitive_type,
            vertex_indices,
            texture_coordinate_indices,
            normal_indices,
            material,
        }
    }

    pub fn primitive_type(&self) -> PrimitiveType {
        self.primitive_type
    }

    pub fn vertex_indices(&self) -> &[u32] {
        &self.vertex_indices
    }

    pub fn texture_coordinate_indices(&self) -> &[u32] {
        &self.texture_coordinate_indices
    }

    pub fn normal_indices(&self) -> &[u32] {
        &self.normal_indices
    }

    /// Index of the material that was active when the face was read.
    pub fn material(&self) -> MaterialIndex {
        self.material
    }
}
