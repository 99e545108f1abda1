use super::{Face, MaterialIndex};

pub type MeshIndex = usize;

/// A run of faces sharing one material.
#[derive(Debug, Clone, PartialEq)]
pub struct Mesh {
    pub(crate) faces: Vec<Face>,
    pub(crate) material_index: Option<MaterialIndex>,
}

impl Mesh {
    pub(crate) fn new(material_index: Option<MaterialIndex>) -> Self {
        Self {
            faces: Vec::new(),
            material_index,
        }
    }

    pub fn faces(&self) -> &[Face] {
        &self.faces
    }

    /// `None` when no material was ever assigned to this mesh.
    pub fn material_index(&self) -> Option<MaterialIndex> {
        self.material_index
    }

    /// Number of face corners referenced by this mesh, before any
    /// triangulation.
    pub fn index_count(&self) -> usize {
        self.faces.iter().map(|face| face.vertex_indices().len()).sum()
    }

    pub fn has_normals(&self) -> bool {
        self.faces.iter().any(|face| !face.normal_indices().is_empty())
    }

    pub fn has_texture_coordinates(&self) -> bool {
        self.faces
            .iter()
            .any(|face| !face.texture_coordinate_indices().is_empty())
    }
}
