use std::collections::HashMap;

use cgmath::{Vector2, Vector3, Zero};

use crate::{
    scene::{Face, FaceId, DEFAULT_MATERIAL_INDEX},
    Scene, Vertex,
};

use super::{
    flat_normal::flat_normal, triangulate_face::triangulate_face, Model, ModelBuildingError,
    ModelOptions, Submesh, VertexAttribute, VertexIndex,
};

pub struct ModelBuilder<'a> {
    scene: &'a Scene,
    options: &'a ModelOptions,

    vertices: Vec<Vertex>,
    vertex_indices: Vec<VertexIndex>,
    submeshes: Vec<Submesh>,

    vertex_map: HashMap<Vertex, VertexIndex>,
    skipped_faces: usize,
}

impl<'a> ModelBuilder<'a> {
    pub(crate) fn new(scene: &'a Scene, options: &'a ModelOptions) -> Self {
        Self {
            scene,
            options,
            vertices: Vec::new(),
            vertex_indices: Vec::new(),
            submeshes: Vec::new(),
            vertex_map: HashMap::new(),
            skipped_faces: 0,
        }
    }

    pub(crate) fn build(self) -> Model {
        log::info!(
            "Expanded \"{}\": {} vertices, {} indices, {} submeshes, {} faces without corners",
            self.scene.name(),
            self.vertices.len(),
            self.vertex_indices.len(),
            self.submeshes.len(),
            self.skipped_faces,
        );
        Model {
            vertices: self.vertices.into_boxed_slice(),
            vertex_indices: self.vertex_indices.into_boxed_slice(),
            submeshes: self.submeshes.into_boxed_slice(),
        }
    }

    pub(crate) fn add_scene(&mut self) -> Result<(), ModelBuildingError> {
        let scene = self.scene;

        for (mesh_index, mesh) in scene.meshes().iter().enumerate() {
            let start_index = self.vertex_indices.len();
            for (face_index, face) in mesh.faces().iter().enumerate() {
                let face_id = FaceId {
                    mesh: mesh_index,
                    face: face_index,
                };
                self.add_face(face, face_id)?;
            }

            self.submeshes.push(Submesh {
                mesh: mesh_index,
                material: mesh.material_index().unwrap_or(DEFAULT_MATERIAL_INDEX),
                start_index,
                index_count: self.vertex_indices.len() - start_index,
            });
        }
        Ok(())
    }

    fn add_face(&mut self, face: &Face, face_id: FaceId) -> Result<(), ModelBuildingError> {
        let corners = triangulate_face(
            face.vertex_indices().len(),
            face.primitive_type(),
            self.options.triangulation,
        );
        if corners.is_empty() {
            self.skipped_faces += 1;
            log::debug!(
                "Model builder: face {} of mesh {} has {} corners, skipping it",
                face_id.face,
                face_id.mesh,
                face.vertex_indices().len(),
            );
            return Ok(());
        }

        let scene = self.scene;
        let mut face_normal = None;

        for &corner in corners.iter() {
            let position = dereference(
                scene.vertices(),
                face.vertex_indices()[corner],
                face_id,
                VertexAttribute::Position,
            )?;

            let mut texture_coordinate = match face.texture_coordinate_indices().get(corner) {
                Some(&index) => dereference(
                    scene.texture_coordinates(),
                    index,
                    face_id,
                    VertexAttribute::TextureCoordinate,
                )?,
                None => Vector2::zero(),
            };
            if self.options.flip_texture_v {
                texture_coordinate.y = 1. - texture_coordinate.y;
            }

            let normal = match face.normal_indices().get(corner) {
                Some(&index) => {
                    dereference(scene.normals(), index, face_id, VertexAttribute::Normal)?
                }
                None => match face_normal {
                    Some(face_normal) => face_normal,
                    None => *face_normal.insert(self.face_normal(face, face_id)?),
                },
            };

            self.add_vertex(Vertex::new(position, normal, texture_coordinate))?;
        }
        Ok(())
    }

    /// Flat normal from the first three corners of the face.
    fn face_normal(
        &self,
        face: &Face,
        face_id: FaceId,
    ) -> Result<Vector3<f32>, ModelBuildingError> {
        let mut corners = [Vector3::zero(); 3];
        for (corner, &index) in corners.iter_mut().zip(face.vertex_indices()) {
            *corner = dereference(
                self.scene.vertices(),
                index,
                face_id,
                VertexAttribute::Position,
            )?;
        }
        Ok(flat_normal(corners))
    }

    fn add_vertex(&mut self, vertex: Vertex) -> Result<(), ModelBuildingError> {
        let next_index = VertexIndex::try_from(self.vertices.len())
            .map_err(|_| ModelBuildingError::TooManyVertices)?;

        if !self.options.deduplicate_vertices {
            self.vertices.push(vertex);
            self.vertex_indices.push(next_index);
            return Ok(());
        }

        self.vertex_map
            .entry(vertex)
            .and_modify(|index| self.vertex_indices.push(*index))
            .or_insert_with(|| {
                self.vertices.push(vertex);
                self.vertex_indices.push(next_index);
                next_index
            });
        Ok(())
    }
}

/// Resolves a 1-based obj index into its pool.
fn dereference<T: Copy>(
    pool: &[T],
    index: u32,
    face: FaceId,
    attribute: VertexAttribute,
) -> Result<T, ModelBuildingError> {
    index
        .checked_sub(1)
        .and_then(|index| pool.get(index as usize))
        .copied()
        .ok_or(ModelBuildingError::IndexOutOfRange {
            face,
            attribute,
            index,
            len: pool.len(),
        })
}
