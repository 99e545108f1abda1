mod face;
mod group;
mod material;
mod material_registry;
mod mesh;
mod object;

pub use face::{Face, FaceId, PrimitiveType};
pub use group::Group;
pub use material::{IlluminationModel, Material, TextureMap, TextureType};
pub use material_registry::{
    MaterialIndex, MaterialRegistry, DEFAULT_MATERIAL_INDEX, DEFAULT_MATERIAL_NAME,
};
pub use mesh::{Mesh, MeshIndex};
pub use object::{Object, ObjectIndex, ObjectKind};

use cgmath::{Vector2, Vector3};

use crate::Warning;

/// The parsed content of an obj file.
///
/// A `Scene` is only built by the parser and is read-only afterwards.
#[derive(Debug, Default)]
pub struct Scene {
    pub(crate) name: String,
    pub(crate) vertices: Vec<Vector3<f32>>,
    pub(crate) normals: Vec<Vector3<f32>>,
    pub(crate) texture_coordinates: Vec<Vector2<f32>>,
    pub(crate) objects: Vec<Object>,
    pub(crate) meshes: Vec<Mesh>,
    pub(crate) materials: MaterialRegistry,
    pub(crate) groups: Vec<Group>,
    pub(crate) warnings: Vec<Warning>,
}

// Constructors:

impl Scene {
    pub(crate) fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }
}

// Getters:

impl Scene {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn vertices(&self) -> &[Vector3<f32>] {
        &self.vertices
    }

    pub fn normals(&self) -> &[Vector3<f32>] {
        &self.normals
    }

    pub fn texture_coordinates(&self) -> &[Vector2<f32>] {
        &self.texture_coordinates
    }

    pub fn objects(&self) -> &[Object] {
        &self.objects
    }

    pub fn meshes(&self) -> &[Mesh] {
        &self.meshes
    }

    pub fn materials(&self) -> &MaterialRegistry {
        &self.materials
    }

    pub fn groups(&self) -> &[Group] {
        &self.groups
    }

    /// Recoverable problems met while loading, in the order they happened.
    pub fn warnings(&self) -> &[Warning] {
        &self.warnings
    }

    pub fn object_by_name(&self, name: &str) -> Option<&Object> {
        self.objects.iter().find(|object| object.name() == name)
    }

    pub fn group_by_name(&self, name: &str) -> Option<&Group> {
        self.groups.iter().find(|group| group.name() == name)
    }

    pub fn face(&self, id: FaceId) -> Option<&Face> {
        self.meshes.get(id.mesh)?.faces().get(id.face)
    }

    /// The material a mesh is drawn with. Meshes without a material use the
    /// default one.
    pub fn mesh_material(&self, mesh: &Mesh) -> &Material {
        self.materials
            .get(mesh.material_index().unwrap_or(DEFAULT_MATERIAL_INDEX))
            .unwrap_or_else(|| self.materials.default_material())
    }

    pub fn face_count(&self) -> usize {
        self.meshes.iter().map(|mesh| mesh.faces().len()).sum()
    }
}
