//! Wavefront OBJ/MTL loading.
//!
//! [`Scene`] is the parsed, read-only scene graph: attribute pools, objects,
//! meshes grouped by material and the material registry. [`Model`] is the
//! flat, renderer-ready expansion of a [`Scene`].

mod lossy_lines;
mod model;
mod mtl;
mod obj;
mod scene;
mod vertex;
mod warning;

pub use model::{
    Model, ModelBuildingError, ModelLoadingError, ModelOptions, Submesh, Triangulation,
    VertexAttribute,
};
pub use obj::{LoadOptions, ObjFile, ObjParser, ObjParsingError, ObjParsingErrorDetail};
pub use scene::{
    Face, FaceId, Group, IlluminationModel, Material, MaterialIndex, MaterialRegistry, Mesh,
    MeshIndex, Object, ObjectIndex, ObjectKind, PrimitiveType, Scene, TextureMap, TextureType,
    DEFAULT_MATERIAL_INDEX, DEFAULT_MATERIAL_NAME,
};
pub use vertex::Vertex;
pub use warning::Warning;
