mod errors;
mod flat_normal;
mod model_builder;
mod model_options;
mod triangulate_face;

pub use errors::{ModelBuildingError, ModelLoadingError, VertexAttribute};
pub use model_options::{ModelOptions, Triangulation};

use model_builder::ModelBuilder;
use rs42::extensions::PipeLine;

use crate::{
    scene::{MaterialIndex, MeshIndex},
    vertex::Vertex,
    ObjFile, Scene,
};

type VertexIndex = u32;

/// The index range drawn with one material, one per scene mesh.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Submesh {
    pub mesh: MeshIndex,
    pub material: MaterialIndex,
    pub start_index: usize,
    pub index_count: usize,
}

/// Flat vertex and index buffers expanded from a [`Scene`].
#[derive(Debug, Clone)]
pub struct Model {
    vertices: Box<[Vertex]>,
    vertex_indices: Box<[VertexIndex]>,
    submeshes: Box<[Submesh]>,
}

// Constructors:

impl Model {
    pub fn from_scene(scene: &Scene, options: &ModelOptions) -> Result<Self, ModelBuildingError> {
        let mut builder = ModelBuilder::new(scene, options);
        builder.add_scene()?;
        builder.build().pipe(Ok)
    }
}

impl<'a> TryFrom<ObjFile<'a>> for Model {
    type Error = ModelLoadingError;

    fn try_from(obj_file: ObjFile<'a>) -> Result<Self, Self::Error> {
        let scene = Scene::try_from(obj_file)?;
        Self::try_from(&scene)?.pipe(Ok)
    }
}

impl TryFrom<&Scene> for Model {
    type Error = ModelBuildingError;

    fn try_from(scene: &Scene) -> Result<Self, Self::Error> {
        Self::from_scene(scene, &ModelOptions::default())
    }
}

// Getters:

impl Model {
    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    pub fn vertex_indices(&self) -> &[VertexIndex] {
        &self.vertex_indices
    }

    pub fn submeshes(&self) -> &[Submesh] {
        &self.submeshes
    }

    pub fn submesh_indices(&self, submesh: &Submesh) -> &[VertexIndex] {
        self.vertex_indices
            .get(submesh.start_index..submesh.start_index + submesh.index_count)
            .unwrap_or_default()
    }

    pub fn triangle_count(&self) -> usize {
        self.vertex_indices.len() / 3
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{obj::parse_str, FaceId, DEFAULT_MATERIAL_INDEX};

    fn expand(obj: &str, options: ModelOptions) -> Model {
        Model::from_scene(&parse_str(obj).unwrap(), &options).unwrap()
    }

    #[test]
    fn triangle_scenario() {
        let model = expand(
            "v 0 0 0\nv 1 0 0\nv 0 1 0\nf 1 2 3\n",
            ModelOptions::default(),
        );

        assert_eq!(model.vertex_indices(), [0, 1, 2]);
        let positions = model.vertices().iter().map(Vertex::position).collect::<Vec<_>>();
        assert_eq!(positions, [[0., 0., 0.], [1., 0., 0.], [0., 1., 0.]]);
        assert!(model.vertices().iter().all(|vertex| vertex.normal() == [0., 0., 1.]));
        assert!(model
            .vertices()
            .iter()
            .all(|vertex| vertex.texture_coordinate() == [0., 0.]));
        assert_eq!(
            model.submeshes(),
            [Submesh {
                mesh: 0,
                material: DEFAULT_MATERIAL_INDEX,
                start_index: 0,
                index_count: 3,
            }]
        );
    }

    #[test]
    fn quad_expands_to_two_triangles() {
        let model = expand(
            "v 0 0 0\nv 1 0 0\nv 1 1 0\nv 0 1 0\nf 1 2 3 4\n",
            ModelOptions::default().with_deduplicate_vertices(false),
        );

        assert_eq!(model.vertex_indices().len(), 6);
        assert_eq!(model.triangle_count(), 2);
        let positions = model.vertices().iter().map(Vertex::position).collect::<Vec<_>>();
        assert_eq!(
            positions,
            [
                [0., 0., 0.],
                [1., 0., 0.],
                [1., 1., 0.],
                [0., 0., 0.],
                [1., 1., 0.],
                [0., 1., 0.],
            ]
        );
    }

    #[test]
    fn deduplication_shares_corners() {
        let model = expand(
            "v 0 0 0\nv 1 0 0\nv 1 1 0\nv 0 1 0\nf 1 2 3 4\n",
            ModelOptions::default(),
        );

        assert_eq!(model.vertices().len(), 4);
        assert_eq!(model.vertex_indices(), [0, 1, 2, 0, 2, 3]);
    }

    const PENTAGON: &str = "v 0 0 0\nv 1 0 0\nv 2 1 0\nv 1 2 0\nv 0 1 0\nf 1 2 3 4 5\n";

    #[test]
    fn polygons_above_four_corners_are_dropped_by_default() {
        let model = expand(PENTAGON, ModelOptions::default());

        assert!(model.vertex_indices().is_empty());
        assert_eq!(model.submeshes()[0].index_count, 0);
    }

    #[test]
    fn fan_triangulation_is_opt_in() {
        let model = expand(
            PENTAGON,
            ModelOptions::default().with_triangulation(Triangulation::Fan),
        );

        assert_eq!(model.vertex_indices(), [0, 1, 2, 0, 2, 3, 0, 3, 4]);
    }

    #[test]
    fn points_and_lines_produce_no_corners() {
        let model = expand("v 0 0 0\nv 1 0 0\np 1\nl 1 2\n", ModelOptions::default());

        assert!(model.vertex_indices().is_empty());
    }

    #[test]
    fn explicit_attributes_and_flipped_v() {
        let model = expand(
            "v 0 0 0\nv 1 0 0\nv 0 1 0\n\
             vt 0 0.25\nvt 1 0\nvt 0 1\n\
             vn 0 0 -1\n\
             f 1/1/1 2/2/1 3/3\n",
            ModelOptions::default().with_flip_texture_v(true),
        );

        let vertices = model.vertices();
        assert_eq!(vertices[0].texture_coordinate(), [0., 0.75]);
        assert_eq!(vertices[1].texture_coordinate(), [1., 1.]);
        assert_eq!(vertices[0].normal(), [0., 0., -1.]);
        assert_eq!(vertices[1].normal(), [0., 0., -1.]);
        assert_eq!(vertices[2].normal(), [0., 0., 1.]);
    }

    #[test]
    fn one_submesh_per_mesh() {
        let model = expand(
            "v 0 0 0\nv 1 0 0\nv 0 1 0\nv 1 1 0\n\
             f 1 2 3\n\
             usemtl default\n\
             f 1 2 3 4\nf 2 4 3\n",
            ModelOptions::default().with_deduplicate_vertices(false),
        );

        let submeshes = model.submeshes();
        assert_eq!(submeshes.len(), 2);
        assert_eq!((submeshes[0].start_index, submeshes[0].index_count), (0, 3));
        assert_eq!((submeshes[1].start_index, submeshes[1].index_count), (3, 9));
        assert_eq!(model.submesh_indices(&submeshes[1]).len(), 9);
    }

    #[test]
    fn out_of_range_index_is_an_error() {
        let scene = parse_str("v 0 0 0\nv 1 0 0\nf 1 2 3\n").unwrap();
        let err = Model::try_from(&scene).unwrap_err();

        assert!(matches!(
            err,
            ModelBuildingError::IndexOutOfRange {
                face: FaceId { mesh: 0, face: 0 },
                attribute: VertexAttribute::Position,
                index: 3,
                len: 2,
            }
        ));
    }

    #[test]
    fn zero_index_is_an_error() {
        let scene = parse_str("v 0 0 0\nv 1 0 0\nv 0 1 0\nf 1 2 3/0\n").unwrap();

        assert!(matches!(
            Model::try_from(&scene),
            Err(ModelBuildingError::IndexOutOfRange {
                attribute: VertexAttribute::TextureCoordinate,
                index: 0,
                ..
            })
        ));
    }
}
