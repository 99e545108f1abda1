mod parse_face_components;

use parse_face_components::parse_face_components;

use super::{ObjBuilder, ObjParsingErrorDetail};
use crate::{
    scene::{Face, PrimitiveType, DEFAULT_MATERIAL_INDEX},
    Warning,
};

#[derive(Default)]
struct FaceIndices {
    vertex_indices: Vec<u32>,
    texture_coordinate_indices: Vec<u32>,
    normal_indices: Vec<u32>,
}

pub fn parse_face_line<'a>(
    components: &mut impl Iterator<Item = &'a str>,
    primitive_type: PrimitiveType,
    obj_builder: &mut ObjBuilder,
) -> Result<(), ObjParsingErrorDetail> {
    let indices = parse_face_components(components)?;

    if indices.vertex_indices.is_empty() {
        return obj_builder.warn(Warning::EmptyFace {
            line: obj_builder.line_count,
        });
    }

    let face = Face::new(
        primitive_type,
        indices.vertex_indices,
        indices.texture_coordinate_indices,
        indices.normal_indices,
        obj_builder.cursor.material.unwrap_or(DEFAULT_MATERIAL_INDEX),
    );
    obj_builder.push_face(face)
}

#[cfg(test)]
mod test {
    use crate::{obj::parse_str, scene::PrimitiveType, ObjParsingErrorDetail, Warning};

    #[test]
    fn all_corner_forms() {
        let scene = parse_str(
            "f 1 2 3\n\
             f 1/1 2/2 3/3\n\
             f 1//1 2//2 3//3\n\
             f 1/1/1 2/2/2 3/3/3 4/4/4\n",
        )
        .unwrap();
        let faces = scene.meshes()[0].faces();

        assert_eq!(faces.len(), 4);
        assert_eq!(faces[0].vertex_indices(), [1, 2, 3]);
        assert!(faces[0].texture_coordinate_indices().is_empty());
        assert!(faces[0].normal_indices().is_empty());
        assert_eq!(faces[1].texture_coordinate_indices(), [1, 2, 3]);
        assert!(faces[1].normal_indices().is_empty());
        assert!(faces[2].texture_coordinate_indices().is_empty());
        assert_eq!(faces[2].normal_indices(), [1, 2, 3]);
        assert_eq!(faces[3].vertex_indices(), [1, 2, 3, 4]);
        assert_eq!(faces[3].normal_indices(), [1, 2, 3, 4]);
    }

    #[test]
    fn primitive_types() {
        let scene = parse_str("p 1\nl 1 2\nf 1 2 3\n").unwrap();
        let faces = scene.meshes()[0].faces();

        assert_eq!(faces[0].primitive_type(), PrimitiveType::Point);
        assert_eq!(faces[1].primitive_type(), PrimitiveType::Line);
        assert_eq!(faces[2].primitive_type(), PrimitiveType::Polygon);
    }

    #[test]
    fn empty_face_is_dropped_with_a_warning() {
        let scene = parse_str("f\nf //1\nf 1 2 3\n").unwrap();

        assert_eq!(scene.face_count(), 1);
        assert_eq!(
            scene.warnings(),
            [Warning::EmptyFace { line: 1 }, Warning::EmptyFace { line: 2 }]
        );
    }

    #[test]
    fn too_many_sub_components_is_fatal() {
        let err = parse_str("v 0 0 0\nf 1/1/1/1 2 3\n").unwrap_err();

        assert_eq!(err.line_number(), Some(2));
        assert!(matches!(
            err.detail(),
            ObjParsingErrorDetail::TooManySubComponentsInFace { token } if token == "1/1/1/1"
        ));
    }

    #[test]
    fn first_face_creates_default_object() {
        let scene = parse_str("f 1 2 3\n").unwrap();

        assert_eq!(scene.objects().len(), 1);
        assert_eq!(scene.objects()[0].name(), "defaultobject");
        assert_eq!(scene.objects()[0].meshes(), [0]);
    }
}
