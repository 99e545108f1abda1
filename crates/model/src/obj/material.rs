use std::{fs::File, io::BufReader};

use super::{object::DEFAULT_OBJECT_NAME, ObjBuilder, ObjParsingErrorDetail};
use crate::{
    mtl::MtlFile,
    scene::{MaterialIndex, ObjectKind, DEFAULT_MATERIAL_INDEX},
    Warning,
};

pub fn handle_usemtl_line<'a>(
    components: &mut impl Iterator<Item = &'a str>,
    obj_builder: &mut ObjBuilder,
) -> Result<(), ObjParsingErrorDetail> {
    let Some(name) = components.next() else {
        return obj_builder.warn(Warning::MissingArgument {
            line: obj_builder.line_count,
            directive: "usemtl".to_string(),
        });
    };

    let Some(material_index) = obj_builder.scene.materials.index_of(name) else {
        obj_builder.cursor.material = Some(DEFAULT_MATERIAL_INDEX);
        return obj_builder.warn(Warning::UnknownMaterial {
            line: obj_builder.line_count,
            name: name.to_string(),
        });
    };

    obj_builder.cursor.material = Some(material_index);
    if obj_builder.cursor.object.is_none() {
        obj_builder.create_object(DEFAULT_OBJECT_NAME, ObjectKind::Object)?;
    } else if obj_builder.needs_new_mesh(material_index) {
        obj_builder.create_mesh()?;
    }

    if let Some(mesh) = obj_builder
        .cursor
        .mesh
        .and_then(|mesh| obj_builder.scene.meshes.get_mut(mesh))
    {
        mesh.material_index = Some(material_index);
    }
    Ok(())
}

pub fn handle_mtllib_line<'a>(
    components: &mut impl Iterator<Item = &'a str>,
    obj_builder: &mut ObjBuilder,
) -> Result<(), ObjParsingErrorDetail> {
    let mut components = components.peekable();
    if components.peek().is_none() {
        return obj_builder.warn(Warning::MissingArgument {
            line: obj_builder.line_count,
            directive: "mtllib".to_string(),
        });
    }

    for file_name in components {
        let path = obj_builder.base_dir.join(file_name);
        if !path.is_file() {
            obj_builder.warn(Warning::MissingMaterialLibrary {
                line: obj_builder.line_count,
                path,
            })?;
            continue;
        }

        let read_error = |source| ObjParsingErrorDetail::FailedToReadMaterialLibrary {
            path: path.clone(),
            source,
        };
        let file = File::open(&path).map_err(read_error)?;
        let warnings = MtlFile {
            path: &path,
            base_dir: &obj_builder.base_dir,
        }
        .parse_into(BufReader::new(file), &mut obj_builder.scene.materials)
        .map_err(read_error)?;

        for warning in warnings {
            obj_builder.warn(warning)?;
        }
    }
    Ok(())
}

impl ObjBuilder {
    /// A material switch starts a new mesh unless the current one already
    /// uses that material.
    pub(super) fn needs_new_mesh(&self, material_index: MaterialIndex) -> bool {
        self.cursor
            .mesh
            .and_then(|mesh| self.scene.meshes.get(mesh))
            .map_or(true, |mesh| mesh.material_index() != Some(material_index))
    }
}

#[cfg(test)]
mod test {
    use crate::{obj::parse_str, Warning, DEFAULT_MATERIAL_INDEX};

    const TRIANGLE: &str = "v 0 0 0\nv 1 0 0\nv 0 1 0\n";

    #[test]
    fn unknown_material_falls_back_to_default() {
        let scene = parse_str(&format!("{TRIANGLE}usemtl ghost\nf 1 2 3\n")).unwrap();

        assert_eq!(
            scene.warnings(),
            [Warning::UnknownMaterial {
                line: 4,
                name: "ghost".to_string()
            }]
        );
        assert_eq!(scene.face_count(), 1);
        let face = &scene.meshes()[0].faces()[0];
        assert_eq!(face.material(), DEFAULT_MATERIAL_INDEX);
    }

    #[test]
    fn default_material_can_be_selected_by_name() {
        let scene = parse_str(&format!("{TRIANGLE}f 1 2 3\nusemtl default\nf 1 2 3\n")).unwrap();

        assert!(scene.warnings().is_empty());
        assert_eq!(scene.objects()[0].meshes(), [0, 1]);
        assert_eq!(scene.meshes()[0].material_index(), None);
        assert_eq!(scene.meshes()[1].material_index(), Some(DEFAULT_MATERIAL_INDEX));
    }

    #[test]
    fn usemtl_before_any_object_creates_default_object() {
        let scene = parse_str("usemtl default\n").unwrap();

        assert_eq!(scene.objects().len(), 1);
        assert_eq!(scene.objects()[0].name(), "defaultobject");
        assert_eq!(scene.meshes()[0].material_index(), Some(DEFAULT_MATERIAL_INDEX));
    }

    #[test]
    fn same_material_keeps_the_mesh() {
        let scene = parse_str(&format!(
            "{TRIANGLE}usemtl default\nf 1 2 3\nusemtl default\nf 1 2 3\n"
        ))
        .unwrap();

        assert_eq!(scene.meshes().len(), 1);
        assert_eq!(scene.meshes()[0].faces().len(), 2);
    }

    #[test]
    fn new_object_inherits_current_material() {
        let scene = parse_str(&format!(
            "{TRIANGLE}usemtl default\nf 1 2 3\no next\nf 1 2 3\n"
        ))
        .unwrap();

        assert_eq!(scene.meshes()[1].material_index(), Some(DEFAULT_MATERIAL_INDEX));
    }

    #[test]
    fn missing_library_is_a_warning() {
        let scene = parse_str(&format!("mtllib does_not_exist.mtl\n{TRIANGLE}f 1 2 3\n")).unwrap();

        assert_eq!(scene.face_count(), 1);
        assert!(matches!(
            &scene.warnings()[0],
            Warning::MissingMaterialLibrary { line: 1, path }
                if path.ends_with("does_not_exist.mtl")
        ));
    }

    #[test]
    fn mtllib_without_file_is_a_warning() {
        let scene = parse_str("mtllib\n").unwrap();

        assert!(matches!(
            &scene.warnings()[0],
            Warning::MissingArgument { directive, .. } if directive == "mtllib"
        ));
    }
}
