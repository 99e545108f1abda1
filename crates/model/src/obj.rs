mod cursor;
mod errors;
mod face;
mod handle_unrecognized_line;
mod load_options;
mod material;
mod normal;
mod object;
mod parse_components;
mod texture;
mod vertex;

pub use errors::{ObjParsingError, ObjParsingErrorDetail};
pub use load_options::LoadOptions;

use cursor::Cursor;
use face::parse_face_line;
use handle_unrecognized_line::handle_unrecognized_line;
use material::{handle_mtllib_line, handle_usemtl_line};
use normal::parse_normal_line;
use object::{handle_group_line, handle_object_line};
use texture::parse_texture_line;
use vertex::parse_vertex_line;

use std::{
    fs::File,
    io::{BufRead, BufReader, Read},
    path::{Path, PathBuf},
};

use crate::{lossy_lines::lossy_lines, scene::PrimitiveType, Scene, Warning};

pub struct ObjFile<'a>(pub &'a str);

/// Loads obj files into [`Scene`]s.
#[derive(Debug, Clone, Default)]
pub struct ObjParser {
    options: LoadOptions,
}

struct ObjBuilder {
    scene: Scene,
    cursor: Cursor,
    base_dir: PathBuf,
    strict: bool,
    line_count: usize,
}

impl ObjParser {
    pub fn new(options: LoadOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &LoadOptions {
        &self.options
    }

    /// Parses the obj file at `path`. Without a configured base directory,
    /// material libraries are looked up next to the file.
    pub fn parse_file(&self, path: impl AsRef<Path>) -> Result<Scene, ObjParsingError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|err| {
            ObjParsingError::without_line(ObjParsingErrorDetail::FailedToOpenFile(err))
        })?;

        let base_dir = self
            .options
            .base_dir
            .clone()
            .unwrap_or_else(|| path.parent().map(Path::to_path_buf).unwrap_or_default());
        let name = path
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_default();

        self.parse_with_base_dir(BufReader::new(file), name, base_dir)
    }

    /// Parses obj text from any reader. Without a configured base directory,
    /// material libraries are looked up in the working directory.
    pub fn parse(&self, reader: impl BufRead, name: &str) -> Result<Scene, ObjParsingError> {
        let base_dir = self
            .options
            .base_dir
            .clone()
            .unwrap_or_else(|| PathBuf::from("."));
        self.parse_with_base_dir(reader, name.to_string(), base_dir)
    }

    fn parse_with_base_dir(
        &self,
        reader: impl BufRead,
        name: String,
        base_dir: PathBuf,
    ) -> Result<Scene, ObjParsingError> {
        let mut obj_builder = ObjBuilder {
            scene: Scene::new(name),
            cursor: Cursor::default(),
            base_dir,
            strict: self.options.strict,
            line_count: 0,
        };

        for (line_index, line) in lossy_lines(reader).enumerate() {
            let line_count = line_index + 1;
            let line = line.map_err(|err| {
                ObjParsingError::without_line(ObjParsingErrorDetail::FailedToReadFile(err))
            })?;

            obj_builder.line_count = line_count;
            parse_line(&line, &mut obj_builder).map_err(|err| ObjParsingError {
                line: Some((line_count, line)),
                detail: err,
            })?;
        }

        Ok(obj_builder.build())
    }
}

impl TryFrom<ObjFile<'_>> for Scene {
    type Error = ObjParsingError;

    fn try_from(file_name: ObjFile) -> Result<Self, Self::Error> {
        ObjParser::default().parse_file(file_name.0)
    }
}

impl<R> TryFrom<BufReader<R>> for Scene
where
    R: Read,
{
    type Error = ObjParsingError;

    fn try_from(buf_reader: BufReader<R>) -> Result<Self, ObjParsingError> {
        ObjParser::default().parse(buf_reader, "")
    }
}

impl ObjBuilder {
    fn build(self) -> Scene {
        let scene = self.scene;
        log::info!(
            "Loaded obj \"{}\": {} vertices, {} texture coordinates, {} normals, \
             {} objects, {} meshes, {} faces, {} materials, {} warnings",
            scene.name,
            scene.vertices.len(),
            scene.texture_coordinates.len(),
            scene.normals.len(),
            scene.objects.len(),
            scene.meshes.len(),
            scene.face_count(),
            scene.materials.len(),
            scene.warnings.len(),
        );
        scene
    }

    /// Records a recoverable problem, or fails with it in strict mode.
    fn warn(&mut self, warning: Warning) -> Result<(), ObjParsingErrorDetail> {
        if self.strict {
            return Err(ObjParsingErrorDetail::Warning(warning));
        }
        log::warn!("{warning}");
        self.scene.warnings.push(warning);
        Ok(())
    }
}

fn parse_line(line: &str, obj_builder: &mut ObjBuilder) -> Result<(), ObjParsingErrorDetail> {
    let mut split = line.split([' ', '\t']).filter(|str| !str.is_empty());
    let Some(first_word) = split.next() else {
        return Ok(());
    };

    match first_word {
        "v" => parse_vertex_line(&mut split, &mut obj_builder.scene.vertices),
        "vt" => parse_texture_line(&mut split, &mut obj_builder.scene.texture_coordinates),
        "vn" => parse_normal_line(&mut split, &mut obj_builder.scene.normals),
        "f" => parse_face_line(&mut split, PrimitiveType::Polygon, obj_builder),
        "l" => parse_face_line(&mut split, PrimitiveType::Line, obj_builder),
        "p" => parse_face_line(&mut split, PrimitiveType::Point, obj_builder),
        "#" => Ok(()),
        "usemtl" => handle_usemtl_line(&mut split, obj_builder),
        "mtllib" => handle_mtllib_line(&mut split, obj_builder),
        "g" => handle_group_line(&mut split, obj_builder),
        "o" => handle_object_line(&mut split, obj_builder),
        // Smoothing groups and merging groups are accepted but not used
        "s" | "mg" => Ok(()),
        _ => {
            handle_unrecognized_line(first_word, obj_builder.line_count, line);
            Ok(())
        }
    }
}

#[cfg(test)]
pub(crate) fn parse_str(obj: &str) -> Result<Scene, ObjParsingError> {
    ObjParser::default().parse(obj.as_bytes(), "test")
}
