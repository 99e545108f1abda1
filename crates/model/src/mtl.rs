mod texture_map;

use texture_map::parse_texture_map;

use std::{
    io::{self, BufRead},
    path::{Path, PathBuf},
};

use crate::{
    lossy_lines::lossy_lines,
    scene::{IlluminationModel, MaterialIndex, MaterialRegistry, TextureMap, TextureType},
    Warning,
};

/// A material library being imported into a [`MaterialRegistry`].
pub struct MtlFile<'a> {
    /// Where the library was found, used to locate warnings.
    pub path: &'a Path,
    /// Directory texture maps are resolved against.
    pub base_dir: &'a Path,
}

struct MtlBuilder<'a> {
    library: PathBuf,
    base_dir: &'a Path,
    materials: &'a mut MaterialRegistry,
    current: Option<MaterialIndex>,
    line_count: usize,
    warnings: Vec<Warning>,
}

enum Statement {
    Ambient([f32; 3]),
    Diffuse([f32; 3]),
    Specular([f32; 3]),
    Emissive([f32; 3]),
    Alpha(f32),
    Shininess(f32),
    IndexOfRefraction(f32),
    Illumination(IlluminationModel),
    Texture(TextureType, TextureMap),
}

struct InvalidStatement;

impl MtlFile<'_> {
    /// Adds the materials of the library to `materials`. Malformed
    /// statements are skipped and reported in the returned warnings; only
    /// reading failures are errors.
    pub fn parse_into(
        &self,
        reader: impl BufRead,
        materials: &mut MaterialRegistry,
    ) -> io::Result<Vec<Warning>> {
        let mut mtl_builder = MtlBuilder {
            library: self.path.to_path_buf(),
            base_dir: self.base_dir,
            materials,
            current: None,
            line_count: 0,
            warnings: Vec::new(),
        };

        for (line_index, line) in lossy_lines(reader).enumerate() {
            let line = line?;
            mtl_builder.line_count = line_index + 1;
            if parse_line(&line, &mut mtl_builder).is_err() {
                mtl_builder.push_warning(|library, line_count| Warning::InvalidMaterialStatement {
                    library,
                    line: line_count,
                    statement: line.trim().to_string(),
                });
            }
        }

        log::debug!(
            "Mtl parser: \"{}\" loaded, {} materials registered",
            self.path.display(),
            mtl_builder.materials.len(),
        );
        Ok(mtl_builder.warnings)
    }
}

impl MtlBuilder<'_> {
    fn push_warning(&mut self, warning: impl FnOnce(PathBuf, usize) -> Warning) {
        self.warnings.push(warning(self.library.clone(), self.line_count));
    }

    fn new_material(&mut self, name: &str) {
        let (index, existed) = self.materials.get_or_insert(name);
        if existed {
            self.push_warning(|library, line| Warning::DuplicateMaterial {
                library,
                line,
                name: name.to_string(),
            });
        }
        self.current = Some(index);
    }

    fn apply(&mut self, statement: Statement, line: &str) {
        let Some(material) = self
            .current
            .and_then(|current| self.materials.get_mut(current))
        else {
            self.push_warning(|library, line_count| Warning::StatementOutsideMaterial {
                library,
                line: line_count,
                statement: line.trim().to_string(),
            });
            return;
        };

        match statement {
            Statement::Ambient(color) => material.ambient = color,
            Statement::Diffuse(color) => material.diffuse = color,
            Statement::Specular(color) => material.specular = color,
            Statement::Emissive(color) => material.emissive = color,
            Statement::Alpha(alpha) => material.alpha = alpha,
            Statement::Shininess(shininess) => material.shininess = shininess,
            Statement::IndexOfRefraction(ior) => material.index_of_refraction = ior,
            Statement::Illumination(model) => material.illumination_model = model,
            Statement::Texture(texture_type, texture) => {
                material.set_texture(texture_type, texture)
            }
        }
    }
}

fn parse_line(line: &str, mtl_builder: &mut MtlBuilder) -> Result<(), InvalidStatement> {
    let mut split = line.split([' ', '\t']).filter(|str| !str.is_empty());
    let Some(keyword) = split.next() else {
        return Ok(());
    };
    if keyword.starts_with('#') {
        return Ok(());
    }

    if keyword == "newmtl" {
        let name = split.next().ok_or(InvalidStatement)?;
        mtl_builder.new_material(name);
        return Ok(());
    }

    match parse_statement(keyword, &mut split, mtl_builder.base_dir)? {
        Some(statement) => mtl_builder.apply(statement, line),
        None => log::debug!(
            "Mtl parser: {}:{} (\"{line}\"): \"{keyword}\" is not supported",
            mtl_builder.library.display(),
            mtl_builder.line_count,
        ),
    }
    Ok(())
}

fn parse_statement<'a>(
    keyword: &str,
    components: &mut impl Iterator<Item = &'a str>,
    base_dir: &Path,
) -> Result<Option<Statement>, InvalidStatement> {
    let statement = match keyword {
        "Ka" => Statement::Ambient(parse_color(components)?),
        "Kd" => Statement::Diffuse(parse_color(components)?),
        "Ks" => Statement::Specular(parse_color(components)?),
        "Ke" => Statement::Emissive(parse_color(components)?),
        "d" => Statement::Alpha(parse_float(components)?),
        "Tr" => Statement::Alpha(1. - parse_float(components)?),
        "Ns" => Statement::Shininess(parse_float(components)?),
        "Ni" => Statement::IndexOfRefraction(parse_float(components)?),
        "illum" => {
            let code = components
                .next()
                .and_then(|str| str.parse::<i32>().ok())
                .ok_or(InvalidStatement)?;
            Statement::Illumination(code.into())
        }
        _ => {
            let Some(texture_type) = texture_type_of(keyword) else {
                return Ok(None);
            };
            let texture = parse_texture_map(components, base_dir).ok_or(InvalidStatement)?;
            Statement::Texture(texture_type, texture)
        }
    };
    Ok(Some(statement))
}

fn texture_type_of(keyword: &str) -> Option<TextureType> {
    let texture_type = match keyword {
        "map_Kd" => TextureType::Diffuse,
        "map_Ka" => TextureType::Ambient,
        "map_Ks" => TextureType::Specular,
        "map_Ke" | "map_emissive" => TextureType::Emissive,
        "map_bump" | "map_Bump" | "bump" => TextureType::Bump,
        "map_Kn" | "norm" => TextureType::Normal,
        "map_Ns" | "map_ns" => TextureType::Specularity,
        "map_d" => TextureType::Opacity,
        "map_disp" | "disp" => TextureType::Displacement,
        _ => return None,
    };
    Some(texture_type)
}

fn parse_float<'a>(
    components: &mut impl Iterator<Item = &'a str>,
) -> Result<f32, InvalidStatement> {
    components
        .next()
        .and_then(|str| str.parse::<f32>().ok())
        .ok_or(InvalidStatement)
}

/// `r g b`, or a single value used for the three channels.
fn parse_color<'a>(
    components: &mut impl Iterator<Item = &'a str>,
) -> Result<[f32; 3], InvalidStatement> {
    let r = parse_float(components)?;
    let mut components = components.peekable();
    if components.peek().is_none() {
        return Ok([r; 3]);
    }
    Ok([r, parse_float(&mut components)?, parse_float(&mut components)?])
}
