use std::fmt::Display;

use thiserror::Error;

use crate::{obj::ObjParsingError, scene::FaceId};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VertexAttribute {
    Position,
    TextureCoordinate,
    Normal,
}

impl Display for VertexAttribute {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Position => "vertex",
            Self::TextureCoordinate => "texture coordinate",
            Self::Normal => "normal",
        })
    }
}

#[derive(Debug, Error)]
pub enum ModelBuildingError {
    #[error(
        "face {} of mesh {}: {attribute} index {index} is out of range (1..={len})",
        face.face,
        face.mesh
    )]
    IndexOutOfRange {
        face: FaceId,
        attribute: VertexAttribute,
        index: u32,
        len: usize,
    },
    #[error("too many vertices for 32 bit indices")]
    TooManyVertices,
}

#[derive(Debug, Error)]
pub enum ModelLoadingError {
    #[error(transparent)]
    Parsing(#[from] ObjParsingError),
    #[error(transparent)]
    Building(#[from] ModelBuildingError),
}
