use std::{
    collections::TryReserveError,
    error::Error,
    fmt::{Debug, Display},
    io,
    num::{ParseFloatError, ParseIntError},
    path::PathBuf,
};

use thiserror::Error;

use crate::Warning;

/// A fatal parsing error, with the 1-based number and content of the line
/// that caused it when there is one.
pub struct ObjParsingError {
    pub(super) line: Option<(usize, String)>,
    pub(super) detail: ObjParsingErrorDetail,
}

#[derive(Debug, Error)]
pub enum ObjParsingErrorDetail {
    #[error("failed to open file: {0}")]
    FailedToOpenFile(#[source] io::Error),
    #[error("failed to read file: {0}")]
    FailedToReadFile(#[source] io::Error),
    #[error("failed to read material library \"{}\": {source}", path.display())]
    FailedToReadMaterialLibrary { path: PathBuf, source: io::Error },

    #[error("allocation failure: {0}")]
    AllocationFailure(#[from] TryReserveError),

    #[error("not enough components in vertex")]
    NotEnoughComponentsInVertex,
    #[error("invalid component \"{token}\" in vertex: {source}")]
    InvalidComponentInVertex {
        token: String,
        source: ParseFloatError,
    },

    #[error("not enough components in normal")]
    NotEnoughComponentsInNormal,
    #[error("invalid component \"{token}\" in normal: {source}")]
    InvalidComponentInNormal {
        token: String,
        source: ParseFloatError,
    },

    #[error("not enough components in texture coordinate")]
    NotEnoughComponentsInTexture,
    #[error("invalid component \"{token}\" in texture coordinate: {source}")]
    InvalidComponentInTexture {
        token: String,
        source: ParseFloatError,
    },

    #[error("invalid index \"{token}\" in face: {source}")]
    InvalidSubComponentInFace {
        token: String,
        source: ParseIntError,
    },
    #[error("unsupported token \"{token}\" in face")]
    TooManySubComponentsInFace { token: String },

    /// A recoverable problem, raised as an error by a strict parser.
    #[error("{0}")]
    Warning(Warning),
}

impl ObjParsingError {
    pub(super) fn without_line(detail: ObjParsingErrorDetail) -> Self {
        Self { line: None, detail }
    }

    pub fn line_number(&self) -> Option<usize> {
        self.line.as_ref().map(|(number, _)| *number)
    }

    pub fn line_content(&self) -> Option<&str> {
        self.line.as_ref().map(|(_, content)| content.as_str())
    }

    /// The directive of the faulty line, e.g. `"v"` or `"f"`.
    pub fn directive(&self) -> Option<&str> {
        self.line_content()?.split([' ', '\t']).find(|str| !str.is_empty())
    }

    pub fn detail(&self) -> &ObjParsingErrorDetail {
        &self.detail
    }

    pub fn into_detail(self) -> ObjParsingErrorDetail {
        self.detail
    }
}

impl Debug for ObjParsingError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if let Some(line) = self.line.as_ref() {
            return write!(
                f,
                "ObjParsingError {{\n\tline: {}\n\tline_content: \"{}\"\n\tdetails: {:?}\n}}",
                line.0, line.1, self.detail,
            );
        }
        write!(f, "ObjParsingError({:?})", self.detail)
    }
}

impl Display for ObjParsingError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if let Some((number, content)) = self.line.as_ref() {
            return write!(f, "line {number} (\"{content}\"): {}", self.detail);
        }
        write!(f, "{}", self.detail)
    }
}

impl Error for ObjParsingError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        Some(&self.detail)
    }
}
