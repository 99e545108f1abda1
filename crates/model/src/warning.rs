use std::path::PathBuf;

use thiserror::Error;

/// Recoverable problems found while loading. The parse carries on after
/// each of them, using the documented fallback.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Warning {
    #[error("line {line}: ignoring empty face")]
    EmptyFace { line: usize },

    #[error("line {line}: failed to locate material \"{name}\", using the default material")]
    UnknownMaterial { line: usize, name: String },

    #[error("line {line}: unable to locate material library \"{}\"", path.display())]
    MissingMaterialLibrary { line: usize, path: PathBuf },

    #[error("line {line}: \"{directive}\" is missing its argument")]
    MissingArgument { line: usize, directive: String },

    #[error("{}:{line}: material \"{name}\" is defined again, updating it", library.display())]
    DuplicateMaterial {
        library: PathBuf,
        line: usize,
        name: String,
    },

    #[error("{}:{line}: invalid statement \"{statement}\"", library.display())]
    InvalidMaterialStatement {
        library: PathBuf,
        line: usize,
        statement: String,
    },

    #[error("{}:{line}: \"{statement}\" appears before any newmtl", library.display())]
    StatementOutsideMaterial {
        library: PathBuf,
        line: usize,
        statement: String,
    },
}
