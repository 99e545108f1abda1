use std::path::PathBuf;

#[derive(Debug, Clone, Default)]
pub struct LoadOptions {
    /// Directory `mtllib` files and texture maps are resolved against.
    pub base_dir: Option<PathBuf>,
    /// Fail on the first recoverable problem instead of warning about it.
    pub strict: bool,
}

impl LoadOptions {
    pub fn with_base_dir(mut self, base_dir: impl Into<PathBuf>) -> Self {
        self.base_dir = Some(base_dir.into());
        self
    }

    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }
}
