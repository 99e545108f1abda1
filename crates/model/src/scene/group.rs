use super::FaceId;

/// Faces read while a `g` directive was active.
#[derive(Debug, Clone, PartialEq)]
pub struct Group {
    pub(crate) name: String,
    pub(crate) faces: Vec<FaceId>,
}

impl Group {
    pub(crate) fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            faces: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn faces(&self) -> &[FaceId] {
        &self.faces
    }
}
