use super::MeshIndex;

pub type ObjectIndex = usize;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObjectKind {
    /// Created by an `o` directive, or implicitly for faces outside any object.
    Object,
    /// Created by a `g` directive.
    Group,
}

/// A named node of the scene.
///
/// Meshes and sub-objects are referenced by index into the scene's flat mesh
/// and object lists.
#[derive(Debug, Clone, PartialEq)]
pub struct Object {
    pub(crate) name: String,
    pub(crate) kind: ObjectKind,
    pub(crate) meshes: Vec<MeshIndex>,
    pub(crate) sub_objects: Vec<ObjectIndex>,
}

impl Object {
    pub(crate) fn new(name: impl Into<String>, kind: ObjectKind) -> Self {
        Self {
            name: name.into(),
            kind,
            meshes: Vec::new(),
            sub_objects: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> ObjectKind {
        self.kind
    }

    pub fn meshes(&self) -> &[MeshIndex] {
        &self.meshes
    }

    pub fn sub_objects(&self) -> &[ObjectIndex] {
        &self.sub_objects
    }
}
