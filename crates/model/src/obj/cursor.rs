use crate::scene::{Group, MaterialIndex, MeshIndex, ObjectIndex};

/// Where the parser currently adds things.
#[derive(Debug, Default)]
pub struct Cursor {
    pub object: Option<ObjectIndex>,
    pub mesh: Option<MeshIndex>,
    pub material: Option<MaterialIndex>,
    /// Index into the scene's groups.
    pub group: Option<usize>,
    /// The last object opened by an `o` directive, parent of later groups.
    pub named_object: Option<ObjectIndex>,
}

impl Cursor {
    pub fn active_group_name<'a>(&self, groups: &'a [Group]) -> Option<&'a str> {
        groups.get(self.group?).map(Group::name)
    }
}
