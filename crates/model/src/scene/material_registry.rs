use std::collections::HashMap;

use super::Material;

pub type MaterialIndex = usize;

pub const DEFAULT_MATERIAL_NAME: &str = "default";
pub const DEFAULT_MATERIAL_INDEX: MaterialIndex = 0;

/// Materials by name, in material library order.
///
/// The default material is always at [`DEFAULT_MATERIAL_INDEX`].
#[derive(Debug, Clone)]
pub struct MaterialRegistry {
    materials: Vec<Material>,
    indices: HashMap<String, MaterialIndex>,
}

impl Default for MaterialRegistry {
    fn default() -> Self {
        Self {
            materials: vec![Material::new(DEFAULT_MATERIAL_NAME)],
            indices: HashMap::from([(DEFAULT_MATERIAL_NAME.to_string(), DEFAULT_MATERIAL_INDEX)]),
        }
    }
}

impl MaterialRegistry {
    pub fn index_of(&self, name: &str) -> Option<MaterialIndex> {
        self.indices.get(name).copied()
    }

    pub fn get(&self, index: MaterialIndex) -> Option<&Material> {
        self.materials.get(index)
    }

    pub fn by_name(&self, name: &str) -> Option<&Material> {
        self.get(self.index_of(name)?)
    }

    pub fn default_material(&self) -> &Material {
        &self.materials[DEFAULT_MATERIAL_INDEX]
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Material> {
        self.materials.iter()
    }

    pub fn len(&self) -> usize {
        self.materials.len()
    }

    pub fn is_empty(&self) -> bool {
        self.materials.is_empty()
    }

    pub(crate) fn get_mut(&mut self, index: MaterialIndex) -> Option<&mut Material> {
        self.materials.get_mut(index)
    }

    /// Returns the index of the material called `name`, appending a fresh one
    /// if needed. The boolean is `true` when the material already existed.
    pub(crate) fn get_or_insert(&mut self, name: &str) -> (MaterialIndex, bool) {
        if let Some(index) = self.index_of(name) {
            return (index, true);
        }
        let index = self.materials.len();
        self.materials.push(Material::new(name));
        self.indices.insert(name.to_string(), index);
        (index, false)
    }
}

impl<'a> IntoIterator for &'a MaterialRegistry {
    type Item = &'a Material;
    type IntoIter = std::slice::Iter<'a, Material>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
