use rs42::extensions::vec::TryPush;

use super::{ObjBuilder, ObjParsingErrorDetail};
use crate::{
    scene::{Face, FaceId, Group, Mesh, Object, ObjectIndex, ObjectKind},
    Warning,
};

/// Name of the object created for faces and materials that come before any
/// `o` or `g` directive.
pub const DEFAULT_OBJECT_NAME: &str = "defaultobject";

pub fn handle_object_line<'a>(
    components: &mut impl Iterator<Item = &'a str>,
    obj_builder: &mut ObjBuilder,
) -> Result<(), ObjParsingErrorDetail> {
    let Some(name) = components.next() else {
        return obj_builder.warn(Warning::MissingArgument {
            line: obj_builder.line_count,
            directive: "o".to_string(),
        });
    };

    let object_index = match obj_builder
        .scene
        .objects
        .iter()
        .position(|object| object.name() == name)
    {
        Some(object_index) => {
            obj_builder.reuse_object(object_index)?;
            object_index
        }
        None => obj_builder.create_object(name, ObjectKind::Object)?,
    };
    obj_builder.cursor.named_object = Some(object_index);
    Ok(())
}

pub fn handle_group_line<'a>(
    components: &mut impl Iterator<Item = &'a str>,
    obj_builder: &mut ObjBuilder,
) -> Result<(), ObjParsingErrorDetail> {
    let Some(name) = components.next() else {
        return obj_builder.warn(Warning::MissingArgument {
            line: obj_builder.line_count,
            directive: "g".to_string(),
        });
    };

    if obj_builder
        .cursor
        .active_group_name(&obj_builder.scene.groups)
        == Some(name)
    {
        return Ok(());
    }

    let groups = &mut obj_builder.scene.groups;
    let group_index = match groups.iter().position(|group| group.name() == name) {
        Some(group_index) => group_index,
        None => {
            groups.try_push(Group::new(name))?;
            groups.len() - 1
        }
    };
    obj_builder.cursor.group = Some(group_index);

    let object_index = obj_builder.create_object(name, ObjectKind::Group)?;
    if let Some(parent) = obj_builder
        .cursor
        .named_object
        .and_then(|parent| obj_builder.scene.objects.get_mut(parent))
    {
        parent.sub_objects.try_push(object_index)?;
    }
    Ok(())
}

impl ObjBuilder {
    /// Appends a face to the current mesh, creating the default object and a
    /// mesh first when needed, and records it in the active group.
    pub(super) fn push_face(&mut self, face: Face) -> Result<(), ObjParsingErrorDetail> {
        if self.cursor.object.is_none() {
            self.create_object(DEFAULT_OBJECT_NAME, ObjectKind::Object)?;
        }
        let mesh_index = match self.cursor.mesh {
            Some(mesh_index) => mesh_index,
            None => self.create_mesh()?,
        };

        let faces = &mut self.scene.meshes[mesh_index].faces;
        faces.try_push(face)?;
        let face_id = FaceId {
            mesh: mesh_index,
            face: faces.len() - 1,
        };

        if let Some(group) = self
            .cursor
            .group
            .and_then(|group| self.scene.groups.get_mut(group))
        {
            group.faces.try_push(face_id)?;
        }
        Ok(())
    }

    /// Creates an object with a first mesh inheriting the current material,
    /// and makes both current.
    pub(super) fn create_object(
        &mut self,
        name: &str,
        kind: ObjectKind,
    ) -> Result<ObjectIndex, ObjParsingErrorDetail> {
        self.scene.objects.try_push(Object::new(name, kind))?;
        let object_index = self.scene.objects.len() - 1;
        self.cursor.object = Some(object_index);
        self.create_mesh()?;

        log::debug!("Obj parser: line {}: new {kind:?} \"{name}\"", self.line_count);
        Ok(object_index)
    }

    /// Creates a mesh owned by the current object, inheriting the current
    /// material, and makes it current.
    pub(super) fn create_mesh(&mut self) -> Result<usize, ObjParsingErrorDetail> {
        self.scene.meshes.try_push(Mesh::new(self.cursor.material))?;
        let mesh_index = self.scene.meshes.len() - 1;

        if let Some(object) = self
            .cursor
            .object
            .and_then(|object| self.scene.objects.get_mut(object))
        {
            object.meshes.try_push(mesh_index)?;
        }
        self.cursor.mesh = Some(mesh_index);
        Ok(mesh_index)
    }

    /// Makes an existing object current again. Later faces go to its last
    /// mesh, or to a new one if that mesh uses another material.
    fn reuse_object(&mut self, object_index: ObjectIndex) -> Result<(), ObjParsingErrorDetail> {
        self.cursor.object = Some(object_index);
        self.cursor.mesh = self.scene.objects[object_index].meshes().last().copied();

        if let Some(material_index) = self.cursor.material {
            if self.needs_new_mesh(material_index) {
                self.create_mesh()?;
            }
        }
        Ok(())
    }
}
