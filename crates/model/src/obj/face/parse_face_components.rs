use rs42::extensions::vec::TryPush;

use crate::obj::ObjParsingErrorDetail;

use super::FaceIndices;

pub fn parse_face_components<'a>(
    components: &mut impl Iterator<Item = &'a str>,
) -> Result<FaceIndices, ObjParsingErrorDetail> {
    components.try_fold(FaceIndices::default(), |mut face, component| {
        parse_face_sub_components(&mut face, component)?;
        Ok(face)
    })
}

/// Splits a `v`, `v/vt`, `v//vn` or `v/vt/vn` corner. Empty fields are
/// skipped.
fn parse_face_sub_components(
    face: &mut FaceIndices,
    component: &str,
) -> Result<(), ObjParsingErrorDetail> {
    let mut sub_components = component.split('/');

    for dest_index_vec in [
        &mut face.vertex_indices,
        &mut face.texture_coordinate_indices,
        &mut face.normal_indices,
    ] {
        let Some(sub_component) = sub_components.next() else {
            return Ok(());
        };
        push_face_sub_component_to_index_vec(sub_component, dest_index_vec)?;
    }

    if sub_components.next().is_some() {
        return Err(ObjParsingErrorDetail::TooManySubComponentsInFace {
            token: component.to_string(),
        });
    }
    Ok(())
}

fn push_face_sub_component_to_index_vec(
    sub_component: &str,
    dest_index_vec: &mut Vec<u32>,
) -> Result<(), ObjParsingErrorDetail> {
    if sub_component.is_empty() {
        return Ok(());
    }
    let index = sub_component.parse::<u32>().map_err(|source| {
        ObjParsingErrorDetail::InvalidSubComponentInFace {
            token: sub_component.to_string(),
            source,
        }
    })?;
    dest_index_vec
        .try_push(index)
        .map_err(ObjParsingErrorDetail::AllocationFailure)
}
