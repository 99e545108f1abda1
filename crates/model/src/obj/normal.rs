use cgmath::Vector3;
use rs42::extensions::vec::TryPush;

use super::{parse_components::parse_float_components, ObjParsingErrorDetail};

/// Normals are stored as written, they are not normalized.
pub fn parse_normal_line<'a>(
    components: &mut impl Iterator<Item = &'a str>,
    normals: &mut Vec<Vector3<f32>>,
) -> Result<(), ObjParsingErrorDetail> {
    let normal = parse_float_components::<3>(
        components,
        ObjParsingErrorDetail::NotEnoughComponentsInNormal,
        |token, source| ObjParsingErrorDetail::InvalidComponentInNormal { token, source },
    )?;

    normals
        .try_push(normal.into())
        .map_err(ObjParsingErrorDetail::AllocationFailure)
}
