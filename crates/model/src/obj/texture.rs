use cgmath::Vector2;
use rs42::extensions::vec::TryPush;

use super::{parse_components::parse_float_components, ObjParsingErrorDetail};

pub fn parse_texture_line<'a>(
    components: &mut impl Iterator<Item = &'a str>,
    textures: &mut Vec<Vector2<f32>>,
) -> Result<(), ObjParsingErrorDetail> {
    let texture = parse_float_components::<2>(
        components,
        ObjParsingErrorDetail::NotEnoughComponentsInTexture,
        |token, source| ObjParsingErrorDetail::InvalidComponentInTexture { token, source },
    )?;

    textures
        .try_push(texture.into())
        .map_err(ObjParsingErrorDetail::AllocationFailure)
}
