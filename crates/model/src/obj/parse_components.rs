use std::num::ParseFloatError;

use super::ObjParsingErrorDetail;

/// Parses the first `N` components of a line as floats. Trailing components
/// (the optional `w` of vertices and texture coordinates, vertex colors...)
/// are left in the iterator.
pub fn parse_float_components<'a, const N: usize>(
    components: &mut impl Iterator<Item = &'a str>,
    not_enough_components: ObjParsingErrorDetail,
    invalid_component: fn(String, ParseFloatError) -> ObjParsingErrorDetail,
) -> Result<[f32; N], ObjParsingErrorDetail> {
    let mut values = [0.; N];

    for value in values.iter_mut() {
        let Some(str) = components.next() else {
            return Err(not_enough_components);
        };
        *value = str
            .parse::<f32>()
            .map_err(|err| invalid_component(str.to_string(), err))?;
    }

    Ok(values)
}
