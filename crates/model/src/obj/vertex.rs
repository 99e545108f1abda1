use cgmath::Vector3;
use rs42::extensions::vec::TryPush;

use super::{parse_components::parse_float_components, ObjParsingErrorDetail};

pub fn parse_vertex_line<'a>(
    components: &mut impl Iterator<Item = &'a str>,
    vertices: &mut Vec<Vector3<f32>>,
) -> Result<(), ObjParsingErrorDetail> {
    let vertex = parse_float_components::<3>(
        components,
        ObjParsingErrorDetail::NotEnoughComponentsInVertex,
        |token, source| ObjParsingErrorDetail::InvalidComponentInVertex { token, source },
    )?;

    vertices
        .try_push(vertex.into())
        .map_err(ObjParsingErrorDetail::AllocationFailure)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn optional_w_is_ignored() {
        let mut vertices = Vec::new();
        parse_vertex_line(&mut "1 2 3 0.5".split(' '), &mut vertices).unwrap();

        assert_eq!(vertices, [Vector3::new(1., 2., 3.)]);
    }

    #[test]
    fn invalid_component() {
        let mut vertices = Vec::new();
        let err = parse_vertex_line(&mut "1 x 3".split(' '), &mut vertices).unwrap_err();

        assert!(matches!(
            err,
            ObjParsingErrorDetail::InvalidComponentInVertex { ref token, .. } if token == "x"
        ));
        assert!(vertices.is_empty());
    }
}
