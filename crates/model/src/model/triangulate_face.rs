use std::borrow::Cow;

use crate::scene::PrimitiveType;

use super::Triangulation;

const TRIANGLE: [usize; 3] = [0, 1, 2];
const QUAD: [usize; 6] = [0, 1, 2, 0, 2, 3];

/// Face corners to emit, in order, for a face of `corner_count` corners.
pub fn triangulate_face(
    corner_count: usize,
    primitive_type: PrimitiveType,
    triangulation: Triangulation,
) -> Cow<'static, [usize]> {
    match corner_count {
        3 => Cow::Borrowed(&TRIANGLE),
        4 => Cow::Borrowed(&QUAD),
        // TODO write an algorithm that works with concave polygons
        n if n > 4
            && triangulation == Triangulation::Fan
            && primitive_type == PrimitiveType::Polygon =>
        {
            (1..n - 1).flat_map(|i| [0, i, i + 1]).collect()
        }
        _ => Cow::Borrowed(&[]),
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn expansion_table() {
        for corner_count in [0, 1, 2, 5, 8] {
            assert!(
                triangulate_face(corner_count, PrimitiveType::Polygon, Triangulation::QuadsOnly)
                    .is_empty()
            );
        }
        assert_eq!(
            *triangulate_face(3, PrimitiveType::Polygon, Triangulation::QuadsOnly),
            [0, 1, 2]
        );
        assert_eq!(
            *triangulate_face(4, PrimitiveType::Polygon, Triangulation::QuadsOnly),
            [0, 1, 2, 0, 2, 3]
        );
    }

    #[test]
    fn fan_matches_quad_table() {
        let fan = (1..3).flat_map(|i| [0, i, i + 1]).collect::<Vec<_>>();
        assert_eq!(fan, QUAD);
        assert!(triangulate_face(6, PrimitiveType::Line, Triangulation::Fan).is_empty());
        assert_eq!(
            triangulate_face(6, PrimitiveType::Polygon, Triangulation::Fan).len(),
            12
        );
    }
}
