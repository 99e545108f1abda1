use bytemuck::{Pod, Zeroable};

pub type Position = [f32; 3];
pub type Normal = [f32; 3];
pub type TextureCoordinate = [f32; 2];

/// One corner of the expanded model, laid out for direct upload.
#[derive(Debug, Clone, Copy, Pod, Zeroable)]
#[repr(C)]
pub struct Vertex {
    position: Position,
    normal: Normal,
    texture_coordinate: TextureCoordinate,
}

impl Vertex {
    fn to_tuple_of_bits(self) -> ([u32; 3], [u32; 3], [u32; 2]) {
        (
            self.position.map(f32::to_bits),
            self.normal.map(f32::to_bits),
            self.texture_coordinate.map(f32::to_bits),
        )
    }
}

impl std::hash::Hash for Vertex {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.to_tuple_of_bits().hash(state)
    }
}

impl PartialEq for Vertex {
    fn eq(&self, other: &Self) -> bool {
        self.to_tuple_of_bits() == other.to_tuple_of_bits()
    }
}

impl Eq for Vertex {}

impl Vertex {
    pub fn new(
        position: impl Into<Position>,
        normal: impl Into<Normal>,
        texture_coordinate: impl Into<TextureCoordinate>,
    ) -> Self {
        Self {
            position: position.into(),
            normal: normal.into(),
            texture_coordinate: texture_coordinate.into(),
        }
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn normal(&self) -> Normal {
        self.normal
    }

    pub fn texture_coordinate(&self) -> TextureCoordinate {
        self.texture_coordinate
    }
}

#[cfg(test)]
mod test {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn equality_is_bitwise() {
        let a = Vertex::new([0., 1., 2.], [0., 0., 1.], [0.5, 0.5]);
        let negative_zero = Vertex::new([-0., 1., 2.], [0., 0., 1.], [0.5, 0.5]);

        assert_eq!(a, Vertex::new([0., 1., 2.], [0., 0., 1.], [0.5, 0.5]));
        assert_ne!(a, negative_zero);
        assert_eq!(HashSet::from([a, a, negative_zero]).len(), 2);
    }

    #[test]
    fn tightly_packed() {
        assert_eq!(size_of::<Vertex>(), 8 * size_of::<f32>());
        let vertices = [Vertex::new([1., 2., 3.], [4., 5., 6.], [7., 8.])];
        let floats: &[f32] = bytemuck::cast_slice(&vertices);
        assert_eq!(floats, [1., 2., 3., 4., 5., 6., 7., 8.]);
    }
}
