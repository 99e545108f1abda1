/// What to do with polygons of more than four corners.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Triangulation {
    /// Triangles and quads only, larger polygons are dropped.
    #[default]
    QuadsOnly,
    /// Convex fan around the first corner.
    Fan,
}

#[derive(Debug, Clone)]
pub struct ModelOptions {
    pub triangulation: Triangulation,
    /// Use `1 - v`, for image origins at the top left.
    pub flip_texture_v: bool,
    pub deduplicate_vertices: bool,
}

impl Default for ModelOptions {
    fn default() -> Self {
        Self {
            triangulation: Triangulation::default(),
            flip_texture_v: false,
            deduplicate_vertices: true,
        }
    }
}

impl ModelOptions {
    pub fn with_triangulation(mut self, triangulation: Triangulation) -> Self {
        self.triangulation = triangulation;
        self
    }

    pub fn with_flip_texture_v(mut self, flip_texture_v: bool) -> Self {
        self.flip_texture_v = flip_texture_v;
        self
    }

    pub fn with_deduplicate_vertices(mut self, deduplicate_vertices: bool) -> Self {
        self.deduplicate_vertices = deduplicate_vertices;
        self
    }
}
