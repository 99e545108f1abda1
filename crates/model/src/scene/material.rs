use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextureType {
    Diffuse,
    Specular,
    Ambient,
    Emissive,
    Bump,
    Normal,
    Specularity,
    Opacity,
    Displacement,
}

impl TextureType {
    pub const COUNT: usize = 9;

    pub const ALL: [TextureType; Self::COUNT] = [
        TextureType::Diffuse,
        TextureType::Specular,
        TextureType::Ambient,
        TextureType::Emissive,
        TextureType::Bump,
        TextureType::Normal,
        TextureType::Specularity,
        TextureType::Opacity,
        TextureType::Displacement,
    ];
}

/// A texture referenced by a material. Image decoding is left to the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextureMap {
    /// The file name as written in the material library.
    pub file_name: String,
    /// `file_name` resolved against the loader's base directory.
    pub path: PathBuf,
    pub clamp: bool,
}

/// The `illum` statement of a material library.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IlluminationModel {
    ColorOnAmbientOff,
    ColorOnAmbientOn,
    HighlightOn,
    ReflectionOnRayTraceOn,
    GlassOnRayTraceOn,
    FresnelOnRayTraceOn,
    RefractionOnFresnelOffRayTraceOn,
    RefractionOnFresnelOnRayTraceOn,
    ReflectionOnRayTraceOff,
    GlassOnRayTraceOff,
    CastShadowsOntoInvisibleSurfaces,
    Other(i32),
}

impl From<i32> for IlluminationModel {
    fn from(code: i32) -> Self {
        match code {
            0 => Self::ColorOnAmbientOff,
            1 => Self::ColorOnAmbientOn,
            2 => Self::HighlightOn,
            3 => Self::ReflectionOnRayTraceOn,
            4 => Self::GlassOnRayTraceOn,
            5 => Self::FresnelOnRayTraceOn,
            6 => Self::RefractionOnFresnelOffRayTraceOn,
            7 => Self::RefractionOnFresnelOnRayTraceOn,
            8 => Self::ReflectionOnRayTraceOff,
            9 => Self::GlassOnRayTraceOff,
            10 => Self::CastShadowsOntoInvisibleSurfaces,
            other => Self::Other(other),
        }
    }
}

impl IlluminationModel {
    pub fn code(self) -> i32 {
        match self {
            Self::ColorOnAmbientOff => 0,
            Self::ColorOnAmbientOn => 1,
            Self::HighlightOn => 2,
            Self::ReflectionOnRayTraceOn => 3,
            Self::GlassOnRayTraceOn => 4,
            Self::FresnelOnRayTraceOn => 5,
            Self::RefractionOnFresnelOffRayTraceOn => 6,
            Self::RefractionOnFresnelOnRayTraceOn => 7,
            Self::ReflectionOnRayTraceOff => 8,
            Self::GlassOnRayTraceOff => 9,
            Self::CastShadowsOntoInvisibleSurfaces => 10,
            Self::Other(code) => code,
        }
    }

    /// Models 0 and 1 have no specular term.
    pub fn has_specular_highlights(self) -> bool {
        !matches!(self, Self::ColorOnAmbientOff | Self::ColorOnAmbientOn)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Material {
    pub(crate) name: String,
    pub ambient: [f32; 3],
    pub diffuse: [f32; 3],
    pub specular: [f32; 3],
    pub emissive: [f32; 3],
    pub alpha: f32,
    pub shininess: f32,
    pub illumination_model: IlluminationModel,
    pub index_of_refraction: f32,
    pub(crate) textures: [Option<TextureMap>; TextureType::COUNT],
}

impl Material {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ambient: [0.; 3],
            diffuse: [0.6; 3],
            specular: [0.; 3],
            emissive: [0.; 3],
            alpha: 1.,
            shininess: 0.,
            illumination_model: IlluminationModel::ColorOnAmbientOn,
            index_of_refraction: 1.,
            textures: Default::default(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn texture(&self, texture_type: TextureType) -> Option<&TextureMap> {
        self.textures[texture_type as usize].as_ref()
    }

    pub fn set_texture(&mut self, texture_type: TextureType, texture: TextureMap) {
        self.textures[texture_type as usize] = Some(texture);
    }

    /// Every texture this material references, with its channel.
    pub fn textures(&self) -> impl Iterator<Item = (TextureType, &TextureMap)> {
        TextureType::ALL
            .into_iter()
            .filter_map(|texture_type| Some((texture_type, self.texture(texture_type)?)))
    }
}
