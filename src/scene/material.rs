//! Renderer-side materials with fixed shading channels.

use std::sync::Arc;

/// A decoded texture bitmap, RGBA8, shared between material channels via
/// `Arc` so cached images are never duplicated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextureImage {
    pub width: u32,
    pub height: u32,
    /// `width * height * 4` bytes, row-major.
    pub data: Vec<u8>,
}

/// What a material channel samples: a flat color or a texture.
#[derive(Debug, Clone)]
pub enum ChannelContents {
    Color([f32; 4]),
    Image(Arc<TextureImage>),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WrapMode {
    #[default]
    Repeat,
    Clamp,
    Mirror,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FilterMode {
    #[default]
    Linear,
    Nearest,
}

/// How a material is composited over what is behind it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BlendMode {
    #[default]
    Alpha,
    Additive,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LightingModel {
    #[default]
    Blinn,
    Lambert,
    Phong,
}

/// One shading channel: contents plus sampling state.
#[derive(Debug, Clone)]
pub struct MaterialChannel {
    pub contents: ChannelContents,
    pub wrap_s: WrapMode,
    pub wrap_t: WrapMode,
    pub min_filter: FilterMode,
    pub mag_filter: FilterMode,
    pub mip_filter: FilterMode,
    pub intensity: f32,
    pub mapping_channel: u32,
}

impl MaterialChannel {
    /// Channel with default sampling: repeat wrap, linear filters,
    /// intensity 1, UV set 0.
    pub fn new(contents: ChannelContents) -> Self {
        Self {
            contents,
            wrap_s: WrapMode::Repeat,
            wrap_t: WrapMode::Repeat,
            min_filter: FilterMode::Linear,
            mag_filter: FilterMode::Linear,
            mip_filter: FilterMode::Linear,
            intensity: 1.0,
            mapping_channel: 0,
        }
    }

    pub fn color(&self) -> Option<[f32; 4]> {
        match self.contents {
            ChannelContents::Color(rgba) => Some(rgba),
            ChannelContents::Image(_) => None,
        }
    }

    pub fn image(&self) -> Option<&Arc<TextureImage>> {
        match &self.contents {
            ChannelContents::Image(image) => Some(image),
            ChannelContents::Color(_) => None,
        }
    }
}

/// A resolved material: every channel the renderer understands, plus the
/// scalar surface parameters carried alongside them.
#[derive(Debug, Clone, Default)]
pub struct Material {
    pub name: String,
    pub diffuse: Option<MaterialChannel>,
    pub specular: Option<MaterialChannel>,
    pub ambient: Option<MaterialChannel>,
    pub emission: Option<MaterialChannel>,
    pub reflective: Option<MaterialChannel>,
    pub transparent: Option<MaterialChannel>,
    pub normal: Option<MaterialChannel>,
    pub displacement: Option<MaterialChannel>,
    pub ambient_occlusion: Option<MaterialChannel>,
    pub multiply: Option<MaterialChannel>,
    pub shininess: f32,
    pub double_sided: bool,
    pub blend_mode: BlendMode,
    pub lighting_model: LightingModel,
}

impl Material {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }
}
