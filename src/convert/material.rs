//! Material resolution: texture slots to renderer channels.
//!
//! Each texture slot resolves to either a flat color (when the material
//! carries no texture for it) or a decoded bitmap from one of two places:
//! an embedded texture referenced as `"*N"`, or an external file next to
//! the asset. Decoded bitmaps are cached per conversion so a texture used
//! by several materials is decoded once.

use std::collections::HashMap;
use std::fs;
use std::path::Path;
use std::sync::Arc;

use image::ImageFormat;
use log::{debug, warn};

use crate::imported::{keys, shading, ImportedMaterial, ImportedScene, TextureSlot};
use crate::scene::{
    BlendMode, ChannelContents, LightingModel, Material, MaterialChannel, TextureImage,
};

/// Decoded-bitmap cache for one conversion, keyed by the texture path text
/// (`"*N"` for embedded textures, the resolved absolute-ish path for
/// external files).
#[derive(Debug, Default)]
pub struct ImageCache {
    images: HashMap<String, Arc<TextureImage>>,
}

impl ImageCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, path: &str) -> Option<Arc<TextureImage>> {
        self.images.get(path).cloned()
    }

    pub fn store(&mut self, path: &str, image: Arc<TextureImage>) {
        self.images.insert(path.to_owned(), image);
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }
}

/// Builds the renderer material for one imported material.
pub(crate) fn build_material(
    imported: &ImportedMaterial,
    scene: &ImportedScene,
    source_path: &Path,
    cache: &mut ImageCache,
) -> Material {
    let mut material = Material::new(imported.name());

    for slot in TextureSlot::ALL {
        let Some(contents) = resolve_slot(imported, slot, scene, source_path, cache) else {
            continue;
        };
        let channel = Some(MaterialChannel::new(contents));
        match slot {
            TextureSlot::Diffuse => material.diffuse = channel,
            TextureSlot::Specular => material.specular = channel,
            TextureSlot::Ambient => material.ambient = channel,
            TextureSlot::Emissive => material.emission = channel,
            TextureSlot::Reflection => material.reflective = channel,
            TextureSlot::Opacity => material.transparent = channel,
            // A height map shares the normal channel and, coming later in
            // slot order, overrides a plain normal map.
            TextureSlot::Normals | TextureSlot::Height => material.normal = channel,
            TextureSlot::Displacement => material.displacement = channel,
            TextureSlot::LightMap => material.ambient_occlusion = channel,
        }
    }

    if let Some(rgba) = imported.color(keys::COLOR_TRANSPARENT) {
        material.multiply = Some(MaterialChannel::new(ChannelContents::Color(rgba)));
    }
    material.blend_mode = match imported.int(keys::BLEND_FUNC) {
        Some(1) => BlendMode::Additive,
        _ => BlendMode::Alpha,
    };
    material.double_sided = imported.int(keys::TWOSIDED) == Some(1);
    material.shininess = imported.float(keys::SHININESS).unwrap_or(0.0);
    material.lighting_model = match imported.int(keys::SHADING_MODEL) {
        Some(shading::PHONG) => LightingModel::Phong,
        Some(shading::MINNAERT) => LightingModel::Lambert,
        _ => LightingModel::Blinn,
    };

    material
}

/// Resolves one texture slot to channel contents.
///
/// Returns `None` when the slot has neither a usable texture nor a
/// fallback color; the channel is then left unset.
pub(crate) fn resolve_slot(
    material: &ImportedMaterial,
    slot: TextureSlot,
    scene: &ImportedScene,
    source_path: &Path,
    cache: &mut ImageCache,
) -> Option<ChannelContents> {
    if material.texture_count(slot) == 0 {
        return fallback_color(material, slot);
    }
    let Some(raw_path) = material.texture_path(slot, 0) else {
        return fallback_color(material, slot);
    };

    // Windows-authored assets store backslash paths.
    let path = raw_path.replace('\\', "/");
    let file_name = path.rsplit('/').next().unwrap_or("");
    if file_name.is_empty() {
        return fallback_color(material, slot);
    }

    if file_name.starts_with('*') && scene.embedded_texture_count() > 0 {
        resolve_embedded(&path, file_name, scene, cache)
    } else {
        resolve_external(file_name, source_path, cache)
    }
}

/// Fallback color for slots that have a color counterpart in the material
/// property table. Slots without one (normal maps and friends) have no
/// color fallback.
fn fallback_color(material: &ImportedMaterial, slot: TextureSlot) -> Option<ChannelContents> {
    let key = match slot {
        TextureSlot::Diffuse => keys::COLOR_DIFFUSE,
        TextureSlot::Specular => keys::COLOR_SPECULAR,
        TextureSlot::Ambient => keys::COLOR_AMBIENT,
        TextureSlot::Emissive => keys::COLOR_EMISSIVE,
        TextureSlot::Reflection => keys::COLOR_REFLECTIVE,
        TextureSlot::Opacity => keys::COLOR_TRANSPARENT,
        _ => return None,
    };
    material.color(key).map(ChannelContents::Color)
}

/// Resolves a `"*N"` reference into the scene's embedded texture table.
fn resolve_embedded(
    path: &str,
    file_name: &str,
    scene: &ImportedScene,
    cache: &mut ImageCache,
) -> Option<ChannelContents> {
    if let Some(image) = cache.get(path) {
        return Some(ChannelContents::Image(image));
    }

    let count = scene.embedded_texture_count();
    let remainder = &file_name[1..];
    let mut index: usize = if remainder.is_empty() {
        // A bare "*" points at the first embedded texture.
        0
    } else {
        match remainder.parse() {
            Ok(index) => index,
            Err(_) => {
                warn!("unparsable embedded texture reference {path:?}");
                return None;
            }
        }
    };
    if index >= count {
        // Some exporters write dangling indices; degrade to the last
        // texture instead of dropping the channel.
        warn!("embedded texture index {index} out of range (count {count}), clamping");
        index = count - 1;
    }

    let texture = scene.embedded_texture(index)?;
    let format = match texture.format_hint.as_str() {
        "png" => ImageFormat::Png,
        "jpg" => ImageFormat::Jpeg,
        other => {
            warn!("unsupported embedded texture format {other:?} for {path:?}");
            return None;
        }
    };
    match image::load_from_memory_with_format(&texture.data, format) {
        Ok(decoded) => {
            let rgba = decoded.to_rgba8();
            let image = Arc::new(TextureImage {
                width: rgba.width(),
                height: rgba.height(),
                data: rgba.into_raw(),
            });
            debug!("decoded embedded texture {path:?} ({}x{})", image.width, image.height);
            cache.store(path, Arc::clone(&image));
            Some(ChannelContents::Image(image))
        }
        Err(err) => {
            warn!("failed to decode embedded texture {path:?}: {err}");
            None
        }
    }
}

/// Path of a texture file sitting next to the asset. A bare file name as
/// the asset path resolves against the current directory.
fn texture_path_next_to(source_path: &Path, file_name: &str) -> String {
    let directory = match source_path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    directory.join(file_name).to_string_lossy().into_owned()
}

/// Resolves a texture file name relative to the asset's directory.
fn resolve_external(
    file_name: &str,
    source_path: &Path,
    cache: &mut ImageCache,
) -> Option<ChannelContents> {
    let resolved = texture_path_next_to(source_path, file_name);

    if let Some(image) = cache.get(&resolved) {
        return Some(ChannelContents::Image(image));
    }

    let bytes = match fs::read(&resolved) {
        Ok(bytes) => bytes,
        Err(err) => {
            warn!("failed to read texture file {resolved:?}: {err}");
            return None;
        }
    };
    match image::load_from_memory(&bytes) {
        Ok(decoded) => {
            let rgba = decoded.to_rgba8();
            let image = Arc::new(TextureImage {
                width: rgba.width(),
                height: rgba.height(),
                data: rgba.into_raw(),
            });
            debug!("decoded texture file {resolved:?} ({}x{})", image.width, image.height);
            cache.store(&resolved, Arc::clone(&image));
            Some(ChannelContents::Image(image))
        }
        Err(err) => {
            warn!("failed to decode texture file {resolved:?}: {err}");
            None
        }
    }
}
