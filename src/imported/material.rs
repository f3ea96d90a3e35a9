//! Imported materials as key/value property lists.
//!
//! The import library exposes materials as flat property lists where each
//! entry is a string key plus a typed value, optionally scoped to a texture
//! slot. [`ImportedMaterial`] mirrors that shape and offers the typed
//! lookups the resolver in [`crate::convert`] needs.

/// Material property key strings, matching the import library's wire keys.
pub mod keys {
    pub const NAME: &str = "?mat.name";
    pub const COLOR_DIFFUSE: &str = "$clr.diffuse";
    pub const COLOR_SPECULAR: &str = "$clr.specular";
    pub const COLOR_AMBIENT: &str = "$clr.ambient";
    pub const COLOR_EMISSIVE: &str = "$clr.emissive";
    pub const COLOR_TRANSPARENT: &str = "$clr.transparent";
    pub const COLOR_REFLECTIVE: &str = "$clr.reflective";
    pub const TWOSIDED: &str = "$mat.twosided";
    pub const SHADING_MODEL: &str = "$mat.shadingm";
    pub const BLEND_FUNC: &str = "$mat.blend";
    pub const SHININESS: &str = "$mat.shininess";
    pub const TEXTURE_PATH: &str = "$tex.file";
}

/// Shading model codes for [`keys::SHADING_MODEL`].
pub mod shading {
    pub const FLAT: i32 = 0x1;
    pub const GOURAUD: i32 = 0x2;
    pub const PHONG: i32 = 0x3;
    pub const BLINN: i32 = 0x4;
    pub const TOON: i32 = 0x5;
    pub const OREN_NAYAR: i32 = 0x6;
    pub const MINNAERT: i32 = 0x7;
}

/// Texture slots a material property can be scoped to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextureSlot {
    Diffuse,
    Specular,
    Ambient,
    Emissive,
    Reflection,
    Opacity,
    Normals,
    Height,
    Displacement,
    LightMap,
}

impl TextureSlot {
    /// All slots in resolution order. `Height` follows `Normals` so a
    /// height map overrides a normal map on the shared output channel.
    pub const ALL: [TextureSlot; 10] = [
        TextureSlot::Diffuse,
        TextureSlot::Specular,
        TextureSlot::Ambient,
        TextureSlot::Emissive,
        TextureSlot::Reflection,
        TextureSlot::Opacity,
        TextureSlot::Normals,
        TextureSlot::Height,
        TextureSlot::Displacement,
        TextureSlot::LightMap,
    ];
}

#[derive(Debug, Clone, PartialEq)]
enum PropertyValue {
    Color([f32; 4]),
    Float(f32),
    Int(i32),
    Text(String),
}

#[derive(Debug, Clone)]
struct MaterialProperty {
    key: String,
    slot: Option<(TextureSlot, usize)>,
    value: PropertyValue,
}

/// One imported material.
#[derive(Debug, Clone, Default)]
pub struct ImportedMaterial {
    name: String,
    properties: Vec<MaterialProperty>,
}

impl ImportedMaterial {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            properties: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_color(mut self, key: &str, rgba: [f32; 4]) -> Self {
        self.properties.push(MaterialProperty {
            key: key.to_owned(),
            slot: None,
            value: PropertyValue::Color(rgba),
        });
        self
    }

    #[must_use]
    pub fn with_float(mut self, key: &str, value: f32) -> Self {
        self.properties.push(MaterialProperty {
            key: key.to_owned(),
            slot: None,
            value: PropertyValue::Float(value),
        });
        self
    }

    #[must_use]
    pub fn with_int(mut self, key: &str, value: i32) -> Self {
        self.properties.push(MaterialProperty {
            key: key.to_owned(),
            slot: None,
            value: PropertyValue::Int(value),
        });
        self
    }

    /// Appends a texture path to `slot`; the index is the current count.
    #[must_use]
    pub fn with_texture(mut self, slot: TextureSlot, path: impl Into<String>) -> Self {
        let index = self.texture_count(slot);
        self.properties.push(MaterialProperty {
            key: keys::TEXTURE_PATH.to_owned(),
            slot: Some((slot, index)),
            value: PropertyValue::Text(path.into()),
        });
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of textures stacked on `slot`.
    pub fn texture_count(&self, slot: TextureSlot) -> usize {
        self.properties
            .iter()
            .filter(|p| p.key == keys::TEXTURE_PATH && matches!(p.slot, Some((s, _)) if s == slot))
            .count()
    }

    /// Raw texture path of `slot` at `index`, as stored in the file.
    pub fn texture_path(&self, slot: TextureSlot, index: usize) -> Option<&str> {
        self.properties.iter().find_map(|p| {
            if p.key == keys::TEXTURE_PATH && p.slot == Some((slot, index)) {
                match &p.value {
                    PropertyValue::Text(path) => Some(path.as_str()),
                    _ => None,
                }
            } else {
                None
            }
        })
    }

    pub fn color(&self, key: &str) -> Option<[f32; 4]> {
        self.properties.iter().find_map(|p| {
            if p.key == key && p.slot.is_none() {
                match p.value {
                    PropertyValue::Color(rgba) => Some(rgba),
                    _ => None,
                }
            } else {
                None
            }
        })
    }

    pub fn float(&self, key: &str) -> Option<f32> {
        self.properties.iter().find_map(|p| {
            if p.key == key && p.slot.is_none() {
                match p.value {
                    PropertyValue::Float(value) => Some(value),
                    PropertyValue::Int(value) => Some(value as f32),
                    _ => None,
                }
            } else {
                None
            }
        })
    }

    pub fn int(&self, key: &str) -> Option<i32> {
        self.properties.iter().find_map(|p| {
            if p.key == key && p.slot.is_none() {
                match p.value {
                    PropertyValue::Int(value) => Some(value),
                    _ => None,
                }
            } else {
                None
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn texture_stack_counts_and_paths() {
        let material = ImportedMaterial::new("wall")
            .with_texture(TextureSlot::Diffuse, "bricks.png")
            .with_texture(TextureSlot::Diffuse, "detail.png")
            .with_texture(TextureSlot::Normals, "bricks_n.png");
        assert_eq!(material.texture_count(TextureSlot::Diffuse), 2);
        assert_eq!(material.texture_count(TextureSlot::Opacity), 0);
        assert_eq!(
            material.texture_path(TextureSlot::Diffuse, 1),
            Some("detail.png")
        );
        assert_eq!(material.texture_path(TextureSlot::Diffuse, 2), None);
    }

    #[test]
    fn typed_lookups() {
        let material = ImportedMaterial::new("m")
            .with_color(keys::COLOR_DIFFUSE, [1.0, 0.5, 0.0, 1.0])
            .with_float(keys::SHININESS, 32.0)
            .with_int(keys::TWOSIDED, 1);
        assert_eq!(material.color(keys::COLOR_DIFFUSE), Some([1.0, 0.5, 0.0, 1.0]));
        assert_eq!(material.float(keys::SHININESS), Some(32.0));
        assert_eq!(material.int(keys::TWOSIDED), Some(1));
        assert_eq!(material.color(keys::COLOR_SPECULAR), None);
    }

    #[test]
    fn int_read_as_float() {
        let material = ImportedMaterial::new("m").with_int(keys::SHININESS, 16);
        assert_eq!(material.float(keys::SHININESS), Some(16.0));
    }
}
