//! Read-only model of an import library's parsed scene.
//!
//! An [`ImportBackend`](crate::convert::ImportBackend) fills this model from
//! whatever parser it wraps; the converter in [`crate::convert`] only ever
//! reads it. All mutation happens through the builder methods at
//! construction time.

mod material;
mod types;

pub use material::{keys, shading, ImportedMaterial, TextureSlot};
pub use types::{
    EmbeddedTexture, ImportedAnimation, ImportedBone, ImportedCamera, ImportedChannel,
    ImportedLight, ImportedLightKind, ImportedMesh, ImportedNode, ImportedScene, QuatKey,
    VectorKey, VertexWeight,
};
