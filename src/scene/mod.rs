//! Renderer-owned scene model produced by the converter.

mod animation;
mod camera;
mod geometry;
mod graph;
mod light;
mod material;
mod skeleton;

pub use animation::{AnimationClip, ChannelTracks, KeyframeTrack};
pub use camera::Camera;
pub use geometry::{Geometry, GeometryElement, GeometrySource, SourceSemantic};
pub use graph::{NodeId, SceneGraph, SceneNode};
pub use light::{Light, LightKind};
pub use material::{
    BlendMode, ChannelContents, FilterMode, LightingModel, Material, MaterialChannel, TextureImage,
    WrapMode,
};
pub use skeleton::{Skeleton, Skinning};
