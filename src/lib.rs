//! assetkit converts imported 3D asset scenes into renderer-ready data.
//!
//! An import backend (any multi-format asset parser) fills the read-only
//! model in [`imported`]; [`convert`] turns that model into the mutable
//! scene graph in [`scene`]: node hierarchy, concatenated geometry buffers,
//! resolved materials with cached textures, a reconstructed skeleton with
//! per-vertex skinning data, and retargeted keyframe animation clips.
//!
//! ```no_run
//! use assetkit::convert::{import_scene, ImportBackend};
//! use assetkit::postprocess::PostProcess;
//!
//! fn load(backend: &dyn ImportBackend) -> Result<(), Box<dyn std::error::Error>> {
//!     let scene = import_scene(backend, "models/character.fbx", PostProcess::DEFAULT_QUALITY)?;
//!     println!("{} nodes, {} clips", scene.node_count(), scene.animations.len());
//!     Ok(())
//! }
//! ```

pub mod convert;
pub mod formats;
pub mod imported;
pub mod math;
pub mod postprocess;
pub mod scene;

pub use convert::{convert_scene, import_scene, ImportBackend, ImportError};
pub use postprocess::PostProcess;
pub use scene::SceneGraph;

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
