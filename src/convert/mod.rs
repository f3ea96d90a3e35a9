//! Conversion pipeline from an [`ImportedScene`] to a [`SceneGraph`].
//!
//! [`import_scene`] is the file-oriented entry point: it gates on the
//! supported-extension table, asks the backend to parse the file and
//! converts the result. [`convert_scene`] is the conversion itself and can
//! be driven directly with an in-memory scene.
//!
//! The pipeline is synchronous and single-threaded; its stages run in a
//! fixed order because later stages read what earlier ones produced:
//! node graph (with geometry and materials), then skeleton, then skinning,
//! then animations.

mod animation;
mod error;
mod geometry;
mod material;
mod node;
mod skeleton;

#[cfg(test)]
mod tests;

use std::path::Path;

use log::debug;

pub use error::ImportError;
pub use material::ImageCache;

use crate::formats;
use crate::imported::ImportedScene;
use crate::postprocess::PostProcess;
use crate::scene::SceneGraph;

/// The import-library boundary: parses one file into an [`ImportedScene`].
///
/// The returned scene owns every resource of the parse; dropping it is the
/// release. Errors are the backend's own message text.
pub trait ImportBackend {
    fn import_file(&self, path: &Path, steps: PostProcess) -> Result<ImportedScene, String>;
}

/// Imports `path` through `backend` and converts it into a [`SceneGraph`].
///
/// Fails fast on an unsupported extension or a backend parse error; in
/// both cases nothing is produced. The parsed scene lives exactly as long
/// as this call.
pub fn import_scene(
    backend: &dyn ImportBackend,
    path: impl AsRef<Path>,
    steps: PostProcess,
) -> Result<SceneGraph, ImportError> {
    let path = path.as_ref();
    let extension = path
        .extension()
        .map(|e| e.to_string_lossy().into_owned())
        .unwrap_or_default();
    if !formats::can_import(&extension) {
        return Err(ImportError::UnsupportedExtension(extension));
    }

    debug!("importing {:?} with steps {:?}", path, steps);
    let imported = backend
        .import_file(path, steps)
        .map_err(|message| ImportError::Import {
            path: path.to_path_buf(),
            message,
        })?;
    Ok(convert_scene(&imported, path))
}

/// Converts a parsed scene into a renderer-ready scene graph.
///
/// `source_path` is the file the scene came from; it anchors external
/// texture lookups and names the animation clips.
pub fn convert_scene(imported: &ImportedScene, source_path: &Path) -> SceneGraph {
    let mut graph = SceneGraph::new();
    let mut cache = ImageCache::new();
    let mut bones = node::BoneCatalog::default();

    let graph_root = graph.root();
    node::build_node(
        imported.root(),
        imported,
        source_path,
        &mut graph,
        graph_root,
        &mut cache,
        &mut bones,
    );

    skeleton::build_skeleton(&mut graph, &bones);
    skeleton::bind_skinning(imported.root(), imported, &mut graph);
    animation::build_animations(imported, source_path, &mut graph);

    debug!(
        "converted {:?}: {} nodes, {} cached images, {} clips",
        source_path,
        graph.node_count(),
        cache.len(),
        graph.animations.len()
    );
    graph
}
