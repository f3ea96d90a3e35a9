//! Geometry construction for one node.
//!
//! All meshes a node references are concatenated into shared attribute
//! arrays, with one index element per mesh offset by the vertices that
//! came before it. Materials are resolved per mesh, in mesh order.

use std::path::Path;

use log::{debug, warn};

use crate::convert::material::{build_material, ImageCache};
use crate::imported::{ImportedMesh, ImportedNode, ImportedScene};
use crate::scene::{Geometry, GeometryElement, Material};

/// Builds the combined geometry of `node`, or `None` when its meshes sum
/// to zero vertices.
pub(crate) fn build_geometry(
    node: &ImportedNode,
    scene: &ImportedScene,
    source_path: &Path,
    cache: &mut ImageCache,
) -> Option<Geometry> {
    let meshes: Vec<&ImportedMesh> = node.meshes(scene).collect();
    let vertex_count: usize = meshes.iter().map(|mesh| mesh.vertex_count()).sum();
    if vertex_count == 0 {
        return None;
    }

    let mut geometry = Geometry::default();
    geometry.positions.reserve(vertex_count);
    for mesh in &meshes {
        geometry.positions.extend_from_slice(mesh.positions());
    }
    geometry.normals = concat_attribute(&meshes, ImportedMesh::normals, node.name(), "normals")
        .unwrap_or_default();
    geometry.tangents = concat_attribute(&meshes, ImportedMesh::tangents, node.name(), "tangents")
        .unwrap_or_default();
    geometry.tex_coords =
        concat_attribute(&meshes, ImportedMesh::tex_coords, node.name(), "texture coordinates")
            .unwrap_or_default();
    geometry.colors = concat_attribute(&meshes, ImportedMesh::colors, node.name(), "colors");

    geometry.elements = build_elements(&meshes, node.name()).unwrap_or_default();

    for mesh in &meshes {
        let material = match scene.material(mesh.material_index()) {
            Some(imported) => build_material(imported, scene, source_path, cache),
            None => {
                warn!(
                    "node {:?}: mesh references missing material {}",
                    node.name(),
                    mesh.material_index()
                );
                Material::default()
            }
        };
        geometry.materials.push(material);
    }

    debug!(
        "node {:?}: {} vertices, {} elements, {} materials",
        node.name(),
        geometry.vertex_count(),
        geometry.elements.len(),
        geometry.materials.len()
    );
    Some(geometry)
}

/// Concatenates one optional attribute across all meshes.
///
/// The attribute is all-or-nothing per node: the first mesh without it
/// drops it for the whole node, since a partial array could not stay
/// parallel to the positions.
fn concat_attribute<const N: usize>(
    meshes: &[&ImportedMesh],
    attribute: impl Fn(&ImportedMesh) -> Option<&[[f32; N]]>,
    node_name: &str,
    what: &str,
) -> Option<Vec<[f32; N]>> {
    let mut combined = Vec::new();
    for mesh in meshes {
        match attribute(mesh) {
            Some(values) => combined.extend_from_slice(values),
            None => {
                if !combined.is_empty() {
                    debug!("node {node_name:?}: dropping {what}, not every mesh has them");
                }
                return None;
            }
        }
    }
    Some(combined)
}

/// Builds one index element per mesh with a running vertex offset.
///
/// Faces must be triangles; a single non-triangular face rejects the index
/// buffer of the whole node because downstream offsets would be wrong.
fn build_elements(meshes: &[&ImportedMesh], node_name: &str) -> Option<Vec<GeometryElement>> {
    let mut elements = Vec::with_capacity(meshes.len());
    let mut vertex_offset: i32 = 0;
    for mesh in meshes {
        let mut indices = Vec::with_capacity(mesh.faces().len() * 3);
        for face in mesh.faces() {
            if face.len() != 3 {
                warn!(
                    "node {node_name:?}: face with {} indices, expected triangulated input; \
                     dropping the node's index data",
                    face.len()
                );
                return None;
            }
            for &index in face {
                indices.push(index as i32 + vertex_offset);
            }
        }
        elements.push(GeometryElement { indices });
        vertex_offset += mesh.vertex_count() as i32;
    }
    Some(elements)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::imported::ImportedNode;
    use std::path::Path;

    fn quad_mesh() -> ImportedMesh {
        ImportedMesh::new(vec![
            [0.0, 0.0, 0.0],
            [1.0, 0.0, 0.0],
            [1.0, 1.0, 0.0],
            [0.0, 1.0, 0.0],
        ])
        .with_faces(vec![vec![0, 1, 2], vec![0, 2, 3]])
    }

    fn node_scene(meshes: Vec<ImportedMesh>) -> ImportedScene {
        let indices = (0..meshes.len()).collect();
        let root = ImportedNode::new("node").with_mesh_indices(indices);
        ImportedScene::new(root).with_meshes(meshes)
    }

    fn build(scene: &ImportedScene) -> Option<Geometry> {
        let mut cache = ImageCache::new();
        build_geometry(scene.root(), scene, Path::new("model.obj"), &mut cache)
    }

    #[test]
    fn second_element_offset_by_first_mesh_vertices() {
        let scene = node_scene(vec![quad_mesh(), quad_mesh()]);
        let geometry = build(&scene).unwrap();
        assert_eq!(geometry.vertex_count(), 8);
        assert_eq!(geometry.elements.len(), 2);
        assert_eq!(geometry.elements[0].indices, vec![0, 1, 2, 0, 2, 3]);
        assert_eq!(geometry.elements[1].indices, vec![4, 5, 6, 4, 6, 7]);
    }

    #[test]
    fn colors_are_all_or_nothing() {
        let with_colors = quad_mesh().with_colors(vec![[1.0, 0.0, 0.0]; 4]);
        let scene = node_scene(vec![with_colors, quad_mesh()]);
        let geometry = build(&scene).unwrap();
        assert!(geometry.colors.is_none());

        let both = node_scene(vec![
            quad_mesh().with_colors(vec![[1.0, 0.0, 0.0]; 4]),
            quad_mesh().with_colors(vec![[0.0, 1.0, 0.0]; 4]),
        ]);
        let geometry = build(&both).unwrap();
        assert_eq!(geometry.colors.as_ref().map(Vec::len), Some(8));
    }

    #[test]
    fn non_triangular_face_rejects_all_elements() {
        let bad = quad_mesh().with_faces(vec![vec![0, 1, 2, 3]]);
        let scene = node_scene(vec![quad_mesh(), bad]);
        let geometry = build(&scene).unwrap();
        assert!(geometry.elements.is_empty());
        // Attributes and materials survive.
        assert_eq!(geometry.vertex_count(), 8);
        assert_eq!(geometry.materials.len(), 2);
    }

    #[test]
    fn empty_node_yields_no_geometry() {
        let scene = node_scene(vec![]);
        assert!(build(&scene).is_none());
    }

    #[test]
    fn one_material_per_mesh_in_order() {
        let scene = node_scene(vec![quad_mesh(), quad_mesh(), quad_mesh()]);
        let geometry = build(&scene).unwrap();
        assert_eq!(geometry.materials.len(), 3);
    }
}
