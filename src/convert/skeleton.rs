//! Skeleton reconstruction and skinning buffer construction.
//!
//! The skeleton stage turns the bone names collected during the node walk
//! into resolved nodes with inverse-bind transforms and infers the root
//! bone from node depth. The skinning stage then walks the imported tree a
//! second time and equips every node that carries bones with zero-padded
//! weight and bone-index buffers.

use std::collections::{HashMap, HashSet};

use log::warn;

use crate::convert::node::BoneCatalog;
use crate::imported::{ImportedNode, ImportedScene};
use crate::scene::{NodeId, SceneGraph, Skeleton, Skinning};

/// Builds the scene skeleton from the accumulated bone catalog.
///
/// Bone names are deduplicated in first-seen order, then resolved through
/// the graph's name index; names without a matching node are dropped with
/// a warning so the skeleton arrays stay parallel. The root bone is the
/// shallowest bone, or the parent of the first shallowest one when several
/// share the minimum depth.
pub(crate) fn build_skeleton(graph: &mut SceneGraph, catalog: &BoneCatalog) {
    if catalog.names.is_empty() {
        return;
    }

    let mut seen = HashSet::new();
    let mut bone_names = Vec::new();
    let mut bones = Vec::new();
    let mut inverse_bind_transforms = Vec::new();
    for name in &catalog.names {
        if !seen.insert(name.as_str()) {
            continue;
        }
        let Some(id) = graph.find(name) else {
            warn!("bone {name:?} has no matching node, dropping it from the skeleton");
            continue;
        };
        let Some(&transform) = catalog.inverse_bind_transforms.get(name) else {
            continue;
        };
        bone_names.push(name.clone());
        bones.push(id);
        inverse_bind_transforms.push(transform);
    }
    if bones.is_empty() {
        warn!("no bone name resolved to a node, scene gets no skeleton");
        return;
    }

    let root = infer_root(graph, &bones);
    graph.skeleton = Some(Skeleton {
        bone_names,
        bones,
        inverse_bind_transforms,
        root,
    });
}

fn infer_root(graph: &SceneGraph, bones: &[NodeId]) -> NodeId {
    let depths: Vec<usize> = bones.iter().map(|&bone| graph.depth(bone)).collect();
    let min_depth = depths.iter().copied().min().unwrap_or(0);
    let shallowest: Vec<NodeId> = bones
        .iter()
        .zip(&depths)
        .filter(|&(_, &depth)| depth == min_depth)
        .map(|(&bone, _)| bone)
        .collect();
    let first = shallowest[0];
    if shallowest.len() > 1 {
        // Several top-level bones: their common parent holds the skeleton.
        graph.parent(first).unwrap_or(first)
    } else {
        first
    }
}

/// Walks the imported tree and attaches skinning buffers to every output
/// node whose meshes carry bones.
pub(crate) fn bind_skinning(root: &ImportedNode, scene: &ImportedScene, graph: &mut SceneGraph) {
    let Some(skeleton) = &graph.skeleton else {
        return;
    };
    let bone_indexes: HashMap<String, i16> = skeleton
        .bone_names
        .iter()
        .enumerate()
        .map(|(index, name)| (name.clone(), index as i16))
        .collect();
    bind_node(root, scene, graph, &bone_indexes);
}

fn bind_node(
    node: &ImportedNode,
    scene: &ImportedScene,
    graph: &mut SceneGraph,
    bone_indexes: &HashMap<String, i16>,
) {
    if node.bone_count(scene) > 0 {
        let skinning = build_node_skinning(node, scene, bone_indexes);
        match graph.find(node.name()) {
            Some(id) => graph.node_mut(id).skinning = Some(skinning),
            None => warn!("skinned node {:?} missing from the output graph", node.name()),
        }
    }
    for child in node.children() {
        bind_node(child, scene, graph, bone_indexes);
    }
}

/// Maximum number of simultaneous bone influences on any single vertex of
/// the node's meshes.
fn max_influences(node: &ImportedNode, scene: &ImportedScene) -> usize {
    let mut max = 0;
    for mesh in node.meshes(scene) {
        let mut counts: HashMap<u32, usize> = HashMap::new();
        for bone in mesh.bones() {
            for weight in &bone.weights {
                *counts.entry(weight.vertex).or_insert(0) += 1;
            }
        }
        max = max.max(counts.values().copied().max().unwrap_or(0));
    }
    max
}

/// Builds the weight and bone-index buffers for one skinned node. Both
/// buffers hold exactly `max_influences` entries per vertex; vertices with
/// fewer influences are padded with zeros.
fn build_node_skinning(
    node: &ImportedNode,
    scene: &ImportedScene,
    bone_indexes: &HashMap<String, i16>,
) -> Skinning {
    let influences_per_vertex = max_influences(node, scene);
    let mut weights = Vec::new();
    let mut bone_indices = Vec::new();

    for mesh in node.meshes(scene) {
        let mut per_vertex: Vec<Vec<(i16, f32)>> = vec![Vec::new(); mesh.vertex_count()];
        for bone in mesh.bones() {
            let Some(&bone_index) = bone_indexes.get(&bone.name) else {
                warn!("bone {:?} missing from the skeleton, skipping its weights", bone.name);
                continue;
            };
            for weight in &bone.weights {
                match per_vertex.get_mut(weight.vertex as usize) {
                    Some(influences) => influences.push((bone_index, weight.weight)),
                    None => warn!(
                        "bone {:?} references vertex {} beyond mesh size {}",
                        bone.name,
                        weight.vertex,
                        mesh.vertex_count()
                    ),
                }
            }
        }
        for influences in &per_vertex {
            for slot in 0..influences_per_vertex {
                match influences.get(slot) {
                    Some(&(bone_index, weight)) => {
                        weights.push(weight);
                        bone_indices.push(bone_index);
                    }
                    None => {
                        weights.push(0.0);
                        bone_indices.push(0);
                    }
                }
            }
        }
    }

    Skinning {
        influences_per_vertex,
        weights,
        bone_indices,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::MAT4_IDENTITY;
    use crate::scene::SceneNode;

    fn chain(graph: &mut SceneGraph, names: &[&str]) -> Vec<NodeId> {
        let mut parent = graph.root();
        let mut ids = Vec::new();
        for name in names {
            parent = graph.add_node(parent, SceneNode::new(*name, MAT4_IDENTITY));
            ids.push(parent);
        }
        ids
    }

    fn catalog(names: &[&str]) -> BoneCatalog {
        let mut catalog = BoneCatalog::default();
        for name in names {
            catalog.names.push((*name).to_owned());
            catalog
                .inverse_bind_transforms
                .insert((*name).to_owned(), MAT4_IDENTITY);
        }
        catalog
    }

    #[test]
    fn tied_minimum_depth_roots_at_parent() {
        let mut graph = SceneGraph::new();
        let armature = chain(&mut graph, &["armature"])[0];
        let hip_l = graph.add_node(armature, SceneNode::new("hip_l", MAT4_IDENTITY));
        graph.add_node(armature, SceneNode::new("hip_r", MAT4_IDENTITY));
        graph.add_node(hip_l, SceneNode::new("knee_l", MAT4_IDENTITY));

        // depths: hip_l = 2, hip_r = 2, knee_l = 3
        build_skeleton(&mut graph, &catalog(&["hip_l", "hip_r", "knee_l"]));
        let skeleton = graph.skeleton.as_ref().unwrap();
        assert_eq!(skeleton.root, armature);
        assert_eq!(skeleton.bone_count(), 3);
    }

    #[test]
    fn unique_minimum_depth_is_its_own_root() {
        let mut graph = SceneGraph::new();
        chain(&mut graph, &["pelvis", "spine", "head"]);
        build_skeleton(&mut graph, &catalog(&["spine", "pelvis", "head"]));
        let skeleton = graph.skeleton.as_ref().unwrap();
        assert_eq!(skeleton.root, graph.find("pelvis").unwrap());
    }

    #[test]
    fn duplicate_bone_names_collapse() {
        let mut graph = SceneGraph::new();
        chain(&mut graph, &["a", "b"]);
        build_skeleton(&mut graph, &catalog(&["a", "b", "a", "b", "a"]));
        let skeleton = graph.skeleton.as_ref().unwrap();
        assert_eq!(skeleton.bone_names, vec!["a", "b"]);
        assert_eq!(skeleton.bone_index("b"), Some(1));
    }

    #[test]
    fn unresolved_bone_names_are_dropped() {
        let mut graph = SceneGraph::new();
        chain(&mut graph, &["real"]);
        build_skeleton(&mut graph, &catalog(&["real", "phantom"]));
        let skeleton = graph.skeleton.as_ref().unwrap();
        assert_eq!(skeleton.bone_names, vec!["real"]);
        assert_eq!(skeleton.bones.len(), 1);
        assert_eq!(skeleton.inverse_bind_transforms.len(), 1);
    }

    #[test]
    fn no_resolvable_bones_means_no_skeleton() {
        let mut graph = SceneGraph::new();
        build_skeleton(&mut graph, &catalog(&["phantom"]));
        assert!(graph.skeleton.is_none());
    }
}
