//! Arena-based scene graph.
//!
//! Nodes live in one `Vec` and reference each other through [`NodeId`]
//! indices, so parents, children and by-name lookups never need reference
//! cycles. Node names are indexed on insert; the converter relies on that
//! index for camera/light attachment, skeleton resolution and animation
//! retargeting.

use std::collections::HashMap;

use log::warn;

use crate::math::{Mat4, MAT4_IDENTITY};
use crate::scene::{AnimationClip, Camera, Geometry, Light, Skeleton, Skinning};

/// Index of a node inside its [`SceneGraph`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

/// One node of the output scene.
#[derive(Debug)]
pub struct SceneNode {
    pub name: String,
    /// Local transform relative to the parent, row-major.
    pub transform: Mat4,
    pub geometry: Option<Geometry>,
    pub camera: Option<Camera>,
    pub light: Option<Light>,
    pub skinning: Option<Skinning>,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

impl SceneNode {
    pub fn new(name: impl Into<String>, transform: Mat4) -> Self {
        Self {
            name: name.into(),
            transform,
            geometry: None,
            camera: None,
            light: None,
            skinning: None,
            parent: None,
            children: Vec::new(),
        }
    }

    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    pub fn children(&self) -> &[NodeId] {
        &self.children
    }
}

impl Default for SceneNode {
    fn default() -> Self {
        Self::new("", MAT4_IDENTITY)
    }
}

/// The converted scene: node arena plus scene-wide skeleton and animations.
#[derive(Debug)]
pub struct SceneGraph {
    nodes: Vec<SceneNode>,
    root: NodeId,
    name_index: HashMap<String, NodeId>,
    pub skeleton: Option<Skeleton>,
    pub animations: HashMap<String, AnimationClip>,
}

impl SceneGraph {
    /// Creates a graph holding only an anonymous root node.
    pub fn new() -> Self {
        let root = SceneNode::new("", MAT4_IDENTITY);
        Self {
            nodes: vec![root],
            root: NodeId(0),
            name_index: HashMap::new(),
            skeleton: None,
            animations: HashMap::new(),
        }
    }

    pub fn root(&self) -> NodeId {
        self.root
    }

    pub fn node(&self, id: NodeId) -> &SceneNode {
        &self.nodes[id.0]
    }

    pub fn node_mut(&mut self, id: NodeId) -> &mut SceneNode {
        &mut self.nodes[id.0]
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Inserts `node` under `parent` and indexes its name.
    ///
    /// The first node with a given name wins the index slot; later
    /// duplicates are kept in the tree but only logged, since every by-name
    /// binding (skeletons, animation channels) is ambiguous for them.
    pub fn add_node(&mut self, parent: NodeId, mut node: SceneNode) -> NodeId {
        let id = NodeId(self.nodes.len());
        node.parent = Some(parent);
        if !node.name.is_empty() {
            if self.name_index.contains_key(&node.name) {
                warn!("duplicate node name {:?}, by-name lookups keep the first", node.name);
            } else {
                self.name_index.insert(node.name.clone(), id);
            }
        }
        self.nodes.push(node);
        self.nodes[parent.0].children.push(id);
        id
    }

    /// Looks a node up by name.
    pub fn find(&self, name: &str) -> Option<NodeId> {
        self.name_index.get(name).copied()
    }

    /// Number of parent links between `id` and the root.
    pub fn depth(&self, id: NodeId) -> usize {
        let mut depth = 0;
        let mut current = id;
        while let Some(parent) = self.nodes[current.0].parent {
            depth += 1;
            current = parent;
        }
        depth
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.nodes[id.0].parent
    }

    pub fn children(&self, id: NodeId) -> &[NodeId] {
        &self.nodes[id.0].children
    }
}

impl Default for SceneGraph {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_and_find() {
        let mut graph = SceneGraph::new();
        let a = graph.add_node(graph.root(), SceneNode::new("a", MAT4_IDENTITY));
        let b = graph.add_node(a, SceneNode::new("b", MAT4_IDENTITY));
        assert_eq!(graph.find("a"), Some(a));
        assert_eq!(graph.find("b"), Some(b));
        assert_eq!(graph.find("c"), None);
        assert_eq!(graph.parent(b), Some(a));
        assert_eq!(graph.children(a), &[b]);
        assert_eq!(graph.node_count(), 3);
    }

    #[test]
    fn depth_counts_parent_links() {
        let mut graph = SceneGraph::new();
        let a = graph.add_node(graph.root(), SceneNode::new("a", MAT4_IDENTITY));
        let b = graph.add_node(a, SceneNode::new("b", MAT4_IDENTITY));
        let c = graph.add_node(b, SceneNode::new("c", MAT4_IDENTITY));
        assert_eq!(graph.depth(graph.root()), 0);
        assert_eq!(graph.depth(a), 1);
        assert_eq!(graph.depth(c), 3);
    }

    #[test]
    fn duplicate_names_keep_first() {
        let mut graph = SceneGraph::new();
        let first = graph.add_node(graph.root(), SceneNode::new("twin", MAT4_IDENTITY));
        let _second = graph.add_node(graph.root(), SceneNode::new("twin", MAT4_IDENTITY));
        assert_eq!(graph.find("twin"), Some(first));
    }

    #[test]
    fn unnamed_nodes_not_indexed() {
        let mut graph = SceneGraph::new();
        graph.add_node(graph.root(), SceneNode::new("", MAT4_IDENTITY));
        assert_eq!(graph.find(""), None);
    }
}
