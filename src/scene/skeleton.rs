//! Skeleton and per-node skinning data.

use crate::math::Mat4;
use crate::scene::{GeometrySource, NodeId, SourceSemantic};

/// The scene-wide skeleton: bone names, the nodes they resolved to, their
/// inverse-bind transforms and the inferred root bone.
///
/// The three arrays are parallel; `bone_names[i]` is the name of the bone
/// at `bones[i]` with inverse-bind transform `inverse_bind_transforms[i]`.
/// Skinning buffers index into this order.
#[derive(Debug, Clone)]
pub struct Skeleton {
    pub bone_names: Vec<String>,
    pub bones: Vec<NodeId>,
    pub inverse_bind_transforms: Vec<Mat4>,
    pub root: NodeId,
}

impl Skeleton {
    pub fn bone_count(&self) -> usize {
        self.bones.len()
    }

    /// Position of a bone name in the skeleton's bone order.
    pub fn bone_index(&self, name: &str) -> Option<usize> {
        self.bone_names.iter().position(|n| n == name)
    }
}

/// Per-vertex bone bindings of one skinned node.
///
/// Both buffers hold `influences_per_vertex` entries per vertex,
/// zero-padded, so `weights.len() == indices.len() ==
/// vertex_count * influences_per_vertex`.
#[derive(Debug, Clone)]
pub struct Skinning {
    /// Maximum number of simultaneous bone influences on any vertex of the
    /// node's meshes.
    pub influences_per_vertex: usize,
    pub weights: Vec<f32>,
    /// Indices into [`Skeleton::bone_names`] order.
    pub bone_indices: Vec<i16>,
}

impl Skinning {
    pub fn vertex_count(&self) -> usize {
        if self.influences_per_vertex == 0 {
            0
        } else {
            self.weights.len() / self.influences_per_vertex
        }
    }

    /// Byte-level weight source for a renderer.
    pub fn weight_source(&self) -> GeometrySource {
        GeometrySource::from_floats(
            SourceSemantic::BoneWeights,
            &self.weights,
            self.influences_per_vertex,
        )
    }

    /// Byte-level bone-index source for a renderer.
    pub fn index_source(&self) -> GeometrySource {
        GeometrySource::from_shorts(
            SourceSemantic::BoneIndices,
            &self.bone_indices,
            self.influences_per_vertex,
        )
    }
}
