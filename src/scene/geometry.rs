//! Geometry buffers for one scene node.
//!
//! Attributes are kept as typed growable arrays while the scene is being
//! built; byte-level layout exists only in [`GeometrySource`], produced on
//! demand when the data crosses into a renderer.

use bytemuck::cast_slice;

use crate::scene::Material;

/// Vertex data of one node: the concatenated attributes of all of the
/// node's meshes, one index element per mesh, one material per mesh.
///
/// Every attribute array that is present holds exactly one entry per
/// vertex; `elements[i]` and `materials[i]` both refer to mesh `i`.
#[derive(Debug, Default)]
pub struct Geometry {
    pub positions: Vec<[f32; 3]>,
    pub normals: Vec<[f32; 3]>,
    pub tangents: Vec<[f32; 3]>,
    pub tex_coords: Vec<[f32; 2]>,
    pub colors: Option<Vec<[f32; 3]>>,
    pub elements: Vec<GeometryElement>,
    pub materials: Vec<Material>,
}

impl Geometry {
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    /// Total triangle count across all elements.
    pub fn triangle_count(&self) -> usize {
        self.elements.iter().map(GeometryElement::triangle_count).sum()
    }

    /// Serializes the attribute arrays into byte-level sources.
    pub fn sources(&self) -> Vec<GeometrySource> {
        let mut sources = Vec::new();
        if !self.positions.is_empty() {
            sources.push(GeometrySource::from_vec3s(SourceSemantic::Position, &self.positions));
        }
        if !self.normals.is_empty() {
            sources.push(GeometrySource::from_vec3s(SourceSemantic::Normal, &self.normals));
        }
        if !self.tangents.is_empty() {
            sources.push(GeometrySource::from_vec3s(SourceSemantic::Tangent, &self.tangents));
        }
        if !self.tex_coords.is_empty() {
            sources.push(GeometrySource::from_vec2s(
                SourceSemantic::TexCoord,
                &self.tex_coords,
            ));
        }
        if let Some(colors) = &self.colors {
            sources.push(GeometrySource::from_vec3s(SourceSemantic::Color, colors));
        }
        sources
    }
}

/// Triangle indices for one source mesh, offset into the node's combined
/// vertex arrays.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct GeometryElement {
    pub indices: Vec<i32>,
}

impl GeometryElement {
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Index data as bytes.
    pub fn data(&self) -> &[u8] {
        cast_slice(&self.indices)
    }
}

/// What a [`GeometrySource`] carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SourceSemantic {
    Position,
    Normal,
    Tangent,
    TexCoord,
    Color,
    BoneWeights,
    BoneIndices,
}

/// One attribute array frozen into its byte layout: the explicit contract
/// a renderer consumes. Data is tightly packed, so the stride is
/// `components_per_vector * bytes_per_component`.
#[derive(Debug, Clone)]
pub struct GeometrySource {
    pub semantic: SourceSemantic,
    pub vector_count: usize,
    pub components_per_vector: usize,
    pub bytes_per_component: usize,
    pub uses_float_components: bool,
    pub data: Vec<u8>,
}

impl GeometrySource {
    pub fn from_vec3s(semantic: SourceSemantic, values: &[[f32; 3]]) -> Self {
        Self {
            semantic,
            vector_count: values.len(),
            components_per_vector: 3,
            bytes_per_component: 4,
            uses_float_components: true,
            data: cast_slice(values).to_vec(),
        }
    }

    pub fn from_vec2s(semantic: SourceSemantic, values: &[[f32; 2]]) -> Self {
        Self {
            semantic,
            vector_count: values.len(),
            components_per_vector: 2,
            bytes_per_component: 4,
            uses_float_components: true,
            data: cast_slice(values).to_vec(),
        }
    }

    /// Packs a flat float array with `components_per_vector` entries per
    /// vector. The length must divide evenly.
    pub fn from_floats(semantic: SourceSemantic, values: &[f32], components_per_vector: usize) -> Self {
        debug_assert_eq!(values.len() % components_per_vector, 0);
        Self {
            semantic,
            vector_count: values.len() / components_per_vector,
            components_per_vector,
            bytes_per_component: 4,
            uses_float_components: true,
            data: cast_slice(values).to_vec(),
        }
    }

    /// Packs a flat i16 array, `components_per_vector` entries per vector.
    pub fn from_shorts(semantic: SourceSemantic, values: &[i16], components_per_vector: usize) -> Self {
        debug_assert_eq!(values.len() % components_per_vector, 0);
        Self {
            semantic,
            vector_count: values.len() / components_per_vector,
            components_per_vector,
            bytes_per_component: 2,
            uses_float_components: false,
            data: cast_slice(values).to_vec(),
        }
    }

    /// Distance in bytes between consecutive vectors.
    pub fn stride(&self) -> usize {
        self.components_per_vector * self.bytes_per_component
    }
}
