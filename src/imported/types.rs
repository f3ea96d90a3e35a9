//! Imported scene, node, mesh, bone, light, camera and animation data.

use crate::imported::ImportedMaterial;
use crate::math::{Mat4, MAT4_IDENTITY};

/// A parsed scene as handed over by the import backend.
///
/// Owns every resource of the file: the node hierarchy plus flat tables of
/// meshes, materials, lights, cameras, embedded textures and animations.
/// Nodes reference meshes by index; meshes reference materials by index.
#[derive(Debug, Default)]
pub struct ImportedScene {
    root: ImportedNode,
    meshes: Vec<ImportedMesh>,
    materials: Vec<ImportedMaterial>,
    lights: Vec<ImportedLight>,
    cameras: Vec<ImportedCamera>,
    embedded_textures: Vec<EmbeddedTexture>,
    animations: Vec<ImportedAnimation>,
}

impl ImportedScene {
    pub fn new(root: ImportedNode) -> Self {
        Self {
            root,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_meshes(mut self, meshes: Vec<ImportedMesh>) -> Self {
        self.meshes = meshes;
        self
    }

    #[must_use]
    pub fn with_materials(mut self, materials: Vec<ImportedMaterial>) -> Self {
        self.materials = materials;
        self
    }

    #[must_use]
    pub fn with_lights(mut self, lights: Vec<ImportedLight>) -> Self {
        self.lights = lights;
        self
    }

    #[must_use]
    pub fn with_cameras(mut self, cameras: Vec<ImportedCamera>) -> Self {
        self.cameras = cameras;
        self
    }

    #[must_use]
    pub fn with_embedded_textures(mut self, textures: Vec<EmbeddedTexture>) -> Self {
        self.embedded_textures = textures;
        self
    }

    #[must_use]
    pub fn with_animations(mut self, animations: Vec<ImportedAnimation>) -> Self {
        self.animations = animations;
        self
    }

    pub fn root(&self) -> &ImportedNode {
        &self.root
    }

    pub fn mesh(&self, index: usize) -> Option<&ImportedMesh> {
        self.meshes.get(index)
    }

    pub fn meshes(&self) -> &[ImportedMesh] {
        &self.meshes
    }

    pub fn material(&self, index: usize) -> Option<&ImportedMaterial> {
        self.materials.get(index)
    }

    pub fn lights(&self) -> &[ImportedLight] {
        &self.lights
    }

    pub fn cameras(&self) -> &[ImportedCamera] {
        &self.cameras
    }

    pub fn embedded_texture(&self, index: usize) -> Option<&EmbeddedTexture> {
        self.embedded_textures.get(index)
    }

    pub fn embedded_texture_count(&self) -> usize {
        self.embedded_textures.len()
    }

    pub fn animations(&self) -> &[ImportedAnimation] {
        &self.animations
    }
}

/// One node of the imported hierarchy.
#[derive(Debug)]
pub struct ImportedNode {
    name: String,
    transform: Mat4,
    mesh_indices: Vec<usize>,
    children: Vec<ImportedNode>,
}

impl ImportedNode {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            transform: MAT4_IDENTITY,
            mesh_indices: Vec::new(),
            children: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_transform(mut self, transform: Mat4) -> Self {
        self.transform = transform;
        self
    }

    #[must_use]
    pub fn with_mesh_indices(mut self, indices: Vec<usize>) -> Self {
        self.mesh_indices = indices;
        self
    }

    #[must_use]
    pub fn with_children(mut self, children: Vec<ImportedNode>) -> Self {
        self.children = children;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Local transform relative to the parent, row-major.
    pub fn transform(&self) -> Mat4 {
        self.transform
    }

    pub fn mesh_indices(&self) -> &[usize] {
        &self.mesh_indices
    }

    pub fn children(&self) -> &[ImportedNode] {
        &self.children
    }

    /// Meshes this node references, skipping out-of-range indices.
    pub fn meshes<'a>(&'a self, scene: &'a ImportedScene) -> impl Iterator<Item = &'a ImportedMesh> {
        self.mesh_indices.iter().filter_map(|&index| scene.mesh(index))
    }

    /// Combined vertex count of all meshes referenced by this node.
    pub fn vertex_count(&self, scene: &ImportedScene) -> usize {
        self.meshes(scene).map(ImportedMesh::vertex_count).sum()
    }

    /// Combined bone count of all meshes referenced by this node.
    pub fn bone_count(&self, scene: &ImportedScene) -> usize {
        self.meshes(scene).map(|mesh| mesh.bones().len()).sum()
    }
}

impl Default for ImportedNode {
    fn default() -> Self {
        Self::new("")
    }
}

/// Vertex data of one imported mesh.
///
/// Positions are always present; the remaining attributes are optional and,
/// when present, run parallel to the positions. Faces keep their original
/// arity so the converter can enforce its triangles-only policy itself.
#[derive(Debug, Default)]
pub struct ImportedMesh {
    positions: Vec<[f32; 3]>,
    normals: Option<Vec<[f32; 3]>>,
    tangents: Option<Vec<[f32; 3]>>,
    tex_coords: Option<Vec<[f32; 2]>>,
    colors: Option<Vec<[f32; 3]>>,
    faces: Vec<Vec<u32>>,
    material_index: usize,
    bones: Vec<ImportedBone>,
}

impl ImportedMesh {
    pub fn new(positions: Vec<[f32; 3]>) -> Self {
        Self {
            positions,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_normals(mut self, normals: Vec<[f32; 3]>) -> Self {
        self.normals = Some(normals);
        self
    }

    #[must_use]
    pub fn with_tangents(mut self, tangents: Vec<[f32; 3]>) -> Self {
        self.tangents = Some(tangents);
        self
    }

    #[must_use]
    pub fn with_tex_coords(mut self, tex_coords: Vec<[f32; 2]>) -> Self {
        self.tex_coords = Some(tex_coords);
        self
    }

    #[must_use]
    pub fn with_colors(mut self, colors: Vec<[f32; 3]>) -> Self {
        self.colors = Some(colors);
        self
    }

    #[must_use]
    pub fn with_faces(mut self, faces: Vec<Vec<u32>>) -> Self {
        self.faces = faces;
        self
    }

    #[must_use]
    pub fn with_material_index(mut self, index: usize) -> Self {
        self.material_index = index;
        self
    }

    #[must_use]
    pub fn with_bones(mut self, bones: Vec<ImportedBone>) -> Self {
        self.bones = bones;
        self
    }

    pub fn positions(&self) -> &[[f32; 3]] {
        &self.positions
    }

    pub fn normals(&self) -> Option<&[[f32; 3]]> {
        self.normals.as_deref()
    }

    pub fn tangents(&self) -> Option<&[[f32; 3]]> {
        self.tangents.as_deref()
    }

    pub fn tex_coords(&self) -> Option<&[[f32; 2]]> {
        self.tex_coords.as_deref()
    }

    pub fn colors(&self) -> Option<&[[f32; 3]]> {
        self.colors.as_deref()
    }

    pub fn faces(&self) -> &[Vec<u32>] {
        &self.faces
    }

    pub fn material_index(&self) -> usize {
        self.material_index
    }

    pub fn bones(&self) -> &[ImportedBone] {
        &self.bones
    }

    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }
}

/// A bone of an imported mesh: a named node reference with an inverse-bind
/// transform and the vertices it influences.
#[derive(Debug, Clone)]
pub struct ImportedBone {
    pub name: String,
    pub inverse_bind_transform: Mat4,
    pub weights: Vec<VertexWeight>,
}

impl ImportedBone {
    pub fn new(name: impl Into<String>, inverse_bind_transform: Mat4) -> Self {
        Self {
            name: name.into(),
            inverse_bind_transform,
            weights: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_weights(mut self, weights: Vec<VertexWeight>) -> Self {
        self.weights = weights;
        self
    }
}

/// One bone influence on one vertex.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VertexWeight {
    pub vertex: u32,
    pub weight: f32,
}

/// Light source kinds as reported by the import library.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImportedLightKind {
    Undefined,
    Directional,
    Point,
    Spot,
    Ambient,
    Area,
}

/// An imported light source, attached to the node of the same name.
#[derive(Debug, Clone)]
pub struct ImportedLight {
    pub name: String,
    pub kind: ImportedLightKind,
    pub color_diffuse: [f32; 3],
    pub color_specular: [f32; 3],
    pub color_ambient: [f32; 3],
    pub attenuation_constant: f32,
    pub attenuation_linear: f32,
    pub attenuation_quadratic: f32,
    /// Inner spot cone angle, radians.
    pub inner_cone_angle: f32,
    /// Outer spot cone angle, radians.
    pub outer_cone_angle: f32,
}

impl ImportedLight {
    pub fn new(name: impl Into<String>, kind: ImportedLightKind) -> Self {
        Self {
            name: name.into(),
            kind,
            color_diffuse: [0.0; 3],
            color_specular: [0.0; 3],
            color_ambient: [0.0; 3],
            attenuation_constant: 0.0,
            attenuation_linear: 0.0,
            attenuation_quadratic: 0.0,
            inner_cone_angle: 0.0,
            outer_cone_angle: 0.0,
        }
    }
}

/// An imported camera, attached to the node of the same name.
#[derive(Debug, Clone)]
pub struct ImportedCamera {
    pub name: String,
    pub horizontal_fov: f32,
    pub znear: f32,
    pub zfar: f32,
}

/// A texture embedded in the asset file instead of referenced on disk.
/// Only compressed payloads are carried; `format_hint` names the codec
/// ("png", "jpg", ...).
#[derive(Debug, Clone)]
pub struct EmbeddedTexture {
    pub format_hint: String,
    pub data: Vec<u8>,
}

impl EmbeddedTexture {
    pub fn new(format_hint: impl Into<String>, data: Vec<u8>) -> Self {
        Self {
            format_hint: format_hint.into(),
            data,
        }
    }
}

/// One animation of the imported scene.
#[derive(Debug, Clone, Default)]
pub struct ImportedAnimation {
    pub name: String,
    /// Total length in ticks.
    pub duration_ticks: f64,
    /// Tick rate; zero means the file did not specify one and
    /// `duration_ticks` is already in seconds.
    pub ticks_per_second: f64,
    pub channels: Vec<ImportedChannel>,
}

/// Keyframe tracks targeting a single named node.
#[derive(Debug, Clone, Default)]
pub struct ImportedChannel {
    pub target: String,
    pub position_keys: Vec<VectorKey>,
    pub rotation_keys: Vec<QuatKey>,
    pub scaling_keys: Vec<VectorKey>,
}

/// A timed 3-vector key. Time is in ticks.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VectorKey {
    pub time: f64,
    pub value: [f32; 3],
}

/// A timed quaternion key, `[x, y, z, w]`. Time is in ticks.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuatKey {
    pub time: f64,
    pub value: [f32; 4],
}
