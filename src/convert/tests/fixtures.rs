//! Shared scene fixtures for the pipeline tests.

use std::io::Cursor;
use std::path::PathBuf;

use image::{ImageOutputFormat, Rgba, RgbaImage};

use crate::imported::{
    ImportedBone, ImportedMaterial, ImportedMesh, ImportedNode, ImportedScene, VertexWeight,
};
use crate::math::MAT4_IDENTITY;

/// A unit cube: 8 shared vertices, 12 triangles, material 0.
pub fn cube_mesh() -> ImportedMesh {
    let positions = vec![
        [0.0, 0.0, 0.0],
        [1.0, 0.0, 0.0],
        [1.0, 1.0, 0.0],
        [0.0, 1.0, 0.0],
        [0.0, 0.0, 1.0],
        [1.0, 0.0, 1.0],
        [1.0, 1.0, 1.0],
        [0.0, 1.0, 1.0],
    ];
    let faces = vec![
        vec![0, 1, 2],
        vec![0, 2, 3],
        vec![4, 6, 5],
        vec![4, 7, 6],
        vec![0, 4, 5],
        vec![0, 5, 1],
        vec![3, 2, 6],
        vec![3, 6, 7],
        vec![0, 3, 7],
        vec![0, 7, 4],
        vec![1, 5, 6],
        vec![1, 6, 2],
    ];
    ImportedMesh::new(positions).with_faces(faces)
}

/// A scene with one cube node and one plain-color material.
pub fn cube_scene() -> ImportedScene {
    let root = ImportedNode::new("cube").with_mesh_indices(vec![0]);
    ImportedScene::new(root)
        .with_meshes(vec![cube_mesh()])
        .with_materials(vec![ImportedMaterial::new("gray").with_color(
            crate::imported::keys::COLOR_DIFFUSE,
            [0.5, 0.5, 0.5, 1.0],
        )])
}

/// A quad skinned by two bones, each owning one edge of the quad with
/// full weight. Node layout:
///
/// `model` (mesh) / `armature` / { `bone_a` / `bone_tip`, `bone_b` }
pub fn skinned_quad_scene() -> ImportedScene {
    let bones = vec![
        ImportedBone::new("bone_a", MAT4_IDENTITY).with_weights(vec![
            VertexWeight { vertex: 0, weight: 1.0 },
            VertexWeight { vertex: 1, weight: 1.0 },
        ]),
        ImportedBone::new("bone_b", MAT4_IDENTITY).with_weights(vec![
            VertexWeight { vertex: 2, weight: 1.0 },
            VertexWeight { vertex: 3, weight: 1.0 },
        ]),
    ];
    let mesh = ImportedMesh::new(vec![
        [0.0, 0.0, 0.0],
        [1.0, 0.0, 0.0],
        [1.0, 1.0, 0.0],
        [0.0, 1.0, 0.0],
    ])
    .with_faces(vec![vec![0, 1, 2], vec![0, 2, 3]])
    .with_bones(bones);

    let model = ImportedNode::new("model").with_mesh_indices(vec![0]);
    let armature = ImportedNode::new("armature").with_children(vec![
        ImportedNode::new("bone_a").with_children(vec![ImportedNode::new("bone_tip")]),
        ImportedNode::new("bone_b"),
    ]);
    let root = ImportedNode::new("scene").with_children(vec![model, armature]);
    ImportedScene::new(root)
        .with_meshes(vec![mesh])
        .with_materials(vec![ImportedMaterial::new("skin")])
}

/// Encodes a 2x2 single-color PNG.
pub fn png_bytes(r: u8, g: u8, b: u8) -> Vec<u8> {
    let image = RgbaImage::from_pixel(2, 2, Rgba([r, g, b, 255]));
    let mut buffer = Cursor::new(Vec::new());
    image
        .write_to(&mut buffer, ImageOutputFormat::Png)
        .expect("png encoding");
    buffer.into_inner()
}

/// A fresh per-test scratch directory under the system temp dir.
pub fn scratch_dir(test_name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("assetkit-{}-{test_name}", std::process::id()));
    std::fs::create_dir_all(&dir).expect("create scratch dir");
    dir
}
