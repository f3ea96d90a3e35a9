//! End-to-end conversion scenarios.

use std::path::Path;

use crate::convert::tests::fixtures::{cube_scene, png_bytes, skinned_quad_scene};
use crate::convert::{convert_scene, import_scene, ImportBackend, ImportError};
use crate::imported::{
    EmbeddedTexture, ImportedMaterial, ImportedScene, TextureSlot,
};
use crate::postprocess::PostProcess;

#[test]
fn cube_converts_to_a_single_geometry_node() {
    let graph = convert_scene(&cube_scene(), Path::new("/assets/cube.obj"));

    // Anonymous graph root plus the cube node.
    assert_eq!(graph.node_count(), 2);
    let cube = graph.find("cube").expect("cube node");
    let geometry = graph.node(cube).geometry.as_ref().expect("geometry");

    println!(
        "cube: {} vertices, {} triangles, {} materials",
        geometry.vertex_count(),
        geometry.triangle_count(),
        geometry.materials.len()
    );
    assert_eq!(geometry.vertex_count(), 8);
    assert_eq!(geometry.triangle_count(), 12);
    assert_eq!(geometry.elements.len(), 1);
    assert_eq!(geometry.materials.len(), 1);
    let diffuse = geometry.materials[0].diffuse.as_ref().expect("diffuse");
    assert_eq!(diffuse.color(), Some([0.5, 0.5, 0.5, 1.0]));

    assert!(graph.skeleton.is_none());
    assert!(graph.animations.is_empty());
}

#[test]
fn skinned_quad_gets_skeleton_and_skinning() {
    let graph = convert_scene(&skinned_quad_scene(), Path::new("/assets/quad.dae"));

    let skeleton = graph.skeleton.as_ref().expect("skeleton");
    assert_eq!(skeleton.bone_names, vec!["bone_a", "bone_b"]);
    assert_eq!(skeleton.bones.len(), 2);
    assert_eq!(skeleton.inverse_bind_transforms.len(), 2);
    // Both bones sit at the same depth, so the root is their parent.
    assert_eq!(skeleton.root, graph.find("armature").unwrap());

    let model = graph.find("model").unwrap();
    let skinning = graph.node(model).skinning.as_ref().expect("skinning");
    assert_eq!(skinning.influences_per_vertex, 1);
    assert_eq!(skinning.weights, vec![1.0, 1.0, 1.0, 1.0]);
    assert_eq!(skinning.bone_indices, vec![0, 0, 1, 1]);
    assert_eq!(skinning.vertex_count(), 4);

    // Bone nodes themselves carry no skinning.
    assert!(graph.node(graph.find("bone_a").unwrap()).skinning.is_none());
}

#[test]
fn embedded_texture_lands_on_the_diffuse_channel() {
    let scene = ImportedScene::new(
        crate::imported::ImportedNode::new("cube").with_mesh_indices(vec![0]),
    )
    .with_meshes(vec![super::fixtures::cube_mesh()])
    .with_materials(vec![
        ImportedMaterial::new("textured").with_texture(TextureSlot::Diffuse, "*0"),
    ])
    .with_embedded_textures(vec![EmbeddedTexture::new("png", png_bytes(10, 20, 30))]);

    let graph = convert_scene(&scene, Path::new("/assets/cube.fbx"));
    let cube = graph.find("cube").unwrap();
    let geometry = graph.node(cube).geometry.as_ref().unwrap();
    let image = geometry.materials[0]
        .diffuse
        .as_ref()
        .and_then(|channel| channel.image())
        .expect("diffuse image");
    assert_eq!((image.width, image.height), (2, 2));
    assert_eq!(&image.data[..4], &[10, 20, 30, 255]);
}

struct StubBackend {
    expected_steps: PostProcess,
}

impl ImportBackend for StubBackend {
    fn import_file(&self, path: &Path, steps: PostProcess) -> Result<ImportedScene, String> {
        assert_eq!(steps, self.expected_steps);
        if path.file_stem().is_some_and(|stem| stem == "broken") {
            Err("truncated header".into())
        } else {
            Ok(cube_scene())
        }
    }
}

#[test]
fn import_scene_round_trip() {
    let backend = StubBackend {
        expected_steps: PostProcess::DEFAULT_QUALITY,
    };
    let graph = import_scene(&backend, "/assets/cube.obj", PostProcess::DEFAULT_QUALITY)
        .expect("import should succeed");
    assert!(graph.find("cube").is_some());
}

#[test]
fn unsupported_extension_is_rejected_before_the_backend_runs() {
    struct PanicBackend;
    impl ImportBackend for PanicBackend {
        fn import_file(&self, _: &Path, _: PostProcess) -> Result<ImportedScene, String> {
            panic!("backend must not run for unsupported files");
        }
    }

    let err = import_scene(&PanicBackend, "/assets/cube.exe", PostProcess::DEFAULT_QUALITY)
        .expect_err("exe must be rejected");
    match err {
        ImportError::UnsupportedExtension(ext) => assert_eq!(ext, "exe"),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn backend_failure_carries_path_and_message() {
    let backend = StubBackend {
        expected_steps: PostProcess::REALTIME_FAST,
    };
    let err = import_scene(&backend, "/assets/broken.obj", PostProcess::REALTIME_FAST)
        .expect_err("backend error must propagate");
    match err {
        ImportError::Import { path, message } => {
            assert!(path.ends_with("broken.obj"));
            assert_eq!(message, "truncated header");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}
