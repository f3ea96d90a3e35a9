//! Node hierarchy construction.
//!
//! A recursive pre-order walk over the imported tree. Each node's name and
//! transform are copied verbatim; geometry is built when the node carries
//! vertices; cameras and lights are attached to the node whose name they
//! carry. Bone information encountered along the way is collected into a
//! [`BoneCatalog`] for the skeleton stage.

use std::collections::HashMap;
use std::path::Path;

use log::warn;

use crate::convert::geometry::build_geometry;
use crate::convert::material::ImageCache;
use crate::imported::{ImportedLight, ImportedLightKind, ImportedNode, ImportedScene};
use crate::math::Mat4;
use crate::scene::{Camera, Light, LightKind, NodeId, SceneGraph, SceneNode};

/// Bone data accumulated while walking the imported tree: names in
/// first-encounter order plus each bone's inverse-bind transform.
#[derive(Debug, Default)]
pub(crate) struct BoneCatalog {
    pub names: Vec<String>,
    pub inverse_bind_transforms: HashMap<String, Mat4>,
}

impl BoneCatalog {
    fn record(&mut self, node: &ImportedNode, scene: &ImportedScene) {
        for mesh in node.meshes(scene) {
            for bone in mesh.bones() {
                self.names.push(bone.name.clone());
                self.inverse_bind_transforms
                    .entry(bone.name.clone())
                    .or_insert(bone.inverse_bind_transform);
            }
        }
    }
}

/// Builds the output node for `node` under `parent` and recurses into its
/// children.
pub(crate) fn build_node(
    node: &ImportedNode,
    scene: &ImportedScene,
    source_path: &Path,
    graph: &mut SceneGraph,
    parent: NodeId,
    cache: &mut ImageCache,
    bones: &mut BoneCatalog,
) -> NodeId {
    let mut out = SceneNode::new(node.name(), node.transform());
    if node.vertex_count(scene) > 0 {
        out.geometry = build_geometry(node, scene, source_path, cache);
    }
    out.camera = find_camera(node.name(), scene);
    out.light = find_light(node.name(), scene);
    bones.record(node, scene);

    let id = graph.add_node(parent, out);
    for child in node.children() {
        build_node(child, scene, source_path, graph, id, cache, bones);
    }
    id
}

/// First scene camera whose name matches the node name.
fn find_camera(node_name: &str, scene: &ImportedScene) -> Option<Camera> {
    scene
        .cameras()
        .iter()
        .find(|camera| camera.name == node_name)
        .map(|camera| Camera {
            field_of_view: camera.horizontal_fov,
            znear: camera.znear,
            zfar: camera.zfar,
        })
}

/// First scene light whose name matches the node name.
fn find_light(node_name: &str, scene: &ImportedScene) -> Option<Light> {
    scene
        .lights()
        .iter()
        .find(|light| light.name == node_name)
        .map(make_light)
}

fn make_light(imported: &ImportedLight) -> Light {
    let kind = match imported.kind {
        ImportedLightKind::Point => LightKind::Omni,
        ImportedLightKind::Spot => LightKind::Spot,
        ImportedLightKind::Ambient => LightKind::Ambient,
        ImportedLightKind::Directional | ImportedLightKind::Area | ImportedLightKind::Undefined => {
            LightKind::Directional
        }
    };
    let mut light = Light::new(kind);

    let rgb = if kind == LightKind::Ambient {
        imported.color_ambient
    } else {
        imported.color_specular
    };
    // All-zero is the exporter's "never set" value; anything else is a
    // real color, zero components included.
    if rgb != [0.0; 3] {
        light.color = Some([rgb[0], rgb[1], rgb[2], 1.0]);
    }

    if matches!(kind, LightKind::Omni | LightKind::Spot) {
        light.attenuation_falloff = if imported.attenuation_quadratic != 0.0 {
            2.0
        } else if imported.attenuation_linear != 0.0 {
            1.0
        } else {
            0.0
        };
    }
    if kind == LightKind::Spot {
        light.inner_cone_angle = imported.inner_cone_angle;
        light.outer_cone_angle = imported.outer_cone_angle;
        if imported.outer_cone_angle < imported.inner_cone_angle {
            warn!(
                "light {:?}: outer cone angle {} smaller than inner {}",
                imported.name, imported.outer_cone_angle, imported.inner_cone_angle
            );
        }
    }
    light
}
