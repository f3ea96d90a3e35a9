//! Animation clip extraction.

use std::path::Path;

use log::warn;

use crate::imported::{ImportedChannel, ImportedScene};
use crate::scene::{AnimationClip, ChannelTracks, SceneGraph};

/// Extracts every animation of the scene into the graph's clip table.
///
/// Clips are keyed `"<file stem>-<n>"` with n counted from 1 in file
/// order. Durations are normalized from ticks to seconds when the file
/// carries a tick rate; keyframes are copied verbatim, no resampling.
pub(crate) fn build_animations(scene: &ImportedScene, source_path: &Path, graph: &mut SceneGraph) {
    let stem = source_path
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default();

    for (index, animation) in scene.animations().iter().enumerate() {
        let key = format!("{}-{}", stem, index + 1);
        let duration = if animation.ticks_per_second != 0.0 {
            animation.duration_ticks / animation.ticks_per_second
        } else {
            animation.duration_ticks
        };

        let mut clip = AnimationClip {
            key: key.clone(),
            duration,
            channels: Default::default(),
        };
        for channel in &animation.channels {
            let tracks = build_channel(channel, graph);
            clip.channels.insert(channel.target.clone(), tracks);
        }
        graph.animations.insert(key, clip);
    }
}

fn build_channel(channel: &ImportedChannel, graph: &SceneGraph) -> ChannelTracks {
    let target = graph.find(&channel.target);
    if target.is_none() {
        warn!(
            "animation channel targets unknown node {:?}, keeping it unbound",
            channel.target
        );
    }

    let mut tracks = ChannelTracks {
        target,
        ..Default::default()
    };
    for key in &channel.position_keys {
        tracks.translation.push(key.time as f32, key.value);
    }
    for key in &channel.rotation_keys {
        tracks.rotation.push(key.time as f32, key.value);
    }
    for key in &channel.scaling_keys {
        tracks.scale.push(key.time as f32, key.value);
    }
    tracks
}
