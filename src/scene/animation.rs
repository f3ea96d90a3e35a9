//! Keyframe animation clips.

use std::collections::HashMap;

use crate::scene::NodeId;

/// Parallel time/value keyframe arrays. Times are seconds unless the
/// source file carried no tick rate, in which case they are raw ticks.
#[derive(Debug, Clone, Default)]
pub struct KeyframeTrack<T> {
    pub times: Vec<f32>,
    pub values: Vec<T>,
}

impl<T> KeyframeTrack<T> {
    pub fn len(&self) -> usize {
        self.times.len()
    }

    pub fn is_empty(&self) -> bool {
        self.times.is_empty()
    }

    pub fn push(&mut self, time: f32, value: T) {
        self.times.push(time);
        self.values.push(value);
    }
}

/// The tracks of one animation channel, bound to one target node.
#[derive(Debug, Clone, Default)]
pub struct ChannelTracks {
    /// The node the channel was retargeted onto, `None` when no node with
    /// the channel's target name exists.
    pub target: Option<NodeId>,
    pub translation: KeyframeTrack<[f32; 3]>,
    /// Quaternion keys, `[x, y, z, w]`.
    pub rotation: KeyframeTrack<[f32; 4]>,
    pub scale: KeyframeTrack<[f32; 3]>,
}

/// One extracted animation, keyed scene-wide by `key`.
#[derive(Debug, Clone, Default)]
pub struct AnimationClip {
    /// `"<file stem>-<n>"`, n counted from 1 in file order.
    pub key: String,
    /// Clip length in seconds (raw ticks when the file had no tick rate).
    pub duration: f64,
    /// Channels keyed by target node name.
    pub channels: HashMap<String, ChannelTracks>,
}
