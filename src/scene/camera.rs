//! Camera attachment for scene nodes.

/// A camera attached to a node. Values are copied verbatim from the
/// imported camera.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    pub field_of_view: f32,
    pub znear: f32,
    pub zfar: f32,
}
