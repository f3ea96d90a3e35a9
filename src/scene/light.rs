//! Light attachment for scene nodes.

/// Renderer light kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LightKind {
    Directional,
    Omni,
    Spot,
    Ambient,
}

/// A light attached to a node. Fields beyond `kind` are populated only
/// where the kind uses them: attenuation for omni and spot lights, cone
/// angles for spot lights.
#[derive(Debug, Clone)]
pub struct Light {
    pub kind: LightKind,
    pub color: Option<[f32; 4]>,
    /// Attenuation falloff exponent: 0 = none, 1 = linear, 2 = quadratic.
    pub attenuation_falloff: f32,
    /// Inner spot cone angle, radians.
    pub inner_cone_angle: f32,
    /// Outer spot cone angle, radians.
    pub outer_cone_angle: f32,
}

impl Light {
    pub fn new(kind: LightKind) -> Self {
        Self {
            kind,
            color: None,
            attenuation_falloff: 0.0,
            inner_cone_angle: 0.0,
            outer_cone_angle: 0.0,
        }
    }
}
