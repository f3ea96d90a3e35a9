//! Post-processing step flags handed to the import backend.
//!
//! Bit values match the import library's wire values so a native backend
//! can pass them through unchanged.

use bitflags::bitflags;

bitflags! {
    /// Steps the import library runs on a scene after parsing it.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct PostProcess: u32 {
        const CALC_TANGENT_SPACE = 0x1;
        const JOIN_IDENTICAL_VERTICES = 0x2;
        const MAKE_LEFT_HANDED = 0x4;
        const TRIANGULATE = 0x8;
        const REMOVE_COMPONENT = 0x10;
        const GEN_NORMALS = 0x20;
        const GEN_SMOOTH_NORMALS = 0x40;
        const SPLIT_LARGE_MESHES = 0x80;
        const PRE_TRANSFORM_VERTICES = 0x100;
        const LIMIT_BONE_WEIGHTS = 0x200;
        const VALIDATE_DATA_STRUCTURE = 0x400;
        const IMPROVE_CACHE_LOCALITY = 0x800;
        const REMOVE_REDUNDANT_MATERIALS = 0x1000;
        const FIX_INFACING_NORMALS = 0x2000;
        const SORT_BY_PRIMITIVE_TYPE = 0x8000;
        const FIND_DEGENERATES = 0x10000;
        const FIND_INVALID_DATA = 0x20000;
        const GEN_UV_COORDS = 0x40000;
        const TRANSFORM_UV_COORDS = 0x80000;
        const FIND_INSTANCES = 0x100000;
        const OPTIMIZE_MESHES = 0x200000;
        const OPTIMIZE_GRAPH = 0x400000;
        const FLIP_UVS = 0x800000;
        const FLIP_WINDING_ORDER = 0x1000000;
        const SPLIT_BY_BONE_COUNT = 0x2000000;
        const DEBONE = 0x4000000;
    }
}

impl PostProcess {
    /// Default preset used by [`crate::convert::import_scene`] callers:
    /// triangulated, UV-flipped, primitive-sorted scenes.
    pub const DEFAULT_QUALITY: Self = Self::from_bits_retain(
        Self::TRIANGULATE.bits() | Self::FLIP_UVS.bits() | Self::SORT_BY_PRIMITIVE_TYPE.bits(),
    );

    /// Fastest preset that still yields renderable data.
    pub const REALTIME_FAST: Self = Self::from_bits_retain(
        Self::CALC_TANGENT_SPACE.bits()
            | Self::GEN_NORMALS.bits()
            | Self::JOIN_IDENTICAL_VERTICES.bits()
            | Self::TRIANGULATE.bits()
            | Self::GEN_UV_COORDS.bits()
            | Self::SORT_BY_PRIMITIVE_TYPE.bits(),
    );

    /// Balanced preset for real-time rendering.
    pub const REALTIME_QUALITY: Self = Self::from_bits_retain(
        Self::CALC_TANGENT_SPACE.bits()
            | Self::GEN_SMOOTH_NORMALS.bits()
            | Self::JOIN_IDENTICAL_VERTICES.bits()
            | Self::IMPROVE_CACHE_LOCALITY.bits()
            | Self::LIMIT_BONE_WEIGHTS.bits()
            | Self::REMOVE_REDUNDANT_MATERIALS.bits()
            | Self::SPLIT_LARGE_MESHES.bits()
            | Self::TRIANGULATE.bits()
            | Self::GEN_UV_COORDS.bits()
            | Self::SORT_BY_PRIMITIVE_TYPE.bits()
            | Self::FIND_DEGENERATES.bits()
            | Self::FIND_INVALID_DATA.bits(),
    );

    /// Heaviest preset: everything in [`Self::REALTIME_QUALITY`] plus
    /// instance detection and mesh/graph optimization.
    pub const REALTIME_MAX_QUALITY: Self = Self::from_bits_retain(
        Self::REALTIME_QUALITY.bits()
            | Self::FIND_INSTANCES.bits()
            | Self::VALIDATE_DATA_STRUCTURE.bits()
            | Self::OPTIMIZE_MESHES.bits(),
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_quality_contents() {
        let p = PostProcess::DEFAULT_QUALITY;
        assert!(p.contains(PostProcess::TRIANGULATE));
        assert!(p.contains(PostProcess::FLIP_UVS));
        assert!(p.contains(PostProcess::SORT_BY_PRIMITIVE_TYPE));
        assert!(!p.contains(PostProcess::GEN_NORMALS));
    }

    #[test]
    fn presets_are_supersets() {
        assert!(PostProcess::REALTIME_MAX_QUALITY.contains(PostProcess::REALTIME_QUALITY));
        assert!(PostProcess::REALTIME_QUALITY.contains(PostProcess::TRIANGULATE));
    }

    #[test]
    fn raw_bits_round_trip() {
        assert_eq!(PostProcess::TRIANGULATE.bits(), 0x8);
        assert_eq!(PostProcess::FLIP_UVS.bits(), 0x80_0000);
        let p = PostProcess::from_bits_retain(0x8 | 0x20);
        assert!(p.contains(PostProcess::TRIANGULATE | PostProcess::GEN_NORMALS));
    }
}
