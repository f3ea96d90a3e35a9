//! Supported import file formats.

/// File extensions the import backend is expected to handle, lower-case,
/// without the leading dot.
pub const SUPPORTED_EXTENSIONS: &[&str] = &[
    "dae", "fbx", "obj", "scn", "md3", "zgl", "xgl", "wrl", "stl", "smd", "raw", "q3s", "q3o",
    "ply", "xml", "mesh", "off", "nff", "m3sd", "md5anim", "md5mesh", "md2", "irr", "ifc", "dxf",
    "cob", "bvh", "b3d", "blend", "hmp", "3ds", "3d", "ms3d", "mdl", "ase", "gltf",
];

/// Whether a file extension (without the dot, any case) can be imported.
pub fn can_import(extension: &str) -> bool {
    SUPPORTED_EXTENSIONS
        .iter()
        .any(|supported| supported.eq_ignore_ascii_case(extension))
}
