//! Minimal math types shared by the imported and output scene models.
//!
//! Transforms are carried as plain `[f32; 16]` arrays (row-major) so the
//! data model stays free of a linear-algebra dependency. The converter
//! copies transforms verbatim and never needs matrix arithmetic.

/// 4x4 transform, row-major: `m[row * 4 + col]`.
pub type Mat4 = [f32; 16];

/// Row-major identity transform.
#[rustfmt::skip]
pub const MAT4_IDENTITY: Mat4 = [
    1.0, 0.0, 0.0, 0.0,
    0.0, 1.0, 0.0, 0.0,
    0.0, 0.0, 1.0, 0.0,
    0.0, 0.0, 0.0, 1.0,
];

/// Build a row-major translation transform.
pub fn mat4_from_translation(x: f32, y: f32, z: f32) -> Mat4 {
    let mut m = MAT4_IDENTITY;
    m[3] = x;
    m[7] = y;
    m[11] = z;
    m
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_diagonal() {
        for row in 0..4 {
            for col in 0..4 {
                let expected = if row == col { 1.0 } else { 0.0 };
                assert_eq!(MAT4_IDENTITY[row * 4 + col], expected);
            }
        }
    }

    #[test]
    fn translation_in_last_column() {
        let m = mat4_from_translation(1.0, 2.0, 3.0);
        assert_eq!(m[3], 1.0);
        assert_eq!(m[7], 2.0);
        assert_eq!(m[11], 3.0);
        assert_eq!(m[15], 1.0);
    }
}
