//! Conversion error type.

use std::path::PathBuf;

use thiserror::Error;

/// Fatal import failures. Anything recoverable (a missing texture file, an
/// unmatched bone name) is logged and skipped instead.
#[derive(Debug, Error)]
pub enum ImportError {
    /// The file extension is not in [`crate::formats::SUPPORTED_EXTENSIONS`].
    #[error("unsupported file extension: {0:?}")]
    UnsupportedExtension(String),

    /// The import backend failed to parse the file; `message` is the
    /// backend's own description.
    #[error("failed to import {path:?}: {message}")]
    Import { path: PathBuf, message: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_input() {
        let err = ImportError::UnsupportedExtension("exe".into());
        assert!(err.to_string().contains("exe"));

        let err = ImportError::Import {
            path: PathBuf::from("/tmp/broken.obj"),
            message: "truncated header".into(),
        };
        let text = err.to_string();
        assert!(text.contains("broken.obj"));
        assert!(text.contains("truncated header"));
    }
}
