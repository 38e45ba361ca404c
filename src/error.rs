//! Error types for treedoc.

use std::path::PathBuf;

use thiserror::Error;

/// Failures while building the tree. Any of these aborts the whole walk.
#[derive(Debug, Error)]
pub enum WalkError {
    #[error("cannot resolve {path}: {source}")]
    Resolve {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot stat {path}: {source}")]
    Metadata {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot read directory {path}: {source}")]
    ReadDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{path} is not inside scan root {root}")]
    OutsideRoot { path: PathBuf, root: PathBuf },
}

/// Top-level error type for a treedoc run.
#[derive(Debug, Error)]
pub enum TreedocError {
    #[error("path not found: {0}")]
    RootNotFound(PathBuf),

    #[error("walk error: {0}")]
    Walk(#[from] WalkError),

    #[error("cannot write output '{path}': {source}")]
    Output {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Map an error to its exit code.
pub fn exit_code(error: &TreedocError) -> i32 {
    match error {
        TreedocError::RootNotFound(_) => 3,
        TreedocError::Walk(_) => 2,
        TreedocError::Output { .. } => 1,
        TreedocError::Io(_) => 1,
        TreedocError::Json(_) => 1,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes() {
        assert_eq!(exit_code(&TreedocError::RootNotFound("x".into())), 3);
        let walk = WalkError::ReadDir {
            path: "x".into(),
            source: std::io::Error::other("boom"),
        };
        assert_eq!(exit_code(&TreedocError::from(walk)), 2);
        assert_eq!(
            exit_code(&TreedocError::Io(std::io::Error::other("boom"))),
            1
        );
    }

    #[test]
    fn test_walk_error_display_names_path() {
        let err = WalkError::Resolve {
            path: "/tmp/broken".into(),
            source: std::io::Error::from(std::io::ErrorKind::NotFound),
        };
        assert!(err.to_string().contains("/tmp/broken"));
    }
}
