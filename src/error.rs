//! Crate-level error type and `Result` alias for stable, structured error handling.
//! Converts underlying I/O and external-session errors, and provides semantic
//! variants for input resolution and output collisions.
use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("External session error: {0}")]
    Session(#[from] crate::io::SessionError),

    #[error("Input path does not exist: {}", .path.display())]
    InputNotFound { path: PathBuf },

    #[error("Output file already exists: {}", .path.display())]
    OutputExists { path: PathBuf },

    #[error("Not a presentation file: {}", .path.display())]
    UnsupportedExtension { path: PathBuf },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collision_message_names_the_path() {
        let err = Error::OutputExists {
            path: PathBuf::from("/out/deck.pdf"),
        };
        assert_eq!(
            err.to_string(),
            "Output file already exists: /out/deck.pdf"
        );
    }

    #[test]
    fn session_errors_convert_into_crate_errors() {
        let session = crate::io::SessionError::MissingOutput {
            input: PathBuf::from("/slides/a.pptx"),
        };
        let err = Error::from(session);
        assert!(matches!(err, Error::Session(_)));
    }
}
