// Error types shared by the animation crates.
//
// Cancellation has no variant here: an interrupt moves the animator to its
// stopped state instead.

use std::io;

use thiserror::Error;

/// Errors raised while building a frame sequence
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FrameError {
    /// A sequence needs at least one frame to cycle over
    #[error("frame sequence is empty")]
    EmptySequence,

    /// Frame at `index` contains nothing but whitespace
    #[error("frame {index} has no visible content")]
    BlankFrame { index: usize },
}

/// Errors that can end a playback run early
#[derive(Debug, Error)]
pub enum AnimatorError {
    /// Writing to the display surface failed (e.g. stdout was closed)
    #[error("failed to write to display: {0}")]
    Io(#[from] io::Error),

    /// The interrupt handler could not be registered
    #[error("failed to install signal handler: {0}")]
    Signal(#[source] io::Error),
}

/// Result type for animator operations
pub type AnimatorResult<T> = Result<T, AnimatorError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = FrameError::BlankFrame { index: 3 };
        assert_eq!(err.to_string(), "frame 3 has no visible content");

        assert_eq!(FrameError::EmptySequence.to_string(), "frame sequence is empty");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::BrokenPipe, "stdout closed");
        let err: AnimatorError = io_err.into();
        assert!(matches!(err, AnimatorError::Io(_)));
        assert!(err.to_string().contains("stdout closed"));
    }
}
