pub mod art;
pub mod cancel;
pub mod cli;
pub mod consts;
pub mod errors;
pub mod frame;

pub use cancel::CancellationToken;
pub use errors::{AnimatorError, AnimatorResult, FrameError};
pub use frame::{Frame, FrameSequence, PlaybackState};
