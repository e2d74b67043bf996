// Cat animation: cycles a fixed frame sequence at a fixed pace

use std::time::Duration;

use ascii_cat_utils::art::default_frames;
use ascii_cat_utils::consts::DEFAULT_FRAME_DELAY;
use ascii_cat_utils::{FrameError, FrameSequence, PlaybackState};

use super::engine::{AnimationEngine, AnimationFrame};

/// Infinite animation over a frame sequence, wrapping after the last frame
pub struct CatAnimation {
    frames: FrameSequence,
    playback: PlaybackState,
    frame_delay: Duration,
}

impl CatAnimation {
    pub fn new(frames: FrameSequence) -> Self {
        let playback = PlaybackState::new(&frames);
        Self {
            frames,
            playback,
            frame_delay: DEFAULT_FRAME_DELAY,
        }
    }

    /// The built-in "my first PR!" cat
    pub fn default_cat() -> Result<Self, FrameError> {
        Ok(Self::new(default_frames()?))
    }

    /// Set a custom delay between frames (for testing or pacing)
    pub fn with_frame_delay(mut self, frame_delay: Duration) -> Self {
        self.frame_delay = frame_delay;
        self
    }

    /// Index of the frame that `next_frame` will return
    pub fn cursor(&self) -> usize {
        self.playback.cursor()
    }

    pub fn frames(&self) -> &FrameSequence {
        &self.frames
    }
}

impl AnimationEngine for CatAnimation {
    fn next_frame(&mut self) -> Option<AnimationFrame> {
        let index = self.playback.advance();
        let frame = self.frames.get(index)?;
        Some(AnimationFrame::new(frame.content().to_string(), index))
    }

    fn frame_duration(&self) -> Duration {
        self.frame_delay
    }

    fn reset(&mut self) {
        self.playback.reset();
    }
}
