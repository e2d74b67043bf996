// AnimationEngine trait and core types
use std::time::Duration;

/// A single frame of animation, ready to draw
#[derive(Debug, Clone)]
pub struct AnimationFrame {
    /// The rendered content for this frame
    pub content: String,
    /// Position of this frame within its cycle
    pub index: usize,
}

impl AnimationFrame {
    pub fn new(content: String, index: usize) -> Self {
        Self { content, index }
    }
}

/// Frame-based animation interface
pub trait AnimationEngine: Send + Sync {
    /// Generate the next frame of animation
    /// Returns None if animation is complete (for finite animations)
    fn next_frame(&mut self) -> Option<AnimationFrame>;

    /// How long each frame stays on screen
    fn frame_duration(&self) -> Duration;

    /// Frames per second implied by the frame duration
    fn target_fps(&self) -> f64 {
        let secs = self.frame_duration().as_secs_f64();
        if secs > 0.0 {
            1.0 / secs
        } else {
            f64::INFINITY
        }
    }

    /// Reset animation to initial state
    fn reset(&mut self);
}
