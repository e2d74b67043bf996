// Frame data model: single frames, the fixed sequence and the playback cursor

use crate::errors::FrameError;

/// One visual state of the animation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    content: String,
}

impl Frame {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
        }
    }

    /// Full text of the frame, exactly as written to the display
    pub fn content(&self) -> &str {
        &self.content
    }

    /// True when the frame has nothing visible to draw
    pub fn is_blank(&self) -> bool {
        self.content.trim().is_empty()
    }
}

impl From<&str> for Frame {
    fn from(content: &str) -> Self {
        Self::new(content)
    }
}

/// Ordered, non-empty, immutable list of frames making up one cycle
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameSequence {
    frames: Vec<Frame>,
}

impl FrameSequence {
    /// Build a sequence, rejecting an empty list or any blank frame.
    ///
    /// The non-empty guarantee is what lets [`PlaybackState`] wrap its cursor
    /// without a modulo-by-zero.
    pub fn new(frames: Vec<Frame>) -> Result<Self, FrameError> {
        if frames.is_empty() {
            return Err(FrameError::EmptySequence);
        }
        if let Some(index) = frames.iter().position(Frame::is_blank) {
            return Err(FrameError::BlankFrame { index });
        }
        Ok(Self { frames })
    }

    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn get(&self, index: usize) -> Option<&Frame> {
        self.frames.get(index)
    }

    pub fn first(&self) -> &Frame {
        &self.frames[0]
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Frame> {
        self.frames.iter()
    }
}

/// Cursor into a frame sequence of known length.
///
/// Invariant: `cursor < len` and `len >= 1`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaybackState {
    cursor: usize,
    len: usize,
    steps: u64,
}

impl PlaybackState {
    /// Create a cursor for `sequence`, starting at its first frame
    pub fn new(sequence: &FrameSequence) -> Self {
        Self {
            cursor: 0,
            len: sequence.len(),
            steps: 0,
        }
    }

    /// Index of the frame that displays next
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Total number of frames handed out since creation or the last reset
    pub fn steps(&self) -> u64 {
        self.steps
    }

    /// Return the index to display now and move the cursor, wrapping to 0
    /// after the last frame.
    pub fn advance(&mut self) -> usize {
        let current = self.cursor;
        self.cursor = (self.cursor + 1) % self.len;
        self.steps += 1;
        current
    }

    pub fn reset(&mut self) {
        self.cursor = 0;
        self.steps = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sequence_of(len: usize) -> FrameSequence {
        let frames = (0..len).map(|i| Frame::new(format!("frame {}", i))).collect();
        FrameSequence::new(frames).unwrap()
    }

    #[test]
    fn test_empty_sequence_rejected() {
        assert_eq!(FrameSequence::new(vec![]), Err(FrameError::EmptySequence));
    }

    #[test]
    fn test_blank_frame_rejected() {
        let frames = vec![Frame::from("=^.^="), Frame::from("  \n\t\n")];
        assert_eq!(
            FrameSequence::new(frames),
            Err(FrameError::BlankFrame { index: 1 })
        );
    }

    #[test]
    fn test_sequence_preserves_order() {
        let seq = sequence_of(3);
        let contents: Vec<&str> = seq.iter().map(Frame::content).collect();
        assert_eq!(contents, vec!["frame 0", "frame 1", "frame 2"]);
        assert_eq!(seq.first().content(), "frame 0");
        assert!(seq.get(3).is_none());
    }

    #[test]
    fn test_cursor_returns_to_start_after_one_cycle() {
        let seq = sequence_of(8);
        let mut state = PlaybackState::new(&seq);

        let shown: Vec<usize> = (0..8).map(|_| state.advance()).collect();
        assert_eq!(shown, vec![0, 1, 2, 3, 4, 5, 6, 7]);
        assert_eq!(state.cursor(), 0);
    }

    #[test]
    fn test_cursor_invariant_over_full_cycles() {
        let seq = sequence_of(8);
        let mut state = PlaybackState::new(&seq);

        for _ in 0..24 {
            state.advance();
            assert!(state.cursor() < seq.len());
        }
        assert_eq!(state.cursor(), 0);
        assert_eq!(state.steps(), 24);
    }

    #[test]
    fn test_single_frame_cursor_stays_at_zero() {
        let seq = sequence_of(1);
        let mut state = PlaybackState::new(&seq);

        for _ in 0..5 {
            assert_eq!(state.advance(), 0);
        }
        assert_eq!(state.cursor(), 0);
    }

    #[test]
    fn test_reset() {
        let seq = sequence_of(4);
        let mut state = PlaybackState::new(&seq);
        state.advance();
        state.advance();

        state.reset();
        assert_eq!(state.cursor(), 0);
        assert_eq!(state.steps(), 0);
    }
}
