// Built-in art: a cat holding up a "my first PR!" sign.
//
// The sign sways by one column from frame to frame and the cat blinks and
// smiles along the way.

use crate::errors::FrameError;
use crate::frame::{Frame, FrameSequence};

const CAT_FRAMES: [&str; 8] = [
    r"
          +--------------+
          | my first PR! |
          +--------------+
          /
     /\_/\
    ( o.o )
     > ^ <
     /| |\
    (_| |_)
    ",
    r"
         +--------------+
         | my first PR! |
         +--------------+
        /
     /\_/\
    ( o.o )
     > ^ <
     /| |\
    (_| |_)
    ",
    r"
        +--------------+
        | my first PR! |
        +--------------+
       /
     /\_/\
    ( o.o )
     > ^ <
     /| |\
    (_| |_)
    ",
    r"
         +--------------+
         | my first PR! |
         +--------------+
        /
     /\_/\
    ( o.o )
     > ^ <
     /| |\
    (_| |_)
    ",
    r"
          +--------------+
          | my first PR! |
          +--------------+
          /
     /\_/\
    ( ^.^ )
     > ^ <
     /| |\
    (_| |_)
    ",
    r"
          +--------------+
          | my first PR! |
          +--------------+
          /
     /\_/\
    ( o.o )
     > ^ <
     /| |\
    (_| |_)
    ",
    r"
         +--------------+
         | my first PR! |
         +--------------+
        /
     /\_/\
    ( -.- )
     > ^ <
     /| |\
    (_| |_)
    ",
    r"
          +--------------+
          | my first PR! |
          +--------------+
          /
     /\_/\
    ( o.o )
     > ^ <
     /| |\
    (_| |_)
    ",
];

/// The built-in eight-frame cat cycle
pub fn default_frames() -> Result<FrameSequence, FrameError> {
    FrameSequence::new(CAT_FRAMES.iter().copied().map(Frame::from).collect())
}
