use std::time::Duration;

/// Pause between two frames
pub const DEFAULT_FRAME_DELAY: Duration = Duration::from_millis(300);

/// Upper bound on how long a cancelled wait keeps sleeping before noticing
pub const CANCEL_POLL_INTERVAL: Duration = Duration::from_millis(25);

pub const FAREWELL_MESSAGE: &str = "\n  Bye! 🐱\n";

// ESC[H homes the cursor, ESC[2J clears the screen, ESC[3J drops scrollback
pub const ANSI_CLEAR_SCREEN: &str = "\u{1b}[H\u{1b}[2J\u{1b}[3J";
