// Display surface: where frames are written and how the screen is cleared
//
// Clearing is a capability chosen once at startup. The animator only ever
// asks to "clear the visible output area".

use std::io::{self, Write};
use std::process::Command;

use ascii_cat_utils::consts::ANSI_CLEAR_SCREEN;

/// Host-specific way of clearing the terminal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClearStrategy {
    /// Write ANSI erase sequences into the output stream
    AnsiEscape,
    /// Ask the console host to clear itself (`cmd /C cls`)
    ConsoleCommand,
    /// Leave the screen alone
    Disabled,
}

impl ClearStrategy {
    /// Pick the strategy for the platform this binary was built for
    pub fn for_host() -> Self {
        if cfg!(windows) {
            ClearStrategy::ConsoleCommand
        } else {
            ClearStrategy::AnsiEscape
        }
    }

    /// Clear the display. `out` is flushed first so nothing queued for the
    /// old screen lands on the new one.
    pub fn clear<W: Write>(&self, out: &mut W) -> io::Result<()> {
        match self {
            ClearStrategy::AnsiEscape => {
                out.write_all(ANSI_CLEAR_SCREEN.as_bytes())?;
                out.flush()
            }
            ClearStrategy::ConsoleCommand => {
                out.flush()?;
                let status = Command::new("cmd").args(["/C", "cls"]).status()?;
                if status.success() {
                    Ok(())
                } else {
                    Err(io::Error::new(
                        io::ErrorKind::Other,
                        format!("cls exited with {}", status),
                    ))
                }
            }
            ClearStrategy::Disabled => Ok(()),
        }
    }
}

/// Anything the animator can draw on
pub trait Surface {
    /// Clear the visible output area
    fn clear(&mut self) -> io::Result<()>;

    /// Write one frame's text
    fn write_frame(&mut self, content: &str) -> io::Result<()>;

    /// Write the goodbye shown after playback stops
    fn write_farewell(&mut self, message: &str) -> io::Result<()>;
}

/// Surface backed by a terminal writer, normally stdout
pub struct TerminalSurface<W: Write> {
    out: W,
    clear_strategy: ClearStrategy,
}

impl TerminalSurface<io::Stdout> {
    /// Standard output with the host's clear strategy
    pub fn stdout() -> Self {
        Self::new(io::stdout(), ClearStrategy::for_host())
    }
}

impl<W: Write> TerminalSurface<W> {
    pub fn new(out: W, clear_strategy: ClearStrategy) -> Self {
        Self {
            out,
            clear_strategy,
        }
    }

    pub fn clear_strategy(&self) -> ClearStrategy {
        self.clear_strategy
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn write_line(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.out, "{}", text)?;
        self.out.flush()
    }
}

impl<W: Write> Surface for TerminalSurface<W> {
    fn clear(&mut self) -> io::Result<()> {
        self.clear_strategy.clear(&mut self.out)
    }

    fn write_frame(&mut self, content: &str) -> io::Result<()> {
        self.write_line(content)
    }

    fn write_farewell(&mut self, message: &str) -> io::Result<()> {
        self.write_line(message)
    }
}
