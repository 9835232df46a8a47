use std::io::{self, Stdout, Write};

use crossterm::cursor::{Hide, MoveTo, Show};
use crossterm::event::{self, Event};
use crossterm::style::Print;
use crossterm::terminal::{self, Clear, ClearType};
use crossterm::{execute, queue};
use tracing::{info, warn};

use crate::camera::Camera;
use crate::error::Result;
use crate::input::CameraCommand;
use crate::render::ScreenBuffer;

/// Raw-mode terminal session.
///
/// Raw mode is enabled on construction and restored on drop, so an early
/// return through `?` still leaves the shell usable. Log events emitted while
/// the session is open land in the drawn frame unless stderr is redirected.
pub struct Terminal {
    out: Stdout,
}

impl Terminal {
    /// Switches the terminal to raw mode and hides the cursor.
    ///
    /// # Errors
    ///
    /// Returns an error if the terminal cannot be configured.
    pub fn enter() -> Result<Self> {
        info!("entering raw mode");
        terminal::enable_raw_mode()?;
        let mut out = io::stdout();
        execute!(out, Hide)?;
        Ok(Self { out })
    }

    /// Clears the screen and draws the camera header followed by the grid.
    ///
    /// # Errors
    ///
    /// Returns an error if writing to the terminal fails.
    pub fn draw(&mut self, camera: &Camera, screen: &ScreenBuffer) -> Result<()> {
        queue!(self.out, Clear(ClearType::All), MoveTo(0, 0))?;
        // Raw mode does not translate `\n`, so every line ends with `\r\n`.
        for line in camera.to_string().lines() {
            queue!(self.out, Print(line), Print("\r\n"))?;
        }
        for row in screen.rows() {
            queue!(self.out, Print(ScreenBuffer::row_text(row)), Print("\r\n"))?;
        }
        self.out.flush()?;
        Ok(())
    }

    /// Blocks until a mapped key is pressed.
    ///
    /// # Errors
    ///
    /// Returns an error if reading terminal events fails.
    pub fn next_command(&mut self) -> Result<CameraCommand> {
        loop {
            if let Event::Key(key) = event::read()? {
                if let Some(command) = CameraCommand::from_key_event(&key) {
                    return Ok(command);
                }
            }
        }
    }
}

impl Drop for Terminal {
    fn drop(&mut self) {
        if let Err(err) = execute!(self.out, Show, Print("\r\n")) {
            warn!(%err, "failed to restore cursor");
        }
        if let Err(err) = terminal::disable_raw_mode() {
            warn!(%err, "failed to leave raw mode");
        }
    }
}
