use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use tracing::debug;

use crate::camera::Camera;
use crate::math::Vector3;

/// A single camera action decoded from a key press.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CameraCommand {
    /// Translate along world axes, in units of the move step.
    Move(Vector3),
    /// Turn by the given number of turn steps.
    Turn { yaw: f64, pitch: f64 },
    /// Leave the viewer.
    Quit,
}

impl CameraCommand {
    /// Maps a key code to a command.
    ///
    /// | key | command |
    /// |---|---|
    /// | `w` / `s` | +X / -X |
    /// | `a` / `d` | -Y / +Y |
    /// | `r` / `f` | +Z / -Z |
    /// | up / down | pitch up / down |
    /// | left / right | yaw down / up |
    /// | `q` / Esc | quit |
    #[must_use]
    pub fn from_key_code(code: KeyCode) -> Option<Self> {
        let command = match code {
            KeyCode::Char('w') => Self::Move(Vector3::x()),
            KeyCode::Char('s') => Self::Move(-Vector3::x()),
            KeyCode::Char('a') => Self::Move(-Vector3::y()),
            KeyCode::Char('d') => Self::Move(Vector3::y()),
            KeyCode::Char('r') => Self::Move(Vector3::z()),
            KeyCode::Char('f') => Self::Move(-Vector3::z()),
            KeyCode::Up => Self::Turn {
                yaw: 0.0,
                pitch: 1.0,
            },
            KeyCode::Down => Self::Turn {
                yaw: 0.0,
                pitch: -1.0,
            },
            KeyCode::Left => Self::Turn {
                yaw: -1.0,
                pitch: 0.0,
            },
            KeyCode::Right => Self::Turn {
                yaw: 1.0,
                pitch: 0.0,
            },
            KeyCode::Char('q') | KeyCode::Esc => Self::Quit,
            _ => return None,
        };
        Some(command)
    }

    /// Maps a terminal key event. Key releases are ignored;
    /// Ctrl-C always quits since raw mode swallows the signal.
    #[must_use]
    pub fn from_key_event(event: &KeyEvent) -> Option<Self> {
        if event.kind == KeyEventKind::Release {
            return None;
        }
        if event.modifiers.contains(KeyModifiers::CONTROL) {
            return match event.code {
                KeyCode::Char('c') => Some(Self::Quit),
                _ => None,
            };
        }
        Self::from_key_code(event.code)
    }

    /// Applies the command to `camera`, scaling by the configured steps.
    ///
    /// Returns `false` for [`CameraCommand::Quit`].
    pub fn apply(self, camera: &mut Camera, move_step: f64, turn_step: f64) -> bool {
        debug!(command = ?self, "camera command");
        match self {
            Self::Move(delta) => {
                camera.translate(&(delta * move_step));
                true
            }
            Self::Turn { yaw, pitch } => {
                camera.rotate(yaw * turn_step, pitch * turn_step);
                true
            }
            Self::Quit => false,
        }
    }
}
