//! Keyboard dispatch for the viewer

use crate::viewer::Direction;

/// A viewer action triggered by a key press
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewerCommand {
    Close,
    Navigate(Direction),
}

impl ViewerCommand {
    /// Map a `KeyboardEvent.key` value to a command. Unbound keys return `None`.
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "Escape" => Some(ViewerCommand::Close),
            "ArrowLeft" => Some(ViewerCommand::Navigate(Direction::Previous)),
            "ArrowRight" => Some(ViewerCommand::Navigate(Direction::Next)),
            _ => None,
        }
    }
}
