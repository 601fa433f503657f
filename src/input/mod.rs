//! Typed input messages from the presentation layer.
//!
//! Presentation toolkits translate their raw pointer, key and widget
//! events into these messages and feed them to
//! [`Simulation::handle_input`](crate::core::Simulation::handle_input).
//! Pointer positions are in arena coordinates.

use crate::bodies::Material;
use crate::forces::ForceMode;
use crate::math::Vector2;

#[cfg(feature = "serialize")]
use serde::{Deserialize, Serialize};

/// Arrow keys steering the wind direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub enum ArrowKey {
    Up,
    Down,
    Left,
    Right,
}

impl ArrowKey {
    /// Unit vector for the key in arena coordinates (y grows down)
    pub fn unit(&self) -> Vector2 {
        match self {
            ArrowKey::Up => -Vector2::unit_y(),
            ArrowKey::Down => Vector2::unit_y(),
            ArrowKey::Left => -Vector2::unit_x(),
            ArrowKey::Right => Vector2::unit_x(),
        }
    }
}

/// A single input message for the simulation
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serialize", derive(Serialize))]
pub enum InputEvent {
    /// Pointer pressed at the given position
    PointerDown(Vector2),

    /// Pointer moved to the given position
    PointerMove(Vector2),

    /// Pointer released
    PointerUp,

    /// An arrow key was pressed
    KeyDown(ArrowKey),

    /// A mode button was toggled
    ModeToggle(ForceMode),

    /// A material swatch was picked
    MaterialSelect(Material),
}
