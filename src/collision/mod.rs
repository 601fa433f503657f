mod resolver;

pub use self::resolver::{resolve_bounds, WallContact};

#[cfg(feature = "serialize")]
use serde::{Deserialize, Serialize};

/// The four arena walls
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub enum Wall {
    Left,
    Right,
    Top,
    Bottom,
}
