pub mod config;
pub mod events;
pub mod simulation;

pub use self::config::SimulationConfig;
pub use self::events::{BodyEvent, BodyEventType, CollisionEvent, EventQueue};
pub use self::simulation::{BodySnapshot, Simulation};

#[cfg(feature = "serialize")]
use serde::{Deserialize, Serialize};

/// The rectangular region the ball lives in
///
/// Bounds are supplied by the presentation layer on every tick rather than
/// stored, so window resizes take effect immediately.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct ArenaBounds {
    /// Arena width in pixels
    pub width: f32,

    /// Arena height in pixels
    pub height: f32,
}

impl ArenaBounds {
    /// Creates new bounds
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}
