#[cfg(feature = "serialize")]
use serde::{Deserialize, Serialize};

/// The force regimes the simulation can run under
///
/// At most one mode is active at a time. `None` means the ball coasts with
/// whatever velocity it already has.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub enum ForceMode {
    /// No ambient force
    #[default]
    None,

    /// Constant downward pull, with ground drag while the ball rests on
    /// the floor
    Gravity,

    /// Velocity-proportional decay applied on collision ticks
    Friction,

    /// Constant push along the last arrow-key direction
    Wind,

    /// Pull toward the last sampled pointer position
    MagneticAttract,

    /// Push away from the last sampled pointer position
    MagneticRepel,
}

impl ForceMode {
    /// Returns true for either magnetic polarity
    pub fn is_magnetic(&self) -> bool {
        matches!(self, ForceMode::MagneticAttract | ForceMode::MagneticRepel)
    }

    /// Short display label
    pub fn label(&self) -> &'static str {
        match self {
            ForceMode::None => "None",
            ForceMode::Gravity => "Gravity",
            ForceMode::Friction => "Friction",
            ForceMode::Wind => "Wind",
            ForceMode::MagneticAttract => "Magnetic (attract)",
            ForceMode::MagneticRepel => "Magnetic (repel)",
        }
    }
}

/// Mutually exclusive mode switch
///
/// Toggling the active mode turns it off. Toggling any other mode replaces
/// the active one, so exactly zero or one mode is on at any time.
#[derive(Debug, Clone, Copy, Default)]
pub struct ModeState {
    active: ForceMode,
}

impl ModeState {
    /// Creates a state with no active mode
    pub fn new() -> Self {
        Self::default()
    }

    /// The currently active mode
    pub fn active(&self) -> ForceMode {
        self.active
    }

    /// Toggles the given mode and returns the new active mode
    pub fn toggle(&mut self, mode: ForceMode) -> ForceMode {
        self.active = if self.active == mode {
            ForceMode::None
        } else {
            mode
        };
        self.active
    }
}
