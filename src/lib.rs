pub mod math;
pub mod core;
pub mod bodies;
pub mod collision;
pub mod forces;
pub mod input;

/// Re-export common types for easier usage
pub use crate::core::{ArenaBounds, BodySnapshot, Simulation, SimulationConfig};
pub use crate::bodies::{Ball, BallFlags, Material};
pub use crate::collision::Wall;
pub use crate::forces::ForceMode;
pub use crate::input::{ArrowKey, InputEvent};
pub use crate::math::Vector2;

/// Error types for the simulation core
pub mod error {
    use thiserror::Error;

    #[derive(Error, Debug)]
    pub enum SimError {
        #[error("Invalid parameter: {0}")]
        InvalidParameter(String),
    }
}

/// Result type for simulation operations
pub type Result<T> = std::result::Result<T, error::SimError>;

/// Crate version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
