use crate::error::SimError;
use crate::math::Vector2;
use crate::Result;

#[cfg(feature = "serialize")]
use serde::{Deserialize, Serialize};

/// Configuration parameters for the ball simulation
///
/// Velocities are measured in pixels per tick; the integrator takes no
/// time-step parameter. Presentation layers control apparent speed by the
/// wall-clock cadence at which they call
/// [`Simulation::advance`](crate::core::Simulation::advance).
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct SimulationConfig {
    /// Per-axis speed limit in pixels per tick
    pub max_speed: f32,

    /// Base gravity strength
    pub gravity: f32,

    /// Fraction of the gravity strength applied each tick
    pub gravity_ramp: f32,

    /// Magnitude of the wind push applied each tick
    pub wind_strength: f32,

    /// Pull strength toward the pointer in magnetic attract mode
    pub magnet_attract_strength: f32,

    /// Push strength away from the pointer in magnetic repel mode
    pub magnet_repel_strength: f32,

    /// Boundary collisions are resolved every this many ticks
    pub collision_interval: u32,

    /// Speed below which the ball is put to rest
    pub sleep_threshold: f32,

    /// Extra restitution lost when landing on the floor under gravity
    pub landing_restitution_loss: f32,

    /// Where the ball starts, and returns to on material change
    pub start_position: Vector2,

    /// Radius of the simulated ball
    pub ball_radius: f32,

    /// Suggested wall-clock tick length for presentation timers
    pub tick_ms: u64,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            max_speed: 15.0,
            gravity: 3.0,
            gravity_ramp: 0.1,
            wind_strength: 0.5,
            magnet_attract_strength: 0.5,
            magnet_repel_strength: 0.3,
            collision_interval: 3,
            sleep_threshold: 0.01,
            landing_restitution_loss: 0.1,
            start_position: Vector2::new(50.0, 50.0),
            ball_radius: 25.0,
            tick_ms: 10,
        }
    }
}

impl SimulationConfig {
    /// Checks the parameter ranges the simulation loops depend on
    pub fn validate(&self) -> Result<()> {
        if !self.max_speed.is_finite() || self.max_speed <= 0.0 {
            return Err(SimError::InvalidParameter(format!(
                "max_speed must be positive, got {}",
                self.max_speed
            )));
        }
        if self.collision_interval == 0 {
            return Err(SimError::InvalidParameter(
                "collision_interval must be at least 1".to_string(),
            ));
        }
        if !self.sleep_threshold.is_finite() || self.sleep_threshold < 0.0 {
            return Err(SimError::InvalidParameter(format!(
                "sleep_threshold must be non-negative, got {}",
                self.sleep_threshold
            )));
        }
        if !self.ball_radius.is_finite() || self.ball_radius <= 0.0 {
            return Err(SimError::InvalidParameter(format!(
                "ball_radius must be positive, got {}",
                self.ball_radius
            )));
        }
        Ok(())
    }
}
