//! Force formulas for each mode, expressed as pure functions over the
//! ball and the current configuration.

use crate::bodies::Ball;
use crate::core::{ArenaBounds, SimulationConfig};
use crate::input::ArrowKey;
use crate::math::Vector2;

/// Downward pull scaled by mass so the resulting acceleration is uniform
///
/// F = ramp * G * m, pointing down the screen (positive y).
pub fn gravity_force(config: &SimulationConfig, ball: &Ball) -> Vector2 {
    Vector2::new(
        0.0,
        config.gravity_ramp * config.gravity * ball.get_material().mass(),
    )
}

/// Velocity-proportional drag, F = -friction * v
///
/// Used both for the standalone friction mode and for ground drag while
/// the ball sits on the floor under gravity.
pub fn friction_force(ball: &Ball) -> Vector2 {
    ball.get_velocity() * -ball.get_material().friction()
}

/// Returns true if the ball's lower edge touches the arena floor
pub fn is_grounded(ball: &Ball, bounds: ArenaBounds) -> bool {
    ball.get_position().y + ball.diameter() >= bounds.height
}

/// Constant push along an arrow-key direction
pub fn wind_force(config: &SimulationConfig, direction: ArrowKey) -> Vector2 {
    direction.unit() * config.wind_strength
}

/// Constant-magnitude pull toward (positive strength) or push away from
/// (negative strength) the given point
///
/// A point that coincides with the ball position produces no force.
pub fn magnet_force(ball: &Ball, point: Vector2, strength: f32) -> Vector2 {
    let direction = point - ball.get_position();
    if direction.is_zero() {
        return Vector2::zero();
    }
    direction.normalize() * strength
}
