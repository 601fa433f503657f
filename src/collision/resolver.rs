use crate::bodies::Ball;
use crate::collision::Wall;
use crate::core::{ArenaBounds, SimulationConfig};
use crate::math::Vector2;

/// A resolved contact between the ball and an arena wall
#[derive(Debug, Clone, Copy)]
pub struct WallContact {
    /// Which wall the ball hit
    pub wall: Wall,

    /// Speed along the wall normal at the moment of impact
    pub impact_speed: f32,
}

/// Checks the ball against the arena walls and resolves at most one contact.
///
/// Walls are tested in a fixed order (left, right, top, bottom) and the
/// first violated one wins, so a corner overlap resolves one axis per pass.
/// Resolving a contact performs the following steps:
/// 1. Clamp the offending position component back onto the wall.
/// 2. Reflect the velocity component along the wall normal, scaled by the
///    material restitution. The reflected component points back into the
///    arena regardless of its previous sign.
/// 3. Re-apply the per-axis speed limit.
/// 4. Zero the velocity entirely when the rebound falls below the sleep
///    threshold.
///
/// Landing on the floor while gravity is active applies an extra fixed
/// restitution loss, floored at zero.
pub fn resolve_bounds(
    ball: &mut Ball,
    bounds: ArenaBounds,
    config: &SimulationConfig,
    gravity_active: bool,
) -> Option<WallContact> {
    let span = ball.diameter();
    let position = ball.get_position();
    let velocity = ball.get_velocity();
    let restitution = ball.get_material().restitution();

    if position.x < 0.0 {
        let impact = velocity.x.abs();
        ball.set_position(Vector2::new(0.0, position.y));
        rebound(ball, Vector2::new(impact * restitution, velocity.y), config);
        return Some(WallContact {
            wall: Wall::Left,
            impact_speed: impact,
        });
    }

    if position.x + span >= bounds.width {
        let impact = velocity.x.abs();
        ball.set_position(Vector2::new(bounds.width - span, position.y));
        rebound(ball, Vector2::new(-(impact * restitution), velocity.y), config);
        return Some(WallContact {
            wall: Wall::Right,
            impact_speed: impact,
        });
    }

    if position.y < 0.0 {
        let impact = velocity.y.abs();
        ball.set_position(Vector2::new(position.x, 0.0));
        rebound(ball, Vector2::new(velocity.x, impact * restitution), config);
        return Some(WallContact {
            wall: Wall::Top,
            impact_speed: impact,
        });
    }

    if position.y + span >= bounds.height {
        let impact = velocity.y.abs();
        // Landing restitution loss is recomputed from the material each
        // time, so repeated landings never compound it.
        let restitution = if gravity_active {
            (restitution - config.landing_restitution_loss).max(0.0)
        } else {
            restitution
        };
        ball.set_position(Vector2::new(position.x, bounds.height - span));
        rebound(ball, Vector2::new(velocity.x, -(impact * restitution)), config);
        return Some(WallContact {
            wall: Wall::Bottom,
            impact_speed: impact,
        });
    }

    None
}

/// Applies the post-impact velocity, then the speed limit and rest snap
fn rebound(ball: &mut Ball, velocity: Vector2, config: &SimulationConfig) {
    ball.set_velocity(velocity);
    ball.clamp_speed(config.max_speed);
    if ball.speed() < config.sleep_threshold {
        ball.set_velocity(Vector2::zero());
    }
}
