use tracing::{debug, trace};

use crate::bodies::{Ball, Material};
use crate::collision;
use crate::core::events::{BodyEvent, BodyEventType, CollisionEvent, EventQueue};
use crate::core::{ArenaBounds, SimulationConfig};
use crate::forces::{model, ForceMode, ModeState};
use crate::input::{ArrowKey, InputEvent};
use crate::math::Vector2;
use crate::Result;

#[cfg(feature = "serialize")]
use serde::Serialize;

/// A read-only view of the simulation state after a tick
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "serialize", derive(Serialize))]
pub struct BodySnapshot {
    /// Ball position (top-left of the bounding box)
    pub position: Vector2,

    /// Ball velocity in pixels per tick
    pub velocity: Vector2,

    /// Velocity magnitude
    pub speed: f32,

    /// Mass of the current material
    pub mass: f32,

    /// Display name of the current material
    pub material: &'static str,

    /// The active force mode
    pub mode: ForceMode,

    /// True while the ball is pinned to the pointer
    pub dragging: bool,

    /// True while the ball is at rest
    pub asleep: bool,
}

/// The simulation core: one ball, one active force mode, a bounded arena
///
/// Presentation layers drive it by feeding [`InputEvent`]s as they arrive
/// and calling [`Simulation::advance`] on a fixed timer, then drawing from
/// the returned snapshot.
pub struct Simulation {
    ball: Ball,
    config: SimulationConfig,
    mode: ModeState,
    wind_direction: Option<ArrowKey>,
    magnet_point: Option<Vector2>,
    last_pointer: Vector2,
    tick_count: u64,
    events: EventQueue,
}

impl Simulation {
    /// Creates a simulation with the default configuration
    pub fn new() -> Self {
        let config = SimulationConfig::default();
        let ball = Ball::new_unchecked(
            config.start_position,
            config.ball_radius,
            Material::default(),
        );
        Self::assemble(ball, config)
    }

    /// Creates a simulation with a custom configuration
    ///
    /// Fails if the configuration violates the documented parameter ranges.
    pub fn with_config(config: SimulationConfig) -> Result<Self> {
        config.validate()?;
        let ball = Ball::new(config.start_position, config.ball_radius, Material::default())?;
        Ok(Self::assemble(ball, config))
    }

    fn assemble(ball: Ball, config: SimulationConfig) -> Self {
        Self {
            ball,
            config,
            mode: ModeState::new(),
            wind_direction: None,
            magnet_point: None,
            last_pointer: Vector2::zero(),
            tick_count: 0,
            events: EventQueue::new(),
        }
    }

    /// Gets the simulation configuration
    pub fn get_config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Gets mutable access to the simulation configuration
    pub fn get_config_mut(&mut self) -> &mut SimulationConfig {
        &mut self.config
    }

    /// Gets the ball
    pub fn get_ball(&self) -> &Ball {
        &self.ball
    }

    /// Gets mutable access to the ball
    ///
    /// Direct mutations take effect on the next tick. The simulation
    /// re-applies its own speed and rest rules as it runs.
    pub fn get_ball_mut(&mut self) -> &mut Ball {
        &mut self.ball
    }

    /// The active force mode
    pub fn get_mode(&self) -> ForceMode {
        self.mode.active()
    }

    /// Number of integrated ticks so far
    ///
    /// Ticks spent dragging or asleep do not count; the collision cadence
    /// is measured against this counter.
    pub fn get_tick_count(&self) -> u64 {
        self.tick_count
    }

    /// Gets the event queue
    pub fn get_events(&self) -> &EventQueue {
        &self.events
    }

    /// Gets mutable access to the event queue for draining
    pub fn get_events_mut(&mut self) -> &mut EventQueue {
        &mut self.events
    }

    /// Wind direction currently driving the wind mode, if any
    pub fn get_wind_direction(&self) -> Option<ArrowKey> {
        self.wind_direction
    }

    /// Pointer position the magnetic modes aim at, if one was sampled
    pub fn get_magnet_point(&self) -> Option<Vector2> {
        self.magnet_point
    }

    /// Builds a read-only view of the current state
    pub fn snapshot(&self) -> BodySnapshot {
        let material = self.ball.get_material();
        BodySnapshot {
            position: self.ball.get_position(),
            velocity: self.ball.get_velocity(),
            speed: self.ball.speed(),
            mass: material.mass(),
            material: material.name(),
            mode: self.mode.active(),
            dragging: self.ball.is_dragging(),
            asleep: self.ball.is_asleep(),
        }
    }

    /// Advances the simulation by one tick
    ///
    /// Runs the fixed pipeline: rest check, position update, active-mode
    /// force, then boundary collision every `collision_interval`-th tick.
    /// While the ball is dragged the whole pipeline is suspended.
    pub fn advance(&mut self, bounds: ArenaBounds) -> BodySnapshot {
        if self.ball.is_dragging() {
            return self.snapshot();
        }

        // The rest check runs before any motion, so a resting ball stays
        // put even while a force mode is on.
        if self.ball.speed() < self.config.sleep_threshold {
            let was_awake = !self.ball.is_asleep();
            self.ball.put_to_sleep();
            if was_awake {
                self.events.add_body_event(BodyEvent {
                    event_type: BodyEventType::Slept,
                });
                trace!("ball went to sleep");
            }
            return self.snapshot();
        }

        // A sleeping ball only reaches this point if its velocity was
        // raised externally, so the rest flag is stale.
        if self.ball.is_asleep() {
            self.ball.wake_up();
            self.events.add_body_event(BodyEvent {
                event_type: BodyEventType::Woke,
            });
            trace!("ball woke up");
        }

        self.ball.translate();
        self.apply_mode_force(bounds);

        self.tick_count += 1;
        if self.tick_count % u64::from(self.config.collision_interval) == 0 {
            self.resolve_collisions(bounds);
        }

        self.snapshot()
    }

    /// Applies the force for the active mode, if its inputs are available
    fn apply_mode_force(&mut self, bounds: ArenaBounds) {
        let limit = self.config.max_speed;
        match self.mode.active() {
            // Friction acts on the collision cadence, not every tick.
            ForceMode::None | ForceMode::Friction => {}
            ForceMode::Gravity => {
                let force = model::gravity_force(&self.config, &self.ball);
                self.ball.apply_force(force, limit);
                if model::is_grounded(&self.ball, bounds) {
                    let drag = model::friction_force(&self.ball);
                    self.ball.apply_force(drag, limit);
                }
            }
            ForceMode::Wind => {
                if let Some(direction) = self.wind_direction {
                    let force = model::wind_force(&self.config, direction);
                    self.ball.apply_force(force, limit);
                }
            }
            ForceMode::MagneticAttract => {
                if let Some(point) = self.magnet_point {
                    let force =
                        model::magnet_force(&self.ball, point, self.config.magnet_attract_strength);
                    self.ball.apply_force(force, limit);
                }
            }
            ForceMode::MagneticRepel => {
                if let Some(point) = self.magnet_point {
                    let force =
                        model::magnet_force(&self.ball, point, -self.config.magnet_repel_strength);
                    self.ball.apply_force(force, limit);
                }
            }
        }
    }

    fn resolve_collisions(&mut self, bounds: ArenaBounds) {
        let gravity_active = self.mode.active() == ForceMode::Gravity;
        let contact =
            collision::resolve_bounds(&mut self.ball, bounds, &self.config, gravity_active);
        if let Some(contact) = contact {
            trace!(wall = ?contact.wall, speed = contact.impact_speed, "wall hit");
            self.events.add_collision_event(CollisionEvent {
                wall: contact.wall,
                impact_speed: contact.impact_speed,
            });
        }

        if self.mode.active() == ForceMode::Friction {
            let force = model::friction_force(&self.ball);
            self.ball.apply_force(force, self.config.max_speed);
        }
    }

    /// Feeds one input message into the simulation
    pub fn handle_input(&mut self, event: InputEvent) {
        match event {
            InputEvent::PointerDown(point) => self.pointer_down(point),
            InputEvent::PointerMove(point) => self.pointer_move(point),
            InputEvent::PointerUp => self.pointer_up(),
            InputEvent::KeyDown(key) => self.key_down(key),
            InputEvent::ModeToggle(mode) => self.toggle_mode(mode),
            InputEvent::MaterialSelect(material) => self.select_material(material),
        }
    }

    fn pointer_down(&mut self, point: Vector2) {
        self.sample_magnet(point);
        if self.ball.contains(point) {
            self.ball.begin_drag(point - self.ball.get_position());
            self.last_pointer = point;
            trace!(x = point.x, y = point.y, "drag started");
        }
    }

    fn pointer_move(&mut self, point: Vector2) {
        self.sample_magnet(point);
        if self.ball.is_dragging() {
            // Fling velocity is the pointer travel since the last event.
            let delta = point - self.last_pointer;
            self.push_ball(delta);
            self.ball.set_position(point - self.ball.get_mouse_offset());
            self.last_pointer = point;
        }
    }

    fn pointer_up(&mut self) {
        if self.ball.is_dragging() {
            self.ball.end_drag();
            trace!("drag released");
        }
    }

    fn key_down(&mut self, key: ArrowKey) {
        // Arrow keys only steer the wind; in any other mode they are
        // ignored.
        if self.mode.active() == ForceMode::Wind {
            self.wind_direction = Some(key);
        }
    }

    fn toggle_mode(&mut self, mode: ForceMode) {
        let previous = self.mode.active();
        let active = self.mode.toggle(mode);
        if previous == ForceMode::Wind && active != ForceMode::Wind {
            self.wind_direction = None;
        }
        debug!(from = previous.label(), to = active.label(), "mode toggled");
    }

    fn select_material(&mut self, material: Material) {
        self.ball.set_material(material);
        self.ball.set_position(self.config.start_position);
        self.ball.set_velocity(Vector2::zero());
        debug!(material = material.name(), "material selected, ball reset");
    }

    /// Magnetic modes follow the pointer. The aim point is only written
    /// while one of them is active and survives mode toggles.
    fn sample_magnet(&mut self, point: Vector2) {
        if self.mode.active().is_magnetic() {
            self.magnet_point = Some(point);
        }
    }

    /// Sets the ball velocity with the speed limit and wake bookkeeping
    fn push_ball(&mut self, velocity: Vector2) {
        self.ball.set_velocity(velocity);
        self.ball.clamp_speed(self.config.max_speed);
        if self.ball.is_asleep() && self.ball.speed() >= self.config.sleep_threshold {
            self.ball.wake_up();
            self.events.add_body_event(BodyEvent {
                event_type: BodyEventType::Woke,
            });
            trace!("ball woke up");
        }
    }
}
