use crate::bodies::ball_flags::BallFlags;
use crate::bodies::Material;
use crate::error::SimError;
use crate::math::Vector2;
use crate::Result;

/// The single simulated body: a circle moving through arena space
///
/// The stored position is the top-left corner of the circle's bounding box,
/// matching how desktop canvases place elements. The centre sits at
/// `position + (radius, radius)`.
#[derive(Debug, Clone)]
pub struct Ball {
    position: Vector2,
    velocity: Vector2,
    radius: f32,
    material: Material,
    mouse_offset: Vector2,
    flags: BallFlags,
}

impl Ball {
    /// Creates a new ball at rest at the given position
    ///
    /// The radius must be finite and strictly positive.
    pub fn new(position: Vector2, radius: f32, material: Material) -> Result<Self> {
        if !radius.is_finite() || radius <= 0.0 {
            return Err(SimError::InvalidParameter(format!(
                "radius must be positive, got {}",
                radius
            )));
        }
        Ok(Self::new_unchecked(position, radius, material))
    }

    /// Builds a ball without validating the radius
    ///
    /// Callers must pass a finite, strictly positive radius.
    pub(crate) fn new_unchecked(position: Vector2, radius: f32, material: Material) -> Self {
        Self {
            position,
            velocity: Vector2::zero(),
            radius,
            material,
            mouse_offset: Vector2::zero(),
            flags: BallFlags::default(),
        }
    }

    /// Gets the position (top-left of the bounding box)
    pub fn get_position(&self) -> Vector2 {
        self.position
    }

    /// Sets the position (top-left of the bounding box)
    pub fn set_position(&mut self, position: Vector2) {
        self.position = position;
    }

    /// Gets the velocity in pixels per tick
    pub fn get_velocity(&self) -> Vector2 {
        self.velocity
    }

    /// Sets the velocity in pixels per tick
    ///
    /// The value is stored as-is. The simulation clamps speed whenever it
    /// mutates velocity itself.
    pub fn set_velocity(&mut self, velocity: Vector2) {
        self.velocity = velocity;
    }

    /// Current speed (velocity magnitude)
    pub fn speed(&self) -> f32 {
        self.velocity.length()
    }

    /// Clamps each velocity component to `[-limit, limit]`
    pub fn clamp_speed(&mut self, limit: f32) {
        self.velocity = self.velocity.clamp_axes(limit);
    }

    /// Applies a force as an instantaneous velocity change of `force / mass`,
    /// then clamps each velocity component to the speed limit
    pub fn apply_force(&mut self, force: Vector2, speed_limit: f32) {
        self.velocity += force / self.material.mass();
        self.clamp_speed(speed_limit);
    }

    /// Moves the ball by its velocity (one tick of travel)
    pub fn translate(&mut self) {
        self.position += self.velocity;
    }

    /// Gets the radius
    pub fn get_radius(&self) -> f32 {
        self.radius
    }

    /// Width and height of the bounding box
    pub fn diameter(&self) -> f32 {
        self.radius * 2.0
    }

    /// Centre of the circle
    pub fn center(&self) -> Vector2 {
        self.position + Vector2::new(self.radius, self.radius)
    }

    /// Returns true if the point lies on or inside the circle
    pub fn contains(&self, point: Vector2) -> bool {
        point.distance_squared(&self.center()) <= self.radius * self.radius
    }

    /// Gets the material
    pub fn get_material(&self) -> Material {
        self.material
    }

    /// Sets the material
    pub fn set_material(&mut self, material: Material) {
        self.material = material;
    }

    /// Offset from the bounding-box corner to the grab point while dragging
    pub fn get_mouse_offset(&self) -> Vector2 {
        self.mouse_offset
    }

    /// Returns true if the ball is pinned to the pointer
    pub fn is_dragging(&self) -> bool {
        self.flags.contains(BallFlags::DRAGGING)
    }

    /// Starts a drag with the given grab offset and stops all motion
    pub fn begin_drag(&mut self, mouse_offset: Vector2) {
        self.flags.insert(BallFlags::DRAGGING);
        self.mouse_offset = mouse_offset;
        self.velocity = Vector2::zero();
    }

    /// Releases the ball from the pointer
    pub fn end_drag(&mut self) {
        self.flags.remove(BallFlags::DRAGGING);
        self.mouse_offset = Vector2::zero();
    }

    /// Returns true if the ball is at rest
    pub fn is_asleep(&self) -> bool {
        self.flags.contains(BallFlags::ASLEEP)
    }

    /// Puts the ball to sleep, stopping all motion
    pub fn put_to_sleep(&mut self) {
        self.flags.insert(BallFlags::ASLEEP);
        self.velocity = Vector2::zero();
    }

    /// Wakes up the ball
    pub fn wake_up(&mut self) {
        self.flags.remove(BallFlags::ASLEEP);
    }
}
