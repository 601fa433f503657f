use crate::collision::Wall;
use std::collections::VecDeque;

/// Types of body events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyEventType {
    /// The ball dropped below the sleep threshold and was put to rest
    Slept,

    /// The ball was set back in motion
    Woke,
}

/// An event describing a change in the ball's rest state
#[derive(Debug, Clone, Copy)]
pub struct BodyEvent {
    /// The type of body event
    pub event_type: BodyEventType,
}

/// A resolved impact against an arena wall
#[derive(Debug, Clone, Copy)]
pub struct CollisionEvent {
    /// The wall that was hit
    pub wall: Wall,

    /// Speed along the wall normal at the moment of impact
    pub impact_speed: f32,
}

/// A queue of simulation events
///
/// Events accumulate until the consumer drains them, so presentation
/// layers should poll once per frame.
#[derive(Debug, Default)]
pub struct EventQueue {
    /// Collision events
    collision_events: VecDeque<CollisionEvent>,

    /// Body events
    body_events: VecDeque<BodyEvent>,
}

impl EventQueue {
    /// Creates a new empty event queue
    pub fn new() -> Self {
        Self {
            collision_events: VecDeque::new(),
            body_events: VecDeque::new(),
        }
    }

    /// Adds a collision event to the queue
    pub fn add_collision_event(&mut self, event: CollisionEvent) {
        self.collision_events.push_back(event);
    }

    /// Adds a body event to the queue
    pub fn add_body_event(&mut self, event: BodyEvent) {
        self.body_events.push_back(event);
    }

    /// Gets the next collision event from the queue
    pub fn next_collision_event(&mut self) -> Option<CollisionEvent> {
        self.collision_events.pop_front()
    }

    /// Gets the next body event from the queue
    pub fn next_body_event(&mut self) -> Option<BodyEvent> {
        self.body_events.pop_front()
    }

    /// Returns whether there are any collision events in the queue
    pub fn has_collision_events(&self) -> bool {
        !self.collision_events.is_empty()
    }

    /// Returns whether there are any body events in the queue
    pub fn has_body_events(&self) -> bool {
        !self.body_events.is_empty()
    }

    /// Returns whether the queue is empty
    pub fn is_empty(&self) -> bool {
        self.collision_events.is_empty() && self.body_events.is_empty()
    }

    /// Clears all events from the queue
    pub fn clear(&mut self) {
        self.collision_events.clear();
        self.body_events.clear();
    }
}
