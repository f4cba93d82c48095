//! Ordered, single-consumption queue of shape specifications.

use crate::shapes::{ShapeKind, ShapeSpec};
use std::collections::VecDeque;

/// Queue of shape specifications, drained front-to-back exactly once.
///
/// Created once at startup, consumed by the gallery controller, discarded
/// when empty. There is no re-fill operation.
#[derive(Debug, Clone, Default)]
pub struct ShapeRegistry {
    queue: VecDeque<ShapeSpec>,
}

impl ShapeRegistry {
    pub fn new(specs: Vec<ShapeSpec>) -> Self {
        Self {
            queue: specs.into(),
        }
    }

    /// The stock gallery, in display order.
    pub fn stock() -> Self {
        Self::new(vec![
            ShapeSpec::new("Ellipse", ShapeKind::Ellipse),
            ShapeSpec::new("Circle", ShapeKind::Circle),
            ShapeSpec::new("Rectangle", ShapeKind::Rectangle),
            ShapeSpec::new("Square", ShapeKind::Square),
            ShapeSpec::new("Triangle", ShapeKind::Triangle),
            ShapeSpec::new("Trapezoid", ShapeKind::Trapezoid),
        ])
    }

    /// Parse a JSON manifest: an array of shape specifications.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        Ok(Self::new(serde_json::from_str::<Vec<ShapeSpec>>(json)?))
    }

    /// Remove and return the next specification, front to back.
    pub fn dequeue(&mut self) -> Option<ShapeSpec> {
        self.queue.pop_front()
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}
