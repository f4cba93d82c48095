//! Square: area from a single side length.

use super::{Distances, Formula};
use kurbo::{BezPath, Rect, Shape as KurboShape};

pub(crate) const LENGTH: &str = "length";

/// Square formula: `length^2`.
#[derive(Debug, Clone, Copy)]
pub struct Square;

impl Formula for Square {
    fn parameters(&self) -> &'static [&'static str] {
        &[LENGTH]
    }

    fn area(&self, distances: &Distances) -> f64 {
        distances.get(LENGTH).powi(2)
    }

    fn schematic(&self) -> BezPath {
        Rect::new(14.0, 14.0, 66.0, 66.0).to_path(0.1)
    }
}
