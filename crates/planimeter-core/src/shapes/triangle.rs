//! Triangle: area from base and height.

use super::{Distances, Formula};
use kurbo::BezPath;

pub(crate) const BASE: &str = "base";
pub(crate) const HEIGHT: &str = "height";

/// Triangle formula: `base * height / 2`.
#[derive(Debug, Clone, Copy)]
pub struct Triangle;

impl Formula for Triangle {
    fn parameters(&self) -> &'static [&'static str] {
        &[BASE, HEIGHT]
    }

    fn area(&self, distances: &Distances) -> f64 {
        distances.get(BASE) * distances.get(HEIGHT) / 2.0
    }

    fn schematic(&self) -> BezPath {
        let mut path = BezPath::new();
        path.move_to((40.0, 14.0));
        path.line_to((70.0, 66.0));
        path.line_to((10.0, 66.0));
        path.close_path();
        path
    }
}
