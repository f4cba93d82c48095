//! Trapezoid: area from base, roof and height.

use super::{Distances, Formula};
use kurbo::BezPath;

pub(crate) const BASE: &str = "base";
pub(crate) const HEIGHT: &str = "height";
pub(crate) const ROOF: &str = "roof";

/// Trapezoid formula: `(base + roof) / 2 * height`.
#[derive(Debug, Clone, Copy)]
pub struct Trapezoid;

impl Formula for Trapezoid {
    fn parameters(&self) -> &'static [&'static str] {
        &[BASE, HEIGHT, ROOF]
    }

    fn area(&self, distances: &Distances) -> f64 {
        (distances.get(BASE) + distances.get(ROOF)) / 2.0 * distances.get(HEIGHT)
    }

    fn schematic(&self) -> BezPath {
        let mut path = BezPath::new();
        path.move_to((20.0, 14.0));
        path.line_to((50.0, 14.0));
        path.line_to((70.0, 66.0));
        path.line_to((10.0, 66.0));
        path.close_path();
        path
    }
}
