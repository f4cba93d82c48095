//! Circle: area from a single radius.

use super::{Distances, Formula};
use kurbo::{BezPath, Circle as KurboCircle, Point, Shape as KurboShape};
use std::f64::consts::PI;

pub(crate) const RADIUS: &str = "radius";

/// Circle formula: `radius^2 * pi`.
#[derive(Debug, Clone, Copy)]
pub struct Circle;

impl Formula for Circle {
    fn parameters(&self) -> &'static [&'static str] {
        &[RADIUS]
    }

    fn area(&self, distances: &Distances) -> f64 {
        distances.get(RADIUS).powi(2) * PI
    }

    fn schematic(&self) -> BezPath {
        KurboCircle::new(Point::new(40.0, 40.0), 26.0).to_path(0.1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shapes::{ShapeKind, ShapeSpec};

    #[test]
    fn test_area() {
        let shape = ShapeSpec::new("Circle", ShapeKind::Circle)
            .build()
            .unwrap();
        shape.set_distance(RADIUS, 5.0);
        assert!((shape.area() - 25.0 * PI).abs() < 1e-9);
    }

    #[test]
    fn test_area_unresolved() {
        let shape = ShapeSpec::new("Circle", ShapeKind::Circle)
            .build()
            .unwrap();
        assert!(shape.area().is_nan());
    }

    #[test]
    fn test_schematic_bounds() {
        let bounds = Circle.schematic().bounding_box();
        assert!((bounds.x0 - 14.0).abs() < 0.5);
        assert!((bounds.x1 - 66.0).abs() < 0.5);
    }
}
