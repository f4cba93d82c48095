//! Ellipse: area from two radii.

use super::{Distances, Formula};
use kurbo::{BezPath, Ellipse as KurboEllipse, Point, Shape as KurboShape};
use std::f64::consts::PI;

pub(crate) const RADIUS_X: &str = "radiusX";
pub(crate) const RADIUS_Y: &str = "radiusY";

/// Ellipse formula: `radiusX * radiusY * pi`.
#[derive(Debug, Clone, Copy)]
pub struct Ellipse;

impl Formula for Ellipse {
    fn parameters(&self) -> &'static [&'static str] {
        &[RADIUS_X, RADIUS_Y]
    }

    fn area(&self, distances: &Distances) -> f64 {
        distances.get(RADIUS_X) * distances.get(RADIUS_Y) * PI
    }

    fn schematic(&self) -> BezPath {
        KurboEllipse::new(Point::new(40.0, 40.0), (30.0, 15.0), 0.0).to_path(0.1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shapes::{ShapeKind, ShapeSpec};

    #[test]
    fn test_area() {
        let shape = ShapeSpec::new("Ellipse", ShapeKind::Ellipse)
            .build()
            .unwrap();
        shape.set_distance(RADIUS_X, 3.0);
        shape.set_distance(RADIUS_Y, 2.0);
        assert!((shape.area() - 6.0 * PI).abs() < 1e-9);
    }

    #[test]
    fn test_area_partially_resolved() {
        let shape = ShapeSpec::new("Ellipse", ShapeKind::Ellipse)
            .build()
            .unwrap();
        shape.set_distance(RADIUS_X, 3.0);
        assert!(shape.area().is_nan());
    }

    #[test]
    fn test_schematic_bounds() {
        let bounds = Ellipse.schematic().bounding_box();
        assert!((bounds.x0 - 10.0).abs() < 0.5);
        assert!((bounds.x1 - 70.0).abs() < 0.5);
        assert!((bounds.y0 - 25.0).abs() < 0.5);
        assert!((bounds.y1 - 55.0).abs() < 0.5);
    }
}
