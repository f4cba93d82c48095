//! Rectangle: area from base and height.

use super::{Distances, Formula};
use kurbo::{BezPath, Rect, Shape as KurboShape};

pub(crate) const BASE: &str = "base";
pub(crate) const HEIGHT: &str = "height";

/// Rectangle formula: `base * height`.
#[derive(Debug, Clone, Copy)]
pub struct Rectangle;

impl Formula for Rectangle {
    fn parameters(&self) -> &'static [&'static str] {
        &[BASE, HEIGHT]
    }

    fn area(&self, distances: &Distances) -> f64 {
        distances.get(BASE) * distances.get(HEIGHT)
    }

    fn schematic(&self) -> BezPath {
        Rect::new(10.0, 20.0, 70.0, 60.0).to_path(0.1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shapes::{ShapeKind, ShapeSpec};

    #[test]
    fn test_area() {
        let shape = ShapeSpec::new("Rectangle", ShapeKind::Rectangle)
            .build()
            .unwrap();
        shape.set_distance(BASE, 4.0);
        shape.set_distance(HEIGHT, 3.0);
        assert!((shape.area() - 12.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_schematic_bounds() {
        let bounds = Rectangle.schematic().bounding_box();
        assert_eq!(bounds, Rect::new(10.0, 20.0, 70.0, 60.0));
    }
}
