//! Abstract drawing surface for shape schematics.
//!
//! The gallery core only decides *what* to draw; putting pixels somewhere is
//! an external concern behind [`DrawSurface`].

use kurbo::BezPath;
use peniko::Color;

/// Shared styling for every gallery schematic.
#[derive(Debug, Clone, Copy)]
pub struct SchematicStyle {
    pub fill: Color,
    pub stroke: Color,
    pub stroke_width: f64,
}

impl Default for SchematicStyle {
    fn default() -> Self {
        Self {
            // Translucent green fill, strong green outline.
            fill: Color::from_rgba8(0, 255, 0, 38),
            stroke: Color::from_rgba8(0, 255, 0, 204),
            stroke_width: 1.0,
        }
    }
}

/// An abstract 2-D surface a schematic is drawn onto.
///
/// Implementations are purely side-effecting; the gallery never reads
/// anything back.
pub trait DrawSurface {
    fn fill_path(&mut self, path: &BezPath, color: Color);
    fn stroke_path(&mut self, path: &BezPath, color: Color, width: f64);
}

/// Draw `path` onto `surface`, fill first, then outline.
pub fn draw_schematic(surface: &mut dyn DrawSurface, path: &BezPath, style: &SchematicStyle) {
    surface.fill_path(path, style.fill);
    surface.stroke_path(path, style.stroke, style.stroke_width);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shapes::{ShapeKind, ShapeSpec};

    #[derive(Default)]
    struct RecordingSurface {
        ops: Vec<&'static str>,
    }

    impl DrawSurface for RecordingSurface {
        fn fill_path(&mut self, _path: &BezPath, _color: Color) {
            self.ops.push("fill");
        }

        fn stroke_path(&mut self, _path: &BezPath, _color: Color, _width: f64) {
            self.ops.push("stroke");
        }
    }

    #[test]
    fn test_schematic_fills_then_strokes() {
        let shape = ShapeSpec::new("Circle", ShapeKind::Circle)
            .build()
            .unwrap();
        let mut surface = RecordingSurface::default();
        shape.render(&mut surface);
        assert_eq!(surface.ops, ["fill", "stroke"]);
    }

    #[test]
    fn test_default_style() {
        let style = SchematicStyle::default();
        assert_eq!(style.fill.to_rgba8().a, 38);
        assert_eq!(style.stroke.to_rgba8().a, 204);
        assert!((style.stroke_width - 1.0).abs() < f64::EPSILON);
    }
}
