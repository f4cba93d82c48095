//! Shape definitions for the measurement gallery.

mod circle;
mod ellipse;
mod rectangle;
mod singularity;
mod square;
mod trapezoid;
mod triangle;

pub use circle::Circle;
pub use ellipse::Ellipse;
pub use rectangle::Rectangle;
pub use singularity::Singularity;
pub use square::Square;
pub use trapezoid::Trapezoid;
pub use triangle::Triangle;

use crate::render::{DrawSurface, SchematicStyle, draw_schematic};
use kurbo::BezPath;
use serde::{Deserialize, Serialize};
use std::cell::{Ref, RefCell};
use thiserror::Error;

/// Sentinel for a distance that has not been resolved yet, and for areas
/// that are not computable. Consumers must treat it as a valid terminal
/// value, not a fault.
pub const UNRESOLVED: f64 = f64::NAN;

/// Shape specification errors. Reported to the caller at construction time,
/// never deferred into the async pipeline.
#[derive(Debug, Error)]
pub enum SpecError {
    #[error("shape name must not be empty")]
    EmptyName,
    #[error("shape `{0}` declares an empty parameter name")]
    EmptyParameterName(String),
}

/// Ordered mapping from parameter name to its current distance value.
///
/// Names are unique; insertion order is preserved for display. Lookups of
/// unknown names yield [`UNRESOLVED`], so area formulas NaN-propagate
/// instead of panicking.
#[derive(Debug, Clone, Default)]
pub struct Distances {
    entries: Vec<(String, f64)>,
}

impl Distances {
    /// Current value for `name`, or [`UNRESOLVED`] if absent.
    pub fn get(&self, name: &str) -> f64 {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map_or(UNRESOLVED, |(_, v)| *v)
    }

    /// Write a resolved value. Returns false if the parameter is unknown
    /// (the parameter set is fixed at construction).
    pub(crate) fn set(&mut self, name: &str, value: f64) -> bool {
        match self.entries.iter_mut().find(|(n, _)| n == name) {
            Some((_, v)) => {
                *v = value;
                true
            }
            None => false,
        }
    }

    /// Snapshot of the parameter names, in insertion order.
    pub fn names(&self) -> Vec<String> {
        self.entries.iter().map(|(n, _)| n.clone()).collect()
    }

    /// Iterate `(name, value)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.entries.iter().map(|(n, v)| (n.as_str(), *v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Behavior of one shape kind: its canonical parameters, the pure area
/// formula, and the schematic drawn on a gallery card.
pub trait Formula {
    /// Parameter names the area formula reads.
    fn parameters(&self) -> &'static [&'static str];

    /// Area from the current distances. Pure; unresolved inputs propagate
    /// [`UNRESOLVED`].
    fn area(&self, distances: &Distances) -> f64;

    /// Schematic outline on the 80x80 card canvas.
    fn schematic(&self) -> BezPath;
}

/// Tagged variant over all shape kinds.
///
/// The default kind, [`ShapeKind::Singularity`], has no parameters and an
/// undefined area; it stands in wherever a spec omits the kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShapeKind {
    Ellipse,
    Circle,
    Rectangle,
    Square,
    Triangle,
    Trapezoid,
    #[default]
    Singularity,
}

impl ShapeKind {
    fn formula(&self) -> &'static dyn Formula {
        match self {
            ShapeKind::Ellipse => &Ellipse,
            ShapeKind::Circle => &Circle,
            ShapeKind::Rectangle => &Rectangle,
            ShapeKind::Square => &Square,
            ShapeKind::Triangle => &Triangle,
            ShapeKind::Trapezoid => &Trapezoid,
            ShapeKind::Singularity => &Singularity,
        }
    }

    /// Canonical parameter names for this kind.
    pub fn parameters(&self) -> &'static [&'static str] {
        self.formula().parameters()
    }

    /// Evaluate the kind's area formula.
    pub fn area(&self, distances: &Distances) -> f64 {
        self.formula().area(distances)
    }

    /// Schematic path for this kind.
    pub fn schematic(&self) -> BezPath {
        self.formula().schematic()
    }
}

/// Declarative description of a gallery shape, loadable from a JSON
/// manifest. An empty `parameters` list defaults to the kind's canonical
/// parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShapeSpec {
    pub name: String,
    #[serde(default)]
    pub parameters: Vec<String>,
    #[serde(default)]
    pub kind: ShapeKind,
}

impl ShapeSpec {
    pub fn new(name: impl Into<String>, kind: ShapeKind) -> Self {
        Self {
            name: name.into(),
            parameters: Vec::new(),
            kind,
        }
    }

    /// Override the parameter names (normally derived from the kind).
    pub fn with_parameters(mut self, parameters: &[&str]) -> Self {
        self.parameters = parameters.iter().map(|p| (*p).to_string()).collect();
        self
    }

    /// Build an independent [`Shape`] from this specification.
    ///
    /// Fails fast on empty names. Duplicate parameter names collapse to one
    /// (mapping-key semantics) with a warning.
    pub fn build(&self) -> Result<Shape, SpecError> {
        if self.name.trim().is_empty() {
            return Err(SpecError::EmptyName);
        }
        let declared: Vec<&str> = if self.parameters.is_empty() {
            self.kind.parameters().to_vec()
        } else {
            self.parameters.iter().map(String::as_str).collect()
        };
        // Fresh storage per instance: shapes never share a distances mapping.
        let mut entries: Vec<(String, f64)> = Vec::with_capacity(declared.len());
        for name in declared {
            if name.trim().is_empty() {
                return Err(SpecError::EmptyParameterName(self.name.clone()));
            }
            if entries.iter().any(|(n, _)| n == name) {
                log::warn!(
                    "shape `{}`: duplicate parameter `{}` collapsed",
                    self.name,
                    name
                );
                continue;
            }
            entries.push((name.to_string(), UNRESOLVED));
        }
        for required in self.kind.parameters() {
            if !entries.iter().any(|(n, _)| n == required) {
                log::warn!(
                    "shape `{}`: parameter `{}` read by its area formula is not declared",
                    self.name,
                    required
                );
            }
        }
        Ok(Shape {
            name: self.name.clone(),
            distances: RefCell::new(Distances { entries }),
            kind: self.kind,
        })
    }
}

/// A named gallery shape owning its distance parameters.
///
/// The parameter set is fixed at construction. Distances live behind a
/// `RefCell` so a recalculation session can write resolved values through a
/// shared handle; borrows are short and never held across awaits.
#[derive(Debug, Clone)]
pub struct Shape {
    name: String,
    distances: RefCell<Distances>,
    kind: ShapeKind,
}

impl Shape {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> ShapeKind {
        self.kind
    }

    /// Snapshot of the parameter names, in insertion order.
    pub fn parameter_names(&self) -> Vec<String> {
        self.distances.borrow().names()
    }

    /// Current value of one parameter ([`UNRESOLVED`] before first
    /// resolution).
    pub fn distance(&self, name: &str) -> f64 {
        self.distances.borrow().get(name)
    }

    pub(crate) fn set_distance(&self, name: &str, value: f64) -> bool {
        self.distances.borrow_mut().set(name, value)
    }

    /// Read access to the distances mapping.
    pub fn distances(&self) -> Ref<'_, Distances> {
        self.distances.borrow()
    }

    /// Area from the current distances. Pure and side-effect free: never
    /// triggers a measurement.
    pub fn area(&self) -> f64 {
        self.kind.area(&self.distances.borrow())
    }

    /// Schematic path for this shape's kind.
    pub fn schematic(&self) -> BezPath {
        self.kind.schematic()
    }

    /// Draw the schematic onto `surface` with the shared gallery styling.
    pub fn render(&self, surface: &mut dyn DrawSurface) {
        draw_schematic(surface, &self.schematic(), &SchematicStyle::default());
    }

    /// Diagnostic one-liner: name plus each parameter and its current value,
    /// in insertion order.
    pub fn display_string(&self) -> String {
        let pairs = self
            .distances
            .borrow()
            .iter()
            .map(|(name, value)| format!("{name}: {value}"))
            .collect::<Vec<_>>()
            .join(", ");
        format!("{}( {} )", self.name, pairs)
    }
}
