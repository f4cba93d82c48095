//! Singularity: no parameters, undefined area.
//!
//! The default behavior for shapes whose area is intentionally not
//! computable. Recalculating one still produces exactly one asynchronous
//! completion.

use super::{Distances, Formula, UNRESOLVED};
use kurbo::{BezPath, Rect, Shape as KurboShape};

/// The "undefined area" formula.
#[derive(Debug, Clone, Copy)]
pub struct Singularity;

impl Formula for Singularity {
    fn parameters(&self) -> &'static [&'static str] {
        &[]
    }

    fn area(&self, _distances: &Distances) -> f64 {
        UNRESOLVED
    }

    fn schematic(&self) -> BezPath {
        // A one-pixel dot at the card center.
        Rect::new(40.0, 40.0, 41.0, 41.0).to_path(0.1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_area_is_undefined() {
        assert!(Singularity.area(&Distances::default()).is_nan());
    }

    #[test]
    fn test_no_parameters() {
        assert!(Singularity.parameters().is_empty());
    }
}
