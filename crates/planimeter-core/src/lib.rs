//! Planimeter Core Library
//!
//! A gallery of geometric shapes whose areas derive from asynchronously
//! measured distances: per-shape fan-out/fan-in recalculation, strictly
//! sequential initial loading, independent manual re-triggers, and running
//! statistics per gallery card. Everything runs on a single cooperative
//! scheduler; suspension happens only at the measurement-request boundary.

pub mod coordinator;
pub mod gallery;
pub mod measure;
pub mod registry;
pub mod render;
pub mod shapes;
pub mod stats;

pub use coordinator::recalculate;
pub use gallery::{CardHandle, CardId, DisplayMount, GalleryController, TriggerError};
pub use measure::{BoxFuture, FixedSource, Measurement, MeasurementSource};
pub use registry::ShapeRegistry;
pub use render::{DrawSurface, SchematicStyle, draw_schematic};
pub use shapes::{Distances, Formula, Shape, ShapeKind, ShapeSpec, SpecError, UNRESOLVED};
pub use stats::{DisplayRecord, LoadState, format_area};
