//! Measurement source boundary.

use std::future::Future;
use std::pin::Pin;

/// Boxed future for asynchronous operations.
///
/// No `Send` bound: the gallery runs on a single cooperative scheduler and
/// never crosses threads.
pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + 'a>>;

/// One resolved distance value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Measurement {
    pub distance: f64,
}

/// Supplier of distance values, one per asynchronous call.
///
/// A request takes no input beyond the ambient measurement context and
/// eventually yields exactly one result. No latency or failure contract is
/// defined; an unresponsive source stalls the recalculation that issued the
/// request (see [`crate::coordinator::recalculate`]).
pub trait MeasurementSource {
    fn request(&self) -> BoxFuture<'_, Measurement>;
}

/// Source that resolves immediately with a fixed distance.
#[derive(Debug, Clone, Copy)]
pub struct FixedSource(pub f64);

impl MeasurementSource for FixedSource {
    fn request(&self) -> BoxFuture<'_, Measurement> {
        let distance = self.0;
        Box::pin(async move { Measurement { distance } })
    }
}
