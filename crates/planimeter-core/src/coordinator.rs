//! Fan-out/fan-in recalculation of a shape's distances.

use crate::measure::MeasurementSource;
use crate::shapes::Shape;
use futures::stream::{FuturesUnordered, StreamExt};
use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};

/// Future that is pending on its first poll and ready on the next.
struct YieldNow(bool);

impl Future for YieldNow {
    type Output = ();

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<()> {
        if self.0 {
            Poll::Ready(())
        } else {
            self.0 = true;
            cx.waker().wake_by_ref();
            Poll::Pending
        }
    }
}

/// Refresh every distance parameter of `shape` from `source`.
///
/// The parameter-name list is snapshotted once at call start and never
/// re-read mid-flight. One measurement request per parameter is issued up
/// front; resolutions are folded in whatever order the source delivers
/// them. The future completes exactly once, only after every parameter has
/// been written back.
///
/// With an empty parameter set the future still yields to the scheduler
/// once, so completion is never synchronous with the call that requested it.
///
/// No retries, no timeout, no cancellation: an unresponsive source leaves
/// this future pending forever.
pub async fn recalculate(shape: &Shape, source: &dyn MeasurementSource) {
    let names = shape.parameter_names();
    if names.is_empty() {
        YieldNow(false).await;
        log::debug!("{}", shape.display_string());
        return;
    }
    let mut pending: FuturesUnordered<_> = names
        .into_iter()
        .map(|name| {
            let request = source.request();
            async move { (name, request.await) }
        })
        .collect();
    let mut outstanding = pending.len();
    while let Some((name, measurement)) = pending.next().await {
        if !shape.set_distance(&name, measurement.distance) {
            log::warn!("shape `{}` has no parameter `{}`", shape.name(), name);
        }
        outstanding -= 1;
        log::trace!(
            "shape `{}`: `{}` resolved, {} outstanding",
            shape.name(),
            name,
            outstanding
        );
    }
    debug_assert_eq!(outstanding, 0);
    log::debug!("{}", shape.display_string());
}
