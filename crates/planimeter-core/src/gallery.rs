//! Gallery controller: sequential loading plus per-card manual refresh.

use crate::coordinator::recalculate;
use crate::measure::MeasurementSource;
use crate::registry::ShapeRegistry;
use crate::render::DrawSurface;
use crate::shapes::{Shape, SpecError};
use crate::stats::{DisplayRecord, LoadState};
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;
use thiserror::Error;
use uuid::Uuid;

/// Unique identifier for gallery cards.
pub type CardId = Uuid;

/// Manual re-trigger errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TriggerError {
    /// A recalculation session for this card is already in flight. The
    /// display layer disables the trigger while Loading; rejecting here
    /// keeps sessions from overlapping regardless.
    #[error("recalculation already in progress")]
    Busy,
}

struct CardInner {
    id: CardId,
    shape: Shape,
    record: RefCell<DisplayRecord>,
    source: Rc<dyn MeasurementSource>,
}

/// Cheaply cloneable handle to one gallery card: a shape plus its
/// statistics history.
#[derive(Clone)]
pub struct CardHandle {
    inner: Rc<CardInner>,
}

impl CardHandle {
    fn new(shape: Shape, source: Rc<dyn MeasurementSource>) -> Self {
        Self {
            inner: Rc::new(CardInner {
                id: Uuid::new_v4(),
                shape,
                record: RefCell::new(DisplayRecord::new()),
                source,
            }),
        }
    }

    pub fn id(&self) -> CardId {
        self.inner.id
    }

    pub fn name(&self) -> &str {
        self.inner.shape.name()
    }

    pub fn shape(&self) -> &Shape {
        &self.inner.shape
    }

    pub fn state(&self) -> LoadState {
        self.inner.record.borrow().state()
    }

    /// Number of recalculations performed so far.
    pub fn count(&self) -> usize {
        self.inner.record.borrow().count()
    }

    /// Most recently computed area.
    pub fn latest(&self) -> Option<f64> {
        self.inner.record.borrow().latest()
    }

    /// Running mean over every area ever computed for this card.
    pub fn mean(&self) -> Option<f64> {
        self.inner.record.borrow().mean()
    }

    /// Draw this card's schematic.
    pub fn render(&self, surface: &mut dyn DrawSurface) {
        self.inner.shape.render(surface);
    }

    /// Run one recalculation session and fold the resulting area into the
    /// statistics history.
    async fn resolve(&self) -> f64 {
        recalculate(&self.inner.shape, self.inner.source.as_ref()).await;
        let area = self.inner.shape.area();
        let mut record = self.inner.record.borrow_mut();
        record.push(area);
        record.set_state(LoadState::Ready);
        area
    }

    /// Manual re-trigger: refresh this card's distances and statistics.
    ///
    /// Permitted only while Ready; the card is Loading until the new area
    /// lands. Independent of the gallery controller: it never touches the
    /// registry and may run while later shapes are still loading.
    pub async fn refresh(&self) -> Result<f64, TriggerError> {
        {
            let mut record = self.inner.record.borrow_mut();
            if record.state() != LoadState::Ready {
                return Err(TriggerError::Busy);
            }
            record.set_state(LoadState::Loading);
        }
        Ok(self.resolve().await)
    }
}

impl fmt::Debug for CardHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CardHandle")
            .field("id", &self.inner.id)
            .field("name", &self.inner.shape.name())
            .field("record", &self.inner.record)
            .finish()
    }
}

/// Ordered container receiving one display node per processed shape, in
/// dequeue order.
pub trait DisplayMount {
    /// A card was dequeued and is loading; append it to the display.
    fn append(&mut self, card: &CardHandle);

    /// The card's statistics changed.
    fn refresh(&mut self, card: &CardHandle);
}

/// Drives the gallery: dequeues one specification at a time, fully resolves
/// it, then advances.
///
/// Exactly one shape is in its initial Loading phase at any time; manual
/// refreshes through [`CardHandle::refresh`] are exempt from that
/// serialization.
pub struct GalleryController {
    registry: ShapeRegistry,
    source: Rc<dyn MeasurementSource>,
    mount: Rc<RefCell<dyn DisplayMount>>,
    cards: Rc<RefCell<Vec<CardHandle>>>,
}

impl GalleryController {
    pub fn new(
        registry: ShapeRegistry,
        source: Rc<dyn MeasurementSource>,
        mount: Rc<RefCell<dyn DisplayMount>>,
    ) -> Self {
        Self {
            registry,
            source,
            mount,
            cards: Rc::new(RefCell::new(Vec::new())),
        }
    }

    /// Shared view of the cards created so far. Grows while [`run`] is in
    /// flight, so observers can hand out manual triggers for already-loaded
    /// cards before the queue is drained.
    ///
    /// [`run`]: GalleryController::run
    pub fn cards(&self) -> Rc<RefCell<Vec<CardHandle>>> {
        Rc::clone(&self.cards)
    }

    /// Process the registry front to back until it is empty.
    ///
    /// Shape N+1's initial recalculation never starts before shape N's has
    /// fully completed. Fails fast on the first invalid specification.
    pub async fn run(mut self) -> Result<Vec<CardHandle>, SpecError> {
        while let Some(spec) = self.registry.dequeue() {
            let shape = spec.build()?;
            log::info!("loading shape `{}`", shape.name());
            let card = CardHandle::new(shape, Rc::clone(&self.source));
            self.cards.borrow_mut().push(card.clone());
            self.mount.borrow_mut().append(&card);
            card.resolve().await;
            self.mount.borrow_mut().refresh(&card);
        }
        Ok(self.cards.borrow().clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::measure::FixedSource;
    use crate::measure::testing::{GatedSource, ScriptedSource};
    use crate::shapes::{ShapeKind, ShapeSpec};
    use futures::executor::{LocalPool, block_on};
    use futures::task::LocalSpawnExt;
    use std::cell::Cell;
    use std::f64::consts::PI;

    /// Mount recording append/refresh events into a shared log.
    #[derive(Default)]
    struct RecordingMount {
        events: Rc<RefCell<Vec<String>>>,
    }

    impl DisplayMount for RecordingMount {
        fn append(&mut self, card: &CardHandle) {
            self.events
                .borrow_mut()
                .push(format!("append {}", card.name()));
        }

        fn refresh(&mut self, card: &CardHandle) {
            self.events
                .borrow_mut()
                .push(format!("refresh {}", card.name()));
        }
    }

    fn abc_registry() -> ShapeRegistry {
        ShapeRegistry::new(vec![
            ShapeSpec::new("A", ShapeKind::Circle),
            ShapeSpec::new("B", ShapeKind::Rectangle),
            ShapeSpec::new("C", ShapeKind::Square),
        ])
    }

    #[test]
    fn test_initial_loads_are_serialized() {
        let source = Rc::new(GatedSource::default());
        let mount = Rc::new(RefCell::new(RecordingMount::default()));
        let events = Rc::clone(&mount.borrow().events);
        let controller = GalleryController::new(abc_registry(), source.clone(), mount);
        let cards = controller.cards();

        let mut pool = LocalPool::new();
        pool.spawner()
            .spawn_local(async move {
                controller.run().await.unwrap();
            })
            .unwrap();

        // Only A's single measurement request may be outstanding.
        pool.run_until_stalled();
        assert_eq!(source.outstanding(), 1);
        assert_eq!(cards.borrow().len(), 1);
        assert_eq!(cards.borrow()[0].state(), LoadState::Loading);

        // A completes; B (two parameters) starts, C has not.
        source.release(5.0);
        pool.run_until_stalled();
        assert_eq!(source.outstanding(), 2);
        assert_eq!(cards.borrow().len(), 2);
        assert_eq!(cards.borrow()[0].state(), LoadState::Ready);
        assert!((cards.borrow()[0].latest().unwrap() - 25.0 * PI).abs() < 1e-9);

        // Half of B resolved: still loading, C still not started.
        source.release(4.0);
        pool.run_until_stalled();
        assert_eq!(cards.borrow().len(), 2);
        assert_eq!(cards.borrow()[1].state(), LoadState::Loading);

        source.release(3.0);
        pool.run_until_stalled();
        assert_eq!(cards.borrow().len(), 3);
        assert!((cards.borrow()[1].latest().unwrap() - 12.0).abs() < f64::EPSILON);

        source.release(2.0);
        pool.run_until_stalled();
        assert_eq!(source.outstanding(), 0);
        assert!((cards.borrow()[2].latest().unwrap() - 4.0).abs() < f64::EPSILON);

        assert_eq!(
            events.borrow().as_slice(),
            [
                "append A", "refresh A", "append B", "refresh B", "append C", "refresh C"
            ]
        );
    }

    #[test]
    fn test_manual_refresh_runs_alongside_initial_loads() {
        let source = Rc::new(GatedSource::default());
        let mount = Rc::new(RefCell::new(RecordingMount::default()));
        let controller = GalleryController::new(abc_registry(), source.clone(), mount);
        let cards = controller.cards();

        let mut pool = LocalPool::new();
        pool.spawner()
            .spawn_local(async move {
                controller.run().await.unwrap();
            })
            .unwrap();

        pool.run_until_stalled();
        source.release(5.0); // A done
        pool.run_until_stalled();

        // Re-trigger A while B is still in its initial load.
        let card_a = cards.borrow()[0].clone();
        let refreshed = Rc::new(Cell::new(false));
        {
            let refreshed = Rc::clone(&refreshed);
            pool.spawner()
                .spawn_local(async move {
                    card_a.refresh().await.unwrap();
                    refreshed.set(true);
                })
                .unwrap();
        }
        pool.run_until_stalled();
        // B's two requests plus A's re-trigger.
        assert_eq!(source.outstanding(), 3);
        assert_eq!(cards.borrow()[0].state(), LoadState::Loading);

        // Resolve everything in issue order: B, B, then A's re-trigger.
        source.release(4.0);
        source.release(3.0);
        source.release(6.0);
        pool.run_until_stalled();

        assert!(refreshed.get());
        let cards = cards.borrow();
        assert_eq!(cards[0].count(), 2);
        assert!((cards[0].latest().unwrap() - 36.0 * PI).abs() < 1e-9);
        assert!((cards[0].mean().unwrap() - (25.0 + 36.0) * PI / 2.0).abs() < 1e-9);
        // B is untouched by A's re-trigger, and C loaded exactly once.
        assert_eq!(cards[1].count(), 1);
        assert_eq!(cards[2].state(), LoadState::Loading);
        drop(cards);

        source.release(2.0);
        pool.run_until_stalled();
        assert_eq!(source.outstanding(), 0);
    }

    #[test]
    fn test_refresh_rejected_while_loading() {
        let source = Rc::new(GatedSource::default());
        let mount = Rc::new(RefCell::new(RecordingMount::default()));
        let registry = ShapeRegistry::new(vec![ShapeSpec::new("A", ShapeKind::Circle)]);
        let controller = GalleryController::new(registry, source.clone(), mount);
        let cards = controller.cards();

        let mut pool = LocalPool::new();
        pool.spawner()
            .spawn_local(async move {
                controller.run().await.unwrap();
            })
            .unwrap();
        pool.run_until_stalled();

        let card = cards.borrow()[0].clone();
        assert_eq!(card.state(), LoadState::Loading);
        assert_eq!(block_on(card.refresh()), Err(TriggerError::Busy));
        // The rejection left no trace in the statistics.
        assert_eq!(card.count(), 0);

        source.release_all(1.0);
        pool.run_until_stalled();
        assert_eq!(card.state(), LoadState::Ready);
        assert_eq!(card.count(), 1);
    }

    #[test]
    fn test_refresh_appends_history() {
        let source = Rc::new(ScriptedSource::new(&[1.0, 2.0, 3.0]));
        let mount = Rc::new(RefCell::new(RecordingMount::default()));
        let registry = ShapeRegistry::new(vec![ShapeSpec::new("Square", ShapeKind::Square)]);
        let controller = GalleryController::new(registry, source, mount);

        let cards = block_on(controller.run()).unwrap();
        let card = &cards[0];
        assert!((block_on(card.refresh()).unwrap() - 4.0).abs() < f64::EPSILON);
        assert!((block_on(card.refresh()).unwrap() - 9.0).abs() < f64::EPSILON);

        // Areas 1, 4, 9 in computation order.
        assert_eq!(card.count(), 3);
        assert!((card.latest().unwrap() - 9.0).abs() < f64::EPSILON);
        assert!((card.mean().unwrap() - 14.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_empty_registry_is_terminal() {
        let mount = Rc::new(RefCell::new(RecordingMount::default()));
        let events = Rc::clone(&mount.borrow().events);
        let controller =
            GalleryController::new(ShapeRegistry::default(), Rc::new(FixedSource(1.0)), mount);
        let cards = block_on(controller.run()).unwrap();
        assert!(cards.is_empty());
        assert!(events.borrow().is_empty());
    }

    #[test]
    fn test_invalid_spec_fails_fast() {
        let mount = Rc::new(RefCell::new(RecordingMount::default()));
        let registry = ShapeRegistry::new(vec![
            ShapeSpec::new("", ShapeKind::Circle),
            ShapeSpec::new("Never built", ShapeKind::Square),
        ]);
        let controller = GalleryController::new(registry, Rc::new(FixedSource(1.0)), mount);
        assert!(block_on(controller.run()).is_err());
    }

    #[test]
    fn test_singularity_card_loads_asynchronously() {
        let mount = Rc::new(RefCell::new(RecordingMount::default()));
        let registry = ShapeRegistry::new(vec![ShapeSpec::new("Dot", ShapeKind::Singularity)]);
        let controller = GalleryController::new(registry, Rc::new(FixedSource(1.0)), mount);
        let cards = block_on(controller.run()).unwrap();
        assert_eq!(cards[0].state(), LoadState::Ready);
        assert_eq!(cards[0].count(), 1);
        assert!(cards[0].latest().unwrap().is_nan());
    }
}
