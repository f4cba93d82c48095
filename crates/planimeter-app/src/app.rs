//! Gallery wiring for the terminal demo.

use crate::mount::TerminalMount;
use crate::source::RandomSource;
use planimeter_core::{DisplayMount, GalleryController, ShapeRegistry};
use std::cell::RefCell;
use std::rc::Rc;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("invalid shape specification: {0}")]
    Spec(#[from] planimeter_core::SpecError),
    #[error("could not read gallery manifest: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed gallery manifest: {0}")]
    Manifest(#[from] serde_json::Error),
}

/// Load the gallery sequentially, then fire one manual re-trigger per card
/// with all of them in flight at once.
pub async fn run(manifest: Option<&str>) -> Result<(), AppError> {
    let registry = match manifest {
        Some(path) => ShapeRegistry::from_json(&std::fs::read_to_string(path)?)?,
        None => ShapeRegistry::stock(),
    };
    log::info!("gallery holds {} shapes", registry.len());

    let source = Rc::new(RandomSource::default());
    let mount = Rc::new(RefCell::new(TerminalMount::default()));
    let controller = GalleryController::new(registry, source, mount.clone());
    let cards = controller.run().await?;

    println!("--- manual refresh ---");
    let refreshes: Vec<_> = cards
        .iter()
        .cloned()
        .map(|card| {
            tokio::task::spawn_local(async move {
                match card.refresh().await {
                    Ok(area) => log::debug!("refreshed `{}` -> {area}", card.name()),
                    Err(err) => log::warn!("`{}`: {err}", card.name()),
                }
                card
            })
        })
        .collect();
    for refresh in refreshes {
        if let Ok(card) = refresh.await {
            mount.borrow_mut().refresh(&card);
        }
    }
    Ok(())
}
