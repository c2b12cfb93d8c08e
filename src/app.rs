//! Dispatch shell between the [`Controller`] and an [`ArtistCatalog`].
//!
//! The controller decides what to fetch; this module performs the fetch
//! on a tokio task, hands the task's abort handle back to the controller,
//! and funnels completions through one channel so they are applied on the
//! UI task in arrival order.

use crate::catalog::ArtistCatalog;
use crate::model::{SearchResultItem, ValidationError};
use crate::state::{Completion, Controller, DetailRequest, SearchRequest, Snapshot};
use std::sync::Arc;
use tokio::sync::{mpsc, watch};
use tracing::{debug, warn};

/// Controller plus the machinery to run its requests.
pub struct App<C: ArtistCatalog + 'static> {
    controller: Controller,
    catalog: Arc<C>,
    completions_tx: mpsc::UnboundedSender<Completion>,
    completions_rx: mpsc::UnboundedReceiver<Completion>,
}

impl<C: ArtistCatalog + 'static> App<C> {
    /// Wire `catalog` to a fresh controller.
    pub fn new(catalog: Arc<C>, min_query_chars: usize) -> Self {
        let (completions_tx, completions_rx) = mpsc::unbounded_channel();
        Self {
            controller: Controller::new(min_query_chars),
            catalog,
            completions_tx,
            completions_rx,
        }
    }

    /// Latest snapshot.
    pub fn snapshot(&self) -> Snapshot {
        self.controller.snapshot()
    }

    /// Subscribe to snapshots.
    pub fn subscribe(&self) -> watch::Receiver<Snapshot> {
        self.controller.subscribe()
    }

    /// Forward search bar edits for live validation.
    pub fn input_changed(&mut self, text: &str) -> bool {
        self.controller.on_input_changed(text)
    }

    /// Submit the search bar and dispatch the search if the text is valid.
    ///
    /// Must be called from within a tokio runtime.
    pub fn submit_query(&mut self, text: &str) -> Result<(), ValidationError> {
        let request = self.controller.on_submit_query(text)?;
        self.dispatch_search(request);
        Ok(())
    }

    /// Select a result card and dispatch its detail fetch if needed.
    ///
    /// Returns `false` when the card was already active.
    pub fn click_result(&mut self, item: SearchResultItem) -> bool {
        match self.controller.on_click_result(item) {
            Some(request) => {
                self.dispatch_detail(request);
                true
            }
            None => false,
        }
    }

    /// Wait for the next finished catalog call.
    ///
    /// Never yields `None` while the app is alive: it holds a sender.
    pub async fn next_completion(&mut self) -> Option<Completion> {
        self.completions_rx.recv().await
    }

    /// Apply a completion. Returns `true` if anything visible changed.
    pub fn apply(&mut self, completion: Completion) -> bool {
        self.controller.apply(completion)
    }

    /// Apply every completion already queued, without waiting.
    pub fn drain_completions(&mut self) -> bool {
        let mut changed = false;
        while let Ok(completion) = self.completions_rx.try_recv() {
            changed |= self.controller.apply(completion);
        }
        changed
    }

    fn dispatch_search(&mut self, request: SearchRequest) {
        let SearchRequest { token, query } = request;
        let catalog = Arc::clone(&self.catalog);
        let tx = self.completions_tx.clone();
        debug!(?token, query = %query, "dispatching search");

        let handle = tokio::spawn(async move {
            let outcome = catalog.search(&query).await;
            if let Err(err) = &outcome {
                warn!(?token, error = %err, "search call failed");
            }
            if tx.send(Completion::Search { token, outcome }).is_err() {
                debug!(?token, "search completion dropped; receiver gone");
            }
        });

        self.controller
            .attach_search(token, Box::new(handle.abort_handle()));
    }

    fn dispatch_detail(&mut self, request: DetailRequest) {
        let DetailRequest { token, id } = request;
        let catalog = Arc::clone(&self.catalog);
        let tx = self.completions_tx.clone();
        debug!(?token, id = %id, "dispatching detail fetch");

        let handle = tokio::spawn(async move {
            let outcome = catalog.artist(&id).await;
            if let Err(err) = &outcome {
                warn!(?token, error = %err, "detail call failed");
            }
            if tx.send(Completion::Detail { token, outcome }).is_err() {
                debug!(?token, "detail completion dropped; receiver gone");
            }
        });

        self.controller
            .attach_detail(token, Box::new(handle.abort_handle()));
    }
}

#[cfg(test)]
#[path = "app_tests.rs"]
mod tests;
