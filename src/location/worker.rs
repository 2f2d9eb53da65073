//! Location lookup worker
//!
//! Runs lookups off the UI thread. A background thread hosts a current-thread
//! tokio runtime; each search request becomes its own task so a slow response
//! never holds up a newer one. Replies travel back on the reply channel that
//! came with the request, tagged with the request's generation.

use std::sync::Arc;
use std::sync::mpsc::Sender;

use tokio::sync::mpsc::{UnboundedReceiver, UnboundedSender, unbounded_channel};
use tokio_util::sync::CancellationToken;

use super::provider::{LookupError, LookupProvider};
use super::suggestion::Suggestion;
use crate::error::WayfinderError;

/// Request messages sent to the lookup worker
#[derive(Debug)]
pub enum LookupRequest {
    Search {
        query: String,
        /// Generation of the widget text this search was issued for
        generation: u64,
        /// Cancelled by the widget when the search is superseded or the widget goes away
        cancel_token: CancellationToken,
        reply: Sender<LookupResponse>,
    },
}

/// Response messages sent back to the requesting widget
#[derive(Debug, Clone, PartialEq)]
pub enum LookupResponse {
    Results {
        generation: u64,
        suggestions: Vec<Suggestion>,
    },
    Failed {
        generation: u64,
        error: LookupError,
    },
    Cancelled {
        generation: u64,
    },
}

impl LookupResponse {
    pub fn generation(&self) -> u64 {
        match self {
            LookupResponse::Results { generation, .. }
            | LookupResponse::Failed { generation, .. }
            | LookupResponse::Cancelled { generation } => *generation,
        }
    }
}

/// Spawn the lookup worker thread
///
/// Returns the sender widgets use to submit searches. The worker exits once
/// every sender has been dropped.
pub fn spawn_worker(
    provider: Arc<dyn LookupProvider>,
) -> Result<UnboundedSender<LookupRequest>, WayfinderError> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|e| WayfinderError::LookupUnavailable(e.to_string()))?;
    let (request_tx, request_rx) = unbounded_channel();

    std::thread::Builder::new()
        .name("location-lookup".to_string())
        .spawn(move || {
            runtime.block_on(worker_loop(provider, request_rx));
        })?;

    Ok(request_tx)
}

/// Main worker loop - processes requests until the channel is closed
async fn worker_loop(
    provider: Arc<dyn LookupProvider>,
    mut request_rx: UnboundedReceiver<LookupRequest>,
) {
    while let Some(request) = request_rx.recv().await {
        match request {
            LookupRequest::Search {
                query,
                generation,
                cancel_token,
                reply,
            } => {
                let provider = Arc::clone(&provider);
                tokio::spawn(async move {
                    let response =
                        run_search(provider.as_ref(), &query, generation, &cancel_token).await;
                    if reply.send(response).is_err() {
                        // Widget was torn down while the search ran
                        log::debug!("Dropped lookup reply for generation {}", generation);
                    }
                });
            }
        }
    }

    log::debug!("Location lookup worker shutting down");
}

/// Run one search, racing it against its cancellation token
async fn run_search(
    provider: &dyn LookupProvider,
    query: &str,
    generation: u64,
    cancel_token: &CancellationToken,
) -> LookupResponse {
    if cancel_token.is_cancelled() {
        log::debug!("Lookup {} cancelled before start", generation);
        return LookupResponse::Cancelled { generation };
    }

    log::debug!("Looking up {:?} (generation {})", query, generation);

    tokio::select! {
        biased;
        _ = cancel_token.cancelled() => {
            log::debug!("Lookup {} cancelled in flight", generation);
            LookupResponse::Cancelled { generation }
        }
        result = provider.search(query) => match result {
            Ok(suggestions) => LookupResponse::Results { generation, suggestions },
            Err(error) => LookupResponse::Failed { generation, error },
        },
    }
}

#[cfg(test)]
#[path = "worker_tests.rs"]
mod worker_tests;
