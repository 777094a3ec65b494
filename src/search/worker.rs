//! Search Worker Thread
//!
//! Runs suggestion requests on a background thread that owns a tokio runtime,
//! so typing never waits on the network. Requests arrive on an unbounded
//! channel; each one runs as its own task and its response is sent back to the
//! UI thread over a std channel.

use std::collections::HashMap;
use std::sync::Arc;
use std::sync::mpsc::Sender;

use tokio::sync::mpsc::{unbounded_channel, UnboundedReceiver, UnboundedSender};
use tokio_util::sync::CancellationToken;

use super::client::SuggestionSource;
use crate::binder::{FieldId, SearchRequest, SearchResponse};

/// Spawn the search worker thread
///
/// Returns the sender for new requests. Dropping it shuts the worker down.
pub fn spawn_worker<S: SuggestionSource>(
    source: S,
    response_tx: Sender<SearchResponse>,
) -> UnboundedSender<SearchRequest> {
    let (request_tx, request_rx) = unbounded_channel();

    std::thread::spawn(move || {
        let runtime = match tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
        {
            Ok(runtime) => runtime,
            Err(e) => {
                log::error!("Failed to start search runtime: {}", e);
                return;
            }
        };

        runtime.block_on(worker_loop(Arc::new(source), request_rx, response_tx));
        log::debug!("Search worker thread shutting down");
    });

    request_tx
}

/// Main worker loop - processes requests until the channel is closed
///
/// Requests overlap freely. A newer request for the same field cancels the
/// older one, which then sends nothing.
async fn worker_loop<S: SuggestionSource>(
    source: Arc<S>,
    mut request_rx: UnboundedReceiver<SearchRequest>,
    response_tx: Sender<SearchResponse>,
) {
    let mut in_flight: HashMap<FieldId, CancellationToken> = HashMap::new();

    while let Some(request) = request_rx.recv().await {
        let token = CancellationToken::new();
        if let Some(previous) = in_flight.insert(request.field, token.clone()) {
            previous.cancel();
        }

        tokio::spawn(handle_request(
            Arc::clone(&source),
            request,
            token,
            response_tx.clone(),
        ));
    }
}

async fn handle_request<S: SuggestionSource>(
    source: Arc<S>,
    request: SearchRequest,
    token: CancellationToken,
    response_tx: Sender<SearchResponse>,
) {
    let result = tokio::select! {
        _ = token.cancelled() => {
            log::debug!("Cancelled search request {}", request.request_id);
            return;
        }
        result = source.fetch(&request.query, &request.mode) => result,
    };

    let response = SearchResponse {
        field: request.field,
        request_id: request.request_id,
        result,
    };
    if response_tx.send(response).is_err() {
        log::debug!("UI disconnected, dropping response {}", request.request_id);
    }
}

#[cfg(test)]
#[path = "worker_tests.rs"]
mod worker_tests;
