//! Tests for the location lookup worker

use super::*;
use futures::FutureExt;
use futures::future::BoxFuture;
use serde_json::json;
use std::sync::Mutex;
use std::sync::mpsc;
use std::time::Duration;

const RECV_TIMEOUT: Duration = Duration::from_secs(5);

/// Provider that answers every query after a per-query delay
#[derive(Default)]
struct ScriptedProvider {
    delays_ms: Vec<(&'static str, u64)>,
    failure: Option<LookupError>,
    calls: Arc<Mutex<Vec<String>>>,
}

impl LookupProvider for ScriptedProvider {
    fn search<'a>(&'a self, query: &'a str) -> BoxFuture<'a, Result<Vec<Suggestion>, LookupError>> {
        async move {
            self.calls.lock().unwrap().push(query.to_string());
            let delay = self
                .delays_ms
                .iter()
                .find(|(q, _)| *q == query)
                .map(|(_, ms)| *ms)
                .unwrap_or(0);
            tokio::time::sleep(Duration::from_millis(delay)).await;

            if let Some(error) = &self.failure {
                return Err(error.clone());
            }
            Ok(vec![Suggestion::new(
                query,
                format!("{} (match)", query),
                json!({ "query": query }),
            )])
        }
        .boxed()
    }
}

fn search(
    query: &str,
    generation: u64,
    reply: &mpsc::Sender<LookupResponse>,
) -> (LookupRequest, CancellationToken) {
    let cancel_token = CancellationToken::new();
    let request = LookupRequest::Search {
        query: query.to_string(),
        generation,
        cancel_token: cancel_token.clone(),
        reply: reply.clone(),
    };
    (request, cancel_token)
}

#[test]
fn test_worker_returns_results_with_generation() {
    let tx = spawn_worker(Arc::new(ScriptedProvider::default())).unwrap();
    let (reply_tx, reply_rx) = mpsc::channel();

    let (request, _token) = search("Par", 7, &reply_tx);
    tx.send(request).unwrap();

    match reply_rx.recv_timeout(RECV_TIMEOUT).unwrap() {
        LookupResponse::Results {
            generation,
            suggestions,
        } => {
            assert_eq!(generation, 7);
            assert_eq!(suggestions.len(), 1);
            assert_eq!(suggestions[0].display_name(), "Par (match)");
        }
        other => panic!("Expected results, got {:?}", other),
    }
}

#[test]
fn test_worker_reports_provider_failure() {
    let provider = ScriptedProvider {
        failure: Some(LookupError::Network("connection refused".to_string())),
        ..ScriptedProvider::default()
    };
    let tx = spawn_worker(Arc::new(provider)).unwrap();
    let (reply_tx, reply_rx) = mpsc::channel();

    let (request, _token) = search("Paris", 3, &reply_tx);
    tx.send(request).unwrap();

    let response = reply_rx.recv_timeout(RECV_TIMEOUT).unwrap();
    assert_eq!(
        response,
        LookupResponse::Failed {
            generation: 3,
            error: LookupError::Network("connection refused".to_string()),
        }
    );
}

#[test]
fn test_slow_search_does_not_block_newer_one() {
    let provider = ScriptedProvider {
        delays_ms: vec![("Par", 300), ("Pari", 10)],
        ..ScriptedProvider::default()
    };
    let tx = spawn_worker(Arc::new(provider)).unwrap();
    let (reply_tx, reply_rx) = mpsc::channel();

    let (first, _first_token) = search("Par", 1, &reply_tx);
    let (second, _second_token) = search("Pari", 2, &reply_tx);
    tx.send(first).unwrap();
    tx.send(second).unwrap();

    // Completions arrive in finishing order, not issue order
    let earliest = reply_rx.recv_timeout(RECV_TIMEOUT).unwrap();
    let latest = reply_rx.recv_timeout(RECV_TIMEOUT).unwrap();
    assert_eq!(earliest.generation(), 2);
    assert_eq!(latest.generation(), 1);
}

#[test]
fn test_cancel_in_flight_search() {
    let provider = ScriptedProvider {
        delays_ms: vec![("Lisbon", 2_000)],
        ..ScriptedProvider::default()
    };
    let tx = spawn_worker(Arc::new(provider)).unwrap();
    let (reply_tx, reply_rx) = mpsc::channel();

    let (request, token) = search("Lisbon", 4, &reply_tx);
    tx.send(request).unwrap();
    std::thread::sleep(Duration::from_millis(50));
    token.cancel();

    let response = reply_rx.recv_timeout(Duration::from_millis(1_000)).unwrap();
    assert_eq!(response, LookupResponse::Cancelled { generation: 4 });
}

#[test]
fn test_pre_cancelled_search_never_reaches_provider() {
    let calls = Arc::new(Mutex::new(Vec::new()));
    let provider = ScriptedProvider {
        calls: Arc::clone(&calls),
        ..ScriptedProvider::default()
    };
    let tx = spawn_worker(Arc::new(provider)).unwrap();
    let (reply_tx, reply_rx) = mpsc::channel();

    let (request, token) = search("Madrid", 9, &reply_tx);
    token.cancel();
    tx.send(request).unwrap();

    let response = reply_rx.recv_timeout(RECV_TIMEOUT).unwrap();
    assert_eq!(response, LookupResponse::Cancelled { generation: 9 });
    assert!(calls.lock().unwrap().is_empty());
}

#[test]
fn test_worker_survives_dropped_reply_channel() {
    let tx = spawn_worker(Arc::new(ScriptedProvider::default())).unwrap();

    // Widget gone before the reply is sent
    let (gone_tx, gone_rx) = mpsc::channel();
    drop(gone_rx);
    let (orphan, _token) = search("Rome", 1, &gone_tx);
    tx.send(orphan).unwrap();

    let (reply_tx, reply_rx) = mpsc::channel();
    let (request, _token) = search("Roma", 1, &reply_tx);
    tx.send(request).unwrap();

    let response = reply_rx.recv_timeout(RECV_TIMEOUT).unwrap();
    assert!(matches!(response, LookupResponse::Results { .. }));
}

#[test]
fn test_worker_loop_exits_when_senders_dropped() {
    let (tx, rx) = unbounded_channel::<LookupRequest>();
    drop(tx);

    let rt = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .unwrap();
    rt.block_on(worker_loop(Arc::new(ScriptedProvider::default()), rx));
}

#[test]
fn test_response_generation_accessor() {
    assert_eq!(
        LookupResponse::Results {
            generation: 1,
            suggestions: vec![],
        }
        .generation(),
        1
    );
    assert_eq!(
        LookupResponse::Failed {
            generation: 2,
            error: LookupError::MalformedResponse("x".to_string()),
        }
        .generation(),
        2
    );
    assert_eq!(LookupResponse::Cancelled { generation: 3 }.generation(), 3);
}
