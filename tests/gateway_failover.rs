use axum::extract::Query;
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use fraud_gateway::backends::http::HttpBackendChannel;
use fraud_gateway::service::relay_service::{ProxyResult, RelayService};
use fraud_gateway::AppState;
use serde_json::{json, Value};
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

async fn spawn_backend(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{}", addr)
}

// A port nothing listens on; connections are refused immediately.
async fn dead_base() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}", addr)
}

fn alerts_backend(hits: Arc<AtomicUsize>, body: Value) -> Router {
    Router::new().route(
        "/alerts",
        get(move || {
            let body = body.clone();
            async move {
                hits.fetch_add(1, Ordering::SeqCst);
                Json(body)
            }
        }),
    )
}

fn relay(candidates: Vec<String>, read_timeout_ms: u64) -> RelayService {
    RelayService {
        channel: Arc::new(HttpBackendChannel {
            client: reqwest::Client::new(),
            read_timeout_ms,
        }),
        candidates,
    }
}

#[tokio::test]
async fn first_candidate_success_makes_exactly_one_call() {
    let first_hits = Arc::new(AtomicUsize::new(0));
    let second_hits = Arc::new(AtomicUsize::new(0));
    let first = spawn_backend(alerts_backend(first_hits.clone(), json!([{ "transaction_id": "tx-1" }]))).await;
    let second = spawn_backend(alerts_backend(second_hits.clone(), json!([]))).await;

    let result = relay(vec![first, second], 5000).relay_alerts(None).await;

    match result {
        ProxyResult::Relay { status, body } => {
            assert_eq!(status, 200);
            assert_eq!(body, json!([{ "transaction_id": "tx-1" }]));
        }
        other => panic!("expected relay, got {:?}", other),
    }
    assert_eq!(first_hits.load(Ordering::SeqCst), 1);
    assert_eq!(second_hits.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn exhaustion_returns_502_with_every_attempted_url() {
    let failing = spawn_backend(Router::new().route(
        "/alerts",
        get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "boom") }),
    ))
    .await;
    let garbage = spawn_backend(Router::new().route("/alerts", get(|| async { "not json" }))).await;
    let dead = dead_base().await;

    let candidates = vec![failing.clone(), garbage.clone(), dead.clone()];
    let state = AppState {
        relay_service: relay(candidates, 1000),
    };
    let gateway = spawn_backend(fraud_gateway::app(state)).await;

    let resp = reqwest::get(format!("{}/alerts", gateway)).await.unwrap();
    assert_eq!(resp.status().as_u16(), 502);

    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["error"], "fetch failed");
    assert_eq!(
        body["tried"],
        json!([
            format!("{}/alerts", failing),
            format!("{}/alerts", garbage),
            format!("{}/alerts", dead),
        ])
    );
}

#[tokio::test]
async fn analyze_relays_backend_error_and_stops() {
    let dead = dead_base().await;
    let rejecting = spawn_backend(Router::new().route(
        "/analyze",
        post(|| async {
            (
                StatusCode::UNPROCESSABLE_ENTITY,
                Json(json!({ "error": "blocked by validation" })),
            )
        }),
    ))
    .await;
    let untouched_hits = Arc::new(AtomicUsize::new(0));
    let untouched = {
        let hits = untouched_hits.clone();
        spawn_backend(Router::new().route(
            "/analyze",
            post(move || {
                async move {
                    hits.fetch_add(1, Ordering::SeqCst);
                    Json(json!({ "risk_score": 0.1 }))
                }
            }),
        ))
        .await
    };

    let state = AppState {
        relay_service: relay(vec![dead, rejecting, untouched], 1000),
    };
    let gateway = spawn_backend(fraud_gateway::app(state)).await;

    let resp = reqwest::Client::new()
        .post(format!("{}/analyze", gateway))
        .json(&json!({ "amount": 42 }))
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status().as_u16(), 422);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body, json!({ "error": "blocked by validation" }));
    assert_eq!(untouched_hits.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn hung_candidate_times_out_and_falls_through() {
    let slow = spawn_backend(Router::new().route(
        "/alerts",
        get(|| async {
            tokio::time::sleep(Duration::from_secs(30)).await;
            Json(json!([]))
        }),
    ))
    .await;
    let good_hits = Arc::new(AtomicUsize::new(0));
    let good = spawn_backend(alerts_backend(good_hits.clone(), json!([]))).await;

    let started = Instant::now();
    let result = relay(vec![slow, good], 300).relay_alerts(None).await;

    assert!(matches!(result, ProxyResult::Relay { status: 200, .. }));
    assert_eq!(good_hits.load(Ordering::SeqCst), 1);
    // one bound plus slack, nowhere near the 30s hang
    assert!(started.elapsed() < Duration::from_secs(5));
}

#[tokio::test]
async fn limit_query_is_passed_through_to_the_backend() {
    let seen = Arc::new(std::sync::Mutex::new(None::<String>));
    let backend = {
        let seen = seen.clone();
        spawn_backend(Router::new().route(
            "/alerts",
            get(move |Query(params): Query<HashMap<String, String>>| {
                async move {
                    *seen.lock().unwrap() = params.get("limit").cloned();
                    Json(json!([]))
                }
            }),
        ))
        .await
    };

    let state = AppState {
        relay_service: relay(vec![backend], 1000),
    };
    let gateway = spawn_backend(fraud_gateway::app(state)).await;

    let resp = reqwest::get(format!("{}/alerts?limit=5", gateway)).await.unwrap();
    assert_eq!(resp.status().as_u16(), 200);
    assert_eq!(seen.lock().unwrap().as_deref(), Some("5"));
}
