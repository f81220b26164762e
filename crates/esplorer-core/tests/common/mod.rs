//! In-process mock explorer for the integration tests.
//!
//! Serves canned Esplora payloads from an `axum` router bound to an
//! ephemeral local port. Path identifiers are echoed back so tests can check
//! that the client asked for what the caller passed in.

#![allow(dead_code)]

#[path = "../../src/test_util.rs"]
pub mod fixtures;

use std::sync::Once;

use axum::extract::Path;
use axum::http::{header, HeaderMap, StatusCode};
use axum::routing::get;
use axum::{Json, Router};
use serde_json::{json, Value};

use fixtures::*;

static TRACING_INIT: Once = Once::new();

pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("esplorer_core=debug")),
            )
            .with_target(true)
            .with_test_writer()
            .try_init();
    });
}

/// Serve `router` on `127.0.0.1:0` and return its base URL.
pub async fn spawn(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("mock explorer must bind");
    let addr = listener.local_addr().expect("bound listener has an address");
    tokio::spawn(async move {
        axum::serve(listener, router)
            .await
            .expect("mock explorer must serve");
    });
    format!("http://{addr}")
}

/// A base URL nothing is listening on.
pub async fn unreachable_url() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("probe listener must bind");
    let addr = listener.local_addr().expect("bound listener has an address");
    drop(listener);
    format!("http://{addr}")
}

/// Transaction id the mock answers 404 for.
pub const MISSING_TXID: &str = "0000000000000000000000000000000000000000000000000000000000000bad";

pub const TX_HEX: &str = "0200000001d8e2b1c4a7f39d0e0a1b2c3d4e5f60718293a4b5c6d7e8f9a0b1c2d3e4f5a6b70000000000ffffffff0150c3000000000000160014841b80d2cc75f5345c482af96294d04fdd66b2b700000000";
pub const TIP_HEIGHT: u32 = 812_345;

// ==============================================================================
// Router
// ==============================================================================

/// Mock covering every endpoint with well-formed payloads.
pub fn explorer() -> Router {
    Router::new()
        .route("/tx/{txid}", get(tx))
        .route("/tx/{txid}/status", get(|| async { Json(status_json(800_000)) }))
        .route("/tx/{txid}/hex", get(|| async { TX_HEX }))
        .route(
            "/tx/{txid}/merkle-proof",
            get(|| async { Json(merkle_proof_json(800_000)) }),
        )
        .route("/tx/{txid}/outspend/{vout}", get(tx_outspend))
        .route(
            "/tx/{txid}/outspends",
            get(|| async { Json(json!([outspend_json(SPENDING_TXID, 0), { "spent": false }])) }),
        )
        .route(
            "/address/{address}",
            get(|Path(address): Path<String>| async move { Json(address_info_json(&address)) }),
        )
        .route(
            "/scripthash/{hash}",
            get(|Path(hash): Path<String>| async move { Json(script_hash_info_json(&hash)) }),
        )
        .route("/address/{address}/txs", get(tx_page))
        .route("/scripthash/{hash}/txs", get(tx_page))
        .route("/address/{address}/txs/chain/{last}", get(tx_page_after))
        .route("/scripthash/{hash}/txs/chain/{last}", get(tx_page_after))
        .route("/address/{address}/txs/mempool", get(empty_array))
        .route("/scripthash/{hash}/txs/mempool", get(empty_array))
        .route(
            "/address/{address}/utxo",
            get(|| async { Json(json!([utxo_json(TXID, 0, 50_000), utxo_json(SPENDING_TXID, 1, 70_000)])) }),
        )
        .route("/scripthash/{hash}/utxo", get(empty_array))
        .route(
            "/block/{hash}",
            get(|Path(hash): Path<String>| async move { Json(block_json(&hash, 800_000)) }),
        )
        .route(
            "/block/{hash}/status",
            get(|| async { Json(block_status_json(800_000)) }),
        )
        .route("/block/{hash}/txs/{start}", get(block_txs))
        .route(
            "/block/{hash}/txids",
            get(|| async { Json(json!([TXID, SPENDING_TXID])) }),
        )
        .route("/block/{hash}/txid/{index}", get(block_txid))
        .route("/block-height/{height}", get(block_hash_at))
        .route("/blocks/{height}", get(blocks_from))
        .route("/blocks/tip/height", get(|| async { TIP_HEIGHT.to_string() }))
        .route("/blocks/tip/hash", get(|| async { BLOCK_HASH }))
        .route("/mempool", get(|| async { Json(mempool_statistics_json()) }))
        .route("/mempool/txids", get(empty_array))
        .route(
            "/mempool/recent",
            get(|| async { Json(mempool_recent_json(TXID)) }),
        )
        .route("/fee-estimates", get(|| async { Json(fee_estimates_json()) }))
}

/// Mock answering every request with `status` and a plain-text `body`.
pub fn failing(status: StatusCode, body: &'static str) -> Router {
    Router::new().fallback(move || async move { (status, body) })
}

/// Mock answering every request with the request's `User-Agent` header.
pub fn user_agent_echo() -> Router {
    Router::new().fallback(|headers: HeaderMap| async move {
        headers
            .get(header::USER_AGENT)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_owned()
    })
}

/// Mock answering every request with 200 and `body`.
pub fn constant(body: &'static str) -> Router {
    Router::new().fallback(move || async move { body })
}

// ==============================================================================
// Handlers
// ==============================================================================

async fn tx(Path(txid): Path<String>) -> Result<Json<Value>, (StatusCode, &'static str)> {
    if txid == MISSING_TXID {
        return Err((StatusCode::NOT_FOUND, "Transaction not found"));
    }
    Ok(Json(transaction_json(&txid)))
}

// The spending transaction spends output `n` with its input `n`.
async fn tx_outspend(Path((_txid, vout)): Path<(String, u32)>) -> Json<Value> {
    Json(outspend_json(SPENDING_TXID, vout))
}

async fn tx_page(Path(_key): Path<String>) -> Json<Value> {
    Json(json!([transaction_json(TXID), coinbase_json(SPENDING_TXID)]))
}

async fn tx_page_after(Path((_key, _last)): Path<(String, String)>) -> Json<Value> {
    Json(json!([coinbase_json(SPENDING_TXID)]))
}

async fn empty_array() -> Json<Value> {
    Json(json!([]))
}

async fn block_txs(Path((_hash, start)): Path<(String, u32)>) -> Json<Value> {
    if start > 0 {
        return Json(json!([transaction_json(SPENDING_TXID)]));
    }
    Json(json!([coinbase_json(TXID), transaction_json(SPENDING_TXID)]))
}

async fn block_txid(
    Path((_hash, index)): Path<(String, u32)>,
) -> Result<&'static str, (StatusCode, &'static str)> {
    match index {
        0 => Ok(TXID),
        1 => Ok(SPENDING_TXID),
        _ => Err((StatusCode::NOT_FOUND, "Transaction index out of range")),
    }
}

async fn block_hash_at(Path(height): Path<u32>) -> Result<&'static str, (StatusCode, &'static str)> {
    match height {
        49_999 => Ok(BLOCK_HASH_49999),
        h if h <= TIP_HEIGHT => Ok(BLOCK_HASH),
        _ => Err((StatusCode::NOT_FOUND, "Block not found")),
    }
}

async fn blocks_from(Path(height): Path<u32>) -> Json<Value> {
    let blocks: Vec<Value> = (0..3)
        .filter_map(|offset| height.checked_sub(offset))
        .map(|h| block_json(BLOCK_HASH, h))
        .collect();
    Json(Value::Array(blocks))
}
