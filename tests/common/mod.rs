#![allow(dead_code)]

use axum::body::Body;
use axum::http::{Request, Response};
use axum::Router;
use flate2::write::GzEncoder;
use flate2::Compression;
use serde_json::{json, Value};
use std::io::Write;
use tower::ServiceExt;

pub fn gzip(bytes: &[u8]) -> Vec<u8> {
    let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(bytes).unwrap();
    encoder.finish().unwrap()
}

pub fn spread_json(symbol: &str) -> Value {
    json!({
        "profitIndexMax": 1.5,
        "profitIndexMin": 0.2,
        "profitIndexAvg": 0.8,
        "volume": 310.0,
        "buyPriceMin": 0.99,
        "buyPriceMax": 1.01,
        "buyPriceAvg": 1.0,
        "sellPriceMin": 1.02,
        "sellPriceMax": 1.04,
        "sellPriceAvg": 1.03,
        "exchangeBuy": "binance",
        "exchangeSell": "bybit",
        "symbol": symbol,
        "overallProfitIndexMax": 2.0,
        "overallProfitIndexMin": 0.1,
        "overallProfitIndexAvg": 0.9,
        "originalSymbol": symbol.replace('/', ""),
        "volumeUsd": 310.0,
        "lifetime": 60,
        "chainsBuy": [],
        "chainsSell": [{
            "chain": "TRC20",
            "depositEnabled": true,
            "withdrawEnabled": true,
            "withdrawFee": 1.0,
            "minConfirm": 20
        }],
        "updated": 1700000000000i64,
        "isFutures": false,
        "extraField": "ignored"
    })
}

pub fn batch(symbols: &[&str]) -> Vec<u8> {
    let data: Vec<Value> = symbols.iter().map(|s| spread_json(s)).collect();
    gzip(json!({ "data": data }).to_string().as_bytes())
}

/// A hook request carrying every provenance header the receiver expects.
pub fn hook_request(token: Option<&str>, body: Vec<u8>) -> Request<Body> {
    let mut builder = Request::builder()
        .method("POST")
        .uri("/hook")
        .header("host", "localhost:8000")
        .header("user-agent", "spread-scanner/2.1")
        .header("content-encoding", "gzip")
        .header("content-type", "application/json")
        .header("traceparent", "00-4bf92f3577b34da6a3ce929d0e0e4736-00f067aa0ba902b7-01")
        .header("x-spreadbatchid", "batch-1")
        .header("accept-encoding", "gzip, deflate");
    if let Some(token) = token {
        builder = builder.header("X-HookToken", token);
    }
    builder.body(Body::from(body)).unwrap()
}

pub fn get_request(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

pub async fn send(app: &Router, request: Request<Body>) -> (u16, Value) {
    let response: Response<Body> = app.clone().oneshot(request).await.unwrap();
    let status = response.status().as_u16();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}
