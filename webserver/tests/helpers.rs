//! Test helper utilities for webserver integration tests
#![allow(dead_code)]

use std::net::SocketAddr;

use axum::Router;
use axum::body::Body;
use axum::http::{Method, Request, StatusCode, header};
use serde_json::Value;
use tower::ServiceExt;
use webserver::{DocumentStore, WebServer};

pub fn create_test_address() -> SocketAddr {
    "127.0.0.1:5000".parse().unwrap()
}

/// Router over the given store, as `WebServer::run` would serve it
pub fn create_test_router<D: DocumentStore + 'static>(store: D) -> Router {
    WebServer::new(create_test_address(), store).build_router()
}

pub fn request(method: Method, uri: &str, token: Option<&str>, body: Option<Value>) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    }
}

/// Send one request through the router and decode the JSON body
pub async fn send(router: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = router.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
}

pub async fn get(router: &Router, uri: &str, token: Option<&str>) -> (StatusCode, Value) {
    send(router, request(Method::GET, uri, token, None)).await
}

/// Ids of the documents in an envelope's `data` array
pub fn data_ids(body: &Value) -> Vec<String> {
    body["data"]
        .as_array()
        .map(|docs| {
            docs.iter()
                .filter_map(|doc| doc["_id"].as_str().map(String::from))
                .collect()
        })
        .unwrap_or_default()
}
