// Each integration test file is a separate binary; helpers not used in every
// binary would otherwise trigger dead_code warnings from clippy.
#![allow(dead_code)]

use std::io::{self, Read};

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

use htmlmeta::{config::DEFAULT_MAX_DOCUMENT_BYTES, routes::build_router, state::AppState};

/// Build the full application router with the default document limit.
pub fn create_test_app() -> Router {
    create_test_app_with_limit(DEFAULT_MAX_DOCUMENT_BYTES)
}

pub fn create_test_app_with_limit(max_document_bytes: usize) -> Router {
    build_router(AppState { max_document_bytes })
}

/// Wrap `head` in a minimal page shell.
pub fn page(head: &str) -> String {
    format!("<html><head>{head}</head></html>")
}

// ── Readers ──────────────────────────────────────────────────────────────────

/// Hands out its content in fixed-size pieces so documents cross read
/// boundaries.
pub struct ChunkedReader {
    data: Vec<u8>,
    pos: usize,
    chunk: usize,
}

impl ChunkedReader {
    pub fn new(content: &str, chunk: usize) -> Self {
        ChunkedReader {
            data: content.as_bytes().to_vec(),
            pos: 0,
            chunk,
        }
    }
}

impl Read for ChunkedReader {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let n = self.chunk.min(buf.len()).min(self.data.len() - self.pos);
        buf[..n].copy_from_slice(&self.data[self.pos..self.pos + n]);
        self.pos += n;
        Ok(n)
    }
}

/// Serves `content` once, then fails every later read.
pub struct FailingReader {
    content: Vec<u8>,
    done: bool,
}

impl FailingReader {
    pub fn new(content: &str) -> Self {
        FailingReader {
            content: content.as_bytes().to_vec(),
            done: false,
        }
    }
}

impl Read for FailingReader {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        if self.done {
            return Err(io::Error::new(io::ErrorKind::ConnectionReset, "peer went away"));
        }
        let n = self.content.len().min(buf.len());
        buf[..n].copy_from_slice(&self.content[..n]);
        self.content.drain(..n);
        if self.content.is_empty() {
            self.done = true;
        }
        Ok(n)
    }
}

// ── Request helpers ──────────────────────────────────────────────────────────

pub async fn post_html(app: Router, uri: &str, body: impl Into<String>) -> (StatusCode, Value) {
    let req = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(header::CONTENT_TYPE, "text/html; charset=utf-8")
        .body(Body::from(body.into()))
        .unwrap();
    send(app, req).await
}

pub async fn get(app: Router, uri: &str) -> (StatusCode, Value) {
    let req = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(app, req).await
}

async fn send(app: Router, req: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(req).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json: Value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, json)
}
