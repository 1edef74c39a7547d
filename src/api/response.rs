// API response utility functions module
// Every response carries the permissive CORS headers the browser clients rely on.

use crate::logger;
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{Response, StatusCode};

const ALLOWED_METHODS: &str = "GET, POST, DELETE, OPTIONS";
const ALLOWED_HEADERS: &str = "Content-Type, Authorization";

/// Response builder pre-populated with the CORS headers.
fn builder(status: StatusCode) -> hyper::http::response::Builder {
    Response::builder()
        .status(status)
        .header("Access-Control-Allow-Origin", "*")
        .header("Access-Control-Allow-Methods", ALLOWED_METHODS)
        .header("Access-Control-Allow-Headers", ALLOWED_HEADERS)
}

fn finish(
    builder: hyper::http::response::Builder,
    body: Bytes,
) -> Response<Full<Bytes>> {
    builder.body(Full::new(body)).unwrap_or_else(|e| {
        logger::log_error(&format!("Failed to build response: {e}"));
        Response::new(Full::new(Bytes::from("Error")))
    })
}

/// JSON response from a pre-serialized body.
pub fn json(status: StatusCode, body: String) -> Response<Full<Bytes>> {
    finish(
        builder(status).header("Content-Type", "application/json"),
        Bytes::from(body),
    )
}

/// JSON `{"error": ...}` response.
pub fn error(status: StatusCode, message: &str) -> Response<Full<Bytes>> {
    json(status, serde_json::json!({ "error": message }).to_string())
}

/// JSON `{"message": ...}` response.
pub fn message(status: StatusCode, text: &str) -> Response<Full<Bytes>> {
    json(status, serde_json::json!({ "message": text }).to_string())
}

/// Plain-text response.
pub fn text(status: StatusCode, body: &str) -> Response<Full<Bytes>> {
    finish(
        builder(status).header("Content-Type", "text/plain; charset=utf-8"),
        Bytes::from(body.to_string()),
    )
}

/// Bare 200 for CORS pre-flight requests.
pub fn preflight() -> Response<Full<Bytes>> {
    finish(builder(StatusCode::OK), Bytes::new())
}

/// 404 Not Found response
pub fn not_found() -> Response<Full<Bytes>> {
    error(StatusCode::NOT_FOUND, "Not Found")
}
