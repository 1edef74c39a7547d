// API module entry
// Dispatches requests to the channel handlers and answers CORS pre-flights.

mod handlers;
mod response;
mod types;

use http_body_util::{BodyExt, Full};
use hyper::body::{Body, Bytes};
use hyper::{Method, Request, Response, StatusCode};
use std::convert::Infallible;
use std::sync::Arc;

use crate::logger;
use crate::state::AppState;

/// Request-response entry point for the channel API.
///
/// Generic over the request body so the standalone listener drives it with
/// `hyper::body::Incoming` while embedding hosts and tests can use
/// `Full<Bytes>`. Pre-flight `OPTIONS` requests are answered before routing;
/// every response carries the permissive CORS headers.
pub async fn handle_request<B>(
    req: Request<B>,
    state: Arc<AppState>,
) -> Result<Response<Full<Bytes>>, Infallible>
where
    B: Body,
    B::Error: std::fmt::Display,
{
    let (parts, body) = req.into_parts();
    let method = parts.method;
    let path = parts.uri.path().to_string();

    let resp = if method == Method::OPTIONS {
        response::preflight()
    } else {
        match (&method, path.as_str()) {
            (&Method::GET, "/") => handlers::handle_root(),
            (&Method::GET, "/channels") => handlers::handle_list(&state),
            (&Method::POST, "/channels") => match body.collect().await {
                Ok(collected) => handlers::handle_add(&state, &collected.to_bytes()).await,
                Err(e) => {
                    logger::log_warning(&format!("Failed to read request body: {e}"));
                    response::error(StatusCode::BAD_REQUEST, "Valid name and URL are required")
                }
            },
            (&Method::DELETE, p) => match delete_target(p) {
                Some(name) => handlers::handle_delete(&state, &name).await,
                None => response::not_found(),
            },
            _ => response::not_found(),
        }
    };

    if state.config.logging.access_log {
        logger::log_request(method.as_str(), &path, resp.status().as_u16());
    }

    Ok(resp)
}

/// Extract and decode the `:name` segment of `DELETE /channels/:name`.
///
/// The name is a single path segment, percent-decoded the way browser clients
/// encode it.
fn delete_target(path: &str) -> Option<String> {
    let name = path.strip_prefix("/channels/")?;
    if name.is_empty() || name.contains('/') {
        return None;
    }
    Some(percent_decode(name))
}

/// Decode `%XX` escapes in a path segment; invalid escapes pass through.
fn percent_decode(segment: &str) -> String {
    let bytes = segment.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;

    while i < bytes.len() {
        if bytes[i] == b'%' && i + 2 < bytes.len() {
            if let (Some(hi), Some(lo)) = (hex_value(bytes[i + 1]), hex_value(bytes[i + 2])) {
                out.push(hi << 4 | lo);
                i += 3;
                continue;
            }
        }
        out.push(bytes[i]);
        i += 1;
    }

    String::from_utf8(out).unwrap_or_else(|_| segment.to_string())
}

const fn hex_value(byte: u8) -> Option<u8> {
    match byte {
        b'0'..=b'9' => Some(byte - b'0'),
        b'a'..=b'f' => Some(byte - b'a' + 10),
        b'A'..=b'F' => Some(byte - b'A' + 10),
        _ => None,
    }
}
