// Channel API handlers

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{Response, StatusCode};

use super::response;
use super::types::NewChannel;
use crate::logger;
use crate::state::AppState;

/// `GET /` — liveness check.
pub fn handle_root() -> Response<Full<Bytes>> {
    response::text(StatusCode::OK, "IPTV API Server is running!")
}

/// `GET /channels` — the full collection as a JSON array.
pub fn handle_list(state: &AppState) -> Response<Full<Bytes>> {
    let channels = state.store.read_all();

    match serde_json::to_string_pretty(&channels) {
        Ok(json) => response::json(StatusCode::OK, json),
        Err(e) => {
            logger::log_error(&format!("Failed to serialize channel list: {e}"));
            response::error(StatusCode::INTERNAL_SERVER_ERROR, "Failed to load channels")
        }
    }
}

/// `POST /channels` — validate the payload, append, persist.
pub async fn handle_add(state: &AppState, body: &[u8]) -> Response<Full<Bytes>> {
    let payload: NewChannel = match serde_json::from_slice(body) {
        Ok(payload) => payload,
        Err(e) => {
            logger::log_warning(&format!("Rejected unparsable channel payload: {e}"));
            return response::error(StatusCode::BAD_REQUEST, "Valid name and URL are required");
        }
    };

    if !payload.is_valid() {
        return response::error(StatusCode::BAD_REQUEST, "Valid name and URL are required");
    }

    match state.store.add(payload.into_channel()).await {
        Ok(created) => match serde_json::to_string_pretty(&created) {
            Ok(json) => response::json(StatusCode::CREATED, json),
            Err(e) => {
                logger::log_error(&format!("Failed to serialize created channel: {e}"));
                response::error(StatusCode::INTERNAL_SERVER_ERROR, "Failed to add channel")
            }
        },
        Err(e) => {
            logger::log_error(&e);
            response::error(StatusCode::INTERNAL_SERVER_ERROR, "Failed to add channel")
        }
    }
}

/// `DELETE /channels/:name` — remove every channel with the given name.
pub async fn handle_delete(state: &AppState, name: &str) -> Response<Full<Bytes>> {
    match state.store.remove(name).await {
        Ok(true) => response::message(StatusCode::OK, "Channel deleted"),
        Ok(false) => response::error(StatusCode::NOT_FOUND, "Channel not found"),
        Err(e) => {
            logger::log_error(&e);
            response::error(StatusCode::INTERNAL_SERVER_ERROR, "Failed to delete channel")
        }
    }
}
