//! HTTP API for managing a list of IPTV channels persisted as one JSON file.
//!
//! The handler layer is exposed as a library so the same routes can be served
//! by the bundled binary or embedded in any other request/response host (for
//! example a serverless wrapper) with identical behavior.

pub mod api;
pub mod channel;
pub mod config;
pub mod logger;
pub mod state;
pub mod store;

pub use api::handle_request;
pub use channel::Channel;
pub use config::Config;
pub use state::AppState;
pub use store::ChannelStore;
