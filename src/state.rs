// Application state module

use crate::config::Config;
use crate::store::ChannelStore;

/// State shared across requests: the loaded configuration and the channel
/// repository. The store is injected here rather than being a global so tests
/// can build states over temporary directories.
pub struct AppState {
    pub config: Config,
    pub store: ChannelStore,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let store = ChannelStore::new(config.store_path(), config.store.create_missing);
        Self { config, store }
    }
}
