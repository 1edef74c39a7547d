// Channel store module
// Reads and writes the full channel collection to a single JSON file.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::sync::Mutex;

use crate::channel::Channel;
use crate::logger;

/// File-backed channel repository.
///
/// Every read loads the whole collection from disk and every mutation writes
/// it back; the backing file is the only state. Mutations are serialized
/// behind one lock so concurrent read-modify-write sequences cannot drop each
/// other's changes.
pub struct ChannelStore {
    /// Path to the backing JSON file.
    path: PathBuf,
    /// Create the file (and its parent directory) when it is missing.
    create_missing: bool,
    /// Serializes read-modify-write sequences.
    write_lock: Mutex<()>,
}

impl ChannelStore {
    pub fn new(path: PathBuf, create_missing: bool) -> Self {
        Self {
            path,
            create_missing,
            write_lock: Mutex::new(()),
        }
    }

    /// Path to the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the full channel collection.
    ///
    /// A missing file yields an empty collection; with `create_missing` set,
    /// an empty backing file is written first. Malformed content is logged
    /// and treated as empty rather than surfaced as a fault.
    pub fn read_all(&self) -> Vec<Channel> {
        match fs::read_to_string(&self.path) {
            Ok(content) => match serde_json::from_str(&content) {
                Ok(channels) => channels,
                Err(e) => {
                    logger::log_error(&format!(
                        "Failed to parse channels file {}: {e}",
                        self.path.display()
                    ));
                    Vec::new()
                }
            },
            Err(e) if e.kind() == ErrorKind::NotFound => {
                if self.create_missing {
                    if let Err(e) = self.write_all(&[]) {
                        logger::log_error(&format!("Failed to create channels file: {e}"));
                    }
                }
                Vec::new()
            }
            Err(e) => {
                logger::log_error(&format!(
                    "Failed to read channels file {}: {e}",
                    self.path.display()
                ));
                Vec::new()
            }
        }
    }

    /// Overwrite the backing file with the given collection, pretty-printed.
    pub fn write_all(&self, channels: &[Channel]) -> Result<(), String> {
        let json = serde_json::to_string_pretty(channels)
            .map_err(|e| format!("Failed to serialize channels: {e}"))?;

        if self.create_missing {
            if let Some(parent) = self.path.parent() {
                if !parent.as_os_str().is_empty() {
                    fs::create_dir_all(parent)
                        .map_err(|e| format!("Failed to create channels directory: {e}"))?;
                }
            }
        }

        fs::write(&self.path, json)
            .map_err(|e| format!("Failed to write channels file: {e}"))
    }

    /// Append a channel and persist the collection.
    pub async fn add(&self, channel: Channel) -> Result<Channel, String> {
        let _guard = self.write_lock.lock().await;

        let mut channels = self.read_all();
        channels.push(channel.clone());
        self.write_all(&channels)?;

        Ok(channel)
    }

    /// Remove every channel whose name equals `name` and persist.
    ///
    /// Returns `Ok(false)` when nothing matched; the file is left untouched.
    pub async fn remove(&self, name: &str) -> Result<bool, String> {
        let _guard = self.write_lock.lock().await;

        let channels = self.read_all();
        let initial_len = channels.len();
        let remaining: Vec<Channel> = channels.into_iter().filter(|c| c.name != name).collect();

        if remaining.len() == initial_len {
            return Ok(false);
        }

        self.write_all(&remaining)?;
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use tempfile::TempDir;

    fn make_channel(name: &str) -> Channel {
        Channel {
            name: name.to_string(),
            url: format!("http://example.com/{name}.mpd"),
            stream_type: "dash".to_string(),
            clear_key: HashMap::new(),
        }
    }

    fn store_in(dir: &TempDir, create_missing: bool) -> ChannelStore {
        ChannelStore::new(dir.path().join("channels.json"), create_missing)
    }

    #[test]
    fn test_read_missing_file_returns_empty() {
        let dir = TempDir::new().expect("temp dir");
        let store = store_in(&dir, false);

        assert!(store.read_all().is_empty());
        assert!(!store.path().exists());
    }

    #[test]
    fn test_read_missing_file_creates_it_when_enabled() {
        let dir = TempDir::new().expect("temp dir");
        let store = ChannelStore::new(dir.path().join("data").join("channels.json"), true);

        assert!(store.read_all().is_empty());
        assert!(store.path().exists());

        let content = fs::read_to_string(store.path()).expect("backing file");
        assert_eq!(content.trim(), "[]");
    }

    #[test]
    fn test_write_read_round_trip() {
        let dir = TempDir::new().expect("temp dir");
        let store = store_in(&dir, true);

        let channels = vec![make_channel("A"), make_channel("B"), make_channel("C")];
        store.write_all(&channels).expect("write");

        assert_eq!(store.read_all(), channels);
    }

    #[test]
    fn test_malformed_file_reads_as_empty() {
        let dir = TempDir::new().expect("temp dir");
        let store = store_in(&dir, false);

        fs::write(store.path(), "{not json").expect("write garbage");
        assert!(store.read_all().is_empty());
    }

    #[tokio::test]
    async fn test_add_appends_in_order() {
        let dir = TempDir::new().expect("temp dir");
        let store = store_in(&dir, true);

        store.add(make_channel("A")).await.expect("add A");
        store.add(make_channel("B")).await.expect("add B");

        let names: Vec<String> = store.read_all().into_iter().map(|c| c.name).collect();
        assert_eq!(names, vec!["A", "B"]);
    }

    #[tokio::test]
    async fn test_remove_deletes_all_matching_names() {
        let dir = TempDir::new().expect("temp dir");
        let store = store_in(&dir, true);

        store
            .write_all(&[make_channel("A"), make_channel("B"), make_channel("A")])
            .expect("seed");

        let removed = store.remove("A").await.expect("remove");
        assert!(removed);

        let names: Vec<String> = store.read_all().into_iter().map(|c| c.name).collect();
        assert_eq!(names, vec!["B"]);
    }

    #[tokio::test]
    async fn test_remove_absent_leaves_store_unchanged() {
        let dir = TempDir::new().expect("temp dir");
        let store = store_in(&dir, true);

        store.write_all(&[make_channel("A")]).expect("seed");

        let removed = store.remove("ZZZ").await.expect("remove");
        assert!(!removed);
        assert_eq!(store.read_all().len(), 1);
    }
}
