// ABOUTME: File-backed store for the grocery list with whole-list replace semantics.
// ABOUTME: The in-memory list and the file write share one mutex, so each replace is atomic.

use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use grocerd_core::Item;
use thiserror::Error;
use tokio::sync::Mutex;

/// Errors that can occur during store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// File-backed store for the grocery list. Holds the list in memory behind
/// a single mutex that also covers the file write, so a replace is atomic
/// relative to concurrent reads and other replaces. The only write operation
/// is a wholesale replace: last-writer-wins, no merge.
pub struct ListStore {
    path: PathBuf,
    items: Mutex<Vec<Item>>,
}

impl ListStore {
    /// Open a store backed by the file at `path`. A missing file yields an
    /// empty list. A file with malformed JSON is an error: serving on top of
    /// state we cannot read would silently drop it on the next replace.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();
        let items = load_items(&path)?;
        Ok(Self {
            path,
            items: Mutex::new(items),
        })
    }

    /// Returns the path to the backing JSON file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Snapshot of the current list, in order.
    pub async fn items(&self) -> Vec<Item> {
        self.items.lock().await.clone()
    }

    /// Replace the whole list: persist the new list to disk first, then swap
    /// it in memory, all under one lock acquisition. Returns the stored list.
    /// On a write error the previous in-memory list stays in place.
    ///
    /// The file write (including fsync) runs on a blocking thread so it does
    /// not stall the async executor; the store lock stays held across it.
    pub async fn replace(&self, new_items: Vec<Item>) -> Result<Vec<Item>, StoreError> {
        let mut guard = self.items.lock().await;

        let path = self.path.clone();
        let to_write = new_items.clone();
        tokio::task::spawn_blocking(move || write_items(&path, &to_write))
            .await
            .map_err(|err| StoreError::Io(std::io::Error::other(err)))??;

        *guard = new_items;
        Ok(guard.clone())
    }
}

fn load_items(path: &Path) -> Result<Vec<Item>, StoreError> {
    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
        Err(err) => return Err(err.into()),
    };
    let items = serde_json::from_str(&contents)?;
    Ok(items)
}

/// Overwrite the backing file using atomic write (write to .tmp, fsync, rename).
/// Creates parent directories if they do not exist.
fn write_items(path: &Path, items: &[Item]) -> Result<(), StoreError> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }

    let json = serde_json::to_string(items)?;

    let tmp_path = path.with_extension("json.tmp");
    let mut file = File::create(&tmp_path)?;
    file.write_all(json.as_bytes())?;
    file.sync_all()?;
    drop(file);

    fs::rename(&tmp_path, path)?;

    Ok(())
}
