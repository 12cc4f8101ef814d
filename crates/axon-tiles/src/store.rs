//! Object store abstraction backing the tile service.

use async_trait::async_trait;
use bytes::Bytes;
use sha2::{Digest, Sha256};
use std::collections::HashMap;
use std::path::PathBuf;
use thiserror::Error;

/// A stored object and the HTTP metadata recorded with it.
#[derive(Debug, Clone)]
pub struct StoredObject {
    pub body: Bytes,
    pub content_type: Option<String>,
    pub etag: Option<String>,
    pub cache_control: Option<String>,
}

impl StoredObject {
    /// Builds an object with an etag derived from the body.
    pub fn new(body: impl Into<Bytes>, content_type: Option<&str>) -> Self {
        let body = body.into();
        let etag = hex::encode(Sha256::digest(&body));

        Self {
            body,
            content_type: content_type.map(str::to_string),
            etag: Some(etag),
            cache_control: None,
        }
    }
}

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid object key: {0}")]
    InvalidKey(String),
}

/// Read access to the tile object store.
#[async_trait]
pub trait TileStore: Send + Sync {
    /// Looks up an object by key; `Ok(None)` means the key does not exist.
    async fn get(&self, key: &str) -> Result<Option<StoredObject>, StoreError>;
}

/// In-memory store used in tests and local development.
#[derive(Default)]
pub struct MemoryStore {
    objects: HashMap<String, StoredObject>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_object(mut self, key: &str, object: StoredObject) -> Self {
        self.objects.insert(key.to_string(), object);
        self
    }
}

#[async_trait]
impl TileStore for MemoryStore {
    async fn get(&self, key: &str) -> Result<Option<StoredObject>, StoreError> {
        Ok(self.objects.get(key).cloned())
    }
}

/// Filesystem-backed store: keys are paths relative to a root directory.
pub struct FsStore {
    root: PathBuf,
}

impl FsStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn content_type_for(key: &str) -> Option<&'static str> {
        let extension = key.rsplit_once('.').map(|(_, ext)| ext)?;
        match extension {
            "pbf" => Some("application/x-protobuf"),
            "json" | "geojson" => Some("application/json"),
            "png" => Some("image/png"),
            "jpg" | "jpeg" => Some("image/jpeg"),
            _ => None,
        }
    }
}

#[async_trait]
impl TileStore for FsStore {
    async fn get(&self, key: &str) -> Result<Option<StoredObject>, StoreError> {
        if key.is_empty() {
            return Ok(None);
        }

        // Keys must stay inside the root directory.
        if key.split('/').any(|segment| segment == "..") {
            return Err(StoreError::InvalidKey(key.to_string()));
        }

        let path = self.root.join(key);

        match tokio::fs::read(&path).await {
            Ok(bytes) => Ok(Some(StoredObject::new(bytes, Self::content_type_for(key)))),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }
}
