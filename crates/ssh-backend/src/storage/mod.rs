//! The opaque key/value store the backend persists its state into.
//!
//! The trait mirrors the storage interface the surrounding framework hands
//! to a secrets backend: durable writes of raw byte values keyed by a flat
//! string path. Structured values are stored as JSON via
//! [`StorageEntry::json`]; consumers must preserve round-trip fidelity of
//! the serialized fields.
use async_trait::async_trait;
use serde::Serialize;
use snafu::{ResultExt, Snafu};

mod memory;
pub use memory::*;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, Snafu)]
pub enum Error {
    #[snafu(display("failed to serialize the value for {key:?} as JSON"))]
    SerializeValue {
        source: serde_json::Error,
        key: String,
    },

    #[snafu(display("storage backend failed: {message}"))]
    Backend { message: String },
}

/// A single record in the storage backend.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StorageEntry {
    pub key: String,
    pub value: Vec<u8>,
}

impl StorageEntry {
    pub fn new(key: impl Into<String>, value: impl Into<Vec<u8>>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }

    /// Creates an entry holding the JSON serialization of `value`.
    pub fn json<T>(key: impl Into<String>, value: &T) -> Result<Self>
    where
        T: Serialize,
    {
        let key = key.into();
        let value = serde_json::to_vec(value).context(SerializeValueSnafu { key: key.clone() })?;

        Ok(Self { key, value })
    }
}

/// Durable key/value storage.
///
/// Writes must be at-least durable when `put` returns. The backend gives no
/// ordering guarantees between concurrent callers; anyone who needs an
/// atomic multi-key swap must bring their own lock.
#[async_trait]
pub trait Storage: Send + Sync {
    /// Writes `entry`, overwriting any previous value under its key.
    async fn put(&self, entry: StorageEntry) -> Result<()>;

    /// Returns the entry stored under `key`, if any.
    async fn get(&self, key: &str) -> Result<Option<StorageEntry>>;
}
