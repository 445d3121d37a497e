//! Persistent key-value store abstraction.
//!
//! The generator and the library touch the outside world only through
//! [`KeyValueStore`]: a small async string store in the shape of a mobile
//! app's local storage. Two implementations ship:
//!
//! - [`MemoryStore`]: process-local, for tests and embedding.
//! - [`FileStore`]: one file per key under a directory.
//!
//! Every call is independently fallible. Callers decide whether a failure
//! is fatal; the compliment cache never lets one reach generation.

mod file;
mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

use async_trait::async_trait;

use crate::Result;

/// Async string store keyed by string.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Read the value stored under `key`, `None` if absent.
    async fn get(&self, key: &str) -> Result<Option<String>>;

    /// Store `value` under `key`, replacing any previous value.
    async fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Remove `key`. Removing an absent key is not an error.
    async fn remove(&self, key: &str) -> Result<()>;
}
