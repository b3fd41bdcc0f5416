//! In-process cache stores.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;
use tracing::debug;

use crate::error::{Error, Result};
use crate::projects::Project;

use super::traits::{CacheStore, Producer};

/// Default in-process store: a mutex-guarded map with no TTL and no eviction.
///
/// Hits are decided by key presence, so an empty cached list still counts as
/// a hit. Not single-flight: concurrent misses on the same key may each run
/// their producer, and the last insert wins.
#[derive(Debug, Default)]
pub struct MemoryCache {
  entries: Mutex<HashMap<String, Vec<Project>>>,
}

impl MemoryCache {
  /// Create an empty cache.
  pub fn new() -> Self {
    Self::default()
  }

  fn lock(&self) -> Result<MutexGuard<'_, HashMap<String, Vec<Project>>>> {
    self.entries.lock().map_err(|e| Error::Cache {
      message: format!("lock poisoned: {e}"),
    })
  }
}

#[async_trait]
impl CacheStore for MemoryCache {
  async fn fetch<'a>(&self, key: &str, producer: Producer<'a>) -> Result<Vec<Project>> {
    {
      let entries = self.lock()?;
      if let Some(cached) = entries.get(key) {
        debug!(key, "cache hit");
        return Ok(cached.clone());
      }
    }

    debug!(key, "cache miss");
    let value = producer().await?;

    self.lock()?.insert(key.to_owned(), value.clone());
    Ok(value)
  }

  async fn delete(&self, key: &str) -> Result<()> {
    self.lock()?.remove(key);
    Ok(())
  }
}

/// A store that never retains anything.
///
/// Every `fetch` runs the producer and returns its result unstored, letting
/// a host turn caching off without changing call sites.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopStore;

#[async_trait]
impl CacheStore for NoopStore {
  async fn fetch<'a>(&self, _key: &str, producer: Producer<'a>) -> Result<Vec<Project>> {
    producer().await
  }

  async fn delete(&self, _key: &str) -> Result<()> {
    Ok(())
  }
}
