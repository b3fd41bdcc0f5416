//! The cache-store capability consumed by the repository.

use async_trait::async_trait;
use futures::future::BoxFuture;

use crate::error::Result;
use crate::projects::Project;

/// Computes the value to store on a cache miss.
///
/// Producers are lazy: a store that finds an existing entry must return it
/// without starting the producer, so none of the fetch pipeline (including
/// its endpoint precondition) runs on a hit.
pub type Producer<'a> = Box<dyn FnOnce() -> BoxFuture<'a, Result<Vec<Project>>> + Send + 'a>;

/// A pluggable store memoizing the fetched project list.
///
/// Implementations own entry lifetime and eviction policy; the repository
/// only supplies the producer that recomputes the value on a miss. A store
/// intended for concurrent use should guarantee at most one producer
/// invocation per key under racing misses (single-flight);
/// [`MemoryCache`](crate::MemoryCache) does not provide that guarantee.
#[async_trait]
pub trait CacheStore: Send + Sync {
  /// Return the entry stored under `key`, or invoke `producer` exactly once,
  /// store its result under `key`, and return it.
  ///
  /// A producer failure propagates as-is and must leave no entry behind, so
  /// a later call can retry the fetch.
  async fn fetch<'a>(&self, key: &str, producer: Producer<'a>) -> Result<Vec<Project>>;

  /// Remove any entry stored under `key`. Removing an absent key is `Ok`.
  async fn delete(&self, key: &str) -> Result<()>;
}
