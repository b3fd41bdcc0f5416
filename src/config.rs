//! Crate configuration: the endpoint to fetch from and an optional cache store.

use std::fmt;
use std::sync::Arc;

use serde::Deserialize;

use crate::cache::CacheStore;

/// Environment variable read by [`Config::from_env`].
pub const ENDPOINT_URL_ENV: &str = "SHOWCASE_ENDPOINT_URL";

/// Configuration for a [`ProjectRepository`](crate::ProjectRepository).
///
/// There is no default endpoint. A missing or empty URL surfaces as
/// [`Error::Configuration`](crate::Error::Configuration) when a fetch is
/// attempted, not when the configuration is built.
#[derive(Clone, Default, Deserialize)]
pub struct Config {
  /// URL that returns a JSON array of project objects.
  #[serde(default)]
  pub endpoint_url: Option<String>,

  /// Custom cache store. When unset the repository falls back to its own
  /// in-process [`MemoryCache`](crate::MemoryCache).
  #[serde(skip)]
  pub cache_store: Option<Arc<dyn CacheStore>>,
}

impl Config {
  /// Create an empty configuration.
  pub fn new() -> Self {
    Self::default()
  }

  /// Set the endpoint URL.
  pub fn with_endpoint_url(mut self, url: impl Into<String>) -> Self {
    self.endpoint_url = Some(url.into());
    self
  }

  /// Set a custom cache store.
  pub fn with_cache_store(mut self, store: Arc<dyn CacheStore>) -> Self {
    self.cache_store = Some(store);
    self
  }

  /// Build a configuration from the environment.
  ///
  /// Reads the endpoint from `SHOWCASE_ENDPOINT_URL` when set; an unset
  /// variable leaves the endpoint unconfigured.
  pub fn from_env() -> Self {
    Self {
      endpoint_url: std::env::var(ENDPOINT_URL_ENV).ok(),
      cache_store: None,
    }
  }

  /// The configured endpoint, rejecting empty strings.
  pub(crate) fn effective_endpoint(&self) -> Option<&str> {
    self.endpoint_url.as_deref().filter(|url| !url.is_empty())
  }
}

impl fmt::Debug for Config {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("Config")
      .field("endpoint_url", &self.endpoint_url)
      .field("cache_store", &self.cache_store.as_ref().map(|_| "<custom>"))
      .finish()
  }
}
