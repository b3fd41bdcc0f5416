//! Cache-backed access to the remote project list.

use std::sync::{Arc, OnceLock};

use rand::seq::IndexedRandom;
use tracing::debug;

use crate::cache::{CacheStore, MemoryCache, Producer};
use crate::config::Config;
use crate::error::{Error, Result};

use super::client::ProjectClient;
use super::types::Project;

/// Fixed logical key the project list is cached under.
///
/// There is one dataset per configuration, so external store implementations
/// only ever see this key.
pub const PROJECTS_CACHE_KEY: &str = "showcase:projects";

/// Reads the project list through a cache store, fetching on a miss.
pub struct ProjectRepository {
  config: Config,
  client: ProjectClient,
  fallback_store: OnceLock<Arc<MemoryCache>>,
}

impl ProjectRepository {
  /// Create a repository over `config`.
  pub fn new(config: Config) -> Result<Self> {
    Ok(Self {
      config,
      client: ProjectClient::new()?,
      fallback_store: OnceLock::new(),
    })
  }

  /// The active configuration.
  pub fn config(&self) -> &Config {
    &self.config
  }

  /// Mutable access to the configuration. Changes take effect on the next
  /// call; the cache store is re-resolved on every access.
  pub fn config_mut(&mut self) -> &mut Config {
    &mut self.config
  }

  /// Resolve the effective cache store.
  ///
  /// An explicitly configured store wins; otherwise a lazily created
  /// in-process [`MemoryCache`] shared for the lifetime of this repository.
  pub fn cache_store(&self) -> Arc<dyn CacheStore> {
    if let Some(store) = &self.config.cache_store {
      return Arc::clone(store);
    }

    let fallback = self
      .fallback_store
      .get_or_init(|| Arc::new(MemoryCache::new()));
    Arc::<MemoryCache>::clone(fallback)
  }

  /// Return the cached project list, fetching it on a miss.
  ///
  /// With `refresh` the cache entry is dropped first, so exactly one new
  /// fetch happens regardless of prior state. Order follows the source JSON
  /// array.
  pub async fn projects(&self, refresh: bool) -> Result<Vec<Project>> {
    if refresh {
      debug!("refreshing project list");
      self.clear_cache().await?;
    }

    let client = self.client.clone();
    let endpoint = self.config.effective_endpoint().map(str::to_owned);

    let producer: Producer<'_> = Box::new(move || {
      Box::pin(async move {
        // Checked here, not eagerly: a cache hit must succeed without any
        // endpoint configured at all.
        let endpoint = endpoint.ok_or(Error::Configuration)?;
        client.fetch_projects(&endpoint).await
      })
    });

    self.cache_store().fetch(PROJECTS_CACHE_KEY, producer).await
  }

  /// One uniformly random project, or `None` when the list is empty.
  pub async fn random_project(&self, refresh: bool) -> Result<Option<Project>> {
    let projects = self.projects(refresh).await?;

    Ok(projects.choose(&mut rand::rng()).cloned())
  }

  /// Drop the cached project list, if any.
  pub async fn clear_cache(&self) -> Result<()> {
    self.cache_store().delete(PROJECTS_CACHE_KEY).await
  }
}

#[cfg(test)]
mod tests {
  use async_trait::async_trait;

  use super::*;

  /// Store stub that always serves a fixed value and never runs producers.
  struct FixedStore {
    value: Vec<Project>,
  }

  #[async_trait]
  impl CacheStore for FixedStore {
    async fn fetch<'a>(&self, _key: &str, _producer: Producer<'a>) -> Result<Vec<Project>> {
      Ok(self.value.clone())
    }

    async fn delete(&self, _key: &str) -> Result<()> {
      Ok(())
    }
  }

  fn sample_project(name: &str) -> Project {
    Project {
      name: name.to_string(),
      url: "https://example.com".to_string(),
      description: "An example project".to_string(),
      logo_url: None,
    }
  }

  #[tokio::test]
  async fn test_missing_endpoint_fails_with_configuration_error() {
    let repo = ProjectRepository::new(Config::new()).unwrap();

    let err = repo.projects(false).await.unwrap_err();

    assert!(matches!(err, Error::Configuration));
    assert_eq!(err.to_string(), "endpoint URL must be configured");
  }

  #[tokio::test]
  async fn test_empty_endpoint_fails_with_configuration_error() {
    let repo = ProjectRepository::new(Config::new().with_endpoint_url("")).unwrap();

    let err = repo.projects(false).await.unwrap_err();

    assert!(matches!(err, Error::Configuration));
  }

  #[tokio::test]
  async fn test_warm_cache_serves_hits_without_endpoint() {
    // Populate a store out of band, then read it through a repository whose
    // endpoint was never configured. The producer must not run.
    let store = Arc::new(MemoryCache::new());
    let seeded: Producer<'static> =
      Box::new(|| Box::pin(async { Ok(vec![]) }));
    store.fetch(PROJECTS_CACHE_KEY, seeded).await.unwrap();

    let config = Config::new().with_cache_store(store);
    let repo = ProjectRepository::new(config).unwrap();

    let projects = repo.projects(false).await.unwrap();
    assert!(projects.is_empty());
  }

  #[tokio::test]
  async fn test_configured_store_wins_over_fallback() {
    let store = Arc::new(FixedStore {
      value: vec![sample_project("pinned")],
    });
    let repo = ProjectRepository::new(Config::new().with_cache_store(store)).unwrap();

    let projects = repo.projects(false).await.unwrap();

    assert_eq!(projects.len(), 1);
    assert_eq!(projects[0].name, "pinned");
  }

  #[tokio::test]
  async fn test_fallback_store_is_shared_across_calls() {
    let repo = ProjectRepository::new(Config::new()).unwrap();

    let first = repo.cache_store();
    let second = repo.cache_store();

    assert!(Arc::ptr_eq(&first, &second));
  }

  #[tokio::test]
  async fn test_setting_store_later_takes_effect_immediately() {
    let mut repo = ProjectRepository::new(Config::new()).unwrap();
    let _ = repo.cache_store();

    let store = Arc::new(FixedStore {
      value: vec![sample_project("late")],
    });
    repo.config_mut().cache_store = Some(store);

    let projects = repo.projects(false).await.unwrap();
    assert_eq!(projects[0].name, "late");
  }

  #[tokio::test]
  async fn test_random_project_on_empty_list_is_none() {
    let store = Arc::new(FixedStore { value: Vec::new() });
    let repo = ProjectRepository::new(Config::new().with_cache_store(store)).unwrap();

    assert!(repo.random_project(false).await.unwrap().is_none());
  }

  #[tokio::test]
  async fn test_random_project_on_single_element_list_returns_it() {
    let store = Arc::new(FixedStore {
      value: vec![sample_project("only")],
    });
    let repo = ProjectRepository::new(Config::new().with_cache_store(store)).unwrap();

    for _ in 0..3 {
      let pick = repo.random_project(false).await.unwrap().unwrap();
      assert_eq!(pick.name, "only");
    }
  }
}
