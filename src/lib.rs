//! Fetch, validate, and cache a remote JSON list of showcase projects.
//!
//! Point a [`Config`] at an endpoint returning a JSON array of project
//! objects and read it through a [`ProjectRepository`]. Results are memoized
//! behind a pluggable [`CacheStore`], so repeated reads skip the network
//! until the entry is refreshed or cleared.
//!
//! ```no_run
//! use showcase::{Config, ProjectRepository};
//!
//! # async fn run() -> showcase::Result<()> {
//! let config = Config::new().with_endpoint_url("https://example.com/projects.json");
//! let repo = ProjectRepository::new(config)?;
//!
//! let all = repo.projects(false).await?;
//! let pick = repo.random_project(false).await?;
//! # let _ = (all, pick);
//! # Ok(())
//! # }
//! ```

mod cache;
mod config;
mod error;
mod projects;

pub use cache::{CacheStore, MemoryCache, NoopStore, Producer};
pub use config::{Config, ENDPOINT_URL_ENV};
pub use error::{Error, Result, ValidationError};
pub use projects::{Project, ProjectClient, ProjectRepository, PROJECTS_CACHE_KEY};
