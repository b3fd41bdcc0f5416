//! Fetching, validating, and serving the remote project list.

mod client;
mod repository;
mod types;

pub use client::ProjectClient;
pub use repository::{ProjectRepository, PROJECTS_CACHE_KEY};
pub use types::Project;
