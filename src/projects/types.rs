//! The project value object.

use serde::{Deserialize, Serialize};

/// A single advertised project.
///
/// Built only while parsing a fetch response and never mutated afterwards.
/// Equality is structural.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
  pub name: String,
  pub url: String,
  pub description: String,
  /// Logo image URL; optional in the source data.
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub logo_url: Option<String>,
}
