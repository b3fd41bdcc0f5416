//! The fetch pipeline: HTTP GET, JSON parse, shape validation, mapping.

use reqwest::header::{HeaderMap, HeaderValue, USER_AGENT};
use serde_json::Value;
use tracing::debug;

use crate::error::{Error, Result, ValidationError};

use super::types::Project;

/// Keys every project object must carry. Missing-key reports list names in
/// this order.
const REQUIRED_KEYS: [&str; 3] = ["name", "url", "description"];

/// Fetches and decodes the remote project list.
///
/// Wraps a shared `reqwest::Client` left on transport defaults: no explicit
/// timeout, redirect, or retry policy. Callers needing either impose it at
/// the transport layer.
#[derive(Clone)]
pub struct ProjectClient {
  http: reqwest::Client,
}

impl ProjectClient {
  /// Create a client with a default transport.
  pub fn new() -> Result<Self> {
    let mut headers = HeaderMap::new();
    headers.insert(USER_AGENT, HeaderValue::from_static("showcase"));

    let http = reqwest::Client::builder().default_headers(headers).build()?;

    Ok(Self { http })
  }

  /// Fetch, parse, validate, and map the project list from `endpoint`.
  ///
  /// The response status line is not inspected; whatever body comes back is
  /// handed to the JSON parser, so a non-JSON error page surfaces as
  /// [`Error::Parse`] naming the endpoint.
  pub async fn fetch_projects(&self, endpoint: &str) -> Result<Vec<Project>> {
    debug!(endpoint, "fetching projects");

    let response = self.http.get(endpoint).send().await?;
    let body = response.text().await?;

    let parsed: Value = serde_json::from_str(&body).map_err(|source| Error::Parse {
      endpoint: endpoint.to_owned(),
      source,
    })?;

    validate_projects(&parsed)?;

    // Shape is known good; a wrongly typed field value is still possible and
    // is reported as a generic fetch failure with the serde message.
    serde_json::from_value(parsed).map_err(|e| Error::Fetch {
      message: e.to_string(),
    })
  }
}

/// Check that `value` is an array of objects, each carrying the required
/// keys. Fails on the first offending element; no partial results.
fn validate_projects(value: &Value) -> std::result::Result<(), ValidationError> {
  let items = value.as_array().ok_or(ValidationError::NotAnArray)?;

  for (index, item) in items.iter().enumerate() {
    let object = item.as_object().ok_or(ValidationError::NotAnObject(index))?;

    let missing: Vec<String> = REQUIRED_KEYS
      .iter()
      .filter(|key| !object.contains_key(**key))
      .map(|key| (*key).to_owned())
      .collect();

    if !missing.is_empty() {
      return Err(ValidationError::MissingKeys { index, keys: missing });
    }
  }

  Ok(())
}
