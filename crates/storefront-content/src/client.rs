//! The content API client and its process-wide singleton.
//!
//! One [`ContentClient`] serves the whole process. It is built lazily from
//! the global settings on the first call to [`client`] and never recreated:
//! settings changes after that point have no effect. The HTTP transport is
//! `reqwest`; successful responses are kept in an in-memory `moka` cache
//! keyed by the query document and its variables.

use std::sync::OnceLock;
use std::time::Duration;

use moka::future::Cache;
use serde::de::DeserializeOwned;
use serde_json::Value;

use storefront_conf::{Settings, settings};

use crate::error::{ContentError, ContentResult};
use crate::graphql::{GraphqlRequest, GraphqlResponse};

/// Request timeout applied to every content API call.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Maximum number of cached query results.
const CACHE_CAPACITY: u64 = 1024;

/// How long a cached query result stays fresh.
const CACHE_TTL: Duration = Duration::from_secs(60);

/// Authenticated GraphQL client for the headless content API.
#[derive(Debug)]
pub struct ContentClient {
	endpoint: String,
	token: String,
	http: reqwest::Client,
	cache: Cache<String, Value>,
	ssr_mode: bool,
}

impl ContentClient {
	/// Builds a client from connection settings.
	///
	/// The endpoint URL is
	/// `{app_origin}{proxy_path}/content/{content_version}/spaces/{space_id}/environments/{environment_id}`.
	///
	/// # Errors
	///
	/// Returns [`ContentError::Transport`] if the HTTP client cannot be
	/// constructed.
	pub fn from_settings(settings: &Settings) -> ContentResult<Self> {
		let http = reqwest::Client::builder()
			.timeout(REQUEST_TIMEOUT)
			.build()?;

		Ok(Self {
			endpoint: endpoint_url(settings),
			token: settings.content_api.parameters.cda_token.clone(),
			http,
			cache: Cache::builder()
				.max_capacity(CACHE_CAPACITY)
				.time_to_live(CACHE_TTL)
				.build(),
			ssr_mode: false,
		})
	}

	/// Enables or disables server-rendering mode.
	///
	/// In SSR mode cache reads are bypassed so every server render fetches
	/// fresh data; successful responses still populate the cache.
	pub fn with_ssr_mode(mut self, ssr_mode: bool) -> Self {
		self.ssr_mode = ssr_mode;
		self
	}

	/// The resolved endpoint URL this client posts to.
	pub fn endpoint(&self) -> &str {
		&self.endpoint
	}

	/// Executes a query and returns the `data` payload, with failure detail.
	///
	/// # Errors
	///
	/// - [`ContentError::Transport`] on network failure or a non-success
	///   HTTP status,
	/// - [`ContentError::Graphql`] when the envelope carries errors,
	/// - [`ContentError::MissingData`] when it carries neither data nor
	///   errors,
	/// - [`ContentError::Decode`] when the body is not a GraphQL envelope.
	pub async fn execute(&self, query: &str, variables: Value) -> ContentResult<Value> {
		let key = cache_key(query, &variables);
		if !self.ssr_mode {
			if let Some(hit) = self.cache.get(&key).await {
				return Ok(hit);
			}
		}

		let variables = if variables.is_null() {
			None
		} else {
			Some(variables)
		};
		let request = GraphqlRequest::new(query, variables);

		let response = self
			.http
			.post(&self.endpoint)
			.header(
				reqwest::header::AUTHORIZATION,
				format!("Bearer {}", self.token),
			)
			.json(&request)
			.send()
			.await?
			.error_for_status()?;

		let envelope: GraphqlResponse = serde_json::from_slice(&response.bytes().await?)?;

		if !envelope.errors.is_empty() {
			return Err(ContentError::Graphql {
				errors: envelope.errors,
			});
		}

		let data = match envelope.data {
			Some(data) if !data.is_null() => data,
			_ => return Err(ContentError::MissingData),
		};

		self.cache.insert(key, data.clone()).await;
		Ok(data)
	}

	/// Executes a query, collapsing every failure mode to `None`.
	///
	/// On success the returned value is an independently owned copy of the
	/// response `data`; mutating it does not affect the cache. Callers
	/// cannot distinguish "no data" from transport or GraphQL failure; use
	/// [`execute`](Self::execute) when the cause matters.
	///
	/// This method never panics and never propagates an error.
	pub async fn query(&self, query: &str, variables: Value) -> Option<Value> {
		match self.execute(query, variables).await {
			Ok(data) => Some(data),
			Err(error) => {
				tracing::debug!(%error, "content query failed");
				None
			}
		}
	}

	/// Typed variant of [`query`](Self::query).
	///
	/// The `data` payload is re-parsed into `T`; a payload that does not
	/// round-trip into `T` yields `None` like every other failure.
	pub async fn query_as<T: DeserializeOwned>(&self, query: &str, variables: Value) -> Option<T> {
		let data = self.query(query, variables).await?;
		match serde_json::from_value(data) {
			Ok(value) => Some(value),
			Err(error) => {
				tracing::debug!(%error, "content query data did not round-trip");
				None
			}
		}
	}
}

/// Builds the proxied content API endpoint URL from settings.
fn endpoint_url(settings: &Settings) -> String {
	let parameters = &settings.content_api.parameters;
	format!(
		"{}{}/content/{}/spaces/{}/environments/{}",
		settings.app_origin.trim_end_matches('/'),
		settings.content_api.proxy_path,
		parameters.content_version,
		parameters.space_id,
		parameters.environment_id,
	)
}

/// Cache key for a query/variables pair. The unit separator cannot occur in
/// a JSON-serialized variables object, so keys are unambiguous.
fn cache_key(query: &str, variables: &Value) -> String {
	format!("{}\u{1f}{}", query, variables)
}

/// Process-wide client, built at most once.
static CLIENT: OnceLock<ContentClient> = OnceLock::new();

/// Returns the process-wide content client, building it on first use.
///
/// The process is a server, so the singleton is built in SSR mode: every
/// server render fetches fresh data instead of reading a cached response
/// from an earlier render. Construct a client directly via
/// [`ContentClient::from_settings`] for a surface that reads the cache.
///
/// Subsequent calls return the exact same instance. There is no
/// invalidation path: settings changes after the first call have no effect.
///
/// # Errors
///
/// Returns [`ContentError::Settings`] when the global settings are not
/// initialized, or [`ContentError::Transport`] when the HTTP client cannot
/// be constructed.
pub fn client() -> ContentResult<&'static ContentClient> {
	if let Some(existing) = CLIENT.get() {
		return Ok(existing);
	}
	// A concurrent first call may also build; OnceLock keeps one instance.
	let built = ContentClient::from_settings(settings()?)?.with_ssr_mode(true);
	Ok(CLIENT.get_or_init(|| built))
}

/// Queries the process-wide client; `None` on any failure, including an
/// uninitialized client.
pub async fn query(query_document: &str, variables: Value) -> Option<Value> {
	match client() {
		Ok(client) => client.query(query_document, variables).await,
		Err(error) => {
			tracing::debug!(%error, "content client unavailable");
			None
		}
	}
}

/// Typed variant of [`query`].
pub async fn query_as<T: DeserializeOwned>(query_document: &str, variables: Value) -> Option<T> {
	match client() {
		Ok(client) => client.query_as(query_document, variables).await,
		Err(error) => {
			tracing::debug!(%error, "content client unavailable");
			None
		}
	}
}
