//! Error taxonomy for the content API client.
//!
//! Only the fallible [`execute`](crate::client::ContentClient::execute) path
//! surfaces these; the [`query`](crate::client::ContentClient::query) surface
//! collapses every variant to `None`.

use thiserror::Error;

use storefront_conf::SettingsError;

use crate::graphql::GraphqlError;

#[derive(Debug, Error)]
pub enum ContentError {
	/// Process-wide settings are missing or invalid.
	#[error(transparent)]
	Settings(#[from] SettingsError),

	/// Network or HTTP-level failure, including non-success status codes.
	#[error("transport error: {0}")]
	Transport(#[from] reqwest::Error),

	/// The response envelope carried GraphQL-level errors.
	#[error("query returned {} GraphQL error(s): {}", .errors.len(), first_message(.errors))]
	Graphql {
		/// The errors as reported by the server.
		errors: Vec<GraphqlError>,
	},

	/// The response carried neither data nor errors.
	#[error("response carried no data")]
	MissingData,

	/// The response body or data payload could not be decoded.
	#[error("failed to decode response data: {0}")]
	Decode(#[from] serde_json::Error),
}

impl ContentError {
	/// Returns true for network/HTTP transport failures
	pub fn is_transport(&self) -> bool {
		matches!(self, ContentError::Transport(_))
	}

	/// Returns true when the server reported GraphQL-level errors
	pub fn is_graphql(&self) -> bool {
		matches!(self, ContentError::Graphql { .. })
	}
}

fn first_message(errors: &[GraphqlError]) -> &str {
	errors.first().map(|e| e.message.as_str()).unwrap_or("")
}

pub type ContentResult<T> = Result<T, ContentError>;
