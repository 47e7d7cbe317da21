//! GraphQL-over-HTTP envelope types.
//!
//! The content API speaks the standard GraphQL response envelope
//! `{data, errors}` over HTTP POST. Query documents are opaque strings here:
//! no local validation is performed, malformed documents come back as
//! server-side errors.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A GraphQL request body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GraphqlRequest {
	/// The query document.
	pub query: String,
	/// Optional operation name for multi-operation documents.
	#[serde(rename = "operationName", skip_serializing_if = "Option::is_none")]
	pub operation_name: Option<String>,
	/// Variable bindings for the query.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub variables: Option<Value>,
}

impl GraphqlRequest {
	/// Create a request for a query document with variable bindings
	pub fn new(query: impl Into<String>, variables: Option<Value>) -> Self {
		Self {
			query: query.into(),
			operation_name: None,
			variables,
		}
	}
}

/// Standard GraphQL response envelope.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GraphqlResponse {
	/// Result data, `null`/absent when the operation produced nothing.
	#[serde(default)]
	pub data: Option<Value>,
	/// Errors reported alongside (or instead of) the data.
	#[serde(default)]
	pub errors: Vec<GraphqlError>,
}

/// A single error entry from a GraphQL response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GraphqlError {
	/// Human-readable error description.
	pub message: String,
	/// Source locations within the query document, if reported.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub locations: Option<Value>,
	/// Response path the error applies to, if reported.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub path: Option<Value>,
	/// Server-specific error extensions.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub extensions: Option<Value>,
}
