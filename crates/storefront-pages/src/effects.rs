//! The server-effects value.
//!
//! One value per registered effect name: a data map keyed by request, plus
//! the ordered request descriptors recorded while the server rendered. The
//! value is serialized into the page and read back verbatim on the client,
//! so it must round-trip through JSON unchanged.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The one effect name the SCAPI bridge registers.
pub const SCAPI_HOOKS: &str = "scapiHooks";

/// A request descriptor recorded during the server effect-execution phase.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EffectRequest {
	/// The resource the request targets.
	pub resource: String,
	/// Request parameters, opaque to the bridge.
	#[serde(default)]
	pub params: Value,
}

impl EffectRequest {
	/// Create a request descriptor
	pub fn new(resource: impl Into<String>, params: Value) -> Self {
		Self {
			resource: resource.into(),
			params,
		}
	}
}

/// The value threaded from server rendering into client hydration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerEffects {
	/// The registered effect name this value belongs to.
	pub name: String,
	/// Fetched data keyed by request identity.
	#[serde(default)]
	pub data: HashMap<String, Value>,
	/// Requests in the order the server issued them.
	#[serde(default)]
	pub requests: Vec<EffectRequest>,
}

impl ServerEffects {
	/// The default value for a name: empty data, no requests.
	pub fn named(name: impl Into<String>) -> Self {
		Self {
			name: name.into(),
			data: HashMap::new(),
			requests: Vec::new(),
		}
	}

	/// Adds a data entry; values that fail to serialize are dropped.
	pub fn insert_data(&mut self, key: impl Into<String>, value: impl Serialize) {
		if let Ok(json) = serde_json::to_value(value) {
			self.data.insert(key.into(), json);
		}
	}

	/// Appends a request descriptor, preserving issue order.
	pub fn push_request(&mut self, request: EffectRequest) {
		self.requests.push(request);
	}

	/// True when nothing was recorded.
	pub fn is_empty(&self) -> bool {
		self.data.is_empty() && self.requests.is_empty()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use serde_json::json;

	#[test]
	fn test_named_default_shape() {
		let effects = ServerEffects::named(SCAPI_HOOKS);
		assert_eq!(effects.name, "scapiHooks");
		assert!(effects.is_empty());
		assert_eq!(
			serde_json::to_value(&effects).unwrap(),
			json!({"name": "scapiHooks", "data": {}, "requests": []})
		);
	}

	#[test]
	fn test_insert_data_and_push_request() {
		let mut effects = ServerEffects::named(SCAPI_HOOKS);
		effects.insert_data("product-1", json!({"id": "product-1"}));
		effects.push_request(EffectRequest::new("products", json!({"id": "product-1"})));
		assert!(!effects.is_empty());
		assert_eq!(effects.requests.len(), 1);
		assert_eq!(effects.requests[0].resource, "products");
	}

	#[test]
	fn test_json_round_trip_is_identity() {
		let mut effects = ServerEffects::named(SCAPI_HOOKS);
		effects.insert_data("basket", json!({"items": [1, 2]}));
		effects.push_request(EffectRequest::new("baskets", Value::Null));

		let json = serde_json::to_string(&effects).unwrap();
		let back: ServerEffects = serde_json::from_str(&json).unwrap();
		assert_eq!(back, effects);
	}

	#[test]
	fn test_missing_fields_default() {
		let effects: ServerEffects = serde_json::from_str(r#"{"name": "scapiHooks"}"#).unwrap();
		assert!(effects.is_empty());
	}
}
