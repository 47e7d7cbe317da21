//! The preloaded-state bucket.
//!
//! During SSR the server serializes every recorded effect value into the
//! page under `window.__PRELOADED_STATE__`, keyed by effect name. On the
//! client the hydration entry point parses that object back and installs it
//! process-wide before the first interactive render.

use std::collections::HashMap;
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The global JavaScript variable name for the preloaded state.
pub const PRELOADED_STATE_VAR: &str = "__PRELOADED_STATE__";

/// Serialized effect values keyed by effect name.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PreloadedState {
	entries: HashMap<String, Value>,
}

impl PreloadedState {
	/// Creates an empty bucket.
	pub fn new() -> Self {
		Self::default()
	}

	/// Adds an entry under an effect name; values that fail to serialize
	/// are dropped.
	pub fn insert(&mut self, name: impl Into<String>, value: impl Serialize) {
		if let Ok(json) = serde_json::to_value(value) {
			self.entries.insert(name.into(), json);
		}
	}

	/// Gets the raw entry for an effect name.
	pub fn get(&self, name: &str) -> Option<&Value> {
		self.entries.get(name)
	}

	/// Checks if the bucket is empty.
	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	/// Serializes the bucket to JSON.
	pub fn to_json(&self) -> Result<String, serde_json::Error> {
		serde_json::to_string(self)
	}

	/// Generates the `<script>` tag the server embeds into the page.
	pub fn to_script_tag(&self) -> String {
		let json = self.to_json().unwrap_or_else(|_| "{}".to_string());
		format!(
			r#"<script id="preloaded-state">window.{} = {};</script>"#,
			PRELOADED_STATE_VAR, json
		)
	}

	/// Deserializes a bucket from JSON.
	pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
		serde_json::from_str(json)
	}
}

/// The client-side bucket, installed once during hydration.
static PRELOADED: OnceLock<PreloadedState> = OnceLock::new();

/// Installs the hydrated preloaded state.
///
/// Called once by the client entry point before the first render.
///
/// # Errors
///
/// Returns `Err` with the rejected state if one was already installed.
pub fn init_preloaded_state(state: PreloadedState) -> Result<(), PreloadedState> {
	PRELOADED.set(state)
}

/// The installed preloaded state, or `None` before hydration.
pub fn preloaded_state() -> Option<&'static PreloadedState> {
	PRELOADED.get()
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::effects::{SCAPI_HOOKS, ServerEffects};
	use serde_json::json;

	#[test]
	fn test_new_is_empty() {
		assert!(PreloadedState::new().is_empty());
	}

	#[test]
	fn test_insert_and_get() {
		let mut state = PreloadedState::new();
		state.insert(SCAPI_HOOKS, ServerEffects::named(SCAPI_HOOKS));
		assert_eq!(
			state.get(SCAPI_HOOKS),
			Some(&json!({"name": "scapiHooks", "data": {}, "requests": []}))
		);
	}

	#[test]
	fn test_script_tag_embeds_global_var() {
		let mut state = PreloadedState::new();
		state.insert(SCAPI_HOOKS, ServerEffects::named(SCAPI_HOOKS));
		let script = state.to_script_tag();
		assert!(script.starts_with("<script"));
		assert!(script.contains("window.__PRELOADED_STATE__ = {"));
		assert!(script.contains("\"scapiHooks\""));
		assert!(script.ends_with("</script>"));
	}

	#[test]
	fn test_json_round_trip() {
		let mut state = PreloadedState::new();
		state.insert(SCAPI_HOOKS, json!({"name": "scapiHooks", "data": {"k": 1}, "requests": []}));
		let back = PreloadedState::from_json(&state.to_json().unwrap()).unwrap();
		assert_eq!(back, state);
	}

	#[test]
	fn test_serializes_as_flat_object() {
		let mut state = PreloadedState::new();
		state.insert("other", json!(1));
		// Keyed directly by effect name, no wrapper field.
		assert_eq!(serde_json::to_value(&state).unwrap(), json!({"other": 1}));
	}
}
