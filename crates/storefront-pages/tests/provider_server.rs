//! Server-branch provider behavior.
//!
//! Own test binary: the effect registry is process-wide, and the
//! client-branch test below relies on the preloaded state never being
//! installed in this process.

use serde_json::json;

use storefront_pages::{
	EffectRequest, RenderEnv, SCAPI_HOOKS, ScapiProvider, ServerEffectContext, ServerEffects,
	use_scapi_effects,
};

#[test]
fn server_branch_defaults_then_follows_recorded_value() {
	// Nothing recorded yet: descendants observe the default value.
	let observed = ScapiProvider::render(RenderEnv::Server, use_scapi_effects);
	assert_eq!(observed, ServerEffects::named(SCAPI_HOOKS));
	assert_eq!(
		serde_json::to_value(&observed).unwrap(),
		json!({"name": "scapiHooks", "data": {}, "requests": []})
	);

	// The effect phase records a value; the next render surfaces it.
	let mut recorded = ServerEffects::named(SCAPI_HOOKS);
	recorded.insert_data("product-1", json!({"id": "product-1", "price": 19.99}));
	recorded.push_request(EffectRequest::new("products", json!({"id": "product-1"})));
	ServerEffectContext::register(SCAPI_HOOKS).record(recorded.clone());

	let observed = ScapiProvider::render(RenderEnv::Server, use_scapi_effects);
	assert_eq!(observed, recorded);
}

#[test]
fn client_branch_without_preloaded_state_defaults() {
	// No hydration happened in this process.
	let observed = ScapiProvider::render(RenderEnv::Client, use_scapi_effects);
	assert_eq!(observed, ServerEffects::named(SCAPI_HOOKS));
}
