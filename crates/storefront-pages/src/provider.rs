//! The SCAPI provider and its consumption hook.
//!
//! The provider is a read-and-forward shim: it resolves the current effects
//! value for the execution environment, provides it to its children, and
//! returns the children output unchanged. Absence of a value is never an
//! error; both branches fall back to the default
//! `{name: "scapiHooks", data: {}, requests: []}`.

use std::sync::OnceLock;

use crate::effects::{SCAPI_HOOKS, ServerEffects};
use crate::preloaded::preloaded_state;
use crate::registry::{ServerEffectContext, all_contexts};

/// Where the current render is executing.
///
/// Passed explicitly so tests can drive either branch deterministically; no
/// ambient environment probing happens in the bridge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderEnv {
	/// Server-side render: effect values come from the registry.
	Server,
	/// Client hydration: effect values come from the preloaded state.
	Client,
}

/// The one SCAPI effect context, registered on first use.
fn scapi_context() -> &'static ServerEffectContext {
	static CONTEXT: OnceLock<ServerEffectContext> = OnceLock::new();
	CONTEXT.get_or_init(|| ServerEffectContext::register(SCAPI_HOOKS))
}

/// Provider surfacing the SCAPI effects value identically on server and
/// client renders.
pub struct ScapiProvider;

impl ScapiProvider {
	/// Resolves the effects value for the given environment.
	///
	/// Server: the value recorded under `"scapiHooks"` during the effect
	/// phase. Client: the value under `"scapiHooks"` in the hydrated
	/// preloaded state, unmodified. Either way an absent value becomes the
	/// default.
	pub fn resolve(env: RenderEnv) -> ServerEffects {
		match env {
			RenderEnv::Server => all_contexts()
				.remove(SCAPI_HOOKS)
				.unwrap_or_else(|| ServerEffects::named(SCAPI_HOOKS)),
			RenderEnv::Client => preloaded_state()
				.and_then(|state| state.get(SCAPI_HOOKS))
				.and_then(|value| match serde_json::from_value(value.clone()) {
					Ok(effects) => Some(effects),
					Err(error) => {
						tracing::debug!(%error, "preloaded scapiHooks entry is malformed");
						None
					}
				})
				.unwrap_or_else(|| ServerEffects::named(SCAPI_HOOKS)),
		}
	}

	/// Resolves the effects value, provides it to `children`, and returns
	/// the children output unchanged. No other side effect.
	pub fn render<R>(env: RenderEnv, children: impl FnOnce() -> R) -> R {
		scapi_context().provide(Self::resolve(env), children)
	}
}

/// The paired consumption hook: the SCAPI effects value provided by the
/// nearest enclosing [`ScapiProvider`], or the default outside one. Values
/// provided under other context names never reach this hook.
pub fn use_scapi_effects() -> ServerEffects {
	crate::registry::use_server_effect(SCAPI_HOOKS)
		.unwrap_or_else(|| ServerEffects::named(SCAPI_HOOKS))
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_render_returns_children_output_unchanged() {
		let output = ScapiProvider::render(RenderEnv::Server, || "child markup");
		assert_eq!(output, "child markup");
	}

	#[test]
	fn test_hook_outside_provider_yields_default() {
		assert_eq!(use_scapi_effects(), ServerEffects::named(SCAPI_HOOKS));
	}

	#[test]
	fn test_hook_inside_provider_sees_resolved_value() {
		let observed = ScapiProvider::render(RenderEnv::Server, use_scapi_effects);
		assert_eq!(observed.name, SCAPI_HOOKS);
	}

	#[test]
	fn test_render_registers_the_scapi_context() {
		ScapiProvider::render(RenderEnv::Server, || ());
		assert!(crate::registry::is_registered(SCAPI_HOOKS));
	}

	#[test]
	fn test_hook_ignores_foreign_context_values() {
		let foreign = ServerEffectContext::register("checkout-hooks");
		let mut foreign_value = ServerEffects::named("checkout-hooks");
		foreign_value.insert_data("step", serde_json::json!("payment"));

		// The foreign provider is the innermost one; the SCAPI hook must not
		// pick its value up.
		let observed = foreign.provide(foreign_value, use_scapi_effects);
		assert_eq!(observed, ServerEffects::named(SCAPI_HOOKS));
	}
}
