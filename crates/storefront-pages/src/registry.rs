//! Named effect contexts.
//!
//! The rendering framework's effect-execution phase records one
//! [`ServerEffects`] value per registered name; providers later read those
//! values back by name. Registration is process-wide and happens at most
//! once per name; recording replaces the current value.
//!
//! Providing a value to descendants is scoped and thread-local: a provider
//! pushes the value for the duration of its children closure, and
//! [`use_server_effect`] reads the innermost value provided under the
//! requested name.

use std::cell::RefCell;
use std::collections::{HashMap, HashSet};
use std::sync::{Mutex, OnceLock};

use crate::effects::ServerEffects;

/// Names registered in this process.
static REGISTERED: OnceLock<Mutex<HashSet<String>>> = OnceLock::new();

fn registered() -> &'static Mutex<HashSet<String>> {
	REGISTERED.get_or_init(|| Mutex::new(HashSet::new()))
}

/// Recorded effect values by registered name.
static RECORDED: OnceLock<Mutex<HashMap<String, ServerEffects>>> = OnceLock::new();

fn recorded() -> &'static Mutex<HashMap<String, ServerEffects>> {
	RECORDED.get_or_init(|| Mutex::new(HashMap::new()))
}

thread_local! {
	/// Innermost-last stack of (name, value) pairs provided on this thread.
	static PROVIDED: RefCell<Vec<(String, ServerEffects)>> = const { RefCell::new(Vec::new()) };
}

/// Handle to a registered named effect context.
#[derive(Debug, Clone)]
pub struct ServerEffectContext {
	name: String,
}

impl ServerEffectContext {
	/// Registers a named context, or returns a handle to the existing one.
	/// Registration happens at most once per name for the process lifetime.
	pub fn register(name: impl Into<String>) -> Self {
		let name = name.into();
		registered()
			.lock()
			.expect("effect registry lock poisoned")
			.insert(name.clone());
		Self { name }
	}

	/// The registered name.
	pub fn name(&self) -> &str {
		&self.name
	}

	/// Records the value computed for this context, replacing any previous
	/// value. Called by the effect-execution phase during server rendering.
	pub fn record(&self, effects: ServerEffects) {
		recorded()
			.lock()
			.expect("effect registry lock poisoned")
			.insert(self.name.clone(), effects);
	}

	/// The currently recorded value for this context, if any.
	pub fn current(&self) -> Option<ServerEffects> {
		recorded()
			.lock()
			.expect("effect registry lock poisoned")
			.get(&self.name)
			.cloned()
	}

	/// Provides `value` to `children` and returns the children output
	/// unchanged. The value is visible through [`use_server_effect`] under
	/// this context's name for the duration of the closure only, also when
	/// it unwinds.
	pub fn provide<R>(&self, value: ServerEffects, children: impl FnOnce() -> R) -> R {
		PROVIDED.with(|stack| stack.borrow_mut().push((self.name.clone(), value)));
		let _guard = ProvideGuard;
		children()
	}
}

struct ProvideGuard;

impl Drop for ProvideGuard {
	fn drop(&mut self) {
		PROVIDED.with(|stack| {
			stack.borrow_mut().pop();
		});
	}
}

/// Whether a context name has been registered in this process.
pub fn is_registered(name: &str) -> bool {
	registered()
		.lock()
		.expect("effect registry lock poisoned")
		.contains(name)
}

/// Snapshot of all currently recorded effect values by name.
pub fn all_contexts() -> HashMap<String, ServerEffects> {
	recorded()
		.lock()
		.expect("effect registry lock poisoned")
		.clone()
}

/// The innermost effect value provided under `name` on this thread, if any.
/// Values provided by contexts registered under other names are invisible.
pub fn use_server_effect(name: &str) -> Option<ServerEffects> {
	PROVIDED.with(|stack| {
		stack
			.borrow()
			.iter()
			.rev()
			.find(|(provided, _)| provided == name)
			.map(|(_, value)| value.clone())
	})
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::effects::EffectRequest;
	use serde_json::json;
	use serial_test::serial;

	#[test]
	fn test_provide_scopes_value_to_children() {
		let context = ServerEffectContext::register("scoped");
		assert!(use_server_effect("scoped").is_none());

		let mut value = ServerEffects::named("scoped");
		value.insert_data("key", json!(1));

		let observed = context.provide(value.clone(), || use_server_effect("scoped"));
		assert_eq!(observed, Some(value));

		// Out of scope again after the closure returns.
		assert!(use_server_effect("scoped").is_none());
	}

	#[test]
	fn test_provide_nests_innermost_wins() {
		let context = ServerEffectContext::register("nested");
		let outer = ServerEffects::named("outer");
		let inner = ServerEffects::named("inner");

		let observed = context.provide(outer.clone(), || {
			let within = context.provide(inner.clone(), || use_server_effect("nested"));
			(within, use_server_effect("nested"))
		});
		assert_eq!(observed.0, Some(inner));
		assert_eq!(observed.1, Some(outer));
	}

	#[test]
	fn test_hook_only_sees_its_own_context() {
		let products = ServerEffectContext::register("products-hook");
		let baskets = ServerEffectContext::register("baskets-hook");
		let products_value = ServerEffects::named("products-hook");
		let mut baskets_value = ServerEffects::named("baskets-hook");
		baskets_value.insert_data("basket", json!({"items": 2}));

		// The baskets provider is innermost, but each hook resolves the value
		// its own context provided.
		let observed = products.provide(products_value.clone(), || {
			baskets.provide(baskets_value.clone(), || {
				(
					use_server_effect("products-hook"),
					use_server_effect("baskets-hook"),
				)
			})
		});
		assert_eq!(observed.0, Some(products_value));
		assert_eq!(observed.1, Some(baskets_value));

		// A name nothing provided resolves to nothing, even inside providers.
		let missing = products.provide(ServerEffects::named("products-hook"), || {
			use_server_effect("orders-hook")
		});
		assert!(missing.is_none());
	}

	#[test]
	fn test_provide_pops_on_unwind() {
		let context = ServerEffectContext::register("unwind");
		let result = std::panic::catch_unwind(|| {
			context.provide(ServerEffects::named("unwind"), || panic!("render failed"));
		});
		assert!(result.is_err());
		assert!(use_server_effect("unwind").is_none());
	}

	#[test]
	fn test_register_is_idempotent_and_process_wide() {
		assert!(!is_registered("registration-test"));

		let first = ServerEffectContext::register("registration-test");
		let second = ServerEffectContext::register("registration-test");
		assert!(is_registered("registration-test"));
		assert_eq!(first.name(), second.name());

		// One registry entry regardless of how many handles exist.
		let count = registered()
			.lock()
			.unwrap()
			.iter()
			.filter(|name| *name == "registration-test")
			.count();
		assert_eq!(count, 1);
	}

	#[test]
	#[serial]
	fn test_record_then_current_and_all_contexts() {
		let context = ServerEffectContext::register("recorded-test");
		assert!(context.current().is_none());

		let mut value = ServerEffects::named("recorded-test");
		value.push_request(EffectRequest::new("products", json!({"id": "p-1"})));
		context.record(value.clone());

		assert_eq!(context.current(), Some(value.clone()));
		assert_eq!(all_contexts().get("recorded-test"), Some(&value));

		// A second handle to the same name sees the same value.
		let again = ServerEffectContext::register("recorded-test");
		assert_eq!(again.current(), Some(value));
	}
}
