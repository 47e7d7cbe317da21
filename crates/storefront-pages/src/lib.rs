//! # Storefront Pages - Server-Effects Bridge
//!
//! Makes a value computed once during server rendering available unchanged
//! to the same logical component tree during client hydration.
//!
//! During SSR the framework's effect-execution phase records data-fetching
//! results under registered effect names. The server serializes that state
//! into the page (`window.__PRELOADED_STATE__`); the client reads it back
//! before the first interactive render. The bridge guarantees descendants
//! observe an identically-shaped value on both sides, so hydration never
//! mismatches.
//!
//! The execution environment is an explicit parameter ([`RenderEnv`]) rather
//! than an ambient global check, so either branch can be driven
//! deterministically in tests.
//!
//! ## Module Organization
//!
//! - [`effects`]: The effects value types ([`ServerEffects`], [`EffectRequest`])
//! - [`registry`]: Named effect contexts and the scoped provide/consume pair
//! - [`preloaded`]: The client-side preloaded-state bucket
//! - [`provider`]: The SCAPI provider and its consumption hook
//!
//! ## Example
//!
//! ```ignore
//! use storefront_pages::{RenderEnv, ScapiProvider, use_scapi_effects};
//!
//! // Server render: whatever the effect phase recorded (or the default)
//! // is visible to descendants, and children render unchanged.
//! let html = ScapiProvider::render(RenderEnv::Server, || {
//!     let effects = use_scapi_effects();
//!     format!("<div data-effects=\"{}\">...</div>", effects.name)
//! });
//! ```

pub mod effects;
pub mod preloaded;
pub mod provider;
pub mod registry;

pub use effects::{EffectRequest, SCAPI_HOOKS, ServerEffects};
pub use preloaded::{PreloadedState, init_preloaded_state, preloaded_state};
pub use provider::{RenderEnv, ScapiProvider, use_scapi_effects};
pub use registry::{ServerEffectContext, all_contexts, is_registered, use_server_effect};
