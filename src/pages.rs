//! Server-effects bridge
//!
//! Threads data computed during server rendering into client hydration: a
//! named effect registry on the server, a preloaded-state bucket on the
//! client, and a provider/hook pair that surfaces the same value on both.

pub use storefront_pages::*;
