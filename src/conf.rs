//! Settings management
//!
//! Process-wide connection configuration for the storefront: the content
//! API descriptor (proxy path, space, environment, delivery token) and the
//! application's own origin. Loaded once, immutable afterwards.

pub use storefront_conf::*;
