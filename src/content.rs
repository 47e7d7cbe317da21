//! Content API client
//!
//! Authenticated GraphQL access to the headless CMS through the storefront's
//! proxy. One lazily-built client per process; the `query` surface never
//! raises, it collapses all failures to `None`.

pub use storefront_content::*;
