//! # Storefront
//!
//! Integration crates for a headless storefront web application.
//!
//! Two independent pieces of glue, plus the settings layer they share:
//!
//! - [`content`]: an authenticated GraphQL client for the headless
//!   content-management API. One client per process, built lazily from the
//!   global settings; its `query` surface collapses every failure mode to
//!   `None` so rendering degrades instead of aborting.
//! - [`pages`]: the server-effects bridge. Data fetched during server-side
//!   rendering is serialized into the page and surfaced identically during
//!   client hydration, so the same logical component tree observes the same
//!   value on both sides.
//! - [`conf`]: process-wide connection settings, read once at startup and
//!   immutable for the process lifetime.
//!
//! No data flows between [`content`] and [`pages`].
//!
//! ## Quick Start
//!
//! ```ignore
//! use serde_json::json;
//! use storefront::conf::{Settings, init_settings};
//!
//! #[tokio::main]
//! async fn main() {
//!     dotenv::dotenv().ok();
//!     init_settings(Settings::from_env().expect("settings")).expect("init once");
//!
//!     // None on any failure: transport, GraphQL errors, undecodable data.
//!     let page = storefront::content::query(
//!         "query Page($slug: String!) { page(slug: $slug) { title } }",
//!         json!({"slug": "home"}),
//!     )
//!     .await;
//!
//!     if let Some(data) = page {
//!         println!("{}", data["page"]["title"]);
//!     }
//! }
//! ```

pub mod conf;
pub mod content;
pub mod pages;

// Most-used types at the crate root for convenience
pub use storefront_conf::{Settings, init_settings, settings};
pub use storefront_content::{ContentClient, client, query, query_as};
pub use storefront_pages::{RenderEnv, ScapiProvider, ServerEffects, use_scapi_effects};
