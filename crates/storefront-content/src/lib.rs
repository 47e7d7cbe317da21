//! # Storefront Content API Client
//!
//! A thin, authenticated GraphQL client for the storefront's headless
//! content-management API.
//!
//! The storefront reaches the CMS through a proxy mounted on its own origin;
//! this crate builds the proxied endpoint URL from the process-wide settings,
//! attaches the content-delivery bearer token to every request, and exposes a
//! deliberately small query surface:
//!
//! - [`ContentClient::query`] returns the response `data` payload or `None`.
//!   Transport failures, GraphQL-level errors and undecodable payloads all
//!   collapse to `None`; callers treat `None` as "no usable data" and render
//!   a fallback instead of aborting.
//! - [`ContentClient::execute`] is the tagged-result path underneath, for
//!   callers that need to distinguish failure causes.
//!
//! One client exists per process ([`client`]); it is constructed lazily from
//! the global settings on first use and never invalidated. Response caching
//! is delegated wholesale to an in-memory cache (`moka`); there is no custom
//! eviction policy here.
//!
//! ## Module Organization
//!
//! - [`graphql`]: GraphQL-over-HTTP request/response envelope types
//! - [`error`]: Error taxonomy for the fallible execution path
//! - [`client`]: The client itself plus the process-wide singleton

pub mod client;
pub mod error;
pub mod graphql;

pub use client::{ContentClient, client, query, query_as};
pub use error::{ContentError, ContentResult};
pub use graphql::{GraphqlError, GraphqlRequest, GraphqlResponse};
