//! # Storefront Configuration
//!
//! Settings management for the storefront integration crates.
//!
//! The storefront talks to a headless content-management API through a
//! proxied GraphQL endpoint. This crate owns the connection configuration for
//! that endpoint: it is read once at startup (typically from prefixed
//! environment variables), installed into a process-wide holder, and is
//! immutable for the process lifetime.
//!
//! ## Module Organization
//!
//! - [`env`]: Typed environment variable reader with prefix support
//! - [`settings`]: Settings types and environment loading
//! - [`global`]: Process-wide settings holder (init-once, no teardown)

pub mod env;
pub mod global;
pub mod settings;

pub use env::{Env, EnvError};
pub use global::{init_settings, settings};
pub use settings::{ContentApiParameters, ContentApiSettings, Settings, SettingsError};
