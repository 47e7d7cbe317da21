//! Settings types for the storefront content API.
//!
//! The connection descriptor mirrors the proxy layout of the hosting
//! platform: requests to the content API leave through
//! `{app_origin}{proxy_path}` and are forwarded to the headless CMS. The
//! parameters identify the content space, environment and delivery-API token.
//!
//! Settings are read once at startup and never change afterwards; see
//! [`crate::global`] for the process-wide holder.

use serde::Deserialize;
use thiserror::Error;

use crate::env::{Env, EnvError};

/// Prefix applied to all settings environment variables.
pub const ENV_PREFIX: &str = "STOREFRONT_";

/// Errors produced while building or accessing settings.
#[derive(Debug, Error)]
pub enum SettingsError {
	/// The settings holder has not been initialized yet.
	#[error("settings not initialized: call init_settings() first")]
	Uninitialized,

	/// The settings holder was already initialized.
	#[error("settings already initialized")]
	AlreadyInitialized,

	/// The application origin is not a valid absolute URL.
	#[error("invalid application origin {origin:?}: {source}")]
	InvalidOrigin {
		/// The rejected origin string.
		origin: String,
		/// The underlying parse error.
		source: url::ParseError,
	},

	/// An environment variable was missing or malformed.
	#[error(transparent)]
	Env(#[from] EnvError),
}

/// Identification and credentials for the content delivery API.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ContentApiParameters {
	/// API version segment of the endpoint path (e.g., "v1").
	pub content_version: String,
	/// Content space identifier.
	pub space_id: String,
	/// Content environment identifier (e.g., "master").
	pub environment_id: String,
	/// Content delivery API bearer token.
	pub cda_token: String,
}

impl ContentApiParameters {
	/// Create parameters for a space/environment pair
	pub fn new(
		content_version: impl Into<String>,
		space_id: impl Into<String>,
		environment_id: impl Into<String>,
		cda_token: impl Into<String>,
	) -> Self {
		Self {
			content_version: content_version.into(),
			space_id: space_id.into(),
			environment_id: environment_id.into(),
			cda_token: cda_token.into(),
		}
	}
}

/// Content API connection settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ContentApiSettings {
	/// Path prefix of the content proxy on the application origin.
	pub proxy_path: String,
	/// Space, environment and credential parameters.
	pub parameters: ContentApiParameters,
}

impl ContentApiSettings {
	/// Create content API settings
	pub fn new(proxy_path: impl Into<String>, parameters: ContentApiParameters) -> Self {
		Self {
			proxy_path: proxy_path.into(),
			parameters,
		}
	}
}

/// Top-level storefront settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Settings {
	/// The application's own origin URL (scheme + host + optional port).
	pub app_origin: String,
	/// Content API connection settings.
	pub content_api: ContentApiSettings,
}

impl Settings {
	/// Create settings from an origin and content API settings.
	///
	/// # Errors
	///
	/// Returns [`SettingsError::InvalidOrigin`] if `app_origin` is not an
	/// absolute URL.
	pub fn new(
		app_origin: impl Into<String>,
		content_api: ContentApiSettings,
	) -> Result<Self, SettingsError> {
		let app_origin = app_origin.into();
		validate_origin(&app_origin)?;
		Ok(Self {
			app_origin,
			content_api,
		})
	}

	/// Load settings from `STOREFRONT_`-prefixed environment variables.
	///
	/// Required variables: `STOREFRONT_APP_ORIGIN`,
	/// `STOREFRONT_CONTENT_SPACE_ID`, `STOREFRONT_CONTENT_CDA_TOKEN`.
	/// Optional with defaults: `STOREFRONT_CONTENT_PROXY_PATH`
	/// (`/proxy/cms`), `STOREFRONT_CONTENT_VERSION` (`v1`),
	/// `STOREFRONT_CONTENT_ENVIRONMENT_ID` (`master`).
	///
	/// Use [`Settings::from_dotenv`] if `.env` loading is wanted first.
	///
	/// # Errors
	///
	/// Returns [`SettingsError::Env`] for missing required variables and
	/// [`SettingsError::InvalidOrigin`] for a malformed origin.
	pub fn from_env() -> Result<Self, SettingsError> {
		let env = Env::new().with_prefix(ENV_PREFIX);

		let app_origin = env.str("APP_ORIGIN")?;
		let proxy_path = env.str_with_default("CONTENT_PROXY_PATH", Some("/proxy/cms"))?;
		let parameters = ContentApiParameters::new(
			env.str_with_default("CONTENT_VERSION", Some("v1"))?,
			env.str("CONTENT_SPACE_ID")?,
			env.str_with_default("CONTENT_ENVIRONMENT_ID", Some("master"))?,
			env.str("CONTENT_CDA_TOKEN")?,
		);

		Self::new(app_origin, ContentApiSettings::new(proxy_path, parameters))
	}

	/// Like [`Settings::from_env`], loading a `.env` file first if one
	/// exists. A missing `.env` file is not an error.
	pub fn from_dotenv() -> Result<Self, SettingsError> {
		dotenv::dotenv().ok();
		Self::from_env()
	}
}

fn validate_origin(origin: &str) -> Result<(), SettingsError> {
	url::Url::parse(origin).map_err(|source| SettingsError::InvalidOrigin {
		origin: origin.to_string(),
		source,
	})?;
	Ok(())
}
