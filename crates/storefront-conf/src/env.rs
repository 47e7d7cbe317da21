//! Environment variable handling module
//!
//! Provides a small typed reader for environment variables with prefix
//! support. Settings loaders build on this instead of calling
//! [`std::env::var`] directly so that variable naming stays uniform and
//! missing/invalid variables produce structured errors.

use std::env;

use thiserror::Error;

/// Errors produced while reading environment variables.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EnvError {
	/// The variable was not set and no default was supplied.
	#[error("missing environment variable: {0}")]
	MissingVariable(String),

	/// The variable name contains characters outside `[A-Za-z0-9_]`.
	#[error("invalid environment variable name: {0}")]
	InvalidName(String),
}

/// Environment variable reader with prefix support
#[derive(Debug, Clone, Default)]
pub struct Env {
	/// Optional prefix for environment variables (e.g., "STOREFRONT_")
	pub prefix: Option<String>,
}

impl Env {
	/// Create a new reader without a prefix
	pub fn new() -> Self {
		Self { prefix: None }
	}

	/// Set a prefix for all environment variable lookups
	pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
		self.prefix = Some(prefix.into());
		self
	}

	/// Get the full key name with prefix
	fn get_key_name(&self, key: &str) -> String {
		match &self.prefix {
			Some(prefix) => format!("{}{}", prefix, key),
			None => key.to_string(),
		}
	}

	/// Read a string value from the environment
	pub fn str(&self, key: &str) -> Result<String, EnvError> {
		self.str_with_default(key, None)
	}

	/// Read a string value with a default
	pub fn str_with_default(&self, key: &str, default: Option<&str>) -> Result<String, EnvError> {
		let full_key = self.get_key_name(key);
		validate_env_var_name(&full_key)?;

		match env::var(&full_key) {
			Ok(val) => Ok(val),
			Err(_) => match default {
				Some(d) => Ok(d.to_string()),
				None => Err(EnvError::MissingVariable(full_key)),
			},
		}
	}
}

/// Validates that an environment variable name only uses `[A-Za-z0-9_]`.
fn validate_env_var_name(name: &str) -> Result<(), EnvError> {
	if name.is_empty()
		|| !name
			.chars()
			.all(|c| c.is_ascii_alphanumeric() || c == '_')
	{
		return Err(EnvError::InvalidName(name.to_string()));
	}
	Ok(())
}
