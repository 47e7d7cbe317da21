//! Process-wide settings holder.
//!
//! Settings are installed once at application startup and stay immutable for
//! the process lifetime. There is no teardown and no re-initialization path:
//! changes to the environment after the first [`init_settings`] call have no
//! effect on already-running code.

use std::sync::OnceLock;

use crate::settings::{Settings, SettingsError};

/// Global settings, set at most once per process.
static SETTINGS: OnceLock<Settings> = OnceLock::new();

/// Installs the process-wide settings.
///
/// This should be called once at application startup, before any consumer
/// asks for [`settings`].
///
/// # Errors
///
/// Returns [`SettingsError::AlreadyInitialized`] if settings were already
/// installed.
pub fn init_settings(settings: Settings) -> Result<(), SettingsError> {
	SETTINGS
		.set(settings)
		.map_err(|_| SettingsError::AlreadyInitialized)
}

/// Returns the process-wide settings.
///
/// # Errors
///
/// Returns [`SettingsError::Uninitialized`] if [`init_settings`] has not been
/// called yet.
pub fn settings() -> Result<&'static Settings, SettingsError> {
	SETTINGS.get().ok_or(SettingsError::Uninitialized)
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::settings::{ContentApiParameters, ContentApiSettings};
	use serial_test::serial;
	use std::sync::OnceLock;

	fn sample_settings() -> Settings {
		Settings::new(
			"http://localhost:3000",
			ContentApiSettings::new(
				"/proxy/cms",
				ContentApiParameters::new("v1", "space-1", "master", "token-1"),
			),
		)
		.unwrap()
	}

	// The process-global OnceLock persists across tests in the same binary,
	// so the init/get round trip is exercised against a local lock and the
	// global is only driven through one test.
	#[test]
	fn test_once_lock_set_then_get() {
		let lock: OnceLock<Settings> = OnceLock::new();
		assert!(lock.set(sample_settings()).is_ok());
		assert!(lock.set(sample_settings()).is_err());
		assert_eq!(lock.get().unwrap().content_api.parameters.space_id, "space-1");
	}

	#[test]
	#[serial]
	fn test_global_init_then_get_same_instance() {
		let _ = init_settings(sample_settings());
		let first = settings().unwrap();
		let second = settings().unwrap();
		assert!(std::ptr::eq(first, second));
		assert!(matches!(
			init_settings(sample_settings()),
			Err(SettingsError::AlreadyInitialized)
		));
	}
}
