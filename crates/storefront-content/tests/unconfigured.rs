//! Behavior before settings initialization.
//!
//! Own test binary: no test here (or in any module it links) may install the
//! process-wide settings.

use serde_json::Value;

use storefront_content::{ContentError, client};

#[test]
fn client_without_settings_reports_settings_error() {
	let err = client().unwrap_err();
	assert!(matches!(err, ContentError::Settings(_)));
}

#[tokio::test]
async fn free_query_without_settings_returns_none() {
	let result = storefront_content::query("{ page { title } }", Value::Null).await;
	assert!(result.is_none());
}
