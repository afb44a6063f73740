//! Shared HTTP client and header utilities.

use std::sync::OnceLock;

use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};

use crate::error::StudioError;

/// Header the tunnelling proxy in front of the service requires to skip its interstitial page.
pub const BYPASS_HEADER: &str = "bypass-tunnel-reminder";

static SHARED_CLIENT: OnceLock<reqwest::Client> = OnceLock::new();

/// Get (or create) the shared reqwest client.
pub fn shared_client() -> &'static reqwest::Client {
    SHARED_CLIENT.get_or_init(|| {
        reqwest::Client::builder()
            .pool_max_idle_per_host(4)
            .build()
            .unwrap_or_else(|e| {
                tracing::warn!(error = %e, "Falling back to default HTTP client");
                reqwest::Client::new()
            })
    })
}

/// Build the JSON + tunnel-bypass headers every endpoint expects.
pub fn inference_headers(bypass_value: &str) -> Result<HeaderMap, StudioError> {
    let mut headers = HeaderMap::new();
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    let value = HeaderValue::from_str(bypass_value).map_err(|e| {
        StudioError::Configuration(format!("Invalid {BYPASS_HEADER} value: {e}"))
    })?;
    headers.insert(BYPASS_HEADER, value);
    Ok(headers)
}

/// Map a non-success status code to an error.
pub fn status_to_error(status: u16, body: &str) -> StudioError {
    StudioError::api(status, body.trim())
}
