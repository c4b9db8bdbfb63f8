//! Middleware options.

use crate::config::error::ConfigError;
use serde::{Deserialize, Serialize};

/// Options accepted by the mock middleware constructor.
///
/// Every field has a default, so a partial options file only overrides what it names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MockOptions {
    /// URL prefix of the registration endpoint
    pub mock_prefix: String,
    /// URL prefix of the reset endpoint (`<prefix>/<id>` resets one queue)
    pub reset_prefix: String,
    /// URL prefix of the listing endpoint
    pub list_prefix: String,
    /// Request method that triggers registration
    pub registration_method: String,
    /// Header name prefix copied into the mocked response headers
    pub header_prefix: String,
    /// Method mocked when `mock-method` is absent
    pub default_method: String,
    /// Status used when `mock-response` is absent or invalid
    pub default_status: u16,
    /// Use count applied when `mock-limit` is absent or invalid
    pub default_limit: u32,
    /// Largest registration body accepted, in bytes
    pub max_body_bytes: usize,
}

impl Default for MockOptions {
    fn default() -> Self {
        Self {
            mock_prefix: "/mock".into(),
            reset_prefix: "/mock-reset".into(),
            list_prefix: "/mock-list".into(),
            registration_method: "POST".into(),
            header_prefix: "mock-header-".into(),
            default_method: "GET".into(),
            default_status: 200,
            default_limit: 1,
            max_body_bytes: 2 * 1024 * 1024,
        }
    }
}

impl MockOptions {
    /// Reject values that could never produce a valid response.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(100..=999).contains(&self.default_status) {
            return Err(ConfigError::InvalidOption {
                name: "defaultStatus",
                reason: format!("{} is not an HTTP status", self.default_status),
            });
        }
        Ok(())
    }
}
