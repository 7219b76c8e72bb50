// Copyright (c) 2025 SOLARE S.R.O.
//
// This file is part of zinvolt-rs.
//
// Licensed under the Creative Commons Attribution-NonCommercial-NoDerivatives 4.0 International
// (CC BY-NC-ND 4.0). You may use and share this file for non-commercial purposes only and you may not
// create derivatives. See <https://creativecommons.org/licenses/by-nc-nd/4.0/>.
//
// This software is provided "AS IS", without warranty of any kind.
//
// For commercial licensing, please contact: info@solare.cz

//! Client configuration

use crate::errors::{ZinvoltError, ZinvoltResult};
use serde::{Deserialize, Serialize};
use std::time::Duration;

fn default_10() -> u64 {
    10
}

#[derive(Clone, Serialize, Deserialize)]
pub struct ZinvoltConfig {
    /// Bearer token from an earlier login (optional)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,

    /// Per-request timeout (seconds)
    #[serde(default = "default_10")]
    pub request_timeout_secs: u64,

    /// Custom API base URL for testing (overrides the public Zinvolt endpoint)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_base_url: Option<String>,
}

impl Default for ZinvoltConfig {
    fn default() -> Self {
        Self {
            token: None,
            request_timeout_secs: 10,
            api_base_url: None,
        }
    }
}

impl std::fmt::Debug for ZinvoltConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ZinvoltConfig")
            .field("token", &self.token.as_ref().map(|_| "<redacted>"))
            .field("request_timeout_secs", &self.request_timeout_secs)
            .field("api_base_url", &self.api_base_url)
            .finish()
    }
}

impl ZinvoltConfig {
    pub fn from_json_str(json: &str) -> ZinvoltResult<Self> {
        let config: Self = serde_json::from_str(json)
            .map_err(|e| ZinvoltError::Config(format!("Failed to parse config: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> ZinvoltResult<()> {
        if self.request_timeout_secs == 0 {
            return Err(ZinvoltError::Config(
                "request_timeout_secs must be greater than 0".to_owned(),
            ));
        }

        if let Some(url) = &self.api_base_url
            && !(url.starts_with("http://") || url.starts_with("https://"))
        {
            return Err(ZinvoltError::Config(format!(
                "api_base_url must start with http:// or https://, got '{url}'"
            )));
        }

        Ok(())
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ZinvoltConfig::default();
        assert!(config.token.is_none());
        assert_eq!(config.request_timeout(), Duration::from_secs(10));
        assert!(config.api_base_url.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_json_uses_defaults() {
        let config = ZinvoltConfig::from_json_str("{}").unwrap();
        assert_eq!(config.request_timeout_secs, 10);
        assert!(config.token.is_none());
    }

    #[test]
    fn test_from_json_str() {
        let config = ZinvoltConfig::from_json_str(
            r#"{"token": "abc", "request_timeout_secs": 3, "api_base_url": "http://127.0.0.1:8080"}"#,
        )
        .unwrap();

        assert_eq!(config.token.as_deref(), Some("abc"));
        assert_eq!(config.request_timeout(), Duration::from_secs(3));
        assert_eq!(config.api_base_url.as_deref(), Some("http://127.0.0.1:8080"));
    }

    #[test]
    fn test_zero_timeout_rejected() {
        let result = ZinvoltConfig::from_json_str(r#"{"request_timeout_secs": 0}"#);
        assert!(matches!(result, Err(ZinvoltError::Config(_))));
    }

    #[test]
    fn test_non_http_base_url_rejected() {
        let config = ZinvoltConfig {
            api_base_url: Some("ftp://example.com".to_owned()),
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(ZinvoltError::Config(_))));
    }

    #[test]
    fn test_malformed_json_is_config_error() {
        let result = ZinvoltConfig::from_json_str("{not json");
        assert!(matches!(result, Err(ZinvoltError::Config(_))));
    }

    #[test]
    fn test_debug_hides_token() {
        let config = ZinvoltConfig {
            token: Some("secret-token".to_owned()),
            ..Default::default()
        };
        assert!(!format!("{config:?}").contains("secret-token"));
    }
}
