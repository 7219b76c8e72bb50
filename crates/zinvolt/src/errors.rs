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

use thiserror::Error;

/// Zinvolt API error types
#[derive(Error, Debug)]
pub enum ZinvoltError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Request timed out")]
    Timeout,

    #[error("Authentication failed (status {status}): {message}")]
    Authentication { status: u16, message: String },

    #[error("Zinvolt API returned error status {status}: {message}")]
    Api { status: u16, message: String },

    #[error("JSON decoding error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl ZinvoltError {
    /// True when the server rejected the credentials or token
    pub fn is_authentication(&self) -> bool {
        matches!(self, Self::Authentication { .. })
    }

    /// HTTP status of a rejected request, if the server answered at all
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Authentication { status, .. } | Self::Api { status, .. } => Some(*status),
            Self::Http(e) => e.status().map(|s| s.as_u16()),
            Self::Timeout | Self::Json(_) | Self::Config(_) => None,
        }
    }
}

pub type ZinvoltResult<T> = Result<T, ZinvoltError>;
