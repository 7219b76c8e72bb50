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

use serde::{Deserialize, Serialize};

/// Body of `POST login`
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

impl LoginRequest {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }
}

// Keep the password out of logs
impl std::fmt::Debug for LoginRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoginRequest")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::{Decode, Encode};
    use serde_json::{Value, json};

    #[test]
    fn test_login_request_wire_shape() {
        let request = LoginRequest::new("test@test.com", "abc");
        let encoded: Value = serde_json::from_str(&request.encode().unwrap()).unwrap();

        assert_eq!(
            encoded,
            json!({"email": "test@test.com", "password": "abc"})
        );
    }

    #[test]
    fn test_login_request_debug_hides_password() {
        let request = LoginRequest::new("test@test.com", "hunter2");
        let debug = format!("{request:?}");

        assert!(debug.contains("test@test.com"));
        assert!(!debug.contains("hunter2"));
    }

    #[test]
    fn test_login_response_requires_token() {
        let response = LoginResponse::decode(r#"{"token": "T"}"#).unwrap();
        assert_eq!(response.token, "T");

        assert!(LoginResponse::decode(r#"{"access_token": "T"}"#).is_err());
    }
}
