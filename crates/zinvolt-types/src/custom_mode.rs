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

use crate::state::SmartMode;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// User defined operating schedule, `GET system/{id}/custom-mode`.
///
/// Mode parameters are vendor defined and kept as sent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomMode {
    #[serde(rename = "id")]
    pub identifier: String,
    pub name: String,
    #[serde(flatten)]
    pub parameters: Map<String, Value>,
}

impl CustomMode {
    /// Selection that activates this mode
    pub fn selection(&self) -> SmartModeSelection {
        SmartModeSelection::CustomId(self.identifier.clone())
    }
}

/// Target of a smart mode switch: a named mode or a custom mode by id
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SmartModeSelection {
    Named(SmartMode),
    CustomId(String),
}

impl From<SmartMode> for SmartModeSelection {
    fn from(mode: SmartMode) -> Self {
        Self::Named(mode)
    }
}

impl From<&str> for SmartModeSelection {
    fn from(id: &str) -> Self {
        Self::CustomId(id.to_owned())
    }
}

impl From<String> for SmartModeSelection {
    fn from(id: String) -> Self {
        Self::CustomId(id)
    }
}

impl From<&CustomMode> for SmartModeSelection {
    fn from(mode: &CustomMode) -> Self {
        mode.selection()
    }
}

/// Body of `PUT system/{id}/operation/switch-smart-mode`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SwitchSmartModeRequest {
    pub mode: SmartMode,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_mode_id: Option<String>,
}

impl From<SmartModeSelection> for SwitchSmartModeRequest {
    fn from(selection: SmartModeSelection) -> Self {
        match selection {
            SmartModeSelection::Named(mode) => Self {
                mode,
                custom_mode_id: None,
            },
            SmartModeSelection::CustomId(id) => Self {
                mode: SmartMode::Custom,
                custom_mode_id: Some(id),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::{Decode, Encode};
    use serde_json::json;

    fn encoded(selection: impl Into<SmartModeSelection>) -> Value {
        let request = SwitchSmartModeRequest::from(selection.into());
        serde_json::from_str(&request.encode().unwrap()).unwrap()
    }

    #[test]
    fn test_named_mode_payload() {
        assert_eq!(encoded(SmartMode::Dynamic), json!({"mode": "DYNAMIC"}));
        assert_eq!(encoded(SmartMode::Performance), json!({"mode": "PERFORMANCE"}));
    }

    #[test]
    fn test_custom_id_payload() {
        assert_eq!(
            encoded("custom-id-123"),
            json!({"mode": "CUSTOM", "custom_mode_id": "custom-id-123"})
        );
        assert_eq!(
            encoded(String::from("night-shift")),
            json!({"mode": "CUSTOM", "custom_mode_id": "night-shift"})
        );
    }

    #[test]
    fn test_custom_modes_decode_with_parameters() {
        let json = json!([
            {"id": "cm-1", "name": "Night", "startTime": "22:00", "endTime": "06:00", "power": 300},
            {"id": "cm-2", "name": "Peak shaving"}
        ])
        .to_string();

        let modes = Vec::<CustomMode>::decode(&json).unwrap();

        assert_eq!(modes.len(), 2);
        assert_eq!(modes[0].identifier, "cm-1");
        assert_eq!(modes[0].parameters.get("startTime"), Some(&json!("22:00")));
        assert_eq!(modes[0].parameters.len(), 3);
        assert!(modes[1].parameters.is_empty());
        assert_eq!(
            SmartModeSelection::from(&modes[1]),
            SmartModeSelection::CustomId("cm-2".to_owned())
        );
    }

    #[test]
    fn test_custom_mode_without_id_fails() {
        assert!(CustomMode::decode(r#"{"name": "Night"}"#).is_err());
    }
}
