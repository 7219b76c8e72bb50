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

/// Device wide configuration, `GET system/{id}/configuration/global-settings`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GlobalSettings {
    /// Watts
    #[serde(rename = "maxOutput")]
    pub max_output: i32,
    #[serde(rename = "maxOutputLimit")]
    pub max_output_limit: i32,
    #[serde(rename = "maxOutputUnlocked")]
    pub max_output_unlocked: bool,
    /// Percent
    #[serde(rename = "batHighCap")]
    pub battery_upper_threshold: i32,
    /// Percent
    #[serde(rename = "batUseCap")]
    pub battery_lower_threshold: i32,
    #[serde(rename = "maxChargePower")]
    pub maximum_charge_power: i32,
    /// Minutes
    #[serde(rename = "standbyTime")]
    pub standby_time: i32,
}

/// A single-field change, `POST system/{id}/configuration/global-settings`.
///
/// The setter endpoint uses snake_case keys, unlike the read side. The upper
/// threshold is written through `max_charge_power`; that is how the vendor
/// API names it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GlobalSettingUpdate {
    #[serde(rename = "max_output")]
    MaxOutput(i32),
    #[serde(rename = "bat_use_cap")]
    LowerThreshold(i32),
    #[serde(rename = "max_charge_power")]
    UpperThreshold(i32),
    #[serde(rename = "standby_time")]
    StandbyTime(i32),
}

impl GlobalSettingUpdate {
    /// Wire key the update writes
    pub fn wire_key(&self) -> &'static str {
        match self {
            Self::MaxOutput(_) => "max_output",
            Self::LowerThreshold(_) => "bat_use_cap",
            Self::UpperThreshold(_) => "max_charge_power",
            Self::StandbyTime(_) => "standby_time",
        }
    }

    pub fn value(&self) -> i32 {
        match *self {
            Self::MaxOutput(v)
            | Self::LowerThreshold(v)
            | Self::UpperThreshold(v)
            | Self::StandbyTime(v) => v,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::{Decode, Encode};
    use serde_json::{Value, json};

    #[test]
    fn test_global_settings_decode() {
        let json = json!({
            "maxOutput": 600,
            "maxOutputLimit": 800,
            "maxOutputUnlocked": true,
            "batHighCap": 95,
            "batUseCap": 15,
            "maxChargePower": 1000,
            "standbyTime": 30
        })
        .to_string();

        let settings = GlobalSettings::decode(&json).unwrap();

        assert_eq!(settings.max_output, 600);
        assert_eq!(settings.max_output_limit, 800);
        assert!(settings.max_output_unlocked);
        assert_eq!(settings.battery_upper_threshold, 95);
        assert_eq!(settings.battery_lower_threshold, 15);
        assert_eq!(settings.maximum_charge_power, 1000);
        assert_eq!(settings.standby_time, 30);
    }

    #[test]
    fn test_updates_are_single_key_objects() {
        let cases = [
            (GlobalSettingUpdate::MaxOutput(600), json!({"max_output": 600})),
            (GlobalSettingUpdate::LowerThreshold(10), json!({"bat_use_cap": 10})),
            (GlobalSettingUpdate::UpperThreshold(500), json!({"max_charge_power": 500})),
            (GlobalSettingUpdate::StandbyTime(45), json!({"standby_time": 45})),
        ];

        for (update, expected) in cases {
            let encoded: Value = serde_json::from_str(&update.encode().unwrap()).unwrap();
            assert_eq!(encoded, expected);
            assert!(expected.get(update.wire_key()).is_some());
            assert_eq!(GlobalSettingUpdate::decode(&expected.to_string()).unwrap(), update);
        }
    }

    #[test]
    fn test_upper_threshold_uses_charge_power_key() {
        let encoded = GlobalSettingUpdate::UpperThreshold(500).encode().unwrap();
        assert_eq!(encoded, r#"{"max_charge_power":500}"#);
        assert!(!encoded.contains("upper_threshold"));
    }
}
