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
use serde_json::{Map, Value};

/// A battery system registered on the account
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Battery {
    /// System id used in every `system/{id}/...` path
    #[serde(rename = "id")]
    pub identifier: String,
    pub name: String,
    pub serial_number: String,
}

/// Response of `GET system/batteries`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatteryListResponse {
    pub batteries: Vec<Battery>,
}

/// Detail of one physical battery unit inside a system.
///
/// Only the serial number is stable across firmware versions; every other key
/// the vendor sends is kept untouched in `metrics`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatteryUnit {
    #[serde(rename = "sn")]
    pub serial_number: String,
    #[serde(flatten)]
    pub metrics: Map<String, Value>,
}

impl BatteryUnit {
    /// Raw value of a vendor metric, by wire name
    pub fn metric(&self, wire_name: &str) -> Option<&Value> {
        self.metrics.get(wire_name)
    }

    /// Numeric metric, if present and numeric
    pub fn metric_f64(&self, wire_name: &str) -> Option<f64> {
        self.metric(wire_name).and_then(Value::as_f64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::{Decode, Encode};
    use serde_json::json;

    #[test]
    fn test_battery_list_keeps_order_and_aliases() {
        let json = json!({
            "batteries": [
                {"id": "a1", "name": "Garage", "serial_number": "ZV-001"},
                {"id": "b2", "name": "Attic", "serial_number": "ZV-002"}
            ]
        })
        .to_string();

        let list = BatteryListResponse::decode(&json).unwrap();

        assert_eq!(list.batteries.len(), 2);
        assert_eq!(list.batteries[0].identifier, "a1");
        assert_eq!(list.batteries[0].name, "Garage");
        assert_eq!(list.batteries[1].serial_number, "ZV-002");
    }

    #[test]
    fn test_battery_missing_field_fails() {
        let json = json!({"id": "a1", "name": "Garage"}).to_string();
        assert!(Battery::decode(&json).is_err());
    }

    #[test]
    fn test_battery_encodes_wire_names() {
        let battery = Battery {
            identifier: "a1".to_owned(),
            name: "Garage".to_owned(),
            serial_number: "ZV-001".to_owned(),
        };
        let value: Value = serde_json::from_str(&battery.encode().unwrap()).unwrap();

        assert_eq!(
            value,
            json!({"id": "a1", "name": "Garage", "serial_number": "ZV-001"})
        );
    }

    #[test]
    fn test_battery_unit_keeps_vendor_metrics() {
        let json = json!({
            "sn": "UNIT-7",
            "soc": 81.5,
            "temperature": 23,
            "cycles": 412
        })
        .to_string();

        let unit = BatteryUnit::decode(&json).unwrap();

        assert_eq!(unit.serial_number, "UNIT-7");
        assert_eq!(unit.metric_f64("soc"), Some(81.5));
        assert_eq!(unit.metric("cycles"), Some(&json!(412)));
        assert!(unit.metric("sn").is_none());
        assert!(unit.metric("voltage").is_none());
    }
}
