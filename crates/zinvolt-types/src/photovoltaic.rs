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

/// Output of one PV string, as listed by `GET system/{id}/basic/pv-data`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhotovoltaicData {
    pub name: String,
    /// Watts
    pub power: i32,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::Decode;

    #[test]
    fn test_bare_array_decodes_in_order() {
        let json = r#"[{"name": "PV1", "power": 340}, {"name": "PV2", "power": 0}]"#;
        let data = Vec::<PhotovoltaicData>::decode(json).unwrap();

        assert_eq!(data.len(), 2);
        assert_eq!(data[0].name, "PV1");
        assert_eq!(data[0].power, 340);
        assert_eq!(data[1].name, "PV2");
    }

    #[test]
    fn test_wrapped_object_is_rejected() {
        let json = r#"{"data": [{"name": "PV1", "power": 340}]}"#;
        assert!(Vec::<PhotovoltaicData>::decode(json).is_err());
    }
}
