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

use crate::settings::GlobalSettings;
use serde::{Deserialize, Serialize};
use std::fmt;

// ============= Enums =============

/// Cloud connectivity of a battery system
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OnlineStatus {
    Online,
    Offline,
}

impl OnlineStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Online => "ONLINE",
            Self::Offline => "OFFLINE",
        }
    }
}

impl fmt::Display for OnlineStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Operating strategy of the battery.
///
/// `Custom` refers to a user defined schedule, see [`crate::CustomMode`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SmartMode {
    Dynamic,
    Charged,
    Performance,
    Custom,
}

impl SmartMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Dynamic => "DYNAMIC",
            Self::Charged => "CHARGED",
            Self::Performance => "PERFORMANCE",
            Self::Custom => "CUSTOM",
        }
    }

    pub fn all() -> &'static [SmartMode] {
        &[Self::Dynamic, Self::Charged, Self::Performance, Self::Custom]
    }
}

impl fmt::Display for SmartMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============= Live state =============

/// Instantaneous power flow of a battery system
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentPower {
    /// State of charge in percent
    #[serde(rename = "soc")]
    pub state_of_charge: f64,
    #[serde(rename = "coc")]
    pub output_current: i32,
    #[serde(rename = "smp")]
    pub max_power: i32,
    #[serde(rename = "onGrid")]
    pub on_grid: bool,
    #[serde(rename = "ppv")]
    pub photovoltaic_power: i32,
    #[serde(rename = "pso")]
    pub power_socket_output: i32,
    #[serde(rename = "isDormancy")]
    pub is_dormant: bool,
    #[serde(rename = "onlineStatus")]
    pub online_status: OnlineStatus,
}

/// Snapshot returned by `GET system/{id}/basic/current-state`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatteryState {
    #[serde(rename = "sn")]
    pub serial_number: String,
    pub name: String,
    #[serde(rename = "onlineStatus")]
    pub online_status: OnlineStatus,
    #[serde(rename = "currentPower")]
    pub current_power: CurrentPower,
    #[serde(rename = "smartMode")]
    pub smart_mode: SmartMode,
    #[serde(rename = "globalSettings")]
    pub global_settings: GlobalSettings,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OnlineStatusResponse {
    #[serde(rename = "sn")]
    pub serial_number: String,
    #[serde(rename = "onlineStatus")]
    pub online_status: OnlineStatus,
}

impl OnlineStatusResponse {
    pub fn is_online(&self) -> bool {
        self.online_status == OnlineStatus::Online
    }
}
