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

//! Zinvolt API payloads
//!
//! Every record here mirrors one JSON document of the Zinvolt public API. Wire
//! names (`sn`, `onlineStatus`, `batUseCap`, ...) only appear in serde attributes;
//! the rest of the code works with the semantic field names.

pub mod auth;
pub mod battery;
pub mod codec;
pub mod custom_mode;
pub mod photovoltaic;
pub mod settings;
pub mod state;

pub use auth::{LoginRequest, LoginResponse};
pub use battery::{Battery, BatteryListResponse, BatteryUnit};
pub use codec::{Decode, Encode};
pub use custom_mode::{CustomMode, SmartModeSelection, SwitchSmartModeRequest};
pub use photovoltaic::PhotovoltaicData;
pub use settings::{GlobalSettingUpdate, GlobalSettings};
pub use state::{BatteryState, CurrentPower, OnlineStatus, OnlineStatusResponse, SmartMode};
