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

//! Asynchronous client for the Zinvolt battery monitoring API
//!
//! ```no_run
//! # use zinvolt::ZinvoltClient;
//! # async fn example() -> zinvolt::ZinvoltResult<()> {
//! let client = ZinvoltClient::new();
//! client.login("me@example.com", "secret").await?;
//!
//! for battery in client.get_batteries().await? {
//!     let state = client.get_battery_status(&battery.identifier).await?;
//!     println!("{}: {}%", battery.name, state.current_power.state_of_charge);
//! }
//! client.close();
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod config;
pub mod errors;

pub use client::{API_PATH, HOST, USER_AGENT, ZinvoltClient};
pub use config::ZinvoltConfig;
pub use errors::{ZinvoltError, ZinvoltResult};
pub use zinvolt_types as types;
pub use zinvolt_types::{
    Battery, BatteryState, BatteryUnit, CurrentPower, CustomMode, GlobalSettings, OnlineStatus,
    PhotovoltaicData, SmartMode, SmartModeSelection,
};
