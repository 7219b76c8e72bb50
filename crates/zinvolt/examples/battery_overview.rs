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

//! Print every battery on a Zinvolt account.
//!
//! Run with: ZINVOLT_EMAIL=... ZINVOLT_PASSWORD=... cargo run -p zinvolt --example battery_overview

use anyhow::Context;
use zinvolt::ZinvoltClient;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Set up logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("zinvolt=info")),
        )
        .init();

    let email = std::env::var("ZINVOLT_EMAIL").context("ZINVOLT_EMAIL not set")?;
    let password = std::env::var("ZINVOLT_PASSWORD").context("ZINVOLT_PASSWORD not set")?;

    let client = ZinvoltClient::new();
    client.login(&email, &password).await?;

    let batteries = client.get_batteries().await?;
    println!("Found {} batteries", batteries.len());

    for battery in &batteries {
        let id = battery.identifier.as_str();
        if !client.is_battery_online(id).await? {
            println!("\n{} ({}) is offline", battery.name, battery.serial_number);
            continue;
        }

        let state = client.get_battery_status(id).await?;
        let power = &state.current_power;
        println!("\n{} ({})", battery.name, battery.serial_number);
        println!("  Mode:       {}", state.smart_mode);
        println!("  SoC:        {:.1} %", power.state_of_charge);
        println!("  PV:         {} W", power.photovoltaic_power);
        println!("  On grid:    {}", power.on_grid);
        println!(
            "  Thresholds: {}-{} %",
            state.global_settings.battery_lower_threshold,
            state.global_settings.battery_upper_threshold
        );

        for pv in client.get_photovoltaic_data(id).await? {
            println!("  {}: {} W", pv.name, pv.power);
        }
        for mode in client.get_custom_modes(id).await? {
            println!("  Custom mode {} ({})", mode.name, mode.identifier);
        }
    }

    client.close();
    Ok(())
}
