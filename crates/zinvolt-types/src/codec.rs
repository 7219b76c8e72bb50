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

//! JSON codec shared by every payload type.
//!
//! Field aliasing is declared on each record with serde attributes, so the
//! routines here stay generic. Decoding is strict: a missing required field or an
//! enum literal outside the declared set is an error, never a default.

use serde::Serialize;
use serde::de::DeserializeOwned;

/// Decode a record from the raw JSON text returned by the API
pub trait Decode: Sized {
    fn decode(json: &str) -> Result<Self, serde_json::Error>;
}

impl<T: DeserializeOwned> Decode for T {
    fn decode(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

/// Encode an outbound record into the JSON text sent to the API
pub trait Encode {
    fn encode(&self) -> Result<String, serde_json::Error>;
}

impl<T: Serialize> Encode for T {
    fn encode(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}
