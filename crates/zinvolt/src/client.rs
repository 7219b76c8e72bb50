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

use crate::config::ZinvoltConfig;
use crate::errors::{ZinvoltError, ZinvoltResult};
use parking_lot::{Mutex, RwLock};
use reqwest::{Client, Method, StatusCode, header};
use serde::Serialize;
use std::time::Duration;
use tracing::{debug, error, info, trace, warn};
use zinvolt_types::{
    Battery, BatteryListResponse, BatteryState, BatteryUnit, CustomMode, Decode,
    GlobalSettingUpdate, GlobalSettings, LoginRequest, LoginResponse, OnlineStatusResponse,
    PhotovoltaicData, SmartModeSelection, SwitchSmartModeRequest,
};

/// Zinvolt public API host
pub const HOST: &str = "eva-backoffice.onmoonly.app";

/// Versioned path prefix, relative to the host
pub const API_PATH: &str = "api/public/v2/";

/// User agent sent with every request
pub const USER_AGENT: &str = concat!("zinvolt-rs/", env!("CARGO_PKG_VERSION"));

const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Zinvolt REST API client
///
/// All methods take `&self`, so one client can serve concurrent tasks (wrap it in
/// an `Arc`). Concurrent calls share the HTTP session and the bearer token;
/// `reqwest::Client` pools connections and supports that. No lock is held while
/// a request is in flight.
///
/// The session is either owned (created on first use, released by
/// [`close`](Self::close) or on drop) or shared (handed in through
/// [`with_session`](Self::with_session) and never released by this client).
pub struct ZinvoltClient {
    base_url: String,
    token: RwLock<Option<String>>,
    session: Mutex<Option<Client>>,
    owns_session: bool,
    request_timeout: Duration,
}

impl ZinvoltClient {
    /// Create a client without a token; the HTTP session is created on first use
    pub fn new() -> Self {
        Self {
            base_url: format!("https://{HOST}/{API_PATH}"),
            token: RwLock::new(None),
            session: Mutex::new(None),
            owns_session: true,
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
        }
    }

    /// Create a client that reuses a token from an earlier login
    pub fn with_token(token: impl Into<String>) -> Self {
        let client = Self::new();
        client.set_token(token);
        client
    }

    /// Create a client on top of a caller supplied HTTP session.
    ///
    /// [`close`](Self::close) leaves that session untouched.
    pub fn with_session(session: Client) -> Self {
        Self {
            session: Mutex::new(Some(session)),
            owns_session: false,
            ..Self::new()
        }
    }

    /// Create a client from configuration values
    pub fn from_config(config: &ZinvoltConfig) -> ZinvoltResult<Self> {
        config.validate()?;

        let mut client = Self::new().with_request_timeout(config.request_timeout());
        if let Some(url) = &config.api_base_url {
            client = client.with_base_url(url.as_str());
        }
        if let Some(token) = &config.token {
            client.set_token(token.as_str());
        }

        debug!("Initializing Zinvolt client from configuration: {}", client.base_url);
        Ok(client)
    }

    /// Set the per-request timeout
    pub fn with_request_timeout(mut self, request_timeout: Duration) -> Self {
        self.request_timeout = request_timeout;
        self
    }

    /// Point the client at another server (test doubles, staging)
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        if !base_url.ends_with('/') {
            base_url.push('/');
        }
        self.base_url = base_url;
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn request_timeout(&self) -> Duration {
        self.request_timeout
    }

    pub fn owns_session(&self) -> bool {
        self.owns_session
    }

    /// Current bearer token, if logged in
    pub fn token(&self) -> Option<String> {
        self.token.read().clone()
    }

    pub fn set_token(&self, token: impl Into<String>) {
        *self.token.write() = Some(token.into());
    }

    /// Exchange credentials for a bearer token and keep it for later calls
    pub async fn login(&self, email: &str, password: &str) -> ZinvoltResult<String> {
        debug!("🔑 [ZINVOLT LOGIN] Logging in as {}", email);

        let body = LoginRequest::new(email, password);
        let text = self.request(Method::POST, "login", Some(&body)).await?;
        let LoginResponse { token } = LoginResponse::decode(&text)?;

        self.set_token(token.as_str());
        info!("✅ [ZINVOLT LOGIN] Logged in");
        Ok(token)
    }

    /// List the battery systems on the account
    pub async fn get_batteries(&self) -> ZinvoltResult<Vec<Battery>> {
        let response: BatteryListResponse = self.get("system/batteries").await?;
        debug!("✅ [ZINVOLT] {} batteries", response.batteries.len());
        Ok(response.batteries)
    }

    pub async fn get_battery_status(&self, battery_id: &str) -> ZinvoltResult<BatteryState> {
        self.get(&format!("system/{battery_id}/basic/current-state"))
            .await
    }

    /// True iff the cloud reports the system as ONLINE
    pub async fn is_battery_online(&self, battery_id: &str) -> ZinvoltResult<bool> {
        let response: OnlineStatusResponse = self
            .get(&format!("system/{battery_id}/basic/online-status"))
            .await?;
        debug!(
            "✅ [ZINVOLT] Battery {} is {}",
            battery_id, response.online_status
        );
        Ok(response.is_online())
    }

    pub async fn get_photovoltaic_data(
        &self,
        battery_id: &str,
    ) -> ZinvoltResult<Vec<PhotovoltaicData>> {
        self.get(&format!("system/{battery_id}/basic/pv-data")).await
    }

    pub async fn get_global_settings(&self, battery_id: &str) -> ZinvoltResult<GlobalSettings> {
        self.get(&format!("system/{battery_id}/configuration/global-settings"))
            .await
    }

    pub async fn get_custom_modes(&self, battery_id: &str) -> ZinvoltResult<Vec<CustomMode>> {
        self.get(&format!("system/{battery_id}/custom-mode")).await
    }

    pub async fn get_battery_unit(
        &self,
        battery_id: &str,
        serial_number: &str,
    ) -> ZinvoltResult<BatteryUnit> {
        self.get(&format!("system/{battery_id}/unit/battery/{serial_number}"))
            .await
    }

    /// Switch the smart mode
    ///
    /// # Example
    /// ```no_run
    /// # use zinvolt::{SmartMode, ZinvoltClient};
    /// # async fn example(client: &ZinvoltClient) -> zinvolt::ZinvoltResult<()> {
    /// client.set_smart_mode("123", SmartMode::Dynamic).await?;
    /// // A string selects a custom mode by id
    /// client.set_smart_mode("123", "custom-id-123").await?;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn set_smart_mode(
        &self,
        battery_id: &str,
        mode: impl Into<SmartModeSelection>,
    ) -> ZinvoltResult<()> {
        let body = SwitchSmartModeRequest::from(mode.into());
        info!(
            "📞 [ZINVOLT] Switching battery {} to {} {}",
            battery_id,
            body.mode,
            body.custom_mode_id.as_deref().unwrap_or_default()
        );

        self.request(
            Method::PUT,
            &format!("system/{battery_id}/operation/switch-smart-mode"),
            Some(&body),
        )
        .await?;
        Ok(())
    }

    pub async fn set_max_output(&self, battery_id: &str, max_output: i32) -> ZinvoltResult<()> {
        self.update_global_setting(battery_id, GlobalSettingUpdate::MaxOutput(max_output))
            .await
    }

    pub async fn set_lower_threshold(
        &self,
        battery_id: &str,
        lower_threshold: i32,
    ) -> ZinvoltResult<()> {
        self.update_global_setting(
            battery_id,
            GlobalSettingUpdate::LowerThreshold(lower_threshold),
        )
        .await
    }

    pub async fn set_upper_threshold(
        &self,
        battery_id: &str,
        upper_threshold: i32,
    ) -> ZinvoltResult<()> {
        self.update_global_setting(
            battery_id,
            GlobalSettingUpdate::UpperThreshold(upper_threshold),
        )
        .await
    }

    pub async fn set_standby_time(&self, battery_id: &str, standby_time: i32) -> ZinvoltResult<()> {
        self.update_global_setting(battery_id, GlobalSettingUpdate::StandbyTime(standby_time))
            .await
    }

    /// Write one global setting
    pub async fn update_global_setting(
        &self,
        battery_id: &str,
        update: GlobalSettingUpdate,
    ) -> ZinvoltResult<()> {
        info!(
            "📞 [ZINVOLT] Setting {}={} on battery {}",
            update.wire_key(),
            update.value(),
            battery_id
        );

        self.request(
            Method::POST,
            &format!("system/{battery_id}/configuration/global-settings"),
            Some(&update),
        )
        .await?;
        Ok(())
    }

    /// Release the HTTP session if this client created it. Safe to call repeatedly.
    pub fn close(&self) {
        if !self.owns_session {
            return;
        }
        if self.session.lock().take().is_some() {
            debug!("Closed owned HTTP session");
        }
    }

    async fn get<T: Decode>(&self, uri: &str) -> ZinvoltResult<T> {
        let text = self.request::<()>(Method::GET, uri, None).await?;
        Ok(T::decode(&text)?)
    }

    /// Send one request and return the body of a 2xx answer.
    ///
    /// Sending and reading the body both count against the timeout.
    async fn request<B>(&self, method: Method, uri: &str, body: Option<&B>) -> ZinvoltResult<String>
    where
        B: Serialize + ?Sized,
    {
        let url = format!("{}{}", self.base_url, uri);
        debug!("🔍 [ZINVOLT QUERY] {} {}", method, url);

        let session = self.session()?;
        let token = self.token().filter(|t| !t.is_empty());

        let mut request = session
            .request(method.clone(), &url)
            .header(header::USER_AGENT, USER_AGENT);
        if let Some(token) = token {
            request = request.bearer_auth(token);
        }
        if let Some(body) = body {
            request = request.json(body);
        }

        let exchange = async {
            let response = request.send().await?;
            let status = response.status();
            let text = response.text().await?;
            Ok::<_, reqwest::Error>((status, text))
        };

        let (status, text) = match tokio::time::timeout(self.request_timeout, exchange).await {
            Ok(Ok(result)) => result,
            Ok(Err(e)) if e.is_timeout() => {
                warn!("⏱️ [ZINVOLT] {} {} timed out in transport", method, url);
                return Err(ZinvoltError::Timeout);
            }
            Ok(Err(e)) => {
                error!("❌ [ZINVOLT ERROR] {} {} failed: {}", method, url, e);
                return Err(ZinvoltError::Http(e));
            }
            Err(_) => {
                warn!(
                    "⏱️ [ZINVOLT] {} {} timed out after {:?}",
                    method, url, self.request_timeout
                );
                return Err(ZinvoltError::Timeout);
            }
        };

        // Bodies may carry the bearer token, never log them
        trace!("   Status: {}, {} bytes", status, text.len());
        check_status(status, text)
    }

    fn session(&self) -> ZinvoltResult<Client> {
        let mut session = self.session.lock();
        if let Some(client) = session.as_ref() {
            return Ok(client.clone());
        }

        let client = Client::builder().build().map_err(|e| {
            ZinvoltError::Config(format!("Failed to build HTTP client: {e}"))
        })?;
        debug!("Created owned HTTP session");
        *session = Some(client.clone());
        Ok(client)
    }
}

impl Default for ZinvoltClient {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for ZinvoltClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ZinvoltClient")
            .field("base_url", &self.base_url)
            .field("token", &self.token.read().as_ref().map(|_| "<redacted>"))
            .field("session_open", &self.session.lock().is_some())
            .field("owns_session", &self.owns_session)
            .field("request_timeout", &self.request_timeout)
            .finish()
    }
}

fn check_status(status: StatusCode, text: String) -> ZinvoltResult<String> {
    if status.is_success() {
        return Ok(text);
    }

    match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
            error!("❌ [ZINVOLT ERROR] Authentication failed: {}", status);
            Err(ZinvoltError::Authentication {
                status: status.as_u16(),
                message: text,
            })
        }
        status => {
            error!("❌ [ZINVOLT ERROR] Status {}: {}", status, text);
            Err(ZinvoltError::Api {
                status: status.as_u16(),
                message: text,
            })
        }
    }
}
