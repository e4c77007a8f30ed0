/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 16/10/26
******************************************************************************/

//! Client for the Allegro WebAPI
//!
//! This module provides the client that handles:
//! - Login: version-key query followed by `doLoginEnc`
//! - Session-bound calls on unsold items
//! - Republishing every unsold item with its previous duration
//!
//! # Example
//! ```ignore
//! use allegro_webapi::prelude::*;
//!
//! let mut client = WebApiClient::new(true)?;
//! client.connect("allegroUserName", "allegroPassword", "allegroAPIKey").await?;
//! let items = client.do_get_my_not_sold_items().await?;
//! ```

use crate::application::auth::{HashedCredentials, Session, VersionKeys};
use crate::application::config::{Config, Credentials, SoapConfig};
use crate::constants::{DEFAULT_COUNTRY_ID, IMMEDIATE_START};
use crate::error::{AppError, AuthError};
use crate::model::duration::best_allowed_duration;
use crate::model::requests::{
    GetMyNotSoldItemsRequest, LoginEncRequest, QueryAllSysStatusRequest, SellAgainOptions,
    SellOption,
};
use crate::model::responses::{
    LoginResponse, NotSoldItemsResponse, SellAgainResponse, SysStatusResponse,
};
use crate::transport::interface::SoapTransport;
use crate::transport::soap::SoapClient;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, info};

/// Result of [`WebApiClient::republish_not_sold_items`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RepublishOutcome {
    /// One response per unsold item, in the order the service listed them
    Relisted(Vec<SellAgainResponse>),
    /// The service reported no unsold items; no relist call was made
    NothingToDo,
}

impl RepublishOutcome {
    /// Number of relist calls that were made
    #[must_use]
    pub fn relisted_count(&self) -> usize {
        match self {
            RepublishOutcome::Relisted(responses) => responses.len(),
            RepublishOutcome::NothingToDo => 0,
        }
    }
}

/// Allegro WebAPI client
///
/// Holds the session state of one user. Mutating calls take `&mut self`, so a
/// client shared between tasks needs external synchronisation; separate
/// clients are fully independent.
pub struct WebApiClient<T = SoapClient> {
    transport: T,
    country_id: i32,
    credentials: Option<HashedCredentials>,
    version_keys: VersionKeys,
    session: Option<Session>,
}

impl WebApiClient<SoapClient> {
    /// Creates a client for the sandbox (`true`) or production (`false`) service
    ///
    /// # Returns
    /// * `Ok(WebApiClient)` - Client ready for `connect`
    /// * `Err(AppError)` - If the HTTP client cannot be built
    pub fn new(sandbox: bool) -> Result<Self, AppError> {
        let transport = SoapClient::new(&SoapConfig::for_environment(sandbox))?;
        Ok(Self::with_transport(transport))
    }

    /// Creates a client from a [`Config`], including its country id
    pub fn from_config(config: &Config) -> Result<Self, AppError> {
        let transport = SoapClient::new(&config.soap)?;
        let mut client = Self::with_transport(transport);
        client.set_country_id(config.country_id);
        Ok(client)
    }
}

impl<T: SoapTransport> WebApiClient<T> {
    /// Creates a client over any transport
    pub fn with_transport(transport: T) -> Self {
        Self {
            transport,
            country_id: DEFAULT_COUNTRY_ID,
            credentials: None,
            version_keys: VersionKeys::default(),
            session: None,
        }
    }

    /// Sets the country used by the next [`connect`](Self::connect)
    ///
    /// An already open session keeps the country it was opened for.
    pub fn set_country_id(&mut self, country_id: i32) {
        if self.session.is_some() {
            debug!(
                "Country set to {} while connected; applies from the next connect",
                country_id
            );
        }
        self.country_id = country_id;
    }

    /// Country used by the next `connect`
    #[must_use]
    pub fn country_id(&self) -> i32 {
        self.country_id
    }

    /// Current session, `None` before a successful `connect`
    #[must_use]
    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    /// Whether `connect` has succeeded
    #[must_use]
    pub fn is_connected(&self) -> bool {
        self.session.is_some()
    }

    /// Version keys fetched by the last successful `connect`
    #[must_use]
    pub fn version_keys(&self) -> &VersionKeys {
        &self.version_keys
    }

    /// Credentials of the last successful `connect`
    #[must_use]
    pub fn credentials(&self) -> Option<&HashedCredentials> {
        self.credentials.as_ref()
    }

    /// Underlying transport
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// See [`best_allowed_duration`]
    #[must_use]
    pub fn best_allowed_duration(&self, requested: i64) -> u8 {
        best_allowed_duration(requested)
    }

    /// Connects to the WebAPI
    ///
    /// Queries the version keys for the configured country, then logs in with
    /// the key of that country. Calling it again repeats both round-trips; the
    /// previous state is replaced only when both succeed.
    ///
    /// # Arguments
    /// * `login` - User login
    /// * `password` - Raw password, hashed before it leaves the client
    /// * `api_key` - WebAPI key
    ///
    /// # Returns
    /// * `Ok(&Session)` - The new session
    /// * `Err(AppError::Auth)` - If either call returns a fault or no version key exists
    /// * `Err(AppError)` - Transport or decoding failure
    pub async fn connect(
        &mut self,
        login: &str,
        password: &str,
        api_key: &str,
    ) -> Result<&Session, AppError> {
        let credentials = HashedCredentials::new(login, password, api_key);
        let country_id = self.country_id;

        info!("Connecting as {} (country {})", login, country_id);

        let version_keys = self.gather_version_keys(&credentials, country_id).await?;
        let local_version = version_keys
            .ver_key(country_id)
            .ok_or(AuthError::MissingVersionKey(country_id))?;

        let session = self
            .open_session(&credentials, country_id, local_version)
            .await?;

        info!("✓ Login successful, user: {:?}", session.user_id);

        self.credentials = Some(credentials);
        self.version_keys = version_keys;
        Ok(&*self.session.insert(session))
    }

    /// Connects with the credentials of a [`Config`]
    pub async fn connect_with(&mut self, credentials: &Credentials) -> Result<&Session, AppError> {
        self.connect(
            &credentials.login,
            &credentials.password,
            &credentials.api_key,
        )
        .await
    }

    async fn gather_version_keys(
        &self,
        credentials: &HashedCredentials,
        country_id: i32,
    ) -> Result<VersionKeys, AppError> {
        let request = QueryAllSysStatusRequest {
            country_id,
            webapi_key: credentials.api_key().to_string(),
        };
        let status: SysStatusResponse = match self.call("doQueryAllSysStatus", &request).await {
            Ok(status) => status,
            Err(AppError::Fault(fault)) => {
                return Err(AppError::Auth(AuthError::StatusRejected(fault)));
            }
            Err(e) => return Err(e),
        };
        let keys = VersionKeys::from_statuses(status.sys_country_status);
        debug!("Received version keys for {} countries", keys.len());
        Ok(keys)
    }

    async fn open_session(
        &self,
        credentials: &HashedCredentials,
        country_id: i32,
        local_version: i64,
    ) -> Result<Session, AppError> {
        let request = LoginEncRequest {
            user_login: credentials.login().to_string(),
            user_hash_password: credentials.password_hash().to_string(),
            webapi_key: credentials.api_key().to_string(),
            country_code: country_id,
            local_version,
        };
        let response: LoginResponse = match self.call("doLoginEnc", &request).await {
            Ok(response) => response,
            Err(AppError::Fault(fault)) => {
                return Err(AppError::Auth(AuthError::LoginRejected(fault)));
            }
            Err(e) => return Err(e),
        };
        Ok(Session::from_login(response, country_id))
    }

    fn session_handle(&self) -> Result<&str, AppError> {
        self.session
            .as_ref()
            .map(|session| session.handle.as_str())
            .ok_or(AppError::NotConnected)
    }

    /// Lists the unsold items of the logged user
    ///
    /// # Returns
    /// * `Ok(NotSoldItemsResponse)` - Possibly empty list of items
    /// * `Err(AppError::NotConnected)` - If called before `connect`
    /// * `Err(AppError)` - Transport failure or remote fault, unchanged
    pub async fn do_get_my_not_sold_items(&self) -> Result<NotSoldItemsResponse, AppError> {
        let request = GetMyNotSoldItemsRequest {
            session_id: self.session_handle()?.to_string(),
        };
        self.call("doGetMyNotSoldItems", &request).await
    }

    /// Relists a single item
    ///
    /// The duration is mapped through [`best_allowed_duration`] before sending.
    pub async fn do_sell_some_again(
        &self,
        options: SellAgainOptions,
    ) -> Result<SellAgainResponse, AppError> {
        let request = options.to_request(self.session_handle()?);
        debug!(
            "Relisting item {} for {} days",
            options.item_id, request.sell_auction_duration
        );
        self.call("doSellSomeAgain", &request).await
    }

    /// Relists every unsold item with the duration of its finished auction
    ///
    /// Items are relisted one at a time, starting immediately with sell option 1.
    /// The first failure stops the run and is returned as is.
    ///
    /// # Returns
    /// * `Ok(RepublishOutcome::NothingToDo)` - The service listed no unsold items
    /// * `Ok(RepublishOutcome::Relisted(_))` - One response per item, in order
    pub async fn republish_not_sold_items(&self) -> Result<RepublishOutcome, AppError> {
        let not_sold = self.do_get_my_not_sold_items().await?;

        if not_sold.is_empty() {
            info!("List of not sold items is empty right now. Skipping.");
            return Ok(RepublishOutcome::NothingToDo);
        }

        let mut responses = Vec::with_capacity(not_sold.not_sold_items_list.len());
        for item in &not_sold.not_sold_items_list {
            let response = self
                .do_sell_some_again(SellAgainOptions {
                    item_id: item.item_id,
                    duration: item.duration_days(),
                    sell_starting_time: IMMEDIATE_START,
                    sell_option: SellOption::DEFAULT,
                })
                .await?;
            responses.push(response);
        }

        info!("Republished {} not sold items", responses.len());
        Ok(RepublishOutcome::Relisted(responses))
    }

    /// Serializes `params`, invokes `method` and decodes the response
    async fn call<P: Serialize, R: DeserializeOwned>(
        &self,
        method: &str,
        params: &P,
    ) -> Result<R, AppError> {
        let params = match serde_json::to_value(params)? {
            Value::Object(map) => map,
            other => {
                return Err(AppError::InvalidInput(format!(
                    "parameters of {method} must be a structure, got {other}"
                )));
            }
        };

        let response = self.transport.invoke(method, params).await?;

        serde_json::from_value(Value::Object(response))
            .map_err(|e| AppError::Deserialization(format!("{method}: {e}")))
    }
}
