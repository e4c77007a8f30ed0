/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 16/10/26
******************************************************************************/

//! Authentication state of the Allegro WebAPI client
//!
//! This module holds what `connect` produces:
//! - the credentials, with the password already hashed for `doLoginEnc`
//! - the per-country version keys from `doQueryAllSysStatus`
//! - the session returned by login

use crate::model::responses::{CountryStatus, LoginResponse};
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use sha2::{Digest, Sha256};
use std::collections::HashMap;
use std::fmt;

/// Hashes a raw password the way `doLoginEnc` expects: base64(sha256(password))
///
/// The transform is unsalted; it exists for wire compatibility, not secrecy.
#[must_use]
pub fn hash_password(raw_password: &str) -> String {
    let digest = Sha256::digest(raw_password.as_bytes());
    STANDARD.encode(digest)
}

/// Credentials used by `connect`, immutable once created
#[derive(Clone, PartialEq, Eq)]
pub struct HashedCredentials {
    login: String,
    password_hash: String,
    api_key: String,
}

impl HashedCredentials {
    /// Hashes `raw_password` and stores it with the login and API key
    pub fn new(login: &str, raw_password: &str, api_key: &str) -> Self {
        Self {
            login: login.to_string(),
            password_hash: hash_password(raw_password),
            api_key: api_key.to_string(),
        }
    }

    /// User login
    #[must_use]
    pub fn login(&self) -> &str {
        &self.login
    }

    /// Hashed password sent as `userHashPassword`
    #[must_use]
    pub fn password_hash(&self) -> &str {
        &self.password_hash
    }

    /// WebAPI key
    #[must_use]
    pub fn api_key(&self) -> &str {
        &self.api_key
    }
}

impl fmt::Debug for HashedCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HashedCredentials")
            .field("login", &self.login)
            .field("password_hash", &"<redacted>")
            .field("api_key", &"<redacted>")
            .finish()
    }
}

/// Version records by country id
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VersionKeys {
    by_country: HashMap<i64, CountryStatus>,
}

impl VersionKeys {
    /// Indexes status records by their country id; later duplicates win
    #[must_use]
    pub fn from_statuses(statuses: Vec<CountryStatus>) -> Self {
        let by_country = statuses
            .into_iter()
            .map(|status| (status.country_id, status))
            .collect();
        Self { by_country }
    }

    /// Full record of a country
    #[must_use]
    pub fn get(&self, country_id: i32) -> Option<&CountryStatus> {
        self.by_country.get(&i64::from(country_id))
    }

    /// Version key of a country, sent as `localVersion` on login
    #[must_use]
    pub fn ver_key(&self, country_id: i32) -> Option<i64> {
        self.get(country_id).map(|status| status.ver_key)
    }

    /// Number of countries
    #[must_use]
    pub fn len(&self) -> usize {
        self.by_country.len()
    }

    /// Whether the table is empty (before the first connect)
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.by_country.is_empty()
    }
}

/// An open WebAPI session
#[derive(Clone, PartialEq, Eq)]
pub struct Session {
    /// Handle required by every authenticated call (`sessionHandlePart`)
    pub handle: String,
    /// Id of the logged user, when the service reports it
    pub user_id: Option<i64>,
    /// Server time at login
    pub server_time: Option<i64>,
    /// Country the session was opened for
    pub country_id: i32,
}

impl Session {
    /// Builds the session from the login response
    #[must_use]
    pub fn from_login(response: LoginResponse, country_id: i32) -> Self {
        Self {
            handle: response.session_handle_part,
            user_id: response.user_id,
            server_time: response.server_time,
            country_id,
        }
    }
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("handle", &"<redacted>")
            .field("user_id", &self.user_id)
            .field("server_time", &self.server_time)
            .field("country_id", &self.country_id)
            .finish()
    }
}
