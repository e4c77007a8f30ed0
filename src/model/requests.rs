/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 16/10/26
******************************************************************************/

//! Parameter structs of the remote operations
//!
//! Field order is the element order of the WSDL sequence and must not change.

use crate::error::AppError;
use crate::model::duration::best_allowed_duration;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Parameters of `doQueryAllSysStatus`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct QueryAllSysStatusRequest {
    /// Country the query is issued for
    pub country_id: i32,
    /// WebAPI key
    pub webapi_key: String,
}

/// Parameters of `doLoginEnc`
#[derive(Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct LoginEncRequest {
    /// User login
    pub user_login: String,
    /// base64(sha256(password))
    pub user_hash_password: String,
    /// WebAPI key
    pub webapi_key: String,
    /// Country of the session
    pub country_code: i32,
    /// Version key of that country, from `doQueryAllSysStatus`
    pub local_version: i64,
}

impl fmt::Debug for LoginEncRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginEncRequest")
            .field("user_login", &self.user_login)
            .field("user_hash_password", &"<redacted>")
            .field("country_code", &self.country_code)
            .field("local_version", &self.local_version)
            .finish()
    }
}

/// Parameters of `doGetMyNotSoldItems`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct GetMyNotSoldItemsRequest {
    /// Session handle
    pub session_id: String,
}

/// Item ids to relist, serialized as repeated `item` elements
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SellItemsArray {
    /// Ids of the items
    pub item: Vec<i64>,
}

/// Parameters of `doSellSomeAgain`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SellSomeAgainRequest {
    /// Session handle
    pub session_handle: String,
    /// Items to relist
    pub sell_items_array: SellItemsArray,
    /// Duration in days, always one of the allowed durations
    pub sell_auction_duration: u8,
    /// Unix timestamp of the start, 0 for immediately
    pub sell_starting_time: i64,
    /// Relisting mode
    pub sell_options: SellOption,
}

/// Relisting mode of `doSellSomeAgain`
///
/// The meaning of each code is defined by the service; the client only checks
/// the range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct SellOption(u8);

impl SellOption {
    /// Code 1, used when republishing unsold items
    pub const DEFAULT: SellOption = SellOption(1);

    /// Creates a sell option, accepting codes 1 to 3
    pub fn new(code: u8) -> Result<Self, AppError> {
        match code {
            1..=3 => Ok(SellOption(code)),
            other => Err(AppError::InvalidInput(format!(
                "sell option must be 1, 2 or 3, got {other}"
            ))),
        }
    }

    /// Numeric code sent to the service
    #[must_use]
    pub fn code(self) -> u8 {
        self.0
    }
}

impl Default for SellOption {
    fn default() -> Self {
        SellOption::DEFAULT
    }
}

impl TryFrom<u8> for SellOption {
    type Error = AppError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        SellOption::new(code)
    }
}

impl From<SellOption> for u8 {
    fn from(option: SellOption) -> Self {
        option.0
    }
}

/// Options of a single relist, as accepted by `WebApiClient::do_sell_some_again`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SellAgainOptions {
    /// Item to relist
    pub item_id: i64,
    /// Requested duration in days, mapped through [`best_allowed_duration`]
    pub duration: i64,
    /// Unix timestamp of the start, 0 for immediately
    pub sell_starting_time: i64,
    /// Relisting mode
    pub sell_option: SellOption,
}

impl SellAgainOptions {
    /// Builds the wire request for the given session
    #[must_use]
    pub fn to_request(&self, session_handle: &str) -> SellSomeAgainRequest {
        SellSomeAgainRequest {
            session_handle: session_handle.to_string(),
            sell_items_array: SellItemsArray {
                item: vec![self.item_id],
            },
            sell_auction_duration: best_allowed_duration(self.duration),
            sell_starting_time: self.sell_starting_time,
            sell_options: self.sell_option,
        }
    }
}
