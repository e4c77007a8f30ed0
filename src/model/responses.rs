/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 16/10/26
******************************************************************************/
use crate::model::duration::auction_days;
use crate::model::serialization::{
    WireId, item_list, string_or_empty, string_or_i64, string_or_i64_opt,
};
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};

/// Response of `doQueryAllSysStatus`
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct SysStatusResponse {
    /// Status of every country known to the service
    #[serde(default, deserialize_with = "item_list")]
    pub sys_country_status: Vec<CountryStatus>,
}

/// Versions of one country, including the key needed by `doLoginEnc`
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CountryStatus {
    /// Country id
    #[serde(deserialize_with = "string_or_i64")]
    pub country_id: i64,
    /// Version key passed as `localVersion` on login
    #[serde(deserialize_with = "string_or_i64")]
    pub ver_key: i64,
    /// Program version
    #[serde(default, deserialize_with = "string_or_empty")]
    pub program_version: String,
    /// Category tree version
    #[serde(default, deserialize_with = "string_or_empty")]
    pub cats_version: String,
    /// API version
    #[serde(default, deserialize_with = "string_or_empty")]
    pub api_version: String,
    /// Attribute version
    #[serde(default, deserialize_with = "string_or_empty")]
    pub attrib_version: String,
    /// Sell form version
    #[serde(default, deserialize_with = "string_or_empty")]
    pub form_sell_version: String,
    /// Site version
    #[serde(default, deserialize_with = "string_or_empty")]
    pub site_version: String,
}

/// Response of `doLoginEnc`
#[derive(Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    /// Session handle required by every later call
    pub session_handle_part: String,
    /// Id of the logged user
    #[serde(default, deserialize_with = "string_or_i64_opt")]
    pub user_id: Option<i64>,
    /// Server time at login, unix timestamp
    #[serde(default, deserialize_with = "string_or_i64_opt")]
    pub server_time: Option<i64>,
}

impl std::fmt::Debug for LoginResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoginResponse")
            .field("session_handle_part", &"<redacted>")
            .field("user_id", &self.user_id)
            .field("server_time", &self.server_time)
            .finish()
    }
}

/// Response of `doGetMyNotSoldItems`
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct NotSoldItemsResponse {
    /// Number of unsold items reported by the service
    #[serde(default, deserialize_with = "string_or_i64_opt")]
    pub not_sold_items_counter: Option<i64>,
    /// The unsold items, empty when the service returns none
    #[serde(default, deserialize_with = "item_list")]
    pub not_sold_items_list: Vec<NotSoldItem>,
}

impl NotSoldItemsResponse {
    /// Whether there is nothing to republish
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.not_sold_items_list.is_empty()
    }
}

/// One unsold item
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct NotSoldItem {
    /// Item id
    #[serde(deserialize_with = "string_or_i64")]
    pub item_id: i64,
    /// Title
    #[serde(default, deserialize_with = "string_or_empty")]
    pub item_title: String,
    /// Auction start, unix timestamp
    #[serde(deserialize_with = "string_or_i64")]
    pub item_start_time: i64,
    /// Auction end, unix timestamp
    #[serde(deserialize_with = "string_or_i64")]
    pub item_end_time: i64,
}

impl NotSoldItem {
    /// Length of the finished auction in whole days
    #[must_use]
    pub fn duration_days(&self) -> i64 {
        auction_days(self.item_start_time, self.item_end_time)
    }
}

/// Response of `doSellSomeAgain`
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct SellAgainResponse {
    /// Items relisted successfully
    #[serde(default, deserialize_with = "item_list")]
    pub items_sell_again: Vec<SellAgainItem>,
    /// Items the service refused to relist
    #[serde(default, deserialize_with = "item_list")]
    pub items_sell_failed: Vec<SellFailedItem>,
    /// Ids the service did not find
    #[serde(default, deserialize_with = "item_list")]
    pub items_sell_not_found: Vec<WireId>,
}

impl SellAgainResponse {
    /// True when every requested item was relisted
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.items_sell_failed.is_empty() && self.items_sell_not_found.is_empty()
    }
}

/// A relisted item
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SellAgainItem {
    /// Id of the source item
    #[serde(deserialize_with = "string_or_i64")]
    pub sell_item_id: i64,
    /// Service message (cost information)
    #[serde(default, deserialize_with = "string_or_empty")]
    pub sell_item_info: String,
    /// Local id assigned to the relist
    #[serde(default, deserialize_with = "string_or_i64_opt")]
    pub sell_item_local_id: Option<i64>,
}

/// An item that could not be relisted
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SellFailedItem {
    /// Id of the item
    #[serde(deserialize_with = "string_or_i64")]
    pub sell_item_id: i64,
    /// Reason given by the service
    #[serde(default, deserialize_with = "string_or_empty")]
    pub sell_fault_string: String,
}
