/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 16/10/26
******************************************************************************/

//! # Allegro WebAPI Prelude
//!
//! Brings the commonly used types into scope with a single import.
//!
//! ```rust
//! use allegro_webapi::prelude::*;
//!
//! assert_eq!(best_allowed_duration(9), 3);
//! ```

// ============================================================================
// CORE CONFIGURATION AND SETUP
// ============================================================================

/// Configuration of the client
pub use crate::application::config::{Config, Credentials, Environment, SoapConfig};

/// Library version information
pub use crate::{VERSION, version};

// ============================================================================
// ERROR HANDLING
// ============================================================================

/// Error types
pub use crate::error::{AppError, AuthError, SoapFault};

// ============================================================================
// CLIENT AND SESSION
// ============================================================================

/// WebAPI client
pub use crate::application::client::{RepublishOutcome, WebApiClient};

/// Authentication state
pub use crate::application::auth::{HashedCredentials, Session, VersionKeys, hash_password};

// ============================================================================
// TRANSPORT
// ============================================================================

/// Transport trait and its HTTP implementation
pub use crate::transport::{SoapClient, SoapTransport};

// ============================================================================
// MODELS
// ============================================================================

/// Request models
pub use crate::model::requests::{SellAgainOptions, SellOption};

/// Response models
pub use crate::model::responses::{
    CountryStatus, LoginResponse, NotSoldItem, NotSoldItemsResponse, SellAgainItem,
    SellAgainResponse, SellFailedItem, SysStatusResponse,
};

/// Duration helpers
pub use crate::model::duration::{auction_days, best_allowed_duration};

// ============================================================================
// UTILITIES
// ============================================================================

/// Logging utilities
pub use crate::utils::logger::setup_logger;

// ============================================================================
// CONSTANTS
// ============================================================================

/// Global constants
pub use crate::constants::*;

// ============================================================================
// RE-EXPORTS FROM EXTERNAL CRATES
// ============================================================================

/// Re-export commonly used external types
pub use async_trait::async_trait;
pub use serde::{Deserialize, Serialize};
pub use tracing::{debug, error, info, warn};
