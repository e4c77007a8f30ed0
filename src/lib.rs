/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 16/10/26
******************************************************************************/

//! # Allegro WebAPI client
//!
//! A thin async client for the Allegro WebAPI SOAP service. It logs a user in,
//! keeps the per-country version keys and the session, and offers a few calls
//! around unsold items.
//!
//! ## Usage
//!
//! ```ignore
//! use allegro_webapi::prelude::*;
//!
//! setup_logger();
//! let config = Config::new();
//! let mut client = WebApiClient::from_config(&config)?;
//! client.connect_with(&config.credentials).await?;
//!
//! match client.republish_not_sold_items().await? {
//!     RepublishOutcome::Relisted(responses) => info!("{} items relisted", responses.len()),
//!     RepublishOutcome::NothingToDo => info!("nothing to republish"),
//! }
//! ```
//!
//! ## Configuration
//!
//! `Config::new()` reads `ALLEGRO_LOGIN`, `ALLEGRO_PASSWORD`, `ALLEGRO_API_KEY`,
//! `ALLEGRO_SANDBOX`, `ALLEGRO_COUNTRY_ID`, `ALLEGRO_ENDPOINT_URL` and
//! `ALLEGRO_TIMEOUT`, from the environment or a `.env` file.

/// Client, configuration and session state
pub mod application;
/// Global constants
pub mod constants;
/// Error types
pub mod error;
/// Request and response models
pub mod model;
/// Common re-exports
pub mod prelude;
/// SOAP transport
pub mod transport;
/// Utilities
pub mod utils;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Returns the crate version
#[must_use]
pub fn version() -> &'static str {
    VERSION
}
