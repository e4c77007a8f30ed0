/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 16/10/26
******************************************************************************/
/// Auction duration helpers
pub mod duration;
/// Request models for SOAP calls
pub mod requests;
/// Response models from SOAP calls
pub mod responses;
/// Lenient serde helpers for SOAP-decoded values
pub mod serialization;
