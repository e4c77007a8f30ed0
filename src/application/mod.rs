/// Credentials, version keys and session state
pub mod auth;
/// WebAPI client
pub mod client;
/// Application configuration module
pub mod config;
