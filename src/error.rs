/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 16/10/26
******************************************************************************/

//! Error types for the Allegro WebAPI client
//!
//! Remote failures are never translated: a SOAP fault keeps the code and the
//! message exactly as the service sent them.

use reqwest::StatusCode;
use std::fmt;
use std::io;

/// A SOAP fault returned by the remote service
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SoapFault {
    /// Fault code (`faultcode`), e.g. `ERR_USER_PASSWD`
    pub code: String,
    /// Human readable message (`faultstring`)
    pub message: String,
}

impl SoapFault {
    /// Creates a new fault from its code and message
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for SoapFault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code, self.message)
    }
}

/// Failures of the `connect` sequence
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// The version-key query was rejected, e.g. for an invalid WebAPI key
    StatusRejected(SoapFault),
    /// The login call was rejected by the service
    LoginRejected(SoapFault),
    /// The status query returned no version key for the configured country
    MissingVersionKey(i32),
}

impl fmt::Display for AuthError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AuthError::StatusRejected(fault) => write!(f, "status query rejected: {fault}"),
            AuthError::LoginRejected(fault) => write!(f, "login rejected: {fault}"),
            AuthError::MissingVersionKey(country_id) => {
                write!(f, "no version key for country {country_id}")
            }
        }
    }
}

/// Main error type of the crate
#[derive(Debug)]
pub enum AppError {
    /// HTTP transport error
    Network(reqwest::Error),
    /// I/O error
    Io(io::Error),
    /// JSON (de)serialization error
    Json(serde_json::Error),
    /// Malformed SOAP envelope
    Xml(String),
    /// Fault returned by the remote service
    Fault(SoapFault),
    /// Authentication failure during connect
    Auth(AuthError),
    /// A session-bound call was made before `connect` succeeded
    NotConnected,
    /// Non-success HTTP status without a SOAP fault
    Unexpected(StatusCode),
    /// Local argument validation failed
    InvalidInput(String),
    /// The response did not have the expected shape
    Deserialization(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Network(e) => write!(f, "network error: {e}"),
            AppError::Io(e) => write!(f, "io error: {e}"),
            AppError::Json(e) => write!(f, "json error: {e}"),
            AppError::Xml(msg) => write!(f, "xml error: {msg}"),
            AppError::Fault(fault) => write!(f, "soap fault {fault}"),
            AppError::Auth(e) => write!(f, "authentication error: {e}"),
            AppError::NotConnected => write!(f, "not connected"),
            AppError::Unexpected(status) => write!(f, "unexpected status: {status}"),
            AppError::InvalidInput(msg) => write!(f, "invalid input: {msg}"),
            AppError::Deserialization(msg) => write!(f, "deserialization error: {msg}"),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Network(e) => Some(e),
            AppError::Io(e) => Some(e),
            AppError::Json(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for AppError {
    fn from(error: reqwest::Error) -> Self {
        AppError::Network(error)
    }
}

impl From<io::Error> for AppError {
    fn from(error: io::Error) -> Self {
        AppError::Io(error)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(error: serde_json::Error) -> Self {
        AppError::Json(error)
    }
}

impl From<SoapFault> for AppError {
    fn from(fault: SoapFault) -> Self {
        AppError::Fault(fault)
    }
}

impl From<AuthError> for AppError {
    fn from(error: AuthError) -> Self {
        AppError::Auth(error)
    }
}

impl AppError {
    /// Returns the remote fault carried by this error, if any
    #[must_use]
    pub fn fault(&self) -> Option<&SoapFault> {
        match self {
            AppError::Fault(fault)
            | AppError::Auth(AuthError::StatusRejected(fault))
            | AppError::Auth(AuthError::LoginRejected(fault)) => Some(fault),
            _ => None,
        }
    }
}
