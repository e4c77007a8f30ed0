use allegro_webapi::error::{AppError, AuthError, SoapFault};
use reqwest::StatusCode;
use std::error::Error;

#[test]
fn test_app_error_display_not_connected() {
    let error = AppError::NotConnected;
    assert_eq!(error.to_string(), "not connected");
}

#[test]
fn test_app_error_display_fault() {
    let error = AppError::Fault(SoapFault::new("ERR_INVALID_ITEM_ID", "Invalid item"));
    assert_eq!(error.to_string(), "soap fault ERR_INVALID_ITEM_ID: Invalid item");
}

#[test]
fn test_app_error_display_login_rejected() {
    let error = AppError::Auth(AuthError::LoginRejected(SoapFault::new(
        "ERR_USER_PASSWD",
        "Wrong password",
    )));
    assert_eq!(
        error.to_string(),
        "authentication error: login rejected: ERR_USER_PASSWD: Wrong password"
    );
}

#[test]
fn test_app_error_display_status_rejected() {
    let error: AppError =
        AuthError::StatusRejected(SoapFault::new("ERR_WEBAPI_KEY", "Invalid key")).into();
    assert_eq!(
        error.to_string(),
        "authentication error: status query rejected: ERR_WEBAPI_KEY: Invalid key"
    );
}

#[test]
fn test_app_error_display_missing_version_key() {
    let error: AppError = AuthError::MissingVersionKey(56).into();
    assert_eq!(
        error.to_string(),
        "authentication error: no version key for country 56"
    );
}

#[test]
fn test_app_error_display_unexpected() {
    let error = AppError::Unexpected(StatusCode::SERVICE_UNAVAILABLE);
    assert!(error.to_string().contains("503"));
}

#[test]
fn test_app_error_display_invalid_input() {
    let error = AppError::InvalidInput("sell option must be 1, 2 or 3, got 4".to_string());
    assert_eq!(
        error.to_string(),
        "invalid input: sell option must be 1, 2 or 3, got 4"
    );
}

#[test]
fn test_app_error_display_xml() {
    let error = AppError::Xml("missing SOAP body".to_string());
    assert_eq!(error.to_string(), "xml error: missing SOAP body");
}

#[test]
fn test_app_error_from_serde() {
    let serde_error = serde_json::from_str::<serde_json::Value>("{oops}").unwrap_err();
    let app_error: AppError = serde_error.into();

    match &app_error {
        AppError::Json(_) => (),
        _ => panic!("Expected Json error"),
    }
    assert!(app_error.source().is_some());
}

#[test]
fn test_app_error_from_io() {
    let io_error = std::io::Error::other("test");
    let app_error: AppError = io_error.into();

    match app_error {
        AppError::Io(_) => (),
        _ => panic!("Expected Io error"),
    }
}

#[test]
fn test_app_error_fault_accessor() {
    let fault = SoapFault::new("ERR_X", "x");
    assert_eq!(AppError::Fault(fault.clone()).fault(), Some(&fault));
    assert_eq!(
        AppError::Auth(AuthError::LoginRejected(fault.clone())).fault(),
        Some(&fault)
    );
    assert_eq!(
        AppError::Auth(AuthError::StatusRejected(fault.clone())).fault(),
        Some(&fault)
    );
    assert_eq!(AppError::NotConnected.fault(), None);
}
