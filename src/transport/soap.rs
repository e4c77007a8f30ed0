/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 16/10/26
******************************************************************************/

//! reqwest-backed SOAP transport
//!
//! One POST per operation, no retries: whatever the service or the network
//! returns is handed back to the caller.

use crate::application::config::SoapConfig;
use crate::constants::USER_AGENT;
use crate::error::AppError;
use crate::transport::envelope::{build_request, parse_response};
use crate::transport::interface::SoapTransport;
use async_trait::async_trait;
use reqwest::Client;
use reqwest::header::CONTENT_TYPE;
use serde_json::{Map, Value};
use std::time::Duration;
use tracing::{debug, error, warn};

/// SOAP client bound to one endpoint of the Allegro WebAPI
#[derive(Debug, Clone)]
pub struct SoapClient {
    http_client: Client,
    endpoint: String,
    namespace: String,
}

impl SoapClient {
    /// Creates a client for the endpoint described by `config`
    ///
    /// # Returns
    /// * `Ok(SoapClient)` - Client ready to send requests
    /// * `Err(AppError)` - If the HTTP client cannot be built
    pub fn new(config: &SoapConfig) -> Result<Self, AppError> {
        let http_client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(config.timeout))
            .build()?;

        Ok(Self {
            http_client,
            endpoint: config.endpoint(),
            namespace: config.namespace(),
        })
    }

    /// URL requests are posted to
    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Namespace of the request elements
    #[must_use]
    pub fn namespace(&self) -> &str {
        &self.namespace
    }
}

#[async_trait]
impl SoapTransport for SoapClient {
    async fn invoke(
        &self,
        method: &str,
        params: Map<String, Value>,
    ) -> Result<Map<String, Value>, AppError> {
        let body = build_request(&self.namespace, method, &params)?;

        debug!("POST {} ({})", self.endpoint, method);

        let response = self
            .http_client
            .post(&self.endpoint)
            .header(CONTENT_TYPE, "text/xml; charset=utf-8")
            .header("SOAPAction", format!("\"#{method}\""))
            .body(body)
            .send()
            .await?;

        let status = response.status();
        debug!("Response status for {}: {}", method, status);
        let text = response.text().await?;

        match parse_response(&text) {
            Ok(content) if status.is_success() => Ok(content),
            Err(AppError::Fault(fault)) => {
                warn!("{} returned fault {}", method, fault);
                Err(AppError::Fault(fault))
            }
            Ok(_) => {
                error!("{} failed with status {}: {}", method, status, text);
                Err(AppError::Unexpected(status))
            }
            Err(e) if !status.is_success() => {
                error!("{} failed with status {}: {}", method, status, e);
                Err(AppError::Unexpected(status))
            }
            Err(e) => Err(e),
        }
    }
}
