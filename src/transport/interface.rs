use crate::error::AppError;
use async_trait::async_trait;
use serde_json::{Map, Value};

/// Transport boundary of the client
///
/// Implementations carry one remote operation per call: they receive the
/// operation name and its parameters, in wire order, and return the decoded
/// response body. Faults must surface as [`AppError::Fault`] with the code and
/// message untouched.
#[async_trait]
pub trait SoapTransport: Send + Sync {
    /// Invokes `method` with `params` and returns the decoded response
    async fn invoke(
        &self,
        method: &str,
        params: Map<String, Value>,
    ) -> Result<Map<String, Value>, AppError>;
}

#[async_trait]
impl<T: SoapTransport + ?Sized> SoapTransport for Box<T> {
    async fn invoke(
        &self,
        method: &str,
        params: Map<String, Value>,
    ) -> Result<Map<String, Value>, AppError> {
        (**self).invoke(method, params).await
    }
}
