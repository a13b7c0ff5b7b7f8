//! Client for the airfoil API.
//!
//! Each call is exactly one JSON `POST`: no retries, no timeout, no
//! cancellation. The HTTP exchange itself sits behind [`Transport`]; in the
//! browser that is [`FetchTransport`] on top of `gloo-net`.

use serde::Serialize;
use serde_json::Value;

use crate::airfoil::{AirfoilReply, AirfoilRequest};
use crate::config::Config;
use crate::error::ApiError;
use crate::reynolds::{self, ReynoldsReply, ReynoldsRequest};

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

/// Status and body text of an HTTP response.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

impl RawResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Sends a JSON body and returns whatever came back.
#[allow(async_fn_in_trait)]
pub trait Transport {
    async fn post_json(&self, url: &str, body: String) -> Result<RawResponse, ApiError>;
}

/// [`Transport`] over the browser `fetch` API.
#[derive(Clone, Copy, Debug, Default)]
pub struct FetchTransport;

impl Transport for FetchTransport {
    async fn post_json(&self, url: &str, body: String) -> Result<RawResponse, ApiError> {
        let response = gloo_net::http::Request::post(url)
            .header("Content-Type", "application/json")
            .body(body)
            .map_err(|e| ApiError::Request(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        Ok(RawResponse { status, body })
    }
}

pub struct ApiClient<T> {
    config: Config,
    transport: T,
}

impl<T: Transport> ApiClient<T> {
    pub fn new(config: Config, transport: T) -> Self {
        Self { config, transport }
    }

    /// Generate airfoil coordinates.
    pub async fn generate_airfoil(
        &self,
        request: &AirfoilRequest,
    ) -> Result<AirfoilReply, ApiError> {
        let response = self.post(request.path(), request).await?;
        AirfoilReply::from_body(&response.body)
    }

    /// Compute a Reynolds number.
    pub async fn compute_reynolds(
        &self,
        request: &ReynoldsRequest,
    ) -> Result<ReynoldsReply, ApiError> {
        let response = self.post(reynolds::PATH, request).await?;
        Ok(ReynoldsReply::from_body(&response.body))
    }

    async fn post<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<RawResponse, ApiError> {
        let url = self.config.endpoint(path);
        let body = serde_json::to_string(body).map_err(|e| ApiError::Request(e.to_string()))?;
        log::debug!("POST {url} {body}");

        let response = self.transport.post_json(&url, body).await?;
        if response.is_success() {
            Ok(response)
        } else {
            Err(ApiError::Status {
                status: response.status,
                detail: error_detail(&response.body),
            })
        }
    }
}

/// The `detail` field of an error body.
///
/// A list of validation errors is flattened to its `msg` entries.
pub fn error_detail(body: &str) -> Option<String> {
    let Ok(Value::Object(mut fields)) = serde_json::from_str::<Value>(body) else {
        return None;
    };
    match fields.remove("detail")? {
        Value::Null => None,
        Value::String(detail) => Some(detail),
        Value::Array(entries) => {
            let messages = entries
                .iter()
                .filter_map(|entry| entry.get("msg").and_then(Value::as_str))
                .collect::<Vec<_>>();
            if messages.is_empty() {
                None
            } else {
                Some(messages.join("; "))
            }
        }
        other => Some(other.to_string()),
    }
}
