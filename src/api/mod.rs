//! Remote Data Gateway
//!
//! Typed wrappers around the REST API, organized by resource. Every call
//! makes exactly one request and resolves to `Result<Option<T>, ApiError>`:
//!
//! - `Ok(Some(data))`: success and the payload matched the expected shape
//! - `Ok(None)`: no data. The payload did not match, the request never got
//!   a response, or the server failed without an `{"error": ...}` body
//! - `Err(ApiError)`: the server rejected the request with a message

mod error;
mod transport;
mod project;
mod task;
mod team;
mod auth;

#[cfg(test)]
pub(crate) mod testing;

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use serde::de::DeserializeOwned;

pub use error::{ApiError, TransportError};
pub use transport::{ApiRequest, ApiResponse, FetchTransport, Method, Transport};

use crate::config::ClientConfig;

pub type ApiResult<T> = Result<Option<T>, ApiError>;

/// Characters escaped inside a single path segment
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// Encode an opaque id for use as a path segment
pub(crate) fn segment(id: &str) -> String {
    utf8_percent_encode(id, PATH_SEGMENT).to_string()
}

/// API client over a transport
#[derive(Debug, Clone)]
pub struct ApiClient<T = FetchTransport> {
    transport: T,
}

/// Browser client
pub type Api = ApiClient<FetchTransport>;

impl Api {
    pub fn from_config(config: &ClientConfig) -> Self {
        ApiClient::new(FetchTransport::new(config.clone()))
    }
}

impl<T: Transport> ApiClient<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    /// Request whose success payload must deserialize into `R`
    pub(crate) async fn fetch<R: DeserializeOwned>(&self, request: Option<ApiRequest>) -> ApiResult<R> {
        self.execute(request, decode_json).await
    }

    /// Request whose success payload is a confirmation message
    pub(crate) async fn send_message(&self, request: Option<ApiRequest>) -> ApiResult<String> {
        self.execute(request, decode_message).await
    }

    async fn execute<R>(&self, request: Option<ApiRequest>, decode: fn(&str) -> Option<R>) -> ApiResult<R> {
        let Some(request) = request else { return Ok(None) };
        let method = request.method;
        let path = request.path.clone();
        tracing::debug!(method = method.as_str(), path = %path, "api request");

        let outcome = self.transport.send(request).await;
        interpret(method, &path, outcome, decode)
    }
}

fn decode_json<R: DeserializeOwned>(body: &str) -> Option<R> {
    match serde_json::from_str(body) {
        Ok(value) => Some(value),
        Err(e) => {
            tracing::warn!(error = %e, "response did not match the expected shape");
            None
        }
    }
}

/// Messages come back either as a JSON string or as plain text
fn decode_message(body: &str) -> Option<String> {
    match serde_json::from_str::<String>(body) {
        Ok(msg) => Some(msg),
        Err(_) => Some(body.trim().to_string()),
    }
}

/// Classify a transport outcome into the gateway's result
fn interpret<R>(
    method: Method,
    path: &str,
    outcome: Result<ApiResponse, TransportError>,
    decode: fn(&str) -> Option<R>,
) -> ApiResult<R> {
    let response = match outcome {
        Ok(response) => response,
        Err(e) => {
            tracing::warn!(method = method.as_str(), path = %path, error = %e, "request failed without a response");
            return Ok(None);
        }
    };

    if response.is_success() {
        return Ok(decode(&response.body));
    }

    match error::server_message(&response.body) {
        Some(msg) => {
            tracing::info!(method = method.as_str(), path = %path, status = response.status, "request rejected: {}", msg);
            Err(ApiError::Request(msg))
        }
        None => {
            tracing::warn!(method = method.as_str(), path = %path, status = response.status, "request failed without a server message");
            Ok(None)
        }
    }
}
