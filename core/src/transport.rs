//! Executes `HttpRequest` values against the network.
//!
//! `UreqTransport` disables ureq's status-code-as-error behavior so 4xx/5xx
//! responses come back as data and the parsers in `client` interpret them.
//! Transport failures are split into "sent but nothing came back" and
//! "never sent".

use thiserror::Error;
use ureq::{Agent, RequestBuilder};

use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};

#[derive(Debug, Error)]
pub enum TransportError {
    /// Connection refused, unknown host, timeout or broken socket.
    #[error("server unreachable: {0}")]
    Unreachable(String),

    /// The request could not be constructed or dispatched.
    #[error("{0}")]
    Local(String),
}

impl From<TransportError> for ApiError {
    fn from(err: TransportError) -> Self {
        match err {
            TransportError::Unreachable(_) => ApiError::Unreachable,
            TransportError::Local(msg) => ApiError::LocalFailure(msg),
        }
    }
}

/// Performs one HTTP round-trip. Implementations must return non-2xx
/// responses as `Ok` so status interpretation stays in the parsers.
pub trait Transport {
    fn execute(&self, request: HttpRequest) -> Result<HttpResponse, TransportError>;
}

/// Blocking transport backed by a shared `ureq::Agent`.
#[derive(Clone)]
pub struct UreqTransport {
    agent: Agent,
}

impl UreqTransport {
    pub fn new() -> Self {
        let agent = Agent::config_builder()
            .http_status_as_error(false)
            .build()
            .new_agent();
        Self { agent }
    }
}

impl Default for UreqTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl Transport for UreqTransport {
    fn execute(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        let HttpRequest {
            method,
            path,
            headers,
            body,
        } = request;

        let result = match method {
            HttpMethod::Get => with_headers(self.agent.get(&path), &headers).call(),
            HttpMethod::Delete => with_headers(self.agent.delete(&path), &headers).call(),
            HttpMethod::Post => {
                let builder = with_headers(self.agent.post(&path), &headers);
                match body {
                    Some(body) => builder.send(body.as_bytes()),
                    None => builder.send_empty(),
                }
            }
        };

        let mut response = result.map_err(classify)?;
        let status = response.status().as_u16();
        let headers = response
            .headers()
            .iter()
            .filter_map(|(name, value)| {
                value
                    .to_str()
                    .ok()
                    .map(|v| (name.as_str().to_string(), v.to_string()))
            })
            .collect();
        let body = response.body_mut().read_to_string().map_err(classify)?;

        Ok(HttpResponse {
            status,
            headers,
            body,
        })
    }
}

fn with_headers<B>(mut builder: RequestBuilder<B>, headers: &[(String, String)]) -> RequestBuilder<B> {
    for (name, value) in headers {
        builder = builder.header(name.as_str(), value.as_str());
    }
    builder
}

fn classify(err: ureq::Error) -> TransportError {
    match err {
        ureq::Error::Io(_)
        | ureq::Error::ConnectionFailed
        | ureq::Error::HostNotFound
        | ureq::Error::Timeout(_) => TransportError::Unreachable(err.to_string()),
        other => TransportError::Local(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unreachable_maps_to_fixed_variant() {
        let err: ApiError = TransportError::Unreachable("connection refused".to_string()).into();
        assert_eq!(err, ApiError::Unreachable);
    }

    #[test]
    fn local_keeps_message() {
        let err: ApiError = TransportError::Local("bad uri".to_string()).into();
        assert_eq!(err, ApiError::LocalFailure("bad uri".to_string()));
    }

    #[test]
    fn malformed_url_is_local_failure() {
        let transport = UreqTransport::new();
        let err = transport
            .execute(HttpRequest {
                method: HttpMethod::Get,
                path: "not a url".to_string(),
                headers: Vec::new(),
                body: None,
            })
            .unwrap_err();
        assert!(matches!(err, TransportError::Local(_)), "got {err:?}");
    }

    #[test]
    fn broken_body_read_is_unreachable() {
        let reset = std::io::Error::new(std::io::ErrorKind::ConnectionReset, "reset");
        assert!(matches!(classify(ureq::Error::Io(reset)), TransportError::Unreachable(_)));
    }

    #[test]
    fn oversized_body_is_local() {
        let err = classify(ureq::Error::BodyExceedsLimit(10 * 1024 * 1024));
        assert!(matches!(err, TransportError::Local(_)), "got {err:?}");
        assert_eq!(ApiError::from(err).status(), None);
    }
}
