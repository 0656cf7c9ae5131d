//! Shared request building and dispatch for the Travis CI API.
//!
//! # Design
//! `Client` holds a `ClientConfig` and a `Transport` and carries no mutable
//! state between calls. Every service operation follows the same three steps:
//! `url_with_options` turns a path and an options struct into a relative URL,
//! `new_request` / `new_json_request` produce an `HttpRequest` without
//! touching the network, and `execute` performs the round-trip and decodes
//! the JSON body. Failures in the first two steps return before the
//! transport is called.

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::config::{ClientConfig, MEDIA_TYPE};
use crate::env_vars::EnvironmentVariablesService;
use crate::error::ApiError;
use crate::hooks::HooksService;
use crate::http::{HttpMethod, HttpRequest, Response, Transport, UreqTransport};

/// Append the query string encoded from `options` to `path`.
///
/// Fields skipped by serde (`skip_serializing_if`) do not appear. When
/// nothing is left to encode, `path` is returned as is.
pub fn url_with_options<O>(path: &str, options: Option<&O>) -> Result<String, ApiError>
where
    O: Serialize + ?Sized,
{
    let Some(options) = options else {
        return Ok(path.to_string());
    };
    let query = serde_url_params::to_string(options).map_err(|e| ApiError::QueryEncoding(e.to_string()))?;
    if query.is_empty() {
        Ok(path.to_string())
    } else {
        Ok(format!("{path}?{query}"))
    }
}

/// Blocking client for the Travis CI API.
///
/// Generic over the transport so tests can record requests; production code
/// uses the default `UreqTransport`.
#[derive(Debug, Clone)]
pub struct Client<T = UreqTransport> {
    config: ClientConfig,
    transport: T,
}

impl Client<UreqTransport> {
    pub fn new(config: ClientConfig) -> Self {
        Self::with_transport(config, UreqTransport::new())
    }
}

impl<T: Transport> Client<T> {
    pub fn with_transport(mut config: ClientConfig, transport: T) -> Self {
        config.base_url = config.base_url.trim_end_matches('/').to_string();
        Self { config, transport }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn env_vars(&self) -> EnvironmentVariablesService<'_, T> {
        EnvironmentVariablesService::new(self)
    }

    pub fn hooks(&self) -> HooksService<'_, T> {
        HooksService::new(self)
    }

    /// Build a request without a body. `url` is relative to the base URL.
    pub fn new_request(
        &self,
        method: HttpMethod,
        url: &str,
        headers: &[(&str, &str)],
    ) -> Result<HttpRequest, ApiError> {
        Ok(self.build(method, url, None, headers))
    }

    /// Build a request whose body is `body` encoded as JSON.
    pub fn new_json_request<B>(
        &self,
        method: HttpMethod,
        url: &str,
        body: &B,
        headers: &[(&str, &str)],
    ) -> Result<HttpRequest, ApiError>
    where
        B: Serialize + ?Sized,
    {
        let body = serde_json::to_string(body).map_err(|e| ApiError::SerializationError(e.to_string()))?;
        Ok(self.build(method, url, Some(body), headers))
    }

    fn build(&self, method: HttpMethod, url: &str, body: Option<String>, extra: &[(&str, &str)]) -> HttpRequest {
        let mut headers = vec![
            ("accept".to_string(), MEDIA_TYPE.to_string()),
            ("user-agent".to_string(), self.config.user_agent.clone()),
        ];
        if let Some(token) = &self.config.token {
            headers.push(("authorization".to_string(), format!("token {token}")));
        }
        if body.is_some() {
            headers.push(("content-type".to_string(), "application/json".to_string()));
        }
        headers.extend(extra.iter().map(|(k, v)| (k.to_string(), v.to_string())));

        HttpRequest {
            method,
            url: format!("{}{url}", self.config.base_url),
            headers,
            body,
        }
    }

    /// Send `request` and decode a 2xx JSON body into `R`.
    pub fn execute<R: DeserializeOwned>(&self, request: HttpRequest) -> Result<Response<R>, ApiError> {
        log::debug!("{} {}", request.method.as_str(), request.url);
        let raw = self.transport.execute(&request)?;

        if !raw.is_success() {
            log::warn!(
                "{} {} answered with status {}",
                request.method.as_str(),
                request.url,
                raw.status
            );
            return Err(ApiError::HttpError { response: raw });
        }

        match serde_json::from_str(&raw.body) {
            Ok(value) => Ok(Response { value, raw }),
            Err(e) => Err(ApiError::DeserializationError {
                message: e.to_string(),
                response: raw,
            }),
        }
    }
}
