//! `reqwest` transport for the portal API.

#[cfg(test)]
#[path = "transport_test.rs"]
mod transport_test;

use portal::api::{ApiRequest, ApiResponse, Method, Transport, TransportError};
use reqwest::header::AUTHORIZATION;

/// Strip trailing slashes and require an http(s) scheme. `None` when the URL
/// cannot be used as an API root.
pub fn normalize_base_url(raw: &str) -> Option<String> {
    let trimmed = raw.trim().trim_end_matches('/');
    let rest = trimmed.strip_prefix("http://").or_else(|| trimmed.strip_prefix("https://"))?;
    if rest.is_empty() || rest.starts_with('/') {
        return None;
    }
    Some(trimmed.to_owned())
}

#[derive(Clone, Debug)]
pub struct ReqwestTransport {
    base_url: String,
    http: reqwest::Client,
}

impl ReqwestTransport {
    /// `base_url` must already be normalized with [`normalize_base_url`].
    pub fn new(base_url: String) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder().build()?;
        Ok(Self { base_url, http })
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }
}

impl Transport for ReqwestTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, TransportError> {
        let url = self.url(request.path);
        let mut builder = match request.method {
            Method::Get => self.http.get(&url),
            Method::Post => self.http.post(&url),
        };
        if let Some(header) = request.authorization_header() {
            builder = builder.header(AUTHORIZATION, header);
        }
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let response = builder.send().await.map_err(|e| TransportError(e.to_string()))?;
        let status = response.status().as_u16();
        let body = response.text().await.map_err(|e| TransportError(e.to_string()))?;
        tracing::debug!(%url, status, "api response");
        Ok(ApiResponse { status, body })
    }
}
