//! `gloo-net` transport for the portal API.
//!
//! Client-side (csr): real same-origin HTTP calls under `/api`.
//! Native builds: every request fails with a transport error, which the
//! portal client reports as a network failure.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use portal::api::{API_ROOT, ApiRequest, ApiResponse, AuthClient, Transport, TransportError};

fn endpoint(path: &str) -> String {
    format!("{API_ROOT}{path}")
}

#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserTransport;

impl Transport for BrowserTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, TransportError> {
        #[cfg(feature = "csr")]
        {
            use gloo_net::http::Request;
            use portal::api::Method;

            let url = endpoint(request.path);
            let mut builder = match request.method {
                Method::Get => Request::get(&url),
                Method::Post => Request::post(&url),
            };
            if let Some(header) = request.authorization_header() {
                builder = builder.header("Authorization", &header);
            }
            let pending = match &request.body {
                Some(body) => builder.json(body),
                None => builder.build(),
            }
            .map_err(|e| TransportError(e.to_string()))?;
            let resp = pending.send().await.map_err(|e| TransportError(e.to_string()))?;
            let status = resp.status();
            let body = resp.text().await.map_err(|e| TransportError(e.to_string()))?;
            Ok(ApiResponse { status, body })
        }
        #[cfg(not(feature = "csr"))]
        {
            Err(TransportError(format!("{} unavailable outside the browser", endpoint(request.path))))
        }
    }
}

/// Portal API client for the current page.
pub fn client() -> AuthClient<BrowserTransport> {
    AuthClient::new(BrowserTransport)
}
