//! Test fixtures: unsigned tokens and a scripted transport.

use std::collections::VecDeque;
use std::sync::Mutex;

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use serde_json::{Value, json};

use crate::api::{ApiRequest, ApiResponse, Transport, TransportError};

/// Build a three-segment token whose payload is `payload`. The signature is
/// junk; nothing in this crate checks it.
pub fn token_with(payload: &Value) -> String {
    let header = URL_SAFE_NO_PAD.encode(br#"{"alg":"HS256","typ":"JWT"}"#);
    let body = URL_SAFE_NO_PAD.encode(payload.to_string());
    format!("{header}.{body}.c2lnbmF0dXJl")
}

pub fn token_with_roles(roles: &[&str]) -> String {
    token_with(&json!({ "user_id": 7, "username": "pilot@example.com", "roles": roles }))
}

/// Transport that replays queued responses and records every request.
#[derive(Default)]
pub struct ScriptedTransport {
    replies: Mutex<VecDeque<Result<ApiResponse, TransportError>>>,
    sent: Mutex<Vec<ApiRequest>>,
}

impl ScriptedTransport {
    pub fn reply(self, status: u16, body: Value) -> Self {
        self.replies
            .lock()
            .unwrap()
            .push_back(Ok(ApiResponse { status, body: body.to_string() }));
        self
    }

    pub fn fail(self, message: &str) -> Self {
        self.replies
            .lock()
            .unwrap()
            .push_back(Err(TransportError(message.to_owned())));
        self
    }

    pub fn sent(&self) -> Vec<ApiRequest> {
        self.sent.lock().unwrap().clone()
    }
}

impl Transport for ScriptedTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, TransportError> {
        self.sent.lock().unwrap().push(request);
        self.replies
            .lock()
            .unwrap()
            .pop_front()
            .expect("no scripted reply left")
    }
}
