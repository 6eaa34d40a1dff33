//! Shared fixtures: a scripted in-memory transport that records every form.

#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use ramco_client::{RamcoClient, RawResponse, ResponseHandler, Transport};
use ramco_core::errors::TransportError;
use serde_json::Value;

pub const TEST_KEY: &str = "test-key";

#[derive(Default)]
pub struct ScriptedTransport {
    responses: Mutex<VecDeque<Result<RawResponse, TransportError>>>,
    requests: Mutex<Vec<Vec<(String, String)>>>,
}

impl ScriptedTransport {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn push_json(&self, body: Value) -> &Self {
        self.push(Ok(RawResponse::ok(body.to_string())))
    }

    pub fn push_raw(&self, status: u16, body: &str) -> &Self {
        self.push(Ok(RawResponse {
            status,
            body: body.to_string(),
        }))
    }

    pub fn push_error(&self, error: TransportError) -> &Self {
        self.push(Err(error))
    }

    fn push(&self, response: Result<RawResponse, TransportError>) -> &Self {
        self.responses.lock().unwrap().push_back(response);
        self
    }

    pub fn requests(&self) -> Vec<Vec<(String, String)>> {
        self.requests.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    /// Value of `name` in the `index`-th recorded request.
    pub fn field(&self, index: usize, name: &str) -> Option<String> {
        self.requests.lock().unwrap()[index]
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.clone())
    }
}

impl Transport for ScriptedTransport {
    fn post_form(&self, fields: &[(String, String)]) -> Result<RawResponse, TransportError> {
        self.requests.lock().unwrap().push(fields.to_vec());
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| {
                Err(TransportError::Network {
                    reason: "script exhausted".into(),
                })
            })
    }
}

pub fn client(transport: &Arc<ScriptedTransport>) -> RamcoClient<Arc<ScriptedTransport>> {
    RamcoClient::with_transport(Arc::clone(transport), TEST_KEY, ResponseHandler::default())
}

pub fn client_with_cap(
    transport: &Arc<ScriptedTransport>,
    max_pages: usize,
) -> RamcoClient<Arc<ScriptedTransport>> {
    RamcoClient::with_transport(Arc::clone(transport), TEST_KEY, ResponseHandler::new(max_pages))
}
