//! Scripted transport for client tests

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use super::transport::{HttpRequest, HttpResponse, Transport, TransportError};

pub const TEST_BASE: &str = "https://backend.test/api";
pub const TEST_TOKEN: &str = "token-abc";

type Scripted = Result<HttpResponse, TransportError>;

/// Replays queued responses in order, then the fallback (if any).
/// Every request is recorded.
#[derive(Default)]
pub struct ScriptedTransport {
    queue: Mutex<VecDeque<Scripted>>,
    fallback: Mutex<Option<Scripted>>,
    requests: Mutex<Vec<HttpRequest>>,
}

impl ScriptedTransport {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Transport answering every request with the same response
    pub fn always(status: u16, body: &str) -> Arc<Self> {
        let transport = Self::new();
        *transport.fallback.lock().unwrap() = Some(Ok(response(status, "", body)));
        transport
    }

    pub fn respond(&self, status: u16, body: &str) {
        self.respond_with(status, "", body);
    }

    pub fn respond_with(&self, status: u16, status_text: &str, body: &str) {
        self.queue
            .lock()
            .unwrap()
            .push_back(Ok(response(status, status_text, body)));
    }

    pub fn fail(&self, message: &str) {
        self.queue
            .lock()
            .unwrap()
            .push_back(Err(TransportError(message.to_string())));
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn last_request(&self) -> Option<HttpRequest> {
        self.requests.lock().unwrap().last().cloned()
    }
}

fn response(status: u16, status_text: &str, body: &str) -> HttpResponse {
    HttpResponse {
        status,
        status_text: status_text.to_string(),
        body: body.to_string(),
    }
}

#[async_trait(?Send)]
impl Transport for ScriptedTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        self.requests.lock().unwrap().push(request);
        if let Some(next) = self.queue.lock().unwrap().pop_front() {
            return next;
        }
        self.fallback
            .lock()
            .unwrap()
            .clone()
            .unwrap_or_else(|| Err(TransportError("no scripted response".to_string())))
    }
}
