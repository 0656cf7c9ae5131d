//! In-memory transport for unit tests.

use std::cell::RefCell;
use std::collections::VecDeque;

use crate::error::ApiError;
use crate::http::{HttpRequest, HttpResponse, Transport};

/// Replays queued responses in order and records every request it receives.
/// Once the queue is empty, further calls fail with `TransportError`.
#[derive(Debug, Default)]
pub(crate) struct RecordingTransport {
    responses: RefCell<VecDeque<HttpResponse>>,
    requests: RefCell<Vec<HttpRequest>>,
}

impl RecordingTransport {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn respond(self, status: u16, body: &str) -> Self {
        self.responses.borrow_mut().push_back(HttpResponse {
            status,
            headers: vec![("content-type".to_string(), "application/json".to_string())],
            body: body.to_string(),
        });
        self
    }

    pub(crate) fn calls(&self) -> usize {
        self.requests.borrow().len()
    }

    pub(crate) fn last_request(&self) -> HttpRequest {
        self.requests
            .borrow()
            .last()
            .cloned()
            .expect("no request was sent")
    }

    /// The last request body parsed as JSON.
    pub(crate) fn last_body(&self) -> serde_json::Value {
        let req = self.last_request();
        serde_json::from_str(req.body.as_deref().expect("request has no body")).expect("body is not JSON")
    }
}

impl Transport for RecordingTransport {
    fn execute(&self, request: &HttpRequest) -> Result<HttpResponse, ApiError> {
        self.requests.borrow_mut().push(request.clone());
        self.responses
            .borrow_mut()
            .pop_front()
            .ok_or_else(|| ApiError::TransportError("no response queued".to_string()))
    }
}
