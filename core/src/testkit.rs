//! Shared test utilities available to both unit and integration tests.
//!
//! Enabled via the `testkit` feature.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex, PoisonError};

use async_trait::async_trait;

use crate::error::TransportError;
use crate::http::{HttpRequest, HttpResponse};
use crate::transport::Transport;

/// One scripted outcome of `ScriptedTransport::execute`.
#[derive(Debug, Clone)]
pub enum Reply {
    Respond(HttpResponse),
    Fail(String),
}

impl Reply {
    pub fn status(status: u16, body: &str) -> Self {
        Reply::Respond(HttpResponse::new(status, body))
    }
}

/// A transport with a fixed queue of replies that records every request.
///
/// Each call pops the next reply; once the queue is exhausted it answers
/// `200` with an empty body.
#[derive(Debug, Default)]
pub struct ScriptedTransport {
    replies: Mutex<VecDeque<Reply>>,
    requests: Arc<Mutex<Vec<HttpRequest>>>,
}

impl ScriptedTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_replies(replies: Vec<Reply>) -> Self {
        Self {
            replies: Mutex::new(replies.into()),
            requests: Arc::default(),
        }
    }

    /// Shorthand for a single scripted response.
    pub fn responding(status: u16, body: &str) -> Self {
        Self::with_replies(vec![Reply::status(status, body)])
    }

    /// Number of requests executed so far.
    pub fn calls(&self) -> usize {
        self.requests.lock().unwrap_or_else(PoisonError::into_inner).len()
    }

    /// Copies of the requests executed so far, oldest first.
    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Shared handle to the request log, for callers that hand the
    /// transport away.
    pub fn request_log(&self) -> Arc<Mutex<Vec<HttpRequest>>> {
        Arc::clone(&self.requests)
    }
}

#[async_trait]
impl Transport for ScriptedTransport {
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        self.requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(request);
        let reply = self
            .replies
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .pop_front();
        match reply {
            Some(Reply::Respond(response)) => Ok(response),
            Some(Reply::Fail(message)) => Err(TransportError::new(message)),
            None => Ok(HttpResponse::new(200, "")),
        }
    }
}
