//! Scripted Transport
//!
//! In-memory [`HttpTransport`] for tests: replies are queued per
//! `(method, path)` and every request is recorded. A reply can be held
//! behind a [`Gate`] to control when it resolves.

use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex};

use reqwest::Method;
use serde_json::{Value, json};
use tokio::sync::Semaphore;

use crate::error::TransportError;
use crate::transport::{ApiRequest, ApiResponse, HttpTransport};

/// Blocks gated replies until opened
#[derive(Debug, Clone)]
pub struct Gate(Arc<Semaphore>);

impl Gate {
    pub fn closed() -> Self {
        Self(Arc::new(Semaphore::new(0)))
    }

    /// Let every current and future waiter through
    pub fn open(&self) {
        // A closed semaphore fails every acquire immediately.
        self.0.close();
    }

    async fn pass(&self) {
        let _ = self.0.acquire().await;
    }
}

/// A canned reply
#[derive(Debug, Clone)]
pub struct Reply {
    outcome: Result<(u16, String), String>,
    gate: Option<Gate>,
}

impl Reply {
    /// Any status with a JSON body
    pub fn json(status: u16, body: Value) -> Self {
        Self::raw(status, body.to_string())
    }

    /// Any status with a raw body
    pub fn raw(status: u16, body: impl Into<String>) -> Self {
        Self {
            outcome: Ok((status, body.into())),
            gate: None,
        }
    }

    /// 200 `{ success: true, data }`
    pub fn ok(data: Value) -> Self {
        Self::json(200, json!({ "success": true, "data": data }))
    }

    /// Error status `{ success: false, message }`
    pub fn error(status: u16, message: &str) -> Self {
        Self::json(status, json!({ "success": false, "message": message }))
    }

    /// Transport-level failure
    pub fn unreachable() -> Self {
        Self {
            outcome: Err("connection refused".to_string()),
            gate: None,
        }
    }

    /// Hold this reply until `gate` opens
    pub fn gated(mut self, gate: &Gate) -> Self {
        self.gate = Some(gate.clone());
        self
    }
}

#[derive(Default)]
struct Script {
    replies: HashMap<(Method, String), VecDeque<Reply>>,
    sent: Vec<ApiRequest>,
}

/// Transport answering from a script
#[derive(Clone, Default)]
pub struct ScriptedTransport {
    script: Arc<Mutex<Script>>,
}

impl ScriptedTransport {
    pub fn new() -> Self {
        Self::default()
    }

    fn script(&self) -> std::sync::MutexGuard<'_, Script> {
        self.script
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Queue a reply for the next matching request
    pub fn enqueue(&self, method: Method, path: &str, reply: Reply) -> &Self {
        self.script()
            .replies
            .entry((method, path.to_string()))
            .or_default()
            .push_back(reply);
        self
    }

    /// Every request sent so far, in order
    pub fn requests(&self) -> Vec<ApiRequest> {
        self.script().sent.clone()
    }

    /// Number of requests sent to `(method, path)`
    pub fn count(&self, method: &Method, path: &str) -> usize {
        self.script()
            .sent
            .iter()
            .filter(|r| &r.method == method && r.path == path)
            .count()
    }
}

impl HttpTransport for ScriptedTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, TransportError> {
        let reply = {
            let mut script = self.script();
            script.sent.push(request.clone());
            script
                .replies
                .get_mut(&(request.method.clone(), request.path.clone()))
                .and_then(VecDeque::pop_front)
        };

        let Some(reply) = reply else {
            return Ok(ApiResponse {
                status: 404,
                body: json!({ "success": false, "message": "No scripted reply" }).to_string(),
            });
        };

        if let Some(gate) = &reply.gate {
            gate.pass().await;
        }

        match reply.outcome {
            Ok((status, body)) => Ok(ApiResponse { status, body }),
            Err(reason) => Err(TransportError::Unreachable(reason)),
        }
    }
}
