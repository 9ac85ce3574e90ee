//! Offline model client that replays canned replies and records every call.
//! Test support only: compiled for unit tests and behind the `test-util`
//! feature, which the integration tests enable.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;

use super::ModelClient;
use crate::error::ClientError;

#[derive(Clone, Debug, PartialEq)]
pub struct RecordedCall {
    pub prompt: String,
    pub temperature: f32,
}

/// Replies `R1`, `R2`, ... to successive calls unless a reply or failure was
/// scripted for that call number (1-based).
#[derive(Default)]
pub struct ScriptedClient {
    replies: HashMap<usize, String>,
    failures: HashMap<usize, ClientError>,
    calls: Mutex<Vec<RecordedCall>>,
}

impl ScriptedClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn replying_at(mut self, call: usize, reply: impl Into<String>) -> Self {
        self.replies.insert(call, reply.into());
        self
    }

    pub fn failing_at(mut self, call: usize, error: ClientError) -> Self {
        self.failures.insert(call, error);
        self
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap_or_else(|e| e.into_inner()).len()
    }
}

#[async_trait]
impl ModelClient for ScriptedClient {
    fn model(&self) -> &str {
        "scripted"
    }

    async fn complete(&self, prompt: &str, temperature: f32) -> Result<String, ClientError> {
        let call = {
            let mut calls = self.calls.lock().unwrap_or_else(|e| e.into_inner());
            calls.push(RecordedCall {
                prompt: prompt.to_string(),
                temperature,
            });
            calls.len()
        };

        if let Some(err) = self.failures.get(&call) {
            return Err(err.clone());
        }
        Ok(self
            .replies
            .get(&call)
            .cloned()
            .unwrap_or_else(|| format!("R{}", call)))
    }
}
