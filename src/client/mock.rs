use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use anyhow::{Result, anyhow};
use async_trait::async_trait;
use serde_json::Value;

use super::{Operation, Processor};

/// A scripted processor for tests. Returns pre-defined replies in order and
/// records every call.
pub struct MockProcessor {
    replies: Vec<Result<Value, String>>,
    index: AtomicUsize,
    calls: Mutex<Vec<(Operation, String)>>,
}

impl MockProcessor {
    pub fn new(replies: Vec<Result<Value, String>>) -> Self {
        Self {
            replies,
            index: AtomicUsize::new(0),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<(Operation, String)> {
        self.calls.lock().map(|c| c.clone()).unwrap_or_default()
    }
}

#[async_trait]
impl Processor for MockProcessor {
    async fn process(&self, op: Operation, text: &str) -> Result<Value> {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push((op, text.to_string()));
        }
        let i = self.index.fetch_add(1, Ordering::SeqCst);
        match self.replies.get(i) {
            Some(Ok(value)) => Ok(value.clone()),
            Some(Err(message)) => Err(anyhow!("{message}")),
            None => Err(anyhow!(
                "MockProcessor: no more replies (called {} times)",
                i + 1
            )),
        }
    }
}
