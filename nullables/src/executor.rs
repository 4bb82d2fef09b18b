//! Nullable claim executor — records every invocation.

use geoclaim_gate::{ClaimExecutor, ExecutionError};
use geoclaim_types::{ClaimantId, Receipt, TargetId};
use std::sync::Mutex;

/// One recorded call to [`NullExecutor::execute`](ClaimExecutor::execute).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExecutorCall {
    pub target: TargetId,
    pub claimant: ClaimantId,
}

/// A deterministic executor for testing.
///
/// Succeeds with receipts `null-receipt-1`, `null-receipt-2`, ... unless built
/// with [`NullExecutor::failing`], in which case every call returns the
/// configured error. Calls are recorded either way.
/// Thread-safe for use with tokio's multi-threaded runtime.
pub struct NullExecutor {
    calls: Mutex<Vec<ExecutorCall>>,
    failure: Option<ExecutionError>,
}

impl NullExecutor {
    pub fn new() -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            failure: None,
        }
    }

    /// An executor whose every call fails with `error`.
    pub fn failing(error: ExecutionError) -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            failure: Some(error),
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    pub fn calls(&self) -> Vec<ExecutorCall> {
        self.calls.lock().unwrap().clone()
    }
}

impl Default for NullExecutor {
    fn default() -> Self {
        Self::new()
    }
}

impl ClaimExecutor for NullExecutor {
    fn name(&self) -> &str {
        "null-executor"
    }

    async fn execute(
        &self,
        target: &TargetId,
        claimant: &ClaimantId,
    ) -> Result<Receipt, ExecutionError> {
        let sequence = {
            let mut calls = self.calls.lock().unwrap();
            calls.push(ExecutorCall {
                target: target.clone(),
                claimant: claimant.clone(),
            });
            calls.len()
        };

        match &self.failure {
            Some(err) => Err(err.clone()),
            None => Ok(Receipt {
                target_id: target.clone(),
                claimant: claimant.clone(),
                reference: format!("null-receipt-{sequence}"),
            }),
        }
    }
}
