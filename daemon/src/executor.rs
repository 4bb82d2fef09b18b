//! Claim executor backed by an external HTTP mint service.
//!
//! The mint service receives `POST { target_id, claimant }` and answers
//! `200 { "receipt": "<reference>" }`. Any non-2xx answer is a rejection.
//! Requests are sent once; retry policy belongs to the mint service.

use geoclaim_gate::{ClaimExecutor, ExecutionError};
use geoclaim_types::{ClaimantId, Receipt, TargetId};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;

#[derive(Serialize)]
struct MintRequest<'a> {
    target_id: &'a TargetId,
    claimant: &'a ClaimantId,
}

#[derive(Deserialize)]
struct MintResponse {
    receipt: String,
}

pub struct HttpClaimExecutor {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpClaimExecutor {
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Result<Self, ExecutionError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ExecutionError::Transport(e.to_string()))?;
        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

fn transport_error(e: reqwest::Error) -> ExecutionError {
    if e.is_timeout() {
        ExecutionError::Timeout
    } else {
        ExecutionError::Transport(e.to_string())
    }
}

impl ClaimExecutor for HttpClaimExecutor {
    fn name(&self) -> &str {
        "http-mint"
    }

    async fn execute(
        &self,
        target: &TargetId,
        claimant: &ClaimantId,
    ) -> Result<Receipt, ExecutionError> {
        debug!(endpoint = %self.endpoint, "sending mint request");
        let response = self
            .client
            .post(&self.endpoint)
            .json(&MintRequest {
                target_id: target,
                claimant,
            })
            .send()
            .await
            .map_err(transport_error)?;

        let status = response.status();
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            return Err(ExecutionError::Rejected(format!("{status}: {detail}")));
        }

        let body: MintResponse = response
            .json()
            .await
            .map_err(|e| ExecutionError::InvalidResponse(e.to_string()))?;

        Ok(Receipt {
            target_id: target.clone(),
            claimant: claimant.clone(),
            reference: body.receipt,
        })
    }
}
