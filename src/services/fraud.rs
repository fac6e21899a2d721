//! Fraud policy management.

use crate::errors::Result;
use crate::transport::Transport;
use serde_json::Value;
use std::sync::Arc;

/// Client for the `/v1/policies/fraud` endpoints.
pub struct FraudService {
    transport: Arc<Transport>,
}

impl FraudService {
    pub(crate) fn new(transport: Arc<Transport>) -> Self {
        Self { transport }
    }

    /// The transport this service dispatches through.
    pub fn transport(&self) -> &Transport {
        &self.transport
    }

    /// Fetches the account's fraud policy.
    pub async fn get(&self) -> Result<Value> {
        self.transport.get("/v1/policies/fraud").await
    }

    /// Replaces the account's fraud policy.
    pub async fn update(&self, policy: Value) -> Result<Value> {
        self.transport.post("/v1/policies/fraud", &policy).await
    }
}
