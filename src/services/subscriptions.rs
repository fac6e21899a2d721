//! Recurring subscriptions.

use crate::errors::Result;
use crate::transport::Transport;
use serde_json::Value;
use std::sync::Arc;

/// Client for the `/v1/subscriptions` endpoints.
pub struct SubscriptionsService {
    transport: Arc<Transport>,
}

impl SubscriptionsService {
    pub(crate) fn new(transport: Arc<Transport>) -> Self {
        Self { transport }
    }

    /// The transport this service dispatches through.
    pub fn transport(&self) -> &Transport {
        &self.transport
    }

    /// Creates a subscription.
    pub async fn create(&self, data: Value) -> Result<Value> {
        self.transport.post("/v1/subscriptions", &data).await
    }

    /// Lists subscriptions.
    pub async fn list(&self) -> Result<Value> {
        self.transport.get("/v1/subscriptions").await
    }
}
