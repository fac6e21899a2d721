//! Payment provider connections.

use crate::errors::Result;
use crate::transport::Transport;
use serde_json::Value;
use std::sync::Arc;

/// Client for the `/v1/connections` endpoints.
pub struct ConnectionsService {
    transport: Arc<Transport>,
}

impl ConnectionsService {
    pub(crate) fn new(transport: Arc<Transport>) -> Self {
        Self { transport }
    }

    /// The transport this service dispatches through.
    pub fn transport(&self) -> &Transport {
        &self.transport
    }

    /// Creates a provider connection.
    pub async fn create(&self, data: Value) -> Result<Value> {
        self.transport.post("/v1/connections", &data).await
    }

    /// Lists provider connections.
    pub async fn list(&self) -> Result<Value> {
        self.transport.get("/v1/connections").await
    }

    /// Tests connection credentials against the provider.
    ///
    /// Returns the boolean at the response's `success` key. When the key is
    /// absent or not a boolean this returns `false` rather than an error;
    /// transport and non-2xx failures still propagate as usual.
    pub async fn test(&self, data: Value) -> Result<bool> {
        let response = self.transport.post("/v1/connections/test", &data).await?;
        Ok(success_flag(&response))
    }
}

fn success_flag(response: &Value) -> bool {
    response
        .get("success")
        .and_then(Value::as_bool)
        .unwrap_or(false)
}
