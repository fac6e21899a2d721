//! Payments: intents, listing, lookup and refunds.

use crate::errors::Result;
use crate::transport::Transport;
use serde_json::{Map, Value};
use std::sync::Arc;

/// Default page size for [`PaymentsService::list`].
pub const DEFAULT_LIST_LIMIT: u64 = 50;

/// Client for the `/v1/payments` endpoints.
pub struct PaymentsService {
    transport: Arc<Transport>,
}

impl PaymentsService {
    pub(crate) fn new(transport: Arc<Transport>) -> Self {
        Self { transport }
    }

    /// The transport this service dispatches through.
    pub fn transport(&self) -> &Transport {
        &self.transport
    }

    /// Creates a payment intent.
    ///
    /// When `idempotency_key` is given, an `Idempotency-Key` header is
    /// attached to this request only, letting the server deduplicate a
    /// repeated creation. The header is absent otherwise.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// # use reevit_rs::Reevit;
    /// # use serde_json::json;
    /// # async fn example() -> Result<(), reevit_rs::ReevitError> {
    /// # let reevit = Reevit::new("pk_test_abc");
    /// let intent = reevit
    ///     .payments
    ///     .create_intent(json!({"amount": 1000, "currency": "usd"}), Some("order-42"))
    ///     .await?;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn create_intent(
        &self,
        data: Value,
        idempotency_key: Option<&str>,
    ) -> Result<Value> {
        match idempotency_key {
            Some(key) => {
                self.transport
                    .post_with_headers("/v1/payments/intents", &data, &[("Idempotency-Key", key)])
                    .await
            }
            None => self.transport.post("/v1/payments/intents", &data).await,
        }
    }

    /// Lists payments with the default page (limit 50, offset 0).
    pub async fn list(&self) -> Result<Value> {
        self.list_with_range(DEFAULT_LIST_LIMIT, 0).await
    }

    /// Lists payments with an explicit limit and offset.
    ///
    /// Both values are passed through unvalidated; the caller is responsible
    /// for sane ranges.
    pub async fn list_with_range(&self, limit: u64, offset: u64) -> Result<Value> {
        self.transport
            .get_with_query(
                "/v1/payments",
                &[("limit", limit.to_string()), ("offset", offset.to_string())],
            )
            .await
    }

    /// Fetches a single payment by id.
    pub async fn get(&self, id: &str) -> Result<Value> {
        self.transport.get(&format!("/v1/payments/{id}")).await
    }

    /// Refunds a payment, fully or partially.
    ///
    /// The request body contains only the keys actually supplied: omitting
    /// `amount` or `reason` leaves the key out of the body entirely rather
    /// than sending null.
    pub async fn refund(
        &self,
        id: &str,
        amount: Option<f64>,
        reason: Option<&str>,
    ) -> Result<Value> {
        let body = refund_body(amount, reason);
        self.transport
            .post(&format!("/v1/payments/{id}/refund"), &body)
            .await
    }
}

/// Builds the refund body, inserting only the keys that were supplied.
fn refund_body(amount: Option<f64>, reason: Option<&str>) -> Value {
    let mut body = Map::new();
    if let Some(amount) = amount {
        body.insert("amount".to_string(), amount.into());
    }
    if let Some(reason) = reason {
        body.insert("reason".to_string(), reason.into());
    }
    Value::Object(body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_refund_body_empty_when_nothing_supplied() {
        assert_eq!(refund_body(None, None), json!({}));
    }

    #[test]
    fn test_refund_body_amount_only() {
        assert_eq!(refund_body(Some(25.0), None), json!({"amount": 25.0}));
    }

    #[test]
    fn test_refund_body_reason_only() {
        assert_eq!(
            refund_body(None, Some("duplicate")),
            json!({"reason": "duplicate"})
        );
    }

    #[test]
    fn test_refund_body_both() {
        let body = refund_body(Some(9.99), Some("requested_by_customer"));
        assert_eq!(
            body,
            json!({"amount": 9.99, "reason": "requested_by_customer"})
        );
        // Exactly the supplied keys, with no null placeholders.
        assert_eq!(body.as_object().unwrap().len(), 2);
    }
}
