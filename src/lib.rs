//! # reevit-rs
//!
//! Rust client for the [Reevit](https://reevit.io) payments API.
//!
//! The SDK is a thin, schema-less wrapper over the REST API: each service
//! method maps to one endpoint, request bodies are serialized as JSON, and
//! responses come back as generic `serde_json::Value`s. There is no retry
//! logic, no caching, and no pagination handling beyond limit/offset
//! passthrough; every call is a single request/response round trip.
//!
//! ## Quick start
//!
//! ```rust,no_run
//! use reevit_rs::Reevit;
//! use serde_json::json;
//!
//! # async fn example() -> Result<(), reevit_rs::ReevitError> {
//! // Keys prefixed pk_test_ or pk_sandbox_ target the sandbox environment.
//! let reevit = Reevit::new("pk_test_abc");
//!
//! let intent = reevit
//!     .payments
//!     .create_intent(json!({"amount": 1000, "currency": "usd"}), Some("order-42"))
//!     .await?;
//! println!("intent: {intent}");
//!
//! let recent = reevit.payments.list_with_range(10, 0).await?;
//! println!("payments: {recent}");
//! # Ok(())
//! # }
//! ```
//!
//! ## Environments
//!
//! Base URL selection happens once, at construction:
//!
//! - keys prefixed `pk_test_` or `pk_sandbox_` route to
//!   `https://sandbox-api.reevit.io`
//! - every other key routes to `https://api.reevit.io`
//! - an explicit base URL ([`Reevit::with_base_url`]) always wins
//!
//! ## Errors
//!
//! All methods return [`Result`]. Transport failures surface as
//! [`ReevitError::Http`], non-2xx responses as [`ReevitError::Api`] with the
//! status code and body, and malformed response JSON as
//! [`ReevitError::Json`]. Nothing is retried.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod client;
pub mod errors;
pub mod services;
pub mod transport;

// Re-export commonly used items
pub use client::{
    ClientConfig, Reevit, API_BASE_URL_PRODUCTION, API_BASE_URL_SANDBOX, DEFAULT_TIMEOUT_SECS,
};
pub use errors::{ReevitError, Result};
pub use services::{ConnectionsService, FraudService, PaymentsService, SubscriptionsService};
