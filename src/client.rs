//! Client construction for the Reevit API.
//!
//! [`Reevit`] is the entry point of the SDK. It resolves the effective base
//! URL (sandbox vs production, by API key prefix), builds one [`Transport`],
//! and hands a shared reference to each of the four resource services.

use crate::services::{ConnectionsService, FraudService, PaymentsService, SubscriptionsService};
use crate::transport::Transport;
use reqwest::Client;
use std::sync::Arc;

/// Base URL of the Reevit production environment.
pub const API_BASE_URL_PRODUCTION: &str = "https://api.reevit.io";

/// Base URL of the Reevit sandbox environment.
pub const API_BASE_URL_SANDBOX: &str = "https://sandbox-api.reevit.io";

/// Default request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Returns true for keys that route to the sandbox environment.
///
/// Only the prefix is inspected; the key is otherwise opaque.
fn is_sandbox_key(api_key: &str) -> bool {
    api_key.starts_with("pk_test_") || api_key.starts_with("pk_sandbox_")
}

/// Configuration for a [`Reevit`] client.
///
/// Constructed once at SDK initialization and immutable thereafter.
///
/// # Examples
///
/// ```
/// use reevit_rs::client::ClientConfig;
///
/// let config = ClientConfig::new("pk_test_abc")
///     .with_base_url("http://localhost:8080");
/// ```
#[derive(Clone)]
pub struct ClientConfig {
    /// API key used for bearer authorization
    pub api_key: String,

    /// Explicit base URL; overrides key-prefix inference when set
    pub base_url: Option<String>,

    /// Request timeout in seconds
    pub timeout_secs: u64,

    /// HTTP client to use for requests
    pub http_client: Client,
}

impl ClientConfig {
    /// Creates a new configuration with the default timeout.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: None,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            http_client: Client::new(),
        }
    }

    /// Sets an explicit base URL, used verbatim instead of prefix inference.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Sets the request timeout in seconds.
    pub fn with_timeout_secs(mut self, timeout_secs: u64) -> Self {
        self.timeout_secs = timeout_secs;
        self
    }

    /// Sets a custom HTTP client (proxy, TLS configuration, etc.).
    pub fn with_http_client(mut self, client: Client) -> Self {
        self.http_client = client;
        self
    }

    /// The base URL this configuration resolves to.
    fn resolved_base_url(&self) -> &str {
        match &self.base_url {
            Some(url) => url,
            None if is_sandbox_key(&self.api_key) => API_BASE_URL_SANDBOX,
            None => API_BASE_URL_PRODUCTION,
        }
    }
}

/// The Reevit API client.
///
/// Exposes one service per API resource. All services share a single
/// [`Transport`] built at construction; construction makes no network call,
/// so an invalid key is only ever rejected by the server on first request.
///
/// # Examples
///
/// ```no_run
/// use reevit_rs::Reevit;
/// use serde_json::json;
///
/// # async fn example() -> Result<(), reevit_rs::ReevitError> {
/// let reevit = Reevit::new("pk_test_abc");
///
/// let intent = reevit
///     .payments
///     .create_intent(json!({"amount": 1000, "currency": "usd"}), None)
///     .await?;
/// println!("created intent: {intent}");
/// # Ok(())
/// # }
/// ```
pub struct Reevit {
    /// Payment intents, listing, lookup and refunds
    pub payments: PaymentsService,
    /// Payment provider connections
    pub connections: ConnectionsService,
    /// Recurring subscriptions
    pub subscriptions: SubscriptionsService,
    /// Fraud policy management
    pub fraud: FraudService,
}

impl Reevit {
    /// Creates a client for the given API key.
    ///
    /// Keys prefixed `pk_test_` or `pk_sandbox_` target the sandbox
    /// environment; all other keys target production.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::with_config(ClientConfig::new(api_key))
    }

    /// Creates a client for the given API key and an explicit base URL.
    ///
    /// The base URL is used verbatim and always overrides key-prefix
    /// inference.
    pub fn with_base_url(api_key: impl Into<String>, base_url: impl Into<String>) -> Self {
        Self::with_config(ClientConfig::new(api_key).with_base_url(base_url))
    }

    /// Creates a client from a full [`ClientConfig`].
    pub fn with_config(config: ClientConfig) -> Self {
        let transport = Arc::new(Transport::new(
            config.http_client.clone(),
            config.resolved_base_url(),
            config.api_key.clone(),
            config.timeout_secs,
        ));

        Self {
            payments: PaymentsService::new(Arc::clone(&transport)),
            connections: ConnectionsService::new(Arc::clone(&transport)),
            subscriptions: SubscriptionsService::new(Arc::clone(&transport)),
            fraud: FraudService::new(transport),
        }
    }
}
