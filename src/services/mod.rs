//! Resource services, one per Reevit API resource.
//!
//! Each service holds a shared reference to the client's [`Transport`] and
//! exposes one method per API operation. Methods translate their arguments
//! into a verb, path, query string, headers and JSON body, then return the
//! parsed response as a generic `serde_json::Value` — no typed mapping is
//! enforced on the way out.
//!
//! [`Transport`]: crate::transport::Transport

mod connections;
mod fraud;
mod payments;
mod subscriptions;

pub use connections::ConnectionsService;
pub use fraud::FraudService;
pub use payments::PaymentsService;
pub use subscriptions::SubscriptionsService;
