//! Application layer - Use cases and business workflows

pub mod agent;
pub mod auth;
pub mod delivery;
pub mod package;

pub use agent::{AgentService, CreateAgent};
pub use auth::{AccessToken, AuthService};
pub use delivery::{DeliveryService, SubmitDelivery};
pub use package::PackageService;
