//! Infrastructure layer - External integrations

pub mod auth;
pub mod config;
pub mod database;
pub mod media;

pub use auth::{Argon2Hasher, JwtTokenService};
pub use config::ServerConfig;
pub use database::{SeaOrmAgentRepository, SeaOrmDeliveryRepository, SeaOrmPackageRepository};
pub use media::FileMediaStore;
