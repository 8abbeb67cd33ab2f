//! Domain layer - Pure business logic with no external dependencies
//!
//! This crate contains:
//! - Entities (Agent, Package, Delivery)
//! - Value Objects (Username, PackageStatus, Coordinates)
//! - Repository interfaces (traits)
//! - Ports for credentials, tokens and media storage
//!
//! Principles:
//! - No dependencies on infrastructure
//! - Business rules enforced at domain level
//! - Testable in isolation

pub mod agent;
pub mod auth;
pub mod delivery;
pub mod error;
pub mod media;
pub mod package;

// Re-export commonly used types
pub use agent::{Agent, AgentRepository, NewAgent, Username};
pub use auth::{Claims, CredentialHasher, TokenIssuer};
pub use delivery::{Coordinates, Delivery, DeliveryRepository, NewDelivery};
pub use error::DomainError;
pub use media::{MediaStore, delivery_photo_name};
pub use package::{NewPackage, Package, PackageRepository, PackageStatus};
