mod entity;
mod repository;
mod username;

pub use entity::{Agent, NewAgent};
pub use repository::AgentRepository;
pub use username::Username;
