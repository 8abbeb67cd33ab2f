mod service;

pub use service::{AgentService, CreateAgent};
