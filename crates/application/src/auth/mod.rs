mod service;

pub use service::{AccessToken, AuthService, DEFAULT_TOKEN_TTL_MINUTES};
