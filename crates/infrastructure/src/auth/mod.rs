mod argon;
mod jwt;

pub use argon::Argon2Hasher;
pub use jwt::JwtTokenService;
