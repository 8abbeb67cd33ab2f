use std::sync::Arc;

use application::{AgentService, AuthService, DeliveryService, PackageService};
use infrastructure::{
    Argon2Hasher, FileMediaStore, JwtTokenService, SeaOrmAgentRepository,
    SeaOrmDeliveryRepository, SeaOrmPackageRepository, ServerConfig,
};
use sea_orm::DatabaseConnection;
use tracing::warn;

/// Shared, immutable request context. Holds no per-request state; every
/// handler goes straight to the services.
pub struct AppState {
    pub auth: AuthService,
    pub agents: AgentService,
    pub packages: PackageService,
    pub deliveries: DeliveryService,
    pub api_prefix: String,
}

impl AppState {
    pub fn new(db: DatabaseConnection, config: &ServerConfig) -> Self {
        let agent_repo = Arc::new(SeaOrmAgentRepository::new(db.clone()));
        let package_repo = Arc::new(SeaOrmPackageRepository::new(db.clone()));
        let delivery_repo = Arc::new(SeaOrmDeliveryRepository::new(db));
        let hasher = Arc::new(Argon2Hasher::new());
        let tokens = Arc::new(JwtTokenService::new(&config.secret_key));
        let media = Arc::new(FileMediaStore::new(&config.media_dir));

        let mut auth = AuthService::new(agent_repo.clone(), hasher.clone(), tokens);
        match config.token_ttl() {
            Ok(ttl) => auth = auth.with_token_ttl(ttl),
            Err(e) => warn!("{}; keeping the default token lifetime", e),
        }

        Self {
            auth,
            agents: AgentService::new(agent_repo, hasher),
            packages: PackageService::new(package_repo),
            deliveries: DeliveryService::new(delivery_repo, media),
            api_prefix: config.api_prefix.clone(),
        }
    }
}
