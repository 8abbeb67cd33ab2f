pub mod api;
pub mod error;
pub mod extract;
pub mod state;

use infrastructure::ServerConfig;
use sea_orm::DatabaseConnection;
use state::AppState;
use std::sync::Arc;

pub fn setup_app_state(db: DatabaseConnection, config: &ServerConfig) -> Arc<AppState> {
    Arc::new(AppState::new(db, config))
}
