use chrono::Duration;
use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, Environment, File};
use serde::{Deserialize, Serialize};

/// Runtime settings for the tracking server.
///
/// Built once at startup and handed to the components that need it.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct ServerConfig {
    pub db_user: String,
    pub db_password: String,
    pub db_host: String,
    pub db_name: String,
    /// Full connection string; takes precedence over the `db_*` parts.
    #[serde(default)]
    pub database_url: Option<String>,
    pub secret_key: String,
    pub media_dir: String,
    pub api_prefix: String,
    pub access_token_expire_minutes: i64,
    pub bind_address: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            db_user: "root".to_string(),
            db_password: String::new(),
            db_host: "127.0.0.1".to_string(),
            db_name: "paquexpress_db".to_string(),
            database_url: None,
            secret_key: "CHANGE_ME_DEVELOPMENT_SECRET".to_string(),
            media_dir: "./media".to_string(),
            api_prefix: "/api/v1".to_string(),
            access_token_expire_minutes: 60 * 24,
            bind_address: "0.0.0.0:8000".to_string(),
        }
    }
}

impl ServerConfig {
    /// Layering, lowest priority first:
    /// built-in defaults, `{config_dir}/default`, `{config_dir}/{RUN_MODE}`,
    /// then process environment (`DB_USER`, `SECRET_KEY`, `MEDIA_DIR`, ...).
    pub fn load(config_dir: &str) -> Result<Self, ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".into());
        let builder = Self::file_layers(config_dir, &run_mode)?.add_source(Environment::default());
        Self::build(builder)
    }

    fn file_layers(
        config_dir: &str,
        run_mode: &str,
    ) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
        let defaults = Self::default();

        Ok(Config::builder()
            .set_default("db_user", defaults.db_user)?
            .set_default("db_password", defaults.db_password)?
            .set_default("db_host", defaults.db_host)?
            .set_default("db_name", defaults.db_name)?
            .set_default("secret_key", defaults.secret_key)?
            .set_default("media_dir", defaults.media_dir)?
            .set_default("api_prefix", defaults.api_prefix)?
            .set_default(
                "access_token_expire_minutes",
                defaults.access_token_expire_minutes,
            )?
            .set_default("bind_address", defaults.bind_address)?
            .add_source(File::with_name(&format!("{}/default", config_dir)).required(false))
            .add_source(File::with_name(&format!("{}/{}", config_dir, run_mode)).required(false)))
    }

    fn build(builder: ConfigBuilder<DefaultState>) -> Result<Self, ConfigError> {
        let config: Self = builder.build()?.try_deserialize()?;
        config.token_ttl()?;
        Ok(config)
    }

    /// Access-token lifetime; must be positive and representable.
    pub fn token_ttl(&self) -> Result<Duration, ConfigError> {
        Duration::try_minutes(self.access_token_expire_minutes)
            .filter(|ttl| *ttl > Duration::zero())
            .ok_or_else(|| {
                ConfigError::Message(format!(
                    "access_token_expire_minutes out of range: {}",
                    self.access_token_expire_minutes
                ))
            })
    }

    /// Connection string for the relational store.
    pub fn database_url(&self) -> String {
        match &self.database_url {
            Some(url) if !url.is_empty() => url.clone(),
            _ => format!(
                "postgres://{}:{}@{}/{}",
                self.db_user, self.db_password, self.db_host, self.db_name
            ),
        }
    }
}
