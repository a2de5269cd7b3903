use std::path::PathBuf;

use config::{Config, ConfigError, Environment, File, FileFormat, FileSourceFile};
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct CorsConfig {
    /// Allowed origins. Empty means any origin.
    pub allow_origins: Vec<String>,
    pub max_age: u64,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allow_origins: Vec::new(),
            max_age: 3600,
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Base of every published blob URL, e.g. `http://localhost:5000`.
    pub public_url: String,
    #[serde(default)]
    pub cors: CorsConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
}

#[derive(Debug, Deserialize, Clone)]
pub struct StorageConfig {
    /// Directory holding uploaded files, served under `/uploads`.
    pub uploads_dir: PathBuf,
    /// Largest accepted file part, in bytes.
    pub max_upload_size: u64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub storage: StorageConfig,
}

impl AppConfig {
    /// Defaults, then `config/config.toml` if present, then `PORTFOLIO__*` variables.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(
            File::with_name("config/config").required(false),
            Environment::with_prefix("PORTFOLIO"),
        )
    }

    fn load_from(
        file: File<FileSourceFile, FileFormat>,
        env: Environment,
    ) -> Result<Self, ConfigError> {
        let s = Config::builder()
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 5000)?
            .set_default("server.public_url", "http://localhost:5000")?
            .set_default("database.url", "sqlite://portfolio.db?mode=rwc")?
            .set_default("database.max_connections", 10)?
            .set_default("storage.uploads_dir", "./uploads")?
            .set_default("storage.max_upload_size", 10 * 1024 * 1024)?
            .add_source(file)
            // e.g. PORTFOLIO__DATABASE__URL, PORTFOLIO__SERVER__CORS__ALLOW_ORIGINS=a,b
            .add_source(
                env.separator("__")
                    .list_separator(",")
                    .with_list_parse_key("server.cors.allow_origins")
                    .try_parsing(true),
            )
            .build()?;

        s.try_deserialize()
    }
}
