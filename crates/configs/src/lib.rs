use std::collections::HashMap;
use std::path::Path;

use anyhow::{anyhow, Result};
use serde::Deserialize;

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 3000;
const DEFAULT_DATA_FILE: &str = "data/libros.json";
const DEFAULT_WORKER_THREADS: usize = 4;

#[derive(Debug, Clone, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub log: LogConfig,
}

/// Deployment mode. Development exposes internal error details in 500 bodies.
#[derive(Debug, Clone, Copy, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    Development,
    #[default]
    Production,
}

impl Mode {
    fn parse(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "development" | "dev" => Ok(Mode::Development),
            "production" | "prod" => Ok(Mode::Production),
            other => Err(anyhow!("unknown mode `{other}`; expected development or production")),
        }
    }

    /// Only `development` enables development mode; any other value is production.
    fn from_node_env(s: &str) -> Self {
        if s.trim().eq_ignore_ascii_case("development") {
            Mode::Development
        } else {
            Mode::Production
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default)]
    pub worker_threads: Option<usize>,
    #[serde(default)]
    pub mode: Mode,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            worker_threads: Some(DEFAULT_WORKER_THREADS),
            mode: Mode::default(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    #[serde(default = "default_data_file")]
    pub data_file: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self { data_file: default_data_file() }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LogConfig {
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self { format: default_log_format() }
    }
}

fn default_host() -> String { DEFAULT_HOST.to_string() }
fn default_port() -> u16 { DEFAULT_PORT }
fn default_data_file() -> String { DEFAULT_DATA_FILE.to_string() }
fn default_log_format() -> String { "compact".to_string() }

/// Load `CONFIG_PATH` (default `config.toml`); a missing file yields the defaults.
pub fn load_default() -> Result<AppConfig> {
    let path = std::env::var("CONFIG_PATH").unwrap_or_else(|_| "config.toml".to_string());
    if !Path::new(&path).exists() {
        return Ok(AppConfig::default());
    }
    load_from_file(&path)
}

pub fn load_from_file(path: &str) -> Result<AppConfig> {
    let content = std::fs::read_to_string(path)?;
    parse(&content)
}

pub fn parse(content: &str) -> Result<AppConfig> {
    let cfg: AppConfig = toml::from_str(content)?;
    Ok(cfg)
}

impl AppConfig {
    /// File (or defaults), then process environment, then normalization.
    pub fn load_and_validate() -> Result<Self> {
        let mut cfg = load_default()?;
        let env: HashMap<String, String> = std::env::vars().collect();
        cfg.apply_env(&env)?;
        cfg.normalize_and_validate()?;
        Ok(cfg)
    }

    /// Apply `HOST`, `PORT`, `APP_ENV`, `DATA_FILE`, `LOG_FORMAT` and
    /// `TOKIO_WORKER_THREADS` overrides. `NODE_ENV` stands in for `APP_ENV`
    /// when the latter is unset.
    pub fn apply_env(&mut self, env: &HashMap<String, String>) -> Result<()> {
        if let Some(host) = env.get("HOST") {
            self.server.host = host.clone();
        }
        if let Some(port) = env.get("PORT") {
            self.server.port = port
                .trim()
                .parse::<u16>()
                .map_err(|e| anyhow!("PORT `{port}` is not a valid port: {e}"))?;
        }
        if let Some(mode) = env.get("APP_ENV") {
            self.server.mode = Mode::parse(mode)?;
        } else if let Some(node_env) = env.get("NODE_ENV") {
            self.server.mode = Mode::from_node_env(node_env);
        }
        if let Some(threads) = env.get("TOKIO_WORKER_THREADS") {
            self.server.worker_threads = threads.trim().parse::<usize>().ok();
        }
        if let Some(path) = env.get("DATA_FILE") {
            self.storage.data_file = path.clone();
        }
        if let Some(format) = env.get("LOG_FORMAT") {
            self.log.format = format.clone();
        }
        Ok(())
    }

    pub fn normalize_and_validate(&mut self) -> Result<()> {
        self.server.normalize()?;
        self.storage.validate()?;
        Ok(())
    }
}

impl ServerConfig {
    fn normalize(&mut self) -> Result<()> {
        if self.host.trim().is_empty() {
            self.host = DEFAULT_HOST.to_string();
        }
        if self.port == 0 {
            return Err(anyhow!("server.port must be in 1..=65535"));
        }
        match self.worker_threads {
            Some(w) if w > 0 => {}
            _ => self.worker_threads = Some(DEFAULT_WORKER_THREADS),
        }
        Ok(())
    }

    /// Whether 500 responses may carry the underlying error detail.
    pub fn expose_errors(&self) -> bool {
        self.mode == Mode::Development
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl StorageConfig {
    fn validate(&self) -> Result<()> {
        if self.data_file.trim().is_empty() {
            return Err(anyhow!("storage.data_file is empty; set it in config.toml or DATA_FILE"));
        }
        Ok(())
    }
}
