//! Handles settings for the application. Configuration is written in
//! `bahikhata.toml`; every key can be overridden with `BAHIKHATA_`
//! environment variables (e.g. `BAHIKHATA_SERVER__URL`).

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct Server {
    /// Base URL of the persistence service exposing the ledger endpoints.
    pub url: String,
}

#[derive(Debug, Deserialize)]
pub struct App {
    pub level: String,
}

#[derive(Debug, Deserialize)]
pub struct Settings {
    pub server: Server,
    pub app: App,
    /// Company scope applied to every fetch; `None` means unscoped.
    pub company: Option<String>,
    /// Where export files land. Defaults to the working directory.
    pub output_dir: Option<String>,
}

impl Settings {
    pub fn new() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .set_default("server.url", "http://127.0.0.1:3000")?
            .set_default("app.level", "info")?
            .add_source(File::with_name("bahikhata").required(false))
            .add_source(Environment::with_prefix("BAHIKHATA").separator("__"))
            .build()?;

        settings.try_deserialize()
    }
}
