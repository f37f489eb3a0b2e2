//! Handles settings for the application. Configuration is written in
//! `settings.toml`; every key has a default so the file is optional.
use config::{Config, ConfigError, File};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct App {
    /// Log level passed to the tracing filter.
    pub level: String,
    /// IANA timezone name anchoring "now" (expiry alerts, month window).
    /// Unset means UTC.
    pub timezone: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct Settings {
    pub app: App,
}

impl Settings {
    pub fn new() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .set_default("app.level", "info")?
            .add_source(File::with_name("settings").required(false))
            .build()?;

        settings.try_deserialize()
    }
}
