//! Server settings loaded via OrthoConfig.
//!
//! Values come from `--env`/`--host`/`--port` flags, `BURZCONTENT_*`
//! environment variables, or a configuration file, in OrthoConfig's usual
//! precedence order.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::str::FromStr;

use ortho_config::OrthoConfig;
use serde::Deserialize;
use thiserror::Error;

use crate::telemetry::LogFormat;

/// Port used when none is configured.
pub const DEFAULT_PORT: u16 = 8000;

/// Deployment environment the server runs in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Environment {
    #[default]
    Development,
    Staging,
    Production,
}

impl Environment {
    /// Log output suited to the environment: pretty locally, JSON elsewhere.
    pub fn log_format(self) -> LogFormat {
        match self {
            Self::Development => LogFormat::Pretty,
            Self::Staging | Self::Production => LogFormat::Json,
        }
    }

    fn default_host(self) -> IpAddr {
        match self {
            Self::Development => IpAddr::V4(Ipv4Addr::LOCALHOST),
            Self::Staging | Self::Production => IpAddr::V4(Ipv4Addr::UNSPECIFIED),
        }
    }
}

impl FromStr for Environment {
    type Err = SettingsError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "development" => Ok(Self::Development),
            "staging" => Ok(Self::Staging),
            "production" => Ok(Self::Production),
            _ => Err(SettingsError::UnknownEnvironment {
                value: value.to_owned(),
            }),
        }
    }
}

/// Errors raised while interpreting loaded settings.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SettingsError {
    #[error("unknown environment {value:?}; expected development, staging or production")]
    UnknownEnvironment { value: String },
    #[error("invalid bind host {value:?}")]
    InvalidHost { value: String },
}

/// Configuration values controlling how the HTTP server starts.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "BURZCONTENT")]
pub struct ServerSettings {
    /// Deployment environment: development, staging or production.
    pub env: Option<String>,
    /// Bind host; defaults depend on the environment.
    pub host: Option<String>,
    /// Bind port.
    #[ortho_config(default = 8000)]
    pub port: u16,
}

impl ServerSettings {
    /// Parsed environment, defaulting to development.
    pub fn environment(&self) -> Result<Environment, SettingsError> {
        self.env
            .as_deref()
            .map_or(Ok(Environment::default()), Environment::from_str)
    }

    /// Socket address to bind.
    ///
    /// # Examples
    /// ```
    /// use burzcontent::settings::ServerSettings;
    ///
    /// let settings = ServerSettings {
    ///     env: Some("production".into()),
    ///     host: None,
    ///     port: 9000,
    /// };
    /// assert_eq!(settings.bind_addr().unwrap().to_string(), "0.0.0.0:9000");
    /// ```
    pub fn bind_addr(&self) -> Result<SocketAddr, SettingsError> {
        let environment = self.environment()?;
        let host = match self.host.as_deref() {
            Some(raw) => raw
                .trim()
                .parse::<IpAddr>()
                .map_err(|_| SettingsError::InvalidHost {
                    value: raw.to_owned(),
                })?,
            None => environment.default_host(),
        };
        Ok(SocketAddr::new(host, self.port))
    }
}
