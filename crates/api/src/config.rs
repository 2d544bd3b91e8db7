//! Process configuration, read from `STOREFRONT_*` environment variables.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;

use storefront_inquiries::SubmissionKind;
use storefront_observability::{LogConfig, LogFormat};

pub const ENV_BIND: &str = "STOREFRONT_BIND";
pub const ENV_CATALOG_PATH: &str = "STOREFRONT_CATALOG_PATH";
pub const ENV_CONTACT_DELAY_MS: &str = "STOREFRONT_CONTACT_DELAY_MS";
pub const ENV_NEWSLETTER_DELAY_MS: &str = "STOREFRONT_NEWSLETTER_DELAY_MS";
pub const ENV_LOG_LEVEL: &str = "STOREFRONT_LOG_LEVEL";
pub const ENV_LOG_FORMAT: &str = "STOREFRONT_LOG_FORMAT";

const DEFAULT_BIND: &str = "0.0.0.0:8080";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{var}: invalid socket address {value:?}")]
    InvalidAddr { var: &'static str, value: String },

    #[error("{var}: expected a whole number of milliseconds, got {value:?}")]
    InvalidMillis { var: &'static str, value: String },
}

/// Artificial latency for simulated form submissions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubmissionDelays {
    /// Contact and product-inquiry forms.
    pub contact: Duration,
    pub newsletter: Duration,
}

impl SubmissionDelays {
    pub const NONE: Self = Self {
        contact: Duration::ZERO,
        newsletter: Duration::ZERO,
    };

    pub fn for_kind(&self, kind: SubmissionKind) -> Duration {
        match kind {
            SubmissionKind::Contact | SubmissionKind::ProductInquiry => self.contact,
            SubmissionKind::Newsletter => self.newsletter,
        }
    }
}

impl Default for SubmissionDelays {
    fn default() -> Self {
        Self {
            contact: SubmissionKind::Contact.default_delay(),
            newsletter: SubmissionKind::Newsletter.default_delay(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub bind: SocketAddr,
    /// Override for the packaged catalog document.
    pub catalog_path: Option<PathBuf>,
    pub delays: SubmissionDelays,
    pub log: LogConfig,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            bind: SocketAddr::from(([0, 0, 0, 0], 8080)),
            catalog_path: None,
            delays: SubmissionDelays::default(),
            log: LogConfig::default(),
        }
    }
}

impl ApiConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary variable source; unset or blank values take defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let defaults = Self::default();

        let bind = get(ENV_BIND).unwrap_or_else(|| DEFAULT_BIND.to_string());
        let bind = bind.trim().parse().map_err(|_| ConfigError::InvalidAddr {
            var: ENV_BIND,
            value: bind.clone(),
        })?;

        let millis = |var: &'static str, default: Duration| -> Result<Duration, ConfigError> {
            match get(var) {
                None => Ok(default),
                Some(v) => v
                    .trim()
                    .parse::<u64>()
                    .map(Duration::from_millis)
                    .map_err(|_| ConfigError::InvalidMillis { var, value: v }),
            }
        };

        let delays = SubmissionDelays {
            contact: millis(ENV_CONTACT_DELAY_MS, defaults.delays.contact)?,
            newsletter: millis(ENV_NEWSLETTER_DELAY_MS, defaults.delays.newsletter)?,
        };

        let log = LogConfig {
            level: get(ENV_LOG_LEVEL).unwrap_or(defaults.log.level),
            format: get(ENV_LOG_FORMAT)
                .map(|f| LogFormat::parse(&f))
                .unwrap_or(defaults.log.format),
        };

        Ok(Self {
            bind,
            catalog_path: get(ENV_CATALOG_PATH).map(PathBuf::from),
            delays,
            log,
        })
    }
}
