use axum::http::HeaderValue;
use std::num::NonZeroUsize;
use thiserror::Error;

use super::models::{Config, CorsConfig};

const LARGE_PAGE_SIZE: usize = 100;

#[derive(Debug, Error)]
pub enum ConfigGuardRailError {
    #[error("catalog page size must be at least 1")]
    ZeroPageSize,
    #[error("invalid CORS configuration: {reason}")]
    InvalidCorsConfig { reason: String },
}

#[derive(Debug, Clone)]
pub struct ConfigWarning {
    pub message: String,
    pub hint: Option<String>,
}

#[derive(Debug, Default, Clone)]
pub struct ConfigWarnings {
    pub items: Vec<ConfigWarning>,
}

impl ConfigWarnings {
    pub fn push<S: Into<String>>(&mut self, message: S) {
        self.items.push(ConfigWarning {
            message: message.into(),
            hint: None,
        });
    }

    pub fn push_with_hint<S: Into<String>, H: Into<String>>(
        &mut self,
        message: S,
        hint: H,
    ) {
        self.items.push(ConfigWarning {
            message: message.into(),
            hint: Some(hint.into()),
        });
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn extend(&mut self, other: ConfigWarnings) {
        self.items.extend(other.items);
    }
}

pub fn page_size(raw: usize) -> Result<NonZeroUsize, ConfigGuardRailError> {
    NonZeroUsize::new(raw).ok_or(ConfigGuardRailError::ZeroPageSize)
}

pub fn apply_guard_rails(
    config: &Config,
) -> Result<ConfigWarnings, ConfigGuardRailError> {
    let mut warnings = ConfigWarnings::default();

    validate_cors(&config.cors)?;

    if config.catalog.page_size.get() > LARGE_PAGE_SIZE {
        warnings.push(format!(
            "catalog page size {} is unusually large; every listing loads the full result set",
            config.catalog.page_size
        ));
    }

    if config.catalog.recent_days == 0 {
        warnings.push_with_hint(
            "CATALOG_RECENT_DAYS is 0; only titles added today count as recently added",
            "Raise CATALOG_RECENT_DAYS to widen the window",
        );
    }

    if !config.dev_mode
        && config.cors.allows_any_origin()
        && !config.cors.allowed_origins.is_empty()
    {
        warnings.push(
            "CORS wildcard origin configured outside dev mode; any site may read the catalog",
        );
    }

    Ok(warnings)
}

fn validate_cors(cors: &CorsConfig) -> Result<(), ConfigGuardRailError> {
    for origin in cors.allowed_origins.iter().filter(|o| o.as_str() != "*") {
        HeaderValue::from_str(origin).map_err(|_| {
            ConfigGuardRailError::InvalidCorsConfig {
                reason: format!(
                    "invalid origin `{}` in CORS_ALLOWED_ORIGINS",
                    origin
                ),
            }
        })?;
        if !origin.contains("://") {
            return Err(ConfigGuardRailError::InvalidCorsConfig {
                reason: format!("origin `{}` is missing a scheme", origin),
            });
        }
    }

    Ok(())
}
