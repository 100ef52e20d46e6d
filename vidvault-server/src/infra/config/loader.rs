use once_cell::sync::Lazy;
use std::{fs, path::PathBuf};
use thiserror::Error;
use url::Url;

use super::{
    models::{
        CatalogConfig, Config, ConfigMetadata, CorsConfig, DEFAULT_HOST,
        DEFAULT_PAGE_SIZE, DEFAULT_PORT, DEFAULT_RECENT_DAYS, DatabaseConfig,
        ServerConfig,
    },
    sources::{EnvConfig, FileConfig, FileDatabaseConfig},
    validation::{self, ConfigGuardRailError, ConfigWarnings},
};

static DEFAULT_CONFIG_LOCATIONS: Lazy<Vec<PathBuf>> = Lazy::new(|| {
    vec![
        PathBuf::from("vidvault.toml"),
        PathBuf::from("config/vidvault.toml"),
    ]
});

#[derive(Debug, Default, Clone)]
pub struct ConfigLoaderOptions {
    pub config_path: Option<PathBuf>,
    pub env_file: Option<PathBuf>,
}

/// Resolves [`Config`] from CLI-provided paths, the process environment,
/// an optional TOML file and built-in defaults, in that precedence.
#[derive(Debug, Default)]
pub struct ConfigLoader {
    options: ConfigLoaderOptions,
}

#[derive(Debug)]
pub struct ConfigLoad {
    pub config: Config,
    pub warnings: ConfigWarnings,
}

#[derive(Debug, Error)]
pub enum ConfigLoadError {
    #[error("configuration file {path} does not exist")]
    MissingConfig { path: PathBuf },
    #[error("environment file {path} does not exist")]
    MissingEnvFile { path: PathBuf },
    #[error("failed to read configuration file {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse configuration file {path}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("invalid database url")]
    InvalidDatabaseUrl {
        #[source]
        source: url::ParseError,
    },
    #[error("database username `{username}` cannot be encoded into a url")]
    InvalidDatabaseUsername { username: String },
    #[error("database password cannot be encoded into a url")]
    InvalidDatabasePassword,
    #[error(transparent)]
    GuardRail(#[from] ConfigGuardRailError),
    #[error("failed to load environment file")]
    EnvFile(#[from] dotenvy::Error),
}

impl ConfigLoader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: ConfigLoaderOptions) -> Self {
        Self { options }
    }

    pub fn with_config_path<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.options.config_path = Some(path.into());
        self
    }

    pub fn with_env_file<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.options.env_file = Some(path.into());
        self
    }

    pub fn load(&self) -> Result<ConfigLoad, ConfigLoadError> {
        let env_file_loaded = self.load_env_file()?;
        self.compose(EnvConfig::gather(), env_file_loaded)
    }

    /// An explicit env file must exist; the implicit `.env` is optional.
    fn load_env_file(&self) -> Result<bool, ConfigLoadError> {
        match &self.options.env_file {
            Some(path) => {
                if !path.exists() {
                    return Err(ConfigLoadError::MissingEnvFile {
                        path: path.clone(),
                    });
                }
                dotenvy::from_path(path)?;
                Ok(true)
            }
            None => match dotenvy::dotenv() {
                Ok(_) => Ok(true),
                Err(dotenvy::Error::Io(_)) => Ok(false),
                Err(err) => Err(err.into()),
            },
        }
    }

    /// Loads against an already gathered environment, skipping `.env`
    /// processing.
    pub fn load_with_env(
        &self,
        env: EnvConfig,
    ) -> Result<ConfigLoad, ConfigLoadError> {
        self.compose(env, false)
    }

    fn compose(
        &self,
        env: EnvConfig,
        env_file_loaded: bool,
    ) -> Result<ConfigLoad, ConfigLoadError> {
        let (file_config, config_path) = self.load_file_config(&env)?;
        let mut warnings = ConfigWarnings::default();

        if config_path.is_none() {
            warnings.push_with_hint(
                "No vidvault.toml detected; using environment variables and defaults",
                "Pass --config or set VIDVAULT_CONFIG to point at a configuration file",
            );
        }

        let file = file_config.unwrap_or_default();
        let FileConfig {
            server: file_server,
            database: file_database,
            catalog: file_catalog,
            cors: file_cors,
            dev_mode: file_dev_mode,
        } = file;

        let server = ServerConfig {
            host: env
                .server_host
                .clone()
                .or(file_server.host)
                .unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port: env.server_port.or(file_server.port).unwrap_or(DEFAULT_PORT),
        };

        let database = DatabaseConfig {
            primary_url: resolve_database_url(&env, &file_database)?,
        };

        let catalog = CatalogConfig {
            page_size: validation::page_size(
                env.page_size
                    .or(file_catalog.page_size)
                    .unwrap_or(DEFAULT_PAGE_SIZE),
            )?,
            recent_days: env
                .recent_days
                .or(file_catalog.recent_days)
                .unwrap_or(DEFAULT_RECENT_DAYS),
        };

        let cors = CorsConfig {
            allowed_origins: env
                .cors_allowed_origins
                .clone()
                .or(file_cors.allowed_origins)
                .unwrap_or_default(),
        };

        let config = Config {
            server,
            database,
            catalog,
            cors,
            dev_mode: env.dev_mode.or(file_dev_mode).unwrap_or(false),
            metadata: ConfigMetadata {
                config_path,
                env_file_loaded,
            },
        };

        warnings.extend(validation::apply_guard_rails(&config)?);

        Ok(ConfigLoad { config, warnings })
    }

    fn load_file_config(
        &self,
        env: &EnvConfig,
    ) -> Result<(Option<FileConfig>, Option<PathBuf>), ConfigLoadError> {
        let source = match (&self.options.config_path, &env.config_path) {
            (Some(explicit), _) => ConfigPathSource::Explicit(explicit.clone()),
            (None, Some(from_env)) => ConfigPathSource::Env(from_env.clone()),
            (None, None) => match DEFAULT_CONFIG_LOCATIONS
                .iter()
                .find(|candidate| candidate.exists())
            {
                Some(found) => ConfigPathSource::Default(found.clone()),
                None => return Ok((None, None)),
            },
        };

        let path = source.path().clone();
        if !path.exists() {
            if source.is_explicit() {
                return Err(ConfigLoadError::MissingConfig { path });
            }
            return Ok((None, None));
        }

        let contents = fs::read_to_string(&path).map_err(|err| {
            ConfigLoadError::Io {
                path: path.clone(),
                source: err,
            }
        })?;
        let file_config: FileConfig =
            toml::from_str(&contents).map_err(|err| ConfigLoadError::Parse {
                path: path.clone(),
                source: err,
            })?;

        Ok((Some(file_config), Some(path)))
    }
}

fn resolve_database_url(
    env: &EnvConfig,
    file_database: &FileDatabaseConfig,
) -> Result<Option<String>, ConfigLoadError> {
    if let Some(url) = non_blank(env.database_url.as_ref()) {
        return Ok(Some(url));
    }

    if let Some(stored_url) = file_database.url.as_deref() {
        let trimmed = stored_url.trim();
        if trimmed.is_empty() {
            return Ok(None);
        }
        let mut parsed = Url::parse(trimmed)
            .map_err(|source| ConfigLoadError::InvalidDatabaseUrl { source })?;
        if parsed.password().is_none()
            && let Some(password) = non_blank(env.database_password.as_ref())
        {
            parsed
                .set_password(Some(&password))
                .map_err(|_| ConfigLoadError::InvalidDatabasePassword)?;
        }
        return Ok(Some(parsed.to_string()));
    }

    let host = non_blank(env.database_host.as_ref());
    let user = non_blank(env.database_user.as_ref());
    let name = non_blank(env.database_name.as_ref());

    let (Some(host), Some(user), Some(name)) = (host, user, name) else {
        return Ok(None);
    };

    let port = env.database_port.unwrap_or(5432);
    let mut url = Url::parse(&format!("postgresql://{host}:{port}/{name}"))
        .map_err(|source| ConfigLoadError::InvalidDatabaseUrl { source })?;
    url.set_username(&user).map_err(|_| {
        ConfigLoadError::InvalidDatabaseUsername {
            username: user.clone(),
        }
    })?;
    if let Some(password) = non_blank(env.database_password.as_ref()) {
        url.set_password(Some(&password))
            .map_err(|_| ConfigLoadError::InvalidDatabasePassword)?;
    }

    Ok(Some(url.to_string()))
}

fn non_blank(value: Option<&String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty()).cloned()
}

#[derive(Debug, Clone)]
enum ConfigPathSource {
    Explicit(PathBuf),
    Env(PathBuf),
    Default(PathBuf),
}

impl ConfigPathSource {
    fn path(&self) -> &PathBuf {
        match self {
            ConfigPathSource::Explicit(path)
            | ConfigPathSource::Env(path)
            | ConfigPathSource::Default(path) => path,
        }
    }

    fn is_explicit(&self) -> bool {
        matches!(
            self,
            ConfigPathSource::Explicit(_) | ConfigPathSource::Env(_)
        )
    }
}
