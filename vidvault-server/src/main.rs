//! # vidvault server
//!
//! Serves the movie/TV catalog over HTTP, backed by PostgreSQL or, with
//! `--in-memory`, by a process-local store that starts empty.

use std::{net::SocketAddr, path::PathBuf, sync::Arc};

use anyhow::{Context, anyhow};
use clap::{Args as ClapArgs, Parser, Subcommand};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use vidvault_core::{
    CatalogService, CatalogUnitOfWork, InMemoryCatalog, PostgresDatabase,
};
use vidvault_server::{
    AppState, create_app,
    infra::config::{Config, ConfigLoad, ConfigLoader, ConfigLoaderOptions},
};

/// CLI entry point
#[derive(Parser, Debug)]
#[command(name = "vidvault-server", version)]
#[command(about = "HTTP query API for a movie and TV catalog")]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,

    #[command(flatten)]
    serve: ServeArgs,
}

#[derive(ClapArgs, Debug, Clone)]
struct ServeArgs {
    /// Server port (overrides config)
    #[arg(short, long, env = "SERVER_PORT")]
    port: Option<u16>,

    /// Server host (overrides config)
    #[arg(long, env = "SERVER_HOST")]
    host: Option<String>,

    /// Path to a vidvault.toml configuration file
    #[arg(short, long, env = "VIDVAULT_CONFIG")]
    config: Option<PathBuf>,

    /// Environment file to load before reading variables
    #[arg(long)]
    env_file: Option<PathBuf>,

    /// Serve from an empty in-memory catalog instead of PostgreSQL
    #[arg(long, env = "VIDVAULT_IN_MEMORY", default_value_t = false)]
    in_memory: bool,
}

#[derive(Debug, Subcommand)]
enum Command {
    #[command(subcommand)]
    Db(DbCommand),
}

#[derive(Debug, Subcommand)]
enum DbCommand {
    /// Check that the configured database is reachable and exit
    Preflight,
    /// Apply database migrations and exit
    Migrate,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if let Some(command) = cli.command {
        match command {
            Command::Db(DbCommand::Preflight) => {
                run_db_preflight(&cli.serve).await?;
                return Ok(());
            }
            Command::Db(DbCommand::Migrate) => {
                run_db_migrate(&cli.serve).await?;
                return Ok(());
            }
        }
    }

    run_server(cli.serve).await
}

async fn run_db_preflight(args: &ServeArgs) -> anyhow::Result<()> {
    let config = load_runtime_config(args)?;
    let pg = connect(&config)
        .await
        .context("failed to connect to PostgreSQL for preflight")?;
    pg.ping().await.context("database preflight failed")?;
    info!("Database preflight passed");
    Ok(())
}

async fn run_db_migrate(args: &ServeArgs) -> anyhow::Result<()> {
    let config = load_runtime_config(args)?;
    let pg = connect(&config)
        .await
        .context("failed to connect to PostgreSQL for migration")?;
    pg.initialize_schema()
        .await
        .context("database migration failed")?;
    info!("Database migrations applied successfully");
    Ok(())
}

async fn connect(config: &Config) -> anyhow::Result<PostgresDatabase> {
    let url = config.database.primary_url.as_deref().ok_or_else(|| {
        anyhow!("no database configured; set DATABASE_URL or use --in-memory")
    })?;
    Ok(PostgresDatabase::new(url).await?)
}

fn load_runtime_config(args: &ServeArgs) -> anyhow::Result<Arc<Config>> {
    let ConfigLoad {
        mut config,
        warnings,
    } = ConfigLoader::with_options(ConfigLoaderOptions {
        config_path: args.config.clone(),
        env_file: args.env_file.clone(),
    })
    .load()
    .context("failed to load configuration")?;

    if let Some(port) = args.port {
        config.server.port = port;
    }
    if let Some(host) = args.host.clone() {
        config.server.host = host;
    }

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,tower_http=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    if config.metadata.env_file_loaded {
        info!("loaded .env file");
    }
    if let Some(path) = &config.metadata.config_path {
        info!(path = %path.display(), "configuration file loaded");
    }

    for warning in &warnings.items {
        match &warning.hint {
            Some(hint) => {
                warn!(message = %warning.message, hint = %hint, "configuration warning")
            }
            None => {
                warn!(message = %warning.message, "configuration warning")
            }
        }
    }

    info!(
        catalog.page_size = config.catalog.page_size.get(),
        catalog.recent_days = config.catalog.recent_days,
        dev_mode = config.dev_mode,
        "catalog configuration in effect"
    );

    Ok(Arc::new(config))
}

async fn run_server(args: ServeArgs) -> anyhow::Result<()> {
    let config = load_runtime_config(&args)?;

    let (unit_of_work, postgres) = if args.in_memory {
        info!("serving from an in-memory catalog");
        (CatalogUnitOfWork::in_memory(InMemoryCatalog::new()), None)
    } else {
        let pg = connect(&config)
            .await
            .context("failed to connect to PostgreSQL")?;
        pg.initialize_schema()
            .await
            .context("database migration failed")?;
        let stats = pg.pool_stats();
        info!(
            pool.max = stats.max_size,
            pool.min = stats.min_idle,
            "connected to PostgreSQL"
        );
        (CatalogUnitOfWork::from_postgres(&pg), Some(Arc::new(pg)))
    };

    let state = AppState::new(
        CatalogService::new(unit_of_work),
        postgres,
        Arc::clone(&config),
    );
    let app = create_app(state);

    let listener = tokio::net::TcpListener::bind((
        config.server.host.as_str(),
        config.server.port,
    ))
    .await
    .with_context(|| format!("failed to bind {}", config.bind_address()))?;
    let addr: SocketAddr = listener.local_addr()?;
    info!(%addr, "vidvault server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        warn!(error = %err, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
}
