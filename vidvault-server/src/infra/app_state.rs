use std::{fmt, num::NonZeroUsize, sync::Arc};

use vidvault_core::{CatalogService, PostgresDatabase};

use crate::infra::config::Config;

#[derive(Clone)]
pub struct AppState {
    pub catalog: CatalogService,
    /// Present when the catalog is backed by PostgreSQL; health checks ping it.
    pub postgres: Option<Arc<PostgresDatabase>>,
    pub config: Arc<Config>,
}

impl fmt::Debug for AppState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppState")
            .field("postgres", &self.postgres.is_some())
            .finish_non_exhaustive()
    }
}

impl AppState {
    pub fn new(
        catalog: CatalogService,
        postgres: Option<Arc<PostgresDatabase>>,
        config: Arc<Config>,
    ) -> Self {
        Self {
            catalog,
            postgres,
            config,
        }
    }

    pub fn page_size(&self) -> NonZeroUsize {
        self.config.catalog.page_size
    }

    pub fn recent_days(&self) -> u32 {
        self.config.catalog.recent_days
    }
}
