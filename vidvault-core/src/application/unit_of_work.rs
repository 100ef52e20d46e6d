use std::any::type_name_of_val;
use std::fmt;
use std::sync::Arc;

use crate::database::memory::InMemoryCatalog;
use crate::database::ports::{
    actors::ActorRepository, credits::CreditsRepository,
    genre_links::GenreLinksRepository, genres::GenreRepository,
    movies::MovieRepository, seasons::SeasonRepository,
    tv_shows::TvShowRepository,
};
#[cfg(feature = "database")]
use crate::database::{
    infrastructure::postgres::{
        PostgresActorRepository, PostgresCreditsRepository,
        PostgresGenreLinksRepository, PostgresGenreRepository,
        PostgresMovieRepository, PostgresSeasonRepository,
        PostgresTvShowRepository,
    },
    postgres::PostgresDatabase,
};

/// Aggregates every catalog repository port used by the query layer.
///
/// Both constructors wire all ports to the same backend, so a link written
/// through one port is visible to lookups through another.
#[derive(Clone)]
pub struct CatalogUnitOfWork {
    pub movies: Arc<dyn MovieRepository>,
    pub tv_shows: Arc<dyn TvShowRepository>,
    pub actors: Arc<dyn ActorRepository>,
    pub genres: Arc<dyn GenreRepository>,
    pub genre_links: Arc<dyn GenreLinksRepository>,
    pub credits: Arc<dyn CreditsRepository>,
    pub seasons: Arc<dyn SeasonRepository>,
}

impl fmt::Debug for CatalogUnitOfWork {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CatalogUnitOfWork")
            .field("movies", &type_name_of_val(self.movies.as_ref()))
            .field("tv_shows", &type_name_of_val(self.tv_shows.as_ref()))
            .field("actors", &type_name_of_val(self.actors.as_ref()))
            .field("genres", &type_name_of_val(self.genres.as_ref()))
            .field(
                "genre_links",
                &type_name_of_val(self.genre_links.as_ref()),
            )
            .field("credits", &type_name_of_val(self.credits.as_ref()))
            .field("seasons", &type_name_of_val(self.seasons.as_ref()))
            .finish()
    }
}

impl CatalogUnitOfWork {
    /// Build a unit of work backed by the provided Postgres adapter.
    #[cfg(feature = "database")]
    pub fn from_postgres(postgres: &PostgresDatabase) -> Self {
        let pool = postgres.pool().clone();
        Self {
            movies: Arc::new(PostgresMovieRepository::new(pool.clone())),
            tv_shows: Arc::new(PostgresTvShowRepository::new(pool.clone())),
            actors: Arc::new(PostgresActorRepository::new(pool.clone())),
            genres: Arc::new(PostgresGenreRepository::new(pool.clone())),
            genre_links: Arc::new(PostgresGenreLinksRepository::new(
                pool.clone(),
            )),
            credits: Arc::new(PostgresCreditsRepository::new(pool.clone())),
            seasons: Arc::new(PostgresSeasonRepository::new(pool)),
        }
    }

    /// Build a unit of work whose ports all share one in-memory catalog.
    pub fn in_memory(catalog: InMemoryCatalog) -> Self {
        Self {
            movies: Arc::new(catalog.clone()),
            tv_shows: Arc::new(catalog.clone()),
            actors: Arc::new(catalog.clone()),
            genres: Arc::new(catalog.clone()),
            genre_links: Arc::new(catalog.clone()),
            credits: Arc::new(catalog.clone()),
            seasons: Arc::new(catalog),
        }
    }
}
