//! PostgreSQL infrastructure adapters implementing the database ports.

pub mod repositories;

pub use repositories::actors::PostgresActorRepository;
pub use repositories::credits::PostgresCreditsRepository;
pub use repositories::genre_links::PostgresGenreLinksRepository;
pub use repositories::genres::PostgresGenreRepository;
pub use repositories::movies::PostgresMovieRepository;
pub use repositories::seasons::PostgresSeasonRepository;
pub use repositories::tv_shows::PostgresTvShowRepository;
