use async_trait::async_trait;
use vidvault_model::{GenreId, MovieGenre, MovieId, TvShowGenre, TvShowId};

use crate::error::Result;

/// The `movie_genre` and `tv_show_genre` join tables.
///
/// Rows come back in the order they were linked.
#[async_trait]
pub trait GenreLinksRepository: Send + Sync {
    async fn movies_with_genre(
        &self,
        genre_id: GenreId,
    ) -> Result<Vec<MovieGenre>>;

    async fn genres_of_movie(
        &self,
        movie_id: MovieId,
    ) -> Result<Vec<MovieGenre>>;

    async fn tv_shows_with_genre(
        &self,
        genre_id: GenreId,
    ) -> Result<Vec<TvShowGenre>>;

    async fn genres_of_tv_show(
        &self,
        tv_show_id: TvShowId,
    ) -> Result<Vec<TvShowGenre>>;

    async fn link_movie(&self, link: MovieGenre) -> Result<()>;

    async fn link_tv_show(&self, link: TvShowGenre) -> Result<()>;
}
