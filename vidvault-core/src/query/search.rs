//! Search-all: one query fanned out over every applicable resolver.

use tracing::debug;
use vidvault_model::{CatalogItem, Movie, TvShow};

use crate::error::Result;
use crate::query::filters::non_blank;
use crate::query::merge::merge_unique_by_id;
use crate::query::service::CatalogService;

impl CatalogService {
    /// Movies matching `query` by title, service, genre or year; unique and
    /// ascending by id.
    pub async fn search_movies(&self, query: &str) -> Result<Vec<Movie>> {
        let Some(query) = non_blank(query) else {
            return Ok(Vec::new());
        };

        let mut hits = self.movies_by_title(query).await?;
        hits.extend(self.movies_by_service(query).await?);
        hits.extend(self.movies_by_genre(query).await?);
        hits.extend(self.movies_by_year(query).await?);

        let movies = merge_unique_by_id(hits);
        debug!(query, movies = movies.len(), "movie search");
        Ok(movies)
    }

    /// Shows matching `query` by title, service, genre, year or actor;
    /// unique and ascending by id.
    pub async fn search_tv_shows(&self, query: &str) -> Result<Vec<TvShow>> {
        let Some(query) = non_blank(query) else {
            return Ok(Vec::new());
        };

        let mut hits = self.tv_shows_by_title(query).await?;
        hits.extend(self.tv_shows_by_service(query).await?);
        hits.extend(self.tv_shows_by_genre(query).await?);
        hits.extend(self.tv_shows_by_year(query).await?);
        hits.extend(self.tv_shows_by_actor(query).await?);

        let shows = merge_unique_by_id(hits);
        debug!(query, tv_shows = shows.len(), "tv show search");
        Ok(shows)
    }

    /// Movie hits followed by show hits, each already id-ordered.
    pub async fn search_all(&self, query: &str) -> Result<Vec<CatalogItem>> {
        let movies = self.search_movies(query).await?;
        let shows = self.search_tv_shows(query).await?;

        Ok(movies
            .into_iter()
            .map(CatalogItem::from)
            .chain(shows.into_iter().map(CatalogItem::from))
            .collect())
    }
}
