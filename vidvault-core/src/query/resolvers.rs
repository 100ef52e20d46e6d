//! Single-criterion resolvers for movies and shows.
//!
//! Every resolver returns an empty list for blank input or an unknown
//! genre/actor; only store failures are errors.

use tracing::debug;
use vidvault_model::{Actor, Movie, TvShow};

use crate::database::like::contains_pattern;
use crate::database::ports::filter::{ActorColumn, MediaColumn};
use crate::error::Result;
use crate::query::filters::{MediaFilter, non_blank, positive_year};
use crate::query::service::CatalogService;
use crate::query::years_running::RunSpan;

impl CatalogService {
    pub async fn all_movies(&self) -> Result<Vec<Movie>> {
        self.uow.movies.list_all().await
    }

    pub async fn all_tv_shows(&self) -> Result<Vec<TvShow>> {
        self.uow.tv_shows.list_all().await
    }

    pub async fn resolve_movies(&self, filter: &MediaFilter) -> Result<Vec<Movie>> {
        debug!(filter = filter.name(), value = filter.value(), "resolving movies");
        match filter {
            MediaFilter::Title(title) => self.movies_by_title(title).await,
            MediaFilter::Service(service) => {
                self.movies_by_service(service).await
            }
            MediaFilter::Genre(genre) => self.movies_by_genre(genre).await,
            MediaFilter::Year(year) => self.movies_by_year(year).await,
            MediaFilter::Actor(actor) => self.movies_by_actor(actor).await,
        }
    }

    pub async fn resolve_tv_shows(
        &self,
        filter: &MediaFilter,
    ) -> Result<Vec<TvShow>> {
        debug!(filter = filter.name(), value = filter.value(), "resolving tv shows");
        match filter {
            MediaFilter::Title(title) => self.tv_shows_by_title(title).await,
            MediaFilter::Service(service) => {
                self.tv_shows_by_service(service).await
            }
            MediaFilter::Genre(genre) => self.tv_shows_by_genre(genre).await,
            MediaFilter::Year(year) => self.tv_shows_by_year(year).await,
            MediaFilter::Actor(actor) => self.tv_shows_by_actor(actor).await,
        }
    }

    pub async fn movies_by_title(&self, title: &str) -> Result<Vec<Movie>> {
        let Some(title) = non_blank(title) else {
            return Ok(Vec::new());
        };
        self.uow
            .movies
            .filter_like(MediaColumn::Title, &contains_pattern(title))
            .await
    }

    pub async fn movies_by_service(&self, service: &str) -> Result<Vec<Movie>> {
        let Some(service) = non_blank(service) else {
            return Ok(Vec::new());
        };
        self.uow
            .movies
            .filter_exact(MediaColumn::Service, service)
            .await
    }

    pub async fn movies_by_genre(&self, genre: &str) -> Result<Vec<Movie>> {
        let Some(genre) = non_blank(genre) else {
            return Ok(Vec::new());
        };
        let Some(genre) = self.uow.genres.find_by_name(genre).await? else {
            return Ok(Vec::new());
        };

        let links = self.uow.genre_links.movies_with_genre(genre.id).await?;
        let mut movies = Vec::with_capacity(links.len());
        for link in links {
            if let Some(movie) = self.uow.movies.get_by_id(link.movie_id).await? {
                movies.push(movie);
            }
        }
        Ok(movies)
    }

    pub async fn movies_by_year(&self, year: &str) -> Result<Vec<Movie>> {
        let Some(year) = positive_year(year) else {
            return Ok(Vec::new());
        };
        self.uow.movies.filter_exact(MediaColumn::Year, year).await
    }

    pub async fn movies_by_actor(&self, full_name: &str) -> Result<Vec<Movie>> {
        let Some(actor) = self.actor_by_full_name(full_name).await? else {
            return Ok(Vec::new());
        };

        let credits = self.uow.credits.movies_of_actor(actor.id).await?;
        let mut movies = Vec::with_capacity(credits.len());
        for credit in credits {
            if let Some(movie) =
                self.uow.movies.get_by_id(credit.movie_id).await?
            {
                movies.push(movie);
            }
        }
        Ok(movies)
    }

    pub async fn tv_shows_by_title(&self, title: &str) -> Result<Vec<TvShow>> {
        let Some(title) = non_blank(title) else {
            return Ok(Vec::new());
        };
        self.uow
            .tv_shows
            .filter_like(MediaColumn::Title, &contains_pattern(title))
            .await
    }

    pub async fn tv_shows_by_service(
        &self,
        service: &str,
    ) -> Result<Vec<TvShow>> {
        let Some(service) = non_blank(service) else {
            return Ok(Vec::new());
        };
        self.uow
            .tv_shows
            .filter_exact(MediaColumn::Service, service)
            .await
    }

    pub async fn tv_shows_by_genre(&self, genre: &str) -> Result<Vec<TvShow>> {
        let Some(genre) = non_blank(genre) else {
            return Ok(Vec::new());
        };
        let Some(genre) = self.uow.genres.find_by_name(genre).await? else {
            return Ok(Vec::new());
        };

        let links = self.uow.genre_links.tv_shows_with_genre(genre.id).await?;
        let mut shows = Vec::with_capacity(links.len());
        for link in links {
            if let Some(show) =
                self.uow.tv_shows.get_by_id(link.tv_show_id).await?
            {
                shows.push(show);
            }
        }
        Ok(shows)
    }

    /// Shows whose years-running expansion contains `year` verbatim, e.g.
    /// `"2013"` matches `"2012-2015"` but `"02013"` matches nothing.
    pub async fn tv_shows_by_year(&self, year: &str) -> Result<Vec<TvShow>> {
        let Some(year) = positive_year(year) else {
            return Ok(Vec::new());
        };
        let current_year = self.current_year();

        let shows = self.uow.tv_shows.list_all().await?;
        Ok(shows
            .into_iter()
            .filter(|show| match RunSpan::parse(&show.year) {
                Some(span) => {
                    span.years(current_year).iter().any(|running| running == year)
                }
                None => {
                    debug!(
                        tv_show_id = %show.id,
                        year = %show.year,
                        "skipping show with malformed year"
                    );
                    false
                }
            })
            .collect())
    }

    pub async fn tv_shows_by_actor(
        &self,
        full_name: &str,
    ) -> Result<Vec<TvShow>> {
        let Some(actor) = self.actor_by_full_name(full_name).await? else {
            return Ok(Vec::new());
        };

        let credits = self.uow.credits.tv_shows_of_actor(actor.id).await?;
        let mut shows = Vec::with_capacity(credits.len());
        for credit in credits {
            if let Some(show) =
                self.uow.tv_shows.get_by_id(credit.tv_show_id).await?
            {
                shows.push(show);
            }
        }
        Ok(shows)
    }

    /// The lowest-id actor with exactly this full name.
    pub(crate) async fn actor_by_full_name(
        &self,
        full_name: &str,
    ) -> Result<Option<Actor>> {
        let Some(full_name) = non_blank(full_name) else {
            return Ok(None);
        };
        let actors = self
            .uow
            .actors
            .filter_exact(ActorColumn::FullName, full_name)
            .await?;
        Ok(actors.into_iter().next())
    }
}
