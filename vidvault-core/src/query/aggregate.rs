//! Info views: a title stitched together with its genres, cast and, for
//! shows, the season/episode tree.

use vidvault_model::{
    ActorId, EpisodeInfo, GenreId, Movie, MovieInfo, SeasonInfo, TvShow,
    TvShowInfo,
};

use crate::database::ports::filter::MediaColumn;
use crate::error::Result;
use crate::query::service::CatalogService;

impl CatalogService {
    /// `None` when no movie has exactly this title; the lowest id wins on
    /// duplicates.
    pub async fn movie_info(&self, title: &str) -> Result<Option<MovieInfo>> {
        let movies = self
            .uow
            .movies
            .filter_exact(MediaColumn::Title, title)
            .await?;
        match movies.into_iter().next() {
            Some(movie) => self.build_movie_info(movie).await.map(Some),
            None => Ok(None),
        }
    }

    pub async fn tv_show_info(&self, title: &str) -> Result<Option<TvShowInfo>> {
        let shows = self
            .uow
            .tv_shows
            .filter_exact(MediaColumn::Title, title)
            .await?;
        match shows.into_iter().next() {
            Some(show) => self.build_tv_show_info(show).await.map(Some),
            None => Ok(None),
        }
    }

    pub async fn build_movie_info(&self, movie: Movie) -> Result<MovieInfo> {
        let genre_ids: Vec<GenreId> = self
            .uow
            .genre_links
            .genres_of_movie(movie.id)
            .await?
            .into_iter()
            .map(|link| link.genre_id)
            .collect();
        let actor_ids: Vec<ActorId> = self
            .uow
            .credits
            .cast_of_movie(movie.id)
            .await?
            .into_iter()
            .map(|credit| credit.actor_id)
            .collect();

        Ok(MovieInfo {
            movie_id: movie.id,
            title: movie.title,
            year: movie.year,
            description: movie.description,
            url: movie.url,
            stars: self.actor_names(actor_ids).await?,
            genres: self.genre_names(genre_ids).await?,
            image_url: movie.image_url,
            avg_rating: movie.avg_rating,
        })
    }

    pub async fn build_tv_show_info(&self, show: TvShow) -> Result<TvShowInfo> {
        let genre_ids: Vec<GenreId> = self
            .uow
            .genre_links
            .genres_of_tv_show(show.id)
            .await?
            .into_iter()
            .map(|link| link.genre_id)
            .collect();
        let actor_ids: Vec<ActorId> = self
            .uow
            .credits
            .cast_of_tv_show(show.id)
            .await?
            .into_iter()
            .map(|credit| credit.actor_id)
            .collect();

        let seasons = self.uow.seasons.seasons_for_show(show.id).await?;
        let mut season_info = Vec::with_capacity(seasons.len());
        for season in seasons {
            let episodes = self
                .uow
                .seasons
                .episodes_for_season(show.id, season.season_number)
                .await?;
            season_info.push(SeasonInfo {
                season: season.season_number,
                episodes: episodes.into_iter().map(EpisodeInfo::from).collect(),
            });
        }

        Ok(TvShowInfo {
            tv_show_id: show.id,
            title: show.title,
            year: show.year,
            description: show.description,
            season_info,
            stars: self.actor_names(actor_ids).await?,
            genres: self.genre_names(genre_ids).await?,
            image_url: show.image_url,
            avg_rating: show.avg_rating,
        })
    }

    async fn genre_names(&self, ids: Vec<GenreId>) -> Result<Vec<String>> {
        let mut names = Vec::with_capacity(ids.len());
        for id in ids {
            if let Some(genre) = self.uow.genres.get_by_id(id).await? {
                names.push(genre.genre_type);
            }
        }
        Ok(names)
    }

    async fn actor_names(&self, ids: Vec<ActorId>) -> Result<Vec<String>> {
        let mut names = Vec::with_capacity(ids.len());
        for id in ids {
            if let Some(actor) = self.uow.actors.get_by_id(id).await? {
                names.push(actor.full_name);
            }
        }
        Ok(names)
    }
}
