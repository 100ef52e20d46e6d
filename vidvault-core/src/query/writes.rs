//! Inserts routed through the store. Each call is a single statement; there
//! is no multi-row transaction.

use tracing::info;
use vidvault_model::{
    Actor, ActorId, ActorMovie, ActorTvShow, Episode, Genre, GenreId, Movie,
    MovieGenre, MovieId, NewActor, NewEpisode, NewGenre, NewMovie, NewTvShow,
    Season, TvShow, TvShowGenre, TvShowId,
};

use crate::error::{CatalogError, Result};
use crate::query::service::CatalogService;
use crate::query::years_running::RunSpan;

fn require(field: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        Err(CatalogError::InvalidInput(format!("{field} must not be empty")))
    } else {
        Ok(())
    }
}

impl CatalogService {
    pub async fn add_movie(&self, movie: NewMovie) -> Result<Movie> {
        require("title", &movie.title)?;
        if !matches!(RunSpan::parse(&movie.year), Some(RunSpan::Single(_))) {
            return Err(CatalogError::InvalidInput(format!(
                "movie year {:?} must be a four-digit year",
                movie.year
            )));
        }
        let movie = self.uow.movies.insert(movie).await?;
        info!(movie_id = %movie.id, title = %movie.title, "movie added");
        Ok(movie)
    }

    pub async fn add_tv_show(&self, show: NewTvShow) -> Result<TvShow> {
        require("title", &show.title)?;
        if RunSpan::parse(&show.year).is_none() {
            return Err(CatalogError::InvalidInput(format!(
                "tv show year {:?} must look like 2017, 2012-2015 or 2019-",
                show.year
            )));
        }
        let show = self.uow.tv_shows.insert(show).await?;
        info!(tv_show_id = %show.id, title = %show.title, "tv show added");
        Ok(show)
    }

    pub async fn add_actor(&self, actor: NewActor) -> Result<Actor> {
        require("full_name", &actor.full_name)?;
        let actor = self.uow.actors.insert(actor).await?;
        info!(actor_id = %actor.id, full_name = %actor.full_name, "actor added");
        Ok(actor)
    }

    pub async fn add_genre(&self, genre: NewGenre) -> Result<Genre> {
        require("genre_type", &genre.genre_type)?;
        let genre = self.uow.genres.insert(genre).await?;
        info!(genre_id = %genre.id, genre = %genre.genre_type, "genre added");
        Ok(genre)
    }

    pub async fn all_genres(&self) -> Result<Vec<Genre>> {
        self.uow.genres.list_all().await
    }

    pub async fn tag_movie_genre(
        &self,
        movie_id: MovieId,
        genre_id: GenreId,
    ) -> Result<MovieGenre> {
        let link = MovieGenre { movie_id, genre_id };
        self.uow.genre_links.link_movie(link).await?;
        info!(movie_id = %movie_id, genre_id = %genre_id, "movie genre linked");
        Ok(link)
    }

    pub async fn tag_tv_show_genre(
        &self,
        tv_show_id: TvShowId,
        genre_id: GenreId,
    ) -> Result<TvShowGenre> {
        let link = TvShowGenre {
            tv_show_id,
            genre_id,
        };
        self.uow.genre_links.link_tv_show(link).await?;
        info!(tv_show_id = %tv_show_id, genre_id = %genre_id, "tv show genre linked");
        Ok(link)
    }

    pub async fn credit_movie_actor(
        &self,
        movie_id: MovieId,
        actor_id: ActorId,
    ) -> Result<ActorMovie> {
        let credit = ActorMovie { movie_id, actor_id };
        self.uow.credits.credit_movie(credit).await?;
        info!(movie_id = %movie_id, actor_id = %actor_id, "movie actor credited");
        Ok(credit)
    }

    pub async fn credit_tv_show_actor(
        &self,
        tv_show_id: TvShowId,
        actor_id: ActorId,
    ) -> Result<ActorTvShow> {
        let credit = ActorTvShow {
            tv_show_id,
            actor_id,
        };
        self.uow.credits.credit_tv_show(credit).await?;
        info!(tv_show_id = %tv_show_id, actor_id = %actor_id, "tv show actor credited");
        Ok(credit)
    }

    pub async fn add_season(
        &self,
        tv_show_id: TvShowId,
        season_number: i32,
        num_episodes: i32,
    ) -> Result<Season> {
        if season_number < 1 || num_episodes < 0 {
            return Err(CatalogError::InvalidInput(format!(
                "season {season_number} with {num_episodes} episodes is not valid"
            )));
        }
        let season = Season {
            tv_show_id,
            season_number,
            num_episodes,
        };
        self.uow.seasons.insert_season(season.clone()).await?;
        info!(tv_show_id = %tv_show_id, season_number, "season added");
        Ok(season)
    }

    pub async fn add_episode(
        &self,
        tv_show_id: TvShowId,
        season_number: i32,
        episode: NewEpisode,
    ) -> Result<Episode> {
        require("episode_name", &episode.episode_name)?;
        let episode = Episode {
            tv_show_id,
            season_id: season_number,
            episode_number: episode.episode_number,
            episode_name: episode.episode_name,
            url: episode.url,
        };
        self.uow.seasons.insert_episode(episode.clone()).await?;
        info!(
            tv_show_id = %tv_show_id,
            season_number,
            episode_number = episode.episode_number,
            "episode added"
        );
        Ok(episode)
    }
}
