//! Process-local catalog store.
//!
//! Backs the test suites and the server's `--in-memory` mode. It enforces the
//! same keys and references as the PostgreSQL schema so both adapters reject
//! the same writes.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;
use vidvault_model::{
    Actor, ActorId, ActorMovie, ActorTvShow, Episode, Genre, GenreId,
    MovieGenre, MovieId, Movie, NewActor, NewGenre, NewMovie, NewTvShow,
    Season, TvShow, TvShowGenre, TvShowId,
};

use crate::database::like::like_matches;
use crate::database::ports::{
    actors::ActorRepository,
    credits::CreditsRepository,
    filter::{ActorColumn, MediaColumn},
    genre_links::GenreLinksRepository,
    genres::GenreRepository,
    movies::MovieRepository,
    seasons::SeasonRepository,
    tv_shows::TvShowRepository,
};
use crate::error::{CatalogError, Result};

#[derive(Debug, Default)]
struct Tables {
    movies: Vec<Movie>,
    tv_shows: Vec<TvShow>,
    actors: Vec<Actor>,
    genres: Vec<Genre>,
    movie_genres: Vec<MovieGenre>,
    tv_show_genres: Vec<TvShowGenre>,
    movie_actors: Vec<ActorMovie>,
    tv_show_actors: Vec<ActorTvShow>,
    seasons: Vec<Season>,
    episodes: Vec<Episode>,
    next_movie_id: i32,
    next_tv_show_id: i32,
    next_actor_id: i32,
    next_genre_id: i32,
}

impl Tables {
    fn has_movie(&self, id: MovieId) -> bool {
        self.movies.iter().any(|movie| movie.id == id)
    }

    fn has_tv_show(&self, id: TvShowId) -> bool {
        self.tv_shows.iter().any(|show| show.id == id)
    }

    fn has_actor(&self, id: ActorId) -> bool {
        self.actors.iter().any(|actor| actor.id == id)
    }

    fn has_genre(&self, id: GenreId) -> bool {
        self.genres.iter().any(|genre| genre.id == id)
    }
}

fn next_id(counter: &mut i32) -> i32 {
    *counter += 1;
    *counter
}

fn missing(what: &str, id: impl std::fmt::Display) -> CatalogError {
    CatalogError::InvalidInput(format!("{what} {id} does not exist"))
}

fn duplicate(what: &str) -> CatalogError {
    CatalogError::InvalidInput(format!("duplicate {what}"))
}

fn media_value<'a>(
    column: MediaColumn,
    title: &'a str,
    year: &'a str,
    service: &'a str,
) -> &'a str {
    match column {
        MediaColumn::Title => title,
        MediaColumn::Year => year,
        MediaColumn::Service => service,
    }
}

fn movie_value(movie: &Movie, column: MediaColumn) -> &str {
    media_value(column, &movie.title, &movie.year, &movie.service)
}

fn show_value(show: &TvShow, column: MediaColumn) -> &str {
    media_value(column, &show.title, &show.year, &show.service)
}

fn actor_value(actor: &Actor, column: ActorColumn) -> &str {
    match column {
        ActorColumn::FullName => &actor.full_name,
        ActorColumn::FirstName => &actor.first_name,
        ActorColumn::LastName => &actor.last_name,
    }
}

/// All catalog tables behind one async lock.
///
/// Cloning is cheap and clones share the same tables.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCatalog {
    tables: Arc<RwLock<Tables>>,
}

impl InMemoryCatalog {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl MovieRepository for InMemoryCatalog {
    async fn list_all(&self) -> Result<Vec<Movie>> {
        Ok(self.tables.read().await.movies.clone())
    }

    async fn get_by_id(&self, id: MovieId) -> Result<Option<Movie>> {
        let tables = self.tables.read().await;
        Ok(tables.movies.iter().find(|movie| movie.id == id).cloned())
    }

    async fn filter_exact(
        &self,
        column: MediaColumn,
        value: &str,
    ) -> Result<Vec<Movie>> {
        let tables = self.tables.read().await;
        Ok(tables
            .movies
            .iter()
            .filter(|movie| movie_value(movie, column) == value)
            .cloned()
            .collect())
    }

    async fn filter_like(
        &self,
        column: MediaColumn,
        pattern: &str,
    ) -> Result<Vec<Movie>> {
        let tables = self.tables.read().await;
        Ok(tables
            .movies
            .iter()
            .filter(|movie| like_matches(pattern, movie_value(movie, column)))
            .cloned()
            .collect())
    }

    async fn insert(&self, movie: NewMovie) -> Result<Movie> {
        let mut tables = self.tables.write().await;
        let id = MovieId(next_id(&mut tables.next_movie_id));
        let movie = movie.into_movie(id);
        tables.movies.push(movie.clone());
        Ok(movie)
    }
}

#[async_trait]
impl TvShowRepository for InMemoryCatalog {
    async fn list_all(&self) -> Result<Vec<TvShow>> {
        Ok(self.tables.read().await.tv_shows.clone())
    }

    async fn get_by_id(&self, id: TvShowId) -> Result<Option<TvShow>> {
        let tables = self.tables.read().await;
        Ok(tables.tv_shows.iter().find(|show| show.id == id).cloned())
    }

    async fn filter_exact(
        &self,
        column: MediaColumn,
        value: &str,
    ) -> Result<Vec<TvShow>> {
        let tables = self.tables.read().await;
        Ok(tables
            .tv_shows
            .iter()
            .filter(|show| show_value(show, column) == value)
            .cloned()
            .collect())
    }

    async fn filter_like(
        &self,
        column: MediaColumn,
        pattern: &str,
    ) -> Result<Vec<TvShow>> {
        let tables = self.tables.read().await;
        Ok(tables
            .tv_shows
            .iter()
            .filter(|show| like_matches(pattern, show_value(show, column)))
            .cloned()
            .collect())
    }

    async fn insert(&self, show: NewTvShow) -> Result<TvShow> {
        let mut tables = self.tables.write().await;
        let id = TvShowId(next_id(&mut tables.next_tv_show_id));
        let show = show.into_show(id);
        tables.tv_shows.push(show.clone());
        Ok(show)
    }
}

#[async_trait]
impl ActorRepository for InMemoryCatalog {
    async fn list_all(&self) -> Result<Vec<Actor>> {
        Ok(self.tables.read().await.actors.clone())
    }

    async fn list_sorted_by_full_name(&self) -> Result<Vec<Actor>> {
        let mut actors = self.tables.read().await.actors.clone();
        actors.sort_by(|a, b| {
            a.full_name.cmp(&b.full_name).then_with(|| a.id.cmp(&b.id))
        });
        Ok(actors)
    }

    async fn get_by_id(&self, id: ActorId) -> Result<Option<Actor>> {
        let tables = self.tables.read().await;
        Ok(tables.actors.iter().find(|actor| actor.id == id).cloned())
    }

    async fn filter_exact(
        &self,
        column: ActorColumn,
        value: &str,
    ) -> Result<Vec<Actor>> {
        let tables = self.tables.read().await;
        Ok(tables
            .actors
            .iter()
            .filter(|actor| actor_value(actor, column) == value)
            .cloned()
            .collect())
    }

    async fn filter_like(
        &self,
        column: ActorColumn,
        pattern: &str,
    ) -> Result<Vec<Actor>> {
        let tables = self.tables.read().await;
        Ok(tables
            .actors
            .iter()
            .filter(|actor| like_matches(pattern, actor_value(actor, column)))
            .cloned()
            .collect())
    }

    async fn insert(&self, actor: NewActor) -> Result<Actor> {
        let mut tables = self.tables.write().await;
        let id = ActorId(next_id(&mut tables.next_actor_id));
        let actor = actor.into_actor(id);
        tables.actors.push(actor.clone());
        Ok(actor)
    }
}

#[async_trait]
impl GenreRepository for InMemoryCatalog {
    async fn list_all(&self) -> Result<Vec<Genre>> {
        Ok(self.tables.read().await.genres.clone())
    }

    async fn get_by_id(&self, id: GenreId) -> Result<Option<Genre>> {
        let tables = self.tables.read().await;
        Ok(tables.genres.iter().find(|genre| genre.id == id).cloned())
    }

    async fn find_by_name(&self, genre_type: &str) -> Result<Option<Genre>> {
        let tables = self.tables.read().await;
        Ok(tables
            .genres
            .iter()
            .find(|genre| genre.genre_type == genre_type)
            .cloned())
    }

    async fn insert(&self, genre: NewGenre) -> Result<Genre> {
        let mut tables = self.tables.write().await;
        if tables
            .genres
            .iter()
            .any(|existing| existing.genre_type == genre.genre_type)
        {
            return Err(duplicate("genre"));
        }
        let genre = Genre {
            id: GenreId(next_id(&mut tables.next_genre_id)),
            genre_type: genre.genre_type,
        };
        tables.genres.push(genre.clone());
        Ok(genre)
    }
}

#[async_trait]
impl GenreLinksRepository for InMemoryCatalog {
    async fn movies_with_genre(
        &self,
        genre_id: GenreId,
    ) -> Result<Vec<MovieGenre>> {
        let tables = self.tables.read().await;
        Ok(tables
            .movie_genres
            .iter()
            .filter(|link| link.genre_id == genre_id)
            .copied()
            .collect())
    }

    async fn genres_of_movie(
        &self,
        movie_id: MovieId,
    ) -> Result<Vec<MovieGenre>> {
        let tables = self.tables.read().await;
        Ok(tables
            .movie_genres
            .iter()
            .filter(|link| link.movie_id == movie_id)
            .copied()
            .collect())
    }

    async fn tv_shows_with_genre(
        &self,
        genre_id: GenreId,
    ) -> Result<Vec<TvShowGenre>> {
        let tables = self.tables.read().await;
        Ok(tables
            .tv_show_genres
            .iter()
            .filter(|link| link.genre_id == genre_id)
            .copied()
            .collect())
    }

    async fn genres_of_tv_show(
        &self,
        tv_show_id: TvShowId,
    ) -> Result<Vec<TvShowGenre>> {
        let tables = self.tables.read().await;
        Ok(tables
            .tv_show_genres
            .iter()
            .filter(|link| link.tv_show_id == tv_show_id)
            .copied()
            .collect())
    }

    async fn link_movie(&self, link: MovieGenre) -> Result<()> {
        let mut tables = self.tables.write().await;
        if !tables.has_movie(link.movie_id) {
            return Err(missing("movie", link.movie_id));
        }
        if !tables.has_genre(link.genre_id) {
            return Err(missing("genre", link.genre_id));
        }
        if tables.movie_genres.contains(&link) {
            return Err(duplicate("movie genre link"));
        }
        tables.movie_genres.push(link);
        Ok(())
    }

    async fn link_tv_show(&self, link: TvShowGenre) -> Result<()> {
        let mut tables = self.tables.write().await;
        if !tables.has_tv_show(link.tv_show_id) {
            return Err(missing("tv show", link.tv_show_id));
        }
        if !tables.has_genre(link.genre_id) {
            return Err(missing("genre", link.genre_id));
        }
        if tables.tv_show_genres.contains(&link) {
            return Err(duplicate("tv show genre link"));
        }
        tables.tv_show_genres.push(link);
        Ok(())
    }
}

#[async_trait]
impl CreditsRepository for InMemoryCatalog {
    async fn movies_of_actor(
        &self,
        actor_id: ActorId,
    ) -> Result<Vec<ActorMovie>> {
        let tables = self.tables.read().await;
        Ok(tables
            .movie_actors
            .iter()
            .filter(|credit| credit.actor_id == actor_id)
            .copied()
            .collect())
    }

    async fn cast_of_movie(
        &self,
        movie_id: MovieId,
    ) -> Result<Vec<ActorMovie>> {
        let tables = self.tables.read().await;
        Ok(tables
            .movie_actors
            .iter()
            .filter(|credit| credit.movie_id == movie_id)
            .copied()
            .collect())
    }

    async fn tv_shows_of_actor(
        &self,
        actor_id: ActorId,
    ) -> Result<Vec<ActorTvShow>> {
        let tables = self.tables.read().await;
        Ok(tables
            .tv_show_actors
            .iter()
            .filter(|credit| credit.actor_id == actor_id)
            .copied()
            .collect())
    }

    async fn cast_of_tv_show(
        &self,
        tv_show_id: TvShowId,
    ) -> Result<Vec<ActorTvShow>> {
        let tables = self.tables.read().await;
        Ok(tables
            .tv_show_actors
            .iter()
            .filter(|credit| credit.tv_show_id == tv_show_id)
            .copied()
            .collect())
    }

    async fn credit_movie(&self, credit: ActorMovie) -> Result<()> {
        let mut tables = self.tables.write().await;
        if !tables.has_movie(credit.movie_id) {
            return Err(missing("movie", credit.movie_id));
        }
        if !tables.has_actor(credit.actor_id) {
            return Err(missing("actor", credit.actor_id));
        }
        if tables.movie_actors.contains(&credit) {
            return Err(duplicate("movie credit"));
        }
        tables.movie_actors.push(credit);
        Ok(())
    }

    async fn credit_tv_show(&self, credit: ActorTvShow) -> Result<()> {
        let mut tables = self.tables.write().await;
        if !tables.has_tv_show(credit.tv_show_id) {
            return Err(missing("tv show", credit.tv_show_id));
        }
        if !tables.has_actor(credit.actor_id) {
            return Err(missing("actor", credit.actor_id));
        }
        if tables.tv_show_actors.contains(&credit) {
            return Err(duplicate("tv show credit"));
        }
        tables.tv_show_actors.push(credit);
        Ok(())
    }
}

#[async_trait]
impl SeasonRepository for InMemoryCatalog {
    async fn seasons_for_show(
        &self,
        tv_show_id: TvShowId,
    ) -> Result<Vec<Season>> {
        let tables = self.tables.read().await;
        let mut seasons: Vec<Season> = tables
            .seasons
            .iter()
            .filter(|season| season.tv_show_id == tv_show_id)
            .cloned()
            .collect();
        seasons.sort_by_key(|season| season.season_number);
        Ok(seasons)
    }

    async fn episodes_for_season(
        &self,
        tv_show_id: TvShowId,
        season_number: i32,
    ) -> Result<Vec<Episode>> {
        let tables = self.tables.read().await;
        let mut episodes: Vec<Episode> = tables
            .episodes
            .iter()
            .filter(|episode| {
                episode.tv_show_id == tv_show_id
                    && episode.season_id == season_number
            })
            .cloned()
            .collect();
        episodes.sort_by_key(|episode| episode.episode_number);
        Ok(episodes)
    }

    async fn insert_season(&self, season: Season) -> Result<()> {
        let mut tables = self.tables.write().await;
        if !tables.has_tv_show(season.tv_show_id) {
            return Err(missing("tv show", season.tv_show_id));
        }
        if tables.seasons.iter().any(|existing| {
            existing.tv_show_id == season.tv_show_id
                && existing.season_number == season.season_number
        }) {
            return Err(duplicate("season"));
        }
        tables.seasons.push(season);
        Ok(())
    }

    async fn insert_episode(&self, episode: Episode) -> Result<()> {
        let mut tables = self.tables.write().await;
        if !tables.seasons.iter().any(|season| {
            season.tv_show_id == episode.tv_show_id
                && season.season_number == episode.season_id
        }) {
            return Err(CatalogError::InvalidInput(format!(
                "season {} of tv show {} does not exist",
                episode.season_id, episode.tv_show_id
            )));
        }
        if tables.episodes.iter().any(|existing| {
            existing.tv_show_id == episode.tv_show_id
                && existing.season_id == episode.season_id
                && existing.episode_number == episode.episode_number
        }) {
            return Err(duplicate("episode"));
        }
        tables.episodes.push(episode);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    fn new_movie(title: &str) -> NewMovie {
        NewMovie {
            title: title.into(),
            year: "2001".into(),
            service: "Netflix".into(),
            tag: String::new(),
            url: String::new(),
            date_added: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            image_url: None,
            description: None,
            avg_rating: None,
        }
    }

    #[tokio::test]
    async fn ids_are_assigned_in_insertion_order() {
        let store = InMemoryCatalog::new();
        let first = MovieRepository::insert(&store, new_movie("A")).await.unwrap();
        let second = MovieRepository::insert(&store, new_movie("B")).await.unwrap();
        assert_eq!(first.id, MovieId(1));
        assert_eq!(second.id, MovieId(2));
    }

    #[tokio::test]
    async fn links_require_both_sides() {
        let store = InMemoryCatalog::new();
        let movie = MovieRepository::insert(&store, new_movie("A")).await.unwrap();
        let err = store
            .link_movie(MovieGenre {
                movie_id: movie.id,
                genre_id: GenreId(9),
            })
            .await
            .unwrap_err();
        assert!(matches!(err, CatalogError::InvalidInput(_)));
    }

    #[tokio::test]
    async fn duplicate_genre_names_are_rejected() {
        let store = InMemoryCatalog::new();
        let drama = NewGenre {
            genre_type: "Drama".into(),
        };
        GenreRepository::insert(&store, drama.clone()).await.unwrap();
        assert!(GenreRepository::insert(&store, drama).await.is_err());
    }

    #[tokio::test]
    async fn episodes_come_back_ordered() {
        let store = InMemoryCatalog::new();
        let show = TvShowRepository::insert(
            &store,
            NewTvShow {
                title: "Show".into(),
                year: "2019-".into(),
                num_seasons: 1,
                num_episodes: 2,
                service: "Hulu".into(),
                tag: String::new(),
                url: String::new(),
                date_added: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
                image_url: None,
                description: None,
                avg_rating: None,
            },
        )
        .await
        .unwrap();
        store
            .insert_season(Season {
                tv_show_id: show.id,
                season_number: 1,
                num_episodes: 2,
            })
            .await
            .unwrap();
        for number in [2, 1] {
            store
                .insert_episode(Episode {
                    tv_show_id: show.id,
                    season_id: 1,
                    episode_number: number,
                    episode_name: format!("Episode {number}"),
                    url: String::new(),
                })
                .await
                .unwrap();
        }

        let episodes = store.episodes_for_season(show.id, 1).await.unwrap();
        let numbers: Vec<i32> =
            episodes.iter().map(|episode| episode.episode_number).collect();
        assert_eq!(numbers, vec![1, 2]);
    }
}
