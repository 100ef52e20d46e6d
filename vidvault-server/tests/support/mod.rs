#![allow(dead_code)]

use std::num::NonZeroUsize;
use std::sync::Arc;

use anyhow::Result;
use axum_test::TestServer;
use chrono::NaiveDate;
use vidvault_core::{CatalogService, CatalogUnitOfWork, InMemoryCatalog};
use vidvault_model::{
    ActorId, GenreId, MovieId, NewActor, NewEpisode, NewGenre, NewMovie,
    NewTvShow, TvShowId,
};
use vidvault_server::{AppState, create_app, infra::config::Config};

pub const PAGE_SIZE: usize = 2;

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

pub fn test_config() -> Config {
    let mut config = Config::default();
    config.catalog.page_size = NonZeroUsize::new(PAGE_SIZE).unwrap();
    config.catalog.recent_days = 30;
    config
}

pub fn server_for(catalog: CatalogService, config: Config) -> TestServer {
    let state = AppState::new(catalog, None, Arc::new(config));
    TestServer::new(create_app(state)).unwrap()
}

pub fn empty_server() -> TestServer {
    server_for(empty_catalog(), test_config())
}

pub fn empty_catalog() -> CatalogService {
    CatalogService::new(CatalogUnitOfWork::in_memory(InMemoryCatalog::new()))
        .with_today(date(2024, 6, 15))
}

fn movie(title: &str, year: &str, service: &str, added: NaiveDate) -> NewMovie {
    NewMovie {
        title: title.into(),
        year: year.into(),
        service: service.into(),
        tag: "feature".into(),
        url: format!("https://example.invalid/{}", title.replace(' ', "-")),
        date_added: added,
        image_url: None,
        description: Some(format!("{title}, in full")),
        avg_rating: Some(8.0),
    }
}

fn show(title: &str, year: &str, service: &str, added: NaiveDate) -> NewTvShow {
    NewTvShow {
        title: title.into(),
        year: year.into(),
        num_seasons: 1,
        num_episodes: 2,
        service: service.into(),
        tag: "series".into(),
        url: String::new(),
        date_added: added,
        image_url: None,
        description: Some(format!("{title}, in full")),
        avg_rating: None,
    }
}

/// movies: 1 Heat (1995, Netflix), 2 Heathers (1988, Hulu),
/// 3 Arrival (2016, Netflix, recent)
/// shows: 1 Dark (2017-2020, Netflix, recent), 2 Severance (2022-, Apple)
/// genres: 1 Crime, 2 Sci-Fi
/// actors: 1 Al Pacino, 2 Amy Adams, 3 Adam Scott
pub async fn seeded_catalog() -> Result<CatalogService> {
    let catalog = empty_catalog();

    for genre in ["Crime", "Sci-Fi"] {
        catalog
            .add_genre(NewGenre {
                genre_type: genre.into(),
            })
            .await?;
    }
    for name in ["Al Pacino", "Amy Adams", "Adam Scott"] {
        catalog.add_actor(NewActor::from_full_name(name)).await?;
    }

    catalog
        .add_movie(movie("Heat", "1995", "Netflix", date(2023, 2, 1)))
        .await?;
    catalog
        .add_movie(movie("Heathers", "1988", "Hulu", date(2022, 7, 4)))
        .await?;
    catalog
        .add_movie(movie("Arrival", "2016", "Netflix", date(2024, 6, 1)))
        .await?;
    catalog
        .add_tv_show(show("Dark", "2017-2020", "Netflix", date(2024, 6, 12)))
        .await?;
    catalog
        .add_tv_show(show("Severance", "2022-", "Apple", date(2023, 3, 1)))
        .await?;

    catalog.tag_movie_genre(MovieId(1), GenreId(1)).await?;
    catalog.tag_movie_genre(MovieId(3), GenreId(2)).await?;
    catalog.tag_tv_show_genre(TvShowId(1), GenreId(2)).await?;
    catalog.credit_movie_actor(MovieId(1), ActorId(1)).await?;
    catalog.credit_movie_actor(MovieId(3), ActorId(2)).await?;
    catalog.credit_tv_show_actor(TvShowId(2), ActorId(3)).await?;

    catalog.add_season(TvShowId(1), 1, 2).await?;
    for episode in 1..=2 {
        catalog
            .add_episode(
                TvShowId(1),
                1,
                NewEpisode {
                    episode_number: episode,
                    episode_name: format!("Episode {episode}"),
                    url: format!("https://example.invalid/dark/1/{episode}"),
                },
            )
            .await?;
    }

    Ok(catalog)
}

pub async fn seeded_server() -> Result<TestServer> {
    Ok(server_for(seeded_catalog().await?, test_config()))
}
