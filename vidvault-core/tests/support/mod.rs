#![allow(dead_code)]

use anyhow::Result;
use chrono::NaiveDate;
use vidvault_core::{CatalogService, CatalogUnitOfWork, InMemoryCatalog};
use vidvault_model::{
    ActorId, GenreId, MovieId, NewActor, NewEpisode, NewGenre, NewMovie,
    NewTvShow, TvShowId,
};

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// The pinned "today" used by every seeded catalog.
pub fn today() -> NaiveDate {
    date(2024, 6, 15)
}

pub fn new_movie(title: &str, year: &str, service: &str, added: NaiveDate) -> NewMovie {
    NewMovie {
        title: title.into(),
        year: year.into(),
        service: service.into(),
        tag: String::new(),
        url: format!("https://example.invalid/movies/{}", title.to_lowercase().replace(' ', "-")),
        date_added: added,
        image_url: None,
        description: Some(format!("About {title}")),
        avg_rating: Some(7.5),
    }
}

pub fn new_show(title: &str, year: &str, service: &str, added: NaiveDate) -> NewTvShow {
    NewTvShow {
        title: title.into(),
        year: year.into(),
        num_seasons: 0,
        num_episodes: 0,
        service: service.into(),
        tag: String::new(),
        url: String::new(),
        date_added: added,
        image_url: None,
        description: Some(format!("About {title}")),
        avg_rating: None,
    }
}

pub fn empty_service() -> CatalogService {
    CatalogService::new(CatalogUnitOfWork::in_memory(InMemoryCatalog::new()))
        .with_today(today())
}

/// Ids are assigned in insertion order:
///
/// movies: 1 The Matrix, 2 John Wick, 3 Drama Queen, 4 Star Trek,
/// 5 Mystery Men
/// shows: 1 Breaking Bad, 2 Stranger Things, 3 Andor, 4 Mystery
/// genres: 1 Drama, 2 Comedy, 3 Sci-Fi
/// actors: 1 Keanu Reeves, 2 Carrie-Anne Moss, 3 Bryan Cranston,
/// 4 Aaron Paul, 5 Winona Ryder
pub async fn seeded_service() -> Result<CatalogService> {
    let service = empty_service();

    for genre in ["Drama", "Comedy", "Sci-Fi"] {
        service
            .add_genre(NewGenre {
                genre_type: genre.into(),
            })
            .await?;
    }
    for name in [
        "Keanu Reeves",
        "Carrie-Anne Moss",
        "Bryan Cranston",
        "Aaron Paul",
        "Winona Ryder",
    ] {
        service.add_actor(NewActor::from_full_name(name)).await?;
    }

    service
        .add_movie(new_movie("The Matrix", "1999", "Netflix", date(2024, 6, 10)))
        .await?;
    service
        .add_movie(new_movie("John Wick", "2014", "Hulu", date(2023, 1, 1)))
        .await?;
    service
        .add_movie(new_movie("Drama Queen", "2014", "Netflix", date(2024, 6, 1)))
        .await?;
    service
        .add_movie(new_movie("Star Trek", "2009", "Prime", date(2022, 5, 5)))
        .await?;
    service
        .add_movie(new_movie("Mystery Men", "1999", "Prime", date(2021, 2, 2)))
        .await?;

    service
        .add_tv_show(new_show("Breaking Bad", "2008-2013", "Netflix", date(2023, 3, 3)))
        .await?;
    service
        .add_tv_show(new_show("Stranger Things", "2016-", "Netflix", date(2024, 6, 14)))
        .await?;
    service
        .add_tv_show(new_show("Andor", "2022", "Disney+", date(2022, 9, 21)))
        .await?;
    service
        .add_tv_show(new_show("Mystery", "2014", "Hulu", date(2020, 1, 1)))
        .await?;

    let (drama, sci_fi) = (GenreId(1), GenreId(3));
    // Star Trek is linked before The Matrix so join order differs from id order.
    service.tag_movie_genre(MovieId(4), sci_fi).await?;
    service.tag_movie_genre(MovieId(1), sci_fi).await?;
    service.tag_movie_genre(MovieId(3), drama).await?;
    service.tag_tv_show_genre(TvShowId(1), drama).await?;
    service.tag_tv_show_genre(TvShowId(2), sci_fi).await?;
    service.tag_tv_show_genre(TvShowId(2), drama).await?;
    service.tag_tv_show_genre(TvShowId(3), sci_fi).await?;

    service.credit_movie_actor(MovieId(1), ActorId(1)).await?;
    service.credit_movie_actor(MovieId(1), ActorId(2)).await?;
    service.credit_movie_actor(MovieId(2), ActorId(1)).await?;
    service.credit_tv_show_actor(TvShowId(1), ActorId(3)).await?;
    service.credit_tv_show_actor(TvShowId(1), ActorId(4)).await?;
    service.credit_tv_show_actor(TvShowId(2), ActorId(5)).await?;

    let breaking_bad = TvShowId(1);
    for (season, episodes) in [(1, 3), (2, 2)] {
        service.add_season(breaking_bad, season, episodes).await?;
        for episode in 1..=episodes {
            service
                .add_episode(
                    breaking_bad,
                    season,
                    NewEpisode {
                        episode_number: episode,
                        episode_name: format!("S{season}E{episode}"),
                        url: format!("https://example.invalid/bb/{season}/{episode}"),
                    },
                )
                .await?;
        }
    }

    Ok(service)
}

pub fn ids<T, I>(items: &[T], id: impl Fn(&T) -> I) -> Vec<I> {
    items.iter().map(id).collect()
}
