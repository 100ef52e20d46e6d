mod support;

use std::collections::BTreeSet;

use anyhow::Result;
use support::{empty_service, ids, new_movie, new_show, seeded_service, today};
use vidvault_core::{ActorFilter, CatalogError, MediaFilter};
use vidvault_model::{CatalogItem, GenreId, MovieId, Movie, TvShow};

fn movie_ids(movies: &[Movie]) -> Vec<i32> {
    ids(movies, |movie| movie.id.get())
}

fn show_ids(shows: &[TvShow]) -> Vec<i32> {
    ids(shows, |show| show.id.get())
}

#[tokio::test]
async fn title_filter_is_a_case_insensitive_substring() -> Result<()> {
    let service = seeded_service().await?;

    assert_eq!(movie_ids(&service.movies_by_title("matrix").await?), vec![1]);
    assert_eq!(movie_ids(&service.movies_by_title("STAR").await?), vec![4]);
    assert_eq!(show_ids(&service.tv_shows_by_title("thing").await?), vec![2]);
    assert!(service.movies_by_title("zzz").await?.is_empty());
    Ok(())
}

#[tokio::test]
async fn service_filter_is_exact() -> Result<()> {
    let service = seeded_service().await?;

    assert_eq!(movie_ids(&service.movies_by_service("Netflix").await?), vec![1, 3]);
    assert!(service.movies_by_service("netflix").await?.is_empty());
    assert_eq!(show_ids(&service.tv_shows_by_service("Netflix").await?), vec![1, 2]);
    Ok(())
}

#[tokio::test]
async fn genre_filter_follows_join_order() -> Result<()> {
    let service = seeded_service().await?;

    assert_eq!(movie_ids(&service.movies_by_genre("Sci-Fi").await?), vec![4, 1]);
    assert_eq!(show_ids(&service.tv_shows_by_genre("Drama").await?), vec![1, 2]);
    assert!(service.movies_by_genre("Comedy").await?.is_empty());
    assert!(service.movies_by_genre("Western").await?.is_empty());
    Ok(())
}

#[tokio::test]
async fn movie_year_requires_positive_integer_input() -> Result<()> {
    let service = seeded_service().await?;

    assert_eq!(movie_ids(&service.movies_by_year("2014").await?), vec![2, 3]);
    assert_eq!(movie_ids(&service.movies_by_year("1999").await?), vec![1, 5]);
    for bad in ["", "0", "-2014", "twenty"] {
        assert!(service.movies_by_year(bad).await?.is_empty(), "{bad:?}");
    }
    Ok(())
}

#[tokio::test]
async fn show_year_matches_any_year_of_the_run() -> Result<()> {
    let service = seeded_service().await?;

    assert_eq!(show_ids(&service.tv_shows_by_year("2010").await?), vec![1]);
    assert_eq!(show_ids(&service.tv_shows_by_year("2014").await?), vec![4]);
    // "2016-" is still running in the pinned current year.
    assert_eq!(show_ids(&service.tv_shows_by_year("2024").await?), vec![2]);
    assert!(service.tv_shows_by_year("2025").await?.is_empty());
    Ok(())
}

#[tokio::test]
async fn year_lookups_compare_the_query_verbatim() -> Result<()> {
    let service = seeded_service().await?;

    for raw in ["02010", "+2010", " 2010 "] {
        assert!(service.tv_shows_by_year(raw).await?.is_empty(), "{raw:?}");
    }
    for raw in ["01999", "+1999", " 1999 "] {
        assert!(service.movies_by_year(raw).await?.is_empty(), "{raw:?}");
    }
    assert!(service.search_all("02010").await?.is_empty());
    assert!(service.search_all("+1999").await?.is_empty());
    Ok(())
}

#[tokio::test]
async fn malformed_show_years_never_match() -> Result<()> {
    let service = empty_service();
    // Inserted straight through the store to bypass write validation.
    service
        .unit_of_work()
        .tv_shows
        .insert(new_show("Odd", "20-14", "Hulu", today()))
        .await?;

    assert!(service.tv_shows_by_year("2014").await?.is_empty());
    assert!(service.tv_shows_by_year("20").await?.is_empty());
    Ok(())
}

#[tokio::test]
async fn actor_filter_resolves_credits() -> Result<()> {
    let service = seeded_service().await?;

    assert_eq!(movie_ids(&service.movies_by_actor("Keanu Reeves").await?), vec![1, 2]);
    assert_eq!(show_ids(&service.tv_shows_by_actor("Bryan Cranston").await?), vec![1]);
    assert!(service.movies_by_actor("keanu reeves").await?.is_empty());
    assert!(service.tv_shows_by_actor("Nobody").await?.is_empty());
    Ok(())
}

#[tokio::test]
async fn resolve_dispatches_on_filter_kind() -> Result<()> {
    let service = seeded_service().await?;

    let hits = service
        .resolve_movies(&MediaFilter::Genre("Drama".into()))
        .await?;
    assert_eq!(movie_ids(&hits), vec![3]);

    let hits = service
        .resolve_tv_shows(&MediaFilter::Service("Disney+".into()))
        .await?;
    assert_eq!(show_ids(&hits), vec![3]);
    Ok(())
}

#[tokio::test]
async fn empty_filters_return_nothing() -> Result<()> {
    let service = seeded_service().await?;

    for filter in [
        MediaFilter::Title(String::new()),
        MediaFilter::Service("  ".into()),
        MediaFilter::Genre(String::new()),
        MediaFilter::Year(String::new()),
        MediaFilter::Actor(String::new()),
    ] {
        assert!(service.resolve_movies(&filter).await?.is_empty(), "{filter:?}");
        assert!(service.resolve_tv_shows(&filter).await?.is_empty(), "{filter:?}");
    }
    assert!(service.search_all("").await?.is_empty());
    Ok(())
}

#[tokio::test]
async fn movie_search_dedups_and_sorts_by_id() -> Result<()> {
    let service = seeded_service().await?;

    // Title and genre both hit Drama Queen.
    assert_eq!(movie_ids(&service.search_movies("Drama").await?), vec![3]);
    // The genre join returns 4 before 1.
    assert_eq!(movie_ids(&service.search_movies("Sci-Fi").await?), vec![1, 4]);
    assert_eq!(movie_ids(&service.search_movies("2014").await?), vec![2, 3]);
    Ok(())
}

#[tokio::test]
async fn show_search_includes_actor_matches() -> Result<()> {
    let service = seeded_service().await?;

    assert_eq!(show_ids(&service.search_tv_shows("Aaron Paul").await?), vec![1]);
    // Movies do not search by actor.
    assert!(service.search_movies("Keanu Reeves").await?.is_empty());
    Ok(())
}

#[tokio::test]
async fn search_results_have_unique_ascending_ids() -> Result<()> {
    let service = seeded_service().await?;

    for query in ["Netflix", "Drama", "Sci-Fi", "1999", "2014", "a", "e"] {
        let movies = movie_ids(&service.search_movies(query).await?);
        let unique: BTreeSet<i32> = movies.iter().copied().collect();
        assert_eq!(movies.len(), unique.len(), "{query}");
        assert!(movies.windows(2).all(|w| w[0] < w[1]), "{query}");

        let shows = show_ids(&service.search_tv_shows(query).await?);
        let unique: BTreeSet<i32> = shows.iter().copied().collect();
        assert_eq!(shows.len(), unique.len(), "{query}");
        assert!(shows.windows(2).all(|w| w[0] < w[1]), "{query}");
    }
    Ok(())
}

#[tokio::test]
async fn search_all_puts_movies_before_shows() -> Result<()> {
    let service = seeded_service().await?;

    let hits = service.search_all("Mystery").await?;
    assert_eq!(hits.len(), 2);
    assert!(matches!(&hits[0], CatalogItem::Movie(movie) if movie.title == "Mystery Men"));
    assert!(matches!(&hits[1], CatalogItem::TvShow(show) if show.title == "Mystery"));

    let netflix = service.search_all("Netflix").await?;
    let kinds: Vec<bool> = netflix.iter().map(CatalogItem::is_movie).collect();
    assert_eq!(kinds, vec![true, true, false, false]);
    Ok(())
}

#[tokio::test]
async fn movie_info_collects_genres_and_cast() -> Result<()> {
    let service = seeded_service().await?;

    let info = service.movie_info("The Matrix").await?.expect("movie exists");
    assert_eq!(info.movie_id, MovieId(1));
    assert_eq!(info.genres, vec!["Sci-Fi"]);
    assert_eq!(info.stars, vec!["Keanu Reeves", "Carrie-Anne Moss"]);
    assert_eq!(info.description.as_deref(), Some("About The Matrix"));

    assert!(service.movie_info("the matrix").await?.is_none());
    Ok(())
}

#[tokio::test]
async fn tv_show_info_nests_seasons_in_order() -> Result<()> {
    let service = seeded_service().await?;

    let info = service.tv_show_info("Breaking Bad").await?.expect("show exists");
    let seasons: Vec<(i32, Vec<i32>)> = info
        .season_info
        .iter()
        .map(|season| {
            (
                season.season,
                season.episodes.iter().map(|e| e.episode).collect(),
            )
        })
        .collect();
    assert_eq!(seasons, vec![(1, vec![1, 2, 3]), (2, vec![1, 2])]);
    assert_eq!(info.season_info[1].episodes[0].episode_name, "S2E1");
    assert_eq!(info.stars, vec!["Bryan Cranston", "Aaron Paul"]);
    assert_eq!(info.genres, vec!["Drama"]);
    Ok(())
}

#[tokio::test]
async fn bare_show_info_has_empty_relations() -> Result<()> {
    let service = seeded_service().await?;

    let info = service.tv_show_info("Mystery").await?.expect("show exists");
    assert!(info.season_info.is_empty());
    assert!(info.genres.is_empty());
    assert!(info.stars.is_empty());
    assert!(service.tv_show_info("Missing").await?.is_none());
    Ok(())
}

#[tokio::test]
async fn duplicate_titles_resolve_to_lowest_id() -> Result<()> {
    let service = empty_service();
    let first = service
        .add_movie(new_movie("Twin", "2001", "Hulu", today()))
        .await?;
    service
        .add_movie(new_movie("Twin", "2002", "Hulu", today()))
        .await?;

    let info = service.movie_info("Twin").await?.expect("movie exists");
    assert_eq!(info.movie_id, first.id);
    assert_eq!(info.year, "2001");
    Ok(())
}

#[tokio::test]
async fn recently_added_uses_the_day_window() -> Result<()> {
    let service = seeded_service().await?;

    assert_eq!(movie_ids(&service.recently_added_movies(30).await?), vec![1, 3]);
    assert_eq!(show_ids(&service.recently_added_tv_shows(30).await?), vec![2]);
    assert_eq!(movie_ids(&service.recently_added_movies(5).await?), vec![1]);

    let combined = service.recently_added(30).await?;
    let titles: Vec<&str> = combined.iter().map(CatalogItem::title).collect();
    assert_eq!(titles, vec!["The Matrix", "Drama Queen", "Stranger Things"]);
    Ok(())
}

#[tokio::test]
async fn actor_lookups_use_prefixes_and_substrings() -> Result<()> {
    let service = seeded_service().await?;

    let names = |actors: Vec<vidvault_model::Actor>| -> Vec<String> {
        actors.into_iter().map(|a| a.full_name).collect()
    };

    assert_eq!(
        names(service.resolve_actors(&ActorFilter::FirstName("ke".into())).await?),
        vec!["Keanu Reeves"]
    );
    assert_eq!(
        names(service.resolve_actors(&ActorFilter::LastName("Mo".into())).await?),
        vec!["Carrie-Anne Moss"]
    );
    assert_eq!(
        names(service.resolve_actors(&ActorFilter::FullName("an".into())).await?),
        vec!["Keanu Reeves", "Carrie-Anne Moss", "Bryan Cranston"]
    );
    assert!(
        service
            .resolve_actors(&ActorFilter::FirstName(String::new()))
            .await?
            .is_empty()
    );
    assert_eq!(
        names(service.actors_alphabetical().await?),
        vec![
            "Aaron Paul",
            "Bryan Cranston",
            "Carrie-Anne Moss",
            "Keanu Reeves",
            "Winona Ryder"
        ]
    );
    Ok(())
}

#[tokio::test]
async fn writes_validate_year_shapes() -> Result<()> {
    let service = empty_service();

    let err = service
        .add_movie(new_movie("Range", "2012-2015", "Hulu", today()))
        .await
        .unwrap_err();
    assert!(matches!(err, CatalogError::InvalidInput(_)));

    let err = service
        .add_tv_show(new_show("Broken", "20x4", "Hulu", today()))
        .await
        .unwrap_err();
    assert!(matches!(err, CatalogError::InvalidInput(_)));

    let show = service
        .add_tv_show(new_show("Fine", "2019-", "Hulu", today()))
        .await?;
    assert_eq!(show.year, "2019-");
    Ok(())
}

#[tokio::test]
async fn season_writes_return_the_stored_row() -> Result<()> {
    let service = empty_service();
    let show = service
        .add_tv_show(new_show("Fargo", "2014-", "Hulu", today()))
        .await?;

    let err = service.add_season(show.id, 0, 3).await.unwrap_err();
    assert!(matches!(err, CatalogError::InvalidInput(_)));

    let season = service.add_season(show.id, 1, 3).await?;
    assert_eq!((season.tv_show_id, season.season_number), (show.id, 1));
    assert_eq!(service.unit_of_work().seasons.seasons_for_show(show.id).await?, vec![season]);
    Ok(())
}

#[tokio::test]
async fn links_to_missing_rows_are_rejected() -> Result<()> {
    let service = seeded_service().await?;

    let err = service
        .tag_movie_genre(MovieId(99), GenreId(1))
        .await
        .unwrap_err();
    assert!(matches!(err, CatalogError::InvalidInput(_)));
    Ok(())
}
