use axum::{
    Router,
    routing::{get, post},
};
use vidvault_core::api::routes::v1;

use crate::{
    handlers::{actors, catalog, genres, links, movies, tv_shows},
    infra::app_state::AppState,
};

/// Create all v1 API routes
pub fn create_v1_router() -> Router<AppState> {
    Router::new()
        .route(v1::SEARCH, get(catalog::search_all_handler))
        .route(v1::RECENTLY_ADDED, get(catalog::recently_added_handler))
        .merge(create_movie_routes())
        .merge(create_tv_show_routes())
        .route(
            v1::actors::COLLECTION,
            get(actors::list_actors_handler).post(actors::create_actor_handler),
        )
        .route(
            v1::genres::COLLECTION,
            get(genres::list_genres_handler).post(genres::create_genre_handler),
        )
}

fn create_movie_routes() -> Router<AppState> {
    Router::new()
        .route(
            v1::movies::COLLECTION,
            get(movies::list_movies_handler).post(movies::create_movie_handler),
        )
        .route(v1::movies::SEARCH, get(movies::search_movies_handler))
        .route(
            v1::movies::RECENTLY_ADDED,
            get(movies::recent_movies_handler),
        )
        .route(v1::movies::INFO, get(movies::movie_info_handler))
        .route(v1::movies::GENRES, post(links::tag_movie_genre_handler))
        .route(v1::movies::ACTORS, post(links::credit_movie_actor_handler))
}

fn create_tv_show_routes() -> Router<AppState> {
    Router::new()
        .route(
            v1::tv_shows::COLLECTION,
            get(tv_shows::list_tv_shows_handler)
                .post(tv_shows::create_tv_show_handler),
        )
        .route(v1::tv_shows::SEARCH, get(tv_shows::search_tv_shows_handler))
        .route(
            v1::tv_shows::RECENTLY_ADDED,
            get(tv_shows::recent_tv_shows_handler),
        )
        .route(v1::tv_shows::INFO, get(tv_shows::tv_show_info_handler))
        .route(v1::tv_shows::GENRES, post(links::tag_tv_show_genre_handler))
        .route(v1::tv_shows::ACTORS, post(links::credit_tv_show_actor_handler))
        .route(v1::tv_shows::SEASONS, post(links::create_season_handler))
        .route(v1::tv_shows::EPISODES, post(links::create_episode_handler))
}
