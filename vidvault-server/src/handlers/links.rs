//! Writes that attach genres, cast, seasons and episodes to existing
//! entities. Unknown ids and duplicates surface as `400 invalid_input`.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde::Deserialize;
use vidvault_model::{
    ActorId, ActorMovie, ActorTvShow, Episode, GenreId, MovieGenre, MovieId,
    NewEpisode, Season, TvShowGenre, TvShowId,
};

use crate::infra::{app_state::AppState, errors::AppResult};

#[derive(Debug, Deserialize)]
pub struct GenreLinkRequest {
    pub genre_id: GenreId,
}

#[derive(Debug, Deserialize)]
pub struct CreditRequest {
    pub actor_id: ActorId,
}

#[derive(Debug, Deserialize)]
pub struct CreateSeasonRequest {
    pub season_number: i32,
    pub num_episodes: i32,
}

pub async fn tag_movie_genre_handler(
    State(state): State<AppState>,
    Path(movie_id): Path<i32>,
    Json(request): Json<GenreLinkRequest>,
) -> AppResult<(StatusCode, Json<MovieGenre>)> {
    let link = state
        .catalog
        .tag_movie_genre(MovieId(movie_id), request.genre_id)
        .await?;
    Ok((StatusCode::CREATED, Json(link)))
}

pub async fn credit_movie_actor_handler(
    State(state): State<AppState>,
    Path(movie_id): Path<i32>,
    Json(request): Json<CreditRequest>,
) -> AppResult<(StatusCode, Json<ActorMovie>)> {
    let credit = state
        .catalog
        .credit_movie_actor(MovieId(movie_id), request.actor_id)
        .await?;
    Ok((StatusCode::CREATED, Json(credit)))
}

pub async fn tag_tv_show_genre_handler(
    State(state): State<AppState>,
    Path(tv_show_id): Path<i32>,
    Json(request): Json<GenreLinkRequest>,
) -> AppResult<(StatusCode, Json<TvShowGenre>)> {
    let link = state
        .catalog
        .tag_tv_show_genre(TvShowId(tv_show_id), request.genre_id)
        .await?;
    Ok((StatusCode::CREATED, Json(link)))
}

pub async fn credit_tv_show_actor_handler(
    State(state): State<AppState>,
    Path(tv_show_id): Path<i32>,
    Json(request): Json<CreditRequest>,
) -> AppResult<(StatusCode, Json<ActorTvShow>)> {
    let credit = state
        .catalog
        .credit_tv_show_actor(TvShowId(tv_show_id), request.actor_id)
        .await?;
    Ok((StatusCode::CREATED, Json(credit)))
}

pub async fn create_season_handler(
    State(state): State<AppState>,
    Path(tv_show_id): Path<i32>,
    Json(request): Json<CreateSeasonRequest>,
) -> AppResult<(StatusCode, Json<Season>)> {
    let season = state
        .catalog
        .add_season(
            TvShowId(tv_show_id),
            request.season_number,
            request.num_episodes,
        )
        .await?;
    Ok((StatusCode::CREATED, Json(season)))
}

/// The season must already exist on the show.
pub async fn create_episode_handler(
    State(state): State<AppState>,
    Path((tv_show_id, season_number)): Path<(i32, i32)>,
    Json(request): Json<NewEpisode>,
) -> AppResult<(StatusCode, Json<Episode>)> {
    let episode = state
        .catalog
        .add_episode(TvShowId(tv_show_id), season_number, request)
        .await?;
    Ok((StatusCode::CREATED, Json(episode)))
}
