use async_trait::async_trait;
use vidvault_model::{ActorId, ActorMovie, ActorTvShow, MovieId, TvShowId};

use crate::error::Result;

/// The `movie_actors` and `tv_show_actors` join tables.
///
/// Rows come back in the order they were credited.
#[async_trait]
pub trait CreditsRepository: Send + Sync {
    async fn movies_of_actor(
        &self,
        actor_id: ActorId,
    ) -> Result<Vec<ActorMovie>>;

    async fn cast_of_movie(&self, movie_id: MovieId)
    -> Result<Vec<ActorMovie>>;

    async fn tv_shows_of_actor(
        &self,
        actor_id: ActorId,
    ) -> Result<Vec<ActorTvShow>>;

    async fn cast_of_tv_show(
        &self,
        tv_show_id: TvShowId,
    ) -> Result<Vec<ActorTvShow>>;

    async fn credit_movie(&self, credit: ActorMovie) -> Result<()>;

    async fn credit_tv_show(&self, credit: ActorTvShow) -> Result<()>;
}
