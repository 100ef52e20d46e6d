use chrono::{Days, NaiveDate};
use vidvault_model::{CatalogItem, Movie, TvShow};

use crate::error::Result;
use crate::query::service::CatalogService;

/// Whether something added on `date_added` is still within the
/// `recent_days` window ending today.
pub fn is_recent(
    date_added: NaiveDate,
    today: NaiveDate,
    recent_days: u32,
) -> bool {
    match date_added.checked_add_days(Days::new(u64::from(recent_days))) {
        Some(cutoff) => cutoff >= today,
        None => true,
    }
}

impl CatalogService {
    pub async fn recently_added_movies(
        &self,
        recent_days: u32,
    ) -> Result<Vec<Movie>> {
        let today = self.today();
        let movies = self.uow.movies.list_all().await?;
        Ok(movies
            .into_iter()
            .filter(|movie| is_recent(movie.date_added, today, recent_days))
            .collect())
    }

    pub async fn recently_added_tv_shows(
        &self,
        recent_days: u32,
    ) -> Result<Vec<TvShow>> {
        let today = self.today();
        let shows = self.uow.tv_shows.list_all().await?;
        Ok(shows
            .into_iter()
            .filter(|show| is_recent(show.date_added, today, recent_days))
            .collect())
    }

    /// Recent movies followed by recent shows.
    pub async fn recently_added(
        &self,
        recent_days: u32,
    ) -> Result<Vec<CatalogItem>> {
        let movies = self.recently_added_movies(recent_days).await?;
        let shows = self.recently_added_tv_shows(recent_days).await?;
        Ok(movies
            .into_iter()
            .map(CatalogItem::from)
            .chain(shows.into_iter().map(CatalogItem::from))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn window_is_inclusive_of_the_cutoff_day() {
        let today = date(2024, 3, 31);
        assert!(is_recent(date(2024, 3, 1), today, 30));
        assert!(!is_recent(date(2024, 2, 29), today, 30));
        assert!(is_recent(today, today, 0));
    }

    #[test]
    fn future_dates_count_as_recent() {
        assert!(is_recent(date(2024, 4, 10), date(2024, 3, 31), 30));
    }
}
