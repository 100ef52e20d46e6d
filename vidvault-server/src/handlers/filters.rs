//! Query-string criteria for movie, show and actor collections.

use serde::Deserialize;
use vidvault_core::{ActorFilter, MediaFilter};

use crate::handlers::envelope::parse_page;
use crate::infra::errors::{AppError, AppResult};

/// `?page=&title=|service=|genre=|year=|actor=`
#[derive(Debug, Default, Deserialize)]
pub struct MediaQuery {
    pub page: Option<String>,
    pub title: Option<String>,
    pub service: Option<String>,
    pub genre: Option<String>,
    pub year: Option<String>,
    pub actor: Option<String>,
}

impl MediaQuery {
    pub fn page_number(&self) -> AppResult<usize> {
        parse_page(self.page.as_deref())
    }

    /// The single requested criterion, or `None` for an unfiltered listing.
    pub fn filter(&self) -> AppResult<Option<MediaFilter>> {
        let candidates = [
            self.title.clone().map(MediaFilter::Title),
            self.service.clone().map(MediaFilter::Service),
            self.genre.clone().map(MediaFilter::Genre),
            self.year.clone().map(MediaFilter::Year),
            self.actor.clone().map(MediaFilter::Actor),
        ];
        single(candidates.into_iter().flatten(), |filter| filter.name())
    }
}

/// `?page=&first_name=|last_name=|full_name=`
#[derive(Debug, Default, Deserialize)]
pub struct ActorQuery {
    pub page: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub full_name: Option<String>,
}

impl ActorQuery {
    pub fn page_number(&self) -> AppResult<usize> {
        parse_page(self.page.as_deref())
    }

    pub fn filter(&self) -> AppResult<Option<ActorFilter>> {
        let candidates = [
            self.first_name
                .clone()
                .map(|v| ("first_name", ActorFilter::FirstName(v))),
            self.last_name
                .clone()
                .map(|v| ("last_name", ActorFilter::LastName(v))),
            self.full_name
                .clone()
                .map(|v| ("full_name", ActorFilter::FullName(v))),
        ];
        Ok(single(candidates.into_iter().flatten(), |(name, _)| *name)?
            .map(|(_, filter)| filter))
    }
}

/// `?q=&page=`
#[derive(Debug, Default, Deserialize)]
pub struct SearchQuery {
    pub q: Option<String>,
    pub page: Option<String>,
}

impl SearchQuery {
    pub fn page_number(&self) -> AppResult<usize> {
        parse_page(self.page.as_deref())
    }

    pub fn term(&self) -> &str {
        self.q.as_deref().unwrap_or_default()
    }
}

fn single<T, I, F>(mut present: I, name: F) -> AppResult<Option<T>>
where
    I: Iterator<Item = T>,
    F: Fn(&T) -> &'static str,
{
    let Some(first) = present.next() else {
        return Ok(None);
    };
    let extra: Vec<&'static str> = present.map(|other| name(&other)).collect();
    if extra.is_empty() {
        return Ok(Some(first));
    }

    Err(AppError::conflicting_filters(format!(
        "only one filter may be given per request; got {} and {}",
        name(&first),
        extra.join(", ")
    )))
}
