/// A single-column criterion for movie and show collections.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MediaFilter {
    /// Case-insensitive substring of the title.
    Title(String),
    /// Exact streaming service name.
    Service(String),
    /// Exact genre name.
    Genre(String),
    /// A positive year; shows match any year they were running.
    Year(String),
    /// Exact actor full name.
    Actor(String),
}

impl MediaFilter {
    pub fn name(&self) -> &'static str {
        match self {
            MediaFilter::Title(_) => "title",
            MediaFilter::Service(_) => "service",
            MediaFilter::Genre(_) => "genre",
            MediaFilter::Year(_) => "year",
            MediaFilter::Actor(_) => "actor",
        }
    }

    pub fn value(&self) -> &str {
        match self {
            MediaFilter::Title(value)
            | MediaFilter::Service(value)
            | MediaFilter::Genre(value)
            | MediaFilter::Year(value)
            | MediaFilter::Actor(value) => value,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActorFilter {
    /// Prefix of the first name.
    FirstName(String),
    /// Prefix of the last name.
    LastName(String),
    /// Substring of the full name.
    FullName(String),
}

/// Treats blank input as "no criterion".
pub(crate) fn non_blank(value: &str) -> Option<&str> {
    if value.trim().is_empty() {
        None
    } else {
        Some(value)
    }
}

/// Accepts only strictly positive integer input, returned untouched so
/// callers compare it verbatim.
pub(crate) fn positive_year(value: &str) -> Option<&str> {
    match value.parse::<i64>() {
        Ok(year) if year > 0 => Some(value),
        _ => None,
    }
}
