/// Filterable scalar columns shared by `movies` and `tv_shows`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaColumn {
    Title,
    Year,
    Service,
}

impl MediaColumn {
    pub fn as_sql(self) -> &'static str {
        match self {
            MediaColumn::Title => "title",
            MediaColumn::Year => "year",
            MediaColumn::Service => "service",
        }
    }
}

/// Filterable name columns of `actors`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActorColumn {
    FullName,
    FirstName,
    LastName,
}

impl ActorColumn {
    pub fn as_sql(self) -> &'static str {
        match self {
            ActorColumn::FullName => "full_name",
            ActorColumn::FirstName => "first_name",
            ActorColumn::LastName => "last_name",
        }
    }
}
